use rand::rngs::StdRng;
use rand::SeedableRng;

use super::*;

#[test]
fn test_metaball_single_centre_surface_at_radius() {
  let field = MetaballField::new(vec![Vec3A::splat(0.5)]);

  // r²/d² - 1 = 0 at d = r
  let on_surface = field.sample(Vec3A::new(0.6, 0.5, 0.5));
  assert!(on_surface.abs() < 1e-5, "got {}", on_surface);

  assert!(field.sample(Vec3A::new(0.55, 0.5, 0.5)) > 0.0, "inside should be >= 0");
  assert!(field.sample(Vec3A::new(0.9, 0.5, 0.5)) < 0.0, "outside should be < 0");
}

#[test]
fn test_metaball_contributions_add() {
  let a = Vec3A::new(0.4, 0.5, 0.5);
  let b = Vec3A::new(0.6, 0.5, 0.5);
  let both = MetaballField::new(vec![a, b]);
  let single = MetaballField::new(vec![a]);

  let p = Vec3A::new(0.5, 0.5, 0.5);
  // Each centre contributes 0.01 / 0.01 = 1
  assert!((both.sample(p) - 1.0).abs() < 1e-4);
  assert!((single.sample(p) - 0.0).abs() < 1e-4);
}

#[test]
fn test_metaball_singular_sample_is_finite_sentinel() {
  let centre = Vec3A::new(0.25, 0.5, 0.75);
  let field = MetaballField::new(vec![Vec3A::splat(0.5), centre]);

  let value = field.sample(centre);
  assert!(value.is_finite());
  assert_eq!(value, SINGULAR_SENTINEL);
}

#[test]
fn test_metaball_random_is_seeded_and_bounded() {
  let mut rng_a = StdRng::seed_from_u64(42);
  let mut rng_b = StdRng::seed_from_u64(42);
  let a = MetaballField::random(&mut rng_a, 4);
  let b = MetaballField::random(&mut rng_b, 4);

  assert_eq!(a, b, "same seed should produce the same centres");
  assert_eq!(a.centers.len(), 4);
  assert_eq!(a.radius, MetaballField::DEFAULT_RADIUS);
  for c in &a.centers {
    for v in c.to_array() {
      assert!((0.25..=0.75).contains(&v), "centre component {} out of range", v);
    }
  }
}

#[test]
fn test_metaball_no_centres_is_outside_everywhere() {
  let field = MetaballField::new(Vec::new());
  assert_eq!(field.sample(Vec3A::ZERO), -1.0);
}

#[test]
fn test_plane_field() {
  let field = PlaneField::horizontal(0.5);
  assert_eq!(field.sample(Vec3A::new(0.3, 0.0, 0.9)), 0.5);
  assert_eq!(field.sample(Vec3A::new(0.3, 1.0, 0.9)), -0.5);
  assert_eq!(field.sample(Vec3A::new(7.0, 0.5, -3.0)), 0.0);

  let x_plane = PlaneField::new(Axis::X, 2.0);
  assert_eq!(x_plane.sample(Vec3A::new(1.0, 100.0, 100.0)), 1.0);
}

#[test]
fn test_plane_field_every_axis() {
  let point = Vec3A::new(1.0, 2.0, 3.0);
  for (axis, expected) in [(Axis::X, -0.5), (Axis::Y, -1.5), (Axis::Z, -2.5)] {
    let field = PlaneField::new(axis, 0.5);
    assert_eq!(field.sample(point), expected, "axis {:?}", axis);
    assert_eq!(axis.component(point), point[axis.index()]);
  }
}

#[test]
fn test_sphere_field() {
  let field = SphereField::new(Vec3A::ZERO, 1.0);
  assert_eq!(field.sample(Vec3A::ZERO), 1.0);
  assert!(field.sample(Vec3A::new(1.0, 0.0, 0.0)).abs() < 1e-6);
  assert!(field.sample(Vec3A::new(2.0, 0.0, 0.0)) < 0.0);
}

#[test]
fn test_constant_field() {
  let field = ConstantField(1.0);
  assert_eq!(field.sample(Vec3A::ZERO), 1.0);
  assert_eq!(field.sample(Vec3A::splat(123.0)), 1.0);
}

#[test]
fn test_closure_field() {
  let field = FieldFn(|p: Vec3A| 0.5 - p.y);
  assert_eq!(field.sample(Vec3A::new(0.0, 0.25, 0.0)), 0.25);

  // Works through references and boxes too
  let by_ref: &dyn ScalarField = &field;
  assert_eq!(by_ref.sample(Vec3A::new(0.0, 1.0, 0.0)), -0.5);
  let boxed: Box<dyn ScalarField> = Box::new(ConstantField(-2.0));
  assert_eq!(boxed.sample(Vec3A::ZERO), -2.0);
}
