use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::*;

fn approx_eq(a: Vec3A, b: [f32; 3], epsilon: f32) -> bool {
  (a.x - b[0]).abs() < epsilon && (a.y - b[1]).abs() < epsilon && (a.z - b[2]).abs() < epsilon
}

/// Values with only corner `inside` at `>= 0`.
fn single_inside(inside: usize, value: f32, rest: f32) -> [f32; 8] {
  let mut values = [rest; 8];
  values[inside] = value;
  values
}

#[test]
fn test_fraction_midpoint() {
  assert_eq!(edge_fraction(1.0, -1.0), 0.5);
  assert_eq!(edge_fraction(-1.0, 1.0), 0.5);
}

#[test]
fn test_fraction_endpoints() {
  // Zero counts as inside, so a zero endpoint pins the crossing there
  assert_eq!(edge_fraction(0.0, -2.0), 0.0);
  assert_eq!(edge_fraction(-2.0, 0.0), 1.0);
}

#[test]
fn test_fraction_weighted() {
  // Crossing sits closer to the smaller magnitude
  assert!((edge_fraction(3.0, -1.0) - 0.75).abs() < 1e-6);
  assert!((edge_fraction(-1.0, 3.0) - 0.25).abs() < 1e-6);
}

#[test]
fn test_fraction_in_unit_range_for_opposite_signs() {
  let mut rng = StdRng::seed_from_u64(7);

  for _ in 0..100_000 {
    let a = 10f32.powf(rng.random_range(-30.0..30.0));
    let b = 10f32.powf(rng.random_range(-30.0..30.0));
    let (v0, v1) = if rng.random::<bool>() { (a, -b) } else { (-a, b) };

    let t = edge_fraction(v0, v1);
    assert!(
      (0.0..=1.0).contains(&t),
      "t = {} out of range for v0 = {}, v1 = {}",
      t,
      v0,
      v1
    );
  }
}

#[test]
fn test_fraction_near_zero_magnitudes() {
  let tiny = f32::MIN_POSITIVE;
  for (v0, v1) in [(tiny, -tiny), (-tiny, tiny), (0.0, -tiny), (tiny, -1e30), (-1e30, tiny)] {
    let t = edge_fraction(v0, v1);
    assert!((0.0..=1.0).contains(&t), "t = {} for ({}, {})", t, v0, v1);
  }
}

#[test]
fn test_interpolate_edge_0() {
  // Edge 0 runs from corner 0 (0,0,0) to corner 1 (0,1,0)
  let values = single_inside(0, 1.0, -3.0);
  let p = interpolate(&values, 0).unwrap();
  assert!(approx_eq(p, [0.0, 0.25, 0.0], 1e-6), "got {:?}", p);
}

#[test]
fn test_interpolate_follows_edge_direction() {
  // Edge 3 runs from corner 3 (1,0,0) back to corner 0 (0,0,0)
  let values = single_inside(0, 1.0, -1.0);
  let p = interpolate(&values, 3).unwrap();
  assert!(approx_eq(p, [0.5, 0.0, 0.0], 1e-6), "got {:?}", p);

  // Edge 8 runs from corner 0 up the Z axis to corner 4
  let values = single_inside(0, 3.0, -1.0);
  let p = interpolate(&values, 8).unwrap();
  assert!(approx_eq(p, [0.0, 0.0, 0.75], 1e-6), "got {:?}", p);
}

#[test]
fn test_interpolate_stays_in_unit_cube() {
  let mut rng = StdRng::seed_from_u64(99);

  for _ in 0..10_000 {
    let values: [f32; 8] = std::array::from_fn(|_| rng.random_range(-1.0..1.0));
    for (edge, &[c0, c1]) in EDGE_CORNERS.iter().enumerate() {
      let (v0, v1) = (values[c0 as usize], values[c1 as usize]);
      if (v0 >= 0.0) == (v1 >= 0.0) {
        continue;
      }
      let p = interpolate(&values, edge).unwrap();
      for c in p.to_array() {
        assert!((0.0..=1.0).contains(&c), "edge {} gave {:?}", edge, p);
      }
    }
  }
}

#[cfg(any(debug_assertions, feature = "strict"))]
#[test]
fn test_same_sign_edge_rejected() {
  let values = [1.0; 8];
  assert_eq!(
    interpolate(&values, 4),
    Err(ConsistencyError::SameSignEdge {
      edge: 4,
      v0: 1.0,
      v1: 1.0
    })
  );

  let values = [-1.0; 8];
  assert!(matches!(
    interpolate(&values, 0),
    Err(ConsistencyError::SameSignEdge { edge: 0, .. })
  ));
}

#[cfg(any(debug_assertions, feature = "strict"))]
#[test]
fn test_overflowing_fraction_rejected() {
  // inf / -inf is NaN, which is not a valid fraction
  let mut values = [-f32::INFINITY; 8];
  values[0] = f32::INFINITY;
  assert!(matches!(
    interpolate(&values, 0),
    Err(ConsistencyError::FractionOutOfRange { edge: 0, .. })
  ));
}
