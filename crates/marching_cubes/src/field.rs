//! Scalar fields sampled by the mesher.
//!
//! The surface is the zero level set. Values `>= 0` are inside, values
//! `< 0` are outside. Fields must be deterministic: normals are estimated
//! by finite differences, which re-samples around each vertex.
//!
//! These fields are deterministic mathematical functions that are easy to
//! verify. Anything implementing [`ScalarField`] can be meshed, including
//! plain closures wrapped in [`FieldFn`].

use glam::Vec3A;
use rand::Rng;

/// Continuous scalar field evaluated at arbitrary points.
pub trait ScalarField: Send + Sync {
  /// Evaluate the field at a world-space point.
  fn sample(&self, point: Vec3A) -> f32;
}

impl<T: ScalarField + ?Sized> ScalarField for &T {
  #[inline]
  fn sample(&self, point: Vec3A) -> f32 {
    (**self).sample(point)
  }
}

impl<T: ScalarField + ?Sized> ScalarField for Box<T> {
  #[inline]
  fn sample(&self, point: Vec3A) -> f32 {
    (**self).sample(point)
  }
}

/// Adapter turning a closure into a [`ScalarField`].
///
/// ```ignore
/// let field = FieldFn(|p: Vec3A| 0.5 - p.y);
/// ```
#[derive(Clone, Copy)]
pub struct FieldFn<F>(pub F);

impl<F> ScalarField for FieldFn<F>
where
  F: Fn(Vec3A) -> f32 + Send + Sync,
{
  #[inline]
  fn sample(&self, point: Vec3A) -> f32 {
    (self.0)(point)
  }
}

/// Value returned when a sample lands exactly on a metaball centre.
///
/// Large and finite, so differences and comparisons stay well defined.
pub const SINGULAR_SENTINEL: f32 = 1e9;

/// Metaball (blobby) field.
///
/// Each centre contributes `radius² / distance²`; the surface sits where the
/// sum reaches 1:
///
/// ```text
/// f(p) = Σ r² / |c - p|²  -  1
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct MetaballField {
  /// Centres in world coordinates.
  pub centers: Vec<Vec3A>,
  /// Falloff radius shared by all centres.
  pub radius: f32,
}

impl MetaballField {
  /// Default falloff radius.
  pub const DEFAULT_RADIUS: f32 = 0.1;

  /// Create a field from explicit centres with the default radius.
  pub fn new(centers: Vec<Vec3A>) -> Self {
    Self {
      centers,
      radius: Self::DEFAULT_RADIUS,
    }
  }

  pub fn with_radius(mut self, radius: f32) -> Self {
    self.radius = radius;
    self
  }

  /// Draw `count` centres uniformly in `[0.25, 0.75]³`.
  ///
  /// The caller owns the generator, so a seeded RNG reproduces the field.
  pub fn random<R: Rng>(rng: &mut R, count: usize) -> Self {
    let centers = (0..count)
      .map(|_| {
        Vec3A::new(
          rng.random::<f32>() * 0.5 + 0.25,
          rng.random::<f32>() * 0.5 + 0.25,
          rng.random::<f32>() * 0.5 + 0.25,
        )
      })
      .collect();
    Self::new(centers)
  }
}

impl ScalarField for MetaballField {
  fn sample(&self, point: Vec3A) -> f32 {
    let radius_sq = self.radius * self.radius;
    let mut field = 0.0;

    for center in &self.centers {
      let dist_sq = center.distance_squared(point);
      if dist_sq == 0.0 {
        tracing::trace!(?point, "sample coincides with metaball centre");
        return SINGULAR_SENTINEL;
      }
      field += radius_sq / dist_sq;
    }

    field - 1.0
  }
}

/// World axis a [`PlaneField`] is perpendicular to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
  X,
  Y,
  Z,
}

impl Axis {
  #[inline]
  pub const fn index(self) -> usize {
    match self {
      Axis::X => 0,
      Axis::Y => 1,
      Axis::Z => 2,
    }
  }

  /// Component of `point` along this axis.
  #[inline]
  pub fn component(self, point: Vec3A) -> f32 {
    match self {
      Axis::X => point.x,
      Axis::Y => point.y,
      Axis::Z => point.z,
    }
  }
}

/// Axis-aligned plane field: `offset - p[axis]`.
///
/// Inside below the plane, outside above it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlaneField {
  pub axis: Axis,
  /// Plane position along the axis.
  pub offset: f32,
}

impl PlaneField {
  pub fn new(axis: Axis, offset: f32) -> Self {
    Self { axis, offset }
  }

  /// Horizontal plane at `y = height`.
  pub fn horizontal(height: f32) -> Self {
    Self::new(Axis::Y, height)
  }
}

impl ScalarField for PlaneField {
  #[inline]
  fn sample(&self, point: Vec3A) -> f32 {
    self.offset - self.axis.component(point)
  }
}

/// Sphere field: `radius - |p - center|`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SphereField {
  pub center: Vec3A,
  pub radius: f32,
}

impl SphereField {
  pub fn new(center: Vec3A, radius: f32) -> Self {
    Self { center, radius }
  }
}

impl ScalarField for SphereField {
  #[inline]
  fn sample(&self, point: Vec3A) -> f32 {
    self.radius - self.center.distance(point)
  }
}

/// Field with the same value everywhere.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ConstantField(pub f32);

impl ScalarField for ConstantField {
  #[inline]
  fn sample(&self, _point: Vec3A) -> f32 {
    self.0
  }
}

#[cfg(test)]
#[path = "field_test.rs"]
mod field_test;
