//! Vertex normals from the field gradient.
//!
//! Central differences around the vertex position, probed at a fraction of
//! the cell size. The field is `>= 0` inside, so the outward normal is the
//! negated gradient:
//!
//! ```text
//! n.x = f(p - dx) - f(p + dx)
//! n.y = f(p - dy) - f(p + dy)
//! n.z = f(p - dz) - f(p + dz)
//! ```

use glam::Vec3A;

use crate::field::ScalarField;

/// Returned when the gradient vanishes or is not finite.
pub const FALLBACK: [f32; 3] = [0.0, 1.0, 0.0];

/// Outward unit normal at `point`, or `None` for a degenerate gradient.
#[inline]
pub fn try_compute<F: ScalarField + ?Sized>(
  field: &F,
  point: Vec3A,
  step: f32,
  divisor: f32,
) -> Option<[f32; 3]> {
  let d = step / divisor;

  let gradient = Vec3A::new(
    field.sample(point - Vec3A::X * d) - field.sample(point + Vec3A::X * d),
    field.sample(point - Vec3A::Y * d) - field.sample(point + Vec3A::Y * d),
    field.sample(point - Vec3A::Z * d) - field.sample(point + Vec3A::Z * d),
  );

  let len_sq = gradient.length_squared();
  if !len_sq.is_finite() || len_sq < 1e-12 {
    return None;
  }

  Some((gradient * len_sq.sqrt().recip()).to_array())
}

/// Outward unit normal at `point`, falling back to up.
#[inline]
pub fn compute<F: ScalarField + ?Sized>(field: &F, point: Vec3A, step: f32, divisor: f32) -> [f32; 3] {
  try_compute(field, point, step, divisor).unwrap_or(FALLBACK)
}

#[cfg(test)]
#[path = "normal_test.rs"]
mod normal_test;
