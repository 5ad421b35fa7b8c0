//! Edge crossing interpolation.
//!
//! Places a vertex on a cube edge where the field crosses zero, by linear
//! interpolation between the two corner values.
//!
//! ```text
//!   v0 >= 0                 v1 < 0
//!     c0 ──────────●──────── c1
//!                  t = |v0 / (v1 - v0)|
//! ```
//!
//! With endpoints on opposite sides the fraction always lands in `[0, 1]`;
//! anything else means the classification and the samples disagree.

use glam::Vec3A;

use super::CHECK_INVARIANTS;
use crate::edge_table::{CORNER_POSITIONS, EDGE_CORNERS};
use crate::error::ConsistencyError;

/// Fraction along `v0 → v1` where the field reaches zero.
#[inline]
pub fn edge_fraction(v0: f32, v1: f32) -> f32 {
  (v0 / (v1 - v0)).abs()
}

/// Local cube-space crossing point on `edge`, in `[0, 1]³`.
pub fn interpolate(values: &[f32; 8], edge: usize) -> Result<Vec3A, ConsistencyError> {
  let [c0, c1] = EDGE_CORNERS[edge];
  let (c0, c1) = (c0 as usize, c1 as usize);
  let v0 = values[c0];
  let v1 = values[c1];

  if CHECK_INVARIANTS && (v0 >= 0.0) == (v1 >= 0.0) {
    return Err(ConsistencyError::SameSignEdge { edge, v0, v1 });
  }

  let t = edge_fraction(v0, v1);
  if CHECK_INVARIANTS && !(0.0..=1.0).contains(&t) {
    return Err(ConsistencyError::FractionOutOfRange { edge, t });
  }

  let p0 = CORNER_POSITIONS[c0];
  let p1 = CORNER_POSITIONS[c1];
  Ok(p0 + (p1 - p0) * t)
}

#[cfg(test)]
#[path = "interpolate_test.rs"]
mod interpolate_test;
