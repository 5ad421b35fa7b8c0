//! Cube classification.
//!
//! Samples the field at the 8 corners of a cell and builds the 8-bit sign
//! mask. Bit `i` is set when corner `i` is inside (value `>= 0`):
//!
//! ```text
//! Bit 0: corner (0,0,0)    Bit 4: corner (0,0,1)
//! Bit 1: corner (0,1,0)    Bit 5: corner (0,1,1)
//! Bit 2: corner (1,1,0)    Bit 6: corner (1,1,1)
//! Bit 3: corner (1,0,0)    Bit 7: corner (1,0,1)
//! ```

use glam::Vec3A;

use super::CHECK_INVARIANTS;
use crate::edge_table::CORNER_POSITIONS;
use crate::error::ConsistencyError;
use crate::field::ScalarField;

/// Corner samples and sign mask of one cell.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CubeSample {
  /// Field values in canonical corner order.
  pub values: [f32; 8],
  /// Bit `i` set iff `values[i] >= 0`.
  pub mask: u8,
}

impl CubeSample {
  /// All corners on the same side of the surface.
  #[inline]
  pub fn is_homogeneous(&self) -> bool {
    self.mask == 0 || self.mask == u8::MAX
  }
}

/// Sample the 8 corners of the cell whose minimum corner is `origin`.
pub fn classify<F: ScalarField + ?Sized>(
  field: &F,
  origin: Vec3A,
  step: f32,
) -> Result<CubeSample, ConsistencyError> {
  let values: [f32; 8] = std::array::from_fn(|i| field.sample(origin + CORNER_POSITIONS[i] * step));
  let mask = build_mask(&values)?;
  Ok(CubeSample { values, mask })
}

/// Build the sign mask from corner values.
///
/// Non-finite values cannot be classified and are always rejected.
pub fn build_mask(values: &[f32; 8]) -> Result<u8, ConsistencyError> {
  let mut mask = 0u8;

  for (corner, &value) in values.iter().enumerate() {
    if !value.is_finite() {
      return Err(ConsistencyError::NonFiniteSample { corner, value });
    }

    let delta = u8::from(value >= 0.0) << corner;
    if CHECK_INVARIANTS && mask & delta != 0 {
      return Err(ConsistencyError::OverlappingMaskBits { corner, mask });
    }
    mask |= delta;
  }

  Ok(mask)
}

#[cfg(test)]
#[path = "classify_test.rs"]
mod classify_test;
