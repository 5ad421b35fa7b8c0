use super::*;
use crate::field::{ConstantField, FieldFn, PlaneField};

// Reference scalar for test comparison
fn reference_scalar(values: [f32; 8]) -> u8 {
  let mut mask = 0u8;
  for (i, &value) in values.iter().enumerate() {
    if value >= 0.0 {
      mask |= 1 << i;
    }
  }
  mask
}

#[test]
fn test_all_positive() {
  let values = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0];
  assert_eq!(build_mask(&values), Ok(0b11111111));
}

#[test]
fn test_all_negative() {
  let values = [-1.0, -2.0, -3.0, -4.0, -5.0, -6.0, -7.0, -8.0];
  assert_eq!(build_mask(&values), Ok(0b00000000));
}

#[test]
fn test_zero_is_inside() {
  assert_eq!(build_mask(&[0.0; 8]), Ok(0b11111111));
  assert_eq!(build_mask(&[-0.0; 8]), Ok(0b11111111));
}

#[test]
fn test_first_and_last_corner() {
  let mut values = [-1.0; 8];
  values[0] = 1.0;
  assert_eq!(build_mask(&values), Ok(0b00000001));

  let mut values = [-1.0; 8];
  values[7] = 1.0;
  assert_eq!(build_mask(&values), Ok(0b10000000));
}

#[test]
fn test_matches_reference() {
  // Exhaustive check for all patterns
  for pattern in 0u8..=255 {
    let values: [f32; 8] =
      std::array::from_fn(|i| if (pattern >> i) & 1 == 1 { 0.5 } else { -0.5 });
    assert_eq!(
      build_mask(&values),
      Ok(reference_scalar(values)),
      "Mismatch for pattern {:#010b}",
      pattern
    );
    assert_eq!(build_mask(&values), Ok(pattern));
  }
}

#[test]
fn test_nan_sample_rejected() {
  let mut values = [1.0; 8];
  values[3] = f32::NAN;
  match build_mask(&values) {
    Err(ConsistencyError::NonFiniteSample { corner, .. }) => assert_eq!(corner, 3),
    other => panic!("expected NonFiniteSample, got {:?}", other),
  }
}

#[test]
fn test_infinite_sample_rejected() {
  let mut values = [1.0; 8];
  values[5] = f32::NEG_INFINITY;
  assert!(matches!(
    build_mask(&values),
    Err(ConsistencyError::NonFiniteSample { corner: 5, .. })
  ));
}

#[test]
fn test_classify_samples_canonical_corners() {
  // Encode the corner position into the value: x*4 + y*2 + z + 1
  let field = FieldFn(|p: Vec3A| p.x * 4.0 + p.y * 2.0 + p.z + 1.0);
  let cube = classify(&field, Vec3A::ZERO, 1.0).unwrap();

  assert_eq!(cube.values, [1.0, 3.0, 7.0, 5.0, 2.0, 4.0, 8.0, 6.0]);
  assert_eq!(cube.mask, 0xFF);
}

#[test]
fn test_classify_scales_by_step() {
  let field = FieldFn(|p: Vec3A| p.x);
  let cube = classify(&field, Vec3A::new(2.0, 0.0, 0.0), 0.25).unwrap();

  assert_eq!(cube.values[0], 2.0);
  assert_eq!(cube.values[2], 2.25);
  assert_eq!(cube.values[3], 2.25);
  assert_eq!(cube.values[5], 2.0);
}

#[test]
fn test_classify_horizontal_plane() {
  // Bottom corners (y=0) inside: 0, 3, 4, 7
  let cube = classify(&PlaneField::horizontal(0.5), Vec3A::ZERO, 1.0).unwrap();
  assert_eq!(cube.mask, 0b1001_1001);
  assert!(!cube.is_homogeneous());
}

#[test]
fn test_classify_constant_is_homogeneous() {
  let inside = classify(&ConstantField(1.0), Vec3A::ZERO, 1.0).unwrap();
  assert_eq!(inside.mask, 0xFF);
  assert!(inside.is_homogeneous());

  let outside = classify(&ConstantField(-1.0), Vec3A::ZERO, 1.0).unwrap();
  assert_eq!(outside.mask, 0);
  assert!(outside.is_homogeneous());
}
