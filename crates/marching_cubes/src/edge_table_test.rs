use super::*;

#[test]
fn test_edge_table_homogeneous() {
  // All corners same sign = no crossings
  assert_eq!(EDGE_TABLE[0], 0, "All outside should have no edges");
  assert_eq!(EDGE_TABLE[255], 0, "All inside should have no edges");
}

#[test]
fn test_edge_table_single_corner() {
  // Single inside corner should activate exactly 3 edges
  for corner in 0..8 {
    let mask = 1u8 << corner;
    let edge_count = EDGE_TABLE[mask as usize].count_ones();
    assert_eq!(
      edge_count, 3,
      "Corner {} should have 3 edges, got {}",
      corner, edge_count
    );
  }
}

#[test]
fn test_edge_table_symmetry() {
  // Complementary corner masks should have same edge mask
  for i in 0..128 {
    assert_eq!(
      EDGE_TABLE[i],
      EDGE_TABLE[255 - i],
      "Edge masks should be symmetric for {} and {}",
      i,
      255 - i
    );
  }
}

#[test]
fn test_edge_table_matches_classic_values() {
  assert_eq!(EDGE_TABLE[1], 0x109);
  assert_eq!(EDGE_TABLE[2], 0x203);
  assert_eq!(EDGE_TABLE[15], 0xf00);
  assert_eq!(EDGE_TABLE[153], 0x055);
}

#[test]
fn test_edge_corners_validity() {
  for edge in &EDGE_CORNERS {
    assert!(edge[0] < 8);
    assert!(edge[1] < 8);
    assert_ne!(edge[0], edge[1]);
  }
}

#[test]
fn test_edges_differ_in_one_axis() {
  for (i, &[c0, c1]) in EDGE_CORNERS.iter().enumerate() {
    let delta = CORNER_POSITIONS[c1 as usize] - CORNER_POSITIONS[c0 as usize];
    let changed = delta.to_array().iter().filter(|d| **d != 0.0).count();
    assert_eq!(changed, 1, "edge {} spans {} axes", i, changed);
  }
}

#[test]
fn test_corner_order() {
  let expected = [
    [0.0, 0.0, 0.0],
    [0.0, 1.0, 0.0],
    [1.0, 1.0, 0.0],
    [1.0, 0.0, 0.0],
    [0.0, 0.0, 1.0],
    [0.0, 1.0, 1.0],
    [1.0, 1.0, 1.0],
    [1.0, 0.0, 1.0],
  ];
  for (corner, position) in expected.iter().enumerate() {
    assert_eq!(&CORNER_POSITIONS[corner].to_array(), position, "corner {} mismatch", corner);
  }
}

#[test]
fn test_edge_crosses() {
  assert!(edge_crosses(1, 0));
  assert!(edge_crosses(1, 3));
  assert!(edge_crosses(1, 8));
  assert!(!edge_crosses(1, 5));
}
