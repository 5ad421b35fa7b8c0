use super::*;

// Grid configuration tests
#[test]
fn test_default_grid_is_unit_cube() {
  let grid = GridConfig::default();
  assert_eq!(grid.min, 0.0);
  assert_eq!(grid.max, 1.0);
  assert_eq!(grid.resolution, 100);
  assert!((grid.step() - 0.01).abs() < 1e-7);
  assert!(grid.validate().is_ok());
}

#[test]
fn test_zero_resolution_rejected() {
  let grid = GridConfig::new(0.0, 1.0, 0);
  assert_eq!(grid.validate(), Err(ConfigError::ZeroResolution));
}

#[test]
fn test_degenerate_bounds_rejected() {
  let flat = GridConfig::new(1.0, 1.0, 4);
  assert_eq!(
    flat.validate(),
    Err(ConfigError::DegenerateBounds { min: 1.0, max: 1.0 })
  );

  let inverted = GridConfig::new(2.0, -2.0, 4);
  assert!(matches!(
    inverted.validate(),
    Err(ConfigError::DegenerateBounds { .. })
  ));
}

#[test]
fn test_non_finite_bounds_rejected() {
  let grid = GridConfig::new(0.0, f32::INFINITY, 4);
  assert_eq!(grid.validate(), Err(ConfigError::NonFiniteBounds));

  let grid = GridConfig::new(f32::NAN, 1.0, 4);
  assert_eq!(grid.validate(), Err(ConfigError::NonFiniteBounds));
}

#[test]
fn test_cell_origin() {
  let grid = GridConfig::new(-1.0, 1.0, 4);
  assert_eq!(grid.step(), 0.5);
  assert_eq!(grid.cell_origin([0, 0, 0]).to_array(), [-1.0, -1.0, -1.0]);
  assert_eq!(grid.cell_origin([1, 2, 3]).to_array(), [-0.5, 0.0, 0.5]);
  assert_eq!(grid.cell_count(), 64);
}

#[test]
fn test_grid_builder() {
  let grid = GridConfig::default().with_bounds(-2.0, 2.0).with_resolution(8);
  assert_eq!(grid, GridConfig::new(-2.0, 2.0, 8));
}

// General types tests
#[test]
fn test_aabb_encapsulate() {
  let mut aabb = MinMaxAABB::empty();
  aabb.encapsulate([1.0, 2.0, 3.0]);
  aabb.encapsulate([-1.0, -2.0, -3.0]);

  assert_eq!(aabb.min, [-1.0, -2.0, -3.0]);
  assert_eq!(aabb.max, [1.0, 2.0, 3.0]);
  assert!(aabb.is_valid());
}

#[test]
fn test_aabb_merge_with_empty_is_noop() {
  let mut aabb = MinMaxAABB::empty();
  aabb.encapsulate([0.5, 0.5, 0.5]);
  aabb.merge(&MinMaxAABB::empty());

  assert_eq!(aabb.min, [0.5, 0.5, 0.5]);
  assert_eq!(aabb.max, [0.5, 0.5, 0.5]);
}

#[test]
fn test_mesh_output_clear() {
  let mut output = MeshOutput::new();
  output.push_vertex([0.0; 3], [0.0, 1.0, 0.0]);
  output.clear();

  assert!(output.is_empty());
  assert!(output.normals.is_empty());
  assert_eq!(output.triangle_count(), 0);
  assert!(!output.bounds.is_valid());
}

#[test]
fn test_mesh_output_append_offsets_indices() {
  let mut a = MeshOutput::new();
  for i in 0..3 {
    a.push_vertex([i as f32, 0.0, 0.0], [0.0, 1.0, 0.0]);
  }
  let mut b = MeshOutput::new();
  for i in 0..3 {
    b.push_vertex([0.0, i as f32, 0.0], [1.0, 0.0, 0.0]);
  }

  a.append(b);

  assert_eq!(a.indices, vec![0, 1, 2, 3, 4, 5]);
  assert_eq!(a.vertices.len(), 6);
  assert_eq!(a.normals.len(), 6);
  assert_eq!(a.triangle_count(), 2);
  assert_eq!(a.bounds.max, [2.0, 2.0, 0.0]);
}

#[test]
fn test_mesh_config_builder() {
  let config = MeshConfig::new()
    .with_parallel(false)
    .with_cell_logging(true)
    .with_normal_probe_divisor(4.0);

  assert!(!config.parallel);
  assert!(config.log_cells);
  assert_eq!(config.normal_probe_divisor, 4.0);
}

#[test]
fn test_mesh_config_rejects_bad_divisor() {
  assert!(MeshConfig::default().validate().is_ok());
  assert!(MeshConfig::default().with_normal_probe_divisor(0.5).validate().is_ok());

  for divisor in [0.0, -0.0, -10.0, f32::NAN, f32::INFINITY] {
    let config = MeshConfig::default().with_normal_probe_divisor(divisor);
    assert!(
      matches!(config.validate(), Err(ConfigError::InvalidProbeDivisor { .. })),
      "divisor {} accepted",
      divisor
    );
  }
}

#[test]
fn test_index_capacity_check() {
  let limit = u32::MAX as usize;
  assert!(MeshOutput::index_capacity_check(0, 0).is_ok());
  assert!(MeshOutput::index_capacity_check(10, 5).is_ok());
  assert!(MeshOutput::index_capacity_check(limit - 1, 1).is_ok());

  assert_eq!(
    MeshOutput::index_capacity_check(limit, 1),
    Err(MeshError::TooManyVertices { count: limit + 1 })
  );
  assert!(matches!(
    MeshOutput::index_capacity_check(usize::MAX, 1),
    Err(MeshError::TooManyVertices { .. })
  ));
}
