//! Core data types for Marching Cubes meshing.

use glam::Vec3A;

use crate::error::{ConfigError, MeshError};

/// Axis-aligned cubic sampling region subdivided into `resolution³` cells.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridConfig {
  /// Minimum coordinate on every axis.
  pub min: f32,
  /// Maximum coordinate on every axis.
  pub max: f32,
  /// Cells per axis.
  pub resolution: u32,
}

impl Default for GridConfig {
  fn default() -> Self {
    Self {
      min: 0.0,
      max: 1.0,
      resolution: 100,
    }
  }
}

impl GridConfig {
  pub fn new(min: f32, max: f32, resolution: u32) -> Self {
    Self { min, max, resolution }
  }

  pub fn with_bounds(mut self, min: f32, max: f32) -> Self {
    self.min = min;
    self.max = max;
    self
  }

  pub fn with_resolution(mut self, resolution: u32) -> Self {
    self.resolution = resolution;
    self
  }

  /// Reject configurations that cannot produce a grid.
  pub fn validate(&self) -> Result<(), ConfigError> {
    if self.resolution == 0 {
      return Err(ConfigError::ZeroResolution);
    }
    if !self.min.is_finite() || !self.max.is_finite() {
      return Err(ConfigError::NonFiniteBounds);
    }
    if self.step() <= 0.0 {
      return Err(ConfigError::DegenerateBounds {
        min: self.min,
        max: self.max,
      });
    }
    Ok(())
  }

  /// Edge length of one cell.
  #[inline]
  pub fn step(&self) -> f32 {
    (self.max - self.min) / self.resolution as f32
  }

  /// World-space minimum corner of cell `[i, j, k]`.
  #[inline]
  pub fn cell_origin(&self, cell: [u32; 3]) -> Vec3A {
    let step = self.step();
    Vec3A::new(
      self.min + cell[0] as f32 * step,
      self.min + cell[1] as f32 * step,
      self.min + cell[2] as f32 * step,
    )
  }

  /// Total number of cells.
  #[inline]
  pub fn cell_count(&self) -> u64 {
    let n = self.resolution as u64;
    n * n * n
  }
}

/// Configuration for mesh generation.
#[derive(Clone, Debug)]
pub struct MeshConfig {
  /// Split the grid into slabs processed on the rayon pool.
  pub parallel: bool,

  /// Emit per-cell `trace` events (corner samples, masks, vertices).
  /// Intended for tiny grids only.
  pub log_cells: bool,

  /// Normal probe offset is `step / normal_probe_divisor`.
  pub normal_probe_divisor: f32,
}

impl Default for MeshConfig {
  fn default() -> Self {
    Self {
      parallel: true,
      log_cells: false,
      normal_probe_divisor: 10.0,
    }
  }
}

impl MeshConfig {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn with_parallel(mut self, parallel: bool) -> Self {
    self.parallel = parallel;
    self
  }

  pub fn with_cell_logging(mut self, log_cells: bool) -> Self {
    self.log_cells = log_cells;
    self
  }

  pub fn with_normal_probe_divisor(mut self, divisor: f32) -> Self {
    self.normal_probe_divisor = divisor;
    self
  }

  /// Reject settings that would corrupt the output.
  pub fn validate(&self) -> Result<(), ConfigError> {
    let divisor = self.normal_probe_divisor;
    if !divisor.is_finite() || divisor <= 0.0 {
      return Err(ConfigError::InvalidProbeDivisor { divisor });
    }
    Ok(())
  }
}

/// Axis-aligned bounding box.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MinMaxAABB {
  pub min: [f32; 3],
  pub max: [f32; 3],
}

impl MinMaxAABB {
  /// Create AABB with inverted extents (ready for encapsulation).
  pub fn empty() -> Self {
    Self {
      min: [f32::INFINITY; 3],
      max: [f32::NEG_INFINITY; 3],
    }
  }

  /// Expand AABB to include a point.
  #[inline]
  pub fn encapsulate(&mut self, point: [f32; 3]) {
    for i in 0..3 {
      self.min[i] = self.min[i].min(point[i]);
      self.max[i] = self.max[i].max(point[i]);
    }
  }

  /// Expand AABB to include another box.
  #[inline]
  pub fn merge(&mut self, other: &MinMaxAABB) {
    for i in 0..3 {
      self.min[i] = self.min[i].min(other.min[i]);
      self.max[i] = self.max[i].max(other.max[i]);
    }
  }

  /// Check if AABB is valid (min <= max on all axes).
  pub fn is_valid(&self) -> bool {
    self.min[0] <= self.max[0] && self.min[1] <= self.max[1] && self.min[2] <= self.max[2]
  }
}

impl Default for MinMaxAABB {
  fn default() -> Self {
    Self::empty()
  }
}

/// Mesh generation result.
///
/// `vertices` and `normals` are parallel; every triangle corner owns a fresh
/// vertex, so `indices` is simply `0..vertices.len()` in emission order.
#[derive(Clone, Debug, Default)]
pub struct MeshOutput {
  /// Vertex positions in world space.
  pub vertices: Vec<[f32; 3]>,

  /// Unit surface normals (parallel to vertices).
  pub normals: Vec<[f32; 3]>,

  /// Triangle indices (3 indices per triangle).
  pub indices: Vec<u32>,

  /// Bounding box encompassing all vertices.
  pub bounds: MinMaxAABB,
}

impl MeshOutput {
  pub fn new() -> Self {
    Self::default()
  }

  /// Clear all buffers, preserving capacity.
  pub fn clear(&mut self) {
    self.vertices.clear();
    self.normals.clear();
    self.indices.clear();
    self.bounds = MinMaxAABB::empty();
  }

  /// Returns true if no geometry was generated.
  pub fn is_empty(&self) -> bool {
    self.vertices.is_empty()
  }

  /// Number of triangles in the mesh.
  pub fn triangle_count(&self) -> usize {
    self.indices.len() / 3
  }

  /// Error unless `existing + added` vertices are all addressable by a
  /// `u32` index.
  pub fn index_capacity_check(existing: usize, added: usize) -> Result<(), MeshError> {
    match existing.checked_add(added) {
      Some(count) if count <= u32::MAX as usize => Ok(()),
      Some(count) => Err(MeshError::TooManyVertices { count }),
      None => Err(MeshError::TooManyVertices { count: usize::MAX }),
    }
  }

  /// Append one vertex, its normal, and its index.
  ///
  /// Callers keep the vertex count within `u32` range (see
  /// [`MeshOutput::index_capacity_check`]).
  #[inline]
  pub fn push_vertex(&mut self, position: [f32; 3], normal: [f32; 3]) {
    debug_assert!(self.vertices.len() < u32::MAX as usize);
    let index = self.vertices.len() as u32;
    self.indices.push(index);
    self.vertices.push(position);
    self.normals.push(normal);
    self.bounds.encapsulate(position);
  }

  /// Append another mesh, offsetting its indices past our vertices.
  pub fn append(&mut self, other: MeshOutput) {
    debug_assert!(self.vertices.len() + other.vertices.len() <= u32::MAX as usize);
    let offset = self.vertices.len() as u32;
    self.indices.extend(other.indices.iter().map(|&i| i + offset));
    self.vertices.extend(other.vertices);
    self.normals.extend(other.normals);
    self.bounds.merge(&other.bounds);
  }
}

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;
