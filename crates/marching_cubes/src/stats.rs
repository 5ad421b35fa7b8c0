//! Per-build counters.

/// Statistics from one mesh build.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuildStats {
  /// Cells classified (`resolution³`).
  pub cells_visited: u64,
  /// Cells whose corners straddle the surface.
  pub active_cells: u64,
  /// Triangles emitted.
  pub triangle_count: usize,
  /// Vertices emitted (three per triangle).
  pub vertex_count: usize,
  /// Vertices that received the fallback normal.
  pub degenerate_normals: u64,
  /// Wall time of the build in microseconds.
  pub elapsed_us: u64,
}

impl BuildStats {
  /// Fold counters from a sub-range of the grid into this total.
  pub fn accumulate(&mut self, other: &BuildStats) {
    self.cells_visited += other.cells_visited;
    self.active_cells += other.active_cells;
    self.degenerate_normals += other.degenerate_normals;
  }

  /// Emit the build summary at `debug` level.
  pub fn log(&self) {
    tracing::debug!(
      cells = self.cells_visited,
      active = self.active_cells,
      triangles = self.triangle_count,
      vertices = self.vertex_count,
      degenerate_normals = self.degenerate_normals,
      elapsed_us = self.elapsed_us,
      "marching cubes build complete"
    );
  }
}
