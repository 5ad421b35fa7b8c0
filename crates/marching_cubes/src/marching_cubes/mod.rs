//! Marching Cubes isosurface extraction.
//!
//! Walks every cell of a uniform grid, classifies its 8 corners against the
//! zero level set, and emits the triangles listed by the case table with
//! vertices placed on the crossing edges.
//!
//! # Processing Pipeline
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                        INPUT                                    │
//! │  field: &impl ScalarField  - continuous scalar function         │
//! │  grid: GridConfig          - [min, max]³ split into N³ cells    │
//! │  config: MeshConfig        - parallelism, logging, probe size   │
//! └─────────────────────────────────────────────────────────────────┘
//!                               │
//!                               ▼
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                    PHASE 1: Classification                      │
//! │  For each cell (x outer, y middle, z inner):                    │
//! │    Sample the 8 corners                                         │
//! │    Build the 8-bit sign mask (bit set iff value >= 0)           │
//! │    Early-out if homogeneous (mask == 0 or mask == 255)          │
//! └─────────────────────────────────────────────────────────────────┘
//!                               │
//!                               ▼
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                    PHASE 2: Triangulation                       │
//! │  For each triangle in CASE_TRIANGLES[mask]:                     │
//! │    For each of its 3 edges:                                     │
//! │      Interpolate the crossing point along the edge              │
//! │      Transform to world space: origin + local * step            │
//! │      Estimate the normal by central differences                 │
//! │      Append vertex, normal, and index                           │
//! └─────────────────────────────────────────────────────────────────┘
//!                               │
//!                               ▼
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                        OUTPUT                                   │
//! │  vertices: Vec<[f32; 3]>  - one per triangle corner             │
//! │  normals: Vec<[f32; 3]>   - unit, parallel to vertices          │
//! │  indices: Vec<u32>        - 0..vertices.len()                   │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Parallelism
//!
//! With [`MeshConfig::parallel`] each x-slab of cells is meshed on the rayon
//! pool into its own buffers. Slabs are concatenated in x order with their
//! indices offset by the running vertex count, so the result is identical to
//! the sequential walk.
//!
//! # Consistency Checks
//!
//! Mask overlap, same-sign edges and out-of-range fractions are checked when
//! [`CHECK_INVARIANTS`] is on (debug builds or the `strict` feature). Any
//! failure aborts the build; no partial mesh is returned.

pub mod classify;
pub mod interpolate;
pub mod normal;

use glam::Vec3A;
use rayon::prelude::*;
use smallvec::SmallVec;
use web_time::Instant;

pub use classify::{classify, CubeSample};
pub use interpolate::{edge_fraction, interpolate};

use crate::case_table::{triangles_for, MAX_TRIANGLES};
use crate::error::{ConsistencyError, MeshError};
use crate::field::ScalarField;
use crate::stats::BuildStats;
use crate::types::{GridConfig, MeshConfig, MeshOutput};

/// Internal consistency checks are compiled in.
pub const CHECK_INVARIANTS: bool = cfg!(any(debug_assertions, feature = "strict"));

/// Vertices (with normals) emitted by a single cell.
type CellVertices = SmallVec<[([f32; 3], [f32; 3]); MAX_TRIANGLES * 3]>;

/// Extract the zero isosurface of `field` over `grid`.
///
/// # Errors
///
/// [`MeshError::Config`] if the grid or config is invalid,
/// [`MeshError::TooManyVertices`] if the mesh outgrows `u32` indices,
/// [`MeshError::Consistency`] if a cell fails a consistency check.
pub fn generate<F: ScalarField + ?Sized>(
  field: &F,
  grid: &GridConfig,
  config: &MeshConfig,
) -> Result<MeshOutput, MeshError> {
  generate_timed(field, grid, config).map(|(output, _)| output)
}

/// Same as [`generate`] but also returns build statistics.
#[cfg_attr(feature = "spans", tracing::instrument(skip_all, name = "marching_cubes::generate"))]
pub fn generate_timed<F: ScalarField + ?Sized>(
  field: &F,
  grid: &GridConfig,
  config: &MeshConfig,
) -> Result<(MeshOutput, BuildStats), MeshError> {
  grid.validate()?;
  config.validate()?;

  let start = Instant::now();
  let resolution = grid.resolution;

  let slabs: Vec<(MeshOutput, BuildStats)> = if config.parallel {
    (0..resolution)
      .into_par_iter()
      .map(|x| mesh_slab(field, grid, config, x))
      .collect::<Result<_, _>>()?
  } else {
    (0..resolution)
      .map(|x| mesh_slab(field, grid, config, x))
      .collect::<Result<_, _>>()?
  };

  let mut output = MeshOutput::new();
  let mut stats = BuildStats::default();
  for (slab, slab_stats) in slabs {
    MeshOutput::index_capacity_check(output.vertices.len(), slab.vertices.len())?;
    output.append(slab);
    stats.accumulate(&slab_stats);
  }

  stats.triangle_count = output.triangle_count();
  stats.vertex_count = output.vertices.len();
  stats.elapsed_us = start.elapsed().as_micros() as u64;
  stats.log();

  Ok((output, stats))
}

/// Mesh all cells with x index `x`.
#[cfg_attr(feature = "spans", tracing::instrument(skip_all, name = "marching_cubes::slab"))]
fn mesh_slab<F: ScalarField + ?Sized>(
  field: &F,
  grid: &GridConfig,
  config: &MeshConfig,
  x: u32,
) -> Result<(MeshOutput, BuildStats), MeshError> {
  let resolution = grid.resolution;
  let mut output = MeshOutput::new();
  let mut stats = BuildStats::default();
  let mut cell_vertices = CellVertices::new();

  for y in 0..resolution {
    for z in 0..resolution {
      let cell = [x, y, z];
      stats.cells_visited += 1;

      cell_vertices.clear();
      let degenerate = mesh_cell(field, grid, config, cell, &mut cell_vertices)
        .map_err(|source| MeshError::in_cell(cell, source))?;

      if cell_vertices.is_empty() {
        continue;
      }
      stats.active_cells += 1;
      stats.degenerate_normals += degenerate;

      MeshOutput::index_capacity_check(output.vertices.len(), cell_vertices.len())?;
      for &(position, normal) in &cell_vertices {
        output.push_vertex(position, normal);
      }
    }
  }

  Ok((output, stats))
}

/// Triangulate one cell into `out`.
///
/// Returns how many vertices fell back to the default normal.
fn mesh_cell<F: ScalarField + ?Sized>(
  field: &F,
  grid: &GridConfig,
  config: &MeshConfig,
  cell: [u32; 3],
  out: &mut CellVertices,
) -> Result<u64, ConsistencyError> {
  let step = grid.step();
  let origin = grid.cell_origin(cell);
  let cube = classify(field, origin, step)?;

  if config.log_cells {
    tracing::trace!(?cell, values = ?cube.values, mask = cube.mask, "classified cell");
  }

  if cube.is_homogeneous() {
    return Ok(0);
  }

  let mut degenerate = 0;
  for triangle in triangles_for(cube.mask) {
    for &edge in triangle {
      let local = interpolate(&cube.values, edge as usize)?;
      let position: Vec3A = origin + local * step;

      let normal = match normal::try_compute(field, position, step, config.normal_probe_divisor) {
        Some(normal) => normal,
        None => {
          degenerate += 1;
          normal::FALLBACK
        }
      };

      if config.log_cells {
        tracing::trace!(?cell, edge, position = ?position.to_array(), ?normal, "emitted vertex");
      }

      out.push((position.to_array(), normal));
    }
  }

  Ok(degenerate)
}
