//! Error types for grid configuration and mesh extraction.

use thiserror::Error;

/// Internal consistency failure detected while processing a cube.
///
/// These indicate a bug in the case table or a misbehaving field, never an
/// expected runtime condition. A build that hits one is aborted.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ConsistencyError {
  #[error("corner {corner} sets a bit already present in mask {mask:#010b}")]
  OverlappingMaskBits { corner: usize, mask: u8 },

  #[error("corner {corner} sampled a non-classifiable value {value}")]
  NonFiniteSample { corner: usize, value: f32 },

  #[error("edge {edge} endpoints share a sign ({v0}, {v1})")]
  SameSignEdge { edge: usize, v0: f32, v1: f32 },

  #[error("edge {edge} interpolation fraction {t} is outside [0, 1]")]
  FractionOutOfRange { edge: usize, t: f32 },
}

/// Rejected grid configuration.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ConfigError {
  #[error("grid resolution must be at least 1")]
  ZeroResolution,

  #[error("grid bounds [{min}, {max}] have no positive extent")]
  DegenerateBounds { min: f32, max: f32 },

  #[error("grid bounds must be finite")]
  NonFiniteBounds,

  #[error("normal probe divisor {divisor} must be finite and positive")]
  InvalidProbeDivisor { divisor: f32 },
}

/// Failure of a mesh build.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum MeshError {
  #[error("invalid configuration: {0}")]
  Config(#[from] ConfigError),

  #[error("consistency check failed in cell {cell:?}: {source}")]
  Consistency {
    cell: [u32; 3],
    #[source]
    source: ConsistencyError,
  },

  #[error("no completed build to publish")]
  NotBuilt,

  #[error("mesh of {count} vertices cannot be indexed with u32")]
  TooManyVertices { count: usize },
}

impl MeshError {
  /// Attach the failing cell to a consistency error.
  pub fn in_cell(cell: [u32; 3], source: ConsistencyError) -> Self {
    Self::Consistency { cell, source }
  }
}
