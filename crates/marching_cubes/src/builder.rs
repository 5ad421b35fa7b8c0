//! Stateful mesh builder for hosts.
//!
//! Owns a field, a grid and the buffers of the last successful build.
//!
//! ```text
//!           build() ok
//!   Idle ──► Building ──► Built ──► publish(sink)
//!    ▲          │           │
//!    │  error   │           │ build() / field or grid changed
//!    └──────────┘◄──────────┘
//! ```
//!
//! The core has no notion of frames: a host with an animated field mutates
//! it through [`MeshBuilder::field_mut`] and calls [`MeshBuilder::build`]
//! once per cycle, which regenerates all buffers from scratch.

use crate::error::{ConfigError, MeshError};
use crate::field::ScalarField;
use crate::marching_cubes::generate_timed;
use crate::sink::MeshSink;
use crate::stats::BuildStats;
use crate::types::{GridConfig, MeshConfig, MeshOutput};

/// Lifecycle of a [`MeshBuilder`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum BuildState {
  /// No valid output.
  #[default]
  Idle,
  /// A build is in progress.
  Building,
  /// Output reflects the current field and grid.
  Built,
}

/// Builds and publishes Marching Cubes meshes for one field.
pub struct MeshBuilder<F: ScalarField> {
  field: F,
  grid: GridConfig,
  config: MeshConfig,
  state: BuildState,
  output: MeshOutput,
  stats: Option<BuildStats>,
}

impl<F: ScalarField> MeshBuilder<F> {
  /// Create an idle builder. The grid is validated up front.
  pub fn new(field: F, grid: GridConfig) -> Result<Self, ConfigError> {
    grid.validate()?;
    Ok(Self {
      field,
      grid,
      config: MeshConfig::default(),
      state: BuildState::Idle,
      output: MeshOutput::new(),
      stats: None,
    })
  }

  /// Set the mesh settings. They are checked on the next build.
  pub fn with_config(mut self, config: MeshConfig) -> Self {
    self.config = config;
    self
  }

  pub fn state(&self) -> BuildState {
    self.state
  }

  pub fn grid(&self) -> &GridConfig {
    &self.grid
  }

  /// Replace the grid. Invalidates any built output.
  pub fn set_grid(&mut self, grid: GridConfig) -> Result<(), ConfigError> {
    grid.validate()?;
    self.grid = grid;
    self.invalidate();
    Ok(())
  }

  pub fn config(&self) -> &MeshConfig {
    &self.config
  }

  /// Replace the mesh settings. Invalidates any built output.
  pub fn set_config(&mut self, config: MeshConfig) -> Result<(), ConfigError> {
    config.validate()?;
    self.config = config;
    self.invalidate();
    Ok(())
  }

  pub fn field(&self) -> &F {
    &self.field
  }

  /// Mutable access to the field. Invalidates any built output.
  pub fn field_mut(&mut self) -> &mut F {
    self.invalidate();
    &mut self.field
  }

  /// Replace the field. Invalidates any built output.
  pub fn set_field(&mut self, field: F) {
    self.field = field;
    self.invalidate();
  }

  /// Regenerate all buffers from the current field and grid.
  ///
  /// On failure the partial output is discarded and the builder returns to
  /// [`BuildState::Idle`].
  #[cfg_attr(feature = "spans", tracing::instrument(skip_all, name = "builder::build"))]
  pub fn build(&mut self) -> Result<&MeshOutput, MeshError> {
    self.state = BuildState::Building;
    self.output.clear();

    match generate_timed(&self.field, &self.grid, &self.config) {
      Ok((output, stats)) => {
        self.output = output;
        self.stats = Some(stats);
        self.state = BuildState::Built;
        Ok(&self.output)
      }
      Err(err) => {
        tracing::warn!(%err, resolution = self.grid.resolution, "mesh build failed");
        self.state = BuildState::Idle;
        Err(err)
      }
    }
  }

  /// Output of the last build, if it is still current.
  pub fn output(&self) -> Option<&MeshOutput> {
    (self.state == BuildState::Built).then_some(&self.output)
  }

  /// Statistics of the last successful build.
  pub fn stats(&self) -> Option<&BuildStats> {
    self.stats.as_ref()
  }

  /// Hand the built buffers to `sink`.
  ///
  /// Only valid in [`BuildState::Built`]; otherwise the sink is untouched.
  pub fn publish<S: MeshSink + ?Sized>(&self, sink: &mut S) -> Result<(), MeshError> {
    if self.state != BuildState::Built {
      return Err(MeshError::NotBuilt);
    }

    sink.set_vertices(&self.output.vertices);
    sink.set_normals(&self.output.normals);
    sink.set_triangle_indices(&self.output.indices);
    Ok(())
  }

  fn invalidate(&mut self) {
    if self.state == BuildState::Built {
      self.output.clear();
      self.state = BuildState::Idle;
    }
  }
}

#[cfg(test)]
#[path = "builder_test.rs"]
mod builder_test;
