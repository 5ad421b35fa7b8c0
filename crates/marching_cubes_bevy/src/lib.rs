//! Bevy presentation layer for marching_cubes.
//!
//! This crate bridges the engine-independent mesher with Bevy: it owns a
//! [`MeshBuilder`] as a resource, rebuilds it on demand, and writes the
//! published buffers into a `Mesh` asset.

pub mod sink;

use std::marker::PhantomData;

use bevy::mesh::PrimitiveTopology;
use bevy::prelude::*;
use marching_cubes::{ConfigError, GridConfig, MeshBuilder, MeshConfig, MetaballField, ScalarField};

pub use sink::{mesh_output_to_bevy, BevyMeshSink};

/// When the isosurface is regenerated.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum RebuildPolicy {
  /// Build once, then only on [`Isosurface::request_rebuild`].
  #[default]
  OnRequest,
  /// Full rebuild every frame (animated fields).
  EveryFrame,
}

/// Builder and rebuild bookkeeping for one isosurface.
#[derive(Resource)]
pub struct Isosurface<F: ScalarField + 'static> {
  pub builder: MeshBuilder<F>,
  pub policy: RebuildPolicy,
  pending: bool,
}

impl<F: ScalarField + 'static> Isosurface<F> {
  /// Wrap a field; the first build happens on the next update.
  pub fn new(field: F, grid: GridConfig) -> Result<Self, ConfigError> {
    Ok(Self {
      builder: MeshBuilder::new(field, grid)?,
      policy: RebuildPolicy::default(),
      pending: true,
    })
  }

  pub fn with_policy(mut self, policy: RebuildPolicy) -> Self {
    self.policy = policy;
    self
  }

  pub fn with_config(mut self, config: MeshConfig) -> Result<Self, ConfigError> {
    self.builder.set_config(config)?;
    Ok(self)
  }

  /// Schedule a rebuild for the next update.
  pub fn request_rebuild(&mut self) {
    self.pending = true;
  }

  fn take_pending(&mut self) -> bool {
    let build = self.pending || self.policy == RebuildPolicy::EveryFrame;
    self.pending = false;
    build
  }
}

impl Isosurface<MetaballField> {
  /// `count` metaballs at random centres in `[0.25, 0.75]³`.
  pub fn random_metaballs(count: usize, grid: GridConfig) -> Result<Self, ConfigError> {
    let field = MetaballField::random(&mut rand::rng(), count);
    Self::new(field, grid)
  }
}

/// Marker for entities that display an [`Isosurface`].
#[derive(Component)]
pub struct IsosurfaceMesh;

/// Rebuilds `Isosurface<F>` and uploads it to every [`IsosurfaceMesh`].
///
/// The resource itself is inserted by the app.
pub struct MarchingCubesPlugin<F> {
  _field: PhantomData<fn() -> F>,
}

impl<F> Default for MarchingCubesPlugin<F> {
  fn default() -> Self {
    Self { _field: PhantomData }
  }
}

impl<F: ScalarField + 'static> Plugin for MarchingCubesPlugin<F> {
  fn build(&self, app: &mut App) {
    app.add_systems(
      Update,
      rebuild_isosurface::<F>.run_if(resource_exists::<Isosurface<F>>),
    );
  }
}

/// Spawn an entity with an empty mesh to receive isosurface builds.
pub fn spawn_isosurface_entity(
  commands: &mut Commands,
  meshes: &mut Assets<Mesh>,
  material: Handle<StandardMaterial>,
  transform: Transform,
) -> Entity {
  let empty_mesh = Mesh::new(PrimitiveTopology::TriangleList, default());

  commands
    .spawn((
      Mesh3d(meshes.add(empty_mesh)),
      MeshMaterial3d(material),
      transform,
      IsosurfaceMesh,
    ))
    .id()
}

/// Run a full rebuild when due and publish it to all isosurface meshes.
///
/// A failed build leaves the previous meshes untouched.
pub fn rebuild_isosurface<F: ScalarField + 'static>(
  mut isosurface: ResMut<Isosurface<F>>,
  mut meshes: ResMut<Assets<Mesh>>,
  targets: Query<&Mesh3d, With<IsosurfaceMesh>>,
) {
  if !isosurface.take_pending() {
    return;
  }

  if isosurface.builder.build().is_err() {
    return;
  }

  for handle in targets.iter() {
    if let Some(mesh) = meshes.get_mut(&handle.0) {
      let mut sink = BevyMeshSink::new(mesh);
      if let Err(err) = isosurface.builder.publish(&mut sink) {
        warn!("Isosurface publish failed: {}", err);
      }
    }
  }

  if let Some(stats) = isosurface.builder.stats() {
    debug!(
      "Isosurface rebuilt: {} triangles, {} active cells, {}us",
      stats.triangle_count, stats.active_cells, stats.elapsed_us
    );
  }
}
