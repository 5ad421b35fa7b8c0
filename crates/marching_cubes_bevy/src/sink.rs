//! Mesh sink writing into Bevy `Mesh` assets.

use std::ops::DerefMut;

use bevy::asset::RenderAssetUsages;
use bevy::mesh::{Indices, PrimitiveTopology, VertexAttributeValues};
use bevy::prelude::*;
use marching_cubes::{MeshOutput, MeshSink};

/// Writes published buffers into a Bevy mesh.
///
/// Works with `&mut Mesh` and with asset change-tracking wrappers alike.
pub struct BevyMeshSink<M> {
  mesh: M,
}

impl<M: DerefMut<Target = Mesh>> BevyMeshSink<M> {
  pub fn new(mesh: M) -> Self {
    Self { mesh }
  }
}

impl<M: DerefMut<Target = Mesh>> MeshSink for BevyMeshSink<M> {
  fn set_vertices(&mut self, vertices: &[[f32; 3]]) {
    self.mesh.insert_attribute(
      Mesh::ATTRIBUTE_POSITION,
      VertexAttributeValues::Float32x3(vertices.to_vec()),
    );
  }

  fn set_normals(&mut self, normals: &[[f32; 3]]) {
    self.mesh.insert_attribute(
      Mesh::ATTRIBUTE_NORMAL,
      VertexAttributeValues::Float32x3(normals.to_vec()),
    );
  }

  fn set_triangle_indices(&mut self, indices: &[u32]) {
    self.mesh.insert_indices(Indices::U32(indices.to_vec()));
  }
}

/// Convert a mesher output into a new triangle-list mesh.
pub fn mesh_output_to_bevy(output: &MeshOutput) -> Mesh {
  let mut mesh = Mesh::new(
    PrimitiveTopology::TriangleList,
    RenderAssetUsages::default(),
  );

  if output.is_empty() {
    return mesh;
  }

  let mut sink = BevyMeshSink::new(&mut mesh);
  sink.set_vertices(&output.vertices);
  sink.set_normals(&output.normals);
  sink.set_triangle_indices(&output.indices);

  mesh
}
