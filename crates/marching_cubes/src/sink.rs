//! MeshSink - consumer interface for host renderers.
//!
//! Lets a finished build hand its buffers to engine-specific code (Bevy, a
//! GPU upload path, a file writer) without the core depending on any of
//! them.

/// Receiver of a completed mesh.
///
/// Called once per successful build, in the order vertices, normals,
/// indices. A failed build never reaches the sink.
///
/// # Example (Bevy)
///
/// ```ignore
/// impl MeshSink for Mesh {
///     fn set_vertices(&mut self, vertices: &[[f32; 3]]) {
///         self.insert_attribute(Mesh::ATTRIBUTE_POSITION, vertices.to_vec());
///     }
///     // ...
/// }
/// ```
pub trait MeshSink {
  /// World-space vertex positions.
  fn set_vertices(&mut self, vertices: &[[f32; 3]]);

  /// Unit normals, parallel to the vertices.
  fn set_normals(&mut self, normals: &[[f32; 3]]);

  /// Triangle list indices (3 per triangle).
  fn set_triangle_indices(&mut self, indices: &[u32]);
}

impl<T: MeshSink + ?Sized> MeshSink for &mut T {
  fn set_vertices(&mut self, vertices: &[[f32; 3]]) {
    (**self).set_vertices(vertices);
  }

  fn set_normals(&mut self, normals: &[[f32; 3]]) {
    (**self).set_normals(normals);
  }

  fn set_triangle_indices(&mut self, indices: &[u32]) {
    (**self).set_triangle_indices(indices);
  }
}

/// No-op implementation for testing and headless operation.
pub struct NullSink;

impl MeshSink for NullSink {
  fn set_vertices(&mut self, _vertices: &[[f32; 3]]) {
    // No-op
  }

  fn set_normals(&mut self, _normals: &[[f32; 3]]) {
    // No-op
  }

  fn set_triangle_indices(&mut self, _indices: &[u32]) {
    // No-op
  }
}

/// Sink that keeps owned copies of the last published mesh.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CapturedMesh {
  pub vertices: Vec<[f32; 3]>,
  pub normals: Vec<[f32; 3]>,
  pub indices: Vec<u32>,
  /// Completed publishes received.
  pub publish_count: usize,
}

impl MeshSink for CapturedMesh {
  fn set_vertices(&mut self, vertices: &[[f32; 3]]) {
    self.vertices.clear();
    self.vertices.extend_from_slice(vertices);
  }

  fn set_normals(&mut self, normals: &[[f32; 3]]) {
    self.normals.clear();
    self.normals.extend_from_slice(normals);
  }

  fn set_triangle_indices(&mut self, indices: &[u32]) {
    self.indices.clear();
    self.indices.extend_from_slice(indices);
    self.publish_count += 1;
  }
}
