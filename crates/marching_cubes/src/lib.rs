//! marching_cubes - Engine independent isosurface extraction
//!
//! This crate turns a continuous scalar field into a triangle mesh using the
//! classic Marching Cubes algorithm. The field is sampled over a uniform
//! cubic grid; the surface is its zero level set, with values `>= 0` inside.
//!
//! # Features
//!
//! - **Marching Cubes**: 256-case triangulation table with linear edge
//!   interpolation and central-difference normals
//! - **Pluggable fields**: anything implementing [`ScalarField`], including
//!   closures, plus reference metaball, plane and sphere fields
//! - **Parallel slabs**: rayon-parallel extraction with output identical to
//!   the sequential walk
//! - **Host adapters**: [`MeshBuilder`] lifecycle and the [`MeshSink`]
//!   interface for handing buffers to a renderer
//!
//! # Example
//!
//! ```ignore
//! use marching_cubes::{GridConfig, MeshBuilder, MetaballField, CapturedMesh};
//!
//! let field = MetaballField::random(&mut rand::rng(), 4);
//! let mut builder = MeshBuilder::new(field, GridConfig::default())?;
//!
//! let output = builder.build()?;
//! println!("Generated {} vertices, {} triangles",
//!     output.vertices.len(), output.triangle_count());
//!
//! let mut sink = CapturedMesh::default();
//! builder.publish(&mut sink)?;
//! ```

pub mod case_table;
pub mod edge_table;
pub mod error;
pub mod field;
pub mod types;

// Re-export commonly used items
pub use case_table::{triangle_count, triangles_for, MAX_TRIANGLES};
pub use edge_table::{CORNER_POSITIONS, EDGE_CORNERS, EDGE_TABLE};
pub use error::{ConfigError, ConsistencyError, MeshError};
pub use field::{
  Axis, ConstantField, FieldFn, MetaballField, PlaneField, ScalarField, SphereField, SINGULAR_SENTINEL,
};
pub use types::{GridConfig, MeshConfig, MeshOutput, MinMaxAABB};

// Marching Cubes extraction
pub mod marching_cubes;
pub use marching_cubes::{generate, generate_timed, CHECK_INVARIANTS};

// Stateful builder for hosts
pub mod builder;
pub use builder::{BuildState, MeshBuilder};

// Output interface for renderers
pub mod sink;
pub use sink::{CapturedMesh, MeshSink, NullSink};

pub mod stats;
pub use stats::BuildStats;
