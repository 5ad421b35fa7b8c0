//! Cube topology and precomputed edge crossing table.
//!
//! Maps 8-bit corner masks to 12-bit edge masks indicating which edges
//! have surface crossings.
//!
//! # Cube Topology
//!
//! ```text
//!       5──────6         Corners:
//!      /│     /│           0=(0,0,0)  1=(0,1,0)  2=(1,1,0)  3=(1,0,0)
//!     4─┼────7 │           4=(0,0,1)  5=(0,1,1)  6=(1,1,1)  7=(1,0,1)
//!     │ 1────┼─2
//!     │/     │/          +Y
//!     0──────3            │  +Z
//!                         │ /
//!                         └───+X
//! ```
//!
//! The corners walk the z=0 face as a ring (0→1→2→3), then the z=1 face in
//! the same order (4→5→6→7). The case table in [`crate::case_table`] is
//! indexed with exactly this numbering.
//!
//! # Edge Layout
//!
//! ```text
//! 12 edges total:
//!
//! z=0 ring:   Edge 0: [0,1]  Edge 1: [1,2]  Edge 2: [2,3]   Edge 3: [3,0]
//! z=1 ring:   Edge 4: [4,5]  Edge 5: [5,6]  Edge 6: [6,7]   Edge 7: [7,4]
//! Z-parallel: Edge 8: [0,4]  Edge 9: [1,5]  Edge 10: [2,6]  Edge 11: [3,7]
//!
//! Y-parallel: 0, 2, 4, 6
//! X-parallel: 1, 3, 5, 7
//! Z-parallel: 8, 9, 10, 11
//! ```
//!
//! # Edge Table Usage
//!
//! ```text
//! Corner mask: 0b00000001 (only corner 0 is inside)
//! Edge mask:   0b100000001001 (edges 0, 3, 8 have crossings)
//! ```

use glam::Vec3A;

/// Corner positions within the unit cube, in canonical corner order.
pub const CORNER_POSITIONS: [Vec3A; 8] = [
  Vec3A::new(0.0, 0.0, 0.0), // 0
  Vec3A::new(0.0, 1.0, 0.0), // 1
  Vec3A::new(1.0, 1.0, 0.0), // 2
  Vec3A::new(1.0, 0.0, 0.0), // 3
  Vec3A::new(0.0, 0.0, 1.0), // 4
  Vec3A::new(0.0, 1.0, 1.0), // 5
  Vec3A::new(1.0, 1.0, 1.0), // 6
  Vec3A::new(1.0, 0.0, 1.0), // 7
];

/// Edge endpoint corner indices.
/// Each edge connects two corners that differ in exactly one axis.
pub const EDGE_CORNERS: [[u8; 2]; 12] = [
  [0, 1], // Edge 0:  Y axis at X=0, Z=0
  [1, 2], // Edge 1:  X axis at Y=1, Z=0
  [2, 3], // Edge 2:  Y axis at X=1, Z=0
  [3, 0], // Edge 3:  X axis at Y=0, Z=0
  [4, 5], // Edge 4:  Y axis at X=0, Z=1
  [5, 6], // Edge 5:  X axis at Y=1, Z=1
  [6, 7], // Edge 6:  Y axis at X=1, Z=1
  [7, 4], // Edge 7:  X axis at Y=0, Z=1
  [0, 4], // Edge 8:  Z axis at X=0, Y=0
  [1, 5], // Edge 9:  Z axis at X=0, Y=1
  [2, 6], // Edge 10: Z axis at X=1, Y=1
  [3, 7], // Edge 11: Z axis at X=1, Y=0
];

/// Precomputed edge table.
/// Index: 8-bit corner mask (which corners are inside)
/// Value: 12-bit edge mask (which edges have crossings)
///
/// An edge has a crossing if exactly one of its endpoint corners is inside.
pub const EDGE_TABLE: [u16; 256] = generate_edge_table();

/// Generate the edge table at compile time.
const fn generate_edge_table() -> [u16; 256] {
  let mut table = [0u16; 256];
  let mut corner_mask = 0usize;

  while corner_mask < 256 {
    let mut edge_mask = 0u16;
    let mut edge = 0;

    while edge < 12 {
      let c0 = EDGE_CORNERS[edge][0] as usize;
      let c1 = EDGE_CORNERS[edge][1] as usize;

      let inside0 = (corner_mask >> c0) & 1;
      let inside1 = (corner_mask >> c1) & 1;

      if inside0 != inside1 {
        edge_mask |= 1 << edge;
      }

      edge += 1;
    }

    table[corner_mask] = edge_mask;
    corner_mask += 1;
  }

  table
}

/// True when `edge` crosses the surface under `mask`.
#[inline(always)]
pub const fn edge_crosses(mask: u8, edge: usize) -> bool {
  (EDGE_TABLE[mask as usize] >> edge) & 1 == 1
}

#[cfg(test)]
#[path = "edge_table_test.rs"]
mod edge_table_test;
