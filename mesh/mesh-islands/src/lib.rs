//! Island detection and ID vertex coloring for polygon meshes.
//!
//! This crate partitions a mesh's faces into **islands** (maximal connected
//! components under shared-edge adjacency) and writes one random color per
//! island into the mesh's corner color layer. The result is the classic ID
//! map used to tell surface patches apart in texturing and baking pipelines.
//!
//! Connectivity is decided by edge keys: two faces are in the same island
//! iff a path of shared edges links them. Faces touching at a single vertex
//! stay in different islands.
//!
//! # Quick Start
//!
//! ```
//! use mesh_islands::{IslandColorConfig, color_islands};
//! use mesh_poly::quad_grid;
//!
//! // A 2x2 grid of quads is a single connected island
//! let mut mesh = quad_grid(2, 2);
//! let summary = color_islands(&mut mesh, &IslandColorConfig::new());
//!
//! assert_eq!(summary.island_count, 1);
//! assert_eq!(summary.colored_corners, 16);
//! ```
//!
//! # Inspecting the partition
//!
//! For more control, build the adjacency and the island map directly:
//!
//! ```
//! use mesh_islands::{EdgeAdjacency, find_islands};
//! use mesh_poly::{PolyMesh, Vertex};
//!
//! let vertices = vec![
//!     Vertex::from_coords(0.0, 0.0, 0.0),
//!     Vertex::from_coords(1.0, 0.0, 0.0),
//!     Vertex::from_coords(0.5, 1.0, 0.0),
//! ];
//! let mesh = PolyMesh::from_faces(vertices, [[0u32, 1, 2]]);
//!
//! let adjacency = EdgeAdjacency::from_mesh(&mesh);
//! let islands = find_islands(&mesh, &adjacency);
//! assert_eq!(islands.island_count(), 1);
//! ```

// Safety: Deny unwrap/expect in library code. Tests may use them.
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]

mod adjacency;
mod colorize;
mod error;
mod islands;

pub use adjacency::EdgeAdjacency;
pub use colorize::{
    ColoringSummary, IslandColorConfig, color_islands, fill_selection, random_color,
};
pub use error::{IslandError, IslandResult};
pub use islands::{IslandMap, find_islands};
