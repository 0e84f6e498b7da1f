//! Core polygon mesh types for island ID coloring.
//!
//! This crate provides the foundational types for working with polygon
//! meshes whose color data lives on face corners:
//!
//! - [`PolyMesh`] - A polygon mesh with arbitrary face arity and corner storage
//! - [`Vertex`] - A point in 3D space
//! - [`CornerColor`] - An RGBA color value for one face corner
//!
//! # Faces, corners, and edges
//!
//! A face is an ordered sequence of **corners**, one per vertex usage. A
//! vertex shared by two faces has one distinct corner per face, which is what
//! makes hard-edged per-face coloring possible. Faces may be triangles,
//! quads, or n-gons; algorithms treat them uniformly through **edge keys**,
//! unordered vertex-index pairs bounding a face.
//!
//! Algorithms do not depend on [`PolyMesh`] directly. They are generic over
//! the [`PolyTopology`] (read) and [`CornerPaint`] (write) traits, so any
//! host representation can participate by supplying an adapter.
//!
//! # Units
//!
//! This library is **unit-agnostic**. All coordinates are `f64`.
//!
//! # Example
//!
//! ```
//! use mesh_poly::{PolyMesh, PolyTopology, Vertex};
//!
//! // A quad and a triangle sharing edge (1, 2)
//! let mut mesh = PolyMesh::new();
//! mesh.vertices.push(Vertex::from_coords(0.0, 0.0, 0.0));
//! mesh.vertices.push(Vertex::from_coords(1.0, 0.0, 0.0));
//! mesh.vertices.push(Vertex::from_coords(1.0, 1.0, 0.0));
//! mesh.vertices.push(Vertex::from_coords(0.0, 1.0, 0.0));
//! mesh.vertices.push(Vertex::from_coords(2.0, 0.5, 0.0));
//! mesh.push_face(&[0, 1, 2, 3]);
//! mesh.push_face(&[1, 4, 2]);
//!
//! assert_eq!(mesh.face_count(), 2);
//! assert_eq!(mesh.corner_count(), 7);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod color;
mod mesh;
mod traits;
mod vertex;

pub use color::CornerColor;
pub use mesh::{PolyMesh, quad_grid};
pub use traits::{CornerPaint, EdgeKey, PolyTopology};
pub use vertex::Vertex;

// Re-export nalgebra types for convenience
pub use nalgebra::{Point3, Vector3};
