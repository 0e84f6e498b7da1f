//! Indexed polygon mesh with corner storage.

use std::ops::Range;

use crate::{CornerColor, CornerPaint, PolyTopology, Vertex};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Contiguous run of corners belonging to one face.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
struct FaceSpan {
    start: u32,
    len: u32,
}

/// An indexed polygon mesh.
///
/// Stores vertices, a flat corner array, and one span per face describing
/// which corners the face owns. Each corner records the index of the vertex
/// it uses, so faces of any arity (triangles, quads, n-gons) share one
/// representation.
///
/// # Memory Layout
///
/// - `vertices`: `Vec<Vertex>` - Vertex positions
/// - corners: `Vec<u32>` - Vertex index per face-vertex usage, face after face
/// - spans: one `(start, len)` pair per face into the corner array
/// - corner colors: optional `Vec<CornerColor>`, one entry per corner
///
/// The corner color layer does not exist until requested; once created it
/// always holds exactly [`corner_count`](PolyTopology::corner_count) entries.
///
/// # Example
///
/// ```
/// use mesh_poly::{PolyMesh, PolyTopology, Vertex};
///
/// let mut mesh = PolyMesh::new();
/// mesh.vertices.push(Vertex::from_coords(0.0, 0.0, 0.0));
/// mesh.vertices.push(Vertex::from_coords(1.0, 0.0, 0.0));
/// mesh.vertices.push(Vertex::from_coords(0.5, 1.0, 0.0));
/// mesh.push_face(&[0, 1, 2]);
///
/// assert_eq!(mesh.face_count(), 1);
/// assert_eq!(mesh.face_corners(0), &[0, 1, 2]);
/// ```
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PolyMesh {
    /// Vertex data.
    pub vertices: Vec<Vertex>,

    /// Vertex index per corner, in face order.
    corners: Vec<u32>,

    /// Corner span per face.
    spans: Vec<FaceSpan>,

    /// Per-corner color attribute layer, if created.
    corner_colors: Option<Vec<CornerColor>>,
}

impl PolyMesh {
    /// Create a new empty mesh.
    ///
    /// # Example
    ///
    /// ```
    /// use mesh_poly::{PolyMesh, PolyTopology};
    ///
    /// let mesh = PolyMesh::new();
    /// assert!(mesh.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            vertices: Vec::new(),
            corners: Vec::new(),
            spans: Vec::new(),
            corner_colors: None,
        }
    }

    /// Create a mesh with pre-allocated capacity.
    ///
    /// Corner capacity is estimated at four corners per face.
    #[inline]
    #[must_use]
    pub fn with_capacity(vertex_count: usize, face_count: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertex_count),
            corners: Vec::with_capacity(face_count * 4),
            spans: Vec::with_capacity(face_count),
            corner_colors: None,
        }
    }

    /// Create a mesh from vertices and per-face vertex index lists.
    ///
    /// # Example
    ///
    /// ```
    /// use mesh_poly::{PolyMesh, PolyTopology, Vertex};
    ///
    /// let vertices = vec![
    ///     Vertex::from_coords(0.0, 0.0, 0.0),
    ///     Vertex::from_coords(1.0, 0.0, 0.0),
    ///     Vertex::from_coords(1.0, 1.0, 0.0),
    ///     Vertex::from_coords(0.0, 1.0, 0.0),
    /// ];
    /// let mesh = PolyMesh::from_faces(vertices, [[0, 1, 2, 3]]);
    /// assert_eq!(mesh.face_count(), 1);
    /// assert_eq!(mesh.corner_count(), 4);
    /// ```
    #[must_use]
    pub fn from_faces<I, F>(vertices: Vec<Vertex>, faces: I) -> Self
    where
        I: IntoIterator<Item = F>,
        F: AsRef<[u32]>,
    {
        let mut mesh = Self {
            vertices,
            corners: Vec::new(),
            spans: Vec::new(),
            corner_colors: None,
        };
        for face in faces {
            mesh.push_face(face.as_ref());
        }
        mesh
    }

    /// Append a face given the vertex index of each of its corners.
    ///
    /// Faces need at least three corners to bound a surface patch; shorter
    /// input is stored as-is and simply yields degenerate edge keys.
    #[allow(clippy::cast_possible_truncation)]
    // Truncation: corner indices are u32, so corner counts > 4B are unsupported by design
    pub fn push_face(&mut self, face_vertices: &[u32]) {
        let start = self.corners.len() as u32;
        self.corners.extend_from_slice(face_vertices);
        self.spans.push(FaceSpan {
            start,
            len: face_vertices.len() as u32,
        });

        // Keep the color layer in step with the corner array.
        if let Some(colors) = &mut self.corner_colors {
            colors.resize(self.corners.len(), CornerColor::default());
        }
    }

    /// Check if a corner color layer exists.
    #[inline]
    #[must_use]
    pub const fn has_corner_colors(&self) -> bool {
        self.corner_colors.is_some()
    }

    /// Get the corner color layer, if created.
    #[inline]
    #[must_use]
    pub fn corner_colors(&self) -> Option<&[CornerColor]> {
        self.corner_colors.as_deref()
    }

    /// Get the corner color layer, creating it if missing.
    ///
    /// A fresh layer is filled with [`CornerColor::WHITE`].
    pub fn ensure_corner_colors(&mut self) -> &mut [CornerColor] {
        let corner_count = self.corners.len();
        self.corner_colors
            .get_or_insert_with(|| vec![CornerColor::default(); corner_count])
    }

    /// Remove the corner color layer.
    pub fn clear_corner_colors(&mut self) {
        self.corner_colors = None;
    }
}

impl PolyTopology for PolyMesh {
    #[inline]
    fn face_count(&self) -> usize {
        self.spans.len()
    }

    #[inline]
    fn corner_count(&self) -> usize {
        self.corners.len()
    }

    fn face_corner_range(&self, face: usize) -> Range<usize> {
        self.spans.get(face).map_or(0..0, |span| {
            let start = span.start as usize;
            start..start + span.len as usize
        })
    }

    fn face_corners(&self, face: usize) -> &[u32] {
        &self.corners[self.face_corner_range(face)]
    }
}

impl CornerPaint for PolyMesh {
    fn set_corner_color(&mut self, corner: usize, color: CornerColor) {
        if let Some(slot) = self.ensure_corner_colors().get_mut(corner) {
            *slot = color;
        }
    }

    fn corner_color(&self, corner: usize) -> Option<CornerColor> {
        self.corner_colors
            .as_ref()
            .and_then(|colors| colors.get(corner).copied())
    }
}

/// Build a connected `nx` by `ny` grid of quads on the XY plane.
///
/// Every interior edge is shared by two quads, so the whole grid forms a
/// single island. Useful for tests and benchmarks.
///
/// # Example
///
/// ```
/// use mesh_poly::{PolyTopology, quad_grid};
///
/// let grid = quad_grid(2, 2);
/// assert_eq!(grid.face_count(), 4);
/// assert_eq!(grid.corner_count(), 16);
/// ```
///
/// # Panics
///
/// Panics if `nx` or `ny` is zero.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
// Truncation: vertex indices are u32, so grids beyond 4B vertices are unsupported
#[allow(clippy::cast_precision_loss)]
// Precision loss: grid coordinates beyond 2^52 are unsupported
pub fn quad_grid(nx: usize, ny: usize) -> PolyMesh {
    assert!(nx > 0 && ny > 0, "grid dimensions must be non-zero");

    let mut mesh = PolyMesh::with_capacity((nx + 1) * (ny + 1), nx * ny);

    for j in 0..=ny {
        for i in 0..=nx {
            mesh.vertices
                .push(Vertex::from_coords(i as f64, j as f64, 0.0));
        }
    }

    let stride = (nx + 1) as u32;
    for j in 0..ny {
        for i in 0..nx {
            let v = j as u32 * stride + i as u32;
            mesh.push_face(&[v, v + 1, v + stride + 1, v + stride]);
        }
    }

    mesh
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quad_and_tri() -> PolyMesh {
        let vertices = vec![
            Vertex::from_coords(0.0, 0.0, 0.0),
            Vertex::from_coords(1.0, 0.0, 0.0),
            Vertex::from_coords(1.0, 1.0, 0.0),
            Vertex::from_coords(0.0, 1.0, 0.0),
            Vertex::from_coords(2.0, 0.5, 0.0),
        ];
        PolyMesh::from_faces(vertices, [vec![0, 1, 2, 3], vec![1, 4, 2]])
    }

    #[test]
    fn empty_mesh() {
        let mesh = PolyMesh::new();
        assert!(mesh.is_empty());
        assert_eq!(mesh.face_count(), 0);
        assert_eq!(mesh.corner_count(), 0);
    }

    #[test]
    fn mixed_arity_faces() {
        let mesh = quad_and_tri();
        assert_eq!(mesh.face_count(), 2);
        assert_eq!(mesh.corner_count(), 7);
        assert_eq!(mesh.face_corners(0), &[0, 1, 2, 3]);
        assert_eq!(mesh.face_corners(1), &[1, 4, 2]);
        assert_eq!(mesh.face_corner_range(0), 0..4);
        assert_eq!(mesh.face_corner_range(1), 4..7);
    }

    #[test]
    fn corner_ranges_partition_corners() {
        let mesh = quad_and_tri();
        let mut covered = 0;
        for face in 0..mesh.face_count() {
            let range = mesh.face_corner_range(face);
            assert_eq!(range.start, covered);
            covered = range.end;
        }
        assert_eq!(covered, mesh.corner_count());
    }

    #[test]
    fn out_of_bounds_face_is_empty() {
        let mesh = quad_and_tri();
        assert!(mesh.face_corners(99).is_empty());
        assert_eq!(mesh.face_corner_range(99), 0..0);
    }

    #[test]
    fn edge_keys_are_normalized() {
        let mesh = quad_and_tri();
        for face in 0..mesh.face_count() {
            for (a, b) in mesh.edge_keys(face) {
                assert!(a < b);
            }
        }
    }

    #[test]
    fn shared_edge_key_appears_in_both_faces() {
        let mesh = quad_and_tri();
        let quad_edges: Vec<_> = mesh.edge_keys(0).collect();
        let tri_edges: Vec<_> = mesh.edge_keys(1).collect();
        assert!(quad_edges.contains(&(1, 2)));
        assert!(tri_edges.contains(&(1, 2)));
    }

    #[test]
    fn color_layer_created_on_demand() {
        let mut mesh = quad_and_tri();
        assert!(!mesh.has_corner_colors());

        mesh.set_corner_color(0, CornerColor::RED);
        assert!(mesh.has_corner_colors());
        assert_eq!(mesh.corner_color(0), Some(CornerColor::RED));
        // Untouched corners stay at the default fill
        assert_eq!(mesh.corner_color(1), Some(CornerColor::WHITE));
    }

    #[test]
    fn color_layer_tracks_new_faces() {
        let mut mesh = quad_and_tri();
        mesh.ensure_corner_colors();
        mesh.push_face(&[2, 3, 4]);

        let colors = mesh.corner_colors();
        assert!(colors.is_some());
        assert_eq!(colors.map(<[CornerColor]>::len), Some(mesh.corner_count()));
    }

    #[test]
    fn out_of_bounds_color_write_is_ignored() {
        let mut mesh = quad_and_tri();
        mesh.set_corner_color(999, CornerColor::RED);
        assert_eq!(mesh.corner_color(999), None);
    }

    #[test]
    fn quad_grid_dimensions() {
        let grid = quad_grid(3, 2);
        assert_eq!(grid.vertices.len(), 12);
        assert_eq!(grid.face_count(), 6);
        assert_eq!(grid.corner_count(), 24);
    }

    #[test]
    fn quad_grid_neighbors_share_edges() {
        let grid = quad_grid(2, 1);
        let left: Vec<_> = grid.edge_keys(0).collect();
        let right: Vec<_> = grid.edge_keys(1).collect();
        let shared: Vec<_> = left.iter().filter(|e| right.contains(e)).collect();
        assert_eq!(shared.len(), 1);
    }
}
