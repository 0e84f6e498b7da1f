//! Traits for polygon mesh access.

use std::ops::Range;

use crate::CornerColor;

/// An unordered pair of vertex indices identifying a mesh edge.
///
/// Always normalized so the lower index comes first.
pub type EdgeKey = (u32, u32);

/// Read access to polygon mesh topology.
///
/// This trait defines the minimal interface island algorithms need: an
/// ordered sequence of faces, each exposing its corner indices and its
/// bounding edge keys. Any mesh representation can participate by
/// implementing it; [`crate::PolyMesh`] is the in-crate implementation.
pub trait PolyTopology {
    /// Get the number of faces.
    fn face_count(&self) -> usize;

    /// Get the total number of corners across all faces.
    fn corner_count(&self) -> usize;

    /// Check if the mesh has no faces.
    fn is_empty(&self) -> bool {
        self.face_count() == 0
    }

    /// Global corner indices of a face, as a contiguous range.
    ///
    /// Corner ranges partition `0..corner_count()` in face order. Returns an
    /// empty range if the face index is out of bounds.
    fn face_corner_range(&self, face: usize) -> Range<usize>;

    /// Vertex index at each of the face's corners, in winding order.
    ///
    /// Returns an empty slice if the face index is out of bounds.
    fn face_corners(&self, face: usize) -> &[u32];

    /// Unordered vertex-index pairs bounding the face.
    ///
    /// One key per polygon edge, each normalized so the lower vertex index
    /// comes first. A degenerate face with fewer than two corners yields no
    /// keys; a two-corner face yields its single edge twice (once per
    /// traversal direction), so callers that count edges must deduplicate.
    fn edge_keys(&self, face: usize) -> impl Iterator<Item = EdgeKey> {
        let verts = self.face_corners(face);
        let count = if verts.len() < 2 { 0 } else { verts.len() };
        (0..count).map(move |i| {
            let a = verts[i];
            let b = verts[(i + 1) % verts.len()];
            if a < b { (a, b) } else { (b, a) }
        })
    }
}

/// Write access to a per-corner color attribute.
///
/// The color layer is the only state island coloring mutates; implementations
/// own the storage and its encoding.
pub trait CornerPaint {
    /// Write `color` at `corner`.
    ///
    /// Corners outside `0..corner_count()` are ignored.
    fn set_corner_color(&mut self, corner: usize, color: CornerColor);

    /// Read the color at `corner`.
    ///
    /// Returns `None` if the corner is out of bounds or no color layer
    /// exists yet.
    fn corner_color(&self, corner: usize) -> Option<CornerColor>;
}
