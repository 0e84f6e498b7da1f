//! Edge adjacency for polygon meshes.
//!
//! Provides efficient lookups for edge-to-face and face-to-face
//! relationships keyed on unordered vertex-index pairs.

use hashbrown::HashMap;
use mesh_poly::{EdgeKey, PolyTopology};

/// Edge adjacency information for a polygon mesh.
///
/// Two faces are adjacent iff they share at least one edge key. Faces that
/// merely touch at a single vertex, without sharing a full edge, are not
/// adjacent; this is an edge-connectivity model, not vertex-connectivity.
///
/// Beyond neighbor lookup, the structure answers the usual edge census
/// questions: boundary edges (one adjacent face) and non-manifold edges
/// (more than two adjacent faces).
#[derive(Debug, Clone)]
pub struct EdgeAdjacency {
    /// Maps each edge key to the list of face indices containing it.
    edge_to_faces: HashMap<EdgeKey, Vec<usize>>,
    /// For each face, the sorted list of adjacent face indices.
    neighbors: Vec<Vec<usize>>,
}

impl EdgeAdjacency {
    /// Build adjacency information from a mesh.
    ///
    /// # Example
    ///
    /// ```
    /// use mesh_islands::EdgeAdjacency;
    /// use mesh_poly::{PolyMesh, Vertex};
    ///
    /// let vertices = vec![
    ///     Vertex::from_coords(0.0, 0.0, 0.0),
    ///     Vertex::from_coords(1.0, 0.0, 0.0),
    ///     Vertex::from_coords(1.0, 1.0, 0.0),
    ///     Vertex::from_coords(0.0, 1.0, 0.0),
    ///     Vertex::from_coords(2.0, 0.5, 0.0),
    /// ];
    /// let mesh = PolyMesh::from_faces(vertices, [vec![0, 1, 2, 3], vec![1, 4, 2]]);
    ///
    /// let adj = EdgeAdjacency::from_mesh(&mesh);
    /// assert!(adj.are_adjacent(0, 1));
    /// assert_eq!(adj.boundary_edge_count(), 5);
    /// ```
    #[must_use]
    pub fn from_mesh<M: PolyTopology>(mesh: &M) -> Self {
        let mut edge_to_faces: HashMap<EdgeKey, Vec<usize>> = HashMap::new();

        for face_idx in 0..mesh.face_count() {
            for edge in mesh.edge_keys(face_idx) {
                let faces = edge_to_faces.entry(edge).or_default();
                // A degenerate face can repeat an edge key; record it once.
                if faces.last() != Some(&face_idx) {
                    faces.push(face_idx);
                }
            }
        }

        let mut neighbors: Vec<Vec<usize>> = vec![Vec::new(); mesh.face_count()];
        for faces in edge_to_faces.values() {
            // All faces on one edge key are mutually adjacent; a non-manifold
            // edge connects every face that contains it.
            for (i, &f0) in faces.iter().enumerate() {
                for &f1 in &faces[i + 1..] {
                    neighbors[f0].push(f1);
                    neighbors[f1].push(f0);
                }
            }
        }

        for list in &mut neighbors {
            list.sort_unstable();
            list.dedup();
        }

        Self {
            edge_to_faces,
            neighbors,
        }
    }

    /// Get the faces adjacent to an edge.
    ///
    /// Returns `None` if the edge doesn't exist in the mesh. Either vertex
    /// order is accepted.
    #[must_use]
    pub fn faces_for_edge(&self, v0: u32, v1: u32) -> Option<&[usize]> {
        let key = if v0 < v1 { (v0, v1) } else { (v1, v0) };
        self.edge_to_faces.get(&key).map(Vec::as_slice)
    }

    /// Get the neighbors of a face.
    ///
    /// Returns an empty slice if the face index is out of bounds.
    #[must_use]
    pub fn neighbors(&self, face_idx: usize) -> &[usize] {
        self.neighbors.get(face_idx).map_or(&[], Vec::as_slice)
    }

    /// Check if two faces share at least one edge.
    #[must_use]
    pub fn are_adjacent(&self, face_a: usize, face_b: usize) -> bool {
        self.neighbors(face_a).contains(&face_b)
    }

    /// Get the number of faces.
    #[must_use]
    pub fn face_count(&self) -> usize {
        self.neighbors.len()
    }

    /// Get the number of distinct edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edge_to_faces.len()
    }

    /// Count the edges with exactly one adjacent face.
    ///
    /// Boundary edges indicate open borders of the mesh surface.
    #[must_use]
    pub fn boundary_edge_count(&self) -> usize {
        self.edge_to_faces
            .values()
            .filter(|faces| faces.len() == 1)
            .count()
    }

    /// Count the edges with more than two adjacent faces.
    #[must_use]
    pub fn non_manifold_edge_count(&self) -> usize {
        self.edge_to_faces
            .values()
            .filter(|faces| faces.len() > 2)
            .count()
    }

    /// Check if every edge has at most two adjacent faces.
    #[must_use]
    pub fn is_manifold(&self) -> bool {
        self.edge_to_faces.values().all(|faces| faces.len() <= 2)
    }
}
