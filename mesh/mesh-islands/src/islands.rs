//! Island detection via flood fill over edge adjacency.

use mesh_poly::PolyTopology;
use tracing::debug;

use crate::adjacency::EdgeAdjacency;

/// Marker for faces not yet claimed by an island during the fill.
const UNASSIGNED: u32 = u32::MAX;

/// A map from face indices to island IDs.
///
/// Islands are maximal sets of faces connected through shared edges; they
/// partition the face set, so every face belongs to exactly one island. IDs
/// are dense `0..island_count()`, numbered in discovery order: the island
/// containing face 0 is always island 0.
#[derive(Debug, Clone)]
pub struct IslandMap {
    /// Island ID per face.
    islands: Vec<u32>,
    island_count: usize,
}

impl IslandMap {
    /// Get the island ID for a face.
    ///
    /// Returns `None` if the face index is out of bounds.
    #[must_use]
    pub fn island_of(&self, face_idx: usize) -> Option<u32> {
        self.islands.get(face_idx).copied()
    }

    /// Get the number of islands.
    #[must_use]
    pub const fn island_count(&self) -> usize {
        self.island_count
    }

    /// Get the number of faces.
    #[must_use]
    pub fn face_count(&self) -> usize {
        self.islands.len()
    }

    /// Get all face indices belonging to an island.
    #[must_use]
    pub fn faces_in_island(&self, island_id: u32) -> Vec<usize> {
        self.islands
            .iter()
            .enumerate()
            .filter(|&(_, id)| *id == island_id)
            .map(|(idx, _)| idx)
            .collect()
    }

    /// Get the number of faces in each island, indexed by island ID.
    #[must_use]
    pub fn island_sizes(&self) -> Vec<usize> {
        let mut sizes = vec![0; self.island_count];
        for &id in &self.islands {
            sizes[id as usize] += 1;
        }
        sizes
    }

    /// Get the ID of the island with the most faces.
    ///
    /// Returns `None` for a mesh with no faces. Ties go to the lower ID.
    #[must_use]
    pub fn largest_island(&self) -> Option<u32> {
        let sizes = self.island_sizes();
        sizes
            .iter()
            .enumerate()
            .max_by(|a, b| a.1.cmp(b.1).then(b.0.cmp(&a.0)))
            .map(|(id, _)| id as u32)
    }

    /// Get island assignments as a slice, one ID per face.
    #[must_use]
    pub fn as_slice(&self) -> &[u32] {
        &self.islands
    }
}

/// Partition mesh faces into islands under shared-edge adjacency.
///
/// Seeds are taken in natural mesh order (`0..face_count`); each unclaimed
/// face opens a new island that is grown by flood fill across the adjacency.
/// The fill uses an explicit stack rather than recursion, so island size is
/// bounded by memory, not call depth.
///
/// Every face is visited exactly once. A mesh with no shared edges yields
/// one singleton island per face; an empty mesh yields no islands.
///
/// # Example
///
/// ```
/// use mesh_islands::{EdgeAdjacency, find_islands};
/// use mesh_poly::quad_grid;
///
/// let grid = quad_grid(2, 2);
/// let adjacency = EdgeAdjacency::from_mesh(&grid);
/// let islands = find_islands(&grid, &adjacency);
///
/// assert_eq!(islands.island_count(), 1);
/// assert_eq!(islands.faces_in_island(0).len(), 4);
/// ```
#[must_use]
#[allow(clippy::cast_possible_truncation)]
// Truncation: island IDs are u32 and bounded by the face count
pub fn find_islands<M: PolyTopology>(mesh: &M, adjacency: &EdgeAdjacency) -> IslandMap {
    let face_count = mesh.face_count();
    let mut islands = vec![UNASSIGNED; face_count];
    let mut island_count: usize = 0;
    let mut stack: Vec<usize> = Vec::new();

    for seed in 0..face_count {
        if islands[seed] != UNASSIGNED {
            continue;
        }

        let island_id = island_count as u32;
        island_count += 1;
        stack.push(seed);

        while let Some(face_idx) = stack.pop() {
            if islands[face_idx] != UNASSIGNED {
                continue;
            }
            islands[face_idx] = island_id;

            for &neighbor in adjacency.neighbors(face_idx) {
                if islands[neighbor] == UNASSIGNED {
                    stack.push(neighbor);
                }
            }
        }
    }

    debug!("Partitioned {} faces into {} islands", face_count, island_count);

    IslandMap {
        islands,
        island_count,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mesh_poly::{PolyMesh, Vertex, quad_grid};

    fn line_vertices(count: usize) -> Vec<Vertex> {
        (0..count)
            .map(|i| Vertex::from_coords(i as f64, 0.0, 0.0))
            .collect()
    }

    fn partition(mesh: &PolyMesh) -> IslandMap {
        let adjacency = EdgeAdjacency::from_mesh(mesh);
        find_islands(mesh, &adjacency)
    }

    #[test]
    fn empty_mesh_has_no_islands() {
        let islands = partition(&PolyMesh::new());
        assert_eq!(islands.island_count(), 0);
        assert_eq!(islands.face_count(), 0);
        assert!(islands.largest_island().is_none());
    }

    #[test]
    fn disconnected_faces_are_singleton_islands() {
        let mesh = PolyMesh::from_faces(
            line_vertices(9),
            [vec![0u32, 1, 2], vec![3, 4, 5], vec![6, 7, 8]],
        );
        let islands = partition(&mesh);

        assert_eq!(islands.island_count(), 3);
        assert_eq!(islands.island_sizes(), vec![1, 1, 1]);
    }

    #[test]
    fn connected_grid_is_one_island() {
        let grid = quad_grid(2, 2);
        let islands = partition(&grid);

        assert_eq!(islands.island_count(), 1);
        assert_eq!(islands.faces_in_island(0), vec![0, 1, 2, 3]);
    }

    #[test]
    fn island_ids_follow_discovery_order() {
        // Faces 0 and 2 form one island, face 1 sits alone between them
        let mesh = PolyMesh::from_faces(
            line_vertices(8),
            [vec![0u32, 1, 2], vec![4, 5, 6], vec![1, 3, 2]],
        );
        let islands = partition(&mesh);

        assert_eq!(islands.island_count(), 2);
        assert_eq!(islands.island_of(0), Some(0));
        assert_eq!(islands.island_of(1), Some(1));
        assert_eq!(islands.island_of(2), Some(0));
    }

    #[test]
    fn shared_edge_means_same_island() {
        let mesh = PolyMesh::from_faces(line_vertices(5), [vec![0, 1, 2, 3], vec![1, 4, 2]]);
        let islands = partition(&mesh);

        assert_eq!(islands.island_count(), 1);
        assert_eq!(islands.island_of(0), islands.island_of(1));
    }

    #[test]
    fn vertex_touch_splits_islands() {
        let mesh = PolyMesh::from_faces(line_vertices(5), [vec![0u32, 1, 2], vec![2, 3, 4]]);
        let islands = partition(&mesh);

        assert_eq!(islands.island_count(), 2);
        assert_ne!(islands.island_of(0), islands.island_of(1));
    }

    #[test]
    fn every_face_assigned_exactly_once() {
        let mut mesh = quad_grid(4, 3);
        // Add a detached triangle
        let base = mesh.vertices.len() as u32;
        mesh.vertices.push(Vertex::from_coords(100.0, 0.0, 0.0));
        mesh.vertices.push(Vertex::from_coords(101.0, 0.0, 0.0));
        mesh.vertices.push(Vertex::from_coords(100.0, 1.0, 0.0));
        mesh.push_face(&[base, base + 1, base + 2]);

        let islands = partition(&mesh);

        assert_eq!(islands.island_count(), 2);
        let total: usize = islands.island_sizes().iter().sum();
        assert_eq!(total, islands.face_count());
    }

    #[test]
    fn largest_island_prefers_lower_id_on_tie() {
        let mesh = PolyMesh::from_faces(line_vertices(6), [vec![0u32, 1, 2], vec![3, 4, 5]]);
        let islands = partition(&mesh);

        assert_eq!(islands.largest_island(), Some(0));
    }

    #[test]
    fn large_island_does_not_overflow_stack() {
        // A long strip is the worst case for recursive fills
        let grid = quad_grid(2000, 1);
        let islands = partition(&grid);

        assert_eq!(islands.island_count(), 1);
        assert_eq!(islands.island_sizes(), vec![2000]);
    }
}
