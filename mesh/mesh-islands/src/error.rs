//! Error types for island operations.

use thiserror::Error;

/// Result type for island operations.
pub type IslandResult<T> = Result<T, IslandError>;

/// Errors that can occur during island operations.
#[derive(Debug, Error)]
pub enum IslandError {
    /// Face index is out of bounds.
    #[error("face index {face_idx} out of bounds (mesh has {face_count} faces)")]
    FaceOutOfBounds {
        /// The invalid face index.
        face_idx: usize,
        /// Total number of faces in the mesh.
        face_count: usize,
    },

    /// A fill operation received an empty selection.
    #[error("selection is empty")]
    EmptySelection,
}
