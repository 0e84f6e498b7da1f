//! Island ID coloring and selection fill.
//!
//! Writes per-corner colors: one random color per island, or one caller
//! picked color across a face selection.

use hashbrown::HashSet;
use mesh_poly::{CornerColor, CornerPaint, PolyTopology};
use rand::prelude::*;
use tracing::info;

use crate::adjacency::EdgeAdjacency;
use crate::error::{IslandError, IslandResult};
use crate::islands::find_islands;

/// Configuration for island coloring.
#[derive(Debug, Clone, Default)]
pub struct IslandColorConfig {
    /// Optional seed for reproducible colors.
    pub seed: Option<u64>,
}

impl IslandColorConfig {
    /// Create a new configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a random seed for reproducibility.
    #[must_use]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

/// Summary of an island coloring pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColoringSummary {
    /// Number of islands found.
    pub island_count: usize,
    /// Number of corners written.
    pub colored_corners: usize,
}

/// Draw a random ID color.
///
/// RGB components are independent uniform draws from `[0.0, 1.0)`; alpha is
/// fixed at 1.0.
pub fn random_color<R: Rng + ?Sized>(rng: &mut R) -> CornerColor {
    CornerColor::opaque(
        rng.gen_range(0.0..1.0),
        rng.gen_range(0.0..1.0),
        rng.gen_range(0.0..1.0),
    )
}

/// Assign one random color per island and write it to every corner.
///
/// Partitions the mesh's faces into islands under shared-edge adjacency,
/// draws one color per island (at island creation, not per face), then
/// writes that color to every corner of every face in the island. Corners
/// of the same island end up with bit-identical values, which is what makes
/// the result usable as an ID map.
///
/// Mesh topology is never touched; the corner color layer is the only
/// mutated state, and existing values are overwritten without being read.
/// A mesh with zero faces yields zero islands and writes nothing.
///
/// # Example
///
/// ```
/// use mesh_islands::{IslandColorConfig, color_islands};
/// use mesh_poly::{PolyTopology, quad_grid};
///
/// let mut grid = quad_grid(2, 2);
/// let summary = color_islands(&mut grid, &IslandColorConfig::new());
///
/// assert_eq!(summary.island_count, 1);
/// assert_eq!(summary.colored_corners, grid.corner_count());
/// ```
pub fn color_islands<M: PolyTopology + CornerPaint>(
    mesh: &mut M,
    config: &IslandColorConfig,
) -> ColoringSummary {
    let adjacency = EdgeAdjacency::from_mesh(mesh);
    let islands = find_islands(mesh, &adjacency);

    let mut rng: Box<dyn RngCore> = if let Some(seed) = config.seed {
        Box::new(rand::rngs::StdRng::seed_from_u64(seed))
    } else {
        Box::new(rand::thread_rng())
    };

    // One independent draw per island, in creation order.
    let palette: Vec<CornerColor> = (0..islands.island_count())
        .map(|_| random_color(&mut *rng))
        .collect();

    let mut colored_corners = 0;
    for face_idx in 0..mesh.face_count() {
        let Some(island_id) = islands.island_of(face_idx) else {
            continue;
        };
        let color = palette[island_id as usize];
        for corner in mesh.face_corner_range(face_idx) {
            mesh.set_corner_color(corner, color);
            colored_corners += 1;
        }
    }

    info!(
        "Applied random colors to {} islands ({} corners)",
        islands.island_count(),
        colored_corners
    );

    ColoringSummary {
        island_count: islands.island_count(),
        colored_corners,
    }
}

/// Write one color to every corner of the selected faces.
///
/// Substitute for a host paint tool's set-color-on-selection: untouched
/// faces keep their existing corner colors. Duplicate face indices in the
/// selection are filled once.
///
/// # Returns
///
/// The number of corners written.
///
/// # Errors
///
/// Returns an error if:
/// - The selection is empty
/// - Any selected face index is out of bounds
///
/// # Example
///
/// ```
/// use mesh_islands::fill_selection;
/// use mesh_poly::{CornerColor, CornerPaint, quad_grid};
///
/// let mut grid = quad_grid(2, 2);
/// let written = fill_selection(&mut grid, &[0, 3], CornerColor::RED)?;
///
/// assert_eq!(written, 8);
/// assert_eq!(grid.corner_color(0), Some(CornerColor::RED));
/// # Ok::<(), mesh_islands::IslandError>(())
/// ```
pub fn fill_selection<M: PolyTopology + CornerPaint>(
    mesh: &mut M,
    selection: &[usize],
    color: CornerColor,
) -> IslandResult<usize> {
    if selection.is_empty() {
        return Err(IslandError::EmptySelection);
    }

    for &face_idx in selection {
        if face_idx >= mesh.face_count() {
            return Err(IslandError::FaceOutOfBounds {
                face_idx,
                face_count: mesh.face_count(),
            });
        }
    }

    let mut filled: HashSet<usize> = HashSet::new();
    let mut colored_corners = 0;

    for &face_idx in selection {
        if !filled.insert(face_idx) {
            continue;
        }
        for corner in mesh.face_corner_range(face_idx) {
            mesh.set_corner_color(corner, color);
            colored_corners += 1;
        }
    }

    info!(
        "Filled {} selected faces ({} corners)",
        filled.len(),
        colored_corners
    );

    Ok(colored_corners)
}
