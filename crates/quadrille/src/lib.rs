//! Quadrille: an in-memory toolkit for rectangular 2D grids of typed cell
//! values, addressed by integer coordinates and 8-way compass directions.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the quadrille sub-crates. For most users, adding `quadrille` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use quadrille::prelude::*;
//!
//! let text = "#.#\n.S.\n#.#";
//!
//! // Pull the start marker out of the raw lines while building the grid.
//! let mut scanner = MarkerScanner::with_max_count('S', '.', 1);
//! let mut grid = GridMut::new();
//! for (y, line) in text.lines().enumerate() {
//!     let line = scanner.scan_line(line, y as i32)?;
//!     grid.push_row(line.chars().collect())?;
//! }
//!
//! let start = scanner.single_result()?;
//! assert_eq!(start, Vector::new(1, 1));
//! assert_eq!(*grid.get(start)?, '.');
//!
//! // Query around the start position.
//! let open: Vec<Vector> = grid
//!     .neighbours_in(start, &Direction::CARDINAL)
//!     .filter(|(_, c)| **c == '.')
//!     .map(|(v, _)| v)
//!     .collect();
//! assert_eq!(open.len(), 4);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the
//! prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `quadrille-core` | [`types::Vector`], [`types::Direction`], [`types::Turn`], direction errors |
//! | [`grid`] | `quadrille-grid` | [`grid::Grid`], [`grid::GridMut`], [`grid::MarkerScanner`], grid errors |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Coordinate algebra and the compass model (`quadrille-core`).
///
/// Contains [`types::Vector`], [`types::Direction`] with its grouping
/// constants and derived relations, the [`types::Turn`] enum, and
/// [`types::DirectionError`].
pub use quadrille_core as types;

/// Grid containers and marker scanning (`quadrille-grid`).
///
/// Contains the read-only [`grid::Grid`], the mutable [`grid::GridMut`],
/// the [`grid::MarkerScanner`], and the grid/marker error types.
pub use quadrille_grid as grid;

/// Common imports for typical quadrille usage.
///
/// ```rust
/// use quadrille::prelude::*;
/// ```
pub mod prelude {
    // Coordinates and directions
    pub use quadrille_core::{Direction, DirectionError, Turn, Vector};

    // Containers and scanning
    pub use quadrille_grid::{Grid, GridError, GridMut, MarkerError, MarkerScanner};
}
