//! Bounds-checked rectangular grid containers and the marker scanner.
//!
//! This crate holds the container half of the quadrille toolkit:
//!
//! - [`Grid`]: a rectangular grid of cell values built row by row, with
//!   bounds-checked access, neighbour iteration, and lazy row/column/full
//!   scans (the read path).
//! - [`GridMut`]: the same grid plus the write capability — in-place cell
//!   replacement and whole-row/whole-column insertion (the write path).
//! - [`MarkerScanner`]: a per-session search-and-replace utility that pulls
//!   marker characters (a start tile, say) out of raw lines while they are
//!   being ingested into a grid.
//!
//! Positions and movement are expressed with `quadrille_core`'s [`Vector`]
//! and [`Direction`] types.
//!
//! [`Vector`]: quadrille_core::Vector
//! [`Direction`]: quadrille_core::Direction

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod grid;
pub mod marker;
pub mod mutable;

#[cfg(test)]
pub(crate) mod invariants;

pub use error::{GridError, MarkerError};
pub use grid::Grid;
pub use marker::MarkerScanner;
pub use mutable::GridMut;
