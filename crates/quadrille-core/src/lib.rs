//! Coordinate algebra and compass directions for the quadrille grid toolkit.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! [`Vector`] integer coordinate type, the 8-way [`Direction`] compass model
//! with its derived relations (inverse, cardinality predicates, and the
//! [`Turn`] relation over the four cardinal directions), and the associated
//! error type.
//!
//! Positions, displacements, and movement are all expressed with these two
//! types; the grid containers in `quadrille-grid` build on them.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod direction;
pub mod error;
pub mod vector;

pub use direction::{Direction, Turn};
pub use error::DirectionError;
pub use vector::Vector;
