//! Error types for the compass model.

use crate::direction::Direction;
use std::error::Error;
use std::fmt;

/// Errors from direction relation lookups.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DirectionError {
    /// The turn relation was queried for a non-cardinal direction.
    NotCardinal {
        /// The offending (ordinal) direction.
        direction: Direction,
    },
}

impl fmt::Display for DirectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotCardinal { direction } => {
                write!(f, "turn relation is undefined for {direction:?}: not a cardinal direction")
            }
        }
    }
}

impl Error for DirectionError {}
