//! Error types for grid construction, access, and marker scanning.

use quadrille_core::Vector;
use std::error::Error;
use std::fmt;

/// Errors arising from grid construction, access, or structural mutation.
///
/// Every variant indicates a programming or input-data defect, not a
/// transient condition; nothing is retried or recovered inside the toolkit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GridError {
    /// A position is outside the bounds of the grid.
    OutOfBounds {
        /// The offending position.
        pos: Vector,
        /// Human-readable description of the valid range.
        bounds: String,
    },
    /// A row's length does not match the grid's fixed width.
    WidthMismatch {
        /// The grid's width.
        expected: usize,
        /// The offending row's length.
        actual: usize,
    },
    /// A column's length does not match the grid's height.
    HeightMismatch {
        /// The grid's height.
        expected: usize,
        /// The offending column's length.
        actual: usize,
    },
    /// A row or column index lies outside the grid (`scan_row`/`scan_column`).
    AxisOutOfBounds {
        /// `"row"` or `"column"`.
        axis: &'static str,
        /// The offending index.
        index: i32,
        /// Number of rows or columns.
        len: usize,
    },
    /// An insertion index lies outside the valid insertion range.
    InsertOutOfBounds {
        /// `"row"` or `"column"`.
        axis: &'static str,
        /// The offending index.
        index: i32,
        /// Maximum valid insertion index (inclusive — inserting at the end
        /// appends).
        limit: usize,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds { pos, bounds } => {
                write!(f, "position {pos} out of bounds: {bounds}")
            }
            Self::WidthMismatch { expected, actual } => {
                write!(f, "row length {actual} does not match grid width {expected}")
            }
            Self::HeightMismatch { expected, actual } => {
                write!(f, "column length {actual} does not match grid height {expected}")
            }
            Self::AxisOutOfBounds { axis, index, len } => {
                write!(f, "{axis} index {index} out of bounds: [0, {len})")
            }
            Self::InsertOutOfBounds { axis, index, limit } => {
                write!(f, "cannot insert {axis} at {index}: valid range [0, {limit}]")
            }
        }
    }
}

impl Error for GridError {}

/// Errors from a [`MarkerScanner`](crate::MarkerScanner) scan session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MarkerError {
    /// More marker occurrences were found than the configured maximum.
    TooManyMatches {
        /// The marker character being searched for.
        marker: char,
        /// The configured maximum occurrence count.
        limit: usize,
    },
    /// `single_result` was called with a recorded count other than one.
    WrongMatchCount {
        /// The marker character being searched for.
        marker: char,
        /// How many occurrences were actually recorded.
        found: usize,
    },
}

impl fmt::Display for MarkerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooManyMatches { marker, limit } => {
                write!(f, "found too many occurrences of {marker:?} (limit {limit})")
            }
            Self::WrongMatchCount { marker, found } => {
                write!(
                    f,
                    "found an invalid number of {marker:?} occurrences ({found}, expected exactly 1)"
                )
            }
        }
    }
}

impl Error for MarkerError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_error_display() {
        let err = GridError::OutOfBounds {
            pos: Vector::new(7, -1),
            bounds: "[0, 5) x [0, 5)".into(),
        };
        assert_eq!(err.to_string(), "position (7, -1) out of bounds: [0, 5) x [0, 5)");

        let err = GridError::InsertOutOfBounds {
            axis: "column",
            index: 9,
            limit: 4,
        };
        assert_eq!(err.to_string(), "cannot insert column at 9: valid range [0, 4]");
    }

    #[test]
    fn marker_error_display() {
        let err = MarkerError::TooManyMatches { marker: 'S', limit: 1 };
        assert_eq!(err.to_string(), "found too many occurrences of 'S' (limit 1)");

        let err = MarkerError::WrongMatchCount { marker: 'S', found: 0 };
        assert_eq!(
            err.to_string(),
            "found an invalid number of 'S' occurrences (0, expected exactly 1)"
        );
    }
}
