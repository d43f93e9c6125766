//! Grid invariant assertions reused across test modules.
//!
//! The same checks run against the base grid and against the mutable grid
//! after every structural operation, mirroring how a single compliance
//! helper serves all backends.

use crate::grid::Grid;
use quadrille_core::Vector;

/// Assert every row holds exactly `width` cells.
pub(crate) fn assert_rectangular<T>(grid: &Grid<T>) {
    for (y, row) in grid.rows.iter().enumerate() {
        assert_eq!(
            row.len(),
            grid.width(),
            "row {y} has {} cells, grid width is {}",
            row.len(),
            grid.width()
        );
    }
}

/// Assert `scan_all` yields `width * height` pairs in row-major order and
/// that every pair agrees with `get`.
pub(crate) fn assert_row_major_complete<T: PartialEq + std::fmt::Debug>(grid: &Grid<T>) {
    let mut expected = Vec::with_capacity(grid.width() * grid.height());
    for y in 0..grid.height() as i32 {
        for x in 0..grid.width() as i32 {
            expected.push(Vector::new(x, y));
        }
    }
    let actual: Vec<Vector> = grid.scan_all().map(|(v, _)| v).collect();
    assert_eq!(actual, expected, "scan_all order is not row-major");

    for (pos, value) in grid.scan_all() {
        assert_eq!(grid.get(pos).unwrap(), value, "scan_all disagrees with get at {pos}");
    }
}
