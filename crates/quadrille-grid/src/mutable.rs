//! Mutable grid extension: cell writes and structural row/column insertion.

use crate::error::GridError;
use crate::grid::Grid;
use quadrille_core::Vector;
use std::ops::Deref;

/// A [`Grid`] with the write capability: in-place cell replacement and
/// row/column insertion.
///
/// `GridMut` wraps a base grid by composition and derefs to it, so the whole
/// read path ([`get`](Grid::get), [`neighbours`](Grid::neighbours), the
/// scans) is available unchanged — while call sites holding a plain
/// `&Grid<T>` cannot reach structural mutation at all.
///
/// The rectangular invariant is preserved by every operation: rows and
/// columns can only be inserted whole, with lengths matching the current
/// dimensions.
///
/// # Examples
///
/// ```
/// use quadrille_core::Vector;
/// use quadrille_grid::GridMut;
///
/// let mut grid = GridMut::from_text("abc\ndef\nghi")?;
/// grid.insert_column(1, vec!['X', 'Y', 'Z'])?;
/// assert_eq!(grid.width(), 4);
/// let top: String = grid.scan_row(0)?.map(|(_, c)| *c).collect();
/// assert_eq!(top, "aXbc");
/// # Ok::<(), quadrille_grid::GridError>(())
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GridMut<T> {
    inner: Grid<T>,
}

impl<T> GridMut<T> {
    /// Create an empty mutable grid.
    pub fn new() -> Self {
        Self { inner: Grid::new() }
    }

    /// Append a row at the bottom. Same contract as [`Grid::push_row`].
    pub fn push_row(&mut self, row: Vec<T>) -> Result<(), GridError> {
        self.inner.push_row(row)
    }

    /// Borrow the read-only base grid.
    pub fn as_grid(&self) -> &Grid<T> {
        &self.inner
    }

    /// Discard the write capability, keeping the cells.
    pub fn into_grid(self) -> Grid<T> {
        self.inner
    }

    /// Replace the value at `pos`. Dimensions never change.
    ///
    /// Fails with the same out-of-bounds condition as [`Grid::get`].
    pub fn set(&mut self, pos: Vector, value: T) -> Result<(), GridError> {
        if !self.inner.in_bounds(pos) {
            return Err(GridError::OutOfBounds {
                pos,
                bounds: self.inner.bounds_description(),
            });
        }
        self.inner.rows[pos.y as usize][pos.x as usize] = value;
        Ok(())
    }

    /// Insert `row` so that it becomes row `y`, shifting rows at index >= `y`
    /// down by one.
    ///
    /// `y` may be any index in `[0, height]`; inserting at `height` appends.
    /// The row's length must match the current width. On failure the grid is
    /// unchanged.
    pub fn insert_row(&mut self, y: i32, row: Vec<T>) -> Result<(), GridError> {
        let height = self.inner.height();
        if y < 0 || (y as usize) > height {
            return Err(GridError::InsertOutOfBounds {
                axis: "row",
                index: y,
                limit: height,
            });
        }
        if row.len() != self.inner.width() {
            return Err(GridError::WidthMismatch {
                expected: self.inner.width(),
                actual: row.len(),
            });
        }
        self.inner.rows.insert(y as usize, row);
        Ok(())
    }

    /// Insert `column` so that it becomes column `x`, shifting entries at
    /// index >= `x` right by one in every row.
    ///
    /// `x` may be any index in `[0, width]`; inserting at `width` appends a
    /// rightmost column. The column's length must match the current height.
    /// Width grows by one; the shift costs O(height) row edits per call, not
    /// amortized. On failure the grid is unchanged.
    pub fn insert_column(&mut self, x: i32, column: Vec<T>) -> Result<(), GridError> {
        let width = self.inner.width();
        if x < 0 || (x as usize) > width {
            return Err(GridError::InsertOutOfBounds {
                axis: "column",
                index: x,
                limit: width,
            });
        }
        if column.len() != self.inner.height() {
            return Err(GridError::HeightMismatch {
                expected: self.inner.height(),
                actual: column.len(),
            });
        }
        for (row, value) in self.inner.rows.iter_mut().zip(column) {
            row.insert(x as usize, value);
        }
        self.inner.width += 1;
        Ok(())
    }
}

/// The whole read path of [`Grid`] is available on `GridMut` unchanged.
impl<T> Deref for GridMut<T> {
    type Target = Grid<T>;

    fn deref(&self) -> &Grid<T> {
        &self.inner
    }
}

impl<T> Default for GridMut<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Upgrade a finished read-only grid with the write capability.
impl<T> From<Grid<T>> for GridMut<T> {
    fn from(inner: Grid<T>) -> Self {
        Self { inner }
    }
}

impl GridMut<char> {
    /// Build a mutable character grid from multi-line text, one row per
    /// line. Same contract as [`Grid::from_text`].
    pub fn from_text(text: &str) -> Result<Self, GridError> {
        Ok(Self {
            inner: Grid::from_text(text)?,
        })
    }
}
