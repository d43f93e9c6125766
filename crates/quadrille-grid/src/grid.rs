//! Rectangular bounds-checked grid container (read path).

use crate::error::GridError;
use quadrille_core::{Direction, Vector};

/// A rectangular grid of cell values, addressed by [`Vector`] positions.
///
/// Built incrementally by appending rows top to bottom: the first row fixes
/// the width and every later row must match it exactly. Once built, the base
/// grid is logically read-only — nothing removes rows or shrinks the width;
/// mutation lives on [`GridMut`](crate::GridMut).
///
/// All scans are pull-based iterators borrowing the grid immutably. A fresh
/// call yields a fresh scan, and the borrow checker rules out mutating the
/// grid while a scan is in flight.
///
/// # Examples
///
/// ```
/// use quadrille_core::Vector;
/// use quadrille_grid::Grid;
///
/// let mut grid = Grid::new();
/// grid.push_row(vec!['a', 'b', 'c'])?;
/// grid.push_row(vec!['d', 'e', 'f'])?;
/// assert_eq!((grid.width(), grid.height()), (3, 2));
/// assert_eq!(*grid.get(Vector::new(2, 1))?, 'f');
/// assert!(!grid.in_bounds(Vector::new(3, 0)));
/// # Ok::<(), quadrille_grid::GridError>(())
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid<T> {
    pub(crate) rows: Vec<Vec<T>>,
    pub(crate) width: usize,
}

impl<T> Grid<T> {
    /// Create an empty grid. The width is fixed by the first row pushed.
    pub fn new() -> Self {
        Self {
            rows: Vec::new(),
            width: 0,
        }
    }

    /// Number of columns. Zero until the first row is pushed.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows pushed so far.
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// `true` if no rows have been pushed.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Append a row at the bottom.
    ///
    /// The first row fixes the grid's width; every later row must match it
    /// exactly. On a width mismatch the grid is left unchanged — no partial
    /// append, no truncation or padding.
    pub fn push_row(&mut self, row: Vec<T>) -> Result<(), GridError> {
        if self.rows.is_empty() {
            self.width = row.len();
        } else if row.len() != self.width {
            return Err(GridError::WidthMismatch {
                expected: self.width,
                actual: row.len(),
            });
        }
        self.rows.push(row);
        Ok(())
    }

    /// `true` iff `pos` lies within `[0, width) x [0, height)`.
    pub fn in_bounds(&self, pos: Vector) -> bool {
        pos.x >= 0
            && (pos.x as usize) < self.width
            && pos.y >= 0
            && (pos.y as usize) < self.rows.len()
    }

    /// Human-readable description of the valid coordinate range.
    pub(crate) fn bounds_description(&self) -> String {
        format!("[0, {}) x [0, {})", self.width, self.rows.len())
    }

    /// The value stored at `pos`.
    ///
    /// This is the single bounds-checking choke point: every higher-level
    /// read goes through it.
    pub fn get(&self, pos: Vector) -> Result<&T, GridError> {
        if !self.in_bounds(pos) {
            return Err(GridError::OutOfBounds {
                pos,
                bounds: self.bounds_description(),
            });
        }
        Ok(&self.rows[pos.y as usize][pos.x as usize])
    }

    /// Neighbouring cells in all 8 compass directions, clockwise from `Up`.
    ///
    /// Neighbours falling outside the grid are skipped, so a corner cell
    /// yields 3 pairs and an interior cell 8.
    pub fn neighbours(&self, pos: Vector) -> impl Iterator<Item = (Vector, &T)> + '_ {
        self.neighbours_in(pos, &Direction::ALL)
    }

    /// Neighbouring cells in the given directions, in the given order.
    ///
    /// One candidate per direction; out-of-bounds candidates are skipped and
    /// the remaining pairs keep the input order, never reordered.
    pub fn neighbours_in<'a>(
        &'a self,
        pos: Vector,
        directions: &'a [Direction],
    ) -> impl Iterator<Item = (Vector, &'a T)> + 'a {
        directions.iter().filter_map(move |&d| {
            let v = pos + d;
            self.get(v).ok().map(|value| (v, value))
        })
    }

    /// Scan one row left to right as `(position, value)` pairs.
    ///
    /// An out-of-range `y` fails with the same out-of-bounds condition as
    /// [`get`](Grid::get), reported before any pair is produced.
    pub fn scan_row(
        &self,
        y: i32,
    ) -> Result<impl Iterator<Item = (Vector, &T)> + '_, GridError> {
        if y < 0 || (y as usize) >= self.rows.len() {
            return Err(GridError::AxisOutOfBounds {
                axis: "row",
                index: y,
                len: self.rows.len(),
            });
        }
        Ok(self.rows[y as usize]
            .iter()
            .enumerate()
            .map(move |(x, value)| (Vector::new(x as i32, y), value)))
    }

    /// Scan one column top to bottom as `(position, value)` pairs.
    ///
    /// An out-of-range `x` fails with the same out-of-bounds condition as
    /// [`get`](Grid::get), reported before any pair is produced.
    pub fn scan_column(
        &self,
        x: i32,
    ) -> Result<impl Iterator<Item = (Vector, &T)> + '_, GridError> {
        if x < 0 || (x as usize) >= self.width {
            return Err(GridError::AxisOutOfBounds {
                axis: "column",
                index: x,
                len: self.width,
            });
        }
        Ok(self
            .rows
            .iter()
            .enumerate()
            .map(move |(y, row)| (Vector::new(x, y as i32), &row[x as usize])))
    }

    /// Scan every cell in row-major order: all of row 0 left to right, then
    /// row 1, and so on.
    ///
    /// The ordering is an observable contract callers may rely on.
    pub fn scan_all(&self) -> impl Iterator<Item = (Vector, &T)> + '_ {
        self.rows.iter().enumerate().flat_map(|(y, row)| {
            row.iter()
                .enumerate()
                .map(move |(x, value)| (Vector::new(x as i32, y as i32), value))
        })
    }
}

impl<T> Default for Grid<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl Grid<char> {
    /// Build a character grid from multi-line text, one row per line.
    ///
    /// Lines are split with [`str::lines`], so `\n`/`\r\n` terminators never
    /// become cells. All lines must have the same character count.
    pub fn from_text(text: &str) -> Result<Self, GridError> {
        let mut grid = Self::new();
        for line in text.lines() {
            grid.push_row(line.chars().collect())?;
        }
        Ok(grid)
    }
}
