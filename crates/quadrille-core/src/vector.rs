//! Integer 2D coordinates and their arithmetic.

use crate::direction::Direction;
use std::fmt;
use std::ops::{Add, Mul, Sub};

/// A 2D integer point or displacement.
///
/// `Vector` is a plain value: freely copyable, structurally comparable and
/// hashable, so it works directly as a `HashMap`/`HashSet` key. Components
/// are unconstrained `i32`s — negative and out-of-grid values are valid and
/// routinely produced as candidate positions before a bounds check.
///
/// The `y` axis grows downward, matching row order in a grid built
/// top-to-bottom: [`Direction::Up`] has displacement `(0, -1)`.
///
/// # Examples
///
/// ```
/// use quadrille_core::{Direction, Vector};
///
/// let pos = Vector::new(3, 5);
/// assert_eq!(pos.move_in(Direction::Up), Vector::new(3, 4));
/// assert_eq!(pos.move_by(Direction::Right, -2), Vector::new(1, 5));
/// assert_eq!((pos - Vector::new(1, 1)).manhattan_distance(), 6);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Vector {
    /// Horizontal component (column index when used as a grid position).
    pub x: i32,
    /// Vertical component (row index when used as a grid position).
    pub y: i32,
}

impl Vector {
    /// The origin.
    pub const ZERO: Vector = Vector { x: 0, y: 0 };

    /// Create a vector from its components.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The unit displacement of `direction`.
    pub const fn from_direction(direction: Direction) -> Self {
        let (x, y) = direction.offset();
        Self { x, y }
    }

    /// One unit step in `direction`.
    pub fn move_in(self, direction: Direction) -> Self {
        self.move_by(direction, 1)
    }

    /// `dist` unit steps in `direction`.
    ///
    /// `dist` may be zero or negative; a negative distance travels in the
    /// inverse direction. Total over the whole `i32` range.
    pub fn move_by(self, direction: Direction, dist: i32) -> Self {
        self + Vector::from_direction(direction) * dist
    }

    /// Manhattan (L1) length: `|x| + |y|`.
    pub fn manhattan_distance(self) -> u32 {
        self.x.unsigned_abs() + self.y.unsigned_abs()
    }
}

impl Add for Vector {
    type Output = Vector;

    fn add(self, rhs: Vector) -> Vector {
        Vector::new(self.x + rhs.x, self.y + rhs.y)
    }
}

/// `pos + direction` is a one-unit step, mirroring [`Vector::move_in`].
impl Add<Direction> for Vector {
    type Output = Vector;

    fn add(self, rhs: Direction) -> Vector {
        self.move_in(rhs)
    }
}

impl Sub for Vector {
    type Output = Vector;

    fn sub(self, rhs: Vector) -> Vector {
        Vector::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<i32> for Vector {
    type Output = Vector;

    fn mul(self, rhs: i32) -> Vector {
        Vector::new(self.x * rhs, self.y * rhs)
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
