//! The 8-way compass model and its derived relations.

use crate::error::DirectionError;
use indexmap::IndexMap;
use std::sync::LazyLock;

/// A compass direction on a 2D grid: four cardinal, four ordinal.
///
/// Each direction carries a unit-step displacement (see
/// [`offset`](Direction::offset)). The `y` axis grows downward, so `Up`
/// is `(0, -1)`.
///
/// Derived relations — [`inverse`](Direction::inverse), the cardinality
/// predicates, and the [`turn`](Direction::turn) lookup — are process-wide
/// read-only constants; nothing here is recomputed per call or mutable at
/// runtime.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Toward the top edge: `(0, -1)`.
    Up,
    /// Toward the bottom edge: `(0, 1)`.
    Down,
    /// Toward the left edge: `(-1, 0)`.
    Left,
    /// Toward the right edge: `(1, 0)`.
    Right,
    /// Diagonal up-left: `(-1, -1)`.
    UpLeft,
    /// Diagonal up-right: `(1, -1)`.
    UpRight,
    /// Diagonal down-left: `(-1, 1)`.
    DownLeft,
    /// Diagonal down-right: `(1, 1)`.
    DownRight,
}

/// A relative turn applied to a cardinal direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Turn {
    /// 90° counterclockwise.
    Left,
    /// 90° clockwise.
    Right,
    /// 180°.
    Around,
}

/// Two-level turn lookup: cardinal direction → turn → cardinal direction.
///
/// Built once on first access and never mutated. Ordinal directions have no
/// entry — [`Direction::turn`] reports them as a contract violation instead
/// of falling back to a default.
static TURNS: LazyLock<IndexMap<Direction, IndexMap<Turn, Direction>>> = LazyLock::new(|| {
    let entry = |left, right, around| {
        IndexMap::from([
            (Turn::Left, left),
            (Turn::Right, right),
            (Turn::Around, around),
        ])
    };
    IndexMap::from([
        (
            Direction::Up,
            entry(Direction::Left, Direction::Right, Direction::Down),
        ),
        (
            Direction::Right,
            entry(Direction::Up, Direction::Down, Direction::Left),
        ),
        (
            Direction::Down,
            entry(Direction::Right, Direction::Left, Direction::Up),
        ),
        (
            Direction::Left,
            entry(Direction::Down, Direction::Up, Direction::Right),
        ),
    ])
});

impl Direction {
    /// All 8 directions, clockwise starting from `Up`.
    pub const ALL: [Direction; 8] = [
        Direction::Up,
        Direction::UpRight,
        Direction::Right,
        Direction::DownRight,
        Direction::Down,
        Direction::DownLeft,
        Direction::Left,
        Direction::UpLeft,
    ];

    /// The four axis-aligned directions.
    pub const CARDINAL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// The four diagonal directions.
    pub const ORDINAL: [Direction; 4] = [
        Direction::UpLeft,
        Direction::UpRight,
        Direction::DownLeft,
        Direction::DownRight,
    ];

    /// Unit-step displacement `(dx, dy)`.
    pub const fn offset(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
            Direction::UpLeft => (-1, -1),
            Direction::UpRight => (1, -1),
            Direction::DownLeft => (-1, 1),
            Direction::DownRight => (1, 1),
        }
    }

    /// The direction whose displacement is the negation of this one's.
    ///
    /// Total over all 8 directions; an involution
    /// (`d.inverse().inverse() == d`).
    pub const fn inverse(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
            Direction::UpLeft => Direction::DownRight,
            Direction::UpRight => Direction::DownLeft,
            Direction::DownLeft => Direction::UpRight,
            Direction::DownRight => Direction::UpLeft,
        }
    }

    /// `true` if the displacement has no horizontal component.
    pub const fn only_vertical(self) -> bool {
        self.offset().0 == 0
    }

    /// `true` if the displacement has no vertical component.
    pub const fn only_horizontal(self) -> bool {
        self.offset().1 == 0
    }

    /// `true` for the four axis-aligned directions.
    pub const fn is_cardinal(self) -> bool {
        self.only_vertical() || self.only_horizontal()
    }

    /// `true` for the four diagonal directions.
    pub const fn is_ordinal(self) -> bool {
        !self.is_cardinal()
    }

    /// The cardinal direction reached by turning from this one.
    ///
    /// Defined only for the four cardinal directions; asking an ordinal
    /// direction to turn is a caller contract violation and fails with
    /// [`DirectionError::NotCardinal`].
    ///
    /// # Examples
    ///
    /// ```
    /// use quadrille_core::{Direction, Turn};
    ///
    /// assert_eq!(Direction::Up.turn(Turn::Right), Ok(Direction::Right));
    /// assert_eq!(Direction::Left.turn(Turn::Around), Ok(Direction::Right));
    /// assert!(Direction::UpLeft.turn(Turn::Left).is_err());
    /// ```
    pub fn turn(self, turn: Turn) -> Result<Direction, DirectionError> {
        TURNS
            .get(&self)
            .and_then(|by_turn| by_turn.get(&turn))
            .copied()
            .ok_or(DirectionError::NotCardinal { direction: self })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vector::Vector;
    use proptest::prelude::*;

    // ── Groupings ───────────────────────────────────────────────

    #[test]
    fn all_is_clockwise_from_up() {
        assert_eq!(Direction::ALL.len(), 8);
        assert_eq!(Direction::ALL[0], Direction::Up);
        assert_eq!(Direction::ALL[2], Direction::Right);
        assert_eq!(Direction::ALL[4], Direction::Down);
        assert_eq!(Direction::ALL[6], Direction::Left);
    }

    #[test]
    fn groupings_partition_all() {
        for d in Direction::CARDINAL {
            assert!(d.is_cardinal());
            assert!(Direction::ALL.contains(&d));
        }
        for d in Direction::ORDINAL {
            assert!(d.is_ordinal());
            assert!(Direction::ALL.contains(&d));
        }
        assert_eq!(Direction::CARDINAL.len() + Direction::ORDINAL.len(), 8);
    }

    // ── Predicates ──────────────────────────────────────────────

    #[test]
    fn cardinality_predicates() {
        assert!(Direction::Up.only_vertical());
        assert!(!Direction::Up.only_horizontal());
        assert!(Direction::Left.only_horizontal());
        assert!(!Direction::UpRight.only_vertical());
        assert!(!Direction::UpRight.only_horizontal());
        assert!(!Direction::UpRight.is_cardinal());
    }

    // ── Inverse ─────────────────────────────────────────────────

    #[test]
    fn inverse_is_involution() {
        for d in Direction::ALL {
            assert_eq!(d.inverse().inverse(), d);
        }
    }

    #[test]
    fn inverse_displacement_negates() {
        for d in Direction::ALL {
            let sum = Vector::from_direction(d) + Vector::from_direction(d.inverse());
            assert_eq!(sum, Vector::ZERO, "inverse of {d:?} does not negate");
        }
    }

    // ── Turn relation ───────────────────────────────────────────

    #[test]
    fn turns_are_distinct_cardinals() {
        for d in Direction::CARDINAL {
            let left = d.turn(Turn::Left).unwrap();
            let right = d.turn(Turn::Right).unwrap();
            let around = d.turn(Turn::Around).unwrap();
            assert!(left.is_cardinal() && right.is_cardinal() && around.is_cardinal());
            assert_ne!(left, right);
            assert_ne!(left, around);
            assert_ne!(right, around);
        }
    }

    #[test]
    fn around_is_involution_and_matches_inverse() {
        for d in Direction::CARDINAL {
            let around = d.turn(Turn::Around).unwrap();
            assert_eq!(around.turn(Turn::Around).unwrap(), d);
            assert_eq!(around, d.inverse());
        }
    }

    #[test]
    fn left_and_right_cancel() {
        for d in Direction::CARDINAL {
            assert_eq!(d.turn(Turn::Left).unwrap().turn(Turn::Right).unwrap(), d);
            assert_eq!(d.turn(Turn::Right).unwrap().turn(Turn::Left).unwrap(), d);
        }
    }

    #[test]
    fn turn_worked_examples() {
        assert_eq!(Direction::Up.turn(Turn::Right), Ok(Direction::Right));
        assert_eq!(Direction::Right.turn(Turn::Right), Ok(Direction::Down));
        assert_eq!(Direction::Down.turn(Turn::Left), Ok(Direction::Right));
        assert_eq!(Direction::Left.turn(Turn::Around), Ok(Direction::Right));
    }

    #[test]
    fn ordinal_turn_fails_loudly() {
        for d in Direction::ORDINAL {
            for t in [Turn::Left, Turn::Right, Turn::Around] {
                assert_eq!(d.turn(t), Err(DirectionError::NotCardinal { direction: d }));
            }
        }
    }

    // ── Property tests ──────────────────────────────────────────

    proptest! {
        #[test]
        fn four_right_turns_return_home(idx in 0usize..4) {
            let d = Direction::CARDINAL[idx];
            let mut walked = d;
            for _ in 0..4 {
                walked = walked.turn(Turn::Right).unwrap();
            }
            prop_assert_eq!(walked, d);
        }

        #[test]
        fn offsets_are_unit_steps(idx in 0usize..8) {
            let d = Direction::ALL[idx];
            let (dx, dy) = d.offset();
            prop_assert!((-1..=1).contains(&dx));
            prop_assert!((-1..=1).contains(&dy));
            prop_assert!((dx, dy) != (0, 0));
            // Cardinal directions move along exactly one axis.
            prop_assert_eq!(d.is_cardinal(), dx == 0 || dy == 0);
        }
    }
}
