use super::error::GameError;

/// Direction the snake can move
///
/// The discriminants are the ordinals used by [`opposing`]: Left and Right
/// sit two apart, as do Up and Down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Left = 0,
    Up = 1,
    Right = 2,
    Down = 3,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Up,
        Direction::Right,
        Direction::Down,
    ];

    pub fn ordinal(self) -> u8 {
        self as u8
    }

    /// The direction pointing the other way
    pub fn opposite(self) -> Direction {
        Direction::ALL[((self.ordinal() + 2) % 4) as usize]
    }

    /// Returns the delta (d_row, d_col) for moving in this direction
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::Left => (0, -1),
            Direction::Up => (-1, 0),
            Direction::Right => (0, 1),
            Direction::Down => (1, 0),
        }
    }
}

impl TryFrom<u8> for Direction {
    type Error = GameError;

    fn try_from(ordinal: u8) -> Result<Self, Self::Error> {
        Direction::ALL
            .get(ordinal as usize)
            .copied()
            .ok_or(GameError::InvalidDirection(ordinal))
    }
}

/// True iff {a, b} is {Left, Right} or {Up, Down}
pub fn opposing(a: Direction, b: Direction) -> bool {
    let (lo, hi) = if a.ordinal() <= b.ordinal() {
        (a.ordinal(), b.ordinal())
    } else {
        (b.ordinal(), a.ordinal())
    };
    matches!((lo, hi), (0, 2) | (1, 3))
}

/// Action that can be taken in the game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Move in a specific direction
    Move(Direction),
    /// Continue in current direction
    Continue,
}

impl Action {
    pub fn requested_direction(self) -> Option<Direction> {
        match self {
            Action::Move(direction) => Some(direction),
            Action::Continue => None,
        }
    }
}

impl From<Direction> for Action {
    fn from(direction: Direction) -> Self {
        Action::Move(direction)
    }
}

impl From<Option<Direction>> for Action {
    fn from(direction: Option<Direction>) -> Self {
        direction.map(Action::Move).unwrap_or(Action::Continue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opposite_directions() {
        assert!(opposing(Direction::Up, Direction::Down));
        assert!(opposing(Direction::Down, Direction::Up));
        assert!(opposing(Direction::Left, Direction::Right));
        assert!(opposing(Direction::Right, Direction::Left));

        assert!(!opposing(Direction::Up, Direction::Left));
        assert!(!opposing(Direction::Up, Direction::Right));
    }

    #[test]
    fn test_same_direction_is_not_opposing() {
        for d in Direction::ALL {
            assert!(!opposing(d, d));
        }
    }

    #[test]
    fn test_opposite_is_the_only_opposing_pair() {
        for a in Direction::ALL {
            for b in Direction::ALL {
                assert_eq!(opposing(a, b), b == a.opposite(), "{a:?} vs {b:?}");
            }
        }
    }

    #[test]
    fn test_direction_delta() {
        assert_eq!(Direction::Up.delta(), (-1, 0));
        assert_eq!(Direction::Down.delta(), (1, 0));
        assert_eq!(Direction::Left.delta(), (0, -1));
        assert_eq!(Direction::Right.delta(), (0, 1));
    }

    #[test]
    fn test_ordinals() {
        assert_eq!(Direction::try_from(0u8), Ok(Direction::Left));
        assert_eq!(Direction::try_from(1u8), Ok(Direction::Up));
        assert_eq!(Direction::try_from(2u8), Ok(Direction::Right));
        assert_eq!(Direction::try_from(3u8), Ok(Direction::Down));
        assert_eq!(Direction::try_from(4u8), Err(GameError::InvalidDirection(4)));
    }

    #[test]
    fn test_action_from_optional_direction() {
        assert_eq!(Action::from(Some(Direction::Up)), Action::Move(Direction::Up));
        assert_eq!(Action::from(None), Action::Continue);
        assert_eq!(Action::Continue.requested_direction(), None);
    }
}
