//! Toroidal grid geometry and random cell sampling
//!
//! Everything here is stateless apart from the random source passed in by
//! the caller. Positions use signed coordinates so a single step past an
//! edge can be represented before [`wrap`] folds it back onto the grid.

use std::collections::HashSet;

use rand::Rng;

use super::action::Direction;
use super::error::GameError;

/// Misses tolerated by [`random_target`] before it enumerates free cells.
pub const MAX_REJECTION_ATTEMPTS: usize = 64;

/// A cell on the game grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub row: i32,
    pub col: i32,
}

impl Position {
    pub fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Move position by delta, without wrapping
    pub fn moved_by(&self, d_row: i32, d_col: i32) -> Self {
        Self {
            row: self.row + d_row,
            col: self.col + d_col,
        }
    }

    /// Move position one cell in a direction, without wrapping
    pub fn moved_in_direction(&self, direction: Direction) -> Self {
        let (d_row, d_col) = direction.delta();
        self.moved_by(d_row, d_col)
    }
}

impl From<(i32, i32)> for Position {
    fn from((row, col): (i32, i32)) -> Self {
        Self::new(row, col)
    }
}

/// Fold a coordinate pair at most one grid-length off the grid back onto it.
///
/// Callers only ever pass single-step deltas; larger offsets are not folded
/// completely and yield an out-of-bounds position.
pub fn wrap(row: i32, col: i32, rows: usize, cols: usize) -> Position {
    let (rows, cols) = (rows as i32, cols as i32);
    let col = if col < 0 {
        col + cols
    } else if col >= cols {
        col - cols
    } else {
        col
    };
    let row = if row < 0 {
        row + rows
    } else if row >= rows {
        row - rows
    } else {
        row
    };
    Position::new(row, col)
}

pub fn in_bounds(rows: usize, cols: usize, pos: Position) -> bool {
    pos.row >= 0 && (pos.row as usize) < rows && pos.col >= 0 && (pos.col as usize) < cols
}

/// Sample row and column uniformly and independently
pub fn random_position<R: Rng>(rows: usize, cols: usize, rng: &mut R) -> Position {
    let row = rng.gen_range(0..rows) as i32;
    let col = rng.gen_range(0..cols) as i32;
    Position::new(row, col)
}

/// Pick a cell outside `excluded`.
///
/// Rejection-samples [`random_position`] first. Once
/// [`MAX_REJECTION_ATTEMPTS`] samples have all landed on excluded cells the
/// grid is assumed to be crowded, and the free cells are enumerated and one
/// is chosen uniformly instead.
pub fn random_target<R: Rng>(
    rows: usize,
    cols: usize,
    excluded: &HashSet<Position>,
    rng: &mut R,
) -> Result<Position, GameError> {
    for _ in 0..MAX_REJECTION_ATTEMPTS {
        let candidate = random_position(rows, cols, rng);
        if !excluded.contains(&candidate) {
            return Ok(candidate);
        }
    }

    let free: Vec<Position> = (0..rows as i32)
        .flat_map(|row| (0..cols as i32).map(move |col| Position::new(row, col)))
        .filter(|pos| !excluded.contains(pos))
        .collect();

    if free.is_empty() {
        return Err(GameError::GridExhausted { rows, cols });
    }
    Ok(free[rng.gen_range(0..free.len())])
}

/// Dimensions of the playing field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    pub rows: usize,
    pub cols: usize,
}

impl Grid {
    /// Create a grid, rejecting shapes with room for fewer than two cells
    pub fn new(rows: usize, cols: usize) -> Result<Self, GameError> {
        if rows == 0 || cols == 0 || rows.saturating_mul(cols) < 2 {
            return Err(GameError::InvalidGrid { rows, cols });
        }
        Ok(Self { rows, cols })
    }

    pub fn cell_count(&self) -> usize {
        self.rows * self.cols
    }

    pub fn center(&self) -> Position {
        Position::new((self.rows / 2) as i32, (self.cols / 2) as i32)
    }

    pub fn contains(&self, pos: Position) -> bool {
        in_bounds(self.rows, self.cols, pos)
    }

    pub fn wrap(&self, row: i32, col: i32) -> Position {
        wrap(row, col, self.rows, self.cols)
    }

    pub fn random_position<R: Rng>(&self, rng: &mut R) -> Position {
        random_position(self.rows, self.cols, rng)
    }

    pub fn random_target<R: Rng>(
        &self,
        excluded: &HashSet<Position>,
        rng: &mut R,
    ) -> Result<Position, GameError> {
        random_target(self.rows, self.cols, excluded, rng)
    }

    /// Every cell, row by row
    pub fn cells(&self) -> impl Iterator<Item = Position> + '_ {
        (0..self.rows as i32)
            .flat_map(move |row| (0..self.cols as i32).map(move |col| Position::new(row, col)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_position_movement() {
        let pos = Position::new(5, 5);
        assert_eq!(pos.moved_by(1, 0), Position::new(6, 5));
        assert_eq!(pos.moved_by(-1, 0), Position::new(4, 5));
        assert_eq!(pos.moved_in_direction(Direction::Left), Position::new(5, 4));
        assert_eq!(pos.moved_in_direction(Direction::Down), Position::new(6, 5));
    }

    #[test]
    fn test_wrap_folds_each_edge() {
        assert_eq!(wrap(0, -1, 5, 5), Position::new(0, 4));
        assert_eq!(wrap(0, 5, 5, 5), Position::new(0, 0));
        assert_eq!(wrap(-1, 3, 5, 5), Position::new(4, 3));
        assert_eq!(wrap(5, 3, 5, 5), Position::new(0, 3));
        assert_eq!(wrap(2, 2, 5, 5), Position::new(2, 2));
    }

    #[test]
    fn test_wrap_single_step_stays_in_bounds() {
        let grid = Grid::new(4, 7).unwrap();
        for cell in grid.cells() {
            for direction in Direction::ALL {
                let next = cell.moved_in_direction(direction);
                let wrapped = grid.wrap(next.row, next.col);
                assert!(grid.contains(wrapped), "{cell:?} {direction:?} -> {wrapped:?}");
            }
        }
    }

    #[test]
    fn test_bounds_checking() {
        assert!(in_bounds(20, 20, Position::new(0, 0)));
        assert!(in_bounds(20, 20, Position::new(19, 19)));
        assert!(!in_bounds(20, 20, Position::new(-1, 0)));
        assert!(!in_bounds(20, 20, Position::new(20, 0)));
        assert!(!in_bounds(20, 20, Position::new(0, 20)));
    }

    #[test]
    fn test_random_position_in_bounds() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..500 {
            let pos = random_position(3, 9, &mut rng);
            assert!(in_bounds(3, 9, pos));
        }
    }

    #[test]
    fn test_random_target_avoids_excluded() {
        let mut rng = StdRng::seed_from_u64(42);
        let excluded: HashSet<Position> = [(0, 0), (0, 1), (1, 0), (2, 2), (3, 4)]
            .into_iter()
            .map(Position::from)
            .collect();

        for _ in 0..1000 {
            let target = random_target(4, 5, &excluded, &mut rng).unwrap();
            assert!(!excluded.contains(&target));
            assert!(in_bounds(4, 5, target));
        }
    }

    #[test]
    fn test_random_target_finds_last_free_cell() {
        let grid = Grid::new(6, 6).unwrap();
        let free = Position::new(3, 1);
        let excluded: HashSet<Position> = grid.cells().filter(|&p| p != free).collect();
        let mut rng = StdRng::seed_from_u64(0);

        for _ in 0..20 {
            assert_eq!(grid.random_target(&excluded, &mut rng), Ok(free));
        }
    }

    #[test]
    fn test_random_target_full_grid() {
        let grid = Grid::new(2, 3).unwrap();
        let excluded: HashSet<Position> = grid.cells().collect();
        let mut rng = StdRng::seed_from_u64(1);

        assert_eq!(
            grid.random_target(&excluded, &mut rng),
            Err(GameError::GridExhausted { rows: 2, cols: 3 })
        );
    }

    #[test]
    fn test_grid_validation() {
        assert!(Grid::new(1, 2).is_ok());
        assert_eq!(Grid::new(1, 1), Err(GameError::InvalidGrid { rows: 1, cols: 1 }));
        assert_eq!(Grid::new(0, 10), Err(GameError::InvalidGrid { rows: 0, cols: 10 }));
    }

    #[test]
    fn test_center_uses_integer_division() {
        assert_eq!(Grid::new(5, 5).unwrap().center(), Position::new(2, 2));
        assert_eq!(Grid::new(30, 31).unwrap().center(), Position::new(15, 15));
    }
}
