use std::collections::{HashSet, VecDeque};

use rand::Rng;

use super::action::Direction;
use super::error::GameError;
use super::grid::{Grid, Position, wrap};

/// Apply a unit step in `direction` to `head` and wrap it back onto the grid
pub fn move_head(head: Position, direction: Direction, grid: &Grid) -> Position {
    let next = head.moved_in_direction(direction);
    wrap(next.row, next.col, grid.rows, grid.cols)
}

/// The snake in the game
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    /// Body segments, with head at index 0
    body: VecDeque<Position>,
    /// Current direction of movement
    pub direction: Direction,
    /// Cell dropped by the most recent step, re-used by `grow`
    vacated: Option<Position>,
}

impl Snake {
    /// Single-cell snake at the grid center with a random heading
    pub fn spawn<R: Rng>(grid: &Grid, rng: &mut R) -> Self {
        let direction = Direction::ALL[rng.gen_range(0..Direction::ALL.len())];
        Self {
            body: VecDeque::from([grid.center()]),
            direction,
            vacated: None,
        }
    }

    /// Snake with an explicit body (head first) and heading
    pub fn from_parts(
        body: impl IntoIterator<Item = Position>,
        direction: Direction,
    ) -> Result<Self, GameError> {
        let body: VecDeque<Position> = body.into_iter().collect();
        if body.is_empty() {
            return Err(GameError::EmptySnake);
        }
        Ok(Self {
            body,
            direction,
            vacated: None,
        })
    }

    /// Get the head position
    pub fn head(&self) -> Position {
        self.body[0]
    }

    /// Get the tail position (last segment)
    pub fn tail(&self) -> Position {
        self.body[self.body.len() - 1]
    }

    pub fn body(&self) -> &VecDeque<Position> {
        &self.body
    }

    pub fn positions(&self) -> Vec<Position> {
        self.body.iter().copied().collect()
    }

    pub fn occupied(&self) -> HashSet<Position> {
        self.body.iter().copied().collect()
    }

    pub fn contains(&self, pos: Position) -> bool {
        self.body.contains(&pos)
    }

    /// Advance one cell in the current direction; length is unchanged
    pub fn step(&mut self, grid: &Grid) {
        let new_head = move_head(self.head(), self.direction, grid);
        self.vacated = self.body.pop_back();
        self.body.push_front(new_head);
    }

    /// Lengthen the body by one cell.
    ///
    /// Puts back the cell the last `step` dropped, so the result equals a
    /// step that kept its tail. Before any step the tail is duplicated.
    pub fn grow(&mut self) {
        let cell = self.vacated.take().unwrap_or_else(|| self.tail());
        self.body.push_back(cell);
    }

    /// True iff the head also appears further down the body
    pub fn is_self_intersecting(&self) -> bool {
        let head = self.head();
        self.body.iter().skip(1).any(|&pos| pos == head)
    }

    /// Number of eat events so far
    pub fn score(&self) -> usize {
        self.body.len() - 1
    }

    /// Get the length of the snake
    pub fn len(&self) -> usize {
        self.body.len()
    }
}

/// Lifecycle of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Active,
    /// The head ran into the body
    GameOver,
    /// The snake covers every cell, no target can be placed
    GridFull,
}

/// Complete game state
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub snake: Snake,
    pub target: Position,
    pub phase: Phase,
    /// Ticks per second; rises on every eat
    pub fps: f64,
    pub ticks: u64,
    pub grid: Grid,
}

impl GameState {
    /// Create a new game state
    pub fn new(snake: Snake, target: Position, grid: Grid, fps: f64) -> Self {
        Self {
            snake,
            target,
            phase: Phase::Active,
            fps,
            ticks: 0,
            grid,
        }
    }

    /// True in either terminal phase
    pub fn is_game_over(&self) -> bool {
        self.phase != Phase::Active
    }

    pub fn score(&self) -> usize {
        self.snake.score()
    }

    /// Snapshot handed to the renderer each tick
    pub fn view(&self) -> GameView {
        GameView {
            body: self.snake.positions(),
            target: self.target,
            game_over: self.is_game_over(),
            grid_full: self.phase == Phase::GridFull,
            score: self.score(),
            fps: self.fps,
        }
    }
}

/// Per-tick output of the state machine
#[derive(Debug, Clone, PartialEq)]
pub struct GameView {
    /// Occupied cells, head first
    pub body: Vec<Position>,
    pub target: Position,
    pub game_over: bool,
    /// Game ended because the board filled up
    pub grid_full: bool,
    pub score: usize,
    pub fps: f64,
}
