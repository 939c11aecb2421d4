use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info, warn};

use super::{
    action::{Action, Direction, opposing},
    config::GameConfig,
    error::GameError,
    grid::Grid,
    state::{GameState, Phase, Snake},
};

/// Keep `current` if `requested` would reverse into the neck
pub fn intends_turn(current: Direction, requested: Direction) -> Direction {
    if opposing(current, requested) {
        current
    } else {
        requested
    }
}

/// Information about a step
#[derive(Debug, Clone, PartialEq)]
pub struct StepInfo {
    /// Whether the snake ate the target this step
    pub ate_target: bool,
    /// Whether the head ran into the body this step
    pub self_collision: bool,
    /// Whether the snake now covers every cell
    pub grid_full: bool,
}

/// Result of a game step
#[derive(Debug, Clone, PartialEq)]
pub struct StepResult {
    /// Whether the game is over after this step
    pub terminated: bool,
    /// Additional information about the step
    pub info: StepInfo,
}

impl StepResult {
    fn idle() -> Self {
        Self {
            terminated: true,
            info: StepInfo {
                ate_target: false,
                self_collision: false,
                grid_full: false,
            },
        }
    }
}

/// The game engine that handles all game logic
///
/// Owns the random source, so a seeded engine replays the same game for the
/// same inputs.
pub struct GameEngine<R: Rng = StdRng> {
    config: GameConfig,
    grid: Grid,
    rng: R,
}

impl GameEngine<StdRng> {
    /// Create a new game engine seeded from OS entropy
    pub fn new(config: GameConfig) -> Result<Self, GameError> {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// Create an engine whose games are fully determined by `seed`
    pub fn seeded(config: GameConfig, seed: u64) -> Result<Self, GameError> {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> GameEngine<R> {
    pub fn with_rng(config: GameConfig, rng: R) -> Result<Self, GameError> {
        config.validate()?;
        let grid = config.grid()?;
        Ok(Self { config, grid, rng })
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn grid(&self) -> Grid {
        self.grid
    }

    /// Start a game: centered one-cell snake, random heading, first target
    pub fn new_game(&mut self) -> Result<GameState, GameError> {
        let snake = Snake::spawn(&self.grid, &mut self.rng);
        let target = self.grid.random_target(&snake.occupied(), &mut self.rng)?;

        info!(
            rows = self.grid.rows,
            cols = self.grid.cols,
            heading = ?snake.direction,
            ?target,
            "game started"
        );

        Ok(GameState::new(snake, target, self.grid, self.config.initial_fps))
    }

    /// Execute one tick of the game
    ///
    /// A terminal state is returned untouched. A requested reversal leaves the
    /// snake where it is for this tick; any other request sets the heading and
    /// the snake advances one cell. Then either the eat or the self-collision
    /// rule fires.
    ///
    /// Eating into the last free cell ends the game in [`Phase::GridFull`]: the
    /// grown snake is kept and the eaten target stays under the head.
    pub fn tick(&mut self, state: &mut GameState, action: Action) -> StepResult {
        if state.is_game_over() {
            return StepResult::idle();
        }

        let heading = state.snake.direction;
        let blocked = action
            .requested_direction()
            .is_some_and(|requested| opposing(heading, requested));

        if !blocked {
            if let Some(requested) = action.requested_direction() {
                state.snake.direction = intends_turn(heading, requested);
            }
            state.snake.step(&state.grid);
            state.ticks += 1;
        }

        if state.snake.head() == state.target {
            state.snake.grow();
            state.fps *= self.config.speedup_factor;

            match state.grid.random_target(&state.snake.occupied(), &mut self.rng) {
                Ok(target) => state.target = target,
                Err(err) => {
                    state.phase = Phase::GridFull;
                    warn!(%err, length = state.snake.len(), "no free cell left, game ends");

                    return StepResult {
                        terminated: true,
                        info: StepInfo {
                            ate_target: true,
                            self_collision: false,
                            grid_full: true,
                        },
                    };
                }
            }

            debug!(
                score = state.score(),
                fps = state.fps,
                target = ?state.target,
                "target eaten"
            );

            return StepResult {
                terminated: false,
                info: StepInfo {
                    ate_target: true,
                    self_collision: false,
                    grid_full: false,
                },
            };
        }

        if state.snake.is_self_intersecting() {
            state.phase = Phase::GameOver;
            info!(score = state.score(), ticks = state.ticks, "game over");

            return StepResult {
                terminated: true,
                info: StepInfo {
                    ate_target: false,
                    self_collision: true,
                    grid_full: false,
                },
            };
        }

        StepResult {
            terminated: false,
            info: StepInfo {
                ate_target: false,
                self_collision: false,
                grid_full: false,
            },
        }
    }
}
