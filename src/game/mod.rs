//! Core game logic module for Snake on a wrap-around grid
//!
//! This module contains all the game logic without any I/O or rendering dependencies.
//! Randomness comes in through the engine, so games can be replayed from a seed.

pub mod action;
pub mod config;
pub mod engine;
pub mod error;
pub mod grid;
pub mod state;

// Re-export commonly used types
pub use action::{Action, Direction, opposing};
pub use config::{GameConfig, tick_period};
pub use engine::{GameEngine, StepInfo, StepResult, intends_turn};
pub use error::GameError;
pub use grid::{Grid, Position, in_bounds, random_position, random_target, wrap};
pub use state::{GameState, GameView, Phase, Snake, move_head};
