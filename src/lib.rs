//! Wrap Snake - Snake on a toroidal grid
//!
//! This library provides:
//! - Core game logic: grid geometry, the snake state machine, target placement (game module)
//! - Keyboard mapping (input module)
//! - TUI rendering (render module)
//! - Session statistics (metrics module)
//! - The interactive terminal driver (modes module)

pub mod game;
pub mod input;
pub mod metrics;
pub mod modes;
pub mod render;
