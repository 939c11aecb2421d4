use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use super::error::GameError;
use super::grid::Grid;

/// Configuration for the game
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Number of grid rows
    pub grid_height: usize,
    /// Number of grid columns
    pub grid_width: usize,
    /// Size of one cell in window units, used when deriving the grid from a window
    pub cell_size: usize,
    /// Tick rate at the start of a game
    pub initial_fps: f64,
    /// Tick rate multiplier applied on every eat
    pub speedup_factor: f64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_height: 30,
            grid_width: 30,
            cell_size: 15,
            initial_fps: 10.0,
            speedup_factor: 1.02,
        }
    }
}

impl GameConfig {
    /// Create a new configuration with a custom grid size
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            grid_height: rows,
            grid_width: cols,
            ..Default::default()
        }
    }

    /// Derive the grid from a window size and a cell size
    pub fn from_window(width: usize, height: usize, cell_size: usize) -> Result<Self, GameError> {
        if cell_size == 0 {
            return Err(GameError::InvalidCellSize);
        }
        Ok(Self {
            grid_height: height / cell_size,
            grid_width: width / cell_size,
            cell_size,
            ..Default::default()
        })
    }

    /// Create a small grid for testing
    pub fn small() -> Self {
        Self::new(10, 10)
    }

    /// Load a configuration from a JSON file; missing fields take defaults
    pub fn load_json(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: GameConfig =
            serde_json::from_str(&json).context("Failed to deserialize game config")?;
        config.validate().context("Invalid game config")?;
        Ok(config)
    }

    pub fn grid(&self) -> Result<Grid, GameError> {
        Grid::new(self.grid_height, self.grid_width)
    }

    pub fn validate(&self) -> Result<(), GameError> {
        self.grid()?;
        if self.cell_size == 0 {
            return Err(GameError::InvalidCellSize);
        }
        if !self.initial_fps.is_finite() || self.initial_fps <= 0.0 {
            return Err(GameError::InvalidTickRate(self.initial_fps));
        }
        if !self.speedup_factor.is_finite() || self.speedup_factor < 1.0 {
            return Err(GameError::InvalidSpeedup(self.speedup_factor));
        }
        Ok(())
    }
}

/// Time between two ticks at the given rate
pub fn tick_period(fps: f64) -> Duration {
    Duration::from_secs_f64(1.0 / fps)
}
