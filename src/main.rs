use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;
use wrap_snake::game::GameConfig;
use wrap_snake::modes::HumanMode;

#[derive(Parser)]
#[command(name = "wrap_snake")]
#[command(version, about = "Snake on a wrap-around grid")]
struct Cli {
    /// Window width; the grid has width / cell-size columns
    #[arg(long, default_value = "450")]
    width: usize,

    /// Window height; the grid has height / cell-size rows
    #[arg(long, default_value = "450")]
    height: usize,

    /// Size of one grid cell in window units
    #[arg(long, default_value = "15")]
    cell_size: usize,

    /// Number of grid rows (overrides height / cell-size)
    #[arg(long)]
    rows: Option<usize>,

    /// Number of grid columns (overrides width / cell-size)
    #[arg(long)]
    cols: Option<usize>,

    /// Initial ticks per second
    #[arg(long)]
    fps: Option<f64>,

    /// Tick rate multiplier applied each time a target is eaten
    #[arg(long)]
    speedup: Option<f64>,

    /// Seed for a reproducible game
    #[arg(long)]
    seed: Option<u64>,

    /// Load game settings from a JSON file; other flags override it
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write logs to this file (RUST_LOG controls the level)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

impl Cli {
    fn game_config(&self) -> Result<GameConfig> {
        let mut config = match &self.config {
            Some(path) => GameConfig::load_json(path)?,
            None => GameConfig::from_window(self.width, self.height, self.cell_size)
                .context("Invalid window geometry")?,
        };

        if let Some(rows) = self.rows {
            config.grid_height = rows;
        }
        if let Some(cols) = self.cols {
            config.grid_width = cols;
        }
        if let Some(fps) = self.fps {
            config.initial_fps = fps;
        }
        if let Some(speedup) = self.speedup {
            config.speedup_factor = speedup;
        }

        config.validate().context("Invalid game settings")?;
        Ok(config)
    }
}

fn init_logging(path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // The terminal belongs to the UI, so logs only go to a file when asked
    if let Some(path) = &cli.log_file {
        init_logging(path)?;
    }

    let config = cli.game_config()?;

    let mut human_mode = HumanMode::new(config, cli.seed)?;
    human_mode.run().await?;

    Ok(())
}
