use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::{action::Direction, grid::Grid, state::Point};

/// Largest board the terminal renderer is expected to fit
pub const MAX_GRID_SIZE: usize = 64;

/// Errors raised while loading or validating a [`GameConfig`]
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Grid size {0} is outside 2..={max}", max = MAX_GRID_SIZE)]
    GridSize(usize),

    #[error("{0} must be greater than zero")]
    Zero(&'static str),

    #[error("Starting cell ({x}, {y}) is off the {size}x{size} grid")]
    OffGrid { x: i32, y: i32, size: usize },

    #[error("Starting snake covers ({x}, {y}) more than once")]
    Overlap { x: i32, y: i32 },

    #[error("Starting snake leaves no free cell for food")]
    NoRoomForFood,
}

/// Configuration for the game
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Cells per side of the square grid
    pub grid_size: usize,
    /// Real time between two simulation ticks
    pub tick_interval_ms: u64,
    /// Real time between two redraws
    pub frame_interval_ms: u64,

    pub initial_head: Point,
    /// Starting body from neck to tail end
    pub initial_tail: Vec<Point>,
    pub initial_direction: Direction,

    /// Random draws tried before food placement falls back to
    /// choosing among the free cells directly
    pub food_retry_limit: u32,
    /// Fixed RNG seed, for reproducible food placement
    pub seed: Option<u64>,
    /// Draw the food as a glyph instead of a colored square
    pub food_glyph: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_size: 10,
            tick_interval_ms: 250,
            frame_interval_ms: 16,
            initial_head: Point::new(3, 3),
            initial_tail: (4..=8).map(|y| Point::new(3, y)).collect(),
            initial_direction: Direction::Up,
            food_retry_limit: 64,
            seed: None,
            food_glyph: false,
        }
    }
}

impl GameConfig {
    /// Load a JSON config file; keys it leaves out keep their defaults
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&json).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn grid(&self) -> Grid {
        Grid::new(self.grid_size as i32)
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    pub fn frame_interval(&self) -> Duration {
        Duration::from_millis(self.frame_interval_ms)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(2..=MAX_GRID_SIZE).contains(&self.grid_size) {
            return Err(ConfigError::GridSize(self.grid_size));
        }
        if self.tick_interval_ms == 0 {
            return Err(ConfigError::Zero("tick_interval_ms"));
        }
        if self.frame_interval_ms == 0 {
            return Err(ConfigError::Zero("frame_interval_ms"));
        }
        if self.food_retry_limit == 0 {
            return Err(ConfigError::Zero("food_retry_limit"));
        }

        let grid = self.grid();
        let mut seen = HashSet::new();
        for &p in std::iter::once(&self.initial_head).chain(&self.initial_tail) {
            if !grid.contains(p) {
                return Err(ConfigError::OffGrid {
                    x: p.x,
                    y: p.y,
                    size: self.grid_size,
                });
            }
            if !seen.insert(p) {
                return Err(ConfigError::Overlap { x: p.x, y: p.y });
            }
        }

        if grid.food_cells().all(|p| seen.contains(&p)) {
            return Err(ConfigError::NoRoomForFood);
        }

        Ok(())
    }
}
