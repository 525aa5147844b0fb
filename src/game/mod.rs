//! Core game logic module for Snake
//!
//! This module contains all the game logic without any I/O or rendering dependencies.
//! The state is an explicit value handed to the engine on every tick.

pub mod action;
pub mod config;
pub mod engine;
pub mod food;
pub mod grid;
pub mod state;

// Re-export commonly used types
pub use action::Direction;
pub use config::{ConfigError, GameConfig};
pub use engine::{GameEngine, TickOutcome};
pub use food::{FALLBACK_FOOD_GLYPH, FOOD_GLYPHS, food_glyph, food_glyph_from_env};
pub use grid::Grid;
pub use state::{GameState, Point, Snake};
