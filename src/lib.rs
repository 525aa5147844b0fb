//! Grid Snake - a toroidal snake game for the terminal
//!
//! This library provides:
//! - Core game logic (game module)
//! - TUI rendering (render module)
//! - Keyboard mapping (input module)
//! - The interactive frame loop (modes module)

pub mod game;
pub mod input;
pub mod logging;
pub mod modes;
pub mod render;
