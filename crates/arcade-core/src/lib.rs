//! Arcade Core - Foundational types for the arcade multitasking demo
//!
//! This crate provides the state every scheduler and task works against:
//! - `Point`, `Direction`, `Command` - Grid coordinates and player commands
//! - `GameWorld` - The shared game state machine (Running -> GameOver)
//! - `GameStatus`, `GameOverReason` - Set-once termination signal
//! - `GameConfig` - TOML-backed grid, spawn and timing settings
//! - Error types and Result alias

mod config;
mod error;
mod types;
mod world;

pub use config::{GameConfig, GridConfig, SpawnConfig, TimingConfig, MAX_GRID_SIDE};
pub use error::{ArcadeError, Result};
pub use types::{Command, Direction, Point};
pub use world::{Cell, GameOverReason, GameStatus, GameWorld, DOT_SCORE};
