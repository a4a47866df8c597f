//! Game configuration loaded from TOML.
//!
//! Every field has a default matching the classic 20×20 board, so an empty
//! file (or no file at all) yields the standard game.

use crate::error::{ArcadeError, Result};
use crate::types::Point;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

/// Largest accepted grid side; the board must fit on a terminal screen
pub const MAX_GRID_SIDE: i32 = 256;

/// Top-level game configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub grid: GridConfig,
    pub spawn: SpawnConfig,
    pub timing: TimingConfig,
}

/// Board dimensions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    pub width: i32,
    pub height: i32,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            width: 20,
            height: 20,
        }
    }
}

/// Initial placement and score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpawnConfig {
    pub pacman: Point,
    pub ghosts: Vec<Point>,
    /// Starts below zero so that eating the dot under the spawn point nets 0
    pub initial_score: i64,
}

impl Default for SpawnConfig {
    fn default() -> Self {
        Self {
            pacman: Point::ORIGIN,
            ghosts: vec![Point::new(5, 5), Point::new(10, 10)],
            initial_score: -10,
        }
    }
}

/// Scheduler and task cadences, in milliseconds.
///
/// `time_slice_ms` is the scheduler tick; the `*_period_ms` values are each
/// task's own pacing. A period of 0 means "every tick".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimingConfig {
    pub time_slice_ms: u64,
    pub input_period_ms: u64,
    pub world_period_ms: u64,
    pub render_period_ms: u64,
    /// Delay before the exclusive scheduler hands out its token
    pub startup_delay_ms: u64,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            time_slice_ms: 500,
            input_period_ms: 0,
            world_period_ms: 1000,
            render_period_ms: 1000,
            startup_delay_ms: 100,
        }
    }
}

impl TimingConfig {
    pub fn time_slice(&self) -> Duration {
        Duration::from_millis(self.time_slice_ms)
    }

    pub fn input_period(&self) -> Duration {
        Duration::from_millis(self.input_period_ms)
    }

    pub fn world_period(&self) -> Duration {
        Duration::from_millis(self.world_period_ms)
    }

    pub fn render_period(&self) -> Duration {
        Duration::from_millis(self.render_period_ms)
    }

    pub fn startup_delay(&self) -> Duration {
        Duration::from_millis(self.startup_delay_ms)
    }
}

impl GameConfig {
    /// Load and validate a config from a TOML file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Parse and validate a config from a TOML string
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: GameConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that the board is non-empty, spawns are on it and the tick is non-zero
    pub fn validate(&self) -> Result<()> {
        let GridConfig { width, height } = self.grid;
        if width < 1 || height < 1 {
            return Err(ArcadeError::InvalidConfig(format!(
                "grid must be at least 1x1, got {}x{}",
                width, height
            )));
        }
        if width > MAX_GRID_SIDE || height > MAX_GRID_SIDE {
            return Err(ArcadeError::InvalidConfig(format!(
                "grid must be at most {}x{}, got {}x{}",
                MAX_GRID_SIDE, MAX_GRID_SIDE, width, height
            )));
        }

        let on_board = |p: &Point| 0 <= p.x && p.x < width && 0 <= p.y && p.y < height;
        if !on_board(&self.spawn.pacman) {
            return Err(ArcadeError::InvalidConfig(format!(
                "pacman spawn {} is outside the {}x{} grid",
                self.spawn.pacman, width, height
            )));
        }
        if let Some(ghost) = self.spawn.ghosts.iter().find(|g| !on_board(*g)) {
            return Err(ArcadeError::InvalidConfig(format!(
                "ghost spawn {} is outside the {}x{} grid",
                ghost, width, height
            )));
        }

        if self.timing.time_slice_ms == 0 {
            return Err(ArcadeError::InvalidConfig(
                "timing.time_slice_ms must be at least 1".to_string(),
            ));
        }

        Ok(())
    }
}
