//! Game mode implementations

pub mod mt;
pub mod nomt;

use anyhow::{Context, Result};
use arcade_core::{GameConfig, TimingConfig};
use arcade_runtime::WorldTask;

/// Load the config file if one was given, otherwise use the classic board
pub fn load_config(path: Option<&str>) -> Result<GameConfig> {
    match path {
        Some(path) => GameConfig::load_from_file(path)
            .with_context(|| format!("Failed to load config from {}", path)),
        None => Ok(GameConfig::default()),
    }
}

fn world_task(timing: &TimingConfig, seed: Option<u64>) -> WorldTask {
    match seed {
        Some(seed) => WorldTask::with_seed(timing.world_period(), seed),
        None => WorldTask::new(timing.world_period()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_path_gives_default_config() {
        assert_eq!(load_config(None).unwrap(), GameConfig::default());
    }

    #[test]
    fn test_missing_file_reports_path() {
        let err = load_config(Some("/nonexistent/arcade.toml")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/arcade.toml"));
    }
}
