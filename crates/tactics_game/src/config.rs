//! Game configuration: default asset paths plus an optional JSON override file.

use serde::Deserialize;
use std::fs;
use std::path::Path;

use tactics_core::explore::DEFAULT_WALK_SPEED;
use tactics_core::grid::GridSpec;
use tactics_core::time::DEFAULT_FIXED_DT_US;

pub const CONFIG_PATH: &str = "assets/config/game.json";
pub const SCRIPT_PATH: &str = "assets/scripts/demo_session.json";
const WORLD_PATH: &str = "assets/worlds/town.json";

#[derive(Debug, Deserialize, Clone)]
pub struct GameConfig {
    #[serde(default)]
    pub battle: GridSpec,
    #[serde(default)]
    pub explore: ExploreConfig,
    #[serde(default = "default_world_path")]
    pub world_path: String,
    #[serde(default = "default_fixed_dt_us")]
    pub fixed_dt_us: u64,
}

#[derive(Debug, Deserialize, Clone, Copy)]
pub struct ExploreConfig {
    #[serde(default = "default_walk_speed")]
    pub walk_speed: f32,
    #[serde(default = "default_walk_frame_rate")]
    pub walk_frame_rate: u32,
    #[serde(default = "default_body_width")]
    pub body_width: f32,
    #[serde(default = "default_body_height")]
    pub body_height: f32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            battle: GridSpec::default(),
            explore: ExploreConfig::default(),
            world_path: default_world_path(),
            fixed_dt_us: default_fixed_dt_us(),
        }
    }
}

impl Default for ExploreConfig {
    fn default() -> Self {
        Self {
            walk_speed: default_walk_speed(),
            walk_frame_rate: default_walk_frame_rate(),
            body_width: default_body_width(),
            body_height: default_body_height(),
        }
    }
}

pub fn load_config_from_path(path: &Path) -> Result<GameConfig, String> {
    let raw = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    let config: GameConfig = serde_json::from_str(&raw)
        .map_err(|e| format!("Failed to parse config JSON {}: {e}", path.display()))?;
    validate_config(&config)?;
    Ok(config)
}

/// Load `path` if present; a missing file falls back to defaults.
pub fn load_config_or_default(path: &Path) -> Result<GameConfig, String> {
    if !path.exists() {
        log::warn!(
            "Config '{}' not found, using built-in defaults.",
            path.display()
        );
        return Ok(GameConfig::default());
    }
    load_config_from_path(path)
}

fn validate_config(config: &GameConfig) -> Result<(), String> {
    config
        .battle
        .validate()
        .map_err(|e| format!("Config validation failed: {e}"))?;
    if config.explore.walk_speed <= 0.0 {
        return Err("Config validation failed: explore.walk_speed must be > 0".to_string());
    }
    if config.explore.walk_frame_rate == 0 {
        return Err("Config validation failed: explore.walk_frame_rate must be > 0".to_string());
    }
    if config.explore.body_width <= 0.0 || config.explore.body_height <= 0.0 {
        return Err("Config validation failed: explore body size must be > 0".to_string());
    }
    if config.fixed_dt_us == 0 {
        return Err("Config validation failed: fixed_dt_us must be > 0".to_string());
    }
    Ok(())
}

fn default_world_path() -> String {
    WORLD_PATH.to_string()
}

const fn default_fixed_dt_us() -> u64 {
    DEFAULT_FIXED_DT_US
}

const fn default_walk_speed() -> f32 {
    DEFAULT_WALK_SPEED
}

const fn default_walk_frame_rate() -> u32 {
    10
}

const fn default_body_width() -> f32 {
    30.0
}

const fn default_body_height() -> f32 {
    40.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{SystemTime, UNIX_EPOCH};

    fn temp_file_path(name_hint: &str) -> std::path::PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("system time before unix epoch")
            .as_nanos();
        std::env::temp_dir().join(format!(
            "tactics_config_test_{}_{}_{}.json",
            name_hint,
            std::process::id(),
            nanos
        ))
    }

    #[test]
    fn empty_object_gives_defaults() {
        let path = temp_file_path("empty");
        fs::write(&path, "{}").expect("write temp file");
        let config = load_config_from_path(&path).expect("defaults should load");
        assert_eq!(config.battle, GridSpec::new(10, 10, 80));
        assert_eq!(config.explore.walk_speed, 175.0);
        assert_eq!(config.explore.walk_frame_rate, 10);
        assert_eq!(config.world_path, WORLD_PATH);
        let _ = fs::remove_file(path);
    }

    #[test]
    fn partial_override_keeps_other_defaults() {
        let path = temp_file_path("partial");
        fs::write(&path, r#"{ "battle": { "width": 6 }, "explore": { "walk_speed": 90.0 } }"#)
            .expect("write temp file");
        let config = load_config_from_path(&path).expect("partial config should load");
        assert_eq!(config.battle, GridSpec::new(6, 10, 80));
        assert_eq!(config.explore.walk_speed, 90.0);
        assert_eq!(config.explore.body_height, 40.0);
        let _ = fs::remove_file(path);
    }

    #[test]
    fn rejects_zero_cell_size() {
        let path = temp_file_path("zero_cell");
        fs::write(&path, r#"{ "battle": { "cell_size": 0 } }"#).expect("write temp file");
        let err = load_config_from_path(&path).expect_err("zero cell size should fail");
        assert!(err.contains("cell_size must be > 0"));
        let _ = fs::remove_file(path);
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let path = temp_file_path("missing");
        let config = load_config_or_default(&path).expect("missing config is not fatal");
        assert_eq!(config.fixed_dt_us, DEFAULT_FIXED_DT_US);
    }

    #[test]
    fn shipped_config_matches_defaults() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("../..")
            .join(CONFIG_PATH);
        let config = load_config_from_path(&path).expect("shipped config should load");
        assert_eq!(config.battle, GridSpec::default());
        assert_eq!(config.world_path, WORLD_PATH);
        assert_eq!(config.explore.walk_speed, DEFAULT_WALK_SPEED);
    }
}
