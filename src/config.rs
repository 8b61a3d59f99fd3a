use std::path::Path;

use egui::Color32;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Environment variable naming an optional JSON config file
pub const CONFIG_ENV_VAR: &str = "SKETCH_CONFIG";

/// Look and window settings for the sketch canvas.
///
/// Missing fields fall back to their defaults, so a config file only needs to
/// list what it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SketchConfig {
    pub stroke_color: Color32,
    pub stroke_width: f32,
    pub background: Color32,
    /// 0 draws clean geometry, 1 a light wobble, 2 and up gets very sketchy
    pub roughness: f32,
    /// Seed for the hand-drawn jitter
    pub seed: u32,
    pub window_size: [f32; 2],
}

impl Default for SketchConfig {
    fn default() -> Self {
        Self {
            stroke_color: Color32::from_gray(20),
            stroke_width: 2.0,
            background: Color32::from_rgb(250, 250, 245),
            roughness: 1.0,
            seed: 42,
            window_size: [1024.0, 768.0],
        }
    }
}

impl SketchConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    /// Load from the file named by `SKETCH_CONFIG`, or use the defaults.
    pub fn from_env() -> Self {
        let Some(path) = std::env::var_os(CONFIG_ENV_VAR) else {
            return Self::default();
        };

        match Self::load(&path) {
            Ok(config) => {
                log::info!("Loaded config from {:?}", path);
                config
            }
            Err(err) => {
                log::warn!("{}; using default config", err);
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_uses_defaults() {
        let config = SketchConfig::from_json_str(r#"{ "roughness": 0.0, "seed": 7 }"#).unwrap();
        assert_eq!(config.roughness, 0.0);
        assert_eq!(config.seed, 7);
        assert_eq!(config.stroke_width, SketchConfig::default().stroke_width);
        assert_eq!(config.window_size, [1024.0, 768.0]);
    }

    #[test]
    fn test_invalid_config() {
        let result = SketchConfig::from_json_str(r#"{ "roughness": "very" }"#);
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_missing_file() {
        let result = SketchConfig::load("/definitely/not/here/sketch.json");
        assert!(matches!(result, Err(ConfigError::Read { .. })));
    }
}
