//! Viewer configuration: initial inputs and chart axes, read from JSON.
//!
//! The config path comes from `--config <path>` or the `WELLVIEW_CONFIG`
//! environment variable. A missing or broken file falls back to defaults
//! with a warning; it never stops the viewer from starting.

use std::path::Path;

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::curve::DrawdownInputs;
use crate::error::ConfigError;

/// Environment variable naming a config file.
pub const CONFIG_ENV_VAR: &str = "WELLVIEW_CONFIG";

/// Fixed axis ranges for one chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisRange {
    pub min: f64,
    pub max: f64,
}

impl AxisRange {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn span(&self) -> f64 {
        self.max - self.min
    }
}

/// Vertical axis ranges per aquifer type, plus where the x axis starts.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartAxes {
    pub confined_drawdown: AxisRange,
    pub unconfined_drawdown: AxisRange,
    /// Left edge of the radius axis; the right edge follows r2.
    pub radius_min: f64,
}

impl Default for ChartAxes {
    fn default() -> Self {
        Self {
            confined_drawdown: AxisRange::new(-2.0, 80.0),
            unconfined_drawdown: AxisRange::new(-0.5, 15.0),
            radius_min: -10.0,
        }
    }
}

#[derive(Resource, Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    pub inputs: DrawdownInputs,
    pub axes: ChartAxes,
}

impl ViewerConfig {
    /// Parse and validate a config from JSON text.
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let config: ViewerConfig = serde_json::from_str(text)?;
        config.inputs.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    /// Load `path` if given, else `$WELLVIEW_CONFIG` if set, else defaults.
    pub fn load_or_default(path: Option<&Path>) -> Self {
        let env_path = std::env::var_os(CONFIG_ENV_VAR);
        let Some(path) = path.or(env_path.as_deref().map(Path::new)) else {
            return Self::default();
        };

        match Self::load(path) {
            Ok(config) => {
                info!("Loaded viewer config from {}", path.display());
                config
            }
            Err(e) => {
                warn!(
                    "Config {}: {}, falling back to defaults",
                    path.display(),
                    e
                );
                Self::default()
            }
        }
    }
}
