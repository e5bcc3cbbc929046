//! Configuration loading for MargaNav.

use crate::error::Result;
use serde::Deserialize;
use std::path::Path;

/// Main configuration structure.
///
/// Every section and field has a default, so an empty TOML file (or no
/// file at all) yields a fully usable configuration.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct EngineConfig {
    /// Path planner settings.
    #[serde(default)]
    pub planner: PlannerConfig,

    /// Coordinate mapping / rendering fit settings.
    #[serde(default)]
    pub view: ViewConfig,

    /// Navigation session settings.
    #[serde(default)]
    pub session: SessionConfig,
}

impl EngineConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: EngineConfig = toml::from_str(&contents)?;
        Ok(config)
    }
}

/// Path planner settings.
#[derive(Clone, Debug, Deserialize)]
pub struct PlannerConfig {
    /// Maximum A* node expansions before giving up (default: 100000).
    ///
    /// Exhausting the budget yields an empty path, the same terminal
    /// outcome as an unreachable goal.
    #[serde(default = "default_max_expansions")]
    pub max_expansions: usize,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            max_expansions: default_max_expansions(),
        }
    }
}

/// Coordinate mapping settings.
#[derive(Clone, Debug, Deserialize)]
pub struct ViewConfig {
    /// Fraction of the viewport the fitted grid occupies (default: 0.9).
    #[serde(default = "default_fill_fraction")]
    pub fill_fraction: f32,

    /// Lower zoom clamp for pinch gestures (default: 0.5).
    #[serde(default = "default_min_zoom")]
    pub min_zoom: f32,

    /// Upper zoom clamp for pinch gestures (default: 3.0).
    #[serde(default = "default_max_zoom")]
    pub max_zoom: f32,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            fill_fraction: default_fill_fraction(),
            min_zoom: default_min_zoom(),
            max_zoom: default_max_zoom(),
        }
    }
}

/// Navigation session settings.
#[derive(Clone, Debug, Deserialize)]
pub struct SessionConfig {
    /// Taps closer together than this are ignored, in milliseconds
    /// (default: 300).
    ///
    /// Absorbs duplicate touch events from the input surface.
    #[serde(default = "default_tap_debounce_ms")]
    pub tap_debounce_ms: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            tap_debounce_ms: default_tap_debounce_ms(),
        }
    }
}

fn default_max_expansions() -> usize {
    100_000
}

fn default_fill_fraction() -> f32 {
    0.9
}

fn default_min_zoom() -> f32 {
    0.5
}

fn default_max_zoom() -> f32 {
    3.0
}

fn default_tap_debounce_ms() -> u64 {
    300
}
