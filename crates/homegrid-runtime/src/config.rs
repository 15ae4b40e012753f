#![forbid(unsafe_code)]

//! Home-screen configuration as data.
//!
//! Collects every tunable (grid size, gesture thresholds, pixel metrics,
//! feature toggles) into one [`HomeConfig`] that can be loaded from TOML or
//! JSON at startup.
//!
//! # Loading
//!
//! ```toml
//! # homegrid.toml
//! [grid]
//! columns = 4
//! rows = 6
//!
//! [gesture]
//! long_press_ms = 400
//! press_tolerance_px = 10.0
//!
//! [home]
//! enable_swipe = true
//! ```
//!
//! ```rust,ignore
//! let config = HomeConfig::from_toml_file("homegrid.toml")?;
//! let config = HomeConfig::from_json_str(json)?;
//! ```
//!
//! # Defaults
//!
//! Every field has a default, so a missing section (or an empty file)
//! produces the stock 4×6 launcher.

use std::path::Path;

use homegrid_core::geometry::Point;
use homegrid_core::gesture::GestureConfig;
use homegrid_layout::catalog::default_icons;
use homegrid_layout::{Grid, GridMetrics, arrangement_issues};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use web_time::Duration;

/// Default key the committed layout is stored under.
pub const DEFAULT_STORAGE_KEY: &str = "homegrid_layout_v1";

// ---------------------------------------------------------------------------
// Top-level HomeConfig
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct HomeConfig {
    pub grid: GridSettings,
    pub gesture: GestureSettings,
    pub metrics: MetricsSettings,
    pub home: HomeSettings,
}

impl HomeConfig {
    /// Load from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Load from a TOML file on disk.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&content)
    }

    /// Load from a JSON string.
    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(s)?)
    }

    /// Load from a JSON file on disk.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&content)
    }

    /// Validate all parameters are within acceptable ranges.
    ///
    /// Returns a list of validation errors. An empty list means the config
    /// is valid.
    #[must_use]
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if self.grid.columns == 0 {
            errors.push("grid.columns must be > 0".into());
        }
        if self.grid.rows == 0 {
            errors.push("grid.rows must be > 0".into());
        }
        // The default catalog is the fallback layout, so it must fit.
        if let Ok(grid) = Grid::new(self.grid.columns, self.grid.rows)
            && let Some(issue) = arrangement_issues(&grid, &default_icons()).first()
        {
            errors.push(format!(
                "grid {}x{} cannot hold the default layout: {issue}",
                self.grid.columns, self.grid.rows
            ));
        }

        if self.gesture.long_press_ms == 0 {
            errors.push("gesture.long_press_ms must be > 0".into());
        }
        for (name, value) in [
            ("gesture.press_tolerance_px", self.gesture.press_tolerance_px),
            ("gesture.drag_tolerance_px", self.gesture.drag_tolerance_px),
            ("gesture.swipe_threshold_px", self.gesture.swipe_threshold_px),
        ] {
            if !value.is_finite() || value < 0.0 {
                errors.push(format!("{name} must be finite and >= 0, got {value}"));
            }
        }

        for (name, value) in [
            ("metrics.cell_width", self.metrics.cell_width),
            ("metrics.cell_height", self.metrics.cell_height),
        ] {
            if !value.is_finite() || value <= 0.0 {
                errors.push(format!("{name} must be finite and > 0, got {value}"));
            }
        }
        if !self.metrics.gap.is_finite() || self.metrics.gap < 0.0 {
            errors.push(format!(
                "metrics.gap must be finite and >= 0, got {}",
                self.metrics.gap
            ));
        }
        if !self.metrics.origin_x.is_finite() || !self.metrics.origin_y.is_finite() {
            errors.push("metrics.origin_x/origin_y must be finite".into());
        }

        if self.home.storage_key.trim().is_empty() {
            errors.push("home.storage_key must not be empty".into());
        }

        errors
    }

    /// Return `self` if [`validate`](Self::validate) finds nothing.
    pub fn validated(self) -> Result<Self, ConfigError> {
        let errors = self.validate();
        if errors.is_empty() {
            Ok(self)
        } else {
            Err(ConfigError::Validation(errors))
        }
    }

    /// Grid described by `[grid]`.
    pub fn grid(&self) -> Result<Grid, ConfigError> {
        Grid::new(self.grid.columns, self.grid.rows)
            .map_err(|e| ConfigError::Validation(vec![e.to_string()]))
    }

    /// Recognizer thresholds described by `[gesture]`.
    #[must_use]
    pub fn gesture_config(&self) -> GestureConfig {
        GestureConfig {
            long_press: Duration::from_millis(self.gesture.long_press_ms),
            press_tolerance: self.gesture.press_tolerance_px,
            drag_tolerance: self.gesture.drag_tolerance_px,
            swipe_threshold: self.gesture.swipe_threshold_px,
        }
    }

    /// Pixel geometry described by `[metrics]`.
    #[must_use]
    pub fn metrics(&self) -> GridMetrics {
        GridMetrics {
            origin: Point::new(self.metrics.origin_x, self.metrics.origin_y),
            cell_width: self.metrics.cell_width,
            cell_height: self.metrics.cell_height,
            gap: self.metrics.gap,
        }
    }
}

// ---------------------------------------------------------------------------
// Sections
// ---------------------------------------------------------------------------

/// Grid dimensions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridSettings {
    /// Default: 4.
    pub columns: u16,
    /// Default: 6.
    pub rows: u16,
}

impl Default for GridSettings {
    fn default() -> Self {
        Self {
            columns: Grid::DEFAULT.columns(),
            rows: Grid::DEFAULT.rows(),
        }
    }
}

/// Gesture timings and tolerances.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GestureSettings {
    /// Default: 400.
    pub long_press_ms: u64,
    /// Default: 10.
    pub press_tolerance_px: f32,
    /// Default: 6.
    pub drag_tolerance_px: f32,
    /// Default: 50.
    pub swipe_threshold_px: f32,
}

impl Default for GestureSettings {
    fn default() -> Self {
        let stock = GestureConfig::default();
        Self {
            long_press_ms: u64::try_from(stock.long_press.as_millis()).unwrap_or(400),
            press_tolerance_px: stock.press_tolerance,
            drag_tolerance_px: stock.drag_tolerance,
            swipe_threshold_px: stock.swipe_threshold,
        }
    }
}

/// Pixel layout of the rendered grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MetricsSettings {
    pub origin_x: f32,
    pub origin_y: f32,
    pub cell_width: f32,
    pub cell_height: f32,
    pub gap: f32,
}

impl Default for MetricsSettings {
    fn default() -> Self {
        let stock = GridMetrics::default();
        Self {
            origin_x: stock.origin.x,
            origin_y: stock.origin.y,
            cell_width: stock.cell_width,
            cell_height: stock.cell_height,
            gap: stock.gap,
        }
    }
}

/// Launcher preferences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HomeSettings {
    /// Horizontal swipes switch pages. Default: true.
    pub enable_swipe: bool,
    /// Key the committed layout is persisted under.
    pub storage_key: String,
}

impl Default for HomeSettings {
    fn default() -> Self {
        Self {
            enable_swipe: true,
            storage_key: DEFAULT_STORAGE_KEY.to_owned(),
        }
    }
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Errors from configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("validation errors: {}", .0.join("; "))]
    Validation(Vec<String>),
}
