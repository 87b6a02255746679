//! Tunable presentation constants for the sizing policy
//!
//! The three original result views used the same engine with different
//! constants; those parameterizations survive as the [`LayoutConfig::detailed`]
//! and [`LayoutConfig::compact`] presets. A TOML file can overlay individual
//! constants on top of a preset.

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

/// Errors that can occur when loading a layout config file
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read layout config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse layout config TOML: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Constants driving canvas sizing and node separation
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutConfig {
    /// Canvas width floor in pixels.
    pub min_width: f64,
    /// Horizontal pixels allotted per rendered leaf.
    pub leaf_unit: f64,
    /// Canvas height floor in pixels.
    pub min_height: f64,
    /// Vertical pixels allotted per tree level.
    pub depth_unit: f64,
    /// Base spacing multiplier between adjacent node positions.
    pub separation_base: f64,
    /// Exponent scale for the geometric growth of separation with depth.
    pub depth_growth: f64,
    /// Extra factor between nodes that do not share a parent.
    pub cross_parent_factor: f64,
    pub legend: LegendConfig,
}

/// Icon legend grid constants
#[derive(Debug, Clone, PartialEq)]
pub struct LegendConfig {
    pub icons_per_row: usize,
    pub icon_size: f64,
    pub row_height: f64,
    pub column_gap: f64,
    /// Vertical offset of the first icon row below the legend header.
    pub header_offset: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self::detailed()
    }
}

impl LayoutConfig {
    /// Full-size preset used by the single-recipe result views.
    pub fn detailed() -> Self {
        Self {
            min_width: 1800.0,
            leaf_unit: 100.0,
            min_height: 1400.0,
            depth_unit: 200.0,
            separation_base: 15.0,
            depth_growth: 0.5,
            cross_parent_factor: 2.0,
            legend: LegendConfig {
                icons_per_row: 8,
                icon_size: 40.0,
                row_height: 80.0,
                column_gap: 60.0,
                header_offset: 30.0,
            },
        }
    }

    /// Smaller preset used by the multiple-recipe overview, where several
    /// trees share the page.
    pub fn compact() -> Self {
        Self {
            min_width: 1200.0,
            min_height: 800.0,
            depth_unit: 150.0,
            legend: LegendConfig {
                icons_per_row: 6,
                icon_size: 30.0,
                row_height: 60.0,
                column_gap: 40.0,
                header_offset: 30.0,
            },
            ..Self::detailed()
        }
    }

    pub fn new() -> Self {
        Self::default()
    }

    /// Set the canvas floors.
    pub fn with_canvas_floor(mut self, min_width: f64, min_height: f64) -> Self {
        self.min_width = min_width;
        self.min_height = min_height;
        self
    }

    /// Set the per-leaf and per-level size units.
    pub fn with_units(mut self, leaf_unit: f64, depth_unit: f64) -> Self {
        self.leaf_unit = leaf_unit;
        self.depth_unit = depth_unit;
        self
    }

    /// Set the base separation multiplier.
    pub fn with_separation_base(mut self, base: f64) -> Self {
        self.separation_base = base;
        self
    }

    /// Set the legend grid constants.
    pub fn with_legend(mut self, legend: LegendConfig) -> Self {
        self.legend = legend;
        self
    }

    /// Load a config overlay from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Load a config overlay from a TOML string.
    ///
    /// The optional `profile` key selects the base preset; any other value
    /// present in the file replaces that preset's constant.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let parsed: TomlConfig = toml::from_str(content)?;

        let mut config = match parsed.profile.as_deref() {
            Some("compact") => Self::compact(),
            _ => Self::detailed(),
        };

        if let Some(canvas) = parsed.canvas {
            if let Some(v) = canvas.min_width {
                config.min_width = v;
            }
            if let Some(v) = canvas.leaf_unit {
                config.leaf_unit = v;
            }
            if let Some(v) = canvas.min_height {
                config.min_height = v;
            }
            if let Some(v) = canvas.depth_unit {
                config.depth_unit = v;
            }
        }
        if let Some(separation) = parsed.separation {
            if let Some(v) = separation.base {
                config.separation_base = v;
            }
            if let Some(v) = separation.depth_growth {
                config.depth_growth = v;
            }
            if let Some(v) = separation.cross_parent_factor {
                config.cross_parent_factor = v;
            }
        }
        if let Some(legend) = parsed.legend {
            if let Some(v) = legend.icons_per_row {
                config.legend.icons_per_row = v;
            }
            if let Some(v) = legend.icon_size {
                config.legend.icon_size = v;
            }
            if let Some(v) = legend.row_height {
                config.legend.row_height = v;
            }
            if let Some(v) = legend.column_gap {
                config.legend.column_gap = v;
            }
            if let Some(v) = legend.header_offset {
                config.legend.header_offset = v;
            }
        }

        Ok(config)
    }
}

/// TOML structure for deserializing config overlays
#[derive(Deserialize, Default)]
struct TomlConfig {
    profile: Option<String>,
    canvas: Option<TomlCanvas>,
    separation: Option<TomlSeparation>,
    legend: Option<TomlLegend>,
}

#[derive(Deserialize)]
struct TomlCanvas {
    min_width: Option<f64>,
    leaf_unit: Option<f64>,
    min_height: Option<f64>,
    depth_unit: Option<f64>,
}

#[derive(Deserialize)]
struct TomlSeparation {
    base: Option<f64>,
    depth_growth: Option<f64>,
    cross_parent_factor: Option<f64>,
}

#[derive(Deserialize)]
struct TomlLegend {
    icons_per_row: Option<usize>,
    icon_size: Option<f64>,
    row_height: Option<f64>,
    column_gap: Option<f64>,
    header_offset: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detailed_preset() {
        let config = LayoutConfig::detailed();
        assert_eq!(config.min_width, 1800.0);
        assert_eq!(config.leaf_unit, 100.0);
        assert_eq!(config.min_height, 1400.0);
        assert_eq!(config.depth_unit, 200.0);
        assert_eq!(config.legend.icons_per_row, 8);
    }

    #[test]
    fn test_compact_preset() {
        let config = LayoutConfig::compact();
        assert_eq!(config.min_width, 1200.0);
        assert_eq!(config.min_height, 800.0);
        assert_eq!(config.depth_unit, 150.0);
        // Separation model is shared across presets.
        assert_eq!(config.separation_base, 15.0);
        assert_eq!(config.legend.icons_per_row, 6);
    }

    #[test]
    fn test_builder_pattern() {
        let config = LayoutConfig::new()
            .with_canvas_floor(1000.0, 700.0)
            .with_units(80.0, 120.0)
            .with_separation_base(10.0);

        assert_eq!(config.min_width, 1000.0);
        assert_eq!(config.min_height, 700.0);
        assert_eq!(config.leaf_unit, 80.0);
        assert_eq!(config.depth_unit, 120.0);
        assert_eq!(config.separation_base, 10.0);
    }

    #[test]
    fn test_toml_overlay_on_profile() {
        let config = LayoutConfig::from_toml_str(
            r#"
            profile = "compact"

            [canvas]
            min_width = 900

            [legend]
            icons_per_row = 4
            "#,
        )
        .unwrap();

        assert_eq!(config.min_width, 900.0);
        assert_eq!(config.min_height, 800.0);
        assert_eq!(config.legend.icons_per_row, 4);
        assert_eq!(config.legend.icon_size, 30.0);
    }

    #[test]
    fn test_empty_toml_is_the_default() {
        let config = LayoutConfig::from_toml_str("").unwrap();
        assert_eq!(config, LayoutConfig::detailed());
    }

    #[test]
    fn test_invalid_toml_is_an_error() {
        assert!(LayoutConfig::from_toml_str("canvas = 3").is_err());
    }
}
