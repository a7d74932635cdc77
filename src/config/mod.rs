//! Configuration file support for sketchboard.
//!
//! This module handles loading and validating user settings from the configuration file
//! located at `~/.config/sketchboard/config.toml`. Settings include the startup tool,
//! drawing defaults, eraser radius, and text sizing.
//!
//! If no config file exists, sensible defaults are used automatically.

pub mod enums;
pub mod types;

// Re-export commonly used types at module level
pub use enums::ColorSpec;
pub use types::{DrawingConfig, EraserConfig, TextConfig};

use anyhow::{Context, Result};
use log::{debug, info};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Main configuration structure containing all user settings.
///
/// This is the root configuration type that gets deserialized from the TOML file.
/// All fields have sensible defaults and will use those if not specified in the config file.
///
/// # Example TOML
/// ```toml
/// [drawing]
/// default_tool = "pen"
/// default_color = "black"
/// default_stroke_width = 5.0
///
/// [eraser]
/// radius = 20.0
///
/// [text]
/// default_font_size = 24.0
/// ```
#[derive(Debug, Serialize, Deserialize, Default, JsonSchema)]
pub struct Config {
    /// Drawing tool defaults (tool, color, stroke width)
    #[serde(default)]
    pub drawing: DrawingConfig,

    /// Eraser tool settings
    #[serde(default)]
    pub eraser: EraserConfig,

    /// Text tool settings
    #[serde(default)]
    pub text: TextConfig,
}

impl Config {
    /// Validates and clamps all configuration values to acceptable ranges.
    ///
    /// This method ensures that user-provided config values won't put the editor
    /// into a degenerate state. Invalid values are clamped to the nearest valid
    /// value and a warning is logged.
    ///
    /// Validated ranges:
    /// - `drawing.default_stroke_width`: 1.0 - 50.0
    /// - `eraser.radius`: 1.0 - 100.0
    /// - `text.default_font_size`: 10.0 - 100.0
    fn validate_and_clamp(&mut self) {
        // Stroke width: 1.0 - 50.0
        if !(1.0..=50.0).contains(&self.drawing.default_stroke_width) {
            log::warn!(
                "Invalid default_stroke_width {:.1}, clamping to 1.0-50.0 range",
                self.drawing.default_stroke_width
            );
            self.drawing.default_stroke_width = self.drawing.default_stroke_width.clamp(1.0, 50.0);
        }

        // Eraser radius: 1.0 - 100.0
        if !(1.0..=100.0).contains(&self.eraser.radius) {
            log::warn!(
                "Invalid eraser radius {:.1}, clamping to 1.0-100.0 range",
                self.eraser.radius
            );
            self.eraser.radius = self.eraser.radius.clamp(1.0, 100.0);
        }

        // Font size: 10.0 - 100.0
        if !(10.0..=100.0).contains(&self.text.default_font_size) {
            log::warn!(
                "Invalid default_font_size {:.1}, clamping to 10.0-100.0 range",
                self.text.default_font_size
            );
            self.text.default_font_size = self.text.default_font_size.clamp(10.0, 100.0);
        }

        // Validate the startup tool name
        if crate::input::Tool::from_name(&self.drawing.default_tool).is_none() {
            log::warn!(
                "Invalid default_tool '{}', falling back to 'pen'",
                self.drawing.default_tool
            );
            self.drawing.default_tool = "pen".to_string();
        }
    }

    /// Returns the path to the configuration file.
    ///
    /// The config file is located at `~/.config/sketchboard/config.toml`.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined (e.g., HOME not set).
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("sketchboard");

        Ok(config_dir.join("config.toml"))
    }

    /// Loads configuration from file, or returns defaults if not found.
    ///
    /// Attempts to read and parse the config file at `~/.config/sketchboard/config.toml`.
    /// If the file doesn't exist, returns a Config with default values. All loaded values
    /// are validated and clamped to acceptable ranges.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The config directory path cannot be determined
    /// - The file exists but cannot be read
    /// - The file exists but contains invalid TOML syntax
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;

        if !config_path.exists() {
            info!("Config file not found, using defaults");
            debug!("Expected config at: {}", config_path.display());
            return Ok(Self::default());
        }

        let config_str = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read config from {}", config_path.display()))?;

        let mut config: Config = toml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config from {}", config_path.display()))?;

        // Validate and clamp values to acceptable ranges
        config.validate_and_clamp();

        info!("Loaded config from {}", config_path.display());
        debug!("Config: {:?}", config);

        Ok(config)
    }

    /// Saves the current configuration to file.
    ///
    /// Serializes the config to TOML format and writes it to `~/.config/sketchboard/config.toml`.
    /// Creates the parent directory if it doesn't exist. Kept for hosts that
    /// persist runtime changes back to disk.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The config directory cannot be created
    /// - The config cannot be serialized to TOML
    /// - The file cannot be written
    #[allow(dead_code)]
    pub fn save(&self) -> Result<()> {
        let config_path = Self::get_config_path()?;

        // Create directory if it doesn't exist
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let config_str = toml::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(&config_path, config_str)
            .with_context(|| format!("Failed to write config to {}", config_path.display()))?;

        info!("Saved config to {}", config_path.display());
        Ok(())
    }

    /// Creates a default configuration file with documentation comments.
    ///
    /// Writes the example config from `config.example.toml` to the user's config
    /// directory. Used by `sketchboard --init-config`.
    ///
    /// # Errors
    /// Returns an error if:
    /// - A config file already exists at the target path
    /// - The config directory cannot be created
    /// - The file cannot be written
    pub fn create_default_file() -> Result<()> {
        let config_path = Self::get_config_path()?;

        if config_path.exists() {
            return Err(anyhow::anyhow!(
                "Config file already exists at {}",
                config_path.display()
            ));
        }

        // Create directory
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let default_config = include_str!("../../config.example.toml");
        fs::write(&config_path, default_config)?;

        info!("Created default config at {}", config_path.display());
        Ok(())
    }

    /// Returns the JSON schema describing the configuration file format.
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::Tool;

    #[test]
    fn empty_toml_yields_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.drawing.default_tool, "pen");
        assert_eq!(config.drawing.default_stroke_width, 5.0);
        assert_eq!(config.eraser.radius, 20.0);
        assert_eq!(config.text.default_font_size, 24.0);
    }

    #[test]
    fn out_of_range_values_are_clamped() {
        let mut config: Config = toml::from_str(
            r#"
            [drawing]
            default_stroke_width = 500.0

            [eraser]
            radius = 0.1

            [text]
            default_font_size = 2.0
            "#,
        )
        .unwrap();
        config.validate_and_clamp();
        assert_eq!(config.drawing.default_stroke_width, 50.0);
        assert_eq!(config.eraser.radius, 1.0);
        assert_eq!(config.text.default_font_size, 10.0);
    }

    #[test]
    fn unknown_tool_falls_back_to_pen() {
        let mut config: Config = toml::from_str(
            r#"
            [drawing]
            default_tool = "lasso"
            "#,
        )
        .unwrap();
        config.validate_and_clamp();
        assert_eq!(config.drawing.default_tool, "pen");
        assert_eq!(config.drawing.resolve_tool(), Tool::Pen);
    }

    #[test]
    fn partial_section_keeps_other_defaults() {
        let config: Config = toml::from_str(
            r##"
            [drawing]
            default_tool = "circle"
            default_color = "#336699"
            "##,
        )
        .unwrap();
        assert_eq!(config.drawing.resolve_tool(), Tool::Circle);
        assert_eq!(config.drawing.resolve_color().to_hex(), "#336699");
        assert_eq!(config.drawing.default_stroke_width, 5.0);
    }
}
