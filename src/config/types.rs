//! Configuration type definitions.

use super::enums::ColorSpec;
use crate::draw::Color;
use crate::input::Tool;
use log::warn;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Drawing-related settings.
///
/// Controls the tool and appearance defaults the editor starts with. Hosts
/// can change all of these at runtime through the editor state setters.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct DrawingConfig {
    /// Tool selected on startup - one of "pen", "line", "rect", "square",
    /// "triangle", "circle", "eraser", "text", "select"
    #[serde(default = "default_tool")]
    pub default_tool: String,

    /// Default drawing color - either a named color (red, green, blue, yellow,
    /// orange, pink, white, black), a `#rrggbb` hex string, or an RGB array
    /// like `[255, 0, 0]` for red
    #[serde(default = "default_color")]
    pub default_color: ColorSpec,

    /// Default stroke width in pixels (valid range: 1.0 - 50.0)
    #[serde(default = "default_stroke_width")]
    pub default_stroke_width: f64,
}

impl Default for DrawingConfig {
    fn default() -> Self {
        Self {
            default_tool: default_tool(),
            default_color: default_color(),
            default_stroke_width: default_stroke_width(),
        }
    }
}

impl DrawingConfig {
    /// Resolves the configured tool name, falling back to the pen with a
    /// warning when the name is not recognized.
    pub fn resolve_tool(&self) -> Tool {
        Tool::from_name(&self.default_tool).unwrap_or_else(|| {
            warn!("Unknown tool '{}', using pen", self.default_tool);
            Tool::Pen
        })
    }

    /// Resolves the configured default color.
    pub fn resolve_color(&self) -> Color {
        self.default_color.to_color()
    }
}

/// Eraser tool settings.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct EraserConfig {
    /// Eraser radius in pixels (valid range: 1.0 - 100.0)
    /// Strokes and shapes within this distance of the pointer are removed
    #[serde(default = "default_eraser_radius")]
    pub radius: f64,
}

impl Default for EraserConfig {
    fn default() -> Self {
        Self {
            radius: default_eraser_radius(),
        }
    }
}

/// Text tool settings.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct TextConfig {
    /// Default font size in pixels for newly placed text (valid range: 10.0 - 100.0)
    #[serde(default = "default_font_size")]
    pub default_font_size: f64,
}

impl Default for TextConfig {
    fn default() -> Self {
        Self {
            default_font_size: default_font_size(),
        }
    }
}

// =============================================================================
// Default value functions
// =============================================================================

fn default_tool() -> String {
    "pen".to_string()
}

fn default_color() -> ColorSpec {
    ColorSpec::Name("black".to_string())
}

fn default_stroke_width() -> f64 {
    5.0
}

fn default_eraser_radius() -> f64 {
    20.0
}

fn default_font_size() -> f64 {
    24.0
}
