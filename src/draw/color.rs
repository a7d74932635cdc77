//! RGBA color type, hex parsing, and predefined color constants.

use std::str::FromStr;

use thiserror::Error;

/// Error returned when a hex color string cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseColorError {
    /// The string is not of the form `#rrggbb`.
    #[error("color must be a '#rrggbb' hex string, got '{0}'")]
    InvalidFormat(String),
    /// The string has the right shape but contains non-hex digits.
    #[error("color '{0}' contains invalid hex digits")]
    InvalidDigits(String),
}

/// Represents an RGBA color with floating-point components.
///
/// All components are in the range 0.0 (minimum) to 1.0 (maximum).
///
/// # Examples
///
/// ```
/// use sketchboard::draw::Color;
/// let red = Color { r: 1.0, g: 0.0, b: 0.0, a: 1.0 };
/// let from_hex: Color = "#ff8000".parse().unwrap();
/// assert_eq!(from_hex.to_hex(), "#ff8000");
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    /// Red component (0.0 = no red, 1.0 = full red)
    pub r: f64,
    /// Green component (0.0 = no green, 1.0 = full green)
    pub g: f64,
    /// Blue component (0.0 = no blue, 1.0 = full blue)
    pub b: f64,
    /// Alpha/transparency (0.0 = fully transparent, 1.0 = fully opaque)
    pub a: f64,
}

impl Color {
    /// Creates a new color from RGBA components.
    ///
    /// All values should be in the range 0.0 to 1.0.
    pub fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Creates an opaque color from 8-bit RGB components.
    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: f64::from(r) / 255.0,
            g: f64::from(g) / 255.0,
            b: f64::from(b) / 255.0,
            a: 1.0,
        }
    }

    /// Formats the color as a `#rrggbb` hex string (alpha is dropped).
    pub fn to_hex(&self) -> String {
        let channel = |c: f64| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        format!(
            "#{:02x}{:02x}{:02x}",
            channel(self.r),
            channel(self.g),
            channel(self.b)
        )
    }
}

impl FromStr for Color {
    type Err = ParseColorError;

    /// Parses a `#rrggbb` hex string into an opaque color.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s
            .strip_prefix('#')
            .ok_or_else(|| ParseColorError::InvalidFormat(s.to_string()))?;
        if hex.len() != 6 {
            return Err(ParseColorError::InvalidFormat(s.to_string()));
        }
        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ParseColorError::InvalidDigits(s.to_string()));
        }
        let rgb = u32::from_str_radix(hex, 16)
            .map_err(|_| ParseColorError::InvalidDigits(s.to_string()))?;
        Ok(Self::from_rgb8(
            ((rgb >> 16) & 0xff) as u8,
            ((rgb >> 8) & 0xff) as u8,
            (rgb & 0xff) as u8,
        ))
    }
}

// ============================================================================
// Predefined Color Constants
// ============================================================================

/// Predefined red color (R=1.0, G=0.0, B=0.0)
pub const RED: Color = Color {
    r: 1.0,
    g: 0.0,
    b: 0.0,
    a: 1.0,
};

/// Predefined green color (R=0.0, G=1.0, B=0.0)
pub const GREEN: Color = Color {
    r: 0.0,
    g: 1.0,
    b: 0.0,
    a: 1.0,
};

/// Predefined blue color (R=0.0, G=0.0, B=1.0)
pub const BLUE: Color = Color {
    r: 0.0,
    g: 0.0,
    b: 1.0,
    a: 1.0,
};

/// Predefined yellow color (R=1.0, G=1.0, B=0.0)
pub const YELLOW: Color = Color {
    r: 1.0,
    g: 1.0,
    b: 0.0,
    a: 1.0,
};

/// Predefined orange color (R=1.0, G=0.5, B=0.0)
pub const ORANGE: Color = Color {
    r: 1.0,
    g: 0.5,
    b: 0.0,
    a: 1.0,
};

/// Predefined pink/magenta color (R=1.0, G=0.0, B=1.0)
pub const PINK: Color = Color {
    r: 1.0,
    g: 0.0,
    b: 1.0,
    a: 1.0,
};

/// Predefined white color (R=1.0, G=1.0, B=1.0)
pub const WHITE: Color = Color {
    r: 1.0,
    g: 1.0,
    b: 1.0,
    a: 1.0,
};

/// Predefined black color (R=0.0, G=0.0, B=0.0)
pub const BLACK: Color = Color {
    r: 0.0,
    g: 0.0,
    b: 0.0,
    a: 1.0,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_hex_strings_into_channels() {
        let color: Color = "#ff8000".parse().unwrap();
        assert!((color.r - 1.0).abs() < f64::EPSILON);
        assert!((color.g - 128.0 / 255.0).abs() < f64::EPSILON);
        assert!(color.b.abs() < f64::EPSILON);
        assert!((color.a - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn hex_formatting_round_trips() {
        assert_eq!(BLACK.to_hex(), "#000000");
        assert_eq!(ORANGE.to_hex(), "#ff8000");
        let parsed: Color = "#12ab9f".parse().unwrap();
        assert_eq!(parsed.to_hex(), "#12ab9f");
    }

    #[test]
    fn rejects_malformed_hex_strings() {
        assert_eq!(
            "ff0000".parse::<Color>(),
            Err(ParseColorError::InvalidFormat("ff0000".into()))
        );
        assert_eq!(
            "#ff00".parse::<Color>(),
            Err(ParseColorError::InvalidFormat("#ff00".into()))
        );
        assert_eq!(
            "#ggff00".parse::<Color>(),
            Err(ParseColorError::InvalidDigits("#ggff00".into()))
        );
    }
}
