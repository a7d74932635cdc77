//! Utility functions for geometry and color-name lookups.
//!
//! This module provides:
//! - Point-to-segment distance used by the eraser's line hit test
//! - Expanded-rectangle containment used by the eraser's box hit tests
//! - Name-to-color mapping for the configuration system

use crate::draw::{Color, color::*};

// ============================================================================
// Geometry Utilities
// ============================================================================

/// Calculates the distance from a point to a line segment.
///
/// Projects the point onto the segment's supporting line and clamps the
/// projection parameter to `[0, 1]`, so points beyond either endpoint get
/// the distance to that endpoint rather than to the infinite line. A
/// degenerate segment (both endpoints equal) yields the point-to-point
/// distance.
///
/// # Arguments
/// * `px` - Query point X coordinate
/// * `py` - Query point Y coordinate
/// * `x1` - Segment start X coordinate
/// * `y1` - Segment start Y coordinate
/// * `x2` - Segment end X coordinate
/// * `y2` - Segment end Y coordinate
///
/// # Returns
/// Euclidean distance from the point to the closest point on the segment.
pub fn distance_point_to_segment(px: f64, py: f64, x1: f64, y1: f64, x2: f64, y2: f64) -> f64 {
    let dx = x2 - x1;
    let dy = y2 - y1;
    let len_sq = dx * dx + dy * dy;

    if len_sq == 0.0 {
        // Degenerate segment
        return ((px - x1).powi(2) + (py - y1).powi(2)).sqrt();
    }

    let t = (((px - x1) * dx + (py - y1) * dy) / len_sq).clamp(0.0, 1.0);
    let closest_x = x1 + t * dx;
    let closest_y = y1 + t * dy;
    ((px - closest_x).powi(2) + (py - closest_y).powi(2)).sqrt()
}

/// Tests whether a point lies inside a rectangle expanded by a margin.
///
/// The rectangle is anchored at (x, y) and spans the absolute values of
/// `width` and `height`, so extents dragged into any quadrant (negative
/// width/height) describe the same box as their positive counterparts.
///
/// # Arguments
/// * `px` - Query point X coordinate
/// * `py` - Query point Y coordinate
/// * `x` - Rectangle anchor X coordinate
/// * `y` - Rectangle anchor Y coordinate
/// * `width` - Rectangle width (may be negative)
/// * `height` - Rectangle height (may be negative)
/// * `margin` - Expansion applied to all four sides
///
/// # Returns
/// `true` if the point is within the expanded rectangle (edges inclusive).
pub fn point_in_expanded_rect(
    px: f64,
    py: f64,
    x: f64,
    y: f64,
    width: f64,
    height: f64,
    margin: f64,
) -> bool {
    px >= x - margin
        && px <= x + width.abs() + margin
        && py >= y - margin
        && py <= y + height.abs() + margin
}

// ============================================================================
// Color Mapping
// ============================================================================

/// Maps color name strings to Color values.
///
/// Used by the configuration system to parse color names from the config file.
///
/// # Supported Names (case-insensitive)
/// - "red", "green", "blue", "yellow", "orange", "pink", "white", "black"
///
/// # Arguments
/// * `name` - Color name string
///
/// # Returns
/// - `Some(Color)` if the name matches a predefined color
/// - `None` if the name is not recognized
pub fn name_to_color(name: &str) -> Option<Color> {
    match name.to_lowercase().as_str() {
        "red" => Some(RED),
        "green" => Some(GREEN),
        "blue" => Some(BLUE),
        "yellow" => Some(YELLOW),
        "orange" => Some(ORANGE),
        "pink" => Some(PINK),
        "white" => Some(WHITE),
        "black" => Some(BLACK),
        _ => None,
    }
}
