//! Host-boundary event types for pointer and transform reporting.

use crate::draw::ShapeId;

/// What the host's hit test found under a pointer-down event.
///
/// The host resolves clicks against its render tree and reports whether the
/// pointer landed on empty canvas or on a specific shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTarget {
    /// The click landed on empty canvas
    Background,
    /// The click landed on the shape with this id
    Shape(ShapeId),
}

/// Final state of a selection-handle interaction.
///
/// Reported by the host when a resize/rotate gesture on the selected shape
/// ends. The position is the host node's final position attribute; the
/// scale factors are the accumulated per-axis scale. After the commit the
/// host resets its node transform to identity, so factors never compound
/// across interactions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransformReport {
    /// Shape the handle overlay was attached to
    pub id: ShapeId,
    /// Final node X position
    pub x: f64,
    /// Final node Y position
    pub y: f64,
    /// Accumulated X scale factor
    pub scale_x: f64,
    /// Accumulated Y scale factor
    pub scale_y: f64,
}
