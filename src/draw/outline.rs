//! Resolved render geometry for shapes.
//!
//! Hosts draw strokes directly from their point lists (polylines with round
//! caps and joins). Shapes go through [`Shape::outline`], which resolves the
//! canonical attributes into drawable geometry so hosts carry no
//! kind-specific derivation logic. The derivations here are the same ones
//! the eraser and the transform-commit engine rely on.

use super::shape::{Shape, ShapeKind, text_box};

/// Drawable geometry for one shape, resolved from its stored attributes.
///
/// Signed widths and heights are passed through as stored; a negative side
/// mirrors the figure across its anchor.
#[derive(Clone, Debug, PartialEq)]
pub enum Outline {
    /// Open segment between two endpoints
    Segment {
        /// Start X coordinate
        x1: f64,
        /// Start Y coordinate
        y1: f64,
        /// End X coordinate
        x2: f64,
        /// End Y coordinate
        y2: f64,
    },
    /// Axis-aligned rectangle outline
    Rectangle {
        /// Anchor X coordinate
        x: f64,
        /// Anchor Y coordinate
        y: f64,
        /// Signed width
        width: f64,
        /// Signed height
        height: f64,
    },
    /// Circle outline
    Circle {
        /// Center X coordinate
        cx: f64,
        /// Center Y coordinate
        cy: f64,
        /// Radius (non-negative)
        radius: f64,
    },
    /// Regular polygon outline
    Polygon {
        /// Center X coordinate
        cx: f64,
        /// Center Y coordinate
        cy: f64,
        /// Circumradius (non-negative)
        radius: f64,
        /// Number of sides
        sides: u32,
    },
    /// Text label
    Label {
        /// Anchor X coordinate
        x: f64,
        /// Anchor Y coordinate
        y: f64,
        /// Text content
        content: String,
        /// Font size in pixels
        font_size: f64,
        /// Synthesized label width
        width: f64,
        /// Synthesized label height
        height: f64,
    },
}

impl Shape {
    /// Resolves this shape's stored attributes into drawable geometry.
    ///
    /// Squares use their width for both sides. Circles center on the
    /// extent's midpoint; triangles center on the anchor itself. Both take
    /// half the larger absolute side as their radius.
    pub fn outline(&self) -> Outline {
        match &self.kind {
            ShapeKind::Line { points } => Outline::Segment {
                x1: points[0],
                y1: points[1],
                x2: points[2],
                y2: points[3],
            },
            ShapeKind::Rect { extent } => Outline::Rectangle {
                x: extent.x,
                y: extent.y,
                width: extent.width,
                height: extent.height,
            },
            ShapeKind::Square { extent } => Outline::Rectangle {
                x: extent.x,
                y: extent.y,
                width: extent.width,
                height: extent.width,
            },
            ShapeKind::Triangle { extent } => Outline::Polygon {
                cx: extent.x,
                cy: extent.y,
                radius: extent.radius(),
                sides: 3,
            },
            ShapeKind::Circle { extent } => {
                let (cx, cy) = extent.center();
                Outline::Circle {
                    cx,
                    cy,
                    radius: extent.radius(),
                }
            }
            ShapeKind::Text {
                x,
                y,
                content,
                font_size,
            } => {
                let (width, height) = text_box(content, *font_size);
                Outline::Label {
                    x: *x,
                    y: *y,
                    content: content.clone(),
                    font_size: *font_size,
                    width,
                    height,
                }
            }
        }
    }
}
