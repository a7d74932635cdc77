//! Stroke and shape definitions for the drawing surface.

use std::fmt;

use super::color::Color;
use crate::util::{distance_point_to_segment, point_in_expanded_rect};

/// Identifier assigned to a shape when it joins a scene.
///
/// Ids come from the scene's monotonically increasing counter and are never
/// reused within a session, even after the shape is erased.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ShapeId(pub u64);

impl fmt::Display for ShapeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "shape_{}", self.0)
    }
}

/// Signed extent of a rectangle-parameterized shape.
///
/// `width` and `height` are pointer minus anchor, so a drag up-left of the
/// anchor stores negative values. Consumers normalize with `abs` on demand.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Extent {
    /// Anchor X coordinate (the pointer-down position)
    pub x: f64,
    /// Anchor Y coordinate (the pointer-down position)
    pub y: f64,
    /// Signed width (pointer X minus anchor X)
    pub width: f64,
    /// Signed height (pointer Y minus anchor Y)
    pub height: f64,
}

impl Extent {
    /// Creates a zero-size extent anchored at the given point.
    pub fn anchored_at(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            width: 0.0,
            height: 0.0,
        }
    }

    /// Radius used by circle and triangle: half the larger absolute side.
    pub fn radius(&self) -> f64 {
        self.width.abs().max(self.height.abs()) / 2.0
    }

    /// Midpoint of the signed extent (anchor offset by half of each side).
    pub fn center(&self) -> (f64, f64) {
        (self.x + self.width / 2.0, self.y + self.height / 2.0)
    }
}

/// Geometry payload for each shape kind.
///
/// Every variant stores its canonical parameters only; rendered geometry is
/// always derivable from these fields (see `draw::outline`).
#[derive(Clone, Debug, PartialEq)]
pub enum ShapeKind {
    /// Straight segment stored as `[x1, y1, x2, y2]`.
    ///
    /// The start point is fixed at creation; the end point follows the
    /// pointer while the owning gesture is active.
    Line {
        /// Endpoint coordinates in `[x1, y1, x2, y2]` order
        points: [f64; 4],
    },
    /// Axis-aligned rectangle outline
    Rect {
        /// Anchor and signed extent
        extent: Extent,
    },
    /// Rectangle constrained to equal sides.
    ///
    /// The stored width is authoritative; the stored height is kept from
    /// the creating gesture but ignored at render and commit time.
    Square {
        /// Anchor and signed extent
        extent: Extent,
    },
    /// Three-sided regular polygon centered on the anchor
    Triangle {
        /// Anchor (polygon center) and signed extent
        extent: Extent,
    },
    /// Circle centered on the extent's midpoint
    Circle {
        /// Anchor and signed extent
        extent: Extent,
    },
    /// Text label anchored at its top-left corner
    Text {
        /// Anchor X coordinate
        x: f64,
        /// Anchor Y coordinate
        y: f64,
        /// Literal text content
        content: String,
        /// Font size in pixels
        font_size: f64,
    },
}

impl ShapeKind {
    /// Returns a stable lowercase name for logs and summaries.
    pub fn name(&self) -> &'static str {
        match self {
            ShapeKind::Line { .. } => "line",
            ShapeKind::Rect { .. } => "rect",
            ShapeKind::Square { .. } => "square",
            ShapeKind::Triangle { .. } => "triangle",
            ShapeKind::Circle { .. } => "circle",
            ShapeKind::Text { .. } => "text",
        }
    }
}

/// A single shape in the scene: geometry payload plus stroke styling.
#[derive(Clone, Debug, PartialEq)]
pub struct Shape {
    /// Stable identifier, unique within the owning scene's session
    pub id: ShapeId,
    /// Geometry payload
    pub kind: ShapeKind,
    /// Outline color
    pub color: Color,
    /// Outline thickness in pixels
    pub stroke_width: f64,
}

impl Shape {
    /// Tests whether an eraser at (px, py) with radius `margin` touches this
    /// shape.
    ///
    /// Extent-based kinds use their stored extent box expanded by the
    /// margin. Lines measure the distance to their segment. Text uses the
    /// synthesized label box from [`text_box`].
    pub fn hit_test(&self, px: f64, py: f64, margin: f64) -> bool {
        match &self.kind {
            ShapeKind::Line { points } => {
                distance_point_to_segment(px, py, points[0], points[1], points[2], points[3])
                    <= margin
            }
            ShapeKind::Rect { extent }
            | ShapeKind::Square { extent }
            | ShapeKind::Triangle { extent }
            | ShapeKind::Circle { extent } => point_in_expanded_rect(
                px,
                py,
                extent.x,
                extent.y,
                extent.width,
                extent.height,
                margin,
            ),
            ShapeKind::Text {
                x,
                y,
                content,
                font_size,
            } => {
                let (width, height) = text_box(content, *font_size);
                point_in_expanded_rect(px, py, *x, *y, width, height, margin)
            }
        }
    }
}

/// Freehand pen path: an append-only polyline.
///
/// Strokes are never selectable or transformable; the eraser removes them
/// whole.
#[derive(Clone, Debug, PartialEq)]
pub struct Stroke {
    /// Sequence of (x, y) coordinates traced by the pointer
    pub points: Vec<(f64, f64)>,
    /// Stroke color
    pub color: Color,
    /// Line thickness in pixels
    pub width: f64,
}

impl Stroke {
    /// Creates a single-point stroke at the pointer-down position.
    pub fn starting_at(x: f64, y: f64, color: Color, width: f64) -> Self {
        Self {
            points: vec![(x, y)],
            color,
            width,
        }
    }

    /// Tests whether any stroke point lies within the axis-aligned square of
    /// half-width `margin` centered at (px, py).
    pub fn hit_test(&self, px: f64, py: f64, margin: f64) -> bool {
        self.points
            .iter()
            .any(|&(x, y)| (x - px).abs() <= margin && (y - py).abs() <= margin)
    }
}

/// Approximate box for a text label without font metrics: half a font-size
/// per character wide, one font-size tall.
pub(crate) fn text_box(content: &str, font_size: f64) -> (f64, f64) {
    let width = content.chars().count() as f64 * font_size / 2.0;
    (width, font_size)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::color::WHITE;

    fn shape(kind: ShapeKind) -> Shape {
        Shape {
            id: ShapeId(1),
            kind,
            color: WHITE,
            stroke_width: 5.0,
        }
    }

    #[test]
    fn extent_radius_uses_larger_absolute_side() {
        let extent = Extent {
            x: 0.0,
            y: 0.0,
            width: -40.0,
            height: 20.0,
        };
        assert!((extent.radius() - 20.0).abs() < f64::EPSILON);
    }

    #[test]
    fn extent_center_respects_signed_sides() {
        let extent = Extent {
            x: 100.0,
            y: 100.0,
            width: -30.0,
            height: 10.0,
        };
        assert_eq!(extent.center(), (85.0, 105.0));
    }

    #[test]
    fn line_hit_measures_segment_distance() {
        let line = shape(ShapeKind::Line {
            points: [0.0, 0.0, 100.0, 0.0],
        });
        assert!(line.hit_test(50.0, 15.0, 20.0));
        assert!(!line.hit_test(50.0, 25.0, 20.0));
        assert!(!line.hit_test(130.0, 0.0, 20.0));
    }

    #[test]
    fn rect_hit_normalizes_negative_extent() {
        let rect = shape(ShapeKind::Rect {
            extent: Extent {
                x: 50.0,
                y: 50.0,
                width: -40.0,
                height: -40.0,
            },
        });
        // The stored box spans 50..90 on both axes from the anchor.
        assert!(rect.hit_test(70.0, 70.0, 0.0));
        assert!(rect.hit_test(95.0, 70.0, 10.0));
        assert!(!rect.hit_test(30.0, 30.0, 10.0));
    }

    #[test]
    fn square_hit_reads_the_stored_extent() {
        let square = shape(ShapeKind::Square {
            extent: Extent {
                x: 0.0,
                y: 0.0,
                width: 50.0,
                height: 10.0,
            },
        });
        // Erasing consults stored fields, not the equal-sided render form.
        assert!(square.hit_test(25.0, 5.0, 0.0));
        assert!(!square.hit_test(25.0, 30.0, 0.0));
    }

    #[test]
    fn text_hit_uses_synthesized_label_box() {
        let text = shape(ShapeKind::Text {
            x: 10.0,
            y: 10.0,
            content: "Hello".to_string(),
            font_size: 24.0,
        });
        // Five characters at font size 24 span a 60x24 box.
        assert!(text.hit_test(60.0, 20.0, 0.0));
        assert!(text.hit_test(75.0, 20.0, 10.0));
        assert!(!text.hit_test(90.0, 20.0, 10.0));
    }

    #[test]
    fn stroke_hit_checks_every_point() {
        let stroke = Stroke {
            points: vec![(0.0, 0.0), (50.0, 50.0), (100.0, 0.0)],
            color: WHITE,
            width: 5.0,
        };
        assert!(stroke.hit_test(55.0, 45.0, 10.0));
        assert!(!stroke.hit_test(50.0, 20.0, 10.0));
    }
}
