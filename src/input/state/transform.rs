//! Commit rules for drag and transform interactions on selected shapes.
//!
//! The host's handle overlay accumulates position and scale on its own
//! nodes while the user drags. When the interaction ends, the final values
//! are reported here and baked into the shape's canonical attributes; the
//! host then resets its node transform to identity. Stored attributes stay
//! the single source of truth and scale never compounds.

use crate::draw::{ShapeId, ShapeKind};
use crate::input::events::TransformReport;

use super::EditorState;

/// Smallest committed side for rectangle-family shapes, in device units.
const MIN_SHAPE_SIZE: f64 = 5.0;

impl EditorState {
    /// Commits the end of a plain drag on a shape.
    ///
    /// Updates only the anchor; extents are left untouched. For lines the
    /// reported position is the node's translation offset and every stored
    /// point shifts by it. For all other kinds it is the new anchor.
    ///
    /// A drag naming a missing id is ignored.
    pub fn on_drag_end(&mut self, id: ShapeId, x: f64, y: f64) {
        let Some(shape) = self.scene.shape_mut(id) else {
            log::debug!("Drag commit for missing {id}; ignoring");
            return;
        };
        match &mut shape.kind {
            ShapeKind::Line { points } => {
                points[0] += x;
                points[1] += y;
                points[2] += x;
                points[3] += y;
            }
            ShapeKind::Rect { extent }
            | ShapeKind::Square { extent }
            | ShapeKind::Triangle { extent }
            | ShapeKind::Circle { extent } => {
                extent.x = x;
                extent.y = y;
            }
            ShapeKind::Text { x: tx, y: ty, .. } => {
                *tx = x;
                *ty = y;
            }
        }
        self.needs_redraw = true;
        log::debug!("Committed drag on {id}");
    }

    /// Commits the end of a resize/rotate handle interaction.
    ///
    /// The reported scale is baked into each kind's canonical attributes:
    ///
    /// - circle: the new radius is half the larger scaled side; width and
    ///   height become the diameter and the anchor backs off by the radius
    ///   so the reported position stays the visual center
    /// - triangle: scaled sides, anchor taken as reported (it is the
    ///   polygon's center already)
    /// - rect: scaled sides floored at `MIN_SHAPE_SIZE`, anchor as reported
    /// - square: like rect, then the width is copied into the height
    /// - line: each endpoint is scaled per-axis and offset by the position
    /// - text: anchor only; text size is controlled by font size, not
    ///   handles
    ///
    /// A report naming a missing id is ignored.
    pub fn on_transform_end(&mut self, report: TransformReport) {
        let TransformReport {
            id,
            x,
            y,
            scale_x,
            scale_y,
        } = report;
        let Some(shape) = self.scene.shape_mut(id) else {
            log::debug!("Transform commit for missing {id}; ignoring");
            return;
        };
        match &mut shape.kind {
            ShapeKind::Circle { extent } => {
                let radius = (extent.width * scale_x)
                    .abs()
                    .max((extent.height * scale_y).abs())
                    / 2.0;
                extent.x = x - radius;
                extent.y = y - radius;
                extent.width = radius * 2.0;
                extent.height = radius * 2.0;
            }
            ShapeKind::Triangle { extent } => {
                extent.x = x;
                extent.y = y;
                extent.width = (extent.width * scale_x).abs();
                extent.height = (extent.height * scale_y).abs();
            }
            ShapeKind::Rect { extent } => {
                extent.x = x;
                extent.y = y;
                extent.width = (extent.width * scale_x).abs().max(MIN_SHAPE_SIZE);
                extent.height = (extent.height * scale_y).abs().max(MIN_SHAPE_SIZE);
            }
            ShapeKind::Square { extent } => {
                extent.x = x;
                extent.y = y;
                extent.width = (extent.width * scale_x).abs().max(MIN_SHAPE_SIZE);
                extent.height = extent.width;
            }
            ShapeKind::Line { points } => {
                points[0] = points[0] * scale_x + x;
                points[1] = points[1] * scale_y + y;
                points[2] = points[2] * scale_x + x;
                points[3] = points[3] * scale_y + y;
            }
            ShapeKind::Text { x: tx, y: ty, .. } => {
                *tx = x;
                *ty = y;
            }
        }
        self.needs_redraw = true;
        log::debug!("Committed transform on {} ({})", id, shape.kind.name());
    }
}
