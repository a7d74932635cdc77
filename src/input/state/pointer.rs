//! Pointer-driven gesture handling.

use crate::draw::{Extent, ShapeKind, Stroke};
use crate::input::events::HitTarget;
use crate::input::tool::Tool;

use super::{EditorState, Gesture};

impl EditorState {
    /// Processes a pointer-down event.
    ///
    /// # Arguments
    /// * `x` - Pointer X coordinate in canvas space
    /// * `y` - Pointer Y coordinate in canvas space
    /// * `target` - What the host's hit test found under the pointer
    ///
    /// # Behavior
    /// - Background clicks clear the selection; with any tool but text they
    ///   also cancel the pending text entry (the text tool repositions it
    ///   instead, keeping the buffer).
    /// - Eraser erases immediately and never enters a gesture.
    /// - Select selects the hit shape; text opens or moves the entry.
    /// - Drawing tools create their entity at the pointer and enter the
    ///   gesture that will grow it.
    ///
    /// A pointer-down while a gesture is already active is ignored.
    pub fn on_pointer_down(&mut self, x: f64, y: f64, target: HitTarget) {
        if !matches!(self.gesture, Gesture::Idle) {
            return;
        }

        if matches!(target, HitTarget::Background) {
            if self.scene.selected.take().is_some() {
                self.needs_redraw = true;
            }
            if self.context.tool != Tool::Text {
                self.cancel_text_entry();
            }
        }

        match self.context.tool {
            Tool::Eraser => self.erase_at(x, y),
            Tool::Select => {
                if let HitTarget::Shape(id) = target {
                    if self.scene.select(id) {
                        self.needs_redraw = true;
                    }
                }
            }
            Tool::Text => self.open_text_entry(x, y),
            Tool::Pen => {
                let stroke =
                    Stroke::starting_at(x, y, self.context.color, self.context.stroke_width);
                let index = self.scene.add_stroke(stroke);
                self.gesture = Gesture::Stroke { index };
                self.needs_redraw = true;
            }
            Tool::Line => {
                let id = self.scene.add_shape(
                    ShapeKind::Line {
                        points: [x, y, x, y],
                    },
                    self.context.color,
                    self.context.stroke_width,
                );
                self.gesture = Gesture::Shape { id };
                self.needs_redraw = true;
            }
            Tool::Rect | Tool::Square | Tool::Triangle | Tool::Circle => {
                let extent = Extent::anchored_at(x, y);
                let kind = match self.context.tool {
                    Tool::Square => ShapeKind::Square { extent },
                    Tool::Triangle => ShapeKind::Triangle { extent },
                    Tool::Circle => ShapeKind::Circle { extent },
                    _ => ShapeKind::Rect { extent },
                };
                let id = self
                    .scene
                    .add_shape(kind, self.context.color, self.context.stroke_width);
                self.gesture = Gesture::Shape { id };
                self.needs_redraw = true;
            }
        }
    }

    /// Processes a pointer-move event.
    ///
    /// # Behavior
    /// - Growing a stroke appends the point to its path.
    /// - Growing a line moves its end point; the start stays fixed.
    /// - Growing an extent shape recomputes the signed width and height
    ///   from the stored anchor, so intermediate moves never accumulate.
    ///
    /// Moves while idle, or whose gesture names an entity that no longer
    /// exists, are ignored.
    pub fn on_pointer_move(&mut self, x: f64, y: f64) {
        match self.gesture {
            Gesture::Idle => {}
            Gesture::Stroke { index } => {
                if let Some(stroke) = self.scene.stroke_mut(index) {
                    stroke.points.push((x, y));
                    self.needs_redraw = true;
                }
            }
            Gesture::Shape { id } => {
                let Some(shape) = self.scene.shape_mut(id) else {
                    return;
                };
                match &mut shape.kind {
                    ShapeKind::Line { points } => {
                        points[2] = x;
                        points[3] = y;
                    }
                    ShapeKind::Rect { extent }
                    | ShapeKind::Square { extent }
                    | ShapeKind::Triangle { extent }
                    | ShapeKind::Circle { extent } => {
                        extent.width = x - extent.x;
                        extent.height = y - extent.y;
                    }
                    // Text is never grown by a gesture.
                    ShapeKind::Text { .. } => return,
                }
                self.needs_redraw = true;
            }
        }
    }

    /// Processes a pointer-up event.
    ///
    /// Unconditionally returns to idle, whatever tool or entity the gesture
    /// was growing. A release while already idle is ignored.
    pub fn on_pointer_up(&mut self) {
        if !matches!(self.gesture, Gesture::Idle) {
            self.gesture = Gesture::Idle;
            self.needs_redraw = true;
        }
    }
}
