//! Pending text entry operations.

use crate::draw::{ShapeId, ShapeKind};

use super::{EditorState, TextEntry};

impl EditorState {
    /// Opens a text entry at (x, y), or moves the pending one there.
    ///
    /// Repositioning keeps the buffer, so a half-typed label follows the
    /// pointer instead of being lost. A repositioned edit still rewrites
    /// its original shape in place on commit; the entry anchor only applies
    /// to newly placed text.
    pub(super) fn open_text_entry(&mut self, x: f64, y: f64) {
        match &mut self.text_entry {
            Some(entry) => {
                entry.x = x;
                entry.y = y;
            }
            None => {
                self.text_entry = Some(TextEntry {
                    x,
                    y,
                    buffer: String::new(),
                    editing: None,
                });
            }
        }
        self.needs_redraw = true;
    }

    /// Replaces the pending entry's buffer with the host control's
    /// contents. Without a pending entry this is a no-op.
    pub fn set_pending_text(&mut self, contents: &str) {
        if let Some(entry) = &mut self.text_entry {
            entry.buffer = contents.to_string();
            self.needs_redraw = true;
        }
    }

    /// Opens the entry primed with an existing text shape for editing.
    ///
    /// Returns whether the entry was opened; ids that are missing or do not
    /// name a text shape are refused.
    pub fn begin_text_edit(&mut self, id: ShapeId) -> bool {
        let Some(shape) = self.scene.shape(id) else {
            return false;
        };
        let ShapeKind::Text { x, y, content, .. } = &shape.kind else {
            return false;
        };
        self.text_entry = Some(TextEntry {
            x: *x,
            y: *y,
            buffer: content.clone(),
            editing: Some(id),
        });
        self.needs_redraw = true;
        true
    }

    /// Commits the pending text entry.
    ///
    /// A non-empty buffer creates a new text shape with the current color,
    /// stroke width, and font size, or rewrites the content and font size
    /// of the shape under edit. An empty buffer only dismisses the entry.
    /// Without a pending entry this is a no-op.
    pub fn commit_text(&mut self) {
        let Some(entry) = self.text_entry.take() else {
            return;
        };
        if entry.buffer.is_empty() {
            self.needs_redraw = true;
            return;
        }

        match entry.editing {
            Some(id) => {
                let font_size = self.context.font_size;
                if let Some(shape) = self.scene.shape_mut(id) {
                    if let ShapeKind::Text {
                        content,
                        font_size: size,
                        ..
                    } = &mut shape.kind
                    {
                        *content = entry.buffer;
                        *size = font_size;
                        self.needs_redraw = true;
                        log::debug!("Rewrote text on {id}");
                    }
                }
            }
            None => {
                let id = self.scene.add_shape(
                    ShapeKind::Text {
                        x: entry.x,
                        y: entry.y,
                        content: entry.buffer,
                        font_size: self.context.font_size,
                    },
                    self.context.color,
                    self.context.stroke_width,
                );
                self.needs_redraw = true;
                log::debug!("Placed text {id}");
            }
        }
    }

    /// Dismisses the pending entry without touching the scene.
    pub fn cancel_text_entry(&mut self) {
        if self.text_entry.take().is_some() {
            self.needs_redraw = true;
        }
    }
}
