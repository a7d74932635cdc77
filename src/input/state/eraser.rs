//! Eraser hit-testing over the scene.

use super::EditorState;

impl EditorState {
    /// Removes every stroke and shape within the eraser's radius of (x, y).
    ///
    /// Runs synchronously on pointer-down with the eraser tool; erasing is
    /// instantaneous and never enters a gesture. Strokes are removed when
    /// any of their points falls inside the axis-aligned square of
    /// half-width `eraser_radius` around the pointer; shapes go through
    /// their kind's hit test. A single event may remove several entities.
    ///
    /// Removing a selected shape drops the selection; removing a shape
    /// under text edit cancels the pending entry.
    pub fn erase_at(&mut self, x: f64, y: f64) {
        let radius = self.context.eraser_radius;

        let strokes_removed = self
            .scene
            .remove_strokes_where(|stroke| stroke.hit_test(x, y, radius));
        let removed_ids = self
            .scene
            .remove_shapes_where(|shape| shape.hit_test(x, y, radius));

        if let Some(entry) = &self.text_entry {
            if let Some(editing) = entry.editing {
                if removed_ids.contains(&editing) {
                    self.text_entry = None;
                }
            }
        }

        let total = strokes_removed + removed_ids.len();
        if total > 0 {
            self.needs_redraw = true;
            log::debug!("Eraser removed {total} entities at ({x:.1}, {y:.1})");
        }
    }
}
