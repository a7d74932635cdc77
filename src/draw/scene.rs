//! Scene container owning all strokes and shapes in draw order.

use super::color::Color;
use super::shape::{Shape, ShapeId, ShapeKind, Stroke};

/// Container for everything drawn in the current session.
///
/// Owns the stroke and shape collections in draw order (first = bottom
/// layer, last = top layer), the selection, and the counter that names new
/// shapes. The editor mutates it through gestures; hosts read it to render.
#[derive(Debug, Clone)]
pub struct Scene {
    /// All freehand strokes in draw order
    pub strokes: Vec<Stroke>,
    /// All shapes in draw order
    pub shapes: Vec<Shape>,
    /// Currently selected shape, if any (strokes are never selectable)
    pub selected: Option<ShapeId>,
    /// Last issued shape id; never rewound, so ids are unique per session
    next_id: u64,
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene {
    /// Creates a new empty scene.
    pub fn new() -> Self {
        Self {
            strokes: Vec::new(),
            shapes: Vec::new(),
            selected: None,
            next_id: 0,
        }
    }

    /// Adds a stroke on top of existing strokes and returns its index.
    pub fn add_stroke(&mut self, stroke: Stroke) -> usize {
        self.strokes.push(stroke);
        self.strokes.len() - 1
    }

    /// Adds a shape on top of existing shapes, assigning it the next id.
    pub fn add_shape(&mut self, kind: ShapeKind, color: Color, stroke_width: f64) -> ShapeId {
        self.next_id += 1;
        let id = ShapeId(self.next_id);
        self.shapes.push(Shape {
            id,
            kind,
            color,
            stroke_width,
        });
        id
    }

    /// Looks up a shape by id.
    pub fn shape(&self, id: ShapeId) -> Option<&Shape> {
        self.shapes.iter().find(|shape| shape.id == id)
    }

    /// Looks up a shape by id for mutation.
    pub fn shape_mut(&mut self, id: ShapeId) -> Option<&mut Shape> {
        self.shapes.iter_mut().find(|shape| shape.id == id)
    }

    /// Looks up a stroke by index for mutation.
    pub fn stroke_mut(&mut self, index: usize) -> Option<&mut Stroke> {
        self.strokes.get_mut(index)
    }

    /// Selects the given shape if it exists, returning whether it did.
    ///
    /// A missing id leaves the current selection untouched.
    pub fn select(&mut self, id: ShapeId) -> bool {
        if self.shape(id).is_some() {
            self.selected = Some(id);
            true
        } else {
            false
        }
    }

    /// Removes and returns the shape with the given id, if present.
    ///
    /// A selection pointing at the removed shape is cleared, so `selected`
    /// always names a live shape.
    pub fn remove_shape(&mut self, id: ShapeId) -> Option<Shape> {
        let index = self.shapes.iter().position(|shape| shape.id == id)?;
        if self.selected == Some(id) {
            self.selected = None;
        }
        Some(self.shapes.remove(index))
    }

    /// Removes every stroke matching the predicate, returning how many
    /// were removed.
    pub fn remove_strokes_where(&mut self, mut pred: impl FnMut(&Stroke) -> bool) -> usize {
        let before = self.strokes.len();
        self.strokes.retain(|stroke| !pred(stroke));
        before - self.strokes.len()
    }

    /// Removes every shape matching the predicate, returning the removed
    /// ids in draw order.
    ///
    /// The selection is cleared if its shape is among the removed.
    pub fn remove_shapes_where(&mut self, mut pred: impl FnMut(&Shape) -> bool) -> Vec<ShapeId> {
        let mut removed = Vec::new();
        self.shapes.retain(|shape| {
            if pred(shape) {
                removed.push(shape.id);
                false
            } else {
                true
            }
        });
        if let Some(selected) = self.selected {
            if removed.contains(&selected) {
                self.selected = None;
            }
        }
        removed
    }

    /// Removes all strokes, shapes, and the selection.
    ///
    /// The id counter survives: shapes drawn after a clear continue the
    /// session's numbering rather than reusing ids.
    pub fn clear(&mut self) {
        self.strokes.clear();
        self.shapes.clear();
        self.selected = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::color::BLACK;
    use crate::draw::shape::Extent;

    fn rect_kind() -> ShapeKind {
        ShapeKind::Rect {
            extent: Extent::anchored_at(0.0, 0.0),
        }
    }

    #[test]
    fn ids_are_monotonic_and_never_reused() {
        let mut scene = Scene::new();
        let first = scene.add_shape(rect_kind(), BLACK, 5.0);
        let second = scene.add_shape(rect_kind(), BLACK, 5.0);
        assert_eq!(first.to_string(), "shape_1");
        assert_eq!(second.to_string(), "shape_2");

        scene.remove_shape(second);
        let third = scene.add_shape(rect_kind(), BLACK, 5.0);
        assert_eq!(third.to_string(), "shape_3");
    }

    #[test]
    fn clear_keeps_the_id_counter() {
        let mut scene = Scene::new();
        scene.add_shape(rect_kind(), BLACK, 5.0);
        scene.clear();
        assert!(scene.shapes.is_empty());
        let next = scene.add_shape(rect_kind(), BLACK, 5.0);
        assert_eq!(next.to_string(), "shape_2");
    }

    #[test]
    fn removing_the_selected_shape_clears_selection() {
        let mut scene = Scene::new();
        let id = scene.add_shape(rect_kind(), BLACK, 5.0);
        assert!(scene.select(id));
        scene.remove_shape(id);
        assert_eq!(scene.selected, None);
    }

    #[test]
    fn selecting_a_missing_id_is_refused() {
        let mut scene = Scene::new();
        let id = scene.add_shape(rect_kind(), BLACK, 5.0);
        assert!(scene.select(id));
        assert!(!scene.select(ShapeId(99)));
        assert_eq!(scene.selected, Some(id));
    }

    #[test]
    fn predicate_removal_reports_ids_and_fixes_selection() {
        let mut scene = Scene::new();
        let first = scene.add_shape(rect_kind(), BLACK, 5.0);
        let second = scene.add_shape(rect_kind(), BLACK, 5.0);
        scene.select(first);

        let removed = scene.remove_shapes_where(|shape| shape.id == first);
        assert_eq!(removed, vec![first]);
        assert_eq!(scene.selected, None);
        assert_eq!(scene.shapes.len(), 1);
        assert_eq!(scene.shapes[0].id, second);
    }
}
