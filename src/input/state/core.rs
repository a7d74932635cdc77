//! Editor state and the gesture state machine.

use crate::config::Config;
use crate::draw::{Color, Scene, Shape, ShapeId};
use crate::input::tool::Tool;

/// Current gesture state machine.
///
/// Tracks whether the pointer is idle or actively growing an entity. The
/// entity under construction is named explicitly, so move events mutate
/// exactly the stroke or shape this gesture created and nothing else.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gesture {
    /// Not interacting - waiting for pointer input
    Idle,
    /// Growing a freehand stroke (pointer button held down)
    Stroke {
        /// Index of the stroke under construction in the scene
        index: usize,
    },
    /// Growing a shape (pointer button held down)
    Shape {
        /// Id of the shape under construction
        id: ShapeId,
    },
}

/// Active tool and the style values applied to newly created entities.
///
/// Owned by the editor so the gesture, eraser, and text engines all read
/// one explicit context instead of ambient state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToolContext {
    /// Active tool
    pub tool: Tool,
    /// Color for new strokes and shapes
    pub color: Color,
    /// Stroke width for new entities, in pixels (1.0-50.0)
    pub stroke_width: f64,
    /// Eraser radius in pixels (1.0-100.0)
    pub eraser_radius: f64,
    /// Font size for new text, in pixels (10.0-100.0)
    pub font_size: f64,
}

/// Pending text entry opened by the text tool.
///
/// Lives outside the gesture machine: a background pointer-down can cancel
/// the entry and start a gesture in the same event.
#[derive(Debug, Clone, PartialEq)]
pub struct TextEntry {
    /// Anchor X coordinate where the text will be placed
    pub x: f64,
    /// Anchor Y coordinate where the text will be placed
    pub y: f64,
    /// Buffer contents mirrored from the host's text control
    pub buffer: String,
    /// When editing existing text, the shape being rewritten
    pub editing: Option<ShapeId>,
}

/// Main editor state for a drawing session.
///
/// Holds the scene (all strokes and shapes), the tool/style context, the
/// gesture state machine, and the pending text entry. All pointer and
/// control events flow through this struct; hosts read `scene` to render
/// and clear `needs_redraw` after each draw pass.
pub struct EditorState {
    /// Canonical drawing state: strokes, shapes, selection
    pub scene: Scene,
    /// Active tool and style values
    pub context: ToolContext,
    /// Current gesture state machine
    pub gesture: Gesture,
    /// Pending text entry, if the text tool has opened one
    pub text_entry: Option<TextEntry>,
    /// Whether the display needs to be redrawn
    pub needs_redraw: bool,
}

impl EditorState {
    /// Creates a new editor with the specified defaults.
    ///
    /// Style values are clamped to their valid ranges (stroke width
    /// 1.0-50.0, eraser radius 1.0-100.0, font size 10.0-100.0).
    ///
    /// # Arguments
    /// * `tool` - Initial tool
    /// * `color` - Initial drawing color
    /// * `stroke_width` - Initial stroke width in pixels
    /// * `eraser_radius` - Initial eraser radius in pixels
    /// * `font_size` - Initial font size for text in pixels
    pub fn with_defaults(
        tool: Tool,
        color: Color,
        stroke_width: f64,
        eraser_radius: f64,
        font_size: f64,
    ) -> Self {
        Self {
            scene: Scene::new(),
            context: ToolContext {
                tool,
                color,
                stroke_width: stroke_width.clamp(1.0, 50.0),
                eraser_radius: eraser_radius.clamp(1.0, 100.0),
                font_size: font_size.clamp(10.0, 100.0),
            },
            gesture: Gesture::Idle,
            text_entry: None,
            needs_redraw: true,
        }
    }

    /// Builds an editor seeded with the configured defaults.
    pub fn from_config(config: &Config) -> Self {
        Self::with_defaults(
            config.drawing.resolve_tool(),
            config.drawing.resolve_color(),
            config.drawing.default_stroke_width,
            config.eraser.radius,
            config.text.default_font_size,
        )
    }

    /// Switches the active tool.
    ///
    /// Any in-progress gesture is abandoned, the pending text entry is
    /// cancelled, and the selection is cleared so the handle overlay never
    /// outlives the select tool. Switching to the already-active tool does
    /// nothing.
    pub fn set_tool(&mut self, tool: Tool) {
        if self.context.tool == tool {
            return;
        }
        self.context.tool = tool;
        self.gesture = Gesture::Idle;
        self.cancel_text_entry();
        if self.scene.selected.take().is_some() {
            self.needs_redraw = true;
        }
        log::debug!("Tool switched to {}", tool.name());
    }

    /// Sets the drawing color for newly created entities.
    pub fn set_color(&mut self, color: Color) {
        self.context.color = color;
    }

    /// Sets the stroke width, clamped to the 1.0-50.0 range.
    pub fn set_stroke_width(&mut self, width: f64) {
        self.context.stroke_width = width.clamp(1.0, 50.0);
        log::debug!("Stroke width set to {:.1}px", self.context.stroke_width);
    }

    /// Sets the eraser radius, clamped to the 1.0-100.0 range.
    pub fn set_eraser_radius(&mut self, radius: f64) {
        self.context.eraser_radius = radius.clamp(1.0, 100.0);
        log::debug!("Eraser radius set to {:.1}px", self.context.eraser_radius);
    }

    /// Sets the font size for new text, clamped to the 10.0-100.0 range.
    pub fn set_font_size(&mut self, size: f64) {
        self.context.font_size = size.clamp(10.0, 100.0);
        log::debug!("Font size set to {:.1}px", self.context.font_size);
    }

    /// Returns the currently selected shape, if any.
    pub fn selected_shape(&self) -> Option<&Shape> {
        self.scene.selected.and_then(|id| self.scene.shape(id))
    }

    /// Removes the selected shape and clears the selection.
    ///
    /// Returns whether a shape was removed; without a selection this is a
    /// no-op. A pending text edit on the removed shape is cancelled.
    pub fn delete_selected(&mut self) -> bool {
        let Some(id) = self.scene.selected else {
            return false;
        };
        if self.scene.remove_shape(id).is_none() {
            return false;
        }
        if let Some(entry) = &self.text_entry {
            if entry.editing == Some(id) {
                self.text_entry = None;
            }
        }
        self.needs_redraw = true;
        log::debug!("Deleted {id}");
        true
    }

    /// Clears all strokes, shapes, the selection, the pending text entry,
    /// and any active gesture.
    ///
    /// The shape id counter is not rewound: ids stay unique for the whole
    /// session.
    pub fn reset(&mut self) {
        self.scene.clear();
        self.gesture = Gesture::Idle;
        self.text_entry = None;
        self.needs_redraw = true;
        log::info!("Scene reset");
    }
}
