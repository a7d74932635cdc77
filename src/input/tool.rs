//! Drawing tool selection.

/// Drawing tool selection.
///
/// The active tool determines what pointer-down does: create an entity and
/// start a gesture, erase, select, or open a text entry. Hosts switch tools
/// from their toolbar controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tool {
    /// Freehand drawing - follows the pointer path (default)
    Pen,
    /// Straight line - start fixed at pointer-down, end follows the pointer
    Line,
    /// Rectangle outline - anchor to pointer, any quadrant
    Rect,
    /// Square outline - like Rect, but rendered with equal sides
    Square,
    /// Triangle outline - regular polygon centered on the anchor
    Triangle,
    /// Circle outline - centered on the dragged extent's midpoint
    Circle,
    /// Eraser - removes entities near the pointer on pointer-down
    Eraser,
    /// Text - pointer-down places the pending text entry
    Text,
    /// Selection - pointer-down on a shape selects it for transform
    Select,
}

impl Tool {
    /// Parses a tool name from the config file (case-insensitive).
    pub fn from_name(name: &str) -> Option<Tool> {
        match name.to_lowercase().as_str() {
            "pen" => Some(Tool::Pen),
            "line" => Some(Tool::Line),
            "rect" | "rectangle" => Some(Tool::Rect),
            "square" => Some(Tool::Square),
            "triangle" => Some(Tool::Triangle),
            "circle" => Some(Tool::Circle),
            "eraser" => Some(Tool::Eraser),
            "text" => Some(Tool::Text),
            "select" => Some(Tool::Select),
            _ => None,
        }
    }

    /// Stable lowercase name as written in the config file.
    pub fn name(&self) -> &'static str {
        match self {
            Tool::Pen => "pen",
            Tool::Line => "line",
            Tool::Rect => "rect",
            Tool::Square => "square",
            Tool::Triangle => "triangle",
            Tool::Circle => "circle",
            Tool::Eraser => "eraser",
            Tool::Text => "text",
            Tool::Select => "select",
        }
    }
}
