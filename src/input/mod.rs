//! Input handling and the gesture state machine.
//!
//! This module translates host pointer and control events into drawing
//! actions. It maintains the tool/style context, the gesture state machine
//! (idle or growing an entity), the eraser and transform-commit engines,
//! and the pending text entry.

pub mod events;
pub mod state;
pub mod tool;

// Re-export commonly used types at module level
pub use events::{HitTarget, TransformReport};
pub use state::{EditorState, Gesture, TextEntry, ToolContext};
pub use tool::Tool;
