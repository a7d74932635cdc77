mod core;
mod eraser;
mod pointer;
mod text;
mod transform;

pub use core::{EditorState, Gesture, TextEntry, ToolContext};
