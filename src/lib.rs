//! Library exports for embedding the sketchboard drawing engine.
//!
//! Exposes the editor state machine alongside the scene model and
//! configuration types so canvas hosts can feed in pointer and text events
//! and read back what to render.

pub mod config;
pub mod draw;
pub mod input;
pub mod util;

pub use config::Config;
pub use input::EditorState;
