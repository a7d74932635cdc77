//! Canonical drawing state and resolved geometry.
//!
//! This module defines the core model the editor mutates and hosts render:
//! - [`Color`]: RGBA color representation with hex parsing and constants
//! - [`Stroke`] / [`Shape`]: freehand paths and parameterized primitives
//! - [`Scene`]: container for everything drawn in a session
//! - [`Outline`]: per-shape resolved geometry for the host's draw pass

pub mod color;
pub mod outline;
pub mod scene;
pub mod shape;

// Re-export commonly used types at module level
pub use color::{Color, ParseColorError};
pub use outline::Outline;
pub use scene::Scene;
pub use shape::{Extent, Shape, ShapeId, ShapeKind, Stroke};

// Re-export color constants for public API (unused internally but part of public interface)
#[allow(unused_imports)]
pub use color::{BLACK, BLUE, GREEN, ORANGE, PINK, RED, WHITE, YELLOW};
