//! Drawing surface handed to components during the render passes
//!
//! Components never talk to a graphics API directly. They record
//! [`DrawCommand`]s into a [`DrawList`] which the host replays onto its own
//! canvas after the frame.

pub mod color;
pub mod commands;

pub use color::Color;
pub use commands::{DrawCommand, DrawList};
