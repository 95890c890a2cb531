//! Chat message panel library.
//!
//! Renders ordered message records into a scrollable container through an
//! abstract rendering surface, with stable per-sender colors, relative
//! timestamps, and a gated text input.

pub mod board;
pub mod config;
pub mod events;
pub mod gate;
pub mod memory;
pub mod message;
pub mod palette;
pub mod surface;
pub mod text;
pub mod timefmt;
