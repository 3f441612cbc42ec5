//! Terminal input module (host-facing).
//!
//! This module is intentionally independent of any rendering code. It maps
//! `crossterm` key events into [`Command`]s and tracks the board cursor that
//! turns arrow-key movement into tile indices for the game core.

pub mod cursor;
pub mod map;

pub use tui_memory_types as types;

pub use cursor::{Direction, GridCursor};
pub use map::{handle_key_event, should_quit, Command};
