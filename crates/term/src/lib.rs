//! Terminal "game renderer" module.
//!
//! This is a small, game-oriented rendering layer for terminal gameplay.
//! It intentionally avoids ratatui widgets/layout and instead renders into a
//! simple framebuffer that can be flushed to a terminal backend.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Views are pure functions of a snapshot plus host state
//! - Only changed cells are written to the terminal

pub mod fb;
pub mod game_view;
pub mod renderer;
pub mod setup_view;

pub use tui_memory_core as core;
pub use tui_memory_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{symbol_label, AnchorY, GameView, HostView, MenuItem, Viewport, ICONS};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
pub use setup_view::{SetupField, SetupView};
