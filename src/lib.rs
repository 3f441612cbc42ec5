//! TUI Memory (workspace facade crate).
//!
//! Re-exports the workspace crates under `tui_memory::{core,input,term,types}`
//! and holds the host pieces: environment config, logging, tick accounting and the screen flow.

pub use tui_memory_core as core;
pub use tui_memory_input as input;
pub use tui_memory_term as term;
pub use tui_memory_types as types;

pub mod app;
pub mod clock;
pub mod config;
pub mod logging;

pub use app::{App, Screen};
pub use clock::TickClock;
pub use config::AppConfig;
