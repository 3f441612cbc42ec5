//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the rules of the memory game: board generation, tile
//! selection, match detection, turns, scoring and timing. It has **zero
//! dependencies** on UI or I/O, making it:
//!
//! - **Deterministic**: the same seed and inputs produce the same game
//! - **Testable**: every rule is exercised without a terminal
//! - **Portable**: any host (terminal, GUI, headless) can drive it
//!
//! # Module Structure
//!
//! - [`board`]: shuffled tile layout with a perfect pairing of symbols
//! - [`game_state`]: the [`MatchGame`] state machine
//! - [`rng`]: seeded RNG with an unbiased Fisher-Yates shuffle
//! - [`scoring`]: winners, standings and the end-of-game summary
//! - [`snapshot`]: render-facing copy of the game state
//!
//! # Game Rules
//!
//! - Flip two tiles per turn. Equal symbols are a **match**: the pair stays
//!   face up, the player scores a point and keeps the turn.
//! - Different symbols are a **mismatch**: after the settle delay both tiles
//!   turn back down and the next player moves.
//! - Every pair-attempt counts as one move.
//! - The game ends when every tile is matched. Solo games are scored by time
//!   and moves; otherwise the highest score wins and equal top scores tie.
//!
//! # Example
//!
//! ```
//! use tui_memory_core::MatchGame;
//! use tui_memory_types::{GameConfig, SelectOutcome, SETTLE_DELAY_MS};
//!
//! let mut game = MatchGame::new(GameConfig::default(), 12345);
//! let partner = game.board().partner_of(0).unwrap();
//!
//! assert_eq!(game.select_tile(0), SelectOutcome::Revealed);
//! assert_eq!(game.select_tile(partner), SelectOutcome::Matched { game_over: false });
//! assert_eq!(game.scores(), &[1]);
//!
//! // The pair stays highlighted until the settle delay has elapsed.
//! game.tick(SETTLE_DELAY_MS);
//! assert!(game.flipped().is_empty());
//! ```
//!
//! # Timing
//!
//! The host calls [`MatchGame::tick`](game_state::MatchGame::tick) every frame
//! with the elapsed milliseconds. The tick drives both the settle delay
//! (1000ms) and the solo clock, which starts at the first flip.

pub mod board;
pub mod game_state;
pub mod rng;
pub mod scoring;
pub mod snapshot;

pub use tui_memory_types as types;

/// Capacity of per-player tables.
pub const PLAYER_SLOTS: usize = types::MAX_PLAYERS as usize;

// Re-export commonly used types for convenience
pub use board::Board;
pub use game_state::MatchGame;
pub use rng::SimpleRng;
pub use scoring::{format_elapsed, standings, winners, GameSummary, Outcome, Standing};
pub use snapshot::{GameSnapshot, TileView};
