//! Render-facing copy of the game state, refilled in place each frame.

use arrayvec::ArrayVec;

use crate::scoring::GameSummary;
use crate::types::{GameConfig, Phase, Symbol, TileStatus};
use crate::PLAYER_SLOTS;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TileView {
    pub symbol: Symbol,
    pub status: TileStatus,
}

/// Render-facing copy of a [`MatchGame`](crate::MatchGame).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GameSnapshot {
    pub config: GameConfig,
    pub tiles: Vec<TileView>,
    pub flipped: ArrayVec<usize, 2>,
    pub matched_count: usize,
    pub scores: ArrayVec<u32, PLAYER_SLOTS>,
    pub turn: usize,
    pub moves: u32,
    /// Solo mode only.
    pub elapsed_ms: Option<u64>,
    pub phase: Phase,
    pub game_over: bool,
    pub winners: Option<Vec<usize>>,
    pub summary: Option<GameSummary>,
    pub episode_id: u32,
    pub seed: u32,
}

impl GameSnapshot {
    pub fn tile(&self, index: usize) -> Option<TileView> {
        self.tiles.get(index).copied()
    }

    pub fn side(&self) -> u8 {
        self.config.grid.side()
    }

    /// Whether a tile pick would currently be considered.
    pub fn playable(&self) -> bool {
        !self.game_over && self.phase != Phase::Resolving
    }
}
