//! Game state module - the tile-selection state machine
//!
//! [`MatchGame`] owns the board, the flip and matched sets, scores, the turn,
//! the move counter and the game clock. It is mutated only through
//! [`MatchGame::select_tile`], [`MatchGame::tick`], [`MatchGame::reset`] and
//! [`MatchGame::configure`].
//!
//! Flipping the second tile of a pair starts a settle countdown. While it runs
//! every selection is ignored, so at most one pair is ever in flight. A match
//! scores immediately and keeps the turn; a mismatch advances the turn and
//! counts the move once the countdown reaches zero.

use arrayvec::ArrayVec;
use tracing::{debug, info};

use crate::board::Board;
use crate::rng::SimpleRng;
use crate::scoring::{self, GameSummary};
use crate::snapshot::{GameSnapshot, TileView};
use crate::types::*;
use crate::PLAYER_SLOTS;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Pending {
    Match,
    Mismatch,
}

/// A flipped pair waiting out the settle delay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Settle {
    pending: Pending,
    remaining_ms: u32,
}

/// Complete game state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchGame {
    config: GameConfig,
    reset_policy: ResetTurnPolicy,
    board: Board,
    rng: SimpleRng,
    seed: u32,
    /// Face-up tiles pending resolution (0, 1 or 2).
    flipped: ArrayVec<usize, 2>,
    matched: Vec<bool>,
    matched_count: usize,
    just_matched: Option<[usize; 2]>,
    settle: Option<Settle>,
    scores: ArrayVec<u32, PLAYER_SLOTS>,
    turn: usize,
    moves: u32,
    /// Monotonic game clock, advanced only by `tick`.
    clock_ms: u64,
    started_at_ms: Option<u64>,
    finished_at_ms: Option<u64>,
    game_over: bool,
    /// Monotonic episode id (increments on reset).
    episode_id: u32,
}

impl MatchGame {
    /// Create a new game with the given configuration and RNG seed
    pub fn new(config: GameConfig, seed: u32) -> Self {
        let mut rng = SimpleRng::new(seed);
        let board = Board::generate(config.grid, &mut rng);
        Self::with_parts(config, board, rng, seed)
    }

    /// Create a game on a fixed layout.
    ///
    /// The board's grid size overrides `config.grid`. Later resets shuffle new
    /// boards from `seed`.
    pub fn from_board(config: GameConfig, board: Board, seed: u32) -> Self {
        let config = GameConfig {
            grid: board.grid(),
            ..config
        };
        Self::with_parts(config, board, SimpleRng::new(seed), seed)
    }

    fn with_parts(config: GameConfig, board: Board, rng: SimpleRng, seed: u32) -> Self {
        let mut game = Self {
            config,
            reset_policy: ResetTurnPolicy::default(),
            board,
            rng,
            seed,
            flipped: ArrayVec::new(),
            matched: Vec::new(),
            matched_count: 0,
            just_matched: None,
            settle: None,
            scores: ArrayVec::new(),
            turn: 0,
            moves: 0,
            clock_ms: 0,
            started_at_ms: None,
            finished_at_ms: None,
            game_over: false,
            episode_id: 0,
        };
        game.clear_progress();
        game
    }

    pub fn with_reset_policy(mut self, policy: ResetTurnPolicy) -> Self {
        self.reset_policy = policy;
        self
    }

    pub fn config(&self) -> GameConfig {
        self.config
    }

    pub fn reset_policy(&self) -> ResetTurnPolicy {
        self.reset_policy
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    pub fn turn(&self) -> usize {
        self.turn
    }

    pub fn scores(&self) -> &[u32] {
        &self.scores
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn flipped(&self) -> &[usize] {
        &self.flipped
    }

    pub fn matched_count(&self) -> usize {
        self.matched_count
    }

    pub fn is_matched(&self, index: usize) -> bool {
        self.matched.get(index).copied().unwrap_or(false)
    }

    pub fn just_matched(&self) -> Option<[usize; 2]> {
        self.just_matched
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    /// Whether the first tile of this game has been flipped.
    pub fn started(&self) -> bool {
        self.started_at_ms.is_some()
    }

    pub fn clock_ms(&self) -> u64 {
        self.clock_ms
    }

    pub fn phase(&self) -> Phase {
        if self.game_over {
            Phase::GameOver
        } else if self.settle.is_some() {
            Phase::Resolving
        } else if self.flipped.len() == 1 {
            Phase::OneFlipped
        } else {
            Phase::Idle
        }
    }

    /// Milliseconds of play since the first flip, frozen at the win.
    ///
    /// `None` outside solo mode, where only scores count.
    pub fn elapsed_ms(&self) -> Option<u64> {
        if !self.config.players.is_solo() {
            return None;
        }
        let elapsed = match (self.started_at_ms, self.finished_at_ms) {
            (Some(start), Some(end)) => end.saturating_sub(start),
            (Some(start), None) => self.clock_ms.saturating_sub(start),
            (None, _) => 0,
        };
        Some(elapsed)
    }

    pub fn tile_status(&self, index: usize) -> TileStatus {
        if self
            .just_matched
            .is_some_and(|pair| pair.contains(&index))
        {
            TileStatus::JustMatched
        } else if self.is_matched(index) {
            TileStatus::Matched
        } else if self.flipped.contains(&index) {
            TileStatus::FaceUp
        } else {
            TileStatus::Hidden
        }
    }

    /// Players holding the top score, once the game is over.
    pub fn winners(&self) -> Option<Vec<usize>> {
        if !self.game_over {
            return None;
        }
        scoring::winners(&self.scores)
    }

    /// End-of-game summary, once the game is over.
    pub fn summary(&self) -> Option<GameSummary> {
        if !self.game_over {
            return None;
        }
        Some(GameSummary::new(
            &self.scores,
            self.moves,
            self.elapsed_ms().unwrap_or(0),
        ))
    }

    /// Flip the tile at `index`.
    ///
    /// Out-of-range, already matched and already face-up tiles are ignored, as
    /// is every selection while a pair is settling or after the game is over.
    pub fn select_tile(&mut self, index: usize) -> SelectOutcome {
        if self.game_over || self.settle.is_some() {
            debug!(index, phase = ?self.phase(), "selection ignored while locked");
            return SelectOutcome::Ignored;
        }
        let Some(symbol) = self.board.symbol(index) else {
            debug!(index, "selection out of range");
            return SelectOutcome::Ignored;
        };
        if self.is_matched(index) || self.flipped.contains(&index) {
            return SelectOutcome::Ignored;
        }

        let first = self.flipped.first().copied();
        if self.flipped.try_push(index).is_err() {
            return SelectOutcome::Ignored;
        }
        if self.started_at_ms.is_none() {
            self.started_at_ms = Some(self.clock_ms);
            debug!(episode = self.episode_id, "first flip, clock started");
        }

        let Some(first) = first else {
            return SelectOutcome::Revealed;
        };

        if self.board.symbol(first) == Some(symbol) {
            self.resolve_match(first, index)
        } else {
            debug!(first, second = index, turn = self.turn, "mismatch");
            self.settle = Some(Settle {
                pending: Pending::Mismatch,
                remaining_ms: SETTLE_DELAY_MS,
            });
            SelectOutcome::Mismatched
        }
    }

    fn resolve_match(&mut self, first: usize, second: usize) -> SelectOutcome {
        for i in [first, second] {
            if let Some(slot) = self.matched.get_mut(i) {
                *slot = true;
            }
        }
        self.matched_count += 2;
        if let Some(score) = self.scores.get_mut(self.turn) {
            *score += 1;
        }
        self.moves += 1;
        self.just_matched = Some([first, second]);
        self.settle = Some(Settle {
            pending: Pending::Match,
            remaining_ms: SETTLE_DELAY_MS,
        });
        debug!(first, second, turn = self.turn, "match");

        if self.matched_count == self.board.len() {
            self.game_over = true;
            if self.config.players.is_solo() {
                self.finished_at_ms = Some(self.clock_ms);
            }
            info!(
                episode = self.episode_id,
                moves = self.moves,
                scores = ?self.scores.as_slice(),
                elapsed_ms = ?self.elapsed_ms(),
                "game over"
            );
        }

        SelectOutcome::Matched {
            game_over: self.game_over,
        }
    }

    /// Advance the game clock and any settling pair.
    ///
    /// Returns `true` when a pending pair resolved during this tick.
    pub fn tick(&mut self, elapsed_ms: u32) -> bool {
        self.clock_ms = self.clock_ms.saturating_add(elapsed_ms as u64);

        let Some(mut settle) = self.settle else {
            return false;
        };
        settle.remaining_ms = settle.remaining_ms.saturating_sub(elapsed_ms);
        if settle.remaining_ms > 0 {
            self.settle = Some(settle);
            return false;
        }

        self.settle = None;
        self.flipped.clear();
        self.just_matched = None;
        if settle.pending == Pending::Mismatch {
            self.turn = (self.turn + 1) % self.config.players.count();
            self.moves += 1;
        }
        true
    }

    /// Start a new game with the same configuration.
    ///
    /// Any settling pair is dropped. The turn follows the reset policy.
    pub fn reset(&mut self) {
        let turn = match self.reset_policy {
            ResetTurnPolicy::KeepAfterWin if self.game_over => self.turn,
            _ => 0,
        };
        self.board = Board::generate(self.config.grid, &mut self.rng);
        self.clear_progress();
        self.turn = turn;
        self.episode_id = self.episode_id.wrapping_add(1);
        info!(
            episode = self.episode_id,
            turn,
            grid = self.config.grid.side(),
            players = self.config.players.get(),
            "game reset"
        );
    }

    /// Replace the configuration before play starts.
    ///
    /// Rejected (returns `false`) once the first tile has been flipped.
    pub fn configure(&mut self, config: GameConfig) -> bool {
        if self.started() {
            debug!("configure rejected after first flip");
            return false;
        }
        self.config = config;
        self.board = Board::generate(config.grid, &mut self.rng);
        self.clear_progress();
        true
    }

    fn clear_progress(&mut self) {
        self.flipped.clear();
        self.matched.clear();
        self.matched.resize(self.board.len(), false);
        self.matched_count = 0;
        self.just_matched = None;
        self.settle = None;
        self.scores.clear();
        for _ in 0..self.config.players.count() {
            self.scores.push(0);
        }
        self.turn = 0;
        self.moves = 0;
        self.started_at_ms = None;
        self.finished_at_ms = None;
        self.game_over = false;
    }

    /// Apply a game action
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::Select(index) => self.select_tile(index).changed_state(),
            GameAction::Restart => {
                self.reset();
                true
            }
        }
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.config = self.config;
        out.tiles.clear();
        out.tiles
            .extend(self.board.symbols().iter().enumerate().map(|(i, &symbol)| TileView {
                symbol,
                status: self.tile_status(i),
            }));
        out.flipped.clear();
        out.flipped.extend(self.flipped.iter().copied());
        out.matched_count = self.matched_count;
        out.scores.clear();
        out.scores.extend(self.scores.iter().copied());
        out.turn = self.turn;
        out.moves = self.moves;
        out.elapsed_ms = self.elapsed_ms();
        out.phase = self.phase();
        out.game_over = self.game_over;
        out.winners = self.winners();
        out.summary = self.summary();
        out.episode_id = self.episode_id;
        out.seed = self.seed;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

impl Default for MatchGame {
    fn default() -> Self {
        Self::new(GameConfig::default(), 1)
    }
}
