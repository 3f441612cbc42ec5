//! Scoring module - winners, standings and the end-of-game summary
//!
//! Head-to-head games are decided purely by pair count. Every player whose
//! score equals the maximum is a winner, so two or more of them make a tie.
//! Solo games have no winner; the summary reports elapsed time and moves.

use std::cmp::Reverse;

/// Outcome of a finished game.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// Single player: time and moves are the result.
    Solo { elapsed_ms: u64, moves: u32 },
    /// Exactly one player holds the top score.
    Winner(usize),
    /// Two or more players share the top score (ascending player index).
    Tie(Vec<usize>),
}

/// One row of the final results table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Standing {
    /// Zero-based player index.
    pub player: usize,
    pub score: u32,
    pub winner: bool,
}

/// Indices of every player holding the top score.
///
/// Returns `None` for fewer than two players: solo games have no winner.
///
/// # Examples
///
/// ```
/// use tui_memory_core::scoring::winners;
///
/// assert_eq!(winners(&[3, 3, 1]), Some(vec![0, 1]));
/// assert_eq!(winners(&[2, 5, 1, 5]), Some(vec![1, 3]));
/// assert_eq!(winners(&[4]), None);
/// ```
pub fn winners(scores: &[u32]) -> Option<Vec<usize>> {
    if scores.len() < 2 {
        return None;
    }
    let max = scores.iter().copied().max()?;
    Some(
        scores
            .iter()
            .enumerate()
            .filter(|&(_, &s)| s == max)
            .map(|(i, _)| i)
            .collect(),
    )
}

/// Decide the outcome from final scores.
pub fn outcome(scores: &[u32], moves: u32, elapsed_ms: u64) -> Outcome {
    match winners(scores) {
        None => Outcome::Solo { elapsed_ms, moves },
        Some(w) if w.len() == 1 => Outcome::Winner(w[0]),
        Some(w) => Outcome::Tie(w),
    }
}

/// Results table in display order.
///
/// Winners come first in ascending player order, then everyone else by
/// descending score. Winners all share the top score, so a single
/// (score descending, index ascending) ordering covers both rules.
pub fn standings(scores: &[u32]) -> Vec<Standing> {
    let top = winners(scores).unwrap_or_default();
    let mut rows: Vec<Standing> = scores
        .iter()
        .enumerate()
        .map(|(player, &score)| Standing {
            player,
            score,
            winner: top.contains(&player),
        })
        .collect();
    rows.sort_by_key(|s| (Reverse(s.winner), Reverse(s.score), s.player));
    rows
}

/// Format a duration as `m:ss`, flooring to whole seconds.
///
/// # Examples
///
/// ```
/// use tui_memory_core::scoring::format_elapsed;
///
/// assert_eq!(format_elapsed(0), "0:00");
/// assert_eq!(format_elapsed(9_999), "0:09");
/// assert_eq!(format_elapsed(83_000), "1:23");
/// ```
pub fn format_elapsed(ms: u64) -> String {
    let secs = ms / 1000;
    format!("{}:{:02}", secs / 60, secs % 60)
}

/// End-of-game summary handed to the renderer.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GameSummary {
    pub outcome: Outcome,
    pub standings: Vec<Standing>,
    pub moves: u32,
}

impl GameSummary {
    pub fn new(scores: &[u32], moves: u32, elapsed_ms: u64) -> Self {
        Self {
            outcome: outcome(scores, moves, elapsed_ms),
            standings: standings(scores),
            moves,
        }
    }

    /// Title line, with players numbered from 1.
    pub fn headline(&self) -> String {
        match &self.outcome {
            Outcome::Solo { .. } => "You did it!".to_string(),
            Outcome::Winner(p) => format!("Player {} wins!", p + 1),
            Outcome::Tie(_) => "It's a tie!".to_string(),
        }
    }

    pub fn subtitle(&self) -> &'static str {
        match self.outcome {
            Outcome::Solo { .. } => "Game over! Here's how you got on…",
            _ => "Game over! Here are the results…",
        }
    }

    pub fn is_solo(&self) -> bool {
        matches!(self.outcome, Outcome::Solo { .. })
    }
}
