//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! Everything here is plain data: the game core, the terminal front end and any
//! settings store all speak in these types.
//!
//! # Configuration
//!
//! A game is configured by a [`GameConfig`]:
//!
//! - **Players**: 1 to 4 ([`PlayerCount`])
//! - **Theme**: numbers or icons ([`Theme`])
//! - **Grid**: 4x4 (8 pairs) or 6x6 (18 pairs) ([`GridSize`])
//!
//! Out-of-range values cannot be constructed; the fallible constructors return
//! [`ConfigError`].
//!
//! # Timing Constants
//!
//! Timing values are in milliseconds:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Fixed timestep interval (~60 FPS) |
//! | `SETTLE_DELAY_MS` | 1000 | Pause before a flipped pair is resolved |
//!
//! # Examples
//!
//! ```
//! use tui_memory_types::{GameConfig, GridSize, PlayerCount, Theme};
//!
//! let config = GameConfig::new(
//!     PlayerCount::new(2).unwrap(),
//!     "icons".parse::<Theme>().unwrap(),
//!     GridSize::try_from(6).unwrap(),
//! );
//! assert_eq!(config.grid.tile_count(), 36);
//! assert_eq!(config.grid.pair_count(), 18);
//!
//! assert!(PlayerCount::new(5).is_err());
//! assert!(GridSize::try_from(5).is_err());
//! ```

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Fixed timestep interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Pause after the second tile of a pair is flipped before the outcome settles.
pub const SETTLE_DELAY_MS: u32 = 1000;

/// Smallest supported player count.
pub const MIN_PLAYERS: u8 = 1;

/// Largest supported player count.
pub const MAX_PLAYERS: u8 = 4;

/// Storage key under which a settings store keeps the last-used [`GameConfig`].
pub const SETTINGS_KEY: &str = "memory-game-settings";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timing_defaults() {
        assert_eq!(TICK_MS, 16);
        assert_eq!(SETTLE_DELAY_MS, 1000);
    }

    #[test]
    fn player_count_bounds() {
        assert_eq!(PlayerCount::new(0), Err(ConfigError::PlayerCount(0)));
        assert_eq!(PlayerCount::new(1).map(PlayerCount::get), Ok(1));
        assert_eq!(PlayerCount::new(4).map(PlayerCount::get), Ok(4));
        assert_eq!(PlayerCount::new(5), Err(ConfigError::PlayerCount(5)));
        assert!(PlayerCount::SOLO.is_solo());
        assert!(!PlayerCount::new(3).unwrap().is_solo());
    }

    #[test]
    fn player_count_cycles() {
        let four = PlayerCount::new(4).unwrap();
        assert_eq!(four.next(), PlayerCount::SOLO);
        assert_eq!(PlayerCount::SOLO.prev(), four);
        assert_eq!(PlayerCount::SOLO.next().get(), 2);
    }

    #[test]
    fn grid_size_dimensions() {
        assert_eq!(GridSize::Four.side(), 4);
        assert_eq!(GridSize::Four.tile_count(), 16);
        assert_eq!(GridSize::Four.pair_count(), 8);
        assert_eq!(GridSize::Six.side(), 6);
        assert_eq!(GridSize::Six.tile_count(), 36);
        assert_eq!(GridSize::Six.pair_count(), 18);
        assert_eq!(GridSize::try_from(3), Err(ConfigError::GridSize(3)));
        assert_eq!(GridSize::Four.next(), GridSize::Six);
        assert_eq!(GridSize::Six.next(), GridSize::Four);
    }

    #[test]
    fn theme_parsing() {
        assert_eq!("Numbers".parse(), Ok(Theme::Numbers));
        assert_eq!(" ICONS ".parse(), Ok(Theme::Icons));
        assert_eq!(
            "emoji".parse::<Theme>(),
            Err(ConfigError::Theme("emoji".to_string()))
        );
        assert_eq!(Theme::Icons.as_str(), "icons");
        assert_eq!(Theme::Numbers.next(), Theme::Icons);
    }

    #[test]
    fn reset_policy_parsing() {
        assert_eq!("keep".parse(), Ok(ResetTurnPolicy::KeepAfterWin));
        assert_eq!("First".parse(), Ok(ResetTurnPolicy::FirstPlayer));
        assert_eq!("first-player".parse(), Ok(ResetTurnPolicy::FirstPlayer));
        assert_eq!(
            "random".parse::<ResetTurnPolicy>(),
            Err(ConfigError::ResetPolicy("random".to_string()))
        );
        assert_eq!(ResetTurnPolicy::default(), ResetTurnPolicy::KeepAfterWin);
    }

    #[test]
    fn config_errors_name_the_bad_value() {
        let err = "sideways".parse::<ResetTurnPolicy>().unwrap_err();
        assert_eq!(err.to_string(), "unknown reset turn policy: \"sideways\"");
        let err = "emoji".parse::<Theme>().unwrap_err();
        assert_eq!(err.to_string(), "unknown theme: \"emoji\"");
    }

    #[test]
    fn config_serializes_with_settings_field_names() {
        let config = GameConfig::new(PlayerCount::new(3).unwrap(), Theme::Icons, GridSize::Six);
        let json = serde_json::to_value(config).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"numberOfPlayers": 3, "theme": "icons", "gridSize": 6})
        );

        let back: GameConfig = serde_json::from_value(json).unwrap();
        assert_eq!(back, config);
    }

    #[test]
    fn config_rejects_unsupported_values_on_load() {
        let bad_players =
            serde_json::json!({"numberOfPlayers": 7, "theme": "numbers", "gridSize": 4});
        assert!(serde_json::from_value::<GameConfig>(bad_players).is_err());

        let bad_grid = serde_json::json!({"numberOfPlayers": 1, "theme": "numbers", "gridSize": 5});
        assert!(serde_json::from_value::<GameConfig>(bad_grid).is_err());
    }

    #[test]
    fn default_config_is_solo_numbers_four() {
        let config = GameConfig::default();
        assert!(config.players.is_solo());
        assert_eq!(config.theme, Theme::Numbers);
        assert_eq!(config.grid, GridSize::Four);
    }
}

/// Errors raised when parsing raw settings values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("number of players must be between 1 and 4, got {0}")]
    PlayerCount(u8),
    #[error("grid size must be 4 or 6, got {0}")]
    GridSize(u8),
    #[error("unknown theme: {0:?}")]
    Theme(String),
    #[error("unknown reset turn policy: {0:?}")]
    ResetPolicy(String),
}

/// Number of players taking part in one game (1..=4).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct PlayerCount(u8);

impl PlayerCount {
    /// A single player (solo mode).
    pub const SOLO: PlayerCount = PlayerCount(1);

    pub fn new(count: u8) -> Result<Self, ConfigError> {
        if (MIN_PLAYERS..=MAX_PLAYERS).contains(&count) {
            Ok(Self(count))
        } else {
            Err(ConfigError::PlayerCount(count))
        }
    }

    pub fn get(self) -> u8 {
        self.0
    }

    /// Player count as a `usize`, for sizing per-player tables.
    pub fn count(self) -> usize {
        self.0 as usize
    }

    /// Solo mode: timer and move count replace head-to-head scoring.
    pub fn is_solo(self) -> bool {
        self.0 == 1
    }

    /// Next count, wrapping from 4 back to 1.
    pub fn next(self) -> Self {
        if self.0 >= MAX_PLAYERS {
            Self(MIN_PLAYERS)
        } else {
            Self(self.0 + 1)
        }
    }

    /// Previous count, wrapping from 1 up to 4.
    pub fn prev(self) -> Self {
        if self.0 <= MIN_PLAYERS {
            Self(MAX_PLAYERS)
        } else {
            Self(self.0 - 1)
        }
    }
}

impl TryFrom<u8> for PlayerCount {
    type Error = ConfigError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<PlayerCount> for u8 {
    fn from(value: PlayerCount) -> Self {
        value.0
    }
}

impl Default for PlayerCount {
    fn default() -> Self {
        Self::SOLO
    }
}

/// How face-up symbols are displayed.
///
/// The theme never changes which tiles match; it only selects the glyphs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Numbers,
    Icons,
}

/// Parse theme from string (case-insensitive)
///
/// # Examples
///
/// ```
/// use tui_memory_types::{ConfigError, Theme};
///
/// assert_eq!("numbers".parse(), Ok(Theme::Numbers));
/// assert_eq!("Icons".parse(), Ok(Theme::Icons));
/// assert_eq!(
///     "unknown".parse::<Theme>(),
///     Err(ConfigError::Theme("unknown".into()))
/// );
/// ```
impl FromStr for Theme {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "numbers" => Ok(Theme::Numbers),
            "icons" => Ok(Theme::Icons),
            _ => Err(ConfigError::Theme(s.to_string())),
        }
    }
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Numbers => "numbers",
            Theme::Icons => "icons",
        }
    }

    /// Toggle to the other theme.
    pub fn next(self) -> Self {
        match self {
            Theme::Numbers => Theme::Icons,
            Theme::Icons => Theme::Numbers,
        }
    }
}

/// Square board dimensions.
///
/// - **Four**: 4x4 board, 16 tiles, 8 pairs
/// - **Six**: 6x6 board, 36 tiles, 18 pairs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum GridSize {
    #[default]
    Four,
    Six,
}

impl GridSize {
    /// Tiles per row (and per column).
    pub fn side(self) -> u8 {
        match self {
            GridSize::Four => 4,
            GridSize::Six => 6,
        }
    }

    /// Total number of tiles on the board (`side²`, always even).
    pub fn tile_count(self) -> usize {
        let side = self.side() as usize;
        side * side
    }

    /// Number of distinct symbols on the board.
    pub fn pair_count(self) -> usize {
        self.tile_count() / 2
    }

    /// Toggle to the other grid size.
    pub fn next(self) -> Self {
        match self {
            GridSize::Four => GridSize::Six,
            GridSize::Six => GridSize::Four,
        }
    }
}

impl TryFrom<u8> for GridSize {
    type Error = ConfigError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            4 => Ok(GridSize::Four),
            6 => Ok(GridSize::Six),
            other => Err(ConfigError::GridSize(other)),
        }
    }
}

impl From<GridSize> for u8 {
    fn from(value: GridSize) -> Self {
        value.side()
    }
}

/// Configuration for one game. Immutable for the duration of a game.
///
/// Serializes as `{"numberOfPlayers": n, "theme": "...", "gridSize": n}`, the
/// shape a settings store keeps under [`SETTINGS_KEY`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct GameConfig {
    #[serde(rename = "numberOfPlayers")]
    pub players: PlayerCount,
    pub theme: Theme,
    #[serde(rename = "gridSize")]
    pub grid: GridSize,
}

impl GameConfig {
    pub fn new(players: PlayerCount, theme: Theme, grid: GridSize) -> Self {
        Self {
            players,
            theme,
            grid,
        }
    }
}

/// What happens to the turn index when a game is reset.
///
/// - **KeepAfterWin**: a reset after a finished game keeps the turn with the
///   player who made the final match; a reset mid-game goes back to player 0.
/// - **FirstPlayer**: every reset starts with player 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ResetTurnPolicy {
    #[default]
    KeepAfterWin,
    FirstPlayer,
}

/// Parse policy from string (case-insensitive): "keep" or "first".
impl FromStr for ResetTurnPolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "keep" | "keep-after-win" => Ok(ResetTurnPolicy::KeepAfterWin),
            "first" | "first-player" => Ok(ResetTurnPolicy::FirstPlayer),
            _ => Err(ConfigError::ResetPolicy(s.to_string())),
        }
    }
}

impl ResetTurnPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResetTurnPolicy::KeepAfterWin => "keep",
            ResetTurnPolicy::FirstPlayer => "first",
        }
    }
}

/// Symbol shown on a face-up tile, numbered `0..pair_count`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Symbol(pub u8);

impl Symbol {
    pub fn id(self) -> u8 {
        self.0
    }
}

/// Game actions that can be applied to modify game state
///
/// These are produced by the host after resolving its own input (cursor
/// position, menu choice) into a tile index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Flip the tile at the given board index
    Select(usize),
    /// Start a new game with the same configuration
    Restart,
}

/// Render-facing status of a single tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TileStatus {
    /// Face down.
    #[default]
    Hidden,
    /// Face up, waiting for its pair to be resolved.
    FaceUp,
    /// Permanently face up.
    Matched,
    /// Matched by the pair-attempt that is still settling.
    JustMatched,
}

impl TileStatus {
    /// Whether the symbol is visible.
    pub fn is_revealed(self) -> bool {
        !matches!(self, TileStatus::Hidden)
    }
}

/// Phase of the tile-selection state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Phase {
    /// No tile face up.
    #[default]
    Idle,
    /// One tile face up, waiting for the second pick.
    OneFlipped,
    /// Two tiles face up; input is locked until the settle delay elapses.
    Resolving,
    /// Every tile is matched.
    GameOver,
}

/// Result of a single `select_tile` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectOutcome {
    /// The selection was not allowed; state is unchanged.
    Ignored,
    /// First tile of a pair turned face up.
    Revealed,
    /// Second tile matched the first.
    Matched { game_over: bool },
    /// Second tile did not match; resolves after the settle delay.
    Mismatched,
}

impl SelectOutcome {
    pub fn changed_state(&self) -> bool {
        !matches!(self, SelectOutcome::Ignored)
    }
}
