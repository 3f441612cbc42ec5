//! Host configuration read from environment variables.
//!
//! Every value only pre-fills the setup screen. Bad values are logged and
//! replaced by their default, so the game always starts.

use std::env;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use tracing::warn;

use crate::types::{GameConfig, GridSize, PlayerCount, ResetTurnPolicy, Theme};

pub const ENV_PLAYERS: &str = "MEMORY_PLAYERS";
pub const ENV_THEME: &str = "MEMORY_THEME";
pub const ENV_GRID: &str = "MEMORY_GRID";
pub const ENV_SEED: &str = "MEMORY_SEED";
pub const ENV_RESET_TURN: &str = "MEMORY_RESET_TURN";
pub const ENV_LOG_PATH: &str = "MEMORY_LOG_PATH";

pub const DEFAULT_LOG_PATH: &str = "tui-memory.log";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Initial setup-screen selection.
    pub game: GameConfig,
    /// Fixed RNG seed; `None` seeds from the wall clock.
    pub seed: Option<u32>,
    pub reset_policy: ResetTurnPolicy,
    /// Log file; `None` disables logging.
    pub log_path: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            game: GameConfig::default(),
            seed: None,
            reset_policy: ResetTurnPolicy::default(),
            log_path: Some(PathBuf::from(DEFAULT_LOG_PATH)),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key lookup. `from_env` passes the process environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let players = parse_var(&lookup, ENV_PLAYERS, |s| Ok(PlayerCount::new(s.parse()?)?))
            .unwrap_or(defaults.game.players);
        let theme = parse_var(&lookup, ENV_THEME, |s| Ok(s.parse::<Theme>()?))
            .unwrap_or(defaults.game.theme);
        let grid = parse_var(&lookup, ENV_GRID, |s| Ok(GridSize::try_from(s.parse::<u8>()?)?))
            .unwrap_or(defaults.game.grid);
        let seed = parse_var(&lookup, ENV_SEED, |s| Ok(s.parse::<u32>()?));
        let reset_policy = parse_var(&lookup, ENV_RESET_TURN, |s| Ok(s.parse::<ResetTurnPolicy>()?))
            .unwrap_or(defaults.reset_policy);

        let log_path = match lookup(ENV_LOG_PATH) {
            Some(raw) => {
                let raw = raw.trim();
                if raw.is_empty() {
                    None
                } else {
                    Some(PathBuf::from(raw))
                }
            }
            None => defaults.log_path,
        };

        Self {
            game: GameConfig::new(players, theme, grid),
            seed,
            reset_policy,
            log_path,
        }
    }

    /// The configured seed, or one derived from the current time.
    pub fn resolve_seed(&self) -> u32 {
        self.seed.unwrap_or_else(clock_seed)
    }
}

/// Look up and parse one variable. A value that fails to parse is logged and
/// treated as unset.
fn parse_var<T>(
    lookup: &impl Fn(&str) -> Option<String>,
    var: &str,
    parse: impl FnOnce(&str) -> anyhow::Result<T>,
) -> Option<T> {
    let raw = lookup(var)?;
    match parse(raw.trim()) {
        Ok(value) => Some(value),
        Err(e) => {
            warn!(var, value = %raw, error = %e, "invalid setting, using default");
            None
        }
    }
}

fn clock_seed() -> u32 {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos())
        .unwrap_or(0);
    (nanos ^ (nanos >> 32)) as u32
}
