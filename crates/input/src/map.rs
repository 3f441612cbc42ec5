//! Key mapping from terminal events to host commands.

use crate::cursor::Direction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Commands understood by both the setup and the game screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Move the cursor (game) or change field/value (setup).
    Move(Direction),
    /// Flip the tile under the cursor (game) or start the game (setup).
    Confirm,
    /// New game with the same configuration.
    Restart,
    /// Back to the setup screen.
    NewGame,
    /// Open or close the in-game menu.
    ToggleMenu,
}

/// Map keyboard input to commands.
pub fn handle_key_event(key: KeyEvent) -> Option<Command> {
    match key.code {
        // Movement
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('H') | KeyCode::Char('a') | KeyCode::Char('A') => {
            Some(Command::Move(Direction::Left))
        }
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('L') | KeyCode::Char('d') | KeyCode::Char('D') => {
            Some(Command::Move(Direction::Right))
        }
        KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('K') | KeyCode::Char('w') | KeyCode::Char('W') => {
            Some(Command::Move(Direction::Up))
        }
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('J') | KeyCode::Char('s') | KeyCode::Char('S') => {
            Some(Command::Move(Direction::Down))
        }

        // Flip / start
        KeyCode::Enter | KeyCode::Char(' ') => Some(Command::Confirm),

        // Game flow
        KeyCode::Char('r') | KeyCode::Char('R') => Some(Command::Restart),
        KeyCode::Char('n') | KeyCode::Char('N') => Some(Command::NewGame),
        KeyCode::Esc | KeyCode::Char('m') | KeyCode::Char('M') => Some(Command::ToggleMenu),

        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
