//! Key mapping - terminal keys to player intents.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tilematch_types::Direction;

/// What the player asked for, decoupled from the key that asked it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerIntent {
    /// Move the cursor, or drag the selected piece, one cell.
    Move(Direction),
    /// Select the cell under the cursor.
    Select,
    /// Drop the current selection.
    Cancel,
    Quit,
}

/// Map a key event to an intent. Unbound keys yield `None`.
pub fn map_key(key: KeyEvent) -> Option<PlayerIntent> {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Some(PlayerIntent::Quit);
    }

    match key.code {
        KeyCode::Up | KeyCode::Char('k') => Some(PlayerIntent::Move(Direction::North)),
        KeyCode::Down | KeyCode::Char('j') => Some(PlayerIntent::Move(Direction::South)),
        KeyCode::Left | KeyCode::Char('h') => Some(PlayerIntent::Move(Direction::West)),
        KeyCode::Right | KeyCode::Char('l') => Some(PlayerIntent::Move(Direction::East)),
        KeyCode::Char(' ') | KeyCode::Enter => Some(PlayerIntent::Select),
        KeyCode::Esc => Some(PlayerIntent::Cancel),
        KeyCode::Char('q') => Some(PlayerIntent::Quit),
        _ => None,
    }
}
