//! Key mapping from terminal events to puzzle inputs.

use crate::types::InputSymbol;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Session-level commands that sit outside the simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetaAction {
    /// Start the current seed over.
    Restart,
    /// Start a level with a fresh random seed.
    NewGame,
}

/// Map keyboard input to a simulation input symbol.
pub fn handle_key_event(key: KeyEvent) -> Option<InputSymbol> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return None;
    }

    match key.code {
        KeyCode::Up
        | KeyCode::Char('w')
        | KeyCode::Char('W')
        | KeyCode::Char('k')
        | KeyCode::Char('K') => Some(InputSymbol::TurnOrMoveNorth),
        KeyCode::Right
        | KeyCode::Char('d')
        | KeyCode::Char('D')
        | KeyCode::Char('l')
        | KeyCode::Char('L') => Some(InputSymbol::TurnOrMoveEast),
        KeyCode::Down
        | KeyCode::Char('s')
        | KeyCode::Char('S')
        | KeyCode::Char('j')
        | KeyCode::Char('J') => Some(InputSymbol::TurnOrMoveSouth),
        KeyCode::Left
        | KeyCode::Char('a')
        | KeyCode::Char('A')
        | KeyCode::Char('h')
        | KeyCode::Char('H') => Some(InputSymbol::TurnOrMoveWest),

        KeyCode::Char(' ') | KeyCode::Char('x') | KeyCode::Char('X') => Some(InputSymbol::Demolish),

        _ => None,
    }
}

/// Map keyboard input to a session command.
pub fn meta_action(key: KeyEvent) -> Option<MetaAction> {
    match key.code {
        KeyCode::Char('r') | KeyCode::Char('R') => Some(MetaAction::Restart),
        KeyCode::Char('n') | KeyCode::Char('N') => Some(MetaAction::NewGame),
        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
