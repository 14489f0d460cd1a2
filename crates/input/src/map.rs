//! Key mapping from terminal events to game actions.

use crate::types::GameAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to game actions.
pub fn handle_key_event(key: KeyEvent) -> Option<GameAction> {
    match key.code {
        // Towers
        KeyCode::Char('1') | KeyCode::Char('a') | KeyCode::Char('A') => {
            Some(GameAction::SelectTower(0))
        }
        KeyCode::Char('2') | KeyCode::Char('s') | KeyCode::Char('S') => {
            Some(GameAction::SelectTower(1))
        }
        KeyCode::Char('3') | KeyCode::Char('d') | KeyCode::Char('D') => {
            Some(GameAction::SelectTower(2))
        }

        // History
        KeyCode::Char('u') | KeyCode::Char('U') | KeyCode::Backspace => Some(GameAction::Undo),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(GameAction::Reset),

        // Level
        KeyCode::Char('+') | KeyCode::Char('=') => Some(GameAction::IncreaseDisks),
        KeyCode::Char('-') | KeyCode::Char('_') => Some(GameAction::DecreaseDisks),

        // Victory overlay
        KeyCode::Char('n') | KeyCode::Char('N') => Some(GameAction::NextLevel),
        KeyCode::Enter => Some(GameAction::ReplayLevel),

        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

/// Check if key should show or hide the leaderboard.
pub fn should_toggle_leaderboard(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('l') | KeyCode::Char('L'))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    fn key(code: KeyCode) -> Option<GameAction> {
        handle_key_event(KeyEvent::from(code))
    }

    #[test]
    fn test_tower_keys() {
        assert_eq!(key(KeyCode::Char('1')), Some(GameAction::SelectTower(0)));
        assert_eq!(key(KeyCode::Char('2')), Some(GameAction::SelectTower(1)));
        assert_eq!(key(KeyCode::Char('3')), Some(GameAction::SelectTower(2)));

        assert_eq!(key(KeyCode::Char('A')), Some(GameAction::SelectTower(0)));
        assert_eq!(key(KeyCode::Char('s')), Some(GameAction::SelectTower(1)));
        assert_eq!(key(KeyCode::Char('D')), Some(GameAction::SelectTower(2)));
        assert_eq!(key(KeyCode::Char('4')), None);
    }

    #[test]
    fn test_history_keys() {
        assert_eq!(key(KeyCode::Char('u')), Some(GameAction::Undo));
        assert_eq!(key(KeyCode::Backspace), Some(GameAction::Undo));
        assert_eq!(key(KeyCode::Char('R')), Some(GameAction::Reset));
    }

    #[test]
    fn test_level_keys() {
        assert_eq!(key(KeyCode::Char('+')), Some(GameAction::IncreaseDisks));
        assert_eq!(key(KeyCode::Char('=')), Some(GameAction::IncreaseDisks));
        assert_eq!(key(KeyCode::Char('-')), Some(GameAction::DecreaseDisks));
        assert_eq!(key(KeyCode::Char('n')), Some(GameAction::NextLevel));
        assert_eq!(key(KeyCode::Enter), Some(GameAction::ReplayLevel));
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('x'))));
    }

    #[test]
    fn test_leaderboard_toggle() {
        assert!(should_toggle_leaderboard(KeyEvent::from(KeyCode::Char('l'))));
        assert!(!should_toggle_leaderboard(KeyEvent::from(KeyCode::Char('k'))));
    }
}
