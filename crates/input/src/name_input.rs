//! Player-name line editor for the leaderboard prompt.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Longest name the prompt accepts, in characters
pub const MAX_NAME_LEN: usize = 20;

/// What a key did to the prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NameInputEvent {
    Edited,
    /// Enter: the typed text, possibly empty
    Submit(String),
    /// Esc: the prompt was declined
    Cancel,
    Ignored,
}

#[derive(Debug, Clone, Default)]
pub struct NameInput {
    text: String,
}

impl NameInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn clear(&mut self) {
        self.text.clear();
    }

    /// Feed one key press. Submitting or cancelling empties the buffer.
    pub fn handle_key(&mut self, key: KeyEvent) -> NameInputEvent {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return NameInputEvent::Ignored;
        }
        match key.code {
            KeyCode::Enter => NameInputEvent::Submit(std::mem::take(&mut self.text)),
            KeyCode::Esc => {
                self.text.clear();
                NameInputEvent::Cancel
            }
            KeyCode::Backspace => {
                if self.text.pop().is_some() {
                    NameInputEvent::Edited
                } else {
                    NameInputEvent::Ignored
                }
            }
            KeyCode::Char(c) if !c.is_control() && self.text.chars().count() < MAX_NAME_LEN => {
                self.text.push(c);
                NameInputEvent::Edited
            }
            _ => NameInputEvent::Ignored,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(input: &mut NameInput, code: KeyCode) -> NameInputEvent {
        input.handle_key(KeyEvent::from(code))
    }

    fn type_str(input: &mut NameInput, s: &str) {
        for c in s.chars() {
            press(input, KeyCode::Char(c));
        }
    }

    #[test]
    fn test_typing_and_submit() {
        let mut input = NameInput::new();
        type_str(&mut input, "Ada L");
        assert_eq!(input.text(), "Ada L");
        assert_eq!(
            press(&mut input, KeyCode::Enter),
            NameInputEvent::Submit("Ada L".to_string())
        );
        assert_eq!(input.text(), "");
    }

    #[test]
    fn test_backspace() {
        let mut input = NameInput::new();
        assert_eq!(press(&mut input, KeyCode::Backspace), NameInputEvent::Ignored);
        type_str(&mut input, "ab");
        assert_eq!(press(&mut input, KeyCode::Backspace), NameInputEvent::Edited);
        assert_eq!(input.text(), "a");
    }

    #[test]
    fn test_cancel_clears() {
        let mut input = NameInput::new();
        type_str(&mut input, "xyz");
        assert_eq!(press(&mut input, KeyCode::Esc), NameInputEvent::Cancel);
        assert_eq!(input.text(), "");
    }

    #[test]
    fn test_length_limit() {
        let mut input = NameInput::new();
        type_str(&mut input, &"x".repeat(MAX_NAME_LEN + 5));
        assert_eq!(input.text().chars().count(), MAX_NAME_LEN);
        assert_eq!(press(&mut input, KeyCode::Char('y')), NameInputEvent::Ignored);
    }

    #[test]
    fn test_control_chords_ignored() {
        let mut input = NameInput::new();
        let ev = input.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert_eq!(ev, NameInputEvent::Ignored);
        assert_eq!(input.text(), "");
    }
}
