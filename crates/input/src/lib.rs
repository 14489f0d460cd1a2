//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key events into [`crate::types::GameAction`]s and provides a small
//! line editor for typing a player name into the leaderboard prompt.

pub mod map;
pub mod name_input;

pub use tui_hanoi_types as types;

pub use map::{handle_key_event, should_quit, should_toggle_leaderboard};
pub use name_input::{NameInput, NameInputEvent, MAX_NAME_LEN};
