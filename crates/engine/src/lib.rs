//! Engine module - the session controller a host drives
//!
//! Wires the pure game state to a clock and the leaderboard store, and turns
//! every inbound event into outbound [`Notification`]s.
//!
//! # Inbound events
//!
//! | Event | Method |
//! |-------|--------|
//! | select tower N | [`Session::select_tower`] |
//! | undo | [`Session::undo`] |
//! | reset | [`Session::reset_game`] |
//! | change disk count | [`Session::set_disk_count`] |
//! | acknowledge victory | [`Session::acknowledge_victory`] |
//! | submit score | [`Session::submit_score`] |
//! | timer tick | [`Session::timer_tick`] |
//!
//! # Example
//!
//! ```
//! use tui_hanoi_engine::{ManualClock, Notification, Session};
//! use tui_hanoi_engine::leaderboard::MemoryStore;
//!
//! let clock = ManualClock::new();
//! let mut session = Session::new(1, MemoryStore::new(), clock.clone());
//! session.drain_notifications().for_each(drop);
//!
//! session.select_tower(0);
//! clock.advance(2_000);
//! session.select_tower(2);
//!
//! assert!(session.game().is_won());
//! assert!(session
//!     .drain_notifications()
//!     .any(|n| matches!(n, Notification::GameWon { moves: 1, .. })));
//! ```

pub mod clock;
pub mod notification;
pub mod session;

pub use tui_hanoi_core as core;
pub use tui_hanoi_leaderboard as leaderboard;
pub use tui_hanoi_types as types;

pub use clock::{Clock, ManualClock, SystemClock};
pub use notification::Notification;
pub use session::{Completion, Overlay, Session, Submission};
