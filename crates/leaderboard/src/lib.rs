//! Leaderboard module - ranked, capacity-bounded record of best completions
//!
//! Only completions of the hardest level are eligible. Entries are ranked by
//! time, fastest first, ten at most, and persisted as one JSON blob in a local
//! key-value store.
//!
//! - [`entry`]: the persisted record and player-name normalisation
//! - [`ranking`]: qualification, high-score and insertion rules
//! - [`leaderboard`]: an in-memory ranked board
//! - [`store`]: key-value backends and tolerant loading
//!
//! # Example
//!
//! ```
//! use chrono::Utc;
//! use tui_hanoi_leaderboard::{LeaderboardEntry, LeaderboardStore, MemoryStore};
//!
//! let mut store = LeaderboardStore::new(MemoryStore::new());
//! assert!(store.load().is_high_score(120_000));
//!
//! let (board, rank) = store
//!     .submit(LeaderboardEntry::new("", 120_000, 127, Utc::now()))
//!     .unwrap();
//! assert_eq!(rank, Some(1));
//! assert_eq!(board.entries()[0].name, "Anonymous");
//! ```

pub mod entry;
pub mod leaderboard;
pub mod ranking;
pub mod store;

pub use tui_hanoi_types as types;

pub use entry::{normalize_name, LeaderboardEntry};
pub use leaderboard::Leaderboard;
pub use ranking::{is_high_score, is_qualifying_completion, submit};
pub use store::{FileStore, KeyValueStore, LeaderboardStore, MemoryStore, StoreError};
