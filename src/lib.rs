//! TUI Hanoi (workspace facade crate).
//!
//! Re-exports the workspace crates under short names so hosts and tests can
//! write `tui_hanoi::{core,engine,leaderboard,input,term,types}`.

pub mod config;

pub use tui_hanoi_core as core;
pub use tui_hanoi_engine as engine;
pub use tui_hanoi_input as input;
pub use tui_hanoi_leaderboard as leaderboard;
pub use tui_hanoi_term as term;
pub use tui_hanoi_types as types;

pub use config::AppConfig;
