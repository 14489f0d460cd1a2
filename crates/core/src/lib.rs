//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the rules of the Towers of Hanoi and the state machine
//! that applies them. It has **zero dependencies** on terminals, clocks or
//! storage, making it:
//!
//! - **Deterministic**: time is passed in as milliseconds, never read
//! - **Testable**: every rule and transition is covered by unit tests
//! - **Portable**: can sit behind any renderer (terminal, GUI, headless)
//!
//! # Module Structure
//!
//! - [`rules`]: the move validator (a disk only goes onto a larger disk or an empty tower)
//! - [`tower`]: disks and fixed-capacity tower stacks
//! - [`timer`]: elapsed-time tracking gated by first move and win
//! - [`game_state`]: selection, moves, undo history and win detection
//! - [`snapshot`]: renderer-facing copy of the state
//!
//! # Game Rules
//!
//! - All disks start on tower 0, largest at the bottom
//! - Select a tower to pick up its top disk, select another to drop it there
//! - A disk may never rest on a smaller disk; an illegal drop just puts the disk down
//! - The game is won when tower 2 holds every disk
//! - Undo reverses moves one at a time until the game is won
//!
//! # Example
//!
//! ```
//! use tui_hanoi_core::GameState;
//! use tui_hanoi_core::types::TowerIndex;
//!
//! let mut game = GameState::new(1);
//! let (start, last) = (TowerIndex::START, TowerIndex::FINAL);
//!
//! game.select_tower(start, 0);
//! game.select_tower(last, 1_500);
//!
//! assert!(game.is_won());
//! assert_eq!(game.num_moves(), 1);
//! assert_eq!(game.elapsed_ms(), 0); // timer starts and stops on the same move
//! ```

pub mod error;
pub mod game_state;
pub mod rules;
pub mod snapshot;
pub mod timer;
pub mod tower;

pub use tui_hanoi_types as types;

// Re-export commonly used types for convenience
pub use error::CoreError;
pub use game_state::{GameState, Move, Phase, SelectOutcome, Undone};
pub use rules::{can_move, is_ordered_stack};
pub use snapshot::GameSnapshot;
pub use timer::{Timer, TimerState};
pub use tower::{Disk, Tower};
