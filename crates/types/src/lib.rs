//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, session control, terminal rendering).
//!
//! # Puzzle Dimensions
//!
//! - **Towers**: 3, indexed 0-2. Every game starts on tower 0 and is won on tower 2.
//! - **Disks**: 1 to 7 per game, sized 1 (smallest) to N (largest).
//! - **Optimal solution**: `2^N - 1` moves.
//!
//! # Timing Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TIMER_TICK_MS` | 100 | Interval at which the host samples the game timer |
//!
//! # Leaderboard Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `LEADERBOARD_CAPACITY` | 10 | Entries kept, fastest first |
//! | `LEADERBOARD_KEY` | `hanoiLeaderboard` | Key of the persisted blob |
//! | `DEFAULT_PLAYER_NAME` | `Anonymous` | Name used when none is given |
//!
//! # Examples
//!
//! ```
//! use tui_hanoi_types::{format_time, target_moves, GameAction, TowerIndex, MAX_DISKS};
//!
//! assert_eq!(target_moves(3), 7);
//! assert_eq!(target_moves(MAX_DISKS), 127);
//!
//! let tower = TowerIndex::new(2).unwrap();
//! assert!(tower.is_final());
//! assert!(TowerIndex::new(3).is_none());
//!
//! assert_eq!(GameAction::from_str("undo"), Some(GameAction::Undo));
//! assert_eq!(format_time(65_400), "01:05");
//! ```

/// Number of towers on the board
pub const TOWER_COUNT: usize = 3;

/// Tower every game starts on
pub const START_TOWER: u8 = 0;

/// Tower that wins the game once it holds every disk
pub const FINAL_TOWER: u8 = 2;

/// Smallest configurable disk count
pub const MIN_DISKS: u8 = 1;

/// Largest configurable disk count (the hardest level)
pub const MAX_DISKS: u8 = 7;

/// Disk count of a fresh session
pub const DEFAULT_DISKS: u8 = 3;

/// Interval at which the host samples the running timer (100ms)
pub const TIMER_TICK_MS: u32 = 100;

/// Maximum number of leaderboard entries kept
pub const LEADERBOARD_CAPACITY: usize = 10;

/// Key of the leaderboard blob in the key-value store
pub const LEADERBOARD_KEY: &str = "hanoiLeaderboard";

/// Player name recorded when the submitted name is blank
pub const DEFAULT_PLAYER_NAME: &str = "Anonymous";

/// Minimum number of moves that solves a puzzle of `num_disks` disks (`2^n - 1`).
pub fn target_moves(num_disks: u8) -> u32 {
    (1u32 << num_disks) - 1
}

/// Clamp a requested disk count into `MIN_DISKS..=MAX_DISKS`.
pub fn clamp_disks(num_disks: u8) -> u8 {
    num_disks.clamp(MIN_DISKS, MAX_DISKS)
}

/// Whether `num_disks` is inside the configurable range.
pub fn is_valid_disk_count(num_disks: u8) -> bool {
    (MIN_DISKS..=MAX_DISKS).contains(&num_disks)
}

/// Format elapsed milliseconds as `MM:SS`.
///
/// Whole seconds only; minutes are zero-padded to two digits but never wrap.
///
/// ```
/// use tui_hanoi_types::format_time;
///
/// assert_eq!(format_time(0), "00:00");
/// assert_eq!(format_time(999), "00:00");
/// assert_eq!(format_time(61_000), "01:01");
/// assert_eq!(format_time(6_000_000), "100:00");
/// ```
pub fn format_time(elapsed_ms: u64) -> String {
    let total_seconds = elapsed_ms / 1000;
    let minutes = total_seconds / 60;
    let seconds = total_seconds % 60;
    format!("{:02}:{:02}", minutes, seconds)
}

/// Index of one of the three towers.
///
/// Constructing through [`TowerIndex::new`] is the only way to obtain one, so an
/// out-of-range index can never reach the game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TowerIndex(u8);

impl TowerIndex {
    /// The starting tower (0)
    pub const START: TowerIndex = TowerIndex(START_TOWER);
    /// The winning tower (2)
    pub const FINAL: TowerIndex = TowerIndex(FINAL_TOWER);

    /// Validate a raw index, `None` when it is not 0, 1 or 2.
    pub fn new(index: u8) -> Option<Self> {
        if (index as usize) < TOWER_COUNT {
            Some(Self(index))
        } else {
            None
        }
    }

    /// All towers, left to right
    pub fn all() -> [TowerIndex; TOWER_COUNT] {
        [TowerIndex(0), TowerIndex(1), TowerIndex(2)]
    }

    pub fn get(self) -> u8 {
        self.0
    }

    pub fn as_usize(self) -> usize {
        self.0 as usize
    }

    pub fn is_final(self) -> bool {
        self.0 == FINAL_TOWER
    }
}

impl std::fmt::Display for TowerIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Actions the input layer hands to the session controller
///
/// These cover every inbound event except score submission, which carries a
/// player name and goes through its own call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Pick up the top disk of a tower, or drop the held disk onto it
    SelectTower(u8),
    /// Reverse the most recent move
    Undo,
    /// Start over with the current disk count
    Reset,
    /// Start over with one more disk (up to the maximum)
    IncreaseDisks,
    /// Start over with one fewer disk (down to the minimum)
    DecreaseDisks,
    /// Start over with an explicit disk count
    SetDiskCount(u8),
    /// Acknowledge a win and move to the next level
    NextLevel,
    /// Acknowledge a win and replay the same level
    ReplayLevel,
    /// Decline a pending leaderboard submission
    CancelSubmission,
}

impl GameAction {
    /// Parse a fieldless action from its name (case-insensitive)
    ///
    /// Actions carrying a value (`SelectTower`, `SetDiskCount`) are not parsed here.
    ///
    /// ```
    /// use tui_hanoi_types::GameAction;
    ///
    /// assert_eq!(GameAction::from_str("nextLevel"), Some(GameAction::NextLevel));
    /// assert_eq!(GameAction::from_str("RESET"), Some(GameAction::Reset));
    /// assert_eq!(GameAction::from_str("selectTower"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "undo" => Some(GameAction::Undo),
            "reset" => Some(GameAction::Reset),
            "increasedisks" => Some(GameAction::IncreaseDisks),
            "decreasedisks" => Some(GameAction::DecreaseDisks),
            "nextlevel" => Some(GameAction::NextLevel),
            "replaylevel" => Some(GameAction::ReplayLevel),
            "cancelsubmission" => Some(GameAction::CancelSubmission),
            _ => None,
        }
    }

    /// Convert to camelCase name
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::SelectTower(_) => "selectTower",
            GameAction::Undo => "undo",
            GameAction::Reset => "reset",
            GameAction::IncreaseDisks => "increaseDisks",
            GameAction::DecreaseDisks => "decreaseDisks",
            GameAction::SetDiskCount(_) => "setDiskCount",
            GameAction::NextLevel => "nextLevel",
            GameAction::ReplayLevel => "replayLevel",
            GameAction::CancelSubmission => "cancelSubmission",
        }
    }
}
