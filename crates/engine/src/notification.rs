use crate::core::types::TowerIndex;
use crate::leaderboard::LeaderboardEntry;

/// Outbound events for the renderer/UI, in the order they happened
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notification {
    /// A new game was laid out; rebuild the scene from a fresh snapshot
    BoardReset { num_disks: u8 },
    DiskHighlighted { disk: u8, on: bool },
    /// `slot` counts from the bottom of the tower
    DiskMoved {
        disk: u8,
        to_tower: TowerIndex,
        slot: usize,
    },
    MovesLabelChanged { current: u32, target: u32 },
    TimerLabelChanged(String),
    GameWon {
        time_ms: u64,
        moves: u32,
        num_disks: u8,
        is_max_level: bool,
    },
    /// A qualifying high score awaits a player name
    ScoreSubmissionRequested { time_ms: u64, moves: u32 },
    /// The hardest level was completed without making the leaderboard
    MaxLevelCompleted { time_ms: u64, moves: u32 },
    LeaderboardChanged(Vec<LeaderboardEntry>),
    UndoAvailabilityChanged(bool),
}
