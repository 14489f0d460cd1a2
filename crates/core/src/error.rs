use thiserror::Error;

use crate::types::TowerIndex;

/// Internal consistency failures of the game state.
///
/// These signal a defect (history and towers disagree), never a user mistake.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("undo of disk {disk_size} found tower {tower} empty")]
    HistoryDiverged { tower: TowerIndex, disk_size: u8 },

    #[error("undo expected disk {expected} on top of tower {tower}, found disk {found}")]
    HistoryMismatch {
        tower: TowerIndex,
        expected: u8,
        found: u8,
    },
}
