use arrayvec::ArrayVec;

use crate::tower::TOWER_CAPACITY;
use crate::types::TOWER_COUNT;

/// Renderer-facing copy of the game state.
///
/// Holds no references into the game, so a renderer can keep it across frames
/// and refill it in place with [`GameState::snapshot_into`](crate::GameState::snapshot_into).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GameSnapshot {
    /// Disk sizes per tower, bottom to top
    pub towers: [ArrayVec<u8, TOWER_CAPACITY>; TOWER_COUNT],
    /// Size of the picked-up disk
    pub selected: Option<u8>,
    pub num_disks: u8,
    pub num_moves: u32,
    pub target_moves: u32,
    pub won: bool,
    pub can_undo: bool,
    pub elapsed_ms: u64,
    pub timer_running: bool,
    pub game_id: u32,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
