//! Ranking rules for the leaderboard
//!
//! Entries are kept fastest first, at most [`LEADERBOARD_CAPACITY`] of them.
//! Equal times keep insertion order, so an earlier record outranks a later tie.

use crate::entry::LeaderboardEntry;
use crate::types::{LEADERBOARD_CAPACITY, MAX_DISKS};

/// Only completions of the hardest level are eligible for the leaderboard.
pub fn is_qualifying_completion(num_disks: u8) -> bool {
    num_disks == MAX_DISKS
}

/// Whether `candidate_time_ms` would place within the top entries.
///
/// True while the board has room, or when some entry is strictly slower.
pub fn is_high_score(entries: &[LeaderboardEntry], candidate_time_ms: u64) -> bool {
    entries.len() < LEADERBOARD_CAPACITY || entries.iter().any(|e| e.time_ms > candidate_time_ms)
}

/// Insert `entry`, re-rank by time and drop whatever falls past capacity.
pub fn submit(mut entries: Vec<LeaderboardEntry>, entry: LeaderboardEntry) -> Vec<LeaderboardEntry> {
    entries.push(entry);
    normalize(&mut entries);
    entries
}

/// Stable sort by time, then truncate to capacity.
pub fn normalize(entries: &mut Vec<LeaderboardEntry>) {
    entries.sort_by_key(|e| e.time_ms);
    entries.truncate(LEADERBOARD_CAPACITY);
}

/// 1-based rank a new entry with `time_ms` would take, `None` if it would not fit.
pub fn rank_for(entries: &[LeaderboardEntry], time_ms: u64) -> Option<usize> {
    let ahead = entries.iter().filter(|e| e.time_ms <= time_ms).count();
    if ahead < LEADERBOARD_CAPACITY {
        Some(ahead + 1)
    } else {
        None
    }
}
