use crate::entry::LeaderboardEntry;
use crate::ranking::{is_high_score, normalize, rank_for};

/// Ranked entries, fastest first, never more than the capacity
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Leaderboard {
    entries: Vec<LeaderboardEntry>,
}

impl Leaderboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from entries in any order; they are re-ranked and truncated.
    pub fn from_entries(mut entries: Vec<LeaderboardEntry>) -> Self {
        normalize(&mut entries);
        Self { entries }
    }

    pub fn entries(&self) -> &[LeaderboardEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn is_high_score(&self, time_ms: u64) -> bool {
        is_high_score(&self.entries, time_ms)
    }

    /// Insert an entry, returning its 1-based rank (`None` if it fell off the end).
    pub fn submit(&mut self, entry: LeaderboardEntry) -> Option<usize> {
        let rank = rank_for(&self.entries, entry.time_ms);
        self.entries.push(entry);
        normalize(&mut self.entries);
        rank
    }

    pub fn into_entries(self) -> Vec<LeaderboardEntry> {
        self.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn entry(time_ms: u64) -> LeaderboardEntry {
        let date = Utc.with_ymd_and_hms(2024, 2, 2, 2, 2, 2).unwrap();
        LeaderboardEntry::new("p", time_ms, 127, date)
    }

    #[test]
    fn test_submit_returns_rank() {
        let mut board = Leaderboard::new();
        assert_eq!(board.submit(entry(500)), Some(1));
        assert_eq!(board.submit(entry(200)), Some(1));
        assert_eq!(board.submit(entry(800)), Some(3));
        assert_eq!(board.submit(entry(500)), Some(3));

        let times: Vec<u64> = board.entries().iter().map(|e| e.time_ms).collect();
        assert_eq!(times, vec![200, 500, 500, 800]);
    }

    #[test]
    fn test_submit_past_capacity() {
        let mut board = Leaderboard::from_entries((1..=10).map(entry).collect());
        assert!(!board.is_high_score(11));
        assert_eq!(board.submit(entry(11)), None);
        assert_eq!(board.len(), 10);
        assert!(board.is_high_score(9));
    }
}
