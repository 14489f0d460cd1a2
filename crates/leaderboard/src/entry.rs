use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::DEFAULT_PLAYER_NAME;

/// One recorded completion of the hardest level.
///
/// Serialized field names match the persisted layout: `{name, time, moves, date}`,
/// with `time` in milliseconds and `date` as an RFC 3339 timestamp.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub name: String,
    #[serde(rename = "time")]
    pub time_ms: u64,
    pub moves: u32,
    pub date: DateTime<Utc>,
}

impl LeaderboardEntry {
    /// Create an entry; a blank `name` becomes the default player name.
    pub fn new(name: &str, time_ms: u64, moves: u32, date: DateTime<Utc>) -> Self {
        Self {
            name: normalize_name(name),
            time_ms,
            moves,
            date,
        }
    }
}

/// Trim a player name, substituting the default when nothing is left.
pub fn normalize_name(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        DEFAULT_PLAYER_NAME.to_string()
    } else {
        trimmed.to_string()
    }
}
