//! Startup configuration read from the environment.

use std::env;
use std::path::PathBuf;

use crate::types::{DEFAULT_DISKS, MAX_DISKS, MIN_DISKS};

/// Directory name used under `$HOME` (or the working directory)
const DATA_DIR_NAME: &str = ".tui-hanoi";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Disk count of the first game, always within `MIN_DISKS..=MAX_DISKS`
    pub num_disks: u8,
    /// Directory backing the leaderboard store
    pub data_dir: PathBuf,
    /// Log file; `None` disables logging
    pub log_path: Option<PathBuf>,
}

impl AppConfig {
    /// Read `HANOI_DISKS`, `HANOI_DATA_DIR` and `HANOI_LOG_PATH`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from an arbitrary variable source. Unparseable values fall back
    /// to their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let num_disks = lookup("HANOI_DISKS")
            .and_then(|s| s.trim().parse::<i64>().ok())
            .map(|n| n.clamp(MIN_DISKS as i64, MAX_DISKS as i64) as u8)
            .unwrap_or(DEFAULT_DISKS);

        let data_dir = non_empty(lookup("HANOI_DATA_DIR"))
            .map(PathBuf::from)
            .unwrap_or_else(|| match non_empty(lookup("HOME")) {
                Some(home) => PathBuf::from(home).join(DATA_DIR_NAME),
                None => PathBuf::from(".").join(DATA_DIR_NAME),
            });

        let log_path = non_empty(lookup("HANOI_LOG_PATH")).map(PathBuf::from);

        Self {
            num_disks,
            data_dir,
            log_path,
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}
