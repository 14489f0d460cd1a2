//! Time sources for a session
//!
//! The core only ever sees millisecond timestamps. A session reads them from a
//! [`Clock`], which is the system clock in play and a hand-driven clock in tests.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Instant;

use chrono::{DateTime, Duration, TimeZone, Utc};

pub trait Clock {
    /// Milliseconds on a monotonic scale (origin is arbitrary)
    fn now_ms(&self) -> u64;

    /// Calendar time, used to date leaderboard entries
    fn wall_time(&self) -> DateTime<Utc>;
}

/// Monotonic clock anchored at construction
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now_ms(&self) -> u64 {
        self.origin.elapsed().as_millis() as u64
    }

    fn wall_time(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Clock that only moves when told to.
///
/// Clones share the same time, so a test can keep a handle after moving one
/// into a session.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now_ms: Arc<AtomicU64>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&self, now_ms: u64) {
        self.now_ms.store(now_ms, Ordering::SeqCst);
    }

    pub fn advance(&self, ms: u64) {
        self.now_ms.fetch_add(ms, Ordering::SeqCst);
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> u64 {
        self.now_ms.load(Ordering::SeqCst)
    }

    /// 2024-01-01T00:00:00Z plus the manual time
    fn wall_time(&self) -> DateTime<Utc> {
        let epoch = Utc
            .with_ymd_and_hms(2024, 1, 1, 0, 0, 0)
            .single()
            .unwrap_or_default();
        epoch + Duration::milliseconds(self.now_ms() as i64)
    }
}
