//! Game timer
//!
//! Wall-clock elapsed time, driven by timestamps the caller passes in.
//! The timer never reads a clock itself, which keeps the core deterministic.

/// Running state of the timer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimerState {
    #[default]
    Stopped,
    Running {
        started_at_ms: u64,
    },
}

/// Elapsed-time tracker for one game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Timer {
    state: TimerState,
    elapsed_ms: u64,
}

impl Timer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> TimerState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        matches!(self.state, TimerState::Running { .. })
    }

    /// Last sampled elapsed time
    pub fn elapsed_ms(&self) -> u64 {
        self.elapsed_ms
    }

    /// Start a fresh interval at `now_ms`. No-op while running.
    pub fn start(&mut self, now_ms: u64) {
        if self.is_running() {
            return;
        }
        self.state = TimerState::Running {
            started_at_ms: now_ms,
        };
        self.elapsed_ms = 0;
    }

    /// Sample elapsed time while running.
    ///
    /// Returns the new elapsed value, or `None` when stopped (the cached value is
    /// left untouched).
    pub fn sample(&mut self, now_ms: u64) -> Option<u64> {
        let TimerState::Running { started_at_ms } = self.state else {
            return None;
        };
        self.elapsed_ms = now_ms.saturating_sub(started_at_ms);
        Some(self.elapsed_ms)
    }

    /// Stop, keeping the last sampled elapsed time. Returns the frozen value.
    pub fn stop(&mut self) -> u64 {
        self.state = TimerState::Stopped;
        self.elapsed_ms
    }

    /// Stop and zero
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
