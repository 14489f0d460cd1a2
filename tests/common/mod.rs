//! Shared helpers for the integration tests.
#![allow(dead_code)]

use tui_hanoi::engine::{Clock, ManualClock, Notification, Session};
use tui_hanoi::leaderboard::KeyValueStore;

/// Optimal move list `(from, to)` for `n` disks, tower 0 to tower 2.
pub fn solution(n: u8) -> Vec<(u8, u8)> {
    fn go(n: u8, from: u8, to: u8, via: u8, out: &mut Vec<(u8, u8)>) {
        if n == 0 {
            return;
        }
        go(n - 1, from, via, to, out);
        out.push((from, to));
        go(n - 1, via, to, from, out);
    }
    let mut out = Vec::new();
    go(n, 0, 2, 1, &mut out);
    out
}

/// Play every optimal move. Before each one the clock advances `step_ms` and
/// the host tick runs, so a win records `(moves - 1) * step_ms`.
pub fn solve<S: KeyValueStore, C: Clock>(
    session: &mut Session<S, C>,
    clock: &ManualClock,
    step_ms: u64,
) {
    for (from, to) in solution(session.game().num_disks()) {
        clock.advance(step_ms);
        session.timer_tick();
        assert!(session.select_tower(from));
        assert!(session.select_tower(to));
    }
}

pub fn drain<S: KeyValueStore, C: Clock>(session: &mut Session<S, C>) -> Vec<Notification> {
    session.drain_notifications().collect()
}
