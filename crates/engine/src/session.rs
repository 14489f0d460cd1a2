//! Session controller - the only component a host talks to
//!
//! A [`Session`] owns one game, the leaderboard store and a clock. Inbound
//! events are plain method calls that run to completion; everything the
//! renderer needs to react to is queued as [`Notification`]s and taken with
//! [`Session::drain_notifications`]. Exclusive `&mut self` access is the
//! single-writer discipline: a host with several input sources must funnel
//! them through one owner.

use std::vec::Drain;

use tracing::{debug, error, info, warn};

use crate::clock::Clock;
use crate::core::types::{
    format_time, is_valid_disk_count, GameAction, TowerIndex, MAX_DISKS, MIN_DISKS,
};
use crate::core::{CoreError, GameSnapshot, GameState, SelectOutcome};
use crate::leaderboard::{
    is_qualifying_completion, KeyValueStore, Leaderboard, LeaderboardEntry, LeaderboardStore,
    StoreError,
};
use crate::notification::Notification;

/// A finished game, frozen at the moment of winning
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Completion {
    pub time_ms: u64,
    pub moves: u32,
    pub num_disks: u8,
}

impl Completion {
    pub fn is_max_level(&self) -> bool {
        self.num_disks == MAX_DISKS
    }
}

/// What the UI should show on top of the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overlay {
    None,
    /// Waiting for "next level" or "replay"
    Victory(Completion),
    /// Waiting for a player name for the leaderboard
    ScoreEntry(Completion),
}

/// Outcome of [`Session::submit_score`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Submission {
    /// No high score was waiting for a name
    NotPending,
    /// Recorded at this 1-based rank
    Ranked(usize),
    /// Processed, but faster times filled the board after the win
    Displaced,
}

impl Submission {
    pub fn rank(self) -> Option<usize> {
        match self {
            Submission::Ranked(rank) => Some(rank),
            Submission::NotPending | Submission::Displaced => None,
        }
    }
}

pub struct Session<S, C> {
    game: GameState,
    leaderboard: LeaderboardStore<S>,
    clock: C,
    victory: Option<Completion>,
    pending_score: Option<Completion>,
    timer_label: String,
    outbox: Vec<Notification>,
}

impl<S: KeyValueStore, C: Clock> Session<S, C> {
    /// Start a session with a new game of `num_disks` disks (clamped).
    pub fn new(num_disks: u8, store: S, clock: C) -> Self {
        let mut session = Self {
            game: GameState::new(num_disks),
            leaderboard: LeaderboardStore::new(store),
            clock,
            victory: None,
            pending_score: None,
            timer_label: String::new(),
            outbox: Vec::new(),
        };
        session.announce_new_game();
        session
    }

    pub fn game(&self) -> &GameState {
        &self.game
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn leaderboard_store(&self) -> &LeaderboardStore<S> {
        &self.leaderboard
    }

    /// Current leaderboard, read from the store
    pub fn leaderboard(&self) -> Leaderboard {
        self.leaderboard.load()
    }

    pub fn timer_label(&self) -> &str {
        &self.timer_label
    }

    pub fn overlay(&self) -> Overlay {
        match (self.pending_score, self.victory) {
            (Some(c), _) => Overlay::ScoreEntry(c),
            (None, Some(c)) => Overlay::Victory(c),
            (None, None) => Overlay::None,
        }
    }

    pub fn pending_score(&self) -> Option<Completion> {
        self.pending_score
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.game.snapshot_into(out);
    }

    pub fn snapshot(&self) -> GameSnapshot {
        self.game.snapshot()
    }

    /// Take every queued notification, oldest first
    pub fn drain_notifications(&mut self) -> Drain<'_, Notification> {
        self.outbox.drain(..)
    }

    /// Handle "tower `index` selected".
    ///
    /// Out-of-range indices are ignored. While the game is won, any selection
    /// starts the same level over. Returns whether anything changed.
    pub fn select_tower(&mut self, index: u8) -> bool {
        let Some(tower) = TowerIndex::new(index) else {
            debug!(index, "tower index out of range");
            return false;
        };

        if self.game.is_won() {
            self.reset_game();
            return true;
        }

        let now_ms = self.clock.now_ms();
        match self.game.select_tower(tower, now_ms) {
            SelectOutcome::Ignored => false,
            SelectOutcome::Selected { disk, .. } => {
                self.emit(Notification::DiskHighlighted {
                    disk: disk.size(),
                    on: true,
                });
                true
            }
            SelectOutcome::Rejected { disk, .. } => {
                self.emit(Notification::DiskHighlighted {
                    disk: disk.size(),
                    on: false,
                });
                true
            }
            SelectOutcome::Moved { record, slot, won } => {
                self.emit(Notification::DiskHighlighted {
                    disk: record.disk_size,
                    on: false,
                });
                self.emit(Notification::DiskMoved {
                    disk: record.disk_size,
                    to_tower: record.target,
                    slot,
                });
                self.emit_moves_label();
                self.emit_undo_availability();
                if won {
                    self.on_win();
                }
                true
            }
        }
    }

    /// Reverse the last move.
    ///
    /// `Ok(false)` when there is nothing to undo or the game is won. An error
    /// means history and towers disagree; the game is left as it was.
    pub fn undo(&mut self) -> Result<bool, CoreError> {
        let undone = match self.game.undo() {
            Ok(Some(undone)) => undone,
            Ok(None) => return Ok(false),
            Err(e) => {
                error!(error = %e, "undo aborted");
                return Err(e);
            }
        };

        if let Some(disk) = undone.deselected {
            self.emit(Notification::DiskHighlighted {
                disk: disk.size(),
                on: false,
            });
        }
        self.emit(Notification::DiskMoved {
            disk: undone.record.disk_size,
            to_tower: undone.record.source,
            slot: undone.slot,
        });
        self.emit_moves_label();
        self.emit_undo_availability();
        Ok(true)
    }

    /// Start the current level over
    pub fn reset_game(&mut self) {
        let num_disks = self.game.num_disks();
        self.new_game(num_disks);
    }

    /// Start over with `num_disks` disks. Values outside 1..=7 are ignored.
    pub fn set_disk_count(&mut self, num_disks: u8) -> bool {
        if !is_valid_disk_count(num_disks) {
            warn!(num_disks, "disk count out of range");
            return false;
        }
        self.new_game(num_disks);
        true
    }

    /// Dismiss the victory overlay, optionally moving up a level.
    ///
    /// Only honoured while a win is on screen.
    pub fn acknowledge_victory(&mut self, advance_level: bool) -> bool {
        let Some(completion) = self.victory else {
            debug!("no victory to acknowledge");
            return false;
        };
        let num_disks = if advance_level {
            (completion.num_disks + 1).min(MAX_DISKS)
        } else {
            completion.num_disks
        };
        self.new_game(num_disks);
        true
    }

    /// Record the pending high score under `name`.
    ///
    /// On a storage error the submission stays pending so it can be retried.
    pub fn submit_score(&mut self, name: &str) -> Result<Submission, StoreError> {
        let Some(completion) = self.pending_score.take() else {
            debug!("no score submission pending");
            return Ok(Submission::NotPending);
        };

        let entry = LeaderboardEntry::new(
            name,
            completion.time_ms,
            completion.moves,
            self.clock.wall_time(),
        );
        match self.leaderboard.submit(entry) {
            Ok((board, rank)) => {
                self.emit(Notification::LeaderboardChanged(board.into_entries()));
                Ok(match rank {
                    Some(rank) => Submission::Ranked(rank),
                    None => {
                        warn!(time_ms = completion.time_ms, "score no longer fits the leaderboard");
                        Submission::Displaced
                    }
                })
            }
            Err(e) => {
                error!(error = %e, "failed to save leaderboard");
                self.pending_score = Some(completion);
                Err(e)
            }
        }
    }

    /// Decline the pending submission, if any
    pub fn cancel_score_submission(&mut self) -> bool {
        self.pending_score.take().is_some()
    }

    /// Periodic poll from the host. Samples the timer while it runs and
    /// refreshes the label; a no-op otherwise.
    pub fn timer_tick(&mut self) -> Option<u64> {
        let elapsed = self.game.tick(self.clock.now_ms())?;
        self.refresh_timer_label();
        Some(elapsed)
    }

    /// Remove every stored leaderboard entry
    pub fn clear_leaderboard(&mut self) -> Result<(), StoreError> {
        self.leaderboard.clear()?;
        info!("leaderboard cleared");
        self.emit(Notification::LeaderboardChanged(Vec::new()));
        Ok(())
    }

    /// Apply an input-layer action. Returns whether anything changed.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::SelectTower(index) => self.select_tower(index),
            // Errors are logged by `undo`.
            GameAction::Undo => self.undo().unwrap_or(false),
            GameAction::Reset => {
                self.reset_game();
                true
            }
            GameAction::IncreaseDisks => {
                let n = self.game.num_disks();
                n < MAX_DISKS && self.set_disk_count(n + 1)
            }
            GameAction::DecreaseDisks => {
                let n = self.game.num_disks();
                n > MIN_DISKS && self.set_disk_count(n - 1)
            }
            GameAction::SetDiskCount(n) => self.set_disk_count(n),
            GameAction::NextLevel => self.acknowledge_victory(true),
            GameAction::ReplayLevel => self.acknowledge_victory(false),
            GameAction::CancelSubmission => self.cancel_score_submission(),
        }
    }

    fn new_game(&mut self, num_disks: u8) {
        self.game.reset_with(num_disks);
        self.victory = None;
        self.announce_new_game();
    }

    fn announce_new_game(&mut self) {
        info!(
            num_disks = self.game.num_disks(),
            game_id = self.game.game_id(),
            "new game"
        );
        self.timer_label = format_time(0);
        self.emit(Notification::BoardReset {
            num_disks: self.game.num_disks(),
        });
        self.emit_moves_label();
        self.emit(Notification::TimerLabelChanged(self.timer_label.clone()));
        self.emit_undo_availability();
    }

    fn on_win(&mut self) {
        let completion = Completion {
            time_ms: self.game.elapsed_ms(),
            moves: self.game.num_moves(),
            num_disks: self.game.num_disks(),
        };
        info!(
            time_ms = completion.time_ms,
            moves = completion.moves,
            num_disks = completion.num_disks,
            "puzzle solved"
        );

        self.refresh_timer_label();
        self.emit(Notification::GameWon {
            time_ms: completion.time_ms,
            moves: completion.moves,
            num_disks: completion.num_disks,
            is_max_level: completion.is_max_level(),
        });

        if is_qualifying_completion(completion.num_disks) {
            if self.leaderboard.load().is_high_score(completion.time_ms) {
                self.pending_score = Some(completion);
                self.emit(Notification::ScoreSubmissionRequested {
                    time_ms: completion.time_ms,
                    moves: completion.moves,
                });
            } else {
                self.emit(Notification::MaxLevelCompleted {
                    time_ms: completion.time_ms,
                    moves: completion.moves,
                });
            }
        }

        self.victory = Some(completion);
    }

    fn refresh_timer_label(&mut self) {
        let label = format_time(self.game.elapsed_ms());
        if label != self.timer_label {
            self.timer_label = label;
            self.emit(Notification::TimerLabelChanged(self.timer_label.clone()));
        }
    }

    fn emit_moves_label(&mut self) {
        self.emit(Notification::MovesLabelChanged {
            current: self.game.num_moves(),
            target: self.game.target_moves(),
        });
    }

    fn emit_undo_availability(&mut self) {
        self.emit(Notification::UndoAvailabilityChanged(self.game.can_undo()));
    }

    fn emit(&mut self, notification: Notification) {
        self.outbox.push(notification);
    }
}
