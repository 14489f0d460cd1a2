//! Game state module - manages the complete game state
//!
//! This module ties together the towers, the move validator, the undo history
//! and the timer. It owns every disk through the towers; the current selection
//! only names a disk by its size.

use tracing::{debug, error};

use crate::rules::can_move;
use crate::snapshot::GameSnapshot;
use crate::tower::{Disk, Tower};
use crate::types::{clamp_disks, target_moves, TowerIndex, DEFAULT_DISKS};
use crate::{CoreError, Timer};

/// A completed transfer of one disk
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub source: TowerIndex,
    pub target: TowerIndex,
    pub disk_size: u8,
}

/// Where the game stands between two inputs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    NoSelection,
    /// A disk has been picked up and waits for a target tower
    DiskSelected { disk: Disk },
    /// Every disk sits on the final tower; only a reset leaves this phase
    Won,
}

/// Result of selecting a tower
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectOutcome {
    /// Nothing happened (empty tower with no selection, or the game is won)
    Ignored,
    /// The top disk of `tower` was picked up
    Selected { disk: Disk, tower: TowerIndex },
    /// The held disk could not go onto `tower` and was put down
    Rejected { disk: Disk, tower: TowerIndex },
    /// The held disk moved; `slot` is its position on the target (0 = bottom)
    Moved { record: Move, slot: usize, won: bool },
}

/// Result of a successful undo
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Undone {
    /// The move that was reversed
    pub record: Move,
    /// Slot the disk returned to on `record.source`
    pub slot: usize,
    /// Selection dropped before undoing, if one was active
    pub deselected: Option<Disk>,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    towers: [Tower; 3],
    num_disks: u8,
    num_moves: u32,
    phase: Phase,
    history: Vec<Move>,
    timer: Timer,
    /// Monotonic game id (increments on every reset).
    game_id: u32,
}

impl GameState {
    /// Create a new game with all disks on the first tower.
    ///
    /// `num_disks` is clamped into the configurable range.
    pub fn new(num_disks: u8) -> Self {
        let num_disks = clamp_disks(num_disks);
        let [start, middle, last] = TowerIndex::all();
        Self {
            towers: [
                Tower::stacked(start, num_disks),
                Tower::new(middle),
                Tower::new(last),
            ],
            num_disks,
            num_moves: 0,
            phase: Phase::NoSelection,
            history: Vec::with_capacity(target_moves(num_disks) as usize),
            timer: Timer::new(),
            game_id: 0,
        }
    }

    /// Start over with the same disk count
    pub fn reset(&mut self) {
        self.reset_with(self.num_disks);
    }

    /// Start over with `num_disks` disks (clamped)
    pub fn reset_with(&mut self, num_disks: u8) {
        let next_game = self.game_id.wrapping_add(1);
        *self = Self::new(num_disks);
        self.game_id = next_game;
    }

    pub fn num_disks(&self) -> u8 {
        self.num_disks
    }

    pub fn num_moves(&self) -> u32 {
        self.num_moves
    }

    /// Optimal move count for this puzzle (display only)
    pub fn target_moves(&self) -> u32 {
        target_moves(self.num_disks)
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_won(&self) -> bool {
        self.phase == Phase::Won
    }

    pub fn selected_disk(&self) -> Option<Disk> {
        match self.phase {
            Phase::DiskSelected { disk } => Some(disk),
            _ => None,
        }
    }

    pub fn history(&self) -> &[Move] {
        &self.history
    }

    pub fn towers(&self) -> &[Tower; 3] {
        &self.towers
    }

    pub fn tower(&self, index: TowerIndex) -> &Tower {
        &self.towers[index.as_usize()]
    }

    pub fn timer(&self) -> &Timer {
        &self.timer
    }

    pub fn elapsed_ms(&self) -> u64 {
        self.timer.elapsed_ms()
    }

    pub fn game_id(&self) -> u32 {
        self.game_id
    }

    /// Whether [`GameState::undo`] would do anything
    pub fn can_undo(&self) -> bool {
        !self.is_won() && !self.history.is_empty()
    }

    /// Tower currently holding `disk`
    pub fn locate(&self, disk: Disk) -> Option<TowerIndex> {
        self.towers
            .iter()
            .find(|t| t.contains(disk))
            .map(|t| t.index())
    }

    /// Select a tower: pick up its top disk, or drop the held disk onto it.
    ///
    /// `now_ms` starts the timer on the first move. The winning move stops it,
    /// freezing the value of the last [`GameState::tick`].
    pub fn select_tower(&mut self, index: TowerIndex, now_ms: u64) -> SelectOutcome {
        match self.phase {
            Phase::Won => SelectOutcome::Ignored,
            Phase::NoSelection => match self.tower(index).top_disk() {
                Some(disk) => {
                    self.phase = Phase::DiskSelected { disk };
                    SelectOutcome::Selected { disk, tower: index }
                }
                None => SelectOutcome::Ignored,
            },
            Phase::DiskSelected { disk } => self.drop_selected(disk, index, now_ms),
        }
    }

    fn drop_selected(&mut self, disk: Disk, target: TowerIndex, now_ms: u64) -> SelectOutcome {
        self.phase = Phase::NoSelection;

        let target_top = self.tower(target).top_disk().map(Disk::size);
        if !can_move(disk.size(), target_top) {
            debug!(disk = disk.size(), %target, "illegal move rejected");
            return SelectOutcome::Rejected { disk, tower: target };
        }

        let Some(source) = self.locate(disk) else {
            error!(disk = disk.size(), "selected disk is not on any tower");
            return SelectOutcome::Ignored;
        };

        match self.towers[source.as_usize()].remove_disk() {
            Some(top) if top == disk => {}
            other => {
                // A selection always names a top disk; put back whatever came off.
                if let Some(top) = other {
                    self.towers[source.as_usize()].add_disk(top);
                }
                error!(disk = disk.size(), %source, "selected disk is not on top of its tower");
                return SelectOutcome::Ignored;
            }
        }
        let slot = self.towers[target.as_usize()].add_disk(disk);
        self.timer.start(now_ms);

        let record = Move {
            source,
            target,
            disk_size: disk.size(),
        };
        self.history.push(record);
        self.num_moves += 1;

        let won = self.tower(TowerIndex::FINAL).len() == self.num_disks as usize;
        if won {
            self.phase = Phase::Won;
            self.timer.stop();
        }

        SelectOutcome::Moved { record, slot, won }
    }

    /// Reverse the most recent move.
    ///
    /// Returns `Ok(None)` when there is nothing to undo or the game is won.
    /// An active selection is dropped first. The move validator is not consulted:
    /// history only holds moves that were legal when made.
    pub fn undo(&mut self) -> Result<Option<Undone>, CoreError> {
        if !self.can_undo() {
            debug!(won = self.is_won(), "undo refused");
            return Ok(None);
        }
        let Some(record) = self.history.pop() else {
            return Ok(None);
        };

        let from = &mut self.towers[record.target.as_usize()];
        let disk = match from.remove_disk() {
            Some(disk) if disk.size() == record.disk_size => disk,
            Some(found) => {
                from.add_disk(found);
                self.history.push(record);
                return Err(CoreError::HistoryMismatch {
                    tower: record.target,
                    expected: record.disk_size,
                    found: found.size(),
                });
            }
            None => {
                self.history.push(record);
                return Err(CoreError::HistoryDiverged {
                    tower: record.target,
                    disk_size: record.disk_size,
                });
            }
        };

        let deselected = self.selected_disk();
        self.phase = Phase::NoSelection;

        let slot = self.towers[record.source.as_usize()].add_disk(disk);
        self.num_moves -= 1;

        Ok(Some(Undone {
            record,
            slot,
            deselected,
        }))
    }

    /// Sample the timer. `None` when it is not running.
    pub fn tick(&mut self, now_ms: u64) -> Option<u64> {
        self.timer.sample(now_ms)
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        for (tower, sizes) in self.towers.iter().zip(out.towers.iter_mut()) {
            tower.write_sizes(sizes);
        }
        out.selected = self.selected_disk().map(Disk::size);
        out.num_disks = self.num_disks;
        out.num_moves = self.num_moves;
        out.target_moves = self.target_moves();
        out.won = self.is_won();
        out.can_undo = self.can_undo();
        out.elapsed_ms = self.timer.elapsed_ms();
        out.timer_running = self.timer.is_running();
        out.game_id = self.game_id;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    #[cfg(test)]
    pub(crate) fn towers_mut(&mut self) -> &mut [Tower; 3] {
        &mut self.towers
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(DEFAULT_DISKS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::is_ordered_stack;

    fn t(i: u8) -> TowerIndex {
        TowerIndex::new(i).unwrap()
    }

    fn sizes(state: &GameState, i: u8) -> Vec<u8> {
        state.tower(t(i)).disks().iter().map(|d| d.size()).collect()
    }

    /// Pick up from `from` and drop on `to`
    fn play(state: &mut GameState, from: u8, to: u8, now_ms: u64) -> SelectOutcome {
        state.select_tower(t(from), now_ms);
        state.select_tower(t(to), now_ms)
    }

    const THREE_DISK_SOLUTION: [(u8, u8); 7] =
        [(0, 2), (0, 1), (2, 1), (0, 2), (1, 0), (1, 2), (0, 2)];

    #[test]
    fn test_new_game_state() {
        let state = GameState::new(3);

        assert_eq!(state.num_disks(), 3);
        assert_eq!(state.num_moves(), 0);
        assert_eq!(state.target_moves(), 7);
        assert_eq!(state.phase(), Phase::NoSelection);
        assert!(state.history().is_empty());
        assert!(!state.timer().is_running());
        assert_eq!(sizes(&state, 0), vec![3, 2, 1]);
        assert!(sizes(&state, 1).is_empty());
        assert!(sizes(&state, 2).is_empty());
    }

    #[test]
    fn test_new_clamps_disk_count() {
        assert_eq!(GameState::new(0).num_disks(), 1);
        assert_eq!(GameState::new(12).num_disks(), 7);
    }

    #[test]
    fn test_default_game_state() {
        assert_eq!(GameState::default().num_disks(), DEFAULT_DISKS);
    }

    #[test]
    fn test_select_empty_tower_is_ignored() {
        let mut state = GameState::new(3);
        assert_eq!(state.select_tower(t(1), 0), SelectOutcome::Ignored);
        assert_eq!(state.phase(), Phase::NoSelection);
    }

    #[test]
    fn test_select_picks_top_disk() {
        let mut state = GameState::new(3);
        let outcome = state.select_tower(t(0), 0);
        assert_eq!(
            outcome,
            SelectOutcome::Selected {
                disk: Disk::new(1),
                tower: t(0)
            }
        );
        assert_eq!(state.selected_disk(), Some(Disk::new(1)));
    }

    #[test]
    fn test_move_to_empty_tower() {
        let mut state = GameState::new(3);
        let outcome = play(&mut state, 0, 1, 500);

        let expected = Move {
            source: t(0),
            target: t(1),
            disk_size: 1,
        };
        assert_eq!(
            outcome,
            SelectOutcome::Moved {
                record: expected,
                slot: 0,
                won: false
            }
        );
        assert_eq!(state.num_moves(), 1);
        assert_eq!(state.history(), &[expected]);
        assert_eq!(state.phase(), Phase::NoSelection);
        assert_eq!(sizes(&state, 0), vec![3, 2]);
        assert_eq!(sizes(&state, 1), vec![1]);
    }

    #[test]
    fn test_illegal_move_rejected_and_deselected() {
        let mut state = GameState::new(3);
        play(&mut state, 0, 1, 0);

        // Disk 2 onto disk 1
        let outcome = play(&mut state, 0, 1, 0);
        assert_eq!(
            outcome,
            SelectOutcome::Rejected {
                disk: Disk::new(2),
                tower: t(1)
            }
        );
        assert_eq!(state.phase(), Phase::NoSelection);
        assert_eq!(state.num_moves(), 1);
        assert_eq!(sizes(&state, 0), vec![3, 2]);
        assert_eq!(sizes(&state, 1), vec![1]);
    }

    #[test]
    fn test_dropping_on_own_tower_deselects() {
        let mut state = GameState::new(3);
        let outcome = play(&mut state, 0, 0, 0);
        assert!(matches!(outcome, SelectOutcome::Rejected { .. }));
        assert_eq!(state.num_moves(), 0);
        assert!(state.history().is_empty());
        assert!(!state.timer().is_running());
    }

    #[test]
    fn test_first_move_starts_timer() {
        let mut state = GameState::new(3);
        state.select_tower(t(0), 100);
        assert!(!state.timer().is_running());

        state.select_tower(t(2), 1_000);
        assert!(state.timer().is_running());
        assert_eq!(state.tick(1_500), Some(500));

        // Later moves do not restart it.
        play(&mut state, 0, 1, 2_000);
        assert_eq!(state.tick(3_000), Some(2_000));
    }

    #[test]
    fn test_three_disk_solution_wins_on_seventh_move() {
        let mut state = GameState::new(3);
        for (i, &(from, to)) in THREE_DISK_SOLUTION.iter().enumerate() {
            assert!(!state.is_won(), "won early at move {i}");
            let now = 1_000 * (i as u64 + 1);
            state.tick(now);
            let outcome = play(&mut state, from, to, now);
            let SelectOutcome::Moved { won, .. } = outcome else {
                panic!("move {i} was not applied: {outcome:?}");
            };
            assert_eq!(won, i == 6);
        }

        assert!(state.is_won());
        assert_eq!(state.num_moves(), 7);
        assert_eq!(state.target_moves(), 7);
        assert_eq!(sizes(&state, 2), vec![3, 2, 1]);
        assert!(!state.timer().is_running());
        assert_eq!(state.elapsed_ms(), 6_000);
    }

    #[test]
    fn test_win_freezes_last_tick() {
        let mut state = GameState::new(2);
        play(&mut state, 0, 1, 0);
        assert_eq!(state.tick(900), Some(900));
        play(&mut state, 0, 2, 950);
        play(&mut state, 1, 2, 960);

        assert!(state.is_won());
        assert_eq!(state.elapsed_ms(), 900);
        assert_eq!(state.tick(5_000), None);
        assert_eq!(state.elapsed_ms(), 900);
    }

    #[test]
    fn test_won_ignores_selection_and_undo() {
        let mut state = GameState::new(1);
        play(&mut state, 0, 2, 0);
        assert!(state.is_won());

        assert_eq!(state.select_tower(t(2), 10), SelectOutcome::Ignored);
        assert!(!state.can_undo());
        assert_eq!(state.undo(), Ok(None));
        assert_eq!(state.history().len(), 1);
    }

    #[test]
    fn test_undo_empty_history() {
        let mut state = GameState::new(3);
        assert!(!state.can_undo());
        assert_eq!(state.undo(), Ok(None));
    }

    #[test]
    fn test_move_then_undo_restores_configuration() {
        let mut state = GameState::new(4);
        play(&mut state, 0, 1, 0);
        play(&mut state, 0, 2, 0);
        let before_towers = state.towers().clone();
        let before_moves = state.num_moves();
        let before_history = state.history().len();

        play(&mut state, 1, 2, 0);
        let undone = state.undo().unwrap().unwrap();
        assert_eq!(
            undone.record,
            Move {
                source: t(1),
                target: t(2),
                disk_size: 1
            }
        );
        assert_eq!(undone.slot, 0);
        assert_eq!(undone.deselected, None);

        assert_eq!(state.towers(), &before_towers);
        assert_eq!(state.num_moves(), before_moves);
        assert_eq!(state.history().len(), before_history);
    }

    #[test]
    fn test_undo_clears_active_selection() {
        let mut state = GameState::new(3);
        play(&mut state, 0, 2, 0);
        state.select_tower(t(0), 0);
        assert_eq!(state.selected_disk(), Some(Disk::new(2)));

        let undone = state.undo().unwrap().unwrap();
        assert_eq!(undone.deselected, Some(Disk::new(2)));
        assert_eq!(state.phase(), Phase::NoSelection);
        assert_eq!(sizes(&state, 0), vec![3, 2, 1]);
    }

    #[test]
    fn test_undo_does_not_stop_timer() {
        let mut state = GameState::new(3);
        play(&mut state, 0, 2, 1_000);
        state.undo().unwrap();
        assert_eq!(state.num_moves(), 0);
        assert!(state.timer().is_running());
        assert_eq!(state.tick(1_300), Some(300));
    }

    #[test]
    fn test_undo_reports_diverged_history() {
        let mut state = GameState::new(3);
        play(&mut state, 0, 1, 0);
        state.towers_mut()[1].remove_disk();

        let err = state.undo().unwrap_err();
        assert_eq!(
            err,
            CoreError::HistoryDiverged {
                tower: t(1),
                disk_size: 1
            }
        );
        // Aborted: history and counter untouched.
        assert_eq!(state.history().len(), 1);
        assert_eq!(state.num_moves(), 1);
    }

    #[test]
    fn test_undo_reports_mismatched_disk() {
        let mut state = GameState::new(3);
        play(&mut state, 0, 1, 0);
        let towers = state.towers_mut();
        towers[1].remove_disk();
        towers[1].add_disk(Disk::new(5));

        let err = state.undo().unwrap_err();
        assert_eq!(
            err,
            CoreError::HistoryMismatch {
                tower: t(1),
                expected: 1,
                found: 5
            }
        );
        assert_eq!(sizes(&state, 1), vec![5]);
        assert_eq!(state.history().len(), 1);
    }

    #[test]
    fn test_reset_reinitializes_everything() {
        let mut state = GameState::new(3);
        play(&mut state, 0, 2, 0);
        play(&mut state, 0, 1, 0);
        state.select_tower(t(2), 0);

        state.reset();
        assert_eq!(state.game_id(), 1);
        assert_eq!(state.num_moves(), 0);
        assert!(state.history().is_empty());
        assert_eq!(state.phase(), Phase::NoSelection);
        assert!(!state.timer().is_running());
        assert_eq!(state.elapsed_ms(), 0);
        assert_eq!(sizes(&state, 0), vec![3, 2, 1]);
        assert!(sizes(&state, 1).is_empty());
        assert!(sizes(&state, 2).is_empty());
    }

    #[test]
    fn test_reset_after_win() {
        let mut state = GameState::new(2);
        play(&mut state, 0, 1, 0);
        play(&mut state, 0, 2, 0);
        play(&mut state, 1, 2, 0);
        assert!(state.is_won());

        state.reset_with(5);
        assert!(!state.is_won());
        assert_eq!(state.num_disks(), 5);
        assert_eq!(sizes(&state, 0), vec![5, 4, 3, 2, 1]);
    }

    #[test]
    fn test_towers_stay_ordered_through_play() {
        let mut state = GameState::new(3);
        for &(from, to) in &THREE_DISK_SOLUTION[..4] {
            play(&mut state, from, to, 0);
            play(&mut state, to, from, 0);
            play(&mut state, from, to, 0);
            for i in 0..3 {
                assert!(is_ordered_stack(&sizes(&state, i)));
            }
        }
    }

    #[test]
    fn test_snapshot() {
        let mut state = GameState::new(3);
        play(&mut state, 0, 2, 0);
        state.select_tower(t(0), 50);
        state.tick(250);

        let snap = state.snapshot();
        assert_eq!(snap.towers[0].as_slice(), &[3, 2]);
        assert!(snap.towers[1].is_empty());
        assert_eq!(snap.towers[2].as_slice(), &[1]);
        assert_eq!(snap.selected, Some(2));
        assert_eq!(snap.num_moves, 1);
        assert_eq!(snap.target_moves, 7);
        assert!(snap.can_undo);
        assert!(!snap.won);
        assert!(snap.timer_running);
        assert_eq!(snap.elapsed_ms, 250);
    }
}
