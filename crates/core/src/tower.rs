//! Disks and towers
//!
//! Disks are identified by their size, which is unique within a game. A tower
//! is a fixed-capacity stack: the last element is the top disk.

use arrayvec::ArrayVec;

use crate::types::{TowerIndex, MAX_DISKS};

/// Upper bound on the disks a single tower can hold
pub const TOWER_CAPACITY: usize = MAX_DISKS as usize;

/// A disk of the puzzle; larger size = physically larger
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Disk {
    size: u8,
}

impl Disk {
    pub fn new(size: u8) -> Self {
        Self { size }
    }

    pub fn size(self) -> u8 {
        self.size
    }
}

/// One of the three towers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tower {
    index: TowerIndex,
    disks: ArrayVec<Disk, TOWER_CAPACITY>,
}

impl Tower {
    /// Create an empty tower
    pub fn new(index: TowerIndex) -> Self {
        Self {
            index,
            disks: ArrayVec::new(),
        }
    }

    /// Create a tower holding disks `num_disks..=1`, largest at the bottom
    pub fn stacked(index: TowerIndex, num_disks: u8) -> Self {
        let mut tower = Self::new(index);
        for size in (1..=num_disks.min(MAX_DISKS)).rev() {
            tower.add_disk(Disk::new(size));
        }
        tower
    }

    pub fn index(&self) -> TowerIndex {
        self.index
    }

    /// Disks bottom to top
    pub fn disks(&self) -> &[Disk] {
        &self.disks
    }

    pub fn top_disk(&self) -> Option<Disk> {
        self.disks.last().copied()
    }

    pub fn len(&self) -> usize {
        self.disks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.disks.is_empty()
    }

    pub fn contains(&self, disk: Disk) -> bool {
        self.disks.contains(&disk)
    }

    /// Put a disk on top, returning the slot it landed in (0 = bottom).
    ///
    /// Legality is the caller's concern. Panics if the tower already holds
    /// `MAX_DISKS` disks, which a game never produces.
    pub(crate) fn add_disk(&mut self, disk: Disk) -> usize {
        debug_assert!(
            self.top_disk().map_or(true, |top| top.size() > disk.size()),
            "disk {} placed on smaller disk",
            disk.size()
        );
        self.disks.push(disk);
        self.disks.len() - 1
    }

    /// Take the top disk off, if any
    pub(crate) fn remove_disk(&mut self) -> Option<Disk> {
        self.disks.pop()
    }

    /// Write disk sizes bottom-to-top into `out`
    pub fn write_sizes(&self, out: &mut ArrayVec<u8, TOWER_CAPACITY>) {
        out.clear();
        out.extend(self.disks.iter().map(|d| d.size()));
    }
}
