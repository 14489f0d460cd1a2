//! Move legality - the single rule of the puzzle
//!
//! A disk may be placed on an empty tower, or on a tower whose top disk is
//! strictly larger. Nothing else is checked here: which disk is moving and
//! where it comes from is the state machine's business.

/// Whether a disk of size `moving` may be placed on a tower whose top disk is `target_top`.
///
/// ```
/// use tui_hanoi_core::rules::can_move;
///
/// assert!(can_move(3, None));
/// assert!(can_move(1, Some(2)));
/// assert!(!can_move(2, Some(1)));
/// assert!(!can_move(2, Some(2)));
/// ```
pub fn can_move(moving: u8, target_top: Option<u8>) -> bool {
    match target_top {
        None => true,
        Some(top) => top > moving,
    }
}

/// Whether disk sizes read bottom-to-top are strictly decreasing.
pub fn is_ordered_stack(sizes: &[u8]) -> bool {
    sizes.windows(2).all(|pair| pair[0] > pair[1])
}
