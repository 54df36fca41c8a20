//! Win detection.
//!
//! A game is won when the current player's board has at least
//! [`WIN_THRESHOLD`] completed lines. A line is completed when every number in
//! it has been marked. Rows, columns and both diagonals all count, so the
//! maximum is 12.

use std::collections::BTreeSet;

use super::{board::Board, value_object::BingoNumber};

/// Completed lines needed to win.
///
/// This game asks for five lines rather than the conventional single bingo line.
pub const WIN_THRESHOLD: usize = 5;

/// Count the rows, columns and diagonals of `board` whose numbers are all in `marked`.
pub fn completed_lines(board: &Board, marked: &BTreeSet<BingoNumber>) -> usize {
    board
        .lines()
        .filter(|line| line.iter().all(|number| marked.contains(number)))
        .count()
}

/// Whether `completed` lines is enough to win.
pub fn is_win(completed: usize) -> bool {
    completed >= WIN_THRESHOLD
}
