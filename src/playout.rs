//! Random move choice for the Easy opponent.
//!
//! Moves are drawn uniformly from the enumerated empty cells, so a choice
//! always succeeds in one draw no matter how full the board is.

use fastrand::Rng;

use crate::board::{Board, Point};

/// Pick a uniformly random empty cell, or `None` if the board is full.
pub fn random_move(board: &Board, rng: &mut Rng) -> Option<Point> {
    let candidates: Vec<Point> = board.empty_cells().collect();
    if candidates.is_empty() {
        return None;
    }
    Some(candidates[rng.usize(..candidates.len())])
}
