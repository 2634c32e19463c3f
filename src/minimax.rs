//! Exhaustive minimax search for the Hard opponent.
//!
//! Every empty cell is tried for the moving side, and the resulting position
//! is scored by searching the full game tree with both sides playing
//! perfectly. The 3x3 tree is small enough that no pruning, cache, or depth
//! limit is needed.
//!
//! Scores are exact and seen from the maximizer (the side asking for a move):
//! - [`SCORE_WIN`] when the maximizer completes a line
//! - [`SCORE_LOSS`] when the minimizer completes a line
//! - [`SCORE_DRAW`] on a full board with no line
//!
//! Each branch works on its own copy of the board, so the caller's board is
//! never touched and no undo step is required.

use tracing::{debug, trace};

use crate::board::{Board, Mark, Point};
use crate::constants::{MAX_DEPTH, SCORE_DRAW, SCORE_LOSS, SCORE_WIN};

/// The move chosen by [`best_move`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct BestMove {
    /// Cell to play.
    pub point: Point,
    /// Exact minimax score of playing there.
    pub score: i32,
    /// Positions visited to find it.
    pub nodes: u64,
}

/// Exact score of `board` for `maximizer` playing against `minimizer`.
///
/// `maximizing` says whose turn it is: `true` if the maximizer moves next.
pub fn minimax(board: &Board, maximizer: Mark, minimizer: Mark, maximizing: bool) -> i32 {
    let mut nodes = 0;
    search(board, maximizer, minimizer, maximizing, 0, &mut nodes)
}

fn search(
    board: &Board,
    maximizer: Mark,
    minimizer: Mark,
    maximizing: bool,
    depth: usize,
    nodes: &mut u64,
) -> i32 {
    *nodes += 1;

    if board.is_winner(maximizer) {
        return SCORE_WIN;
    }
    if board.is_winner(minimizer) {
        return SCORE_LOSS;
    }
    if board.is_full() {
        return SCORE_DRAW;
    }
    debug_assert!(depth < MAX_DEPTH, "search deeper than the board allows");

    let mark = if maximizing { maximizer } else { minimizer };
    let scores = board.empty_cells().map(|pt| {
        search(
            &board.with_mark(pt, mark),
            maximizer,
            minimizer,
            !maximizing,
            depth + 1,
            nodes,
        )
    });

    let best = if maximizing { scores.max() } else { scores.min() };
    best.unwrap_or(SCORE_DRAW)
}

/// Score every empty cell for `moving`, in row-major order.
pub fn scored_moves(board: &Board, moving: Mark, other: Mark) -> Vec<(Point, i32)> {
    let mut nodes = 0;
    scored_moves_counted(board, moving, other, &mut nodes)
}

fn scored_moves_counted(
    board: &Board,
    moving: Mark,
    other: Mark,
    nodes: &mut u64,
) -> Vec<(Point, i32)> {
    board
        .empty_cells()
        .map(|pt| {
            let child = board.with_mark(pt, moving);
            (pt, search(&child, moving, other, false, 1, nodes))
        })
        .collect()
}

/// First empty cell (row-major) that completes a line for `mark`.
pub fn winning_move(board: &Board, mark: Mark) -> Option<Point> {
    board
        .empty_cells()
        .find(|&pt| board.with_mark(pt, mark).is_winner(mark))
}

/// Pick the best cell for `moving`, or `None` on a full board.
///
/// An immediate win is always taken. Otherwise the first cell in row-major
/// order with the strictly greatest score wins the tie-break.
pub fn best_move(board: &Board, moving: Mark, other: Mark) -> Option<BestMove> {
    if let Some(point) = winning_move(board, moving) {
        debug!(?point, "taking immediate win");
        return Some(BestMove {
            point,
            score: SCORE_WIN,
            nodes: 0,
        });
    }

    let mut nodes = 0;
    let mut best: Option<(Point, i32)> = None;
    for (point, score) in scored_moves_counted(board, moving, other, &mut nodes) {
        trace!(?point, score, "scored cell");
        if best.is_none_or(|(_, s)| score > s) {
            best = Some((point, score));
        }
    }

    let (point, score) = best?;
    debug!(?point, score, nodes, "minimax search finished");
    Some(BestMove {
        point,
        score,
        nodes,
    })
}
