//! Move selection for the automated player.
//!
//! [`MoveSelector`] dispatches on [`Difficulty`]: Easy plays a random empty
//! cell, Hard runs the full minimax search from [`crate::minimax`].

use std::fmt;
use std::str::FromStr;

use fastrand::Rng;
use tracing::debug;

use crate::board::{Board, Mark, Point};
use crate::minimax::best_move;
use crate::playout::random_move;

/// Opponent strength, fixed for a game.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Difficulty {
    Easy,
    #[default]
    Hard,
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Difficulty::Easy => f.write_str("easy"),
            Difficulty::Hard => f.write_str("hard"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, derive_more::Display)]
#[display("unknown difficulty '{_0}' (expected easy or hard)")]
pub struct ParseDifficultyError(String);

impl std::error::Error for ParseDifficultyError {}

impl FromStr for Difficulty {
    type Err = ParseDifficultyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "hard" => Ok(Difficulty::Hard),
            _ => Err(ParseDifficultyError(s.to_string())),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, derive_more::Display)]
pub enum SelectError {
    /// The board has no empty cell. Callers must check for a finished game first.
    #[display("no move available: board is full")]
    NoMoveAvailable,
}

impl std::error::Error for SelectError {}

/// Chooses the automated player's moves.
pub struct MoveSelector {
    rng: Rng,
}

impl Default for MoveSelector {
    fn default() -> Self {
        Self::new()
    }
}

impl MoveSelector {
    /// Selector with a randomly seeded generator.
    pub fn new() -> Self {
        Self { rng: Rng::new() }
    }

    /// Selector whose Easy-mode moves are reproducible.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: Rng::with_seed(seed),
        }
    }

    /// Next cell for `moving`, playing against `other`.
    pub fn select_move(
        &mut self,
        board: &Board,
        difficulty: Difficulty,
        moving: Mark,
        other: Mark,
    ) -> Result<Point, SelectError> {
        if board.is_full() {
            return Err(SelectError::NoMoveAvailable);
        }
        let point = match difficulty {
            Difficulty::Easy => random_move(board, &mut self.rng),
            Difficulty::Hard => best_move(board, moving, other).map(|best| best.point),
        }
        .ok_or(SelectError::NoMoveAvailable)?;

        debug!(%difficulty, mark = %moving, ?point, "selected move");
        Ok(point)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_difficulty() {
        assert_eq!("easy".parse::<Difficulty>(), Ok(Difficulty::Easy));
        assert_eq!("HARD".parse::<Difficulty>(), Ok(Difficulty::Hard));
        assert_eq!("Hard".parse::<Difficulty>(), Ok(Difficulty::Hard));
        assert!("medium".parse::<Difficulty>().is_err());
    }

    #[test]
    fn test_difficulty_display_roundtrip() {
        for d in [Difficulty::Easy, Difficulty::Hard] {
            assert_eq!(d.to_string().parse::<Difficulty>(), Ok(d));
        }
    }

    #[test]
    fn test_full_board_is_an_error() {
        let board: Board = "XOX/XOO/OXX".parse().unwrap();
        let mut selector = MoveSelector::with_seed(1);
        for d in [Difficulty::Easy, Difficulty::Hard] {
            assert_eq!(
                selector.select_move(&board, d, Mark::O, Mark::X),
                Err(SelectError::NoMoveAvailable)
            );
        }
    }

    #[test]
    fn test_easy_on_empty_board() {
        let board = Board::new();
        let mut selector = MoveSelector::with_seed(5);
        for _ in 0..50 {
            let (row, col) = selector
                .select_move(&board, Difficulty::Easy, Mark::O, Mark::X)
                .unwrap();
            assert!(row < 3 && col < 3);
            assert_eq!(board.get(row, col), None);
        }
    }

    #[test]
    fn test_hard_takes_the_win() {
        let board: Board = "XX./OO./...".parse().unwrap();
        let mut selector = MoveSelector::new();
        assert_eq!(
            selector.select_move(&board, Difficulty::Hard, Mark::O, Mark::X),
            Ok((1, 2))
        );
    }
}
