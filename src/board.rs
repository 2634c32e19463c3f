//! Board state: the 3x3 grid, move placement, and terminal-condition queries.
//!
//! The board is a fixed row-major array of cells. A cell is `None` when
//! empty or `Some(mark)` once a side has played there. Boards are `Copy`,
//! so the search can snapshot a position per branch without allocating.

use std::fmt;
use std::str::FromStr;

use crate::constants::{CELLS, CHAR_EMPTY, CHAR_O, CHAR_X, LINES, N};

/// A side's mark. The human always plays `X` and moves first.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    pub fn opponent(self) -> Mark {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Mark::X => CHAR_X,
            Mark::O => CHAR_O,
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// One board slot: `None` is an empty cell.
pub type Cell = Option<Mark>;

/// A `(row, col)` coordinate, both in `0..N`.
pub type Point = (usize, usize);

/// Rejected placement. The board is never modified when one of these is returned.
#[derive(Copy, Clone, Debug, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// Coordinates fall outside the 3x3 grid.
    #[display("Illegal move: ({row}, {col}) is off the board")]
    OutOfRange { row: usize, col: usize },
    /// The cell already holds a mark.
    #[display("Illegal move: ({row}, {col}) is not empty")]
    Occupied { row: usize, col: usize },
}

impl std::error::Error for MoveError {}

/// Game result derived from a board. Never stored, always recomputed.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum GameOutcome {
    InProgress,
    PlayerWin,
    OpponentWin,
    Draw,
}

impl GameOutcome {
    pub fn is_terminal(self) -> bool {
        self != GameOutcome::InProgress
    }

    /// Short token used by the text protocol.
    pub fn token(self) -> &'static str {
        match self {
            GameOutcome::InProgress => "in_progress",
            GameOutcome::PlayerWin => "player_win",
            GameOutcome::OpponentWin => "opponent_win",
            GameOutcome::Draw => "draw",
        }
    }

    /// Message shown to the human.
    pub fn message(self) -> &'static str {
        match self {
            GameOutcome::InProgress => "Your move",
            GameOutcome::PlayerWin => "You Win!",
            GameOutcome::OpponentWin => "You Lost! Try Again!",
            GameOutcome::Draw => "It's a Draw!",
        }
    }
}

impl fmt::Display for GameOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [Cell; CELLS],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    fn idx(row: usize, col: usize) -> usize {
        row * N + col
    }

    /// Mark at `(row, col)`. Off-board coordinates read as empty.
    pub fn get(&self, row: usize, col: usize) -> Cell {
        if row >= N || col >= N {
            return None;
        }
        self.cells[Self::idx(row, col)]
    }

    /// Place `mark` on an empty cell.
    pub fn place(&mut self, row: usize, col: usize, mark: Mark) -> Result<(), MoveError> {
        if row >= N || col >= N {
            return Err(MoveError::OutOfRange { row, col });
        }
        let idx = Self::idx(row, col);
        if self.cells[idx].is_some() {
            return Err(MoveError::Occupied { row, col });
        }
        self.cells[idx] = Some(mark);
        Ok(())
    }

    /// Copy of this board with `mark` written at `pt`.
    ///
    /// Only used by the search on cells taken from [`Board::empty_cells`].
    pub(crate) fn with_mark(&self, (row, col): Point, mark: Mark) -> Board {
        let mut next = *self;
        next.cells[Self::idx(row, col)] = Some(mark);
        next
    }

    /// True iff some row, column, or diagonal holds three `mark`s.
    pub fn is_winner(&self, mark: Mark) -> bool {
        LINES
            .iter()
            .any(|line| line.iter().all(|&(r, c)| self.get(r, c) == Some(mark)))
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Empty cells in row-major order. Recomputed on every call.
    pub fn empty_cells(&self) -> impl Iterator<Item = Point> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_none())
            .map(|(i, _)| (i / N, i % N))
    }

    /// Clear every cell.
    pub fn reset(&mut self) {
        self.cells = [None; CELLS];
    }

    /// Outcome from the point of view of `player` (the human) against `opponent`.
    pub fn outcome(&self, player: Mark, opponent: Mark) -> GameOutcome {
        if self.is_winner(player) {
            GameOutcome::PlayerWin
        } else if self.is_winner(opponent) {
            GameOutcome::OpponentWin
        } else if self.is_full() {
            GameOutcome::Draw
        } else {
            GameOutcome::InProgress
        }
    }

    /// Number of `X` and `O` marks on the board.
    pub fn mark_counts(&self) -> (usize, usize) {
        self.cells.iter().fold((0, 0), |(x, o), cell| match cell {
            Some(Mark::X) => (x + 1, o),
            Some(Mark::O) => (x, o + 1),
            None => (x, o),
        })
    }

    /// Side to move, assuming `X` opened. `None` if the counts break alternation.
    pub fn to_move(&self) -> Option<Mark> {
        match self.mark_counts() {
            (x, o) if x == o => Some(Mark::X),
            (x, o) if x == o + 1 => Some(Mark::O),
            _ => None,
        }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..N {
            for col in 0..N {
                let ch = self.get(row, col).map_or(CHAR_EMPTY, Mark::as_char);
                if col > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{ch}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, derive_more::Display)]
pub enum ParseBoardError {
    #[display("expected {expected} cells, got {got}")]
    WrongLength { expected: usize, got: usize },
    #[display("invalid cell character '{_0}'")]
    InvalidChar(char),
}

impl std::error::Error for ParseBoardError {}

impl FromStr for Board {
    type Err = ParseBoardError;

    /// Parse nine cell characters, e.g. `"XX./OO./..."`.
    ///
    /// `X`/`O` (either case) are marks; `.`, `_` and `-` are empty.
    /// Whitespace and `/` separate rows and are ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cells = Vec::with_capacity(CELLS);
        for ch in s.chars().filter(|c| !c.is_whitespace() && *c != '/') {
            let cell = match ch {
                'X' | 'x' => Some(Mark::X),
                'O' | 'o' => Some(Mark::O),
                '.' | '_' | '-' => None,
                other => return Err(ParseBoardError::InvalidChar(other)),
            };
            cells.push(cell);
        }
        let got = cells.len();
        let cells: [Cell; CELLS] = cells.try_into().map_err(|_| ParseBoardError::WrongLength {
            expected: CELLS,
            got,
        })?;
        Ok(Board { cells })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(s: &str) -> Board {
        s.parse().unwrap()
    }

    #[test]
    fn test_new_board_is_empty() {
        let b = Board::new();
        assert_eq!(b.empty_cells().count(), CELLS);
        assert!(!b.is_full());
        assert!(!b.is_winner(Mark::X));
        assert!(!b.is_winner(Mark::O));
    }

    #[test]
    fn test_place_and_get() {
        let mut b = Board::new();
        assert_eq!(b.place(1, 2, Mark::X), Ok(()));
        assert_eq!(b.get(1, 2), Some(Mark::X));
        assert_eq!(b.get(2, 1), None);
    }

    #[test]
    fn test_place_occupied_leaves_board_unchanged() {
        let mut b = board("X../.O./...");
        let before = b;
        assert_eq!(
            b.place(1, 1, Mark::X),
            Err(MoveError::Occupied { row: 1, col: 1 })
        );
        assert_eq!(b, before);
    }

    #[test]
    fn test_place_out_of_range() {
        let mut b = Board::new();
        assert_eq!(
            b.place(3, 0, Mark::X),
            Err(MoveError::OutOfRange { row: 3, col: 0 })
        );
        assert_eq!(
            b.place(0, 7, Mark::O),
            Err(MoveError::OutOfRange { row: 0, col: 7 })
        );
        assert_eq!(b, Board::new());
    }

    #[test]
    fn test_every_line_wins() {
        for line in LINES {
            let mut b = Board::new();
            for (r, c) in line {
                b.place(r, c, Mark::O).unwrap();
            }
            assert!(b.is_winner(Mark::O), "line {line:?} should win");
            assert!(!b.is_winner(Mark::X));
        }
    }

    #[test]
    fn test_two_in_a_row_is_not_a_win() {
        let b = board("XX./OO./...");
        assert!(!b.is_winner(Mark::X));
        assert!(!b.is_winner(Mark::O));
    }

    #[test]
    fn test_empty_cells_row_major() {
        let b = board("X.O/.X./O..");
        let cells: Vec<Point> = b.empty_cells().collect();
        assert_eq!(cells, vec![(0, 1), (1, 0), (1, 2), (2, 1), (2, 2)]);
    }

    #[test]
    fn test_full_board_has_no_empty_cells() {
        let b = board("XOX/XOO/OXX");
        assert!(b.is_full());
        assert_eq!(b.empty_cells().count(), 0);
        assert_eq!(b.outcome(Mark::X, Mark::O), GameOutcome::Draw);
    }

    #[test]
    fn test_outcome() {
        assert_eq!(
            Board::new().outcome(Mark::X, Mark::O),
            GameOutcome::InProgress
        );
        assert_eq!(
            board("XXX/OO./...").outcome(Mark::X, Mark::O),
            GameOutcome::PlayerWin
        );
        assert_eq!(
            board("XX./OOO/X..").outcome(Mark::X, Mark::O),
            GameOutcome::OpponentWin
        );
    }

    #[test]
    fn test_reset() {
        let mut b = board("XOX/.O./...");
        b.reset();
        assert_eq!(b, Board::new());
    }

    #[test]
    fn test_to_move() {
        assert_eq!(Board::new().to_move(), Some(Mark::X));
        assert_eq!(board("X../.../...").to_move(), Some(Mark::O));
        assert_eq!(board("X../.O./...").to_move(), Some(Mark::X));
        assert_eq!(board("XX./.../...").to_move(), None);
        assert_eq!(board("X../.O./..O").to_move(), None);
    }

    #[test]
    fn test_display() {
        let b = board("X.O/.X./...");
        assert_eq!(b.to_string(), "X . O\n. X .\n. . .\n");
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            "XO".parse::<Board>(),
            Err(ParseBoardError::WrongLength {
                expected: CELLS,
                got: 2
            })
        );
        assert_eq!(
            "XO?/.../...".parse::<Board>(),
            Err(ParseBoardError::InvalidChar('?'))
        );
    }

    #[test]
    fn test_parse_accepts_separators() {
        let a = board("xo_ -.. ...");
        let b = board("XO./.../...");
        assert_eq!(a.get(0, 0), Some(Mark::X));
        assert_eq!(a.get(0, 1), Some(Mark::O));
        assert_eq!(a, b);
    }
}
