//! Constants for board geometry, winning lines, and search scores.
//!
//! The board is always 3x3 and is addressed by `(row, col)` pairs with
//! both coordinates in `0..N`. Cells are stored row-major.

// =============================================================================
// Board Geometry
// =============================================================================

/// Board size (NxN).
pub const N: usize = 3;

/// Total number of cells on the board.
pub const CELLS: usize = N * N;

/// Deepest possible search: one ply per cell.
pub const MAX_DEPTH: usize = CELLS;

// =============================================================================
// Winning Lines
// =============================================================================

/// The 8 lines that win the game: 3 rows, 3 columns, 2 diagonals.
pub const LINES: [[(usize, usize); 3]; 8] = [
    // Rows
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],
    // Columns
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],
    // Diagonals
    [(0, 0), (1, 1), (2, 2)],
    [(0, 2), (1, 1), (2, 0)],
];

// =============================================================================
// Search Scores
// =============================================================================

/// Terminal score when the maximizing side has three in a row.
pub const SCORE_WIN: i32 = 1;

/// Terminal score when the minimizing side has three in a row.
pub const SCORE_LOSS: i32 = -1;

/// Terminal score for a full board with no winner.
pub const SCORE_DRAW: i32 = 0;

// =============================================================================
// Cell Characters
// =============================================================================

/// Character for the human's mark.
pub const CHAR_X: char = 'X';

/// Character for the automated player's mark.
pub const CHAR_O: char = 'O';

/// Character for an empty cell.
pub const CHAR_EMPTY: char = '.';
