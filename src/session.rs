//! One human-vs-computer game session.
//!
//! The session owns the board, the move selector, and a running score. It
//! enforces turn order with a small state machine:
//!
//! ```text
//! AwaitingPlayerMove --place--> AwaitingOpponentMove --select+place--> AwaitingPlayerMove
//!         |                              |
//!         +----------- terminal ---------+----> GameOver(outcome) --reset--> AwaitingPlayerMove
//! ```
//!
//! The human is always `X` and always opens a new game.

use tracing::{debug, info};

use crate::board::{Board, GameOutcome, Mark, MoveError, Point};
use crate::selector::{Difficulty, MoveSelector, SelectError};

/// The human's mark.
pub const PLAYER: Mark = Mark::X;

/// The automated player's mark.
pub const OPPONENT: Mark = Mark::O;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Phase {
    AwaitingPlayerMove,
    AwaitingOpponentMove,
    GameOver(GameOutcome),
}

/// Finished games since the session started. Kept across resets.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Scoreboard {
    pub player_wins: u32,
    pub opponent_wins: u32,
    pub draws: u32,
}

impl Scoreboard {
    fn record(&mut self, outcome: GameOutcome) {
        match outcome {
            GameOutcome::PlayerWin => self.player_wins += 1,
            GameOutcome::OpponentWin => self.opponent_wins += 1,
            GameOutcome::Draw => self.draws += 1,
            GameOutcome::InProgress => {}
        }
    }

    pub fn games(&self) -> u32 {
        self.player_wins + self.opponent_wins + self.draws
    }
}

/// Result of one full turn: the human's move and the reply, if any.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Turn {
    pub player_move: Point,
    /// `None` when the human's move ended the game.
    pub opponent_move: Option<Point>,
    pub outcome: GameOutcome,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, derive_more::Display, derive_more::From)]
pub enum SessionError {
    /// The cell is occupied or off the board. Nothing was changed.
    #[display("{_0}")]
    InvalidMove(MoveError),
    /// Selection was asked for on a full board.
    #[display("{_0}")]
    Select(SelectError),
    /// A move was attempted out of turn.
    #[display("not your turn")]
    #[from(skip)]
    OutOfTurn,
    /// The game has finished; start a new one.
    #[display("game is over")]
    #[from(skip)]
    GameOver,
}

impl std::error::Error for SessionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SessionError::InvalidMove(e) => Some(e),
            SessionError::Select(e) => Some(e),
            SessionError::OutOfTurn | SessionError::GameOver => None,
        }
    }
}

pub struct Session {
    board: Board,
    difficulty: Difficulty,
    phase: Phase,
    selector: MoveSelector,
    scores: Scoreboard,
}

impl Session {
    pub fn new(difficulty: Difficulty) -> Self {
        Self::with_selector(difficulty, MoveSelector::new())
    }

    /// Session whose Easy-mode replies are reproducible.
    pub fn with_seed(difficulty: Difficulty, seed: u64) -> Self {
        Self::with_selector(difficulty, MoveSelector::with_seed(seed))
    }

    fn with_selector(difficulty: Difficulty, selector: MoveSelector) -> Self {
        info!(%difficulty, "new session");
        Self {
            board: Board::new(),
            difficulty,
            phase: Phase::AwaitingPlayerMove,
            selector,
            scores: Scoreboard::default(),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn scores(&self) -> Scoreboard {
        self.scores
    }

    /// Current outcome, derived from the board.
    pub fn outcome(&self) -> GameOutcome {
        self.board.outcome(PLAYER, OPPONENT)
    }

    /// Place the human's mark. Moves to `AwaitingOpponentMove` or `GameOver`.
    pub fn place_player(&mut self, row: usize, col: usize) -> Result<GameOutcome, SessionError> {
        match self.phase {
            Phase::AwaitingPlayerMove => {}
            Phase::AwaitingOpponentMove => return Err(SessionError::OutOfTurn),
            Phase::GameOver(_) => return Err(SessionError::GameOver),
        }
        self.board.place(row, col, PLAYER)?;
        debug!(row, col, "player moved");
        Ok(self.advance(Phase::AwaitingOpponentMove))
    }

    /// Select and place the automated player's mark.
    pub fn play_opponent(&mut self) -> Result<(Point, GameOutcome), SessionError> {
        match self.phase {
            Phase::AwaitingOpponentMove => {}
            Phase::AwaitingPlayerMove => return Err(SessionError::OutOfTurn),
            Phase::GameOver(_) => return Err(SessionError::GameOver),
        }
        let (row, col) =
            self.selector
                .select_move(&self.board, self.difficulty, OPPONENT, PLAYER)?;
        self.board.place(row, col, OPPONENT)?;
        debug!(row, col, "opponent moved");
        Ok(((row, col), self.advance(Phase::AwaitingPlayerMove)))
    }

    /// Human move followed by the opponent's reply when the game continues.
    pub fn play(&mut self, row: usize, col: usize) -> Result<Turn, SessionError> {
        let outcome = self.place_player(row, col)?;
        if outcome.is_terminal() {
            return Ok(Turn {
                player_move: (row, col),
                opponent_move: None,
                outcome,
            });
        }
        let (reply, outcome) = self.play_opponent()?;
        Ok(Turn {
            player_move: (row, col),
            opponent_move: Some(reply),
            outcome,
        })
    }

    /// Clear the board and switch mode. The score is kept.
    pub fn new_game(&mut self, difficulty: Difficulty) {
        self.board.reset();
        self.difficulty = difficulty;
        self.phase = Phase::AwaitingPlayerMove;
        info!(%difficulty, "new game");
    }

    /// Clear the board keeping the current mode.
    pub fn play_again(&mut self) {
        self.new_game(self.difficulty);
    }

    fn advance(&mut self, next: Phase) -> GameOutcome {
        let outcome = self.outcome();
        if outcome.is_terminal() {
            self.scores.record(outcome);
            self.phase = Phase::GameOver(outcome);
            info!(%outcome, "game over");
        } else {
            self.phase = next;
        }
        outcome
    }
}
