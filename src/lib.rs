//! Tictactoe-Rust: a Tic-Tac-Toe engine with an Easy and a Hard opponent.
//!
//! The human plays `X` and always moves first. The automated player answers
//! either with a random empty cell (Easy) or with the result of an exhaustive
//! minimax search (Hard), which never loses.
//!
//! ## Modules
//!
//! - [`constants`] - Board geometry, winning lines, and search scores
//! - [`board`] - Board state, move placement, and outcome detection
//! - [`minimax`] - Exhaustive adversarial search (Hard mode)
//! - [`playout`] - Random move choice (Easy mode)
//! - [`selector`] - Difficulty and move selection for the automated player
//! - [`session`] - Turn order, game lifecycle, and score keeping
//! - [`protocol`] - Line-based text protocol over a session
//!
//! ## Example
//!
//! ```
//! use tictactoe_rust::board::GameOutcome;
//! use tictactoe_rust::selector::Difficulty;
//! use tictactoe_rust::session::Session;
//!
//! let mut session = Session::new(Difficulty::Hard);
//! let turn = session.play(1, 1).unwrap();
//! assert_eq!(turn.outcome, GameOutcome::InProgress);
//! assert!(turn.opponent_move.is_some());
//! ```

pub mod board;
pub mod constants;
pub mod minimax;
pub mod playout;
pub mod protocol;
pub mod selector;
pub mod session;
