//! Line-based text protocol for driving a [`Session`].
//!
//! The protocol follows the shape of GTP: one command per line, an optional
//! numeric id prefix, and responses of the form `=[id] message` on success or
//! `?[id] message` on failure, each followed by a blank line. Blank lines and
//! `#` comments are ignored.
//!
//! ## Supported Commands
//!
//! - `name` - Return engine name
//! - `version` - Return engine version
//! - `protocol_version` - Return protocol version (1)
//! - `list_commands` - List all supported commands
//! - `known_command <cmd>` - Check if a command is supported
//! - `quit` - Exit the loop
//! - `new [easy|hard]` - Start a new game, optionally switching difficulty
//! - `again` - Start a new game with the same difficulty
//! - `play <row> <col>` - Play the human's move; replies `<outcome> [<row> <col>]`
//!   with the opponent's reply cell when it moved
//! - `showboard` - Print the board
//! - `status` - Print the game state as a message for the human
//! - `score` - Print wins, losses and draws
//! - `difficulty` - Print the current difficulty
//!
//! ## Example
//!
//! ```
//! use tictactoe_rust::protocol::Engine;
//! use tictactoe_rust::selector::Difficulty;
//!
//! let mut engine = Engine::with_seed(Difficulty::Hard, 1);
//! let mut out = Vec::new();
//! engine.run_with("play 0 0\nquit\n".as_bytes(), &mut out).unwrap();
//! let out = String::from_utf8(out).unwrap();
//! assert!(out.contains("= in_progress 1 1"));
//! ```

use std::io::{self, BufRead, Write};

use tracing::warn;

use crate::selector::Difficulty;
use crate::session::Session;

/// The list of known commands.
const KNOWN_COMMANDS: &[&str] = &[
    "again",
    "difficulty",
    "known_command",
    "list_commands",
    "name",
    "new",
    "play",
    "protocol_version",
    "quit",
    "score",
    "showboard",
    "status",
    "version",
];

/// Protocol engine state.
pub struct Engine {
    session: Session,
}

impl Engine {
    pub fn new(difficulty: Difficulty) -> Self {
        Self {
            session: Session::new(difficulty),
        }
    }

    /// Engine whose Easy-mode replies are reproducible.
    pub fn with_seed(difficulty: Difficulty, seed: u64) -> Self {
        Self {
            session: Session::with_seed(difficulty, seed),
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Run the command loop on stdin and stdout.
    pub fn run(&mut self) -> io::Result<()> {
        let stdin = io::stdin();
        let stdout = io::stdout();
        self.run_with(stdin.lock(), stdout.lock())
    }

    /// Run the command loop until `quit` or end of input.
    pub fn run_with<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> io::Result<()> {
        for line in input.lines() {
            let line = line?;

            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let (id, command_line) = Self::parse_id(line);

            let parts: Vec<&str> = command_line.split_whitespace().collect();
            let Some((command, args)) = parts.split_first() else {
                continue;
            };
            let command = command.to_lowercase();

            let (success, message) = self.execute(&command, args);
            if !success {
                warn!(%command, %message, "command failed");
            }

            let prefix = if success { '=' } else { '?' };
            let id_str = id.map(|i| i.to_string()).unwrap_or_default();
            writeln!(output, "{prefix}{id_str} {message}\n")?;
            output.flush()?;

            if command == "quit" {
                break;
            }
        }
        Ok(())
    }

    /// Split an optional numeric command id from the front of the line.
    fn parse_id(line: &str) -> (Option<u32>, &str) {
        let trimmed = line.trim();
        let end = trimmed
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(trimmed.len());
        if end == 0 {
            return (None, trimmed);
        }
        match trimmed[..end].parse::<u32>() {
            Ok(id) => (Some(id), trimmed[end..].trim()),
            Err(_) => (None, trimmed),
        }
    }

    /// Execute a command and return (success, response).
    fn execute(&mut self, command: &str, args: &[&str]) -> (bool, String) {
        match command {
            "name" => (true, env!("CARGO_PKG_NAME").to_string()),

            "version" => (true, env!("CARGO_PKG_VERSION").to_string()),

            "protocol_version" => (true, "1".to_string()),

            "list_commands" => (true, KNOWN_COMMANDS.join("\n")),

            "known_command" => {
                let Some(cmd) = args.first() else {
                    return (false, "missing argument".to_string());
                };
                let known = KNOWN_COMMANDS.contains(&cmd.to_lowercase().as_str());
                (true, known.to_string())
            }

            "quit" => (true, String::new()),

            "new" => {
                let difficulty = match args.first() {
                    None => self.session.difficulty(),
                    Some(arg) => match arg.parse::<Difficulty>() {
                        Ok(d) => d,
                        Err(e) => return (false, e.to_string()),
                    },
                };
                self.session.new_game(difficulty);
                (true, String::new())
            }

            "again" => {
                self.session.play_again();
                (true, String::new())
            }

            "play" => {
                let [row, col] = args else {
                    return (false, "expected: play <row> <col>".to_string());
                };
                let (Ok(row), Ok(col)) = (row.parse::<usize>(), col.parse::<usize>()) else {
                    return (false, "invalid coordinates".to_string());
                };
                match self.session.play(row, col) {
                    Ok(turn) => match turn.opponent_move {
                        Some((r, c)) => (true, format!("{} {r} {c}", turn.outcome)),
                        None => (true, turn.outcome.to_string()),
                    },
                    Err(e) => (false, e.to_string()),
                }
            }

            "showboard" => (true, format!("\n{}", self.session.board())),

            "score" => {
                let s = self.session.scores();
                (
                    true,
                    format!(
                        "wins {} losses {} draws {}",
                        s.player_wins, s.opponent_wins, s.draws
                    ),
                )
            }

            "status" => (true, self.session.outcome().message().to_string()),

            "difficulty" => (true, self.session.difficulty().to_string()),

            _ => (false, format!("unknown command: {command}")),
        }
    }
}
