//! Line-oriented text protocol for driving a game from another program.
//!
//! The framing follows GTP version 2: an optional numeric id may prefix a
//! command, successful replies start with `=`, failures with `?`, and every
//! reply is followed by a blank line. Blank lines and `#` comments are
//! ignored.
//!
//! ## Supported Commands
//!
//! - `name` - Return program name
//! - `version` - Return program version
//! - `protocol_version` - Return protocol version (2)
//! - `list_commands` - List all supported commands
//! - `known_command <cmd>` - Check if a command is supported
//! - `quit` - Exit the loop
//! - `boardsize <size>` - Accepts only 8
//! - `clear_board` - Start a new game from the standard layout
//! - `play <color> <vertex>` - Play a move; replies with the flipped vertices
//! - `legal_moves <color>` - Legal vertices for a color, row-major
//! - `has_move <color>` - Whether a color has any legal move
//! - `is_over` - Whether neither side can move
//! - `to_move` - Side to move, or `none` when the game is over
//! - `count` - Current disc counts
//! - `final_score` - Result such as `B+8`, `W+2` or `0`
//! - `showboard` - Render the board
//!
//! ## Example
//!
//! ```
//! use othello_rules::protocol::ProtocolSession;
//!
//! let mut session = ProtocolSession::new();
//! let mut out = Vec::new();
//! session.run("1 play black D3\n".as_bytes(), &mut out).unwrap();
//! assert_eq!(String::from_utf8(out).unwrap(), "=1 D4\n\n");
//! ```

use std::io::{self, BufRead, Write};

use crate::constants::N;
use crate::game::Game;
use crate::piece::Color;
use crate::position::Pos;

/// The list of known commands.
const KNOWN_COMMANDS: &[&str] = &[
    "boardsize",
    "clear_board",
    "count",
    "final_score",
    "has_move",
    "is_over",
    "known_command",
    "legal_moves",
    "list_commands",
    "name",
    "play",
    "protocol_version",
    "quit",
    "showboard",
    "to_move",
    "version",
];

/// Protocol session state.
pub struct ProtocolSession {
    /// Current game
    game: Game,
}

impl Default for ProtocolSession {
    fn default() -> Self {
        Self::new()
    }
}

impl ProtocolSession {
    pub fn new() -> Self {
        Self { game: Game::new() }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Run the command loop until `quit` or end of input.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> io::Result<()> {
        for line in input.lines() {
            let line = line?;

            // Skip empty lines and comments
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let (id, command_line) = Self::parse_id(line);

            let parts: Vec<&str> = command_line.split_whitespace().collect();

            // An id with no command still gets an error reply
            let (command, (success, message)) = match parts.split_first() {
                Some((name, args)) => {
                    let command = name.to_lowercase();
                    let response = self.execute(&command, args);
                    (command, response)
                }
                None => (String::new(), (false, "missing command".to_string())),
            };
            let prefix = if success { '=' } else { '?' };
            let id_str = id.map(|i| i.to_string()).unwrap_or_default();

            if message.is_empty() {
                write!(output, "{prefix}{id_str}\n\n")?;
            } else {
                write!(output, "{prefix}{id_str} {message}\n\n")?;
            }
            output.flush()?;

            if command == "quit" {
                break;
            }
        }
        Ok(())
    }

    /// Parse an optional numeric command ID from the beginning of the line.
    fn parse_id(line: &str) -> (Option<u32>, &str) {
        let trimmed = line.trim();
        let end = trimmed
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(trimmed.len());

        if end > 0 {
            if let Ok(id) = trimmed[..end].parse::<u32>() {
                return (Some(id), trimmed[end..].trim());
            }
        }

        (None, trimmed)
    }

    fn color_arg(args: &[&str]) -> Result<Color, String> {
        let arg = args.first().ok_or_else(|| "missing argument".to_string())?;
        arg.parse::<Color>().map_err(|_| "invalid color".to_string())
    }

    /// Execute a command and return (success, response).
    fn execute(&mut self, command: &str, args: &[&str]) -> (bool, String) {
        match command {
            "name" => (true, env!("CARGO_PKG_NAME").to_string()),

            "version" => (true, env!("CARGO_PKG_VERSION").to_string()),

            "protocol_version" => (true, "2".to_string()),

            "list_commands" => (true, KNOWN_COMMANDS.join("\n")),

            "known_command" => {
                let Some(arg) = args.first() else {
                    return (false, "missing argument".to_string());
                };
                let known = KNOWN_COMMANDS.contains(&arg.to_lowercase().as_str());
                (true, known.to_string())
            }

            "quit" => (true, String::new()),

            "boardsize" => {
                let Some(arg) = args.first() else {
                    return (false, "missing argument".to_string());
                };
                match arg.parse::<usize>() {
                    Ok(size) if size == N => (true, String::new()),
                    Ok(size) => (
                        false,
                        format!("unacceptable size, only {N} is supported (got {size})"),
                    ),
                    Err(_) => (false, "invalid size".to_string()),
                }
            }

            "clear_board" => {
                self.game = Game::new();
                (true, String::new())
            }

            "play" => {
                if args.len() < 2 {
                    return (false, "missing arguments".to_string());
                }
                let color = match Self::color_arg(args) {
                    Ok(c) => c,
                    Err(e) => return (false, e),
                };
                let Ok(pos) = args[1].parse::<Pos>() else {
                    return (false, "invalid vertex".to_string());
                };
                match self.game.play_as(color, pos) {
                    Ok(turn) => (true, join_vertices(&turn.flipped)),
                    Err(_) => (false, "illegal move".to_string()),
                }
            }

            "legal_moves" => match Self::color_arg(args) {
                Ok(color) => (true, join_vertices(&self.game.board().valid_moves(color))),
                Err(e) => (false, e),
            },

            "has_move" => match Self::color_arg(args) {
                Ok(color) => (true, self.game.board().has_move(color).to_string()),
                Err(e) => (false, e),
            },

            "is_over" => (true, self.game.is_over().to_string()),

            "to_move" => match self.game.to_move() {
                Some(color) => (true, color.to_string()),
                None => (true, "none".to_string()),
            },

            "count" => {
                let score = self.game.score();
                (true, format!("black {} white {}", score.black, score.white))
            }

            "final_score" => match self.game.outcome() {
                Some(outcome) => {
                    let result = match outcome.winner() {
                        Some(Color::Black) => format!("B+{}", outcome.black - outcome.white),
                        Some(Color::White) => format!("W+{}", outcome.white - outcome.black),
                        None => "0".to_string(),
                    };
                    (true, result)
                }
                None => (false, "game not over".to_string()),
            },

            "showboard" => (true, format!("\n{}", self.game.board()).trim_end().to_string()),

            _ => (false, format!("unknown command: {command}")),
        }
    }
}

fn join_vertices(positions: &[Pos]) -> String {
    positions
        .iter()
        .map(|p| p.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}
