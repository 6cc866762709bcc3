//! Othello-Rules: command-line front end.
//!
//! ## Usage
//!
//! - `othello-rules` - Show a demo
//! - `othello-rules protocol` - Speak the text protocol on stdin/stdout
//! - `othello-rules play` - Two players enter moves at the terminal
//! - `othello-rules demo` - Play through a game taking the first legal move

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use othello_rules::game::Game;
use othello_rules::piece::Color;
use othello_rules::position::{Pos, str_coord};
use othello_rules::protocol::ProtocolSession;

/// Othello-Rules: move legality and captures for 8x8 Othello
#[derive(Parser)]
#[command(name = "othello-rules")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the line-oriented text protocol for use by other programs
    Protocol,
    /// Play a game between two people at the terminal
    Play,
    /// Run a short demo of the rules
    Demo,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Protocol) => {
            let stdin = io::stdin();
            let mut session = ProtocolSession::new();
            session
                .run(stdin.lock(), io::stdout())
                .context("protocol session failed")
        }
        Some(Commands::Play) => run_play(),
        Some(Commands::Demo) | None => {
            run_demo();
            Ok(())
        }
    }
}

fn run_play() -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut game = Game::new();
    let mut lines = stdin.lock().lines();

    while let Some(color) = game.to_move() {
        println!("{}", game.board());
        print!("{color} to move: ");
        stdout.flush().context("failed to flush stdout")?;

        let Some(line) = lines.next() else {
            return Ok(());
        };
        let line = line.context("failed to read move")?;
        let input = line.trim();
        if input.eq_ignore_ascii_case("quit") {
            return Ok(());
        }

        let pos = match input.parse::<Pos>() {
            Ok(pos) => pos,
            Err(e) => {
                eprintln!("{e}");
                continue;
            }
        };
        match game.play(pos) {
            Ok(turn) if turn.opponent_passed => {
                println!("{} has no legal move and passes", !turn.color);
            }
            Ok(_) => {}
            Err(e) => eprintln!("{e}"),
        }
    }

    println!("{}", game.board());
    print_outcome(&game);
    Ok(())
}

fn run_demo() {
    println!("Othello-Rules: 8x8 Othello move rules\n");

    let mut game = Game::new();
    println!("=== Opening ===");
    println!("{}", game.board());
    for color in [Color::Black, Color::White] {
        let moves: Vec<String> = game
            .board()
            .valid_moves(color)
            .into_iter()
            .map(str_coord)
            .collect();
        println!("{color} may play: {}", moves.join(" "));
    }

    println!("\n=== First-legal-move playthrough ===");
    while let Some(color) = game.to_move() {
        let Some(&pos) = game.board().valid_moves(color).first() else {
            break;
        };
        match game.play(pos) {
            Ok(turn) => println!(
                "{:>3}. {color} {} flips {}",
                game.history().len(),
                str_coord(pos),
                turn.flipped.len()
            ),
            Err(e) => {
                eprintln!("{e}");
                break;
            }
        }
    }

    println!("\n{}", game.board());
    print_outcome(&game);
}

fn print_outcome(game: &Game) {
    let score = game.score();
    println!("Black {} - White {}", score.black, score.white);
    match score.winner() {
        Some(color) => println!("Winner: {color}"),
        None => println!("Draw"),
    }
}
