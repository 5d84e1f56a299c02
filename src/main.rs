//! Tengen: a persona-driven Go move engine.
//!
//! ## Usage
//!
//! - `tengen demo` - Show each persona's decision on a sample position
//! - `tengen play` - Read a SimpleBoard from stdin and print the chosen play

use std::io::Read;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use flexi_logger::Logger;

use tengen::board::{Board, Color};
use tengen::engine::{get_move, get_move_from_simple};
use tengen::hooks::{FastRng, NoPacer};
use tengen::persona::Opponent;
use tengen::rules::{BoardState, Play};

/// Tengen: a persona-driven Go move engine
#[derive(Parser)]
#[command(name = "tengen")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Log specification, e.g. "debug" (overrides RUST_LOG)
    #[arg(long, global = true)]
    log: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Read a SimpleBoard from stdin (one column per line) and print a play
    Play {
        /// Opponent persona, e.g. "Illuminati" or "Slum Snakes"
        #[arg(long, default_value = "Illuminati")]
        opponent: String,
        /// Side to move: black or white
        #[arg(long, default_value = "black")]
        player: String,
        /// Seed for reproducible runs
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Show each persona's decision on a sample position
    Demo {
        /// Seed for reproducible runs
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let _logger = Logger::try_with_env_or_str(cli.log.as_deref().unwrap_or("info"))?
        .log_to_stderr()
        .start()?;

    match cli.command {
        Some(Commands::Play {
            opponent,
            player,
            seed,
        }) => run_play(&opponent, &player, seed),
        Some(Commands::Demo { seed }) => run_demo(seed),
        None => run_demo(None),
    }
}

fn parse_player(name: &str) -> Result<Color> {
    match name.to_lowercase().as_str() {
        "black" | "x" => Ok(Color::Black),
        "white" | "o" => Ok(Color::White),
        other => bail!("unknown player color: {other}"),
    }
}

fn rng_from_seed(seed: Option<u64>) -> FastRng {
    match seed {
        Some(seed) => FastRng::seeded(seed),
        None => FastRng::new(),
    }
}

/// Validate a SimpleBoard read from the outside world. The engine itself is
/// total over malformed input, so the checks live here at the boundary.
fn validate_columns(columns: &[String]) -> Result<()> {
    let size = columns.len();
    if !(2..=19).contains(&size) {
        bail!("board size must be between 2 and 19, got {size}");
    }
    for (index, column) in columns.iter().enumerate() {
        if column.chars().count() != size {
            bail!(
                "board is not square: column {index} has {} cells, expected {size}",
                column.chars().count()
            );
        }
        if let Some(bad) = column.chars().find(|c| !matches!(c, 'X' | 'O' | '.' | '#')) {
            bail!("unexpected character {bad:?} in column {index}");
        }
    }
    Ok(())
}

fn run_play(opponent: &str, player: &str, seed: Option<u64>) -> Result<()> {
    let opponent = Opponent::from_name(opponent);
    let player = parse_player(player)?;

    let mut input = String::new();
    std::io::stdin()
        .read_to_string(&mut input)
        .context("reading board from stdin")?;
    let columns: Vec<String> = input
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_owned)
        .collect();
    validate_columns(&columns)?;

    let mut rng = rng_from_seed(seed);
    let play = get_move_from_simple(&columns, opponent, player, &mut rng, &mut NoPacer);
    println!("{}", describe(play));
    Ok(())
}

fn run_demo(seed: Option<u64>) -> Result<()> {
    let sample = ["X.O..", ".XO..", "..X..", "...O.", "....."];
    let board = Board::from_simple(&sample);
    println!("Sample position, Black to move:\n\n{board}");

    let mut rng = rng_from_seed(seed);
    for opponent in [
        Opponent::Netburners,
        Opponent::SlumSnakes,
        Opponent::TheBlackHand,
        Opponent::Tetrads,
        Opponent::Daedalus,
        Opponent::Illuminati,
    ] {
        let state = BoardState::from_simple(&sample, opponent, Color::Black);
        let play = get_move(&state, Color::Black, opponent, &mut rng, &mut NoPacer);
        println!("{:>14}: {}", opponent.name(), describe(play));
    }
    Ok(())
}

fn describe(play: Play) -> String {
    match play {
        Play::Move { x, y } => format!("move {x},{y}"),
        Play::Pass => "pass".to_string(),
        Play::GameOver => "game over".to_string(),
    }
}
