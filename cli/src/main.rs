use std::io::{self, BufRead, Write};

use anyhow::{Context, bail};
use clap::Parser;
use minegrid_core::{Coord, Coord2, Difficulty, GameEngine, GameError, RevealResult};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    /// beginner, intermediate or advanced (or 0, 1, 2)
    #[arg(short, long, default_value = "beginner")]
    difficulty: Difficulty,

    /// Force a seed instead of random
    #[arg(short, long)]
    seed: Option<u64>,

    /// Print the board as JSON instead of text
    #[arg(long)]
    json: bool,
}

#[derive(Copy, Clone, Debug, PartialEq)]
enum Command {
    Reveal(Coord2),
    NewGame(Option<Difficulty>),
    Help,
    Quit,
}

fn parse_command(line: &str) -> anyhow::Result<Command> {
    let mut words = line.split_whitespace();
    let Some(first) = words.next() else {
        bail!("Enter a row and a column, e.g. `3 4`");
    };

    let command = match first {
        "q" | "quit" => Command::Quit,
        "h" | "help" => Command::Help,
        "n" | "new" => Command::NewGame(words.next().map(str::parse).transpose()?),
        row => {
            let row: Coord = row.parse().with_context(|| format!("Invalid row `{row}`"))?;
            let Some(col) = words.next() else {
                bail!("Missing column after row {row}");
            };
            let col: Coord = col.parse().with_context(|| format!("Invalid column `{col}`"))?;
            Command::Reveal((row, col))
        }
    };

    if let Some(extra) = words.next() {
        bail!("Unexpected input `{extra}`");
    }
    Ok(command)
}

fn print_help() {
    println!("Commands:");
    println!("  <row> <col>     - reveal a cell (0-based)");
    println!("  n [difficulty]  - start a new game");
    println!("  h               - show this help");
    println!("  q               - quit");
}

fn print_board(engine: &GameEngine, json: bool) -> anyhow::Result<()> {
    let snapshot = engine.snapshot();
    if json {
        println!("{}", serde_json::to_string(&snapshot)?);
    } else {
        print!("{snapshot}");
    }
    Ok(())
}

fn start_game(difficulty: Difficulty, seed: u64, json: bool) -> anyhow::Result<GameEngine> {
    log::debug!("Starting {difficulty} game with seed {seed}");
    let engine = GameEngine::new_game(difficulty, seed);
    print_board(&engine, json)?;
    Ok(engine)
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    tracing_subscriber::fmt()
        .with_max_level(args.verbose.tracing_level_filter())
        .with_writer(io::stderr)
        .init();

    let mut difficulty = args.difficulty;
    let mut engine = start_game(difficulty, args.seed.unwrap_or_else(rand::random), args.json)?;
    print_help();

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("> ");
        io::stdout().flush().context("failed to flush stdout")?;

        let Some(line) = lines.next() else {
            break;
        };
        let line = line.context("failed to read move")?;

        let command = match parse_command(&line) {
            Ok(command) => command,
            Err(err) => {
                println!("{err:#}");
                continue;
            }
        };

        match command {
            Command::Quit => break,
            Command::Help => print_help(),
            Command::NewGame(next) => {
                difficulty = next.unwrap_or(difficulty);
                engine = start_game(difficulty, rand::random(), args.json)?;
            }
            Command::Reveal(coords) => match engine.reveal(coords) {
                Ok(RevealResult::InProgress { disclosed }) => {
                    log::debug!("{disclosed} cells disclosed");
                    print_board(&engine, args.json)?;
                }
                Ok(RevealResult::Won) => {
                    print_board(&engine, args.json)?;
                    println!("You won :). Game over!");
                }
                Ok(RevealResult::Lost) => {
                    print_board(&engine, args.json)?;
                    println!("You lost :(. Game over!");
                }
                Err(GameError::AlreadyRevealed) => println!("You have already played this move."),
                Err(GameError::GameOver) => println!("Start new game! (type `n`)"),
                Err(err) => {
                    let size = engine.size();
                    println!("{err}, the board is {size}x{size}");
                }
            },
        }
    }

    Ok(())
}
