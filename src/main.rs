//! N-Puzzle Heuristic CLI
//!
//! Evaluates admissible heuristics for sliding-tile puzzle boards. Boards
//! are passed as flat, row-major, comma-separated cell lists where 0 marks
//! the blank. The `build` subcommand constructs the Walking Distance
//! pattern database on its own and reports its size, which is useful for
//! capacity planning before pointing a solver at larger boards.

use clap::{Parser, Subcommand};

use tilebound::registry::{self, Registry};
use tilebound::walking::WdDatabase;
use tilebound::{Error, PuzzleState};

/// Computes admissible distance estimates for N-puzzle boards.
#[derive(Parser)]
#[command(name = "tilebound")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Evaluate heuristics for a board configuration.
    Eval {
        /// Flat row-major cells, comma separated; 0 is the blank.
        #[arg(long)]
        board: String,
        /// Board width in cells.
        #[arg(long, default_value_t = 3)]
        width: usize,
        /// Board height in cells.
        #[arg(long, default_value_t = 3)]
        height: usize,
        /// Comma-separated heuristic codes to evaluate.
        #[arg(long, default_value = "hd,md,mc,wd")]
        heuristics: String,
    },
    /// List the available heuristics.
    List,
    /// Build the Walking Distance database and print its statistics.
    Build {
        /// Board width (square boards only).
        #[arg(long, default_value_t = 3)]
        width: usize,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Command::Eval {
            board,
            width,
            height,
            heuristics,
        } => run_eval(&board, width, height, &heuristics),
        Command::List => {
            print!("{}", format_listing());
            Ok(())
        }
        Command::Build { width } => run_build(width),
    };

    if let Err(e) = result {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

/// Evaluates each requested heuristic against one board.
fn run_eval(board: &str, width: usize, height: usize, heuristics: &str) -> Result<(), Error> {
    let cells = parse_board(board)?;
    let state = PuzzleState::new(width, height, cells)?;

    println!("board: {}x{}", width, height);
    println!("solvable: {}", state.is_solvable());

    let mut registry = Registry::new();
    for code in heuristics.split(',').map(str::trim).filter(|c| !c.is_empty()) {
        let heuristic = registry.heuristic(code, width, height)?;
        let value = heuristic.calculate(&state)?;
        println!("{:<4} {:<42} {}", heuristic.abbreviation(), heuristic.name(), value);
    }

    Ok(())
}

/// Parses a comma-separated cell list.
fn parse_board(board: &str) -> Result<Vec<u16>, Error> {
    board
        .split(',')
        .map(str::trim)
        .map(|token| {
            token.parse::<u16>().map_err(|_| Error::MalformedBoard {
                reason: format!("invalid cell value '{}'", token),
            })
        })
        .collect()
}

/// Formats the heuristic metadata table.
fn format_listing() -> String {
    let mut output = String::new();
    for info in registry::available() {
        output.push_str(&format!(
            "{:<4} {:<42} {}\n",
            info.abbreviation, info.name, info.description
        ));
    }
    output
}

/// Builds the database for one width and prints its statistics.
fn run_build(width: usize) -> Result<(), Error> {
    let database = WdDatabase::build(width)?;
    println!("width: {}", database.width());
    println!("entries: {}", database.len());
    println!("max distance: {}", database.max_distance());
    println!("build time: {:.2?}", database.build_time());
    Ok(())
}
