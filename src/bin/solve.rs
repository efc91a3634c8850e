use std::path::PathBuf;
use std::process;

use chessformer::chess::piece::PieceKind;
use chessformer::chess::rules::Rules;
use chessformer::scenario::loader::load_puzzle;
use chessformer::scenario::{Puzzle, ResourceLimits, SearchConfig};
use chessformer::scenarios;
use chessformer::search::solve_puzzle;
use chessformer::solution::{replay, write_report, write_solution_file, SearchReport};
use clap::Parser;

#[derive(Debug, Parser)]
#[command(name = "solve", about = "Breadth-first solver for Chessformer capture puzzles")]
struct Args {
    /// Board file (one row per line)
    board: Option<PathBuf>,

    /// Solve a built-in puzzle instead of a board file
    #[arg(long, conflicts_with = "board")]
    builtin: Option<String>,

    /// List the built-in puzzles and exit
    #[arg(long)]
    list: bool,

    /// Piece the player moves as: king, queen, rook, bishop or knight
    /// (built-ins default to their own piece, files to queen)
    #[arg(long)]
    piece: Option<PieceKind>,

    /// Keep every generated child, even if its board was seen before
    #[arg(long)]
    no_dedup: bool,

    /// Print every board along the solution
    #[arg(long)]
    play: bool,

    /// Solution file path
    #[arg(long, default_value = "solution.txt")]
    out: PathBuf,

    /// Also write a JSON run report here
    #[arg(long)]
    report: Option<PathBuf>,

    #[arg(long)]
    max_nodes: Option<usize>,

    #[arg(long)]
    max_visited: Option<usize>,

    #[arg(long)]
    max_expansions: Option<u64>,
}

fn load(args: &Args) -> Result<Puzzle, String> {
    let piece = args.piece;

    if let Some(name) = &args.builtin {
        let mut puzzle = scenarios::by_name(name)
            .map_err(|e| e.to_string())?
            .ok_or_else(|| {
                format!(
                    "unknown built-in {name:?} (available: {})",
                    scenarios::available_names().join(", ")
                )
            })?;
        if let Some(piece) = piece {
            puzzle.piece = piece;
        }
        return Ok(puzzle);
    }

    let Some(path) = &args.board else {
        return Err("expected a board file or --builtin <name>".to_string());
    };
    load_puzzle(path, piece.unwrap_or_default()).map_err(|e| e.to_string())
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    if args.list {
        for name in scenarios::available_names() {
            println!("{name}");
        }
        return;
    }

    let puzzle = match load(&args) {
        Ok(p) => p,
        Err(e) => {
            eprintln!("Failed to load puzzle: {e}");
            process::exit(2);
        }
    };

    let mut limits = ResourceLimits::default();
    if let Some(v) = args.max_nodes {
        limits.max_nodes = v;
    }
    if let Some(v) = args.max_visited {
        limits.max_visited = v;
    }
    if let Some(v) = args.max_expansions {
        limits.max_expansions = v;
    }
    let config = SearchConfig {
        dedup: !args.no_dedup,
        limits,
        ..SearchConfig::default()
    };

    println!(
        "Puzzle {} ({}x{}, {} to capture, player moves as {})",
        puzzle.name,
        puzzle.board.width(),
        puzzle.board.height(),
        puzzle.capturable(),
        puzzle.piece
    );
    println!("{}", puzzle.board);
    println!();

    let outcome = match solve_puzzle(&puzzle, config) {
        Ok(o) => o,
        Err(e) => {
            eprintln!("Search failed: {e}");
            process::exit(1);
        }
    };

    match &outcome.solution {
        Some(solution) => {
            println!("SOLUTION:");
            println!("{solution}");

            // The result file is best-effort; the solution has already been printed.
            if let Err(e) = write_solution_file(&args.out, solution) {
                eprintln!("Could not write solution file: {e}");
            }

            if args.play {
                match replay(&puzzle.board, &Rules::new(puzzle.piece), solution) {
                    Ok(frames) => {
                        for (i, frame) in frames.iter().enumerate() {
                            println!();
                            println!("Move {i}:");
                            println!("{frame}");
                        }
                    }
                    Err(e) => eprintln!("Replay failed: {e}"),
                }
            }
        }
        None => println!("No solution found."),
    }

    let stats = &outcome.stats;
    println!();
    println!("STATS:");
    println!("\tExpanded nodes: {}", stats.expanded);
    println!("\tGenerated nodes: {}", stats.generated);
    println!("\tDuplicated nodes: {}", stats.duplicates);
    println!("\tSolution Length: {}", stats.solution_len);
    println!("\tExpanded/seconds: {:.0}", stats.expanded_per_sec());
    println!("\tTime (seconds): {:.6}", stats.elapsed_secs);

    if let Some(path) = &args.report {
        let report = SearchReport::new(&puzzle, &config, &outcome);
        if let Err(e) = write_report(path, &report) {
            eprintln!("Could not write report: {e}");
            process::exit(1);
        }
    }
}
