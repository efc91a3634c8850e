use std::path::PathBuf;
use std::process;

use chessformer::chess::piece::PieceKind;
use chessformer::chess::rules::Rules;
use chessformer::scenario::loader::load_puzzle;
use chessformer::scenario::{AllCaptured, GoalLike, Puzzle};
use chessformer::scenarios;
use chessformer::solution::{encode_square, read_solution_file, replay, Solution};
use clap::Parser;

#[derive(Debug, Parser)]
#[command(name = "play_solution", about = "Replay a move string on a Chessformer board")]
struct Args {
    /// Board file (one row per line)
    board: Option<PathBuf>,

    /// Use a built-in puzzle instead of a board file
    #[arg(long, conflicts_with = "board")]
    builtin: Option<String>,

    /// Piece the player moves as: king, queen, rook, bishop or knight
    #[arg(long)]
    piece: Option<PieceKind>,

    /// Move string such as "b1c3"
    #[arg(long, conflicts_with = "file")]
    moves: Option<String>,

    /// Read the move string from a solution file
    #[arg(long, default_value = "solution.txt")]
    file: PathBuf,
}

fn load(args: &Args) -> Result<Puzzle, String> {
    if let Some(name) = &args.builtin {
        let mut puzzle = scenarios::by_name(name)
            .map_err(|e| e.to_string())?
            .ok_or_else(|| format!("unknown built-in {name:?}"))?;
        if let Some(piece) = args.piece {
            puzzle.piece = piece;
        }
        return Ok(puzzle);
    }
    let Some(path) = &args.board else {
        return Err("expected a board file or --builtin <name>".to_string());
    };
    load_puzzle(path, args.piece.unwrap_or_default()).map_err(|e| e.to_string())
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let puzzle = match load(&args) {
        Ok(p) => p,
        Err(e) => {
            eprintln!("Failed to load puzzle: {e}");
            process::exit(2);
        }
    };

    let solution = match &args.moves {
        Some(s) => Solution::parse(s),
        None => read_solution_file(&args.file),
    };
    let solution = match solution {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Failed to read solution: {e}");
            process::exit(2);
        }
    };

    let frames = match replay(&puzzle.board, &Rules::new(puzzle.piece), &solution) {
        Ok(f) => f,
        Err(e) => {
            eprintln!("{e}");
            process::exit(1);
        }
    };

    for (i, frame) in frames.iter().enumerate() {
        if i == 0 {
            println!("Start ({} moves):", solution.len());
        } else {
            let [col, row] = encode_square(solution.moves()[i - 1]);
            println!("Move {i}: {}{}", col as char, row as char);
        }
        println!("{frame}");
        println!();
    }

    let solved = frames.last().map_or(false, |b| AllCaptured.is_goal(b));
    println!("{}", if solved { "Solved." } else { "Pieces remain." });
    if !solved {
        process::exit(1);
    }
}
