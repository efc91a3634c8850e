//! Built-in puzzles (compile-time boards).

use crate::chess::piece::PieceKind;
use crate::scenario::loader::parse_board;
use crate::scenario::{Puzzle, SearchError};

fn puzzle_from_rows(name: &str, piece: PieceKind, rows: &[&str]) -> Result<Puzzle, SearchError> {
    let board = parse_board(&rows.join("\n"))?;
    Ok(Puzzle::new(name, board, piece))
}

/// One row, one slide: the smallest solvable board.
pub fn capture_one() -> Result<Puzzle, SearchError> {
    puzzle_from_rows("capture_one", PieceKind::Queen, &["@$"])
}

/// The only piece sits behind a wall.
pub fn walled_off() -> Result<Puzzle, SearchError> {
    puzzle_from_rows("walled_off", PieceKind::Queen, &["@#$"])
}

/// Open 3x3 board with the piece in the far corner; many move orders meet again.
pub fn open_corner() -> Result<Puzzle, SearchError> {
    puzzle_from_rows("open_corner", PieceKind::Queen, &["@  ", "   ", "  $"])
}

/// A rook corridor where the first piece screens the second.
pub fn corridor() -> Result<Puzzle, SearchError> {
    puzzle_from_rows(
        "corridor",
        PieceKind::Rook,
        &["#######", "#@ $ $#", "#######"],
    )
}

/// King steps over a storage square.
pub fn storage_step() -> Result<Puzzle, SearchError> {
    puzzle_from_rows("storage_step", PieceKind::King, &["@.$"])
}

pub fn knight_hop() -> Result<Puzzle, SearchError> {
    puzzle_from_rows("knight_hop", PieceKind::Knight, &["@  ", "  $", "   "])
}

/// A walled queen demo with three pieces and a secured piece in the way.
pub fn crossroads() -> Result<Puzzle, SearchError> {
    puzzle_from_rows(
        "crossroads",
        PieceKind::Queen,
        &["#######", "#@  *$#", "# ## .#", "#$  .$#", "#######"],
    )
}

/// Return a puzzle by name.
pub fn by_name(name: &str) -> Result<Option<Puzzle>, SearchError> {
    match name {
        "capture_one" => Ok(Some(capture_one()?)),
        "walled_off" => Ok(Some(walled_off()?)),
        "open_corner" => Ok(Some(open_corner()?)),
        "corridor" => Ok(Some(corridor()?)),
        "storage_step" => Ok(Some(storage_step()?)),
        "knight_hop" => Ok(Some(knight_hop()?)),
        "crossroads" => Ok(Some(crossroads()?)),
        _ => Ok(None),
    }
}

/// Names of all built-in puzzles.
pub fn available_names() -> &'static [&'static str] {
    &[
        "capture_one",
        "walled_off",
        "open_corner",
        "corridor",
        "storage_step",
        "knight_hop",
        "crossroads",
    ]
}
