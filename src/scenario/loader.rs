//! Board file loading.
//!
//! A board file is plain text, one board row per line, using the alphabet in
//! [`crate::core::cell`]. Rows shorter than the widest one are padded with floor; trailing blank
//! lines are ignored.

use std::fs;
use std::path::Path;

use crate::chess::piece::PieceKind;
use crate::core::board::Board;
use crate::core::cell;
use crate::scenario::{Puzzle, SearchError};

/// Parse board text into a [`Board`].
pub fn parse_board(text: &str) -> Result<Board, SearchError> {
    let mut lines: Vec<&str> = text
        .split('\n')
        .map(|l| l.strip_suffix('\r').unwrap_or(l))
        .collect();
    while lines.last().map_or(false, |l| l.is_empty()) {
        lines.pop();
    }

    if lines.is_empty() {
        return Err(SearchError::InvalidBoard {
            reason: "board text is empty".to_string(),
        });
    }

    // Reject non-ASCII up front so byte widths equal column counts.
    for (row, line) in lines.iter().enumerate() {
        if let Some((col, ch)) = line.chars().enumerate().find(|(_, ch)| !ch.is_ascii()) {
            return Err(SearchError::InvalidBoard {
                reason: format!("unknown cell {ch:?} at line {}, column {}", row + 1, col + 1),
            });
        }
    }

    let width = lines.iter().map(|l| l.len()).max().unwrap_or(0);
    let height = lines.len();

    let mut cells = Vec::with_capacity(width * height);
    for line in &lines {
        cells.extend_from_slice(line.as_bytes());
        cells.resize(cells.len() + (width - line.len()), cell::FLOOR);
    }

    Board::new(width, height, cells)
}

/// Read and parse a board file. The puzzle is named after the file stem.
pub fn load_puzzle(path: &Path, piece: PieceKind) -> Result<Puzzle, SearchError> {
    let text = fs::read_to_string(path).map_err(|e| SearchError::Io {
        stage: "board_load_read",
        path: path.display().to_string(),
        error: e.to_string(),
    })?;

    let board = parse_board(&text)?;
    let name = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    log::debug!(
        "loaded {name}: {}x{} board, {} capturable pieces",
        board.width(),
        board.height(),
        board.remaining_pieces()
    );

    Ok(Puzzle::new(name, board, piece))
}
