//! Solutions: reconstruction from the search tree, the two-character move notation, replay, and
//! result files.
//!
//! A move is written as its destination square: the column as a letter (`a` is column 1) followed
//! by the row as a digit (`1` is row 1). A solution is the concatenation of its moves, oldest
//! first, e.g. `"b1c3"`.

pub mod report;

use std::fmt;
use std::fs;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::core::board::{Board, MAX_HEIGHT, MAX_WIDTH};
use crate::core::coord::Coord;
use crate::scenario::{MovesLike, SearchError};
use crate::search::node::{NodeArena, NodeId};

pub use report::{read_report, write_report, SearchReport};

/// Default result file written by the `solve` binary.
pub const SOLUTION_FILENAME: &str = "solution.txt";

/// Destination squares from the start position to the goal, oldest first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Solution {
    moves: Vec<Coord>,
}

impl Solution {
    pub fn new(moves: Vec<Coord>) -> Self {
        Self { moves }
    }

    pub fn moves(&self) -> &[Coord] {
        &self.moves
    }

    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Decode a move string such as `"b1c3"`.
    pub fn parse(s: &str) -> Result<Self, SearchError> {
        let bytes = s.trim().as_bytes();
        if bytes.len() % 2 != 0 {
            return Err(SearchError::InvalidSolution {
                reason: format!("move string has odd length {}", bytes.len()),
            });
        }

        let moves = bytes
            .chunks(2)
            .enumerate()
            .map(|(i, pair)| {
                decode_square(pair[0], pair[1]).ok_or_else(|| SearchError::InvalidSolution {
                    reason: format!(
                        "move {} {:?} is not a square",
                        i + 1,
                        String::from_utf8_lossy(pair)
                    ),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { moves })
    }
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &m in &self.moves {
            let [col, row] = encode_square(m);
            write!(f, "{}{}", col as char, row as char)?;
        }
        Ok(())
    }
}

/// Column letter and row digit for a 1-indexed square.
#[inline]
pub fn encode_square(c: Coord) -> [u8; 2] {
    [(b'`' as i32 + c.x) as u8, (b'0' as i32 + c.y) as u8]
}

#[inline]
pub fn decode_square(col: u8, row: u8) -> Option<Coord> {
    let x = col.checked_sub(b'`')? as usize;
    let y = row.checked_sub(b'0')? as usize;
    if (1..=MAX_WIDTH).contains(&x) && (1..=MAX_HEIGHT).contains(&y) {
        Some(Coord::new(x as i32, y as i32))
    } else {
        None
    }
}

/// Rebuild the move list ending at `goal` by walking parent links.
///
/// The walk runs goal-to-root; each move is written at its absolute index so the result reads
/// root-to-goal. A move's destination is its parent's player square plus the node's delta.
pub fn encode_path(arena: &NodeArena, goal: NodeId) -> Result<Solution, SearchError> {
    let chain_len = arena.ancestry(goal).count();
    if chain_len == 0 {
        return Err(SearchError::DanglingNode { id: goal });
    }

    let mut moves = vec![Coord::ORIGIN; chain_len - 1];
    let mut left = moves.len();
    for (_, node) in arena.ancestry(goal) {
        let Some(parent_id) = node.parent() else {
            continue;
        };
        let parent = arena
            .get(parent_id)
            .ok_or(SearchError::DanglingNode { id: parent_id })?;
        left -= 1;
        moves[left] = parent.board().player() + node.delta();
    }

    Ok(Solution { moves })
}

/// Apply `solution` from `start`, returning every frame including the start board.
pub fn replay<M: MovesLike>(
    start: &Board,
    rules: &M,
    solution: &Solution,
) -> Result<Vec<Board>, SearchError> {
    let mut frames = Vec::with_capacity(solution.len() + 1);
    let mut board = start.clone();
    frames.push(board.clone());

    for (i, &dest) in solution.moves().iter().enumerate() {
        let delta = dest - board.player();
        if !rules.attempt_move(&mut board, delta) {
            return Err(SearchError::InvalidSolution {
                reason: format!(
                    "move {} to {dest} is not legal from {}",
                    i + 1,
                    board.player()
                ),
            });
        }
        frames.push(board.clone());
    }

    Ok(frames)
}

/// Write the move string as a single line.
pub fn write_solution_file(path: &Path, solution: &Solution) -> Result<(), SearchError> {
    let f = fs::File::create(path).map_err(|e| SearchError::Io {
        stage: "solution_file_create",
        path: path.display().to_string(),
        error: e.to_string(),
    })?;
    let mut w = BufWriter::new(f);
    writeln!(w, "{solution}").map_err(|e| SearchError::Io {
        stage: "solution_file_write",
        path: path.display().to_string(),
        error: e.to_string(),
    })?;
    w.flush().map_err(|e| SearchError::Io {
        stage: "solution_file_flush",
        path: path.display().to_string(),
        error: e.to_string(),
    })
}

pub fn read_solution_file(path: &Path) -> Result<Solution, SearchError> {
    let text = fs::read_to_string(path).map_err(|e| SearchError::Io {
        stage: "solution_file_read",
        path: path.display().to_string(),
        error: e.to_string(),
    })?;
    Solution::parse(text.lines().next().unwrap_or(""))
}
