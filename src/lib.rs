//! Breadth-first solver for Chessformer, a single-player capture puzzle.
//!
//! The player moves like a chess piece across a walled board and must capture every `$`. The
//! solver explores distinct board configurations in FIFO order and returns a shortest move
//! sequence, written two characters per move (`"b1c3"`).

pub mod chess;
pub mod core;
pub mod scenario;
pub mod scenarios;
pub mod search;
pub mod solution;
