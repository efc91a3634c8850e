//! The breadth-first search engine and its bookkeeping.

pub mod bfs;
pub mod frontier;
pub mod node;
pub mod resources;
pub mod stats;
pub mod visited;

pub use bfs::{solve, solve_puzzle, SearchEngine, SearchOutcome, SearchPhase};
pub use stats::SearchStats;
