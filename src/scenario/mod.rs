//! Scenario layer: glue between the puzzle rules and the search engine.
//!
//! A [`Puzzle`] bundles:
//! - the starting [`Board`]
//! - the chess piece the player moves as ([`PieceKind`])
//!
//! The engine only sees the rules through two seams:
//! - [`MovesLike`]: applies a candidate move in place and reports whether the player moved
//! - [`GoalLike`]: decides whether a board is solved
//!
//! Budgets and engine switches live in [`SearchConfig`].

pub mod loader;

use std::fmt;

use crate::chess::piece::PieceKind;
use crate::core::board::Board;
use crate::core::cell;
use crate::core::coord::Coord;

/// Move executor contract.
///
/// `attempt_move` must be a pure function of `(board, delta)`: it mutates the board in place and
/// returns `true` iff the player's position changed. When it returns `false` the board must be
/// left untouched.
pub trait MovesLike {
    fn attempt_move(&self, board: &mut Board, delta: Coord) -> bool;
}

/// Goal predicate contract.
pub trait GoalLike {
    fn is_goal(&self, board: &Board) -> bool;
}

/// Solved once no capturable piece remains.
#[derive(Debug, Clone, Copy, Default)]
pub struct AllCaptured;

impl GoalLike for AllCaptured {
    #[inline]
    fn is_goal(&self, board: &Board) -> bool {
        board.canonical_key().iter().all(|&c| !cell::is_capturable(c))
    }
}

/// A loaded puzzle instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Puzzle {
    pub name: String,
    pub board: Board,
    pub piece: PieceKind,
}

impl Puzzle {
    pub fn new(name: impl Into<String>, board: Board, piece: PieceKind) -> Self {
        Self {
            name: name.into(),
            board,
            piece,
        }
    }

    /// Number of capturable pieces on the starting board.
    pub fn capturable(&self) -> usize {
        self.board.remaining_pieces()
    }
}

#[derive(Debug, Clone, Copy)]
/// Search budgets used to bound memory/time consumption.
///
/// - `max_nodes`: nodes alive at once (frontier + explored store)
/// - `max_visited`: canonical keys held by the visited set
/// - `max_expansions`: dequeued nodes, the loop-iteration guard
pub struct ResourceLimits {
    pub max_nodes: usize,
    pub max_visited: usize,
    pub max_expansions: u64,
}

impl Default for ResourceLimits {
    fn default() -> Self {
        Self {
            max_nodes: 10_000_000,
            max_visited: 10_000_000,
            max_expansions: 100_000_000,
        }
    }
}

impl ResourceLimits {
    pub fn unlimited() -> Self {
        Self {
            max_nodes: usize::MAX,
            max_visited: usize::MAX,
            max_expansions: u64::MAX,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
/// Running counters tracked during a search.
pub struct ResourceCounts {
    pub nodes: u64,
    pub visited: u64,
    pub expansions: u64,
}

#[derive(Debug, Clone, Copy)]
/// Engine switches.
pub struct SearchConfig {
    /// Reject children whose board was already seen. Without it the search only terminates by
    /// finding a goal or hitting a limit.
    pub dedup: bool,
    pub limits: ResourceLimits,
    /// Emit a `debug!` progress line every this many expansions (0 disables).
    pub progress_every: u64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            dedup: true,
            limits: ResourceLimits::default(),
            progress_every: 100_000,
        }
    }
}

#[derive(Debug)]
/// Structured errors returned by loading, search and solution routines.
pub enum SearchError {
    /// The board text or cell buffer violates the board format.
    InvalidBoard { reason: String },
    /// A move string could not be decoded or replayed.
    InvalidSolution { reason: String },
    /// A node id was used after its node had been released.
    DanglingNode { id: usize },
    /// A configured resource limit was exceeded.
    LimitExceeded {
        stage: &'static str,
        metric: &'static str,
        limit: u64,
        observed: u64,
        counts: ResourceCounts,
    },
    /// A `try_reserve` allocation failed for a growing structure.
    AllocationFailed {
        stage: &'static str,
        structure: &'static str,
        counts: ResourceCounts,
    },
    /// I/O failure while reading a board or writing results.
    Io {
        stage: &'static str,
        path: String,
        error: String,
    },
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchError::InvalidBoard { reason } => write!(f, "invalid board: {reason}"),
            SearchError::InvalidSolution { reason } => write!(f, "invalid solution: {reason}"),
            SearchError::DanglingNode { id } => write!(f, "node {id} is no longer live"),
            SearchError::LimitExceeded {
                stage,
                metric,
                limit,
                observed,
                counts,
            } => write!(
                f,
                "limit exceeded at {stage}: {metric} (limit={limit}, observed={observed}); \
                 counts(nodes={}, visited={}, expansions={})",
                counts.nodes, counts.visited, counts.expansions
            ),
            SearchError::AllocationFailed {
                stage,
                structure,
                counts,
            } => write!(
                f,
                "allocation failed at {stage} for {structure}; \
                 counts(nodes={}, visited={}, expansions={})",
                counts.nodes, counts.visited, counts.expansions
            ),
            SearchError::Io { stage, path, error } => {
                write!(f, "io error at {stage} for {path}: {error}")
            }
        }
    }
}

impl std::error::Error for SearchError {}
