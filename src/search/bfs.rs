//! Breadth-first search over distinct board configurations.
//!
//! The engine is a small state machine:
//!
//! - `Init` ([`SearchEngine::new`]): admit the root, enqueue it and record its key
//! - `Running` ([`SearchEngine::step`]): dequeue, store as explored, goal test, expand
//! - `Solved` / `Exhausted`: terminal
//!
//! Every dequeued node goes to the explored store *before* its goal test, so the goal node is
//! released with the rest of the tree in [`SearchEngine::finish`]; the solution is reconstructed
//! first.
//!
//! Children are expanded in a fixed order (`dy` ascending, then `dx` ascending), which makes
//! runs deterministic and decides ties among equal-depth solutions.

use std::time::Instant;

use crate::chess::rules::Rules;
use crate::core::board::Board;
use crate::core::coord::Coord;
use crate::scenario::{AllCaptured, GoalLike, MovesLike, Puzzle, SearchConfig, SearchError};
use crate::search::frontier::{ExploredStore, Frontier};
use crate::search::node::{NodeArena, NodeId};
use crate::search::resources::ResourceTracker;
use crate::search::stats::SearchStats;
use crate::search::visited::VisitedSet;
use crate::solution::{encode_path, Solution};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchPhase {
    Running,
    Solved,
    Exhausted,
}

impl SearchPhase {
    #[inline]
    pub fn is_terminal(self) -> bool {
        !matches!(self, SearchPhase::Running)
    }
}

/// Final result of a search, after every node has been released.
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    /// `None` when the search exhausted the reachable states.
    pub solution: Option<Solution>,
    pub stats: SearchStats,
}

impl SearchOutcome {
    pub fn is_solved(&self) -> bool {
        self.solution.is_some()
    }
}

pub struct SearchEngine<'a, M, G> {
    moves: &'a M,
    goal: &'a G,
    config: SearchConfig,
    tracker: ResourceTracker,
    arena: NodeArena,
    frontier: Frontier,
    explored: ExploredStore,
    visited: VisitedSet,
    phase: SearchPhase,
    goal_node: Option<NodeId>,
    stats: SearchStats,
    started: Instant,
}

impl<'a, M, G> SearchEngine<'a, M, G>
where
    M: MovesLike,
    G: GoalLike,
{
    pub fn new(
        start: &Board,
        moves: &'a M,
        goal: &'a G,
        config: SearchConfig,
    ) -> Result<Self, SearchError> {
        let mut tracker = ResourceTracker::new(config.limits);
        let mut arena = NodeArena::new();
        let mut frontier = Frontier::new();
        let mut visited = VisitedSet::new();

        let root = arena.create_root(start, &mut tracker)?;
        frontier.push(root, &tracker)?;
        if config.dedup {
            visited.insert(start, &mut tracker)?;
        }

        log::info!(
            "search start: {}x{} board, {} capturable, dedup={}",
            start.width(),
            start.height(),
            start.remaining_pieces(),
            config.dedup
        );

        Ok(Self {
            moves,
            goal,
            config,
            tracker,
            arena,
            frontier,
            explored: ExploredStore::new(),
            visited,
            phase: SearchPhase::Running,
            goal_node: None,
            stats: SearchStats {
                generated: 1,
                ..SearchStats::default()
            },
            started: Instant::now(),
        })
    }

    #[inline]
    pub fn phase(&self) -> SearchPhase {
        self.phase
    }

    #[inline]
    pub fn arena(&self) -> &NodeArena {
        &self.arena
    }

    #[inline]
    pub fn frontier(&self) -> &Frontier {
        &self.frontier
    }

    #[inline]
    pub fn explored(&self) -> &ExploredStore {
        &self.explored
    }

    #[inline]
    pub fn visited(&self) -> &VisitedSet {
        &self.visited
    }

    #[inline]
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    #[inline]
    pub fn goal_node(&self) -> Option<NodeId> {
        self.goal_node
    }

    /// Dequeue and process one node.
    pub fn step(&mut self) -> Result<SearchPhase, SearchError> {
        if self.phase.is_terminal() {
            return Ok(self.phase);
        }

        let Some(id) = self.frontier.pop() else {
            self.phase = SearchPhase::Exhausted;
            return Ok(self.phase);
        };
        if let Err(e) = self.explored.push(id, &self.tracker) {
            self.arena.release(id, &mut self.tracker);
            return Err(e);
        }
        self.tracker.bump_expansions("bfs_expand", 1)?;
        self.stats.expanded += 1;

        let node = self.arena.get(id).ok_or(SearchError::DanglingNode { id })?;
        if self.goal.is_goal(node.board()) {
            self.stats.solution_len = node.depth();
            self.goal_node = Some(id);
            self.phase = SearchPhase::Solved;
            return Ok(self.phase);
        }

        let player = node.board().player();
        let width = node.board().width() as i32;
        let height = node.board().height() as i32;

        // Every other square on the board is a candidate destination.
        for dy in (1 - player.y)..=(height - player.y) {
            for dx in (1 - player.x)..=(width - player.x) {
                if dx == 0 && dy == 0 {
                    continue;
                }
                self.expand_delta(id, Coord::new(dx, dy))?;
            }
        }

        if self.config.progress_every > 0 && self.stats.expanded % self.config.progress_every == 0
        {
            log::debug!(
                "expanded={} generated={} duplicates={} frontier={}",
                self.stats.expanded,
                self.stats.generated,
                self.stats.duplicates,
                self.frontier.len()
            );
        }

        Ok(self.phase)
    }

    fn expand_delta(&mut self, parent: NodeId, delta: Coord) -> Result<(), SearchError> {
        let mut child = self.arena.create_child(parent, delta, &self.tracker)?;

        if !self.moves.attempt_move(child.board_mut(), delta) {
            self.stats.invalid += 1;
            self.arena.discard(child);
            return Ok(());
        }
        self.stats.moved += 1;

        if self.config.dedup {
            let fresh = match self.visited.insert(child.board(), &mut self.tracker) {
                Ok(fresh) => fresh,
                Err(e) => {
                    self.arena.discard(child);
                    return Err(e);
                }
            };
            if !fresh {
                self.stats.duplicates += 1;
                self.arena.discard(child);
                return Ok(());
            }
        }

        let child_id = self.arena.admit(child, &mut self.tracker)?;
        if let Err(e) = self.frontier.push(child_id, &self.tracker) {
            self.arena.release(child_id, &mut self.tracker);
            return Err(e);
        }
        self.stats.generated += 1;
        Ok(())
    }

    /// Step until the search is solved or exhausted.
    pub fn run(&mut self) -> Result<SearchPhase, SearchError> {
        while !self.phase.is_terminal() {
            self.step()?;
        }
        Ok(self.phase)
    }

    /// Reconstruct the solution (if any) from the live tree.
    pub fn solution(&self) -> Result<Option<Solution>, SearchError> {
        self.goal_node
            .map(|goal| encode_path(&self.arena, goal))
            .transpose()
    }

    /// Release every frontier and explored node exactly once and empty the visited set.
    ///
    /// Returns the number of nodes released.
    fn cleanup(&mut self) -> u64 {
        let mut released = 0u64;
        for id in self.frontier.drain() {
            if self.arena.release(id, &mut self.tracker).is_some() {
                released += 1;
            }
        }
        for id in self.explored.drain() {
            if self.arena.release(id, &mut self.tracker).is_some() {
                released += 1;
            }
        }
        self.visited.clear();
        released
    }

    /// Reconstruct the solution, then release the whole tree.
    pub fn finish(mut self) -> Result<SearchOutcome, SearchError> {
        let solution = self.solution();
        let released = self.cleanup();
        log::debug!("released {released} nodes");

        self.stats.elapsed_secs = self.started.elapsed().as_secs_f64();
        self.stats.nodes_created = self.arena.created();
        self.stats.nodes_released = self.arena.released();
        debug_assert_eq!(self.arena.live(), 0);

        log::info!(
            "search {}: expanded={} generated={} duplicates={} in {:.3}s",
            match self.phase {
                SearchPhase::Solved => "solved",
                SearchPhase::Exhausted => "exhausted",
                SearchPhase::Running => "stopped",
            },
            self.stats.expanded,
            self.stats.generated,
            self.stats.duplicates,
            self.stats.elapsed_secs
        );

        Ok(SearchOutcome {
            solution: solution?,
            stats: self.stats,
        })
    }

    /// Release the whole tree after a failed run.
    pub fn abort(mut self) -> SearchStats {
        self.cleanup();
        self.stats.elapsed_secs = self.started.elapsed().as_secs_f64();
        self.stats.nodes_created = self.arena.created();
        self.stats.nodes_released = self.arena.released();
        self.stats
    }
}

/// Run a complete search from `start`.
///
/// Resource-limit and allocation errors are returned after the tree has been released.
pub fn solve<M, G>(
    start: &Board,
    moves: &M,
    goal: &G,
    config: SearchConfig,
) -> Result<SearchOutcome, SearchError>
where
    M: MovesLike,
    G: GoalLike,
{
    let mut engine = SearchEngine::new(start, moves, goal, config)?;
    match engine.run() {
        Ok(_) => engine.finish(),
        Err(e) => {
            let stats = engine.abort();
            log::warn!(
                "search aborted after {} expansions ({} of {} nodes released): {e}",
                stats.expanded,
                stats.nodes_released,
                stats.nodes_created
            );
            Err(e)
        }
    }
}

/// Solve a loaded puzzle with its chess rules and the all-captured goal.
pub fn solve_puzzle(puzzle: &Puzzle, config: SearchConfig) -> Result<SearchOutcome, SearchError> {
    let rules = Rules::new(puzzle.piece);
    solve(&puzzle.board, &rules, &AllCaptured, config)
}
