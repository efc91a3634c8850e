//! Resource tracking and allocation guards for the search.
//!
//! The state space of a sliding-capture puzzle grows combinatorially. To avoid hard OOM aborts
//! the engine uses:
//! - counter-based budgets ([`crate::scenario::ResourceLimits`])
//! - `try_reserve` wrappers to surface allocation failures as [`crate::scenario::SearchError`]

use std::collections::VecDeque;

use rustc_hash::FxHashSet;

use crate::scenario::{ResourceCounts, ResourceLimits, SearchError};

#[derive(Debug, Clone)]
/// Tracks budgets/counters during a search.
pub struct ResourceTracker {
    limits: ResourceLimits,
    counts: ResourceCounts,
}

impl ResourceTracker {
    #[inline]
    pub fn new(limits: ResourceLimits) -> Self {
        Self {
            limits,
            counts: ResourceCounts::default(),
        }
    }

    #[inline]
    pub fn counts(&self) -> ResourceCounts {
        self.counts
    }

    #[inline]
    pub fn bump_nodes(&mut self, stage: &'static str, delta: usize) -> Result<(), SearchError> {
        self.bump(
            stage,
            "nodes",
            delta as u64,
            self.limits.max_nodes as u64,
            |c| &mut c.nodes,
        )
    }

    #[inline]
    pub fn dec_nodes(&mut self, delta: usize) {
        self.counts.nodes = self.counts.nodes.saturating_sub(delta as u64);
    }

    #[inline]
    pub fn bump_visited(&mut self, stage: &'static str, delta: usize) -> Result<(), SearchError> {
        self.bump(
            stage,
            "visited",
            delta as u64,
            self.limits.max_visited as u64,
            |c| &mut c.visited,
        )
    }

    #[inline]
    pub fn bump_expansions(&mut self, stage: &'static str, delta: u64) -> Result<(), SearchError> {
        self.bump(
            stage,
            "expansions",
            delta,
            self.limits.max_expansions,
            |c| &mut c.expansions,
        )
    }

    fn bump(
        &mut self,
        stage: &'static str,
        metric: &'static str,
        delta: u64,
        limit: u64,
        field: impl FnOnce(&mut ResourceCounts) -> &mut u64,
    ) -> Result<(), SearchError> {
        let observed = {
            let v = field(&mut self.counts);
            *v = v.saturating_add(delta);
            *v
        };

        if observed > limit {
            log::warn!("{stage}: {metric} limit {limit} exceeded");
            return Err(SearchError::LimitExceeded {
                stage,
                metric,
                limit,
                observed,
                counts: self.counts,
            });
        }

        Ok(())
    }

    pub fn try_reserve_vec<T>(
        &self,
        stage: &'static str,
        structure: &'static str,
        v: &mut Vec<T>,
        additional: usize,
    ) -> Result<(), SearchError> {
        v.try_reserve(additional)
            .map_err(|_| SearchError::AllocationFailed {
                stage,
                structure,
                counts: self.counts,
            })
    }

    pub fn try_reserve_deque<T>(
        &self,
        stage: &'static str,
        structure: &'static str,
        q: &mut VecDeque<T>,
        additional: usize,
    ) -> Result<(), SearchError> {
        q.try_reserve(additional)
            .map_err(|_| SearchError::AllocationFailed {
                stage,
                structure,
                counts: self.counts,
            })
    }

    pub fn try_reserve_set<K>(
        &self,
        stage: &'static str,
        structure: &'static str,
        set: &mut FxHashSet<K>,
        additional: usize,
    ) -> Result<(), SearchError>
    where
        K: std::hash::Hash + Eq,
    {
        set.try_reserve(additional)
            .map_err(|_| SearchError::AllocationFailed {
                stage,
                structure,
                counts: self.counts,
            })
    }
}
