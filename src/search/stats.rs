use serde::{Deserialize, Serialize};

/// Counters accumulated by one search run.
///
/// `generated` counts the root plus every child admitted to the frontier, so
/// `generated - 1 + duplicates == moved` whenever deduplication is on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Nodes dequeued (goal-tested).
    pub expanded: u64,
    pub generated: u64,
    /// Moved children rejected because their board was already seen.
    pub duplicates: u64,
    /// Candidate deltas the move executor refused.
    pub invalid: u64,
    /// Candidate deltas that moved the player.
    pub moved: u64,
    pub solution_len: u32,
    pub elapsed_secs: f64,
    pub nodes_created: u64,
    pub nodes_released: u64,
}

impl SearchStats {
    pub fn expanded_per_sec(&self) -> f64 {
        if self.elapsed_secs > 0.0 {
            self.expanded as f64 / self.elapsed_secs
        } else {
            0.0
        }
    }
}
