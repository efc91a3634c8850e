use rustc_hash::FxHashSet;

use crate::core::board::Board;
use crate::scenario::SearchError;
use crate::search::resources::ResourceTracker;

/// Canonical encodings of every board accepted so far.
///
/// Keys are only ever inserted; the set is dropped with the search that owns it.
#[derive(Debug, Default)]
pub struct VisitedSet {
    keys: FxHashSet<Box<[u8]>>,
}

impl VisitedSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `board`. Returns `false` if its encoding was already present.
    pub fn insert(
        &mut self,
        board: &Board,
        tracker: &mut ResourceTracker,
    ) -> Result<bool, SearchError> {
        let key = board.canonical_key();
        if self.keys.contains(key) {
            return Ok(false);
        }

        tracker.try_reserve_set("visited_insert", "visited_set", &mut self.keys, 1)?;
        let mut owned = Vec::new();
        tracker.try_reserve_vec("visited_insert", "visited_key", &mut owned, key.len())?;
        owned.extend_from_slice(key);

        tracker.bump_visited("visited_insert", 1)?;
        self.keys.insert(owned.into_boxed_slice());
        Ok(true)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn clear(&mut self) {
        self.keys.clear();
        self.keys.shrink_to_fit();
    }
}
