//! Search-tree nodes and the arena that owns them.
//!
//! Nodes are addressed by [`NodeId`]; a child refers to its parent by id only, so the arena is
//! the single owner of every admitted node. A freshly created child is an owned [`SearchNode`]
//! value until it is either [`NodeArena::admit`]ted or [`NodeArena::discard`]ed.

use crate::core::board::Board;
use crate::core::coord::Coord;
use crate::scenario::SearchError;
use crate::search::resources::ResourceTracker;

pub type NodeId = usize;

#[derive(Debug, Clone)]
pub struct SearchNode {
    board: Board,
    depth: u32,
    /// Move that produced this node; the origin for the root.
    delta: Coord,
    /// Back-reference for traversal only.
    parent: Option<NodeId>,
}

impl SearchNode {
    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    #[inline]
    pub fn depth(&self) -> u32 {
        self.depth
    }

    #[inline]
    pub fn delta(&self) -> Coord {
        self.delta
    }

    #[inline]
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }
}

/// Owner of every admitted node, with creation/release accounting.
#[derive(Debug, Default)]
pub struct NodeArena {
    slots: Vec<Option<SearchNode>>,
    created: u64,
    released: u64,
}

impl NodeArena {
    pub fn new() -> Self {
        Self::default()
    }

    /// Admit the root: depth 0, no parent, zero delta.
    pub fn create_root(
        &mut self,
        board: &Board,
        tracker: &mut ResourceTracker,
    ) -> Result<NodeId, SearchError> {
        let node = SearchNode {
            board: board.try_clone(tracker)?,
            depth: 0,
            delta: Coord::ORIGIN,
            parent: None,
        };
        self.created += 1;
        self.admit(node, tracker)
    }

    /// A child of `parent` owning a fresh copy of the parent's board.
    ///
    /// The child is not in the arena yet; the caller must admit or discard it.
    pub fn create_child(
        &mut self,
        parent: NodeId,
        delta: Coord,
        tracker: &ResourceTracker,
    ) -> Result<SearchNode, SearchError> {
        let p = self
            .get(parent)
            .ok_or(SearchError::DanglingNode { id: parent })?;
        let node = SearchNode {
            board: p.board.try_clone(tracker)?,
            depth: p.depth + 1,
            delta,
            parent: Some(parent),
        };
        self.created += 1;
        Ok(node)
    }

    /// Move an owned node into the arena.
    ///
    /// On failure the node is released here, so creation and release counts stay balanced.
    pub fn admit(
        &mut self,
        node: SearchNode,
        tracker: &mut ResourceTracker,
    ) -> Result<NodeId, SearchError> {
        let reserved = tracker.bump_nodes("arena_admit", 1).and_then(|()| {
            tracker.try_reserve_vec("arena_admit", "node_slots", &mut self.slots, 1)
        });
        if let Err(e) = reserved {
            self.discard(node);
            return Err(e);
        }
        let id = self.slots.len();
        self.slots.push(Some(node));
        Ok(id)
    }

    /// Release a child that never entered the arena.
    pub fn discard(&mut self, node: SearchNode) {
        drop(node);
        self.released += 1;
    }

    /// Release an admitted node. Returns `None` if it was already released.
    pub fn release(&mut self, id: NodeId, tracker: &mut ResourceTracker) -> Option<SearchNode> {
        let node = self.slots.get_mut(id)?.take()?;
        self.released += 1;
        tracker.dec_nodes(1);
        Some(node)
    }

    #[inline]
    pub fn get(&self, id: NodeId) -> Option<&SearchNode> {
        self.slots.get(id).and_then(Option::as_ref)
    }

    /// Iterate `id` and its ancestors up to the root.
    pub fn ancestry(&self, id: NodeId) -> impl Iterator<Item = (NodeId, &SearchNode)> + '_ {
        let mut next = Some(id);
        std::iter::from_fn(move || {
            let cur = next?;
            let node = self.get(cur)?;
            next = node.parent;
            Some((cur, node))
        })
    }

    /// Number of ancestors of `id`, found by walking parent links.
    pub fn ancestor_count(&self, id: NodeId) -> usize {
        self.ancestry(id).count().saturating_sub(1)
    }

    pub fn created(&self) -> u64 {
        self.created
    }

    pub fn released(&self) -> u64 {
        self.released
    }

    pub fn live(&self) -> u64 {
        self.created - self.released
    }
}
