//! Node bookkeeping: the FIFO frontier and the explored store.
//!
//! Both hold ids into the [`NodeArena`](crate::search::node::NodeArena); a node id lives in at
//! most one of them at a time.

use std::collections::VecDeque;

use crate::scenario::SearchError;
use crate::search::node::NodeId;
use crate::search::resources::ResourceTracker;

/// Nodes discovered but not yet expanded, oldest first.
#[derive(Debug, Default)]
pub struct Frontier {
    queue: VecDeque<NodeId>,
}

impl Frontier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, id: NodeId, tracker: &ResourceTracker) -> Result<(), SearchError> {
        tracker.try_reserve_deque("frontier_push", "frontier", &mut self.queue, 1)?;
        self.queue.push_back(id);
        Ok(())
    }

    #[inline]
    pub fn pop(&mut self) -> Option<NodeId> {
        self.queue.pop_front()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.queue.iter().copied()
    }

    /// Remove every queued id, front to back.
    pub fn drain(&mut self) -> impl Iterator<Item = NodeId> + '_ {
        self.queue.drain(..)
    }
}

/// Every dequeued node, retained until the search ends.
#[derive(Debug, Default)]
pub struct ExploredStore {
    nodes: Vec<NodeId>,
}

impl ExploredStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, id: NodeId, tracker: &ResourceTracker) -> Result<(), SearchError> {
        tracker.try_reserve_vec("explored_push", "explored_store", &mut self.nodes, 1)?;
        self.nodes.push(id);
        Ok(())
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn as_slice(&self) -> &[NodeId] {
        &self.nodes
    }

    /// Remove every stored id, newest first.
    pub fn drain(&mut self) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes.drain(..).rev()
    }
}
