//! Graph nodes: a payload plus its ordered outgoing adjacency.

use super::arena::NodeId;

/// A node owned by a [`Graph`](super::Graph).
///
/// The payload is fixed for the node's lifetime. Adjacency entries are
/// non-owning [`NodeId`] handles kept in insertion order; the same target may
/// appear more than once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node<T> {
    payload: T,
    adjacent: Vec<NodeId>,
}

impl<T> Node<T> {
    pub(crate) fn new(payload: T) -> Self {
        Self {
            payload,
            adjacent: Vec::new(),
        }
    }

    /// The identity value of this node.
    #[inline]
    pub fn payload(&self) -> &T {
        &self.payload
    }

    /// Outgoing edges in the order they were added.
    #[inline]
    pub fn adjacent(&self) -> &[NodeId] {
        &self.adjacent
    }

    /// Number of outgoing edges, counting duplicates.
    #[inline]
    pub fn out_degree(&self) -> usize {
        self.adjacent.len()
    }

    /// Consumes the node and returns its payload.
    pub fn into_payload(self) -> T {
        self.payload
    }

    /// Appends an edge to `target`. Duplicates are kept.
    pub(crate) fn add_adjacent(&mut self, target: NodeId) {
        self.adjacent.push(target);
    }

    /// Removes the first edge to `target` and returns it.
    pub(crate) fn remove_adjacent(&mut self, target: NodeId) -> Option<NodeId> {
        let pos = self.adjacent.iter().position(|&id| id == target)?;
        Some(self.adjacent.remove(pos))
    }

    /// Removes every edge to `target`, returning how many were dropped.
    pub(crate) fn remove_all_adjacent(&mut self, target: NodeId) -> usize {
        let before = self.adjacent.len();
        self.adjacent.retain(|&id| id != target);
        before - self.adjacent.len()
    }
}
