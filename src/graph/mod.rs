//! A directed graph keyed by comparator equality of its payloads.
//!
//! Nodes are owned by a generational arena; edges are [`NodeId`] handles kept
//! in per-node adjacency lists. Payload lookup goes through a sorted index of
//! node ids ordered by the graph's [`Comparator`], so two payloads refer to the
//! same node exactly when the comparator says they are equal. `Hash` and `Eq`
//! on the payload type are never consulted.
//!
//! Enumeration order (used by [`Graph::nodes`] and as the root order of both
//! traversals) is node insertion order.
//!
//! ```
//! use trellis::Graph;
//!
//! let mut graph = Graph::natural();
//! for n in 1..=6 {
//!     graph.add_node(n);
//! }
//! for (a, b) in [(1, 2), (1, 5), (1, 6), (2, 4), (2, 5), (3, 2)] {
//!     graph.add_edge(a, b);
//! }
//!
//! let dfs: Vec<i32> = graph.depth_first_search().copied().collect();
//! assert_eq!(dfs, vec![1, 2, 4, 5, 6, 3]);
//!
//! let bfs: Vec<i32> = graph
//!     .breadth_first_search()
//!     .map(|r| r.map(|n| *n))
//!     .collect::<Result<_, _>>()
//!     .unwrap();
//! assert_eq!(bfs, vec![1, 2, 5, 6, 4, 3]);
//! ```

mod arena;
mod node;
mod traversal;


use core::cmp::Ordering;
use core::fmt;

use tracing::{debug, trace};

use crate::compare::{Comparator, Natural};
use arena::Arena;

pub use arena::NodeId;
pub use node::Node;
pub use traversal::{BreadthFirst, DepthFirst};

/// A directed graph whose node identity is decided by a [`Comparator`].
///
/// ### Performance Characteristics
/// | Operation | Complexity | Notes |
/// |-----------|------------|-------|
/// | `add_node` | \(O(n)\) worst, \(O(\log n)\) when present | Binary search, then sorted insert |
/// | `remove_node` | \(O(n + m)\) | Scans every adjacency list |
/// | `add_edge` | \(O(n)\) worst | Two `add_node` calls plus an append |
/// | `remove_edge` | \(O(\log n + \text{out-degree})\) | First matching entry only |
/// | `get` / `contains` | \(O(\log n)\) | Comparator-driven binary search |
/// | `depth_first_search` | \(O(n + m)\) | Explicit stack, no recursion |
/// | `breadth_first_search` | \(O(n + m)\) | One [`BoundedQueue`](crate::collections::BoundedQueue) |
#[derive(Clone)]
pub struct Graph<T, C = Natural> {
    arena: Arena<Node<T>>,
    /// Live ids sorted by payload under `comparator`.
    index: Vec<NodeId>,
    /// Live ids in insertion order.
    order: Vec<NodeId>,
    comparator: C,
}

impl<T: Ord> Graph<T, Natural> {
    /// Creates an empty graph ordered by the payload's own `Ord`.
    pub fn natural() -> Self {
        Self::new(Natural)
    }
}

impl<T: Ord> Default for Graph<T, Natural> {
    fn default() -> Self {
        Self::natural()
    }
}

impl<T, C: Comparator<T>> Graph<T, C> {
    /// Creates an empty graph that decides node identity with `comparator`.
    pub fn new(comparator: C) -> Self {
        Self::with_capacity(comparator, 0)
    }

    /// Creates an empty graph with room for `capacity` nodes.
    pub fn with_capacity(comparator: C, capacity: usize) -> Self {
        Self {
            arena: Arena::with_capacity(capacity),
            index: Vec::with_capacity(capacity),
            order: Vec::with_capacity(capacity),
            comparator,
        }
    }

    /// Builds a graph from `(source, destination)` pairs, creating nodes on
    /// first mention.
    pub fn from_edges<I>(comparator: C, edges: I) -> Self
    where
        I: IntoIterator<Item = (T, T)>,
    {
        let mut graph = Self::new(comparator);
        graph.extend(edges);
        graph
    }

    /// The comparator this graph was built with.
    #[inline]
    pub fn comparator(&self) -> &C {
        &self.comparator
    }

    /// Number of nodes.
    #[inline]
    pub fn len(&self) -> usize {
        self.arena.len()
    }

    /// Returns `true` if the graph has no nodes.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.arena.len() == 0
    }

    /// Total number of edges, counting duplicates.
    pub fn edge_count(&self) -> usize {
        self.nodes().map(Node::out_degree).sum()
    }

    /// Binary search of the payload index.
    fn search(&self, payload: &T) -> Result<usize, usize> {
        self.index.binary_search_by(|&id| match self.arena.get(id) {
            Some(node) => self.comparator.compare(node.payload(), payload),
            None => Ordering::Less,
        })
    }

    /// The id of the node whose payload compares equal to `payload`.
    pub fn node_id(&self, payload: &T) -> Option<NodeId> {
        let pos = self.search(payload).ok()?;
        self.index.get(pos).copied()
    }

    /// Returns `true` if a node compares equal to `payload`.
    pub fn contains(&self, payload: &T) -> bool {
        self.search(payload).is_ok()
    }

    /// The node whose payload compares equal to `payload`.
    pub fn get(&self, payload: &T) -> Option<&Node<T>> {
        self.node_id(payload).and_then(|id| self.arena.get(id))
    }

    /// The node behind `id`, or `None` if it has been removed.
    #[inline]
    pub fn node(&self, id: NodeId) -> Option<&Node<T>> {
        self.arena.get(id)
    }

    /// The payload of the node behind `id`.
    #[inline]
    pub fn payload(&self, id: NodeId) -> Option<&T> {
        self.arena.get(id).map(Node::payload)
    }

    /// Node ids in enumeration (insertion) order.
    pub fn node_ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.order.iter().copied()
    }

    /// Nodes in enumeration (insertion) order.
    pub fn nodes(&self) -> impl Iterator<Item = &Node<T>> + '_ {
        self.order.iter().filter_map(|&id| self.arena.get(id))
    }

    /// Payloads in enumeration (insertion) order.
    pub fn payloads(&self) -> impl Iterator<Item = &T> + '_ {
        self.nodes().map(Node::payload)
    }

    /// Payloads in comparator order.
    pub fn sorted_payloads(&self) -> impl Iterator<Item = &T> + '_ {
        self.index.iter().filter_map(|&id| self.payload(id))
    }

    /// Destination payloads of `payload`'s outgoing edges, in adjacency order.
    ///
    /// Yields nothing if `payload` is not in the graph.
    pub fn neighbors(&self, payload: &T) -> impl Iterator<Item = &T> + '_ {
        self.get(payload)
            .into_iter()
            .flat_map(move |node| node.adjacent().iter().filter_map(move |&id| self.payload(id)))
    }

    /// Returns `true` if at least one edge `source -> destination` exists.
    pub fn has_edge(&self, source: &T, destination: &T) -> bool {
        match (self.get(source), self.node_id(destination)) {
            (Some(node), Some(dst)) => node.adjacent().contains(&dst),
            _ => false,
        }
    }

    /// Number of outgoing edges of `payload`, or `None` if absent.
    pub fn out_degree(&self, payload: &T) -> Option<usize> {
        self.get(payload).map(Node::out_degree)
    }

    /// Number of edges pointing at `payload`, or `None` if absent.
    pub fn in_degree(&self, payload: &T) -> Option<usize> {
        let target = self.node_id(payload)?;
        Some(
            self.nodes()
                .map(|node| node.adjacent().iter().filter(|&&id| id == target).count())
                .sum(),
        )
    }

    /// Adds a node for `payload` unless one already compares equal.
    ///
    /// Returns the id of the new or existing node. When a node exists, the
    /// stored payload is kept and `payload` is dropped.
    pub fn add_node(&mut self, payload: T) -> NodeId {
        match self.search(&payload) {
            Ok(pos) => self.index[pos],
            Err(pos) => {
                let id = self.arena.insert(Node::new(payload));
                self.index.insert(pos, id);
                self.order.push(id);
                trace!(node = ?id, nodes = self.arena.len(), "node added");
                id
            }
        }
    }

    /// Removes the node comparing equal to `payload` and every edge into it.
    ///
    /// Incoming edges are stripped from all remaining nodes, including
    /// duplicates and self-edges, before the node is released. Returns `None`
    /// and leaves the graph untouched if no such node exists.
    pub fn remove_node(&mut self, payload: &T) -> Option<Node<T>> {
        let pos = self.search(payload).ok()?;
        let id = self.index.remove(pos);

        let incoming: usize = self
            .arena
            .values_mut()
            .map(|node| node.remove_all_adjacent(id))
            .sum();

        if let Some(at) = self.order.iter().position(|&o| o == id) {
            self.order.remove(at);
        }

        let node = self.arena.remove(id);
        debug!(node = ?id, incoming, nodes = self.arena.len(), "node removed");
        node
    }

    /// Adds a directed edge `source -> destination`.
    ///
    /// Missing endpoints are created first. Parallel edges are kept; no
    /// reverse edge is added.
    pub fn add_edge(&mut self, source: T, destination: T) -> (NodeId, NodeId) {
        let src = self.add_node(source);
        let dst = self.add_node(destination);
        if let Some(node) = self.arena.get_mut(src) {
            node.add_adjacent(dst);
        }
        trace!(source = ?src, destination = ?dst, "edge added");
        (src, dst)
    }

    /// Removes the first edge `source -> destination`.
    ///
    /// Returns `false` without creating anything if either endpoint is absent
    /// or no such edge exists.
    pub fn remove_edge(&mut self, source: &T, destination: &T) -> bool {
        let (Some(src), Some(dst)) = (self.node_id(source), self.node_id(destination)) else {
            return false;
        };
        let removed = self
            .arena
            .get_mut(src)
            .and_then(|node| node.remove_adjacent(dst))
            .is_some();
        if removed {
            debug!(source = ?src, destination = ?dst, "edge removed");
        }
        removed
    }

    /// Removes every node and edge. The comparator is kept.
    pub fn clear(&mut self) {
        self.arena.clear();
        self.index.clear();
        self.order.clear();
    }
}

impl<T, C: Comparator<T>> Extend<(T, T)> for Graph<T, C> {
    fn extend<I: IntoIterator<Item = (T, T)>>(&mut self, edges: I) {
        for (source, destination) in edges {
            self.add_edge(source, destination);
        }
    }
}

impl<T: fmt::Debug, C> fmt::Debug for Graph<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut map = f.debug_map();
        for node in self.order.iter().filter_map(|&id| self.arena.get(id)) {
            let adjacent: Vec<&T> = node
                .adjacent()
                .iter()
                .filter_map(|&id| self.arena.get(id).map(Node::payload))
                .collect();
            map.entry(node.payload(), &adjacent);
        }
        map.finish()
    }
}
