//! Depth-first and breadth-first traversal over a [`Graph`].
//!
//! Both traversals are lazy iterators that borrow the graph, so the graph
//! cannot change underneath them. Roots are taken in enumeration order; a
//! node reached from an earlier root is never used as a root again, so every
//! node is yielded exactly once per traversal.

use tracing::debug;

use super::{Graph, NodeId};
use crate::collections::BoundedQueue;
use crate::compare::Comparator;
use crate::error::QueueError;

/// Per-traversal visited table, indexed by arena slot.
struct VisitedSet {
    flags: Vec<bool>,
}

impl VisitedSet {
    fn new(slots: usize) -> Self {
        Self {
            flags: vec![false; slots],
        }
    }

    /// Marks `id` visited. Returns `true` iff it was not visited before.
    #[inline]
    fn try_visit(&mut self, id: NodeId) -> bool {
        match self.flags.get_mut(id.index()) {
            Some(flag) if !*flag => {
                *flag = true;
                true
            }
            _ => false,
        }
    }
}

impl<T, C: Comparator<T>> Graph<T, C> {
    /// Depth-first traversal of the whole graph.
    ///
    /// Pre-order: a node is yielded when first reached, then its unvisited
    /// neighbours are explored in adjacency order before its next sibling.
    /// Disconnected parts are started from the next unvisited node in
    /// enumeration order.
    pub fn depth_first_search(&self) -> DepthFirst<'_, T, C> {
        DepthFirst::new(self, &self.order)
    }

    /// Depth-first traversal of the nodes reachable from `start`.
    ///
    /// Yields nothing if `start` is not in the graph.
    pub fn depth_first_from(&self, start: &T) -> DepthFirst<'_, T, C> {
        DepthFirst::new(self, self.root_slice(start))
    }

    /// Breadth-first traversal of the whole graph using an unbounded queue.
    ///
    /// Nodes are marked visited when they are enqueued, so a node reachable
    /// along several paths is queued once. With an unbounded queue this
    /// iterator never yields `Err`.
    pub fn breadth_first_search(&self) -> BreadthFirst<'_, T, C> {
        BreadthFirst::new(self, &self.order, BoundedQueue::new())
    }

    /// Breadth-first traversal whose queue holds at most `capacity` nodes.
    ///
    /// The first enqueue that would exceed `capacity` is yielded as
    /// [`QueueError::CapacityExceeded`]; the iterator is finished after that.
    pub fn breadth_first_search_bounded(&self, capacity: usize) -> BreadthFirst<'_, T, C> {
        BreadthFirst::new(self, &self.order, BoundedQueue::bounded(capacity))
    }

    /// Breadth-first traversal of the nodes reachable from `start`.
    ///
    /// Yields nothing if `start` is not in the graph.
    pub fn breadth_first_from(&self, start: &T) -> BreadthFirst<'_, T, C> {
        BreadthFirst::new(self, self.root_slice(start), BoundedQueue::new())
    }

    /// A one-element root list borrowed from the payload index.
    fn root_slice(&self, start: &T) -> &[NodeId] {
        match self.search(start) {
            Ok(pos) => self.index.get(pos..=pos).unwrap_or(&[]),
            Err(_) => &[],
        }
    }
}

/// Lazy depth-first traversal yielding payloads.
///
/// Uses an explicit stack of `(node, next adjacency cursor)` frames, so deep
/// chains do not consume call stack.
pub struct DepthFirst<'a, T, C> {
    graph: &'a Graph<T, C>,
    roots: core::slice::Iter<'a, NodeId>,
    visited: VisitedSet,
    stack: Vec<(NodeId, usize)>,
}

impl<'a, T, C> DepthFirst<'a, T, C> {
    fn new(graph: &'a Graph<T, C>, roots: &'a [NodeId]) -> Self {
        Self {
            graph,
            roots: roots.iter(),
            visited: VisitedSet::new(graph.arena.slot_count()),
            stack: Vec::new(),
        }
    }
}

impl<'a, T, C> Iterator for DepthFirst<'a, T, C> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let graph = self.graph;
        loop {
            if let Some(frame) = self.stack.last_mut() {
                let next = graph
                    .arena
                    .get(frame.0)
                    .and_then(|node| node.adjacent().get(frame.1).copied());

                match next {
                    Some(neighbor) => {
                        frame.1 += 1;
                        if self.visited.try_visit(neighbor) {
                            self.stack.push((neighbor, 0));
                            if let Some(node) = graph.arena.get(neighbor) {
                                return Some(node.payload());
                            }
                        }
                    }
                    None => {
                        self.stack.pop();
                    }
                }
                continue;
            }

            let root = *self.roots.next()?;
            if self.visited.try_visit(root) {
                self.stack.push((root, 0));
                if let Some(node) = graph.arena.get(root) {
                    return Some(node.payload());
                }
            }
        }
    }
}

impl<'a, T, C> core::iter::FusedIterator for DepthFirst<'a, T, C> {}

/// Lazy breadth-first traversal yielding payloads.
///
/// A node's neighbours are enqueued right after the node has been yielded,
/// on the following call to `next`. A capacity failure is therefore reported
/// after the node whose expansion overflowed the queue.
pub struct BreadthFirst<'a, T, C> {
    graph: &'a Graph<T, C>,
    roots: core::slice::Iter<'a, NodeId>,
    visited: VisitedSet,
    queue: BoundedQueue<NodeId>,
    /// Last yielded node, whose neighbours are still to be enqueued.
    expand: Option<NodeId>,
    failed: bool,
}

impl<'a, T, C> BreadthFirst<'a, T, C> {
    fn new(graph: &'a Graph<T, C>, roots: &'a [NodeId], queue: BoundedQueue<NodeId>) -> Self {
        Self {
            graph,
            roots: roots.iter(),
            visited: VisitedSet::new(graph.arena.slot_count()),
            queue,
            expand: None,
            failed: false,
        }
    }

    /// Queue limit in use, or `None` when unbounded.
    pub fn capacity(&self) -> Option<usize> {
        self.queue.capacity()
    }

    fn enqueue(&mut self, id: NodeId) -> Result<(), QueueError> {
        self.queue.add(id).map_err(|err| {
            self.failed = true;
            debug!(node = ?id, error = %err, "breadth-first queue overflow");
            err
        })
    }
}

impl<'a, T, C> Iterator for BreadthFirst<'a, T, C> {
    type Item = Result<&'a T, QueueError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        let graph = self.graph;

        if let Some(parent) = self.expand.take() {
            let adjacent = graph.arena.get(parent).map(|node| node.adjacent()).unwrap_or(&[]);
            for &neighbor in adjacent {
                if self.visited.try_visit(neighbor) {
                    if let Err(err) = self.enqueue(neighbor) {
                        return Some(Err(err));
                    }
                }
            }
        }

        loop {
            if let Some(id) = self.queue.remove() {
                if let Some(node) = graph.arena.get(id) {
                    self.expand = Some(id);
                    return Some(Ok(node.payload()));
                }
                continue;
            }

            // Queue drained: start the next unvisited root.
            let root = *self.roots.next()?;
            if self.visited.try_visit(root) {
                if let Err(err) = self.enqueue(root) {
                    return Some(Err(err));
                }
            }
        }
    }
}

impl<'a, T, C> core::iter::FusedIterator for BreadthFirst<'a, T, C> {}
