//! # `trellis` - Comparator-Keyed Directed Graphs
//!
//! An in-memory directed graph over arbitrary payload types. Node identity is
//! decided by a caller-supplied [`Comparator`], never by the payload's own
//! `Eq` or `Hash`, so payloads can be matched by key, case-insensitively, or by
//! any other total order the host chooses.
//!
//! ## Key Features
//!
//! - **Comparator identity**: one node per comparator-equivalence class of
//!   payloads; `add_node` is idempotent.
//! - **Arena ownership**: the graph owns every node; edges are generational
//!   [`NodeId`] handles that stop resolving once their node is removed.
//! - **Consistent removal**: removing a node strips every edge pointing at it,
//!   including duplicates and self-edges.
//! - **Lazy traversals**: [`DepthFirst`] and [`BreadthFirst`] iterators that
//!   yield payloads in traversal order. Depth-first uses an explicit stack;
//!   breadth-first drives a [`BoundedQueue`].
//!
//! ## Architecture
//!
//! - [`compare`]: the [`Comparator`] trait and stock comparators.
//! - [`graph`]: [`Graph`], [`Node`], [`NodeId`] and the traversal iterators.
//! - [`collections`]: [`BoundedQueue`] and the peer [`LinkedList`] utility.
//! - [`error`]: error types; only a bounded queue overflow is an error.
//!
//! ## Example
//!
//! ```rust
//! use trellis::Graph;
//!
//! let mut graph = Graph::natural();
//! graph.add_edge("fetch", "parse");
//! graph.add_edge("parse", "render");
//! graph.add_edge("fetch", "render");
//!
//! let order: Vec<_> = graph.depth_first_search().copied().collect();
//! assert_eq!(order, ["fetch", "parse", "render"]);
//!
//! graph.remove_node(&"parse");
//! assert!(graph.has_edge(&"fetch", &"render"));
//! assert_eq!(graph.in_degree(&"render"), Some(1));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod collections;
pub mod compare;
pub mod error;
pub mod graph;

pub use collections::{BoundedQueue, LinkedList, ListHandle};
pub use compare::{ByKey, Comparator, Natural, Reverse};
pub use error::{Error, QueueError, Result};
pub use graph::{BreadthFirst, DepthFirst, Graph, Node, NodeId};

/// Everything needed to build and walk a graph.
pub mod prelude {
    pub use crate::collections::BoundedQueue;
    pub use crate::compare::{ByKey, Comparator, Natural, Reverse};
    pub use crate::error::QueueError;
    pub use crate::graph::{Graph, Node, NodeId};
}

// Compile-time assertions for handle layout.
const _: () = {
    use core::mem;

    // Handles are two `u32`s and stay `Copy`-cheap.
    assert!(mem::size_of::<NodeId>() == 8);
    assert!(mem::size_of::<Option<NodeId>>() <= 12);
};
