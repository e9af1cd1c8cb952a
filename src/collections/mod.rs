//! Supporting collections.
//!
//! - `queue`: the FIFO [`BoundedQueue`] that drives breadth-first traversal
//! - `linked_list`: a standalone doubly [`LinkedList`]; it shares no code with
//!   the graph

pub mod linked_list;
pub mod queue;

pub use linked_list::{LinkedList, ListHandle};
pub use queue::BoundedQueue;
