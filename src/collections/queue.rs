//! `BoundedQueue` - a FIFO queue with an optional capacity limit.
//!
//! Breadth-first traversal drives one of these per traversal. By default the
//! queue is unbounded; a bounded queue refuses to grow past its limit and
//! reports [`QueueError::CapacityExceeded`] instead.
//!
//! Performance Characteristics:
//! - `add` / `remove`: O(1) amortized (ring buffer)
//! - `len` / `is_empty` / `is_full`: O(1)

use std::collections::VecDeque;

use crate::error::QueueError;

/// A first-in first-out queue with an optional upper bound on its length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoundedQueue<T> {
    storage: VecDeque<T>,
    capacity: Option<usize>,
}

impl<T> BoundedQueue<T> {
    /// Creates an empty, unbounded queue.
    pub fn new() -> Self {
        Self {
            storage: VecDeque::new(),
            capacity: None,
        }
    }

    /// Creates an empty queue that holds at most `capacity` items.
    pub fn bounded(capacity: usize) -> Self {
        Self {
            storage: VecDeque::with_capacity(capacity),
            capacity: Some(capacity),
        }
    }

    /// The configured limit, or `None` when unbounded.
    #[inline]
    pub fn capacity(&self) -> Option<usize> {
        self.capacity
    }

    /// Number of queued items.
    #[inline]
    pub fn len(&self) -> usize {
        self.storage.len()
    }

    /// Returns `true` if no items are queued.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }

    /// Returns `true` if a further `add` would fail.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.capacity.is_some_and(|cap| self.storage.len() >= cap)
    }

    /// Appends `item` at the tail.
    ///
    /// # Errors
    /// Returns [`QueueError::CapacityExceeded`] if the queue is full. The
    /// item is dropped and the queue is left unchanged.
    pub fn add(&mut self, item: T) -> Result<(), QueueError> {
        if let Some(capacity) = self.capacity {
            if self.storage.len() >= capacity {
                return Err(QueueError::CapacityExceeded { capacity });
            }
        }
        self.storage.push_back(item);
        Ok(())
    }

    /// Removes and returns the head, or `None` if empty.
    #[inline]
    pub fn remove(&mut self) -> Option<T> {
        self.storage.pop_front()
    }

    /// The head item without removing it.
    #[inline]
    pub fn peek(&self) -> Option<&T> {
        self.storage.front()
    }

    /// Iterates queued items from head to tail.
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        self.storage.iter()
    }

    /// Drops every queued item. The capacity is kept.
    pub fn clear(&mut self) {
        self.storage.clear();
    }
}

impl<T> Default for BoundedQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}
