//! `LinkedList` - a doubly linked list stored in a slot vector.
//!
//! Nodes live in a `Vec` of slots and link to each other by index, so the list
//! needs no raw pointers. Vacated slots go onto a free list and are reused.
//! Every slot has a generation counter; a [`ListHandle`] to a deleted element
//! stops resolving even after its slot is recycled.
//!
//! All walks (`search`, `iter`, `traverse`) are plain loops, so list length
//! never affects stack depth.

use core::fmt;

/// Handle to an element of a [`LinkedList`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListHandle {
    index: usize,
    generation: u32,
}

enum LinkSlot<T> {
    Occupied {
        generation: u32,
        prev: Option<usize>,
        next: Option<usize>,
        value: T,
    },
    Free {
        generation: u32,
        next_free: Option<usize>,
    },
}

/// A doubly linked list with stable element handles.
///
/// ### Performance Characteristics
/// | Operation | Complexity | Notes |
/// |-----------|------------|-------|
/// | `insert_in_begin` | \(O(1)\) | |
/// | `insert_at_end` | \(O(1)\) | Tail is tracked, no walk |
/// | `delete` | \(O(1)\) | Both neighbours are relinked |
/// | `search` | \(O(n)\) | Front-to-back scan |
pub struct LinkedList<T> {
    slots: Vec<LinkSlot<T>>,
    head: Option<usize>,
    tail: Option<usize>,
    free_head: Option<usize>,
    len: usize,
}

impl<T> LinkedList<T> {
    /// Creates an empty list.
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Creates an empty list with room for `capacity` elements.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            head: None,
            tail: None,
            free_head: None,
            len: 0,
        }
    }

    /// Number of elements in the list.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the list is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    fn alloc(&mut self, value: T, prev: Option<usize>, next: Option<usize>) -> ListHandle {
        if let Some(idx) = self.free_head {
            if let Some(slot) = self.slots.get_mut(idx) {
                if let LinkSlot::Free {
                    generation,
                    next_free,
                } = *slot
                {
                    self.free_head = next_free;
                    *slot = LinkSlot::Occupied {
                        generation,
                        prev,
                        next,
                        value,
                    };
                    return ListHandle {
                        index: idx,
                        generation,
                    };
                }
            }
        }

        self.free_head = None;
        let index = self.slots.len();
        self.slots.push(LinkSlot::Occupied {
            generation: 0,
            prev,
            next,
            value,
        });
        ListHandle {
            index,
            generation: 0,
        }
    }

    fn set_prev(&mut self, idx: usize, new_prev: Option<usize>) {
        if let Some(LinkSlot::Occupied { prev, .. }) = self.slots.get_mut(idx) {
            *prev = new_prev;
        }
    }

    fn set_next(&mut self, idx: usize, new_next: Option<usize>) {
        if let Some(LinkSlot::Occupied { next, .. }) = self.slots.get_mut(idx) {
            *next = new_next;
        }
    }

    fn next_of(&self, idx: usize) -> Option<usize> {
        match self.slots.get(idx)? {
            LinkSlot::Occupied { next, .. } => *next,
            LinkSlot::Free { .. } => None,
        }
    }

    fn handle_at(&self, idx: usize) -> Option<ListHandle> {
        match self.slots.get(idx)? {
            LinkSlot::Occupied { generation, .. } => Some(ListHandle {
                index: idx,
                generation: *generation,
            }),
            LinkSlot::Free { .. } => None,
        }
    }

    /// Pushes `value` to the front of the list.
    pub fn insert_in_begin(&mut self, value: T) -> ListHandle {
        let old_head = self.head;
        let handle = self.alloc(value, None, old_head);

        match old_head {
            Some(head) => self.set_prev(head, Some(handle.index)),
            None => self.tail = Some(handle.index),
        }
        self.head = Some(handle.index);
        self.len += 1;
        handle
    }

    /// Pushes `value` to the back of the list.
    pub fn insert_at_end(&mut self, value: T) -> ListHandle {
        let old_tail = self.tail;
        let handle = self.alloc(value, old_tail, None);

        match old_tail {
            Some(tail) => self.set_next(tail, Some(handle.index)),
            None => self.head = Some(handle.index),
        }
        self.tail = Some(handle.index);
        self.len += 1;
        handle
    }

    /// Unlinks the element behind `handle` and returns its value.
    ///
    /// Returns `None` if the handle is stale.
    pub fn delete(&mut self, handle: ListHandle) -> Option<T> {
        let slot = self.slots.get_mut(handle.index)?;
        match slot {
            LinkSlot::Occupied { generation, .. } if *generation == handle.generation => {}
            _ => return None,
        }

        let vacated = LinkSlot::Free {
            generation: handle.generation.wrapping_add(1),
            next_free: self.free_head,
        };
        let (prev, next, value) = match core::mem::replace(slot, vacated) {
            LinkSlot::Occupied {
                prev, next, value, ..
            } => (prev, next, value),
            LinkSlot::Free { .. } => return None,
        };
        self.free_head = Some(handle.index);

        match prev {
            Some(p) => self.set_next(p, next),
            None => self.head = next,
        }
        match next {
            Some(n) => self.set_prev(n, prev),
            None => self.tail = prev,
        }

        self.len -= 1;
        Some(value)
    }

    /// Returns the element behind `handle`, if it is still in the list.
    pub fn get(&self, handle: ListHandle) -> Option<&T> {
        match self.slots.get(handle.index)? {
            LinkSlot::Occupied {
                generation, value, ..
            } if *generation == handle.generation => Some(value),
            _ => None,
        }
    }

    /// The first element.
    pub fn front(&self) -> Option<&T> {
        self.head.and_then(|idx| self.value_at(idx))
    }

    /// The last element.
    pub fn back(&self) -> Option<&T> {
        self.tail.and_then(|idx| self.value_at(idx))
    }

    fn value_at(&self, idx: usize) -> Option<&T> {
        match self.slots.get(idx)? {
            LinkSlot::Occupied { value, .. } => Some(value),
            LinkSlot::Free { .. } => None,
        }
    }

    /// Finds the first element, front to back, matching `predicate`.
    pub fn search<P>(&self, mut predicate: P) -> Option<ListHandle>
    where
        P: FnMut(&T) -> bool,
    {
        let mut current = self.head;
        while let Some(idx) = current {
            if self.value_at(idx).is_some_and(&mut predicate) {
                return self.handle_at(idx);
            }
            current = self.next_of(idx);
        }
        None
    }

    /// Iterates elements front to back.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            list: self,
            current: self.head,
            remaining: self.len,
        }
    }

    /// Collects references to every element, front to back.
    pub fn traverse(&self) -> Vec<&T> {
        self.iter().collect()
    }

    /// Removes every element.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.head = None;
        self.tail = None;
        self.free_head = None;
        self.len = 0;
    }
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for LinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> Extend<T> for LinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert_at_end(value);
        }
    }
}

impl<T> FromIterator<T> for LinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

/// Front-to-back iterator over a [`LinkedList`].
pub struct Iter<'a, T> {
    list: &'a LinkedList<T>,
    current: Option<usize>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let idx = self.current?;
        self.current = self.list.next_of(idx);
        self.remaining = self.remaining.saturating_sub(1);
        self.list.value_at(idx)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T> IntoIterator for &'a LinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
