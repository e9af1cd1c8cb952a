//! Generational slot arena that owns every node of a graph.
//!
//! Slots are reused through an intrusive free list. Each slot carries a
//! generation counter that is bumped when the slot is vacated, so a stale
//! [`NodeId`] can never resolve to a node that later reuses its slot.

use core::fmt;

/// Stable handle to a node owned by a [`Graph`](super::Graph).
///
/// Handles are cheap to copy and compare. A handle stays valid until its node
/// is removed; afterwards every lookup through it returns `None`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId {
    index: u32,
    generation: u32,
}

impl NodeId {
    /// Slot index inside the owning arena.
    #[inline]
    pub fn index(self) -> usize {
        self.index as usize
    }

    /// Generation of the slot at the time the node was created.
    #[inline]
    pub fn generation(self) -> u32 {
        self.generation
    }
}

impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeId({}v{})", self.index, self.generation)
    }
}

#[derive(Clone)]
enum Slot<V> {
    Occupied { generation: u32, value: V },
    Free { generation: u32, next_free: Option<u32> },
}

/// Owning storage for graph values, addressed by [`NodeId`].
///
/// ### Performance Characteristics
/// | Operation | Complexity | Notes |
/// |-----------|------------|-------|
/// | `insert` | \(O(1)\) amortized | Pops the free list or appends |
/// | `remove` | \(O(1)\) | Pushes the slot onto the free list |
/// | `get` / `get_mut` | \(O(1)\) | Index + generation check |
#[derive(Clone)]
pub(crate) struct Arena<V> {
    slots: Vec<Slot<V>>,
    free_head: Option<u32>,
    len: usize,
}

impl<V> Arena<V> {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            free_head: None,
            len: 0,
        }
    }

    /// Number of live values.
    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.len
    }

    /// Number of slots ever allocated (live or free).
    ///
    /// Every live [`NodeId::index`] is strictly below this bound, which lets
    /// traversals size their visited tables once.
    #[inline]
    pub(crate) fn slot_count(&self) -> usize {
        self.slots.len()
    }

    pub(crate) fn insert(&mut self, value: V) -> NodeId {
        self.len += 1;

        if let Some(index) = self.free_head {
            if let Some(slot) = self.slots.get_mut(index as usize) {
                if let Slot::Free { generation, next_free } = *slot {
                    self.free_head = next_free;
                    *slot = Slot::Occupied { generation, value };
                    return NodeId { index, generation };
                }
            }
        }

        // Free list exhausted (or never started): grow.
        self.free_head = None;
        let index = self.slots.len() as u32;
        self.slots.push(Slot::Occupied {
            generation: 0,
            value,
        });
        NodeId {
            index,
            generation: 0,
        }
    }

    pub(crate) fn remove(&mut self, id: NodeId) -> Option<V> {
        let slot = self.slots.get_mut(id.index())?;
        match slot {
            Slot::Occupied { generation, .. } if *generation == id.generation => {}
            _ => return None,
        }

        let vacated = Slot::Free {
            generation: id.generation.wrapping_add(1),
            next_free: self.free_head,
        };
        match core::mem::replace(slot, vacated) {
            Slot::Occupied { value, .. } => {
                self.free_head = Some(id.index);
                self.len -= 1;
                Some(value)
            }
            Slot::Free { .. } => None,
        }
    }

    #[inline]
    pub(crate) fn get(&self, id: NodeId) -> Option<&V> {
        match self.slots.get(id.index())? {
            Slot::Occupied { generation, value } if *generation == id.generation => Some(value),
            _ => None,
        }
    }

    #[inline]
    pub(crate) fn get_mut(&mut self, id: NodeId) -> Option<&mut V> {
        match self.slots.get_mut(id.index())? {
            Slot::Occupied { generation, value } if *generation == id.generation => Some(value),
            _ => None,
        }
    }

    /// Iterates live values mutably in slot order.
    pub(crate) fn values_mut(&mut self) -> impl Iterator<Item = &mut V> {
        self.slots.iter_mut().filter_map(|slot| match slot {
            Slot::Occupied { value, .. } => Some(value),
            Slot::Free { .. } => None,
        })
    }

    pub(crate) fn clear(&mut self) {
        self.slots.clear();
        self.free_head = None;
        self.len = 0;
    }
}

impl<V> Default for Arena<V> {
    fn default() -> Self {
        Self::with_capacity(0)
    }
}
