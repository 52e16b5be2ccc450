//! Generational slot arena owning every DCEL record.
//!
//! Records reference each other through typed slotmap keys instead of
//! pointers, so relinking during a split or merge is a handful of index
//! assignments and the cyclic next/prev/twin web needs no reference counting.
//! Freed slots are recycled and their version bumped, so stale keys never
//! resolve to the new occupant.

use slotmap::{Key, SlotMap};
use std::ops::{Index, IndexMut};

/// Slot storage for one record kind, keyed by that kind's key type.
#[derive(Clone, Debug)]
pub(crate) struct Arena<K: Key, T> {
    slots: SlotMap<K, T>,
}

impl<K: Key, T> Default for Arena<K, T> {
    fn default() -> Self {
        Self {
            slots: SlotMap::with_key(),
        }
    }
}

impl<K: Key, T> Arena<K, T> {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Number of live records.
    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.slots.len()
    }

    /// Store `value` and return its key.
    pub(crate) fn insert(&mut self, value: T) -> K {
        self.slots.insert(value)
    }

    /// Remove the record behind `k`; `None` if `k` is stale.
    pub(crate) fn remove(&mut self, k: K) -> Option<T> {
        self.slots.remove(k)
    }

    #[inline]
    pub(crate) fn contains(&self, k: K) -> bool {
        self.slots.contains_key(k)
    }

    #[inline]
    pub(crate) fn get(&self, k: K) -> Option<&T> {
        self.slots.get(k)
    }

    #[inline]
    pub(crate) fn get_mut(&mut self, k: K) -> Option<&mut T> {
        self.slots.get_mut(k)
    }

    /// Live records in slot order.
    pub(crate) fn iter(&self) -> impl Iterator<Item = (K, &T)> + '_ {
        self.slots.iter()
    }
}

impl<K: Key, T> Index<K> for Arena<K, T> {
    type Output = T;

    #[inline]
    fn index(&self, k: K) -> &T {
        match self.get(k) {
            Some(v) => v,
            None => panic!("stale arena key {:?}", k.data()),
        }
    }
}

impl<K: Key, T> IndexMut<K> for Arena<K, T> {
    #[inline]
    fn index_mut(&mut self, k: K) -> &mut T {
        match self.get_mut(k) {
            Some(v) => v,
            None => panic!("stale arena key {:?}", k.data()),
        }
    }
}
