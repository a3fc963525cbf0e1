//! Ordered iterators over [`RbMap`](crate::RbMap).

use std::iter::FusedIterator;

use crate::arena::Arena;
use crate::types::Link;
use crate::util::{next, prev};

/// Borrowing iterator over `(&K, &V)` in ascending key order.
///
/// Walks successor links from both ends, so a full pass is O(n) and the map
/// stays borrowed (and therefore unmodified) until the iterator is dropped.
pub struct Iter<'a, K, V> {
    arena: &'a Arena<K, V>,
    front: Link,
    back: Link,
    remaining: usize,
}

impl<K, V> Clone for Iter<'_, K, V> {
    fn clone(&self) -> Self {
        Self {
            arena: self.arena,
            front: self.front,
            back: self.back,
            remaining: self.remaining,
        }
    }
}

impl<'a, K, V> Iter<'a, K, V> {
    pub(crate) fn new(arena: &'a Arena<K, V>, front: Link, back: Link, len: usize) -> Self {
        Self {
            arena,
            front,
            back,
            remaining: len,
        }
    }

    /// Slot indices in the same order as the entries.
    pub(crate) fn indices(self) -> impl Iterator<Item = u32> + 'a {
        let arena = self.arena;
        let mut curr = self.front;
        let mut remaining = self.remaining;
        std::iter::from_fn(move || {
            if remaining == 0 {
                return None;
            }
            let idx = curr?;
            remaining -= 1;
            curr = next(arena, idx);
            Some(idx)
        })
    }

    fn take_front(&mut self) -> Option<u32> {
        if self.remaining == 0 {
            return None;
        }
        let idx = self.front?;
        self.remaining -= 1;
        self.front = next(self.arena, idx);
        Some(idx)
    }

    fn take_back(&mut self) -> Option<u32> {
        if self.remaining == 0 {
            return None;
        }
        let idx = self.back?;
        self.remaining -= 1;
        self.back = prev(self.arena, idx);
        Some(idx)
    }

    fn entry(&self, idx: u32) -> (&'a K, &'a V) {
        let arena: &'a Arena<K, V> = self.arena;
        let node = &arena[idx];
        (&node.k, &node.v)
    }
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        self.take_front().map(|i| self.entry(i))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> DoubleEndedIterator for Iter<'_, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.take_back().map(|i| self.entry(i))
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {}

impl<K, V> FusedIterator for Iter<'_, K, V> {}

/// Keys in ascending order.
pub struct Keys<'a, K, V> {
    inner: Iter<'a, K, V>,
}

impl<'a, K, V> Keys<'a, K, V> {
    pub(crate) fn new(inner: Iter<'a, K, V>) -> Self {
        Self { inner }
    }
}

impl<'a, K, V> Iterator for Keys<'a, K, V> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(k, _)| k)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> DoubleEndedIterator for Keys<'_, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|(k, _)| k)
    }
}

impl<K, V> ExactSizeIterator for Keys<'_, K, V> {}

/// Values in ascending key order.
pub struct Values<'a, K, V> {
    inner: Iter<'a, K, V>,
}

impl<'a, K, V> Values<'a, K, V> {
    pub(crate) fn new(inner: Iter<'a, K, V>) -> Self {
        Self { inner }
    }
}

impl<'a, K, V> Iterator for Values<'a, K, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(_, v)| v)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> DoubleEndedIterator for Values<'_, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|(_, v)| v)
    }
}

impl<K, V> ExactSizeIterator for Values<'_, K, V> {}

/// Owning iterator over `(K, V)` in ascending key order.
///
/// Entries not yet yielded are dropped with the iterator.
pub struct IntoIter<K, V> {
    arena: Arena<K, V>,
    order: std::vec::IntoIter<u32>,
}

impl<K, V> IntoIter<K, V> {
    pub(crate) fn new(arena: Arena<K, V>, order: Vec<u32>) -> Self {
        Self {
            arena,
            order: order.into_iter(),
        }
    }
}

impl<K, V> Iterator for IntoIter<K, V> {
    type Item = (K, V);

    fn next(&mut self) -> Option<Self::Item> {
        let idx = self.order.next()?;
        Some(self.arena.release(idx).into_entry())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.order.size_hint()
    }
}

impl<K, V> DoubleEndedIterator for IntoIter<K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let idx = self.order.next_back()?;
        Some(self.arena.release(idx).into_entry())
    }
}

impl<K, V> ExactSizeIterator for IntoIter<K, V> {}

impl<K, V> FusedIterator for IntoIter<K, V> {}
