use std::cmp::Ordering;
use std::fmt;

use log::warn;

use crate::arena::Arena;
use crate::error::{InvariantViolation, MapError};
use crate::iter::{IntoIter, Iter, Keys, Values};
use crate::red_black::{self, RbNode};
use crate::types::{Link, Side};
use crate::util::{first, height, last, next, prev};

/// Outcome of a successful [`RbMap::insert`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Insertion<V> {
    /// The key was new; a node was created.
    Inserted,
    /// The key was present; its value was replaced and the old one is
    /// handed back.
    Updated(V),
}

impl<V> Insertion<V> {
    pub fn is_update(&self) -> bool {
        matches!(self, Insertion::Updated(_))
    }

    /// The replaced value, if any.
    pub fn previous(self) -> Option<V> {
        match self {
            Insertion::Inserted => None,
            Insertion::Updated(v) => Some(v),
        }
    }
}

/// Where a key sits relative to the tree.
enum Probe {
    Found(u32),
    Vacant { parent: Link, side: Side },
}

/// Ordered map backed by an arena-allocated red-black tree.
///
/// Keys are ordered by their [`PartialOrd`] implementation, which must be a
/// total order on every key stored; keys that are not equal to themselves
/// (such as `f64::NAN`) are rejected by [`insert`](Self::insert).
///
/// The map owns its values. Removal moves the value back out and updating a
/// key hands back the value it replaced.
///
/// Not synchronized: every mutation takes `&mut self`, and an [`Iter`]
/// borrows the map for its whole life, so the map cannot change while it
/// is being enumerated.
#[derive(Clone)]
pub struct RbMap<K, V> {
    arena: Arena<K, V>,
    root: Link,
    min: Link,
    max: Link,
    len: usize,
}

impl<K, V> Default for RbMap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> RbMap<K, V> {
    /// An empty map. Does not allocate.
    pub fn new() -> Self {
        Self::with_arena(Arena::new())
    }

    /// An empty map with room for `capacity` entries before the node arena
    /// grows.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_arena(Arena::with_capacity(capacity))
    }

    pub fn try_with_capacity(capacity: usize) -> Result<Self, MapError> {
        Ok(Self::with_arena(Arena::try_with_capacity(capacity)?))
    }

    fn with_arena(arena: Arena<K, V>) -> Self {
        Self {
            arena,
            root: None,
            min: None,
            max: None,
            len: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Entries the node arena can hold without reallocating.
    pub fn capacity(&self) -> usize {
        self.arena.capacity()
    }

    /// Drops every entry. Each node is released exactly once.
    pub fn clear(&mut self) {
        self.arena.clear();
        self.root = None;
        self.min = None;
        self.max = None;
        self.len = 0;
    }

    pub fn first_key_value(&self) -> Option<(&K, &V)> {
        self.min.map(|i| self.entry_at(i))
    }

    pub fn last_key_value(&self) -> Option<(&K, &V)> {
        self.max.map(|i| self.entry_at(i))
    }

    pub fn pop_first(&mut self) -> Option<(K, V)> {
        let idx = self.min?;
        Some(self.remove_at(idx))
    }

    pub fn pop_last(&mut self) -> Option<(K, V)> {
        let idx = self.max?;
        Some(self.remove_at(idx))
    }

    /// Entries in ascending key order.
    ///
    /// Each call starts a fresh pass; the iterator is cheap to clone.
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter::new(&self.arena, self.min, self.max, self.len)
    }

    pub fn keys(&self) -> Keys<'_, K, V> {
        Keys::new(self.iter())
    }

    pub fn values(&self) -> Values<'_, K, V> {
        Values::new(self.iter())
    }

    /// Calls `f` on every entry in ascending key order with mutable access
    /// to the value.
    pub fn for_each_mut<F: FnMut(&K, &mut V)>(&mut self, mut f: F) {
        let mut curr = self.min;
        while let Some(i) = curr {
            let node = &mut self.arena[i];
            f(&node.k, &mut node.v);
            curr = next(&self.arena, i);
        }
    }

    /// Nodes on the longest root-to-leaf path. At most `2 * log2(len + 1)`.
    pub fn height(&self) -> usize {
        height(&self.arena, self.root)
    }

    /// Black nodes below the root on any root-to-leaf path.
    pub fn black_height(&self) -> usize {
        red_black::black_height(&self.arena, self.root)
    }

    fn entry_at(&self, idx: u32) -> (&K, &V) {
        let node = &self.arena[idx];
        (&node.k, &node.v)
    }

    fn remove_at(&mut self, idx: u32) -> (K, V) {
        if self.max == Some(idx) {
            self.max = prev(&self.arena, idx);
        }
        if self.min == Some(idx) {
            self.min = next(&self.arena, idx);
        }
        red_black::remove(&mut self.arena, &mut self.root, idx);
        self.len -= 1;
        self.arena.release(idx).into_entry()
    }

    #[cfg(test)]
    pub(crate) fn root_entry(&self) -> Option<&RbNode<K, V>> {
        self.root.map(|r| &self.arena[r])
    }

    #[cfg(test)]
    pub(crate) fn slot_count(&self) -> usize {
        self.arena.slot_count()
    }
}

impl<K: PartialOrd, V> RbMap<K, V> {
    fn check_key(key: &K) -> Result<(), MapError> {
        match key.partial_cmp(key) {
            Some(Ordering::Equal) => Ok(()),
            _ => Err(MapError::InvalidArgument("key is not equal to itself")),
        }
    }

    fn compare(a: &K, b: &K) -> Result<Ordering, MapError> {
        a.partial_cmp(b)
            .ok_or(MapError::InvalidArgument("key is not comparable with a stored key"))
    }

    /// Finds the node holding `key`, or the empty child slot where it would
    /// be attached. Appends at either end are resolved against the cached
    /// bounds without descending.
    fn locate(&self, key: &K) -> Result<Probe, MapError> {
        Self::check_key(key)?;
        let (Some(root), Some(min), Some(max)) = (self.root, self.min, self.max) else {
            return Ok(Probe::Vacant {
                parent: None,
                side: Side::Left,
            });
        };

        match Self::compare(key, &self.arena[max].k)? {
            Ordering::Equal => return Ok(Probe::Found(max)),
            Ordering::Greater => {
                return Ok(Probe::Vacant {
                    parent: Some(max),
                    side: Side::Right,
                })
            }
            Ordering::Less => {}
        }
        match Self::compare(key, &self.arena[min].k)? {
            Ordering::Equal => return Ok(Probe::Found(min)),
            Ordering::Less => {
                return Ok(Probe::Vacant {
                    parent: Some(min),
                    side: Side::Left,
                })
            }
            Ordering::Greater => {}
        }

        let mut curr = root;
        loop {
            let side = match Self::compare(key, &self.arena[curr].k)? {
                Ordering::Equal => return Ok(Probe::Found(curr)),
                Ordering::Less => Side::Left,
                Ordering::Greater => Side::Right,
            };
            match self.arena.child(curr, side) {
                Some(child) => curr = child,
                None => {
                    return Ok(Probe::Vacant {
                        parent: Some(curr),
                        side,
                    })
                }
            }
        }
    }

    fn find(&self, key: &K) -> Option<u32> {
        let mut curr = self.root;
        while let Some(i) = curr {
            curr = match key.partial_cmp(&self.arena[i].k)? {
                Ordering::Equal => return Some(i),
                Ordering::Less => self.arena.l(i),
                Ordering::Greater => self.arena.r(i),
            };
        }
        None
    }

    /// Inserts `key` or, if it is already present, replaces its value.
    ///
    /// On error the map is unchanged: the key is checked and the node slot
    /// is reserved before any link is touched.
    pub fn insert(&mut self, key: K, value: V) -> Result<Insertion<V>, MapError> {
        let (parent, side) = match self.locate(&key)? {
            Probe::Found(idx) => {
                let old = std::mem::replace(&mut self.arena[idx].v, value);
                return Ok(Insertion::Updated(old));
            }
            Probe::Vacant { parent, side } => (parent, side),
        };

        let n = match self.arena.alloc(RbNode::new(key, value)) {
            Ok(n) => n,
            Err(err) => {
                warn!("insert aborted: {err}");
                return Err(err);
            }
        };
        red_black::insert(&mut self.arena, &mut self.root, n, parent, side);

        match (parent, side) {
            (None, _) => {
                self.min = Some(n);
                self.max = Some(n);
            }
            (Some(p), Side::Left) if self.min == Some(p) => self.min = Some(n),
            (Some(p), Side::Right) if self.max == Some(p) => self.max = Some(n),
            _ => {}
        }
        self.len += 1;
        Ok(Insertion::Inserted)
    }

    pub fn get(&self, key: &K) -> Option<&V> {
        self.find(key).map(|i| &self.arena[i].v)
    }

    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        let idx = self.find(key)?;
        Some(&mut self.arena[idx].v)
    }

    pub fn get_key_value(&self, key: &K) -> Option<(&K, &V)> {
        self.find(key).map(|i| self.entry_at(i))
    }

    pub fn contains_key(&self, key: &K) -> bool {
        self.find(key).is_some()
    }

    /// Removes `key`, returning its value. `None` when the key is absent;
    /// the map is then untouched.
    pub fn remove(&mut self, key: &K) -> Option<V> {
        self.remove_entry(key).map(|(_, v)| v)
    }

    pub fn remove_entry(&mut self, key: &K) -> Option<(K, V)> {
        let idx = self.find(key)?;
        Some(self.remove_at(idx))
    }

    /// Like [`remove`](Self::remove) but reports an absent key as
    /// [`MapError::KeyNotFound`].
    pub fn delete(&mut self, key: &K) -> Result<V, MapError> {
        self.remove(key).ok_or(MapError::KeyNotFound)
    }

    /// Runs the full invariant scan: red-black properties, parent links,
    /// strict key order, and agreement of the cached length and bounds with
    /// the tree.
    pub fn validate(&self) -> Result<(), InvariantViolation> {
        let stats = red_black::verify(&self.arena, self.root)?;
        if stats.len != self.len {
            return Err(InvariantViolation::LengthMismatch {
                expected: self.len,
                found: stats.len,
            });
        }
        if self.min != first(&self.arena, self.root) {
            return Err(InvariantViolation::StaleBound { bound: "min" });
        }
        if self.max != last(&self.arena, self.root) {
            return Err(InvariantViolation::StaleBound { bound: "max" });
        }
        Ok(())
    }
}

impl<K: fmt::Debug, V: fmt::Debug> RbMap<K, V> {
    /// Renders tree shape and colors for debugging. Not a stable format.
    pub fn print(&self) -> String {
        red_black::print(&self.arena, self.root)
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for RbMap<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K: PartialEq, V: PartialEq> PartialEq for RbMap<K, V> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<K: Eq, V: Eq> Eq for RbMap<K, V> {}

impl<'a, K, V> IntoIterator for &'a RbMap<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K, V> IntoIterator for RbMap<K, V> {
    type Item = (K, V);
    type IntoIter = IntoIter<K, V>;

    fn into_iter(self) -> Self::IntoIter {
        let order: Vec<u32> = self.iter().indices().collect();
        IntoIter::new(self.arena, order)
    }
}
