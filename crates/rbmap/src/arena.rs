//! Slot storage for tree nodes.
//!
//! Nodes live in a `Vec` and address each other by `u32` slot index. Freed
//! slots are threaded into a singly-linked free list and handed out again
//! before the vector grows, so a long-lived map with churn stays at its
//! high-water mark instead of leaking slots.

use std::collections::TryReserveError;
use std::ops::{Index, IndexMut};

use log::debug;

use crate::error::MapError;
use crate::red_black::{Color, RbNode};
use crate::types::{Link, Side};

#[derive(Clone, Debug)]
enum Slot<K, V> {
    Occupied(RbNode<K, V>),
    Vacant { next: Link },
}

#[derive(Clone, Debug)]
pub struct Arena<K, V> {
    slots: Vec<Slot<K, V>>,
    free_head: Link,
    live: usize,
}

impl<K, V> Default for Arena<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> Arena<K, V> {
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            free_head: None,
            live: 0,
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            free_head: None,
            live: 0,
        }
    }

    pub fn try_with_capacity(capacity: usize) -> Result<Self, TryReserveError> {
        let mut slots = Vec::new();
        slots.try_reserve_exact(capacity)?;
        Ok(Self {
            slots,
            free_head: None,
            live: 0,
        })
    }

    /// Number of occupied slots.
    pub fn live(&self) -> usize {
        self.live
    }

    /// Number of slots ever handed out, occupied or free.
    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    pub fn capacity(&self) -> usize {
        self.slots.capacity()
    }

    /// Stores `node` in a free slot, growing the vector only when the free
    /// list is empty. On error nothing has been stored.
    pub fn alloc(&mut self, node: RbNode<K, V>) -> Result<u32, MapError> {
        if let Some(idx) = self.free_head {
            let next = match self.slots[idx as usize] {
                Slot::Vacant { next } => next,
                Slot::Occupied(_) => panic!("free list reaches occupied slot {idx}"),
            };
            self.free_head = next;
            self.slots[idx as usize] = Slot::Occupied(node);
            self.live += 1;
            return Ok(idx);
        }

        let idx = u32::try_from(self.slots.len()).map_err(|_| MapError::CapacityOverflow)?;
        if self.slots.len() == self.slots.capacity() {
            self.slots.try_reserve(1)?;
            debug!("node arena grew to {} slots", self.slots.capacity());
        }
        self.slots.push(Slot::Occupied(node));
        self.live += 1;
        Ok(idx)
    }

    /// Takes the node out of `idx` and pushes the slot onto the free list.
    pub fn release(&mut self, idx: u32) -> RbNode<K, V> {
        let slot = std::mem::replace(
            &mut self.slots[idx as usize],
            Slot::Vacant {
                next: self.free_head,
            },
        );
        match slot {
            Slot::Occupied(node) => {
                self.free_head = Some(idx);
                self.live -= 1;
                node
            }
            Slot::Vacant { .. } => panic!("release of vacant slot {idx}"),
        }
    }

    /// Drops every node and forgets every slot. Each node is dropped exactly
    /// once, in slot order.
    pub fn clear(&mut self) {
        debug!("releasing {} nodes", self.live);
        self.slots.clear();
        self.free_head = None;
        self.live = 0;
    }

    pub fn get(&self, idx: u32) -> Option<&RbNode<K, V>> {
        match self.slots.get(idx as usize)? {
            Slot::Occupied(node) => Some(node),
            Slot::Vacant { .. } => None,
        }
    }

    pub fn get_mut(&mut self, idx: u32) -> Option<&mut RbNode<K, V>> {
        match self.slots.get_mut(idx as usize)? {
            Slot::Occupied(node) => Some(node),
            Slot::Vacant { .. } => None,
        }
    }

    #[inline]
    pub fn p(&self, idx: u32) -> Link {
        self[idx].p
    }

    #[inline]
    pub fn l(&self, idx: u32) -> Link {
        self[idx].l
    }

    #[inline]
    pub fn r(&self, idx: u32) -> Link {
        self[idx].r
    }

    #[inline]
    pub fn child(&self, idx: u32, side: Side) -> Link {
        match side {
            Side::Left => self[idx].l,
            Side::Right => self[idx].r,
        }
    }

    #[inline]
    pub fn set_p(&mut self, idx: u32, v: Link) {
        self[idx].p = v;
    }

    #[inline]
    pub fn set_l(&mut self, idx: u32, v: Link) {
        self[idx].l = v;
    }

    #[inline]
    pub fn set_r(&mut self, idx: u32, v: Link) {
        self[idx].r = v;
    }

    #[inline]
    pub fn set_child(&mut self, idx: u32, side: Side, v: Link) {
        match side {
            Side::Left => self[idx].l = v,
            Side::Right => self[idx].r = v,
        }
    }

    /// Which side of `parent` the node `child` hangs from.
    #[inline]
    pub fn side_of(&self, parent: u32, child: Link) -> Side {
        if self[parent].l == child {
            Side::Left
        } else {
            Side::Right
        }
    }

    #[inline]
    pub fn color(&self, idx: u32) -> Color {
        self[idx].color
    }

    #[inline]
    pub fn set_color(&mut self, idx: u32, color: Color) {
        self[idx].color = color;
    }

    /// Missing children count as black.
    #[inline]
    pub fn is_black(&self, link: Link) -> bool {
        link.map_or(true, |i| self[i].is_black())
    }

    #[inline]
    pub fn is_red(&self, link: Link) -> bool {
        !self.is_black(link)
    }
}

impl<K, V> Index<u32> for Arena<K, V> {
    type Output = RbNode<K, V>;

    fn index(&self, idx: u32) -> &Self::Output {
        match &self.slots[idx as usize] {
            Slot::Occupied(node) => node,
            Slot::Vacant { .. } => panic!("slot {idx} is vacant"),
        }
    }
}

impl<K, V> IndexMut<u32> for Arena<K, V> {
    fn index_mut(&mut self, idx: u32) -> &mut Self::Output {
        match &mut self.slots[idx as usize] {
            Slot::Occupied(node) => node,
            Slot::Vacant { .. } => panic!("slot {idx} is vacant"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn released_slots_are_reused_before_growing() {
        let mut arena = Arena::new();
        let a = arena.alloc(RbNode::new(1, "a")).unwrap();
        let b = arena.alloc(RbNode::new(2, "b")).unwrap();
        let c = arena.alloc(RbNode::new(3, "c")).unwrap();
        assert_eq!((a, b, c), (0, 1, 2));

        assert_eq!(arena.release(b).into_entry(), (2, "b"));
        assert_eq!(arena.release(a).into_entry(), (1, "a"));
        assert_eq!(arena.live(), 1);
        assert!(arena.get(a).is_none());

        // LIFO reuse.
        assert_eq!(arena.alloc(RbNode::new(4, "d")).unwrap(), a);
        assert_eq!(arena.alloc(RbNode::new(5, "e")).unwrap(), b);
        assert_eq!(arena.alloc(RbNode::new(6, "f")).unwrap(), 3);
        assert_eq!(arena.slot_count(), 4);
        assert_eq!(arena.live(), 4);
    }

    #[test]
    fn missing_links_are_black() {
        let mut arena = Arena::new();
        let a = arena.alloc(RbNode::new(1, ())).unwrap();
        assert!(arena.is_black(None));
        assert!(arena.is_red(Some(a)));
        arena.set_color(a, Color::Black);
        assert!(arena.is_black(Some(a)));
    }

    #[test]
    fn clear_forgets_free_list() {
        let mut arena = Arena::new();
        let a = arena.alloc(RbNode::new(1, ())).unwrap();
        arena.alloc(RbNode::new(2, ())).unwrap();
        arena.release(a);
        arena.clear();
        assert_eq!(arena.live(), 0);
        assert_eq!(arena.slot_count(), 0);
        assert_eq!(arena.alloc(RbNode::new(3, ())).unwrap(), 0);
    }

    #[test]
    #[should_panic(expected = "vacant")]
    fn indexing_a_released_slot_panics() {
        let mut arena = Arena::new();
        let a = arena.alloc(RbNode::new(1, ())).unwrap();
        arena.release(a);
        let _ = &arena[a];
    }
}
