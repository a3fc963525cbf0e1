//! Link vocabulary shared by the arena, navigation and rebalancing code.
//!
//! Nodes never hold references to one another. Every "pointer" is an
//! `Option<u32>` index into the [`Arena`](crate::arena::Arena) that owns the
//! nodes: children are owned through the arena, and the parent link is a
//! plain back-index with no ownership attached.

/// A link to another node slot, `None` when the child (or parent) is absent.
pub type Link = Option<u32>;

/// Which child of a parent a node hangs from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    /// The mirror side.
    #[inline]
    pub fn opposite(self) -> Self {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}
