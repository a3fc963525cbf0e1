use std::collections::TryReserveError;

use thiserror::Error;

/// Failures reported by [`RbMap`](crate::RbMap) operations.
///
/// Every mutating call that returns an error leaves the map exactly as it
/// was before the call.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MapError {
    /// The node arena could not grow to hold a new entry.
    #[error("node allocation failed: {0}")]
    AllocationFailure(#[from] TryReserveError),

    /// The node arena has used up its `u32` index space.
    #[error("node arena is full ({} slots)", u32::MAX)]
    CapacityOverflow,

    #[error("key not found")]
    KeyNotFound,

    /// The key cannot take part in the map's total order, e.g. `f64::NAN`.
    #[error("invalid key: {0}")]
    InvalidArgument(&'static str),
}

/// A broken red-black or search-tree property found by
/// [`verify`](crate::red_black::verify).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvariantViolation {
    #[error("root {root} is not black")]
    RootNotBlack { root: u32 },

    #[error("root {root} has a parent link")]
    RootHasParent { root: u32 },

    #[error("link to vacant slot {node}")]
    VacantSlot { node: u32 },

    #[error("child {child} does not link back to parent {node}")]
    BrokenParentLink { node: u32, child: u32 },

    #[error("red node {node} has red child {child}")]
    RedRed { node: u32, child: u32 },

    #[error("black height mismatch under node {node}: expected {expected}, found {found}")]
    BlackHeightMismatch {
        node: u32,
        expected: usize,
        found: usize,
    },

    #[error("key order violated at node {node}")]
    OrderViolation { node: u32 },

    #[error("tree reaches more nodes than the arena holds (at node {node})")]
    Cycle { node: u32 },

    #[error("tree holds {found} nodes, map counts {expected}")]
    LengthMismatch { expected: usize, found: usize },

    #[error("cached {bound} bound is stale")]
    StaleBound { bound: &'static str },
}
