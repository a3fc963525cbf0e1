use log::trace;

use crate::arena::Arena;
use crate::types::{Link, Side};

/// Points whatever referenced `old` (its parent's child slot, or the root)
/// at `new` instead.
pub(crate) fn change_child<K, V>(
    arena: &mut Arena<K, V>,
    root: &mut Link,
    parent: Link,
    old: u32,
    new: Link,
) {
    match parent {
        Some(p) => {
            let side = arena.side_of(p, Some(old));
            arena.set_child(p, side, new);
        }
        None => *root = new,
    }
}

/// Rotates `n` down towards `dir`, promoting its child on the opposite side.
///
/// `dir == Side::Left` is a left rotation: the right child takes `n`'s place
/// and `n` becomes its left child. In-order sequence is unchanged.
pub(crate) fn rotate<K, V>(arena: &mut Arena<K, V>, root: &mut Link, n: u32, dir: Side) {
    let Some(up) = arena.child(n, dir.opposite()) else {
        debug_assert!(false, "rotation of node {n} without a {:?} child", dir.opposite());
        return;
    };
    trace!("rotate {dir:?} at {n}, promoting {up}");

    let inner = arena.child(up, dir);
    arena.set_child(n, dir.opposite(), inner);
    if let Some(inner) = inner {
        arena.set_p(inner, Some(n));
    }

    let p = arena.p(n);
    arena.set_p(up, p);
    change_child(arena, root, p, n, Some(up));

    arena.set_child(up, dir, Some(n));
    arena.set_p(n, Some(up));
}

/// Promotes the right child of `n` into `n`'s position.
///
/// `n` must have a right child.
pub fn rotate_left<K, V>(arena: &mut Arena<K, V>, root: &mut Link, n: u32) {
    rotate(arena, root, n, Side::Left);
}

/// Promotes the left child of `n` into `n`'s position.
///
/// `n` must have a left child.
pub fn rotate_right<K, V>(arena: &mut Arena<K, V>, root: &mut Link, n: u32) {
    rotate(arena, root, n, Side::Right);
}
