//! In-order navigation over arena-linked binary trees.
//!
//! All walks are iterative: they follow child links down and parent links
//! back up, so stack depth never depends on tree shape.

pub mod swap;

use crate::arena::Arena;
use crate::types::Link;

pub use swap::swap;

/// Leftmost node under `root`.
pub fn first<K, V>(arena: &Arena<K, V>, root: Link) -> Link {
    let mut curr = root?;
    while let Some(l) = arena.l(curr) {
        curr = l;
    }
    Some(curr)
}

/// Rightmost node under `root`.
pub fn last<K, V>(arena: &Arena<K, V>, root: Link) -> Link {
    let mut curr = root?;
    while let Some(r) = arena.r(curr) {
        curr = r;
    }
    Some(curr)
}

/// In-order successor.
pub fn next<K, V>(arena: &Arena<K, V>, mut curr: u32) -> Link {
    if let Some(r) = arena.r(curr) {
        return first(arena, Some(r));
    }
    let mut p = arena.p(curr);
    while let Some(pi) = p {
        if arena.r(pi) == Some(curr) {
            curr = pi;
            p = arena.p(pi);
        } else {
            return Some(pi);
        }
    }
    None
}

/// In-order predecessor.
pub fn prev<K, V>(arena: &Arena<K, V>, mut curr: u32) -> Link {
    if let Some(l) = arena.l(curr) {
        return last(arena, Some(l));
    }
    let mut p = arena.p(curr);
    while let Some(pi) = p {
        if arena.l(pi) == Some(curr) {
            curr = pi;
            p = arena.p(pi);
        } else {
            return Some(pi);
        }
    }
    None
}

/// Number of nodes on the longest root-to-leaf path; `0` for an empty tree.
pub fn height<K, V>(arena: &Arena<K, V>, root: Link) -> usize {
    let mut max = 0;
    let mut stack: Vec<(u32, usize)> = root.map(|r| (r, 1)).into_iter().collect();
    while let Some((idx, depth)) = stack.pop() {
        max = max.max(depth);
        if let Some(l) = arena.l(idx) {
            stack.push((l, depth + 1));
        }
        if let Some(r) = arena.r(idx) {
            stack.push((r, depth + 1));
        }
    }
    max
}

/// Number of nodes under `root`.
pub fn size<K, V>(arena: &Arena<K, V>, root: Link) -> usize {
    let mut count = 0;
    let mut curr = first(arena, root);
    while let Some(idx) = curr {
        count += 1;
        curr = next(arena, idx);
    }
    count
}
