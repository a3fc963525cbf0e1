use log::trace;

use super::rotate::rotate;
use super::Color;
use crate::arena::Arena;
use crate::types::{Link, Side};

/// Hangs the detached node `n` under `parent` on `side` (or makes it the
/// root when `parent` is `None`), then restores the red-black invariants.
///
/// The caller has already established by key descent that the `side` child
/// of `parent` is empty and that `n` belongs there.
pub fn insert<K, V>(arena: &mut Arena<K, V>, root: &mut Link, n: u32, parent: Link, side: Side) {
    arena.set_color(n, Color::Red);
    arena.set_l(n, None);
    arena.set_r(n, None);
    arena.set_p(n, parent);
    match parent {
        Some(p) => arena.set_child(p, side, Some(n)),
        None => *root = Some(n),
    }
    insert_fixup(arena, root, n);
}

/// Repairs red-red violations upward from the red node `n`.
///
/// Performs at most two rotations; red uncles are resolved by recoloring
/// and moving the violation two levels up.
fn insert_fixup<K, V>(arena: &mut Arena<K, V>, root: &mut Link, mut n: u32) {
    while let Some(mut p) = arena.p(n) {
        if arena.is_black(Some(p)) {
            break;
        }
        // A red parent is never the root.
        let Some(g) = arena.p(p) else {
            break;
        };

        let side = arena.side_of(g, Some(p));
        let uncle = arena.child(g, side.opposite());

        if let Some(u) = uncle.filter(|&u| arena[u].is_red()) {
            trace!("insert fixup: red uncle {u}, recolor at {g}");
            arena.set_color(p, Color::Black);
            arena.set_color(u, Color::Black);
            arena.set_color(g, Color::Red);
            n = g;
            continue;
        }

        if arena.side_of(p, Some(n)) != side {
            trace!("insert fixup: straighten zig-zag at {p}");
            rotate(arena, root, p, side);
            p = n;
        }

        arena.set_color(p, Color::Black);
        arena.set_color(g, Color::Red);
        rotate(arena, root, g, side.opposite());
        break;
    }

    if let Some(r) = *root {
        arena.set_color(r, Color::Black);
    }
}
