use log::trace;

use super::rotate::{change_child, rotate};
use super::Color;
use crate::arena::Arena;
use crate::types::Link;
use crate::util::{first, swap};

/// Unlinks node `n` from the tree and restores the red-black invariants.
///
/// The node's slot is left occupied and fully detached; releasing it is up
/// to the caller.
///
/// A node with two children trades places with its in-order successor
/// first. The successor node itself is relinked into `n`'s position and
/// takes over `n`'s color; keys and values never move between slots, so
/// every surviving entry keeps its slot index.
pub fn remove<K, V>(arena: &mut Arena<K, V>, root: &mut Link, n: u32) {
    if let (Some(_), Some(r)) = (arena.l(n), arena.r(n)) {
        let Some(successor) = first(arena, Some(r)) else {
            return;
        };
        swap(arena, root, n, successor);
        let n_color = arena.color(n);
        arena.set_color(n, arena.color(successor));
        arena.set_color(successor, n_color);
    }

    // `n` now has at most one child.
    let child = arena.l(n).or(arena.r(n));
    let parent = arena.p(n);
    change_child(arena, root, parent, n, child);
    if let Some(c) = child {
        arena.set_p(c, parent);
    }

    let removed_black = arena[n].is_black();
    arena.set_p(n, None);
    arena.set_l(n, None);
    arena.set_r(n, None);

    if removed_black {
        remove_fixup(arena, root, child, parent);
    }
}

/// Pays back the black node missing on every path through the slot that
/// `x` now occupies under `parent`.
///
/// `x` may be `None` (an empty slot), which is why the parent is tracked
/// separately instead of being read from `x`.
fn remove_fixup<K, V>(arena: &mut Arena<K, V>, root: &mut Link, mut x: Link, mut parent: Link) {
    while x != *root && arena.is_black(x) {
        let Some(p) = parent else {
            break;
        };
        let side = arena.side_of(p, x);
        let far = side.opposite();

        // The deficient side had black height >= 1 before removal, so the
        // sibling subtree is never empty.
        let Some(mut s) = arena.child(p, far) else {
            break;
        };

        if arena[s].is_red() {
            trace!("remove fixup: red sibling {s} under {p}");
            arena.set_color(s, Color::Black);
            arena.set_color(p, Color::Red);
            rotate(arena, root, p, side);
            s = match arena.child(p, far) {
                Some(s) => s,
                None => break,
            };
        }

        let near_child = arena.child(s, side);
        let far_child = arena.child(s, far);

        if arena.is_black(near_child) && arena.is_black(far_child) {
            trace!("remove fixup: push deficit from {p} upward");
            arena.set_color(s, Color::Red);
            x = Some(p);
            parent = arena.p(p);
            continue;
        }

        if arena.is_black(far_child) {
            trace!("remove fixup: rotate red near nephew up at {s}");
            if let Some(nc) = near_child {
                arena.set_color(nc, Color::Black);
            }
            arena.set_color(s, Color::Red);
            rotate(arena, root, s, far);
            s = match arena.child(p, far) {
                Some(s) => s,
                None => break,
            };
        }

        trace!("remove fixup: absorb deficit at {p}");
        arena.set_color(s, arena.color(p));
        arena.set_color(p, Color::Black);
        if let Some(fc) = arena.child(s, far) {
            arena.set_color(fc, Color::Black);
        }
        rotate(arena, root, p, side);
        x = *root;
        break;
    }

    if let Some(x) = x {
        arena.set_color(x, Color::Black);
    }
}
