use crate::arena::Arena;
use crate::types::Link;

/// Exchanges the tree positions of nodes `x` and `y`.
///
/// Only links move: each node keeps its slot, key, value and color. Handles
/// the case where one node is the other's direct child. `root` is updated
/// when either node was the root.
pub fn swap<K, V>(arena: &mut Arena<K, V>, root: &mut Link, x: u32, y: u32) {
    if x == y {
        return;
    }

    let xp = arena.p(x);
    let xl = arena.l(x);
    let xr = arena.r(x);

    let yp = arena.p(y);
    let yl = arena.l(y);
    let yr = arena.r(y);

    if yl == Some(x) {
        arena.set_l(x, Some(y));
        arena.set_p(y, Some(x));
    } else {
        arena.set_l(x, yl);
        if let Some(yl) = yl {
            arena.set_p(yl, Some(x));
        }
    }

    if yr == Some(x) {
        arena.set_r(x, Some(y));
        arena.set_p(y, Some(x));
    } else {
        arena.set_r(x, yr);
        if let Some(yr) = yr {
            arena.set_p(yr, Some(x));
        }
    }

    if xl == Some(y) {
        arena.set_l(y, Some(x));
        arena.set_p(x, Some(y));
    } else {
        arena.set_l(y, xl);
        if let Some(xl) = xl {
            arena.set_p(xl, Some(y));
        }
    }

    if xr == Some(y) {
        arena.set_r(y, Some(x));
        arena.set_p(x, Some(y));
    } else {
        arena.set_r(y, xr);
        if let Some(xr) = xr {
            arena.set_p(xr, Some(y));
        }
    }

    match xp {
        None => {
            *root = Some(y);
            arena.set_p(y, None);
        }
        Some(xp) if xp != y => {
            arena.set_p(y, Some(xp));
            if arena.l(xp) == Some(x) {
                arena.set_l(xp, Some(y));
            } else {
                arena.set_r(xp, Some(y));
            }
        }
        Some(_) => {}
    }

    match yp {
        None => {
            *root = Some(x);
            arena.set_p(x, None);
        }
        Some(yp) if yp != x => {
            arena.set_p(x, Some(yp));
            if arena.l(yp) == Some(y) {
                arena.set_l(yp, Some(x));
            } else {
                arena.set_r(yp, Some(x));
            }
        }
        Some(_) => {}
    }
}
