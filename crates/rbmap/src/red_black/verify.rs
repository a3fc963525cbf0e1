use crate::arena::Arena;
use crate::error::InvariantViolation;
use crate::types::Link;

/// Shape summary produced by a successful [`verify`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TreeStats {
    /// Reachable nodes.
    pub len: usize,
    /// Nodes on the longest root-to-leaf path.
    pub height: usize,
    /// Black nodes below the root on every root-to-leaf path.
    pub black_height: usize,
}

/// Scans the whole tree and reports the first broken property:
/// black root, parent back-links, no red node with a red child, equal black
/// count on every root-to-null path, and strictly increasing keys in order.
///
/// Walks in order with an explicit stack.
pub fn verify<K, V>(arena: &Arena<K, V>, root: Link) -> Result<TreeStats, InvariantViolation>
where
    K: PartialOrd,
{
    let Some(root) = root else {
        return Ok(TreeStats::default());
    };
    let root_node = arena
        .get(root)
        .ok_or(InvariantViolation::VacantSlot { node: root })?;
    if root_node.p.is_some() {
        return Err(InvariantViolation::RootHasParent { root });
    }
    if !root_node.is_black() {
        return Err(InvariantViolation::RootNotBlack { root });
    }

    let mut stats = TreeStats::default();
    let mut leaf_blacks: Option<usize> = None;
    let mut prev: Option<u32> = None;
    // (node, black nodes from the root down to and including it, depth)
    let mut stack: Vec<(u32, usize, usize)> = Vec::new();
    let mut curr = Some((root, 1, 1));

    let mut close_path = |node: u32, blacks: usize| -> Result<(), InvariantViolation> {
        match leaf_blacks {
            None => {
                leaf_blacks = Some(blacks);
                Ok(())
            }
            Some(expected) if expected != blacks => Err(InvariantViolation::BlackHeightMismatch {
                node,
                expected,
                found: blacks,
            }),
            Some(_) => Ok(()),
        }
    };

    loop {
        while let Some((idx, blacks, depth)) = curr {
            let node = arena
                .get(idx)
                .ok_or(InvariantViolation::VacantSlot { node: idx })?;
            stats.height = stats.height.max(depth);

            for child in [node.l, node.r].into_iter().flatten() {
                let c = arena
                    .get(child)
                    .ok_or(InvariantViolation::VacantSlot { node: child })?;
                if c.p != Some(idx) {
                    return Err(InvariantViolation::BrokenParentLink { node: idx, child });
                }
                if node.is_red() && c.is_red() {
                    return Err(InvariantViolation::RedRed { node: idx, child });
                }
            }

            if node.l.is_none() {
                close_path(idx, blacks)?;
            }
            stack.push((idx, blacks, depth));
            curr = match node.l {
                Some(l) => Some((l, blacks + usize::from(arena[l].is_black()), depth + 1)),
                None => None,
            };
        }

        let Some((idx, blacks, depth)) = stack.pop() else {
            break;
        };

        stats.len += 1;
        if stats.len > arena.live() {
            return Err(InvariantViolation::Cycle { node: idx });
        }
        if let Some(prev) = prev {
            if arena[prev].k.partial_cmp(&arena[idx].k) != Some(std::cmp::Ordering::Less) {
                return Err(InvariantViolation::OrderViolation { node: idx });
            }
        }
        prev = Some(idx);

        let r = arena[idx].r;
        if r.is_none() {
            close_path(idx, blacks)?;
        }
        curr = r.map(|r| (r, blacks + usize::from(arena[r].is_black()), depth + 1));
    }

    // The root is black and counted in every path.
    stats.black_height = leaf_blacks.unwrap_or(1) - 1;
    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::red_black::{Color, RbNode};

    fn node(arena: &mut Arena<i32, ()>, k: i32, color: Color) -> u32 {
        let mut n = RbNode::new(k, ());
        n.color = color;
        arena.alloc(n).unwrap()
    }

    fn link(arena: &mut Arena<i32, ()>, parent: u32, l: Link, r: Link) {
        arena.set_l(parent, l);
        arena.set_r(parent, r);
        for c in [l, r].into_iter().flatten() {
            arena.set_p(c, Some(parent));
        }
    }

    #[test]
    fn accepts_a_valid_tree() {
        let mut arena = Arena::new();
        let a = node(&mut arena, 1, Color::Red);
        let b = node(&mut arena, 2, Color::Black);
        let c = node(&mut arena, 3, Color::Red);
        link(&mut arena, b, Some(a), Some(c));
        let stats = verify(&arena, Some(b)).unwrap();
        assert_eq!(
            stats,
            TreeStats {
                len: 3,
                height: 2,
                black_height: 0
            }
        );
    }

    #[test]
    fn rejects_red_root() {
        let mut arena = Arena::new();
        let a = node(&mut arena, 1, Color::Red);
        assert_eq!(
            verify(&arena, Some(a)),
            Err(InvariantViolation::RootNotBlack { root: a })
        );
    }

    #[test]
    fn rejects_red_red_edge() {
        let mut arena = Arena::new();
        let a = node(&mut arena, 1, Color::Red);
        let b = node(&mut arena, 2, Color::Red);
        let c = node(&mut arena, 3, Color::Black);
        link(&mut arena, b, Some(a), None);
        link(&mut arena, c, Some(b), None);
        assert_eq!(
            verify(&arena, Some(c)),
            Err(InvariantViolation::RedRed { node: b, child: a })
        );
    }

    #[test]
    fn rejects_uneven_black_height() {
        // Black root with a single black child: the empty side has one
        // black node fewer.
        let mut arena = Arena::new();
        let a = node(&mut arena, 1, Color::Black);
        let b = node(&mut arena, 2, Color::Black);
        link(&mut arena, b, Some(a), None);
        assert!(matches!(
            verify(&arena, Some(b)),
            Err(InvariantViolation::BlackHeightMismatch { .. })
        ));
    }

    #[test]
    fn rejects_out_of_order_keys() {
        let mut arena = Arena::new();
        let a = node(&mut arena, 5, Color::Red);
        let b = node(&mut arena, 2, Color::Black);
        link(&mut arena, b, Some(a), None);
        assert_eq!(
            verify(&arena, Some(b)),
            Err(InvariantViolation::OrderViolation { node: b })
        );
    }

    #[test]
    fn rejects_broken_parent_link() {
        let mut arena = Arena::new();
        let a = node(&mut arena, 1, Color::Red);
        let b = node(&mut arena, 2, Color::Black);
        arena.set_l(b, Some(a));
        assert_eq!(
            verify(&arena, Some(b)),
            Err(InvariantViolation::BrokenParentLink { node: b, child: a })
        );
    }
}
