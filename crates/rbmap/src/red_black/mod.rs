//! Red-black tree algorithms over an [`Arena`](crate::arena::Arena).
//!
//! These functions work on raw slot indices and a root link; they know
//! nothing about key lookup. [`RbMap`](crate::RbMap) does the key descent
//! and calls in here to attach or detach nodes.
//!
//! Invariants restored by every entry point:
//!
//! 1. every node is red or black,
//! 2. the root is black,
//! 3. missing children count as black,
//! 4. a red node has no red child,
//! 5. every root-to-null path carries the same number of black nodes.

pub mod insert;
pub mod print;
pub mod remove;
pub mod rotate;
pub mod types;
pub mod verify;

pub use insert::insert;
pub use print::print;
pub use remove::remove;
pub use rotate::{rotate_left, rotate_right};
pub use types::{Color, RbNode};
pub use verify::{verify, TreeStats};

use crate::arena::Arena;
use crate::types::Link;

/// Black nodes below the root on the leftmost path. Equal to the count on
/// every other path when the tree is valid.
pub fn black_height<K, V>(arena: &Arena<K, V>, root: Link) -> usize {
    let Some(root) = root else {
        return 0;
    };
    let mut count = 0;
    let mut curr = arena.l(root);
    while let Some(i) = curr {
        if arena[i].is_black() {
            count += 1;
        }
        curr = arena.l(i);
    }
    count
}
