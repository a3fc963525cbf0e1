//! Ordered map backed by an arena-allocated red-black tree.
//!
//! [`RbMap`] keeps its keys in ascending order and supports insert, lookup
//! and removal in O(log n), plus in-order enumeration.
//!
//! Nodes never point at each other. Every link is an `Option<u32>` slot index
//! into a `Vec`-backed [`arena`], children are owned through the arena, and
//! the parent link is a plain back-index. Freed slots are recycled through a
//! free list.
//!
//! # Module layout
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`types`] | [`Link`] and [`Side`] |
//! | [`arena`] | slot storage with free list |
//! | [`util`] | `first` / `last` / `next` / `prev` walks, position `swap` |
//! | [`red_black`] | rotations, insert / remove fixups, invariant checker, debug printer |
//! | [`map`] | the [`RbMap`] façade |
//! | [`iter`] | ordered iterators |
//!
//! # Example
//!
//! ```
//! use rbmap::{Insertion, RbMap};
//!
//! let mut map = RbMap::new();
//! map.insert("banana", 2).unwrap();
//! map.insert("apple", 1).unwrap();
//! assert_eq!(map.insert("apple", 10).unwrap(), Insertion::Updated(1));
//!
//! let keys: Vec<_> = map.keys().copied().collect();
//! assert_eq!(keys, ["apple", "banana"]);
//! assert_eq!(map.remove(&"banana"), Some(2));
//! assert_eq!(map.get(&"banana"), None);
//! map.validate().unwrap();
//! ```

pub mod arena;
pub mod error;
pub mod iter;
pub mod map;
pub mod red_black;
#[cfg(feature = "serde")]
mod serde_impl;
pub mod types;
pub mod util;

pub use error::{InvariantViolation, MapError};
pub use iter::{IntoIter, Iter, Keys, Values};
pub use map::{Insertion, RbMap};
pub use red_black::{Color, TreeStats};
pub use types::{Link, Side};
