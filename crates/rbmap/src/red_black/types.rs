use crate::types::Link;

/// Node color.
///
/// Kept as its own field rather than packed into a link, so every link stays
/// a plain index.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Color {
    /// Freshly attached nodes start red.
    #[default]
    Red,
    Black,
}

impl Color {
    pub fn is_black(self) -> bool {
        self == Color::Black
    }

    pub fn is_red(self) -> bool {
        self == Color::Red
    }
}

/// A red-black tree node stored in an arena slot.
#[derive(Clone, Debug)]
pub struct RbNode<K, V> {
    pub p: Link,
    pub l: Link,
    pub r: Link,
    pub k: K,
    pub v: V,
    pub color: Color,
}

impl<K, V> RbNode<K, V> {
    /// A detached red node.
    pub fn new(k: K, v: V) -> Self {
        Self {
            p: None,
            l: None,
            r: None,
            k,
            v,
            color: Color::Red,
        }
    }

    pub fn is_black(&self) -> bool {
        self.color.is_black()
    }

    pub fn is_red(&self) -> bool {
        self.color.is_red()
    }

    pub fn is_leaf(&self) -> bool {
        self.l.is_none() && self.r.is_none()
    }

    pub fn into_entry(self) -> (K, V) {
        (self.k, self.v)
    }
}
