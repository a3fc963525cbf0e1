use std::fmt::{Debug, Write};

use crate::arena::Arena;
use crate::types::Link;

/// Debug rendering of tree shape and colors.
///
/// Each node prints as `Node[slot] color { key = value }` with its children
/// on the following lines as `L=` / `R=`, indented two spaces per level.
/// Empty links print as `∅`.
pub fn print<K, V>(arena: &Arena<K, V>, root: Link) -> String
where
    K: Debug,
    V: Debug,
{
    let mut out = String::new();
    let mut stack: Vec<(Link, usize, &str)> = vec![(root, 0, "")];
    while let Some((link, depth, label)) = stack.pop() {
        if depth > 0 {
            out.push('\n');
            out.push_str(&"  ".repeat(depth - 1));
            out.push_str(label);
        }
        match link {
            None => out.push('∅'),
            Some(i) => {
                let n = &arena[i];
                let color = if n.is_black() { "black" } else { "red" };
                // Writing to a String cannot fail.
                let _ = write!(out, "Node[{i}] {color} {{ {:?} = {:?} }}", n.k, n.v);
                stack.push((n.r, depth + 1, "R="));
                stack.push((n.l, depth + 1, "L="));
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::red_black::{Color, RbNode};

    #[test]
    fn prints_nested_children() {
        let mut arena = Arena::new();
        let a = arena.alloc(RbNode::new(1, "a")).unwrap();
        let b = arena.alloc(RbNode::new(2, "b")).unwrap();
        arena.set_color(b, Color::Black);
        arena.set_l(b, Some(a));
        arena.set_p(a, Some(b));

        let expected = "Node[1] black { 2 = \"b\" }\n\
                        L=Node[0] red { 1 = \"a\" }\n\
                        \x20 L=∅\n\
                        \x20 R=∅\n\
                        R=∅";
        assert_eq!(print(&arena, Some(b)), expected);
    }

    #[test]
    fn prints_empty_tree() {
        let arena = Arena::<i32, i32>::new();
        assert_eq!(print(&arena, None), "∅");
    }
}
