use rbmap::arena::Arena;
use rbmap::red_black::{insert, remove, verify, RbNode};
use rbmap::util::{first, next, size};
use rbmap::{Link, Side};

fn find(arena: &Arena<i32, i32>, root: Link, value: i32) -> Option<u32> {
    let mut curr = root;
    while let Some(i) = curr {
        curr = match value.cmp(&arena[i].k) {
            std::cmp::Ordering::Equal => return Some(i),
            std::cmp::Ordering::Less => arena.l(i),
            std::cmp::Ordering::Greater => arena.r(i),
        };
    }
    None
}

fn insert_value(arena: &mut Arena<i32, i32>, root: &mut Link, value: i32) {
    let mut parent = None;
    let mut side = Side::Left;
    let mut curr = *root;
    while let Some(i) = curr {
        parent = Some(i);
        side = if value < arena[i].k {
            Side::Left
        } else {
            Side::Right
        };
        curr = arena.child(i, side);
    }
    let idx = arena.alloc(RbNode::new(value, value)).unwrap();
    insert(arena, root, idx, parent, side);
    if let Err(err) = verify(arena, *root) {
        panic!("invalid red-black tree after insert({value}): {err}");
    }
}

fn delete_value(arena: &mut Arena<i32, i32>, root: &mut Link, value: i32) {
    if let Some(idx) = find(arena, *root, value) {
        remove(arena, root, idx);
        let node = arena.release(idx);
        assert_eq!(node.k, value);
        if let Err(err) = verify(arena, *root) {
            panic!("invalid red-black tree after delete({value}): {err}");
        }
    }
}

fn keys(arena: &Arena<i32, i32>, root: Link) -> Vec<i32> {
    let mut out = Vec::new();
    let mut curr = first(arena, root);
    while let Some(i) = curr {
        out.push(arena[i].k);
        curr = next(arena, i);
    }
    out
}

#[test]
fn rb_util_insert_delete_various_numbers_matrix() {
    let mut arena = Arena::new();
    let mut root = None;

    for value in [10, 11, 12, 50, 60, 25, 100, 88, 33, 22, 55, 59, 51] {
        insert_value(&mut arena, &mut root, value);
    }
    assert_eq!(size(&arena, root), 13);

    delete_value(&mut arena, &mut root, 100);
    assert_eq!(size(&arena, root), 12);

    delete_value(&mut arena, &mut root, 33);
    delete_value(&mut arena, &mut root, 33);
    assert_eq!(size(&arena, root), 11);

    delete_value(&mut arena, &mut root, 10);
    assert_eq!(size(&arena, root), 10);

    delete_value(&mut arena, &mut root, 60);
    assert_eq!(size(&arena, root), 9);

    delete_value(&mut arena, &mut root, 22);
    assert_eq!(size(&arena, root), 8);
    assert_eq!(keys(&arena, root), vec![11, 12, 25, 50, 51, 55, 59, 88]);
    assert_eq!(arena.live(), 8);
}

#[test]
fn rb_util_numbers_from_0_to_100_matrix() {
    let mut arena = Arena::new();
    let mut root = None;

    for i in 0..=100 {
        insert_value(&mut arena, &mut root, i);
        assert_eq!(size(&arena, root), (i + 1) as usize);
    }
    for i in 0..=100 {
        delete_value(&mut arena, &mut root, i);
        assert_eq!(size(&arena, root), (100 - i) as usize);
    }
    assert_eq!(root, None);
    assert_eq!(arena.live(), 0);
}

#[test]
fn rb_util_numbers_from_100_to_11_matrix() {
    let mut arena = Arena::new();
    let mut root = None;

    for i in (11..=100).rev() {
        insert_value(&mut arena, &mut root, i);
    }
    assert_eq!(keys(&arena, root), (11..=100).collect::<Vec<_>>());
    for i in (11..=100).rev() {
        delete_value(&mut arena, &mut root, i);
    }
    assert_eq!(root, None);
}

#[test]
fn rb_util_numbers_both_directions_from_50_matrix() {
    let mut arena = Arena::new();
    let mut root = None;

    insert_value(&mut arena, &mut root, 50);
    for i in 1..=100 {
        insert_value(&mut arena, &mut root, 50 + i);
        insert_value(&mut arena, &mut root, 50 - i);
        assert_eq!(size(&arena, root), (i * 2 + 1) as usize);
    }
    for i in 1..=100 {
        delete_value(&mut arena, &mut root, 50 - i);
        delete_value(&mut arena, &mut root, 50 + i);
    }
    assert_eq!(keys(&arena, root), vec![50]);
    delete_value(&mut arena, &mut root, 50);
    assert_eq!(root, None);
}

#[test]
fn rb_util_freed_slots_are_handed_out_again_matrix() {
    let mut arena = Arena::new();
    let mut root = None;

    for i in 0..32 {
        insert_value(&mut arena, &mut root, i);
    }
    for i in (0..32).filter(|i| i % 3 == 0) {
        delete_value(&mut arena, &mut root, i);
    }
    let slots = arena.slot_count();
    for i in 100..111 {
        insert_value(&mut arena, &mut root, i);
    }
    assert_eq!(arena.slot_count(), slots);
    assert_eq!(size(&arena, root), 32);
}
