use std::collections::BTreeMap;

use proptest::prelude::*;
use rbmap::{Insertion, RbMap};

#[derive(Clone, Debug)]
enum Op {
    Insert(i16, u32),
    Remove(i16),
    PopFirst,
    PopLast,
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => (any::<i16>().prop_map(|k| k % 256), any::<u32>()).prop_map(|(k, v)| Op::Insert(k, v)),
        3 => any::<i16>().prop_map(|k| Op::Remove(k % 256)),
        1 => Just(Op::PopFirst),
        1 => Just(Op::PopLast),
    ]
}

fn assert_same(map: &RbMap<i16, u32>, model: &BTreeMap<i16, u32>) {
    if let Err(err) = map.validate() {
        panic!("invariant broken: {err}\n{}", map.print());
    }
    assert_eq!(map.len(), model.len());
    let entries: Vec<(i16, u32)> = map.iter().map(|(k, v)| (*k, *v)).collect();
    let expected: Vec<(i16, u32)> = model.iter().map(|(k, v)| (*k, *v)).collect();
    assert_eq!(entries, expected);
    let len = map.len() as f64;
    assert!(map.height() as f64 <= 2.0 * (len + 1.0).log2());
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn ops_match_btree_map_model(ops in proptest::collection::vec(op(), 0..400)) {
        let mut map = RbMap::new();
        let mut model = BTreeMap::new();

        for op in ops {
            match op {
                Op::Insert(k, v) => {
                    let outcome = map.insert(k, v).unwrap();
                    match model.insert(k, v) {
                        Some(old) => prop_assert_eq!(outcome, Insertion::Updated(old)),
                        None => prop_assert_eq!(outcome, Insertion::Inserted),
                    }
                }
                Op::Remove(k) => prop_assert_eq!(map.remove(&k), model.remove(&k)),
                Op::PopFirst => prop_assert_eq!(map.pop_first(), model.pop_first()),
                Op::PopLast => prop_assert_eq!(map.pop_last(), model.pop_last()),
            }
            assert_same(&map, &model);
        }
    }

    #[test]
    fn lookups_find_exactly_the_inserted_keys(
        inserts in proptest::collection::vec(0..10_000i32, 0..500),
        probes in proptest::collection::vec(0..10_000i32, 0..50),
    ) {
        let mut map = RbMap::new();
        let mut model = BTreeMap::new();
        for k in &inserts {
            map.insert(*k, k.wrapping_mul(7)).unwrap();
            model.insert(*k, k.wrapping_mul(7));
        }
        for k in inserts.iter().chain(probes.iter()) {
            prop_assert_eq!(map.get(k), model.get(k));
            prop_assert_eq!(map.contains_key(k), model.contains_key(k));
        }
        prop_assert_eq!(map.first_key_value(), model.first_key_value());
        prop_assert_eq!(map.last_key_value(), model.last_key_value());
    }

    #[test]
    fn removing_every_key_empties_the_map(
        keys in proptest::collection::hash_set(any::<u16>(), 0..300),
    ) {
        let mut map = RbMap::new();
        for k in &keys {
            map.insert(*k, ()).unwrap();
        }
        prop_assert_eq!(map.len(), keys.len());

        for k in &keys {
            prop_assert_eq!(map.remove(k), Some(()));
            prop_assert!(map.validate().is_ok());
        }
        prop_assert!(map.is_empty());
        prop_assert_eq!(map.iter().next(), None);
        prop_assert_eq!(map.height(), 0);
    }

    #[test]
    fn black_height_agrees_on_every_path(keys in proptest::collection::vec(any::<u32>(), 1..300)) {
        let mut map = RbMap::new();
        for k in &keys {
            map.insert(*k, *k).unwrap();
        }
        prop_assert!(map.validate().is_ok());
        let len = map.len() as f64;
        // A red-black tree of black height bh holds at least 2^bh - 1 nodes.
        prop_assert!(((1u64 << map.black_height()) - 1) as f64 <= len);
    }
}
