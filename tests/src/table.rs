#[cfg(test)]
mod table_test {
    use ds::{ChainedHashTable, Error, Key, Upsert};
    use proptest::prelude::*;
    use std::collections::HashSet;

    #[test]
    fn scenario() {
        let mut t = ChainedHashTable::new();
        t.insert("a", 1).unwrap();
        t.insert("b", 2).unwrap();
        t.insert("c", 3).unwrap();
        assert_eq!(t.get("b"), Ok(&2));
        assert_eq!(t.remove("a"), Ok(1));
        assert_eq!(t.get("a"), Err(Error::KeyNotFound));
        assert_eq!(t.len(), 2);
        assert_eq!(t.get("c"), Ok(&3));
    }

    #[test]
    fn empty_table() {
        let mut t: ChainedHashTable<u32> = ChainedHashTable::new();
        assert!(t.is_empty());
        assert_eq!(t.capacity(), 0);
        assert_eq!(t.get("x"), Err(Error::EmptyTable));
        assert_eq!(t.remove("x"), Err(Error::EmptyTable));
        assert_eq!(t.bucket(&Key::from("x")), Err(Error::EmptyTable));
        assert!(!t.contains_key("x"));
        assert_eq!(t.iter().count(), 0);
    }

    #[test]
    fn growth() {
        // 插入前count > 3*buckets/4才扩容，所以插入后负载可能到1
        let expect = [1, 2, 4, 4, 8, 8, 8, 16];
        let mut t = ChainedHashTable::new();
        for (i, cap) in expect.iter().enumerate() {
            t.insert(i as u64, i).unwrap();
            assert_eq!(t.capacity(), *cap, "after {} inserts", i + 1);
        }
        for i in 0..expect.len() {
            assert_eq!(t.get(i as u64), Ok(&i));
        }
    }

    #[test]
    fn load_bounded() {
        let mut t = ChainedHashTable::new();
        for i in 0..10_000u32 {
            let before = t.len();
            let cap = t.capacity();
            t.insert(i, ()).unwrap();
            if t.capacity() != cap {
                // 扩容后负载不超过0.75
                assert!(before * 4 <= t.capacity() * 3);
            }
            assert!(t.len() <= t.capacity());
        }
        assert_eq!(t.len(), 10_000);
        assert_eq!(t.capacity(), 16384);
    }

    #[test]
    fn removed_key() {
        let mut t = ChainedHashTable::new();
        t.insert("k", 1).unwrap();
        t.insert("j", 2).unwrap();
        assert_eq!(t.remove("k"), Ok(1));
        assert_eq!(t.get("k"), Err(Error::KeyNotFound));
        assert_eq!(t.remove("k"), Err(Error::KeyNotFound));
        // 最后一个entry删除后count为0
        assert_eq!(t.remove("j"), Ok(2));
        assert_eq!(t.get("j"), Err(Error::EmptyTable));
        assert_eq!(t.get("k"), Err(Error::EmptyTable));
    }

    #[test]
    fn missing_key() {
        let mut t = ChainedHashTable::new();
        t.insert(1i64, "one").unwrap();
        assert_eq!(t.get(2i64), Err(Error::KeyNotFound));
        assert_eq!(t.get(1u64), Err(Error::KeyNotFound));
        assert_eq!(t.remove(2i64), Err(Error::KeyNotFound));
        assert_eq!(t.len(), 1);
    }

    #[test]
    fn upsert_overwrite() {
        let mut t = ChainedHashTable::new();
        assert_eq!(t.policy(), Upsert::Overwrite);
        t.insert("k", 1).unwrap();
        t.insert("k", 2).unwrap();
        assert_eq!(t.get("k"), Ok(&2));
        assert_eq!(t.len(), 1);
    }

    #[test]
    fn upsert_keep() {
        let mut t = ChainedHashTable::with_policy(Upsert::Keep);
        t.insert("k", 1).unwrap();
        t.insert("k", 2).unwrap();
        assert_eq!(t.get("k"), Ok(&1));
        assert_eq!(t.len(), 1);
    }

    #[test]
    fn upsert_from() {
        assert_eq!(Upsert::from("keep"), Upsert::Keep);
        assert_eq!(Upsert::from("KEEP"), Upsert::Keep);
        assert_eq!(Upsert::from("overwrite"), Upsert::Overwrite);
        assert_eq!(Upsert::from(""), Upsert::Overwrite);
        assert_eq!(Upsert::from("replace"), Upsert::Overwrite);
    }

    #[test]
    fn get_mut() {
        let mut t = ChainedHashTable::new();
        t.insert("counter", 1u32).unwrap();
        *t.get_mut("counter").unwrap() += 9;
        assert_eq!(t.get("counter"), Ok(&10));
        assert_eq!(t.get_mut("nope"), Err(Error::KeyNotFound));
    }

    #[test]
    fn mixed_keys() {
        let mut t = ChainedHashTable::new();
        t.insert("1", "str").unwrap();
        t.insert(1i64, "int").unwrap();
        t.insert(1u64, "uint").unwrap();
        t.insert(1.0f32, "f32").unwrap();
        t.insert(1.0f64, "f64").unwrap();
        assert_eq!(t.len(), 5);
        assert_eq!(t.get("1"), Ok(&"str"));
        assert_eq!(t.get(1i64), Ok(&"int"));
        assert_eq!(t.get(1u64), Ok(&"uint"));
        assert_eq!(t.get(1.0f32), Ok(&"f32"));
        assert_eq!(t.get(1.0f64), Ok(&"f64"));
    }

    #[test]
    fn iter_bucket_order() {
        let mut t = ChainedHashTable::new();
        for i in 0..100u32 {
            t.insert(format!("key-{}", i), i).unwrap();
        }
        let mut last = 0;
        let mut seen = HashSet::new();
        for (k, v) in &t {
            let b = t.bucket(k).unwrap();
            assert!(b >= last);
            last = b;
            assert!(seen.insert(*v));
        }
        assert_eq!(seen.len(), 100);
    }

    #[test]
    fn remove_all_then_reuse() {
        let mut t = ChainedHashTable::new();
        for i in 0..50i32 {
            t.insert(i, i * 2).unwrap();
        }
        let cap = t.capacity();
        for i in 0..50i32 {
            assert_eq!(t.remove(i), Ok(i * 2));
        }
        assert!(t.is_empty());
        assert_eq!(t.capacity(), cap);
        t.insert(7i32, 7).unwrap();
        assert_eq!(t.capacity(), cap * 2);
        assert_eq!(t.get(7i32), Ok(&7));
    }

    proptest! {
        #[test]
        fn insert_then_get(pairs in proptest::collection::hash_map(".{0,16}", any::<i64>(), 0..200)) {
            let mut t = ChainedHashTable::new();
            for (k, v) in &pairs {
                t.insert(k, *v).unwrap();
            }
            prop_assert_eq!(t.len(), pairs.len());
            for (k, v) in &pairs {
                prop_assert_eq!(t.get(k), Ok(v));
            }
        }

        #[test]
        fn remove_then_get(keys in proptest::collection::hash_set(any::<u64>(), 1..200), split in 0usize..200) {
            let keys: Vec<u64> = keys.into_iter().collect();
            let split = split.min(keys.len());
            let mut t = ChainedHashTable::new();
            for k in &keys {
                t.insert(*k, *k).unwrap();
            }
            for k in &keys[..split] {
                prop_assert_eq!(t.remove(*k), Ok(*k));
            }
            prop_assert_eq!(t.len(), keys.len() - split);
            // 删空之后bucket()先报EmptyTable
            let expect = if split < keys.len() {
                Error::KeyNotFound
            } else {
                Error::EmptyTable
            };
            for k in &keys[..split] {
                prop_assert_eq!(t.get(*k), Err(expect.clone()));
            }
            for k in &keys[split..] {
                prop_assert_eq!(t.get(*k), Ok(k));
            }
        }
    }
}
