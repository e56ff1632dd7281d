use rand::prelude::SliceRandom;
use rand::{thread_rng, Rng};
use sortbench::avltree::AvlTree;
use std::collections::BTreeMap;

fn build(keys: &[u64]) -> AvlTree<u64, u64> {
    let mut tree = AvlTree::new();
    for &key in keys {
        assert_eq!(tree.insert(key, key), Ok(()));
    }
    tree
}

#[test]
fn ascending_insert_triggers_single_left_rotation() {
    let tree = build(&[10, 20, 30]);

    assert_eq!(tree.keys_preorder(), vec![&20, &10, &30]);
    assert_eq!(tree.keys_inorder(), vec![&10, &20, &30]);
    assert_eq!(tree.height(), 2);
    assert!(tree.is_balanced());
}

#[test]
fn descending_insert_triggers_single_right_rotation() {
    let tree = build(&[30, 20, 10]);

    assert_eq!(tree.keys_preorder(), vec![&20, &10, &30]);
    assert_eq!(tree.height(), 2);
    assert!(tree.is_balanced());
}

#[test]
fn left_right_insert_triggers_double_rotation() {
    let tree = build(&[30, 10, 20]);

    assert_eq!(tree.keys_preorder(), vec![&20, &10, &30]);
    assert_eq!(tree.height(), 2);
    assert!(tree.is_balanced());
}

#[test]
fn right_left_insert_triggers_double_rotation() {
    let tree = build(&[10, 30, 20]);

    assert_eq!(tree.keys_preorder(), vec![&20, &10, &30]);
    assert_eq!(tree.height(), 2);
    assert!(tree.is_balanced());
}

#[test]
fn duplicate_key_is_rejected_without_change() {
    let mut tree = AvlTree::new();

    assert_eq!(tree.insert(7, "first"), Ok(()));
    assert_eq!(tree.insert(7, "second"), Err((7, "second")));

    assert_eq!(tree.len(), 1);
    assert_eq!(tree.lookup(&7), Some(&"first"));
}

#[test]
fn stays_balanced_after_every_insert() {
    let mut rng = thread_rng();

    let mut keys: Vec<u64> = (0..256).collect();
    keys.shuffle(&mut rng);

    let mut tree = AvlTree::new();
    for (i, &key) in keys.iter().enumerate() {
        assert_eq!(tree.insert(key, i), Ok(()));
        assert!(tree.is_balanced(), "unbalanced after {} inserts", i + 1);
    }
}

#[test]
fn random_insertions_keep_order_and_height_bound() {
    let mut rng = thread_rng();

    for _ in 0..10 {
        let n: u64 = 2000;
        let mut keys: Vec<u64> = (0..n).collect();
        keys.shuffle(&mut rng);

        let tree = build(&keys);

        assert!(tree.is_balanced());

        let inorder = tree.keys_inorder();
        assert_eq!(inorder.len(), n as usize);
        for w in inorder.windows(2) {
            assert!(w[0] < w[1]);
        }

        let bound = 1.44 * ((n + 2) as f64).log2();
        assert!(
            (tree.height() as f64) <= bound,
            "height {} exceeds AVL bound {}",
            tree.height(),
            bound
        );
    }
}

#[test]
fn sequential_insert_builds_minimal_height_tree() {
    let mut tree = AvlTree::new();

    for i in 0..65535u64 {
        // 65535 = 2^16 - 1
        assert_eq!(tree.insert(i, i), Ok(()));
    }

    assert_eq!(tree.height(), 16);

    for i in 0..65535u64 {
        assert_eq!(tree.lookup(&i), Some(&i));
    }
}

#[test]
fn search_finds_present_keys_and_counts_steps() {
    let mut rng = thread_rng();

    let mut keys: Vec<u64> = (0..1000).map(|i| i * 2).collect();
    keys.shuffle(&mut rng);
    let tree = build(&keys);

    for &key in &keys {
        let (found, visited) = tree.lookup_counted(&key);
        assert_eq!(found, Some(&key));
        assert!(visited >= 1 && visited <= tree.height());
    }

    for miss in (0..1000).map(|i| i * 2 + 1) {
        let (found, visited) = tree.lookup_counted(&miss);
        assert_eq!(found, None);
        assert!(visited <= tree.height());
    }
}

#[test]
fn agrees_with_reference_map_on_random_operations() {
    let mut rng = thread_rng();
    let mut tree: AvlTree<u64, u64> = AvlTree::new();
    let mut reference: BTreeMap<u64, u64> = BTreeMap::new();

    for i in 0..100_000u64 {
        let key = rng.gen_range(0..2_000);

        if rng.gen::<bool>() {
            let expected = if reference.contains_key(&key) {
                Err((key, i))
            } else {
                Ok(())
            };
            assert_eq!(tree.insert(key, i), expected);
            reference.entry(key).or_insert(i);
        } else {
            assert_eq!(tree.lookup(&key), reference.get(&key));
        }
    }

    assert_eq!(tree.len(), reference.len());
    assert!(tree.is_balanced());
    assert_eq!(tree.keys_inorder(), reference.keys().collect::<Vec<&u64>>());
}
