use ordered_tree::tree::OrderedTree;

use std::collections::BTreeSet;

use quickcheck_macros::quickcheck;

use crate::Op;

/// Applies a set of operations to a tree and a `BTreeSet`.
/// This way we can ensure that after a random smattering of inserts
/// and deletes we have the same set of values as the model.
fn do_ops<E>(ops: &[Op<E>], tree: &mut OrderedTree<E>, set: &mut BTreeSet<E>)
where
    E: Ord + Clone,
{
    for op in ops {
        match op {
            Op::Insert(value) => {
                tree.insert(value.clone());
                set.insert(value.clone());
            }
            Op::Remove(value) => {
                tree.delete(value);
                set.remove(value);
            }
        }
    }
}

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
    let mut tree = OrderedTree::new();
    let mut set = BTreeSet::new();

    do_ops(&ops, &mut tree, &mut set);
    tree.len() == set.len() && tree.iter().eq(set.iter())
}

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    let mut tree = OrderedTree::new();
    for x in &xs {
        tree.insert(*x);
    }

    xs.iter().all(|x| tree.find(x) == Some(x))
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let mut tree = OrderedTree::new();
    for x in &xs {
        tree.insert(*x);
    }
    let added: BTreeSet<_> = xs.into_iter().collect();
    let nots: BTreeSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| tree.find(x).is_none())
}

#[quickcheck]
fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    let mut tree = OrderedTree::new();
    for x in &xs {
        tree.insert(*x);
    }
    for delete in &deletes {
        tree.delete(delete);
    }

    deletes.iter().all(|x| tree.find(x).is_none())
        && xs
            .iter()
            .filter(|x| !deletes.contains(*x))
            .all(|x| tree.find(x).is_some())
}

#[quickcheck]
fn in_order_is_the_sorted_distinct_input(xs: Vec<i8>) -> bool {
    let tree: OrderedTree<i8> = xs.iter().copied().collect();

    let expected: BTreeSet<_> = xs.into_iter().collect();
    tree.in_order() == expected.iter().collect::<Vec<_>>()
}

#[quickcheck]
fn len_counts_distinct_values(xs: Vec<i8>) -> bool {
    let tree: OrderedTree<i8> = xs.iter().copied().collect();

    let distinct: BTreeSet<_> = xs.into_iter().collect();
    tree.len() == distinct.len()
}

#[quickcheck]
fn duplicate_insert_is_idempotent(xs: Vec<i8>, dup: i8) -> bool {
    let mut tree: OrderedTree<i8> = xs.iter().copied().collect();
    tree.insert(dup);
    let len_before = tree.len();
    let order_before: Vec<i8> = tree.iter().copied().collect();

    tree.insert(dup);

    tree.len() == len_before && tree.iter().copied().eq(order_before)
}

#[quickcheck]
fn min_and_max_match_the_model(xs: Vec<i8>) -> bool {
    let tree: OrderedTree<i8> = xs.iter().copied().collect();

    tree.min() == xs.iter().min() && tree.max() == xs.iter().max()
}

#[quickcheck]
fn sorted_runs_of_three_or_more_are_unbalanced(n: u8) -> bool {
    let tree: OrderedTree<u8> = (0..n).collect();

    if n < 3 {
        tree.is_balanced()
    } else {
        !tree.is_balanced()
    }
}
