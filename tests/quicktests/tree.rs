use binarytree::{EmptyTreeError, Tree};
use quickcheck_macros::quickcheck;

use std::collections::{BTreeSet, HashSet};

use crate::init_logging;

#[quickcheck]
fn in_order_is_sorted_and_distinct(xs: Vec<i8>) -> bool {
    init_logging();
    let tree = Tree::with_items(xs.clone());
    let expected: BTreeSet<_> = xs.into_iter().collect();

    tree.items_in_order().into_iter().eq(expected.iter())
}

#[quickcheck]
fn size_counts_distinct_values(xs: Vec<i8>) -> bool {
    init_logging();
    let tree = Tree::with_items(xs.clone());
    let distinct: HashSet<_> = xs.into_iter().collect();

    tree.len() == distinct.len() && tree.is_empty() == distinct.is_empty()
}

#[quickcheck]
fn duplicate_insert_keeps_size(xs: Vec<i8>, x: i8) -> bool {
    init_logging();
    let mut tree = Tree::with_items(xs);
    tree.insert(x);
    let before = tree.items_level_order().into_iter().copied().collect::<Vec<_>>();
    let size = tree.len();
    tree.insert(x);

    tree.len() == size && tree.items_level_order().into_iter().copied().eq(before)
}

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    init_logging();
    let tree = Tree::with_items(xs.clone());

    xs.iter().all(|x| tree.contains(x) && tree.search(x) == Some(x))
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let tree = Tree::with_items(xs.clone());
    let added: HashSet<_> = xs.into_iter().collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| !tree.contains(x) && tree.search(x).is_none())
}

#[quickcheck]
fn height_is_bounded_by_size(xs: Vec<i8>) -> bool {
    let tree = Tree::with_items(xs);
    match tree.height() {
        Ok(height) => height < tree.len(),
        Err(EmptyTreeError) => tree.is_empty(),
    }
}
