use binarytree::{Node, Tree};
use quickcheck_macros::quickcheck;

/// Number of edges between the root and the node holding `x`.
fn depth_of(tree: &Tree<i8>, x: i8) -> usize {
    let mut depth = 0;
    let mut node = tree.root();
    while let Some(n) = node {
        if *n.value() == x {
            break;
        }
        node = if x < *n.value() { n.left() } else { n.right() };
        depth += 1;
    }
    depth
}

#[quickcheck]
fn every_traversal_visits_every_node_once(xs: Vec<i8>) -> bool {
    let tree = Tree::with_items(xs);
    let in_order = tree.items_in_order();
    let sorted_matches = |mut items: Vec<&i8>| {
        items.sort();
        items == in_order
    };

    in_order.len() == tree.len()
        && in_order.windows(2).all(|w| w[0] < w[1])
        && sorted_matches(tree.items_pre_order())
        && sorted_matches(tree.items_post_order())
        && sorted_matches(tree.items_level_order())
}

#[quickcheck]
fn root_brackets_pre_and_post_order(xs: Vec<i8>) -> bool {
    let tree = Tree::with_items(xs);
    let root = tree.root().map(Node::value);

    tree.items_pre_order().first().copied() == root
        && tree.items_post_order().last().copied() == root
        && tree.items_level_order().first().copied() == root
}

#[quickcheck]
fn level_order_never_goes_back_up(xs: Vec<i8>) -> bool {
    let tree = Tree::with_items(xs);
    let depths: Vec<_> = tree
        .items_level_order()
        .into_iter()
        .map(|x| depth_of(&tree, *x))
        .collect();

    depths.windows(2).all(|w| w[0] <= w[1])
}

#[quickcheck]
fn visitors_match_collected_items(xs: Vec<i8>) -> bool {
    let tree = Tree::with_items(xs);
    let mut visited = Vec::new();
    tree.traverse_post_order(|x| visited.push(*x));

    tree.items_post_order().into_iter().copied().eq(visited)
}

#[quickcheck]
fn lazy_iter_matches_in_order(xs: Vec<i8>) -> bool {
    let tree = Tree::with_items(xs);

    tree.iter().len() == tree.len() && tree.iter().eq(tree.items_in_order())
}
