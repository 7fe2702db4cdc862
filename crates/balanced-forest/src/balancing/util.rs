use crate::error::ValidationError;
use crate::util::{assert_links, get_l, get_p, get_r, postorder};

use super::rotate::{rotate_left, rotate_right};
use super::types::HeightNode;

/// Height of `node`, or -1 for an absent child. O(1).
#[inline]
pub fn height<N: HeightNode>(arena: &[N], node: Option<u32>) -> i32 {
    node.map_or(-1, |i| arena[i as usize].height())
}

/// `height(right) - height(left)`. Positive means right-heavy.
#[inline]
pub fn skew<N: HeightNode>(arena: &[N], node: u32) -> i32 {
    height(arena, get_r(arena, node)) - height(arena, get_l(arena, node))
}

/// Recomputes the cached height of `node` from its children.
pub fn update_height<N: HeightNode>(arena: &mut [N], node: u32) {
    let h = 1 + height(arena, get_l(arena, node)).max(height(arena, get_r(arena, node)));
    arena[node as usize].set_height(h);
}

/// Restores `|skew| <= 1` at `node` with one single or double rotation.
///
/// Expects both subtrees of `node` to be balanced already.
pub fn rebalance<N: HeightNode>(arena: &mut [N], node: u32) {
    match skew(arena, node) {
        2 => {
            let r = get_r(arena, node).expect("right-heavy node has a right child");
            if skew(arena, r) < 0 {
                rotate_right(arena, r);
            }
            rotate_left(arena, node);
        }
        -2 => {
            let l = get_l(arena, node).expect("left-heavy node has a left child");
            if skew(arena, l) > 0 {
                rotate_left(arena, l);
            }
            rotate_right(arena, node);
        }
        _ => {}
    }
}

/// AVL `maintain`: rebalance, refresh cached metadata, then continue with the
/// parent until the root. O(log n).
///
/// The walk never stops early: a height change below can skew any ancestor.
pub fn maintain<N: HeightNode>(arena: &mut [N], node: u32) {
    let mut curr = Some(node);
    while let Some(n) = curr {
        rebalance(arena, n);
        N::subtree_update(arena, n);
        curr = get_p(arena, n);
    }
}

/// Checks links, cached heights and AVL balance for every node under `root`.
///
/// Key order is not checked here; see [`crate::search::assert_order`].
pub fn assert_avl_tree<N: HeightNode>(
    arena: &[N],
    root: Option<u32>,
) -> Result<(), ValidationError> {
    assert_links(arena, root)?;

    for node in postorder(arena, root) {
        let expected = 1 + height(arena, get_l(arena, node)).max(height(arena, get_r(arena, node)));
        let actual = arena[node as usize].height();
        if expected != actual {
            return Err(ValidationError::HeightMismatch {
                node,
                expected,
                actual,
            });
        }
        let skew = skew(arena, node);
        if !(-1..=1).contains(&skew) {
            return Err(ValidationError::Unbalanced { node, skew });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{assert_avl_tree, height, skew};
    use crate::balancing::BalancingNode;
    use crate::types::DataNode;
    use crate::util::{inorder, insert_after, insert_before, subtree_delete};

    fn push(arena: &mut Vec<BalancingNode<i32>>, k: i32) -> u32 {
        arena.push(BalancingNode::new(k));
        (arena.len() - 1) as u32
    }

    // 10 ( 5 ( 3, 7 ), 15 ( 12, 18 ) ) built positionally.
    fn fixture() -> Vec<BalancingNode<i32>> {
        let mut arena = Vec::new();
        let root = push(&mut arena, 10);
        let n5 = push(&mut arena, 5);
        let n15 = push(&mut arena, 15);
        insert_before(&mut arena, root, n5);
        insert_after(&mut arena, root, n15);
        let n3 = push(&mut arena, 3);
        let n7 = push(&mut arena, 7);
        insert_before(&mut arena, n5, n3);
        insert_after(&mut arena, n5, n7);
        let n12 = push(&mut arena, 12);
        let n18 = push(&mut arena, 18);
        insert_before(&mut arena, n15, n12);
        insert_after(&mut arena, n15, n18);
        arena
    }

    #[test]
    fn heights_follow_children() {
        let arena = fixture();
        assert_eq!(height(&arena, Some(0)), 2);
        assert_eq!(height(&arena, arena[0].l), 1);
        assert_eq!(height(&arena, arena[0].r), 1);
        assert_eq!(height(&arena, None), -1);
        assert_eq!(skew(&arena, 0), 0);
        assert_avl_tree(&arena, Some(0)).unwrap();
    }

    #[test]
    fn skew_stays_bounded_after_delete() {
        let mut arena = fixture();
        let n3 = arena[arena[0].l.unwrap() as usize].l.unwrap();
        subtree_delete::<i32, _>(&mut arena, n3);
        assert!(skew(&arena, 0).abs() <= 1);
        assert_avl_tree(&arena, Some(0)).unwrap();
    }

    #[test]
    fn appending_keeps_balance() {
        let mut arena = fixture();
        for i in 0..10 {
            let last = crate::util::subtree_last(&arena, 0);
            let node = push(&mut arena, 100 + i);
            insert_after(&mut arena, last, node);
            assert_avl_tree(&arena, Some(0)).unwrap();
        }
        let keys: Vec<i32> = inorder(&arena, Some(0)).map(|i| *arena[i as usize].data()).collect();
        assert_eq!(keys.len(), 17);
        assert_eq!(keys[..7], [3, 5, 7, 10, 12, 15, 18]);
        assert_eq!(keys[7..], (100..110).collect::<Vec<_>>()[..]);
    }
}
