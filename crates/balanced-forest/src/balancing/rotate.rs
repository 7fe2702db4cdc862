//! Data-swap rotations.
//!
//! A rotation normally moves the pivot node up and the subtree root down. Here
//! the two nodes keep their positions and exchange payloads instead: the node
//! at the top of the subtree stays at the top, so every index held by the
//! caller (the tree root in particular) still names the same position after
//! the rotation. In-order sequence is preserved.

use tracing::trace;

use crate::types::Maintain;
use crate::util::{get_l, get_r, set_l, set_p, set_r, swap_payload};

/// Rotates the subtree at `node` to the left around its right child. O(1).
///
/// ```text
///     n                 n'
///    / \               /  \
///   a   p     ==>     p'   c
///      / \           / \
///     b   c         a   b
/// ```
///
/// `n'` is the slot of `n` holding the payload of `p`; `p'` is the slot of
/// `p` holding the payload of `n`.
///
/// # Panics
///
/// Panics if `node` has no right child.
pub fn rotate_left<N: Maintain>(arena: &mut [N], node: u32) {
    let pivot = get_r(arena, node).expect("left rotation needs a right child");
    let root_left = get_l(arena, node);
    let pivot_left = get_l(arena, pivot);
    let pivot_right = get_r(arena, pivot);
    trace!(node, pivot, "rotate left");

    swap_payload(arena, node, pivot);

    set_l(arena, node, Some(pivot));
    set_r(arena, node, pivot_right);
    set_l(arena, pivot, root_left);
    set_r(arena, pivot, pivot_left);
    if let Some(a) = root_left {
        set_p(arena, a, Some(pivot));
    }
    if let Some(c) = pivot_right {
        set_p(arena, c, Some(node));
    }

    N::subtree_update(arena, pivot);
    N::subtree_update(arena, node);
}

/// Rotates the subtree at `node` to the right around its left child. O(1).
///
/// Mirror image of [`rotate_left`].
///
/// # Panics
///
/// Panics if `node` has no left child.
pub fn rotate_right<N: Maintain>(arena: &mut [N], node: u32) {
    let pivot = get_l(arena, node).expect("right rotation needs a left child");
    let root_right = get_r(arena, node);
    let pivot_left = get_l(arena, pivot);
    let pivot_right = get_r(arena, pivot);
    trace!(node, pivot, "rotate right");

    swap_payload(arena, node, pivot);

    set_l(arena, node, pivot_left);
    set_r(arena, node, Some(pivot));
    set_l(arena, pivot, pivot_right);
    set_r(arena, pivot, root_right);
    if let Some(a) = pivot_left {
        set_p(arena, a, Some(node));
    }
    if let Some(c) = root_right {
        set_p(arena, c, Some(pivot));
    }

    N::subtree_update(arena, pivot);
    N::subtree_update(arena, node);
}

#[cfg(test)]
mod tests {
    use super::{rotate_left, rotate_right};
    use crate::balancing::BalancingNode;
    use crate::types::{DataNode, Node};
    use crate::util::{assert_links, inorder};

    fn link(arena: &mut [BalancingNode<i32>], parent: u32, left: Option<u32>, right: Option<u32>) {
        arena[parent as usize].set_l(left);
        arena[parent as usize].set_r(right);
        for child in [left, right].into_iter().flatten() {
            arena[child as usize].set_p(Some(parent));
        }
    }

    fn keys(arena: &[BalancingNode<i32>]) -> Vec<i32> {
        inorder(arena, Some(0)).map(|i| *arena[i as usize].data()).collect()
    }

    // 0:10 ( 1:5, 2:20 ( 3:15, 4:25 ) )
    fn right_heavy() -> Vec<BalancingNode<i32>> {
        let mut arena: Vec<_> = [10, 5, 20, 15, 25].into_iter().map(BalancingNode::new).collect();
        link(&mut arena, 0, Some(1), Some(2));
        link(&mut arena, 2, Some(3), Some(4));
        arena[2].h = 1;
        arena[0].h = 2;
        arena
    }

    #[test]
    fn rotate_left_swaps_payloads_and_keeps_root_slot() {
        let mut arena = right_heavy();
        rotate_left(&mut arena, 0);

        assert_eq!(*arena[0].data(), 20);
        assert_eq!(*arena[2].data(), 10);
        assert_eq!(arena[0].l, Some(2));
        assert_eq!(arena[0].r, Some(4));
        assert_eq!(arena[2].l, Some(1));
        assert_eq!(arena[2].r, Some(3));
        assert_eq!(arena[1].p, Some(2));
        assert_eq!(arena[4].p, Some(0));
        assert_eq!(arena[0].h, 2);
        assert_eq!(arena[2].h, 1);
        assert_eq!(keys(&arena), vec![5, 10, 15, 20, 25]);
        assert_links(&arena, Some(0)).unwrap();
    }

    #[test]
    fn rotate_right_undoes_rotate_left() {
        let mut arena = right_heavy();
        rotate_left(&mut arena, 0);
        rotate_right(&mut arena, 0);

        assert_eq!(*arena[0].data(), 10);
        assert_eq!(arena[0].l, Some(1));
        assert_eq!(arena[0].r, Some(2));
        assert_eq!(arena[2].l, Some(3));
        assert_eq!(arena[2].r, Some(4));
        assert_eq!(keys(&arena), vec![5, 10, 15, 20, 25]);
        assert_links(&arena, Some(0)).unwrap();
    }

    #[test]
    #[should_panic(expected = "left rotation needs a right child")]
    fn rotate_left_without_right_child_panics() {
        let mut arena = vec![BalancingNode::new(1)];
        rotate_left(&mut arena, 0);
    }
}
