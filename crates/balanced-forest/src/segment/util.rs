use std::cmp::Ordering;

use crate::balancing::assert_avl_tree;
use crate::error::ValidationError;
use crate::util::{get_l, get_r, postorder};

use super::types::{SegmentNode, SizeNode};

/// Cached node count of the subtree at `node`, 0 for an absent child. O(1).
#[inline]
pub fn size_of<N: SizeNode>(arena: &[N], node: Option<u32>) -> usize {
    node.map_or(0, |i| arena[i as usize].size())
}

pub fn update_size<N: SizeNode>(arena: &mut [N], node: u32) {
    let s = 1 + size_of(arena, get_l(arena, node)) + size_of(arena, get_r(arena, node));
    arena[node as usize].set_size(s);
}

/// Node at in-order position `i` within the subtree rooted at `node`.
///
/// Returns `None` when `i` is past the end of the subtree. O(h).
pub fn subtree_at<N: SizeNode>(arena: &[N], node: u32, mut i: usize) -> Option<u32> {
    let mut curr = node;
    loop {
        let left = size_of(arena, get_l(arena, curr));
        match i.cmp(&left) {
            Ordering::Less => curr = get_l(arena, curr)?,
            Ordering::Equal => return Some(curr),
            Ordering::Greater => {
                i -= left + 1;
                curr = get_r(arena, curr)?;
            }
        }
    }
}

/// Checks cached sizes on top of everything [`assert_avl_tree`] checks.
pub fn assert_segment_tree<K>(
    arena: &[SegmentNode<K>],
    root: Option<u32>,
) -> Result<(), ValidationError> {
    assert_avl_tree(arena, root)?;
    for node in postorder(arena, root) {
        let expected = 1 + size_of(arena, get_l(arena, node)) + size_of(arena, get_r(arena, node));
        let actual = arena[node as usize].size;
        if expected != actual {
            return Err(ValidationError::SizeMismatch {
                node,
                expected,
                actual,
            });
        }
    }
    Ok(())
}
