//! Node core: link helpers, in-order navigation, positional insertion and
//! swap-down deletion over an arena of [`Node`]s.
//!
//! None of these functions compare keys. Ordered placement lives in
//! [`crate::search`]; everything here works purely on in-order position, so
//! the sequence tree can reuse it unchanged.

pub mod print;
pub mod traversal;

use tracing::trace;

use crate::error::ValidationError;
use crate::types::{DataNode, Maintain, Node};

pub use traversal::{
    inorder, level_order, postorder, preorder, InOrder, LevelOrder, PostOrder, PreOrder,
};

#[inline]
pub(crate) fn get_p<N: Node>(arena: &[N], idx: u32) -> Option<u32> {
    arena[idx as usize].p()
}

#[inline]
pub(crate) fn get_l<N: Node>(arena: &[N], idx: u32) -> Option<u32> {
    arena[idx as usize].l()
}

#[inline]
pub(crate) fn get_r<N: Node>(arena: &[N], idx: u32) -> Option<u32> {
    arena[idx as usize].r()
}

#[inline]
pub(crate) fn set_p<N: Node>(arena: &mut [N], idx: u32, v: Option<u32>) {
    arena[idx as usize].set_p(v);
}

#[inline]
pub(crate) fn set_l<N: Node>(arena: &mut [N], idx: u32, v: Option<u32>) {
    arena[idx as usize].set_l(v);
}

#[inline]
pub(crate) fn set_r<N: Node>(arena: &mut [N], idx: u32, v: Option<u32>) {
    arena[idx as usize].set_r(v);
}

/// Mutable access to two distinct arena slots at once.
pub(crate) fn pair_mut<N>(arena: &mut [N], a: u32, b: u32) -> (&mut N, &mut N) {
    let (a, b) = (a as usize, b as usize);
    assert_ne!(a, b, "pair_mut needs two distinct nodes");
    if a < b {
        let (lo, hi) = arena.split_at_mut(b);
        (&mut lo[a], &mut hi[0])
    } else {
        let (lo, hi) = arena.split_at_mut(a);
        (&mut hi[0], &mut lo[b])
    }
}

/// Swaps only the keys of two nodes. Links and per-variant state stay put.
pub fn swap_data<K, N: DataNode<K>>(arena: &mut [N], a: u32, b: u32) {
    if a == b {
        return;
    }
    let (x, y) = pair_mut(arena, a, b);
    std::mem::swap(x.data_mut(), y.data_mut());
}

/// Swaps the full payload of two nodes, as defined by [`Maintain::swap_payload`].
pub(crate) fn swap_payload<N: Maintain>(arena: &mut [N], a: u32, b: u32) {
    let (x, y) = pair_mut(arena, a, b);
    x.swap_payload(y);
}

/// Leftmost node of the subtree rooted at `node`. O(h).
pub fn subtree_first<N: Node>(arena: &[N], mut node: u32) -> u32 {
    while let Some(l) = get_l(arena, node) {
        node = l;
    }
    node
}

/// Rightmost node of the subtree rooted at `node`. O(h).
pub fn subtree_last<N: Node>(arena: &[N], mut node: u32) -> u32 {
    while let Some(r) = get_r(arena, node) {
        node = r;
    }
    node
}

/// Leftmost node of the tree, if any.
pub fn first<N: Node>(arena: &[N], root: Option<u32>) -> Option<u32> {
    root.map(|r| subtree_first(arena, r))
}

/// Rightmost node of the tree, if any.
pub fn last<N: Node>(arena: &[N], root: Option<u32>) -> Option<u32> {
    root.map(|r| subtree_last(arena, r))
}

/// In-order successor, or `None` when `node` is the last node.
pub fn successor<N: Node>(arena: &[N], node: u32) -> Option<u32> {
    if let Some(r) = get_r(arena, node) {
        return Some(subtree_first(arena, r));
    }
    let mut curr = node;
    while let Some(p) = get_p(arena, curr) {
        if get_r(arena, p) == Some(curr) {
            curr = p;
        } else {
            return Some(p);
        }
    }
    None
}

/// In-order predecessor, or `None` when `node` is the first node.
pub fn predecessor<N: Node>(arena: &[N], node: u32) -> Option<u32> {
    if let Some(l) = get_l(arena, node) {
        return Some(subtree_last(arena, l));
    }
    let mut curr = node;
    while let Some(p) = get_p(arena, curr) {
        if get_l(arena, p) == Some(curr) {
            curr = p;
        } else {
            return Some(p);
        }
    }
    None
}

/// Number of nodes reachable from `root`.
pub fn size<N: Node>(arena: &[N], root: Option<u32>) -> usize {
    inorder(arena, root).count()
}

/// Attaches `new` directly before `node` in in-order sequence, then runs
/// `maintain` on the node that received it. O(h).
pub fn insert_before<N: Maintain>(arena: &mut [N], node: u32, new: u32) {
    let parent = match get_l(arena, node) {
        Some(l) => {
            let last = subtree_last(arena, l);
            set_r(arena, last, Some(new));
            last
        }
        None => {
            set_l(arena, node, Some(new));
            node
        }
    };
    set_p(arena, new, Some(parent));
    N::maintain(arena, parent);
}

/// Attaches `new` directly after `node` in in-order sequence, then runs
/// `maintain` on the node that received it. O(h).
pub fn insert_after<N: Maintain>(arena: &mut [N], node: u32, new: u32) {
    let parent = match get_r(arena, node) {
        Some(r) => {
            let first = subtree_first(arena, r);
            set_l(arena, first, Some(new));
            first
        }
        None => {
            set_r(arena, node, Some(new));
            node
        }
    };
    set_p(arena, new, Some(parent));
    N::maintain(arena, parent);
}

/// Moves the key of `node` down to a leaf by repeatedly swapping it with the
/// predecessor (when a left child exists) or the successor.
///
/// Returns the leaf that now carries the key. In-order sequence of the other
/// keys is unchanged.
pub fn swap_down<K, N: DataNode<K>>(arena: &mut [N], mut node: u32) -> u32 {
    loop {
        let next = match (get_l(arena, node), get_r(arena, node)) {
            (Some(l), _) => subtree_last(arena, l),
            (None, Some(r)) => subtree_first(arena, r),
            (None, None) => return node,
        };
        trace!(from = node, to = next, "swap down");
        swap_data(arena, node, next);
        node = next;
    }
}

/// Unlinks a leaf from its parent and runs `maintain` on the parent.
///
/// Returns the former parent.
pub fn detach<N: Maintain>(arena: &mut [N], leaf: u32) -> Option<u32> {
    debug_assert!(
        get_l(arena, leaf).is_none() && get_r(arena, leaf).is_none(),
        "detach expects a leaf"
    );
    let parent = get_p(arena, leaf)?;
    if get_l(arena, parent) == Some(leaf) {
        set_l(arena, parent, None);
    } else {
        set_r(arena, parent, None);
    }
    set_p(arena, leaf, None);
    N::maintain(arena, parent);
    Some(parent)
}

/// Removes the key held by `node` from the tree.
///
/// The key is swapped down to a leaf, which is unlinked. Returns the index of
/// the physically removed node; it holds the key that was at `node`.
pub fn subtree_delete<K, N>(arena: &mut [N], node: u32) -> u32
where
    N: DataNode<K> + Maintain,
{
    let leaf = swap_down(arena, node);
    detach(arena, leaf);
    leaf
}

/// Checks parent/child link symmetry for every node under `root`.
pub fn assert_links<N: Node>(arena: &[N], root: Option<u32>) -> Result<(), ValidationError> {
    let Some(root) = root else {
        return Ok(());
    };
    if get_p(arena, root).is_some() {
        return Err(ValidationError::RootHasParent);
    }
    for node in preorder(arena, Some(root)) {
        for child in [get_l(arena, node), get_r(arena, node)].into_iter().flatten() {
            if get_p(arena, child) != Some(node) {
                return Err(ValidationError::BrokenParentLink(child));
            }
        }
    }
    Ok(())
}
