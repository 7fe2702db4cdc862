use std::cmp::Ordering;

use crate::error::ValidationError;
use crate::types::DataNode;
use crate::util::{get_l, get_r, inorder};

/// Where a key belongs relative to the existing nodes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Slot {
    /// A node with an equal key already exists.
    Occupied(u32),
    /// Attach as the (absent) left child of this node.
    Before(u32),
    /// Attach as the (absent) right child of this node.
    After(u32),
}

/// Node holding a key equal to `key`. O(h).
pub fn subtree_find<K, N, C>(
    arena: &[N],
    root: Option<u32>,
    key: &K,
    comparator: &C,
) -> Option<u32>
where
    N: DataNode<K>,
    C: Fn(&K, &K) -> Ordering,
{
    let mut curr = root;
    while let Some(i) = curr {
        curr = match comparator(key, arena[i as usize].data()) {
            Ordering::Less => get_l(arena, i),
            Ordering::Greater => get_r(arena, i),
            Ordering::Equal => return Some(i),
        };
    }
    None
}

/// Node with the smallest key strictly greater than `key`. O(h).
pub fn subtree_find_next<K, N, C>(
    arena: &[N],
    root: Option<u32>,
    key: &K,
    comparator: &C,
) -> Option<u32>
where
    N: DataNode<K>,
    C: Fn(&K, &K) -> Ordering,
{
    let mut best = None;
    let mut curr = root;
    while let Some(i) = curr {
        if comparator(arena[i as usize].data(), key) == Ordering::Greater {
            best = Some(i);
            curr = get_l(arena, i);
        } else {
            curr = get_r(arena, i);
        }
    }
    best
}

/// Node with the largest key strictly less than `key`. O(h).
pub fn subtree_find_prev<K, N, C>(
    arena: &[N],
    root: Option<u32>,
    key: &K,
    comparator: &C,
) -> Option<u32>
where
    N: DataNode<K>,
    C: Fn(&K, &K) -> Ordering,
{
    let mut best = None;
    let mut curr = root;
    while let Some(i) = curr {
        if comparator(arena[i as usize].data(), key) == Ordering::Less {
            best = Some(i);
            curr = get_r(arena, i);
        } else {
            curr = get_l(arena, i);
        }
    }
    best
}

/// Descends from `root` to the slot `key` belongs in.
pub fn locate<K, N, C>(arena: &[N], root: u32, key: &K, comparator: &C) -> Slot
where
    N: DataNode<K>,
    C: Fn(&K, &K) -> Ordering,
{
    let mut curr = root;
    loop {
        match comparator(key, arena[curr as usize].data()) {
            Ordering::Equal => return Slot::Occupied(curr),
            Ordering::Less => match get_l(arena, curr) {
                Some(l) => curr = l,
                None => return Slot::Before(curr),
            },
            Ordering::Greater => match get_r(arena, curr) {
                Some(r) => curr = r,
                None => return Slot::After(curr),
            },
        }
    }
}

/// Checks that in-order keys are strictly ascending under `comparator`.
///
/// Reports the first node whose key does not exceed its predecessor's.
pub fn assert_order<K, N, C>(
    arena: &[N],
    root: Option<u32>,
    comparator: &C,
) -> Result<(), ValidationError>
where
    N: DataNode<K>,
    C: Fn(&K, &K) -> Ordering,
{
    let mut prev: Option<&K> = None;
    for i in inorder(arena, root) {
        let key = arena[i as usize].data();
        if let Some(prev) = prev {
            if comparator(prev, key) != Ordering::Less {
                return Err(ValidationError::OrderViolated(i));
            }
        }
        prev = Some(key);
    }
    Ok(())
}
