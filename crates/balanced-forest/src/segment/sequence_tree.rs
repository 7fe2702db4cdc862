use std::fmt::Debug;

use tracing::debug;

use crate::error::{TreeError, ValidationError};
use crate::types::{DataNode, Maintain};
use crate::util::{
    detach, inorder, insert_after, insert_before, print, size, subtree_first, swap_down,
};

use super::types::SegmentNode;
use super::util::{assert_segment_tree, subtree_at};

/// Positional sequence backed by a size-augmented AVL tree.
///
/// Elements are addressed by their in-order position rather than by key.
/// Every positional operation is O(log n); `build` is O(n).
#[derive(Clone, Debug)]
pub struct SequenceTree<K> {
    arena: Vec<SegmentNode<K>>,
    free: Vec<u32>,
    root: Option<u32>,
    len: usize,
}

impl<K> Default for SequenceTree<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> SequenceTree<K> {
    pub fn new() -> Self {
        Self {
            arena: Vec::new(),
            free: Vec::new(),
            root: None,
            len: 0,
        }
    }

    /// Replaces the contents with `items`, in order, as a perfectly balanced
    /// tree. O(n).
    pub fn build<I: IntoIterator<Item = K>>(&mut self, items: I) {
        self.clear();
        self.arena.extend(items.into_iter().map(SegmentNode::new));
        self.len = self.arena.len();
        self.root = link_balanced(&mut self.arena, 0, self.len);
        debug!(len = self.len, "sequence tree built");
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn clear(&mut self) {
        self.arena.clear();
        self.free.clear();
        self.root = None;
        self.len = 0;
    }

    pub fn root_index(&self) -> Option<u32> {
        self.root
    }

    pub fn arena(&self) -> &[SegmentNode<K>] {
        &self.arena
    }

    fn node_at(&self, i: usize) -> Option<u32> {
        subtree_at(&self.arena, self.root?, i)
    }

    fn out_of_bounds(&self, index: usize) -> TreeError {
        TreeError::IndexOutOfBounds {
            index,
            len: self.len,
        }
    }

    pub fn get_at(&self, i: usize) -> Option<&K> {
        self.node_at(i).map(|n| self.arena[n as usize].data())
    }

    pub fn get_at_mut(&mut self, i: usize) -> Option<&mut K> {
        let n = self.node_at(i)?;
        Some(self.arena[n as usize].data_mut())
    }

    /// Replaces the element at position `i`, returning the previous one.
    pub fn set_at(&mut self, i: usize, value: K) -> Result<K, TreeError> {
        let len = self.len;
        match self.get_at_mut(i) {
            Some(slot) => Ok(std::mem::replace(slot, value)),
            None => Err(TreeError::IndexOutOfBounds { index: i, len }),
        }
    }

    fn alloc(&mut self, value: K) -> u32 {
        let node = SegmentNode::new(value);
        match self.free.pop() {
            Some(i) => {
                self.arena[i as usize] = node;
                i
            }
            None => {
                self.arena.push(node);
                (self.arena.len() - 1) as u32
            }
        }
    }

    /// Inserts `value` so that it ends up at position `i`. Valid for
    /// `i <= len`; `i == len` appends.
    pub fn insert_at(&mut self, i: usize, value: K) -> Result<(), TreeError> {
        if i > self.len {
            return Err(self.out_of_bounds(i));
        }
        let node = self.alloc(value);
        match self.root {
            None => self.root = Some(node),
            Some(root) if i == 0 => {
                let first = subtree_first(&self.arena, root);
                insert_before(&mut self.arena, first, node);
            }
            Some(root) => {
                let prev = subtree_at(&self.arena, root, i - 1)
                    .expect("position checked against len");
                insert_after(&mut self.arena, prev, node);
            }
        }
        self.len += 1;
        debug!(index = i, node, len = self.len, "sequence insert");
        Ok(())
    }

    /// Removes and returns the element at position `i`.
    pub fn delete_at(&mut self, i: usize) -> Result<K, TreeError> {
        let Some(node) = self.node_at(i) else {
            return Err(self.out_of_bounds(i));
        };
        let leaf = swap_down(&mut self.arena, node);
        detach(&mut self.arena, leaf);
        let value = self.arena[leaf as usize].take_data().expect("live node holds a value");
        self.free.push(leaf);
        self.len -= 1;
        if self.len == 0 {
            self.root = None;
        }
        debug!(index = i, node = leaf, len = self.len, "sequence delete");
        Ok(value)
    }

    pub fn insert_first(&mut self, value: K) {
        self.insert_at(0, value).expect("position 0 is always valid");
    }

    pub fn insert_last(&mut self, value: K) {
        self.insert_at(self.len, value).expect("position len is always valid");
    }

    pub fn delete_first(&mut self) -> Result<K, TreeError> {
        if self.is_empty() {
            return Err(TreeError::Empty);
        }
        self.delete_at(0)
    }

    pub fn delete_last(&mut self) -> Result<K, TreeError> {
        if self.is_empty() {
            return Err(TreeError::Empty);
        }
        self.delete_at(self.len - 1)
    }

    /// Elements in position order.
    pub fn iter(&self) -> impl Iterator<Item = &K> + '_ {
        inorder(&self.arena, self.root).map(move |i| self.arena[i as usize].data())
    }

    pub fn assert_valid(&self) -> Result<(), ValidationError> {
        assert_segment_tree(&self.arena, self.root)?;
        let counted = size(&self.arena, self.root);
        if counted != self.len {
            return Err(ValidationError::CountMismatch {
                counted,
                recorded: self.len,
            });
        }
        Ok(())
    }
}

impl<K: Debug> SequenceTree<K> {
    pub fn print(&self, tab: &str) -> String {
        let body = print::print(&self.arena, self.root, &format!("{tab}   "));
        format!("SequenceTree\n{tab}└─ {body}")
    }
}

impl<K> FromIterator<K> for SequenceTree<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.build(iter);
        tree
    }
}

impl<'a, K> IntoIterator for &'a SequenceTree<K> {
    type Item = &'a K;
    type IntoIter = Box<dyn Iterator<Item = &'a K> + 'a>;

    fn into_iter(self) -> Self::IntoIter {
        Box::new(self.iter())
    }
}

/// Links arena slots `lo..hi`, already laid out in order, into a balanced
/// subtree and returns its root. The middle slot becomes the root.
fn link_balanced<K>(arena: &mut [SegmentNode<K>], lo: usize, hi: usize) -> Option<u32> {
    if lo >= hi {
        return None;
    }
    let mid = lo + (hi - lo - 1) / 2;
    let l = link_balanced(arena, lo, mid);
    let r = link_balanced(arena, mid + 1, hi);
    let node = mid as u32;
    arena[mid].l = l;
    arena[mid].r = r;
    for child in [l, r].into_iter().flatten() {
        arena[child as usize].p = Some(node);
    }
    SegmentNode::subtree_update(arena, node);
    Some(node)
}
