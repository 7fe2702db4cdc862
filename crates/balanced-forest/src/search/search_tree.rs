use std::cmp::Ordering;
use std::fmt::Debug;
use std::marker::PhantomData;

use tracing::debug;

use crate::balancing::AvlNode;
use crate::binary::BinaryNode;
use crate::error::{TreeError, ValidationError};
use crate::red_black::RedBlackNode;
use crate::types::{default_comparator, Variant};
use crate::util::{self, detach, insert_after, insert_before, print, swap_down, InOrder};

use super::util::{
    assert_order, locate, subtree_find, subtree_find_next, subtree_find_prev, Slot,
};

/// Ordered set over an arena of `N` nodes.
///
/// The node variant decides how the tree stays balanced: [`BinaryNode`] does
/// nothing, [`AvlNode`] rebalances in `maintain`, [`RedBlackNode`] recolors
/// and rotates in its fix-ups. Keys are unique under the comparator.
///
/// Slots vacated by deletes are recycled by later inserts, so arena indices
/// are only stable while the tree is not mutated.
#[derive(Clone, Debug)]
pub struct SearchTree<K, N, C = fn(&K, &K) -> Ordering>
where
    N: Variant<K>,
    C: Fn(&K, &K) -> Ordering,
{
    arena: Vec<N>,
    free: Vec<u32>,
    root: Option<u32>,
    len: usize,
    comparator: C,
    _k: PhantomData<K>,
}

pub type BinarySearchTree<K, C = fn(&K, &K) -> Ordering> = SearchTree<K, BinaryNode<K>, C>;
pub type AvlTree<K, C = fn(&K, &K) -> Ordering> = SearchTree<K, AvlNode<K>, C>;
pub type RedBlackTree<K, C = fn(&K, &K) -> Ordering> = SearchTree<K, RedBlackNode<K>, C>;

impl<K: Ord, N: Variant<K>> SearchTree<K, N> {
    pub fn new() -> Self {
        Self::with_comparator(default_comparator::<K>)
    }
}

impl<K: Ord, N: Variant<K>> Default for SearchTree<K, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, N, C> SearchTree<K, N, C>
where
    N: Variant<K>,
    C: Fn(&K, &K) -> Ordering,
{
    pub fn with_comparator(comparator: C) -> Self {
        Self {
            arena: Vec::new(),
            free: Vec::new(),
            root: None,
            len: 0,
            comparator,
            _k: PhantomData,
        }
    }

    /// Inserts each of `items` in turn. Keys already in the tree stay.
    pub fn build<I: IntoIterator<Item = K>>(&mut self, items: I) {
        self.extend(items);
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

    pub fn arena(&self) -> &[N] {
        &self.arena
    }

    pub fn comparator(&self) -> &C {
        &self.comparator
    }

    fn key(&self, idx: u32) -> &K {
        self.arena[idx as usize].data()
    }

    pub fn find(&self, key: &K) -> Option<&K> {
        subtree_find(&self.arena, self.root, key, &self.comparator).map(|i| self.key(i))
    }

    pub fn contains(&self, key: &K) -> bool {
        subtree_find(&self.arena, self.root, key, &self.comparator).is_some()
    }

    pub fn find_min(&self) -> Option<&K> {
        util::first(&self.arena, self.root).map(|i| self.key(i))
    }

    pub fn find_max(&self) -> Option<&K> {
        util::last(&self.arena, self.root).map(|i| self.key(i))
    }

    /// Smallest key strictly greater than `key`.
    pub fn find_next(&self, key: &K) -> Option<&K> {
        subtree_find_next(&self.arena, self.root, key, &self.comparator).map(|i| self.key(i))
    }

    /// Largest key strictly less than `key`.
    pub fn find_prev(&self, key: &K) -> Option<&K> {
        subtree_find_prev(&self.arena, self.root, key, &self.comparator).map(|i| self.key(i))
    }

    fn alloc(&mut self, key: K) -> u32 {
        let node = N::new(key);
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

    /// Inserts `key`. Returns `false` if an equal key was already present; the
    /// stored key is then replaced by `key` and the tree shape is untouched.
    pub fn insert(&mut self, key: K) -> bool {
        let Some(root) = self.root else {
            let node = self.alloc(key);
            self.root = Some(node);
            self.len = 1;
            N::insert_fix(&mut self.arena, node, node);
            debug!(node, "insert root");
            return true;
        };

        let node = match locate(&self.arena, root, &key, &self.comparator) {
            Slot::Occupied(i) => {
                *self.arena[i as usize].data_mut() = key;
                debug!(node = i, "insert duplicate");
                return false;
            }
            Slot::Before(parent) => {
                let node = self.alloc(key);
                insert_before(&mut self.arena, parent, node);
                node
            }
            Slot::After(parent) => {
                let node = self.alloc(key);
                insert_after(&mut self.arena, parent, node);
                node
            }
        };
        N::insert_fix(&mut self.arena, root, node);
        self.len += 1;
        debug!(node, len = self.len, "insert");
        true
    }

    /// Removes and returns the key equal to `key`.
    ///
    /// # Panics
    ///
    /// Panics if the tree is empty or holds no such key. Use
    /// [`try_delete`](Self::try_delete) to handle those cases.
    pub fn delete(&mut self, key: &K) -> K {
        match self.try_delete(key) {
            Ok(k) => k,
            Err(TreeError::Empty) => panic!("delete from an empty tree"),
            Err(e) => panic!("delete of an absent key: {e}"),
        }
    }

    pub fn try_delete(&mut self, key: &K) -> Result<K, TreeError> {
        let root = self.root.ok_or(TreeError::Empty)?;
        let node = subtree_find(&self.arena, Some(root), key, &self.comparator)
            .ok_or(TreeError::NotFound)?;

        let leaf = swap_down(&mut self.arena, node);
        N::delete_fix(&mut self.arena, root, leaf);
        detach(&mut self.arena, leaf);
        let removed = self.arena[leaf as usize].take_data().expect("live node holds a key");
        self.free.push(leaf);

        self.len -= 1;
        if self.len == 0 {
            self.root = None;
        }
        debug!(node = leaf, len = self.len, "delete");
        Ok(removed)
    }

    /// Keys in ascending order.
    pub fn iter(&self) -> Keys<'_, K, N, InOrder<'_, N>> {
        Keys::new(&self.arena, util::inorder(&self.arena, self.root))
    }

    pub fn preorder(&self) -> impl Iterator<Item = &K> + '_ {
        Keys::new(&self.arena, util::preorder(&self.arena, self.root))
    }

    pub fn postorder(&self) -> impl Iterator<Item = &K> + '_ {
        Keys::new(&self.arena, util::postorder(&self.arena, self.root))
    }

    pub fn level_order(&self) -> impl Iterator<Item = &K> + '_ {
        Keys::new(&self.arena, util::level_order(&self.arena, self.root))
    }

    /// Checks the variant's structural invariants, strict key order, and that
    /// the recorded length matches the reachable node count.
    pub fn assert_valid(&self) -> Result<(), ValidationError> {
        N::assert_structure(&self.arena, self.root)?;
        assert_order(&self.arena, self.root, &self.comparator)?;
        let counted = util::size(&self.arena, self.root);
        if counted != self.len {
            return Err(ValidationError::CountMismatch {
                counted,
                recorded: self.len,
            });
        }
        Ok(())
    }
}

impl<K, N, C> SearchTree<K, N, C>
where
    K: Debug,
    N: Variant<K>,
    C: Fn(&K, &K) -> Ordering,
{
    pub fn print(&self, tab: &str) -> String {
        let body = print::print(&self.arena, self.root, &format!("{tab}   "));
        format!("SearchTree\n{tab}└─ {body}")
    }
}

impl<K, N, C> Extend<K> for SearchTree<K, N, C>
where
    N: Variant<K>,
    C: Fn(&K, &K) -> Ordering,
{
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}

impl<K: Ord, N: Variant<K>> FromIterator<K> for SearchTree<K, N> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<'a, K, N, C> IntoIterator for &'a SearchTree<K, N, C>
where
    N: Variant<K>,
    C: Fn(&K, &K) -> Ordering,
{
    type Item = &'a K;
    type IntoIter = Keys<'a, K, N, InOrder<'a, N>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Maps a node-index traversal to the keys it visits.
pub struct Keys<'a, K, N, I> {
    arena: &'a [N],
    inner: I,
    _k: PhantomData<&'a K>,
}

impl<'a, K, N, I> Keys<'a, K, N, I> {
    fn new(arena: &'a [N], inner: I) -> Self {
        Self {
            arena,
            inner,
            _k: PhantomData,
        }
    }
}

impl<'a, K: 'a, N, I> Iterator for Keys<'a, K, N, I>
where
    N: Variant<K>,
    I: Iterator<Item = u32>,
{
    type Item = &'a K;

    fn next(&mut self) -> Option<&'a K> {
        let i = self.inner.next()?;
        Some(self.arena[i as usize].data())
    }
}
