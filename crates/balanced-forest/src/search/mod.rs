//! Comparison-driven search over any node variant, and the ordered-set
//! facade built on it.

pub mod search_tree;
pub mod util;

pub use search_tree::{AvlTree, BinarySearchTree, Keys, RedBlackTree, SearchTree};
pub use util::{assert_order, locate, subtree_find, subtree_find_next, subtree_find_prev, Slot};
