//! Arena-based self-balancing binary search trees.
//!
//! Nodes live in a caller-owned `Vec<N>`; every "pointer" is an
//! `Option<u32>` index into that arena. One node struct per balancing
//! strategy, composed through small traits, with shared navigation and
//! positional-insert code in [`util`].
//!
//! Rotations exchange node payloads instead of relinking the subtree root,
//! so a tree's root index never changes while the tree is non-empty.
//!
//! # Module layout
//!
//! | Module | Contents |
//! |--------|----------|
//! [`types`] | [`Node`], [`DataNode`], [`Maintain`], [`Variant`] traits |
//! [`util`] | traversals, successor/predecessor, positional insert, swap-down delete, printer |
//! [`binary`] | [`BinaryNode`], no balancing |
//! [`balancing`] | [`BalancingNode`] heights, rotations, AVL rebalance |
//! [`red_black`] | [`RedBlackNode`] colors, insert and delete fix-ups |
//! [`segment`] | [`SegmentNode`] subtree sizes, [`SequenceTree`] |
//! [`search`] | comparison-driven find/insert, [`SearchTree`] and its aliases |

pub mod balancing;
pub mod binary;
pub mod error;
pub mod red_black;
pub mod search;
pub mod segment;
pub mod types;
pub mod util;

pub use balancing::{rotate_left, rotate_right, AvlNode, BalancingNode, HeightNode};
pub use binary::BinaryNode;
pub use error::{TreeError, ValidationError};
pub use red_black::{Color, ColorNode, RedBlackNode};
pub use search::{AvlTree, BinarySearchTree, RedBlackTree, SearchTree};
pub use segment::{SegmentNode, SequenceTree, SizeNode};
pub use types::{default_comparator, DataNode, Maintain, Node, Variant};
pub use util::{
    first, inorder, insert_after, insert_before, last, level_order, postorder, predecessor,
    preorder, subtree_delete, successor,
};
