//! Height-balanced nodes: the rotation engine and AVL rebalancing.

pub mod rotate;
pub mod types;
pub mod util;

pub use rotate::{rotate_left, rotate_right};
pub use types::{AvlNode, BalancingNode, HeightNode};
pub use util::{assert_avl_tree, height, maintain, rebalance, skew, update_height};
