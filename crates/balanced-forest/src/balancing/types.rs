use crate::error::ValidationError;
use crate::types::{DataNode, Maintain, Node, Variant};

use super::util;

/// Node that caches the height of its subtree.
///
/// A leaf has height 0 and an absent child counts as -1.
#[derive(Clone, Debug)]
pub struct BalancingNode<K> {
    pub p: Option<u32>,
    pub l: Option<u32>,
    pub r: Option<u32>,
    pub k: Option<K>,
    pub h: i32,
}

/// A balancing node used under a search tree is an AVL node.
pub type AvlNode<K> = BalancingNode<K>;

/// Nodes that cache a subtree height.
pub trait HeightNode: Maintain {
    fn height(&self) -> i32;
    fn set_height(&mut self, h: i32);
}

impl<K> Node for BalancingNode<K> {
    fn p(&self) -> Option<u32> {
        self.p
    }

    fn l(&self) -> Option<u32> {
        self.l
    }

    fn r(&self) -> Option<u32> {
        self.r
    }

    fn set_p(&mut self, v: Option<u32>) {
        self.p = v;
    }

    fn set_l(&mut self, v: Option<u32>) {
        self.l = v;
    }

    fn set_r(&mut self, v: Option<u32>) {
        self.r = v;
    }
}

impl<K> DataNode<K> for BalancingNode<K> {
    fn new(data: K) -> Self {
        Self {
            p: None,
            l: None,
            r: None,
            k: Some(data),
            h: 0,
        }
    }

    fn data(&self) -> &K {
        self.k.as_ref().expect("node is vacant")
    }

    fn data_mut(&mut self) -> &mut K {
        self.k.as_mut().expect("node is vacant")
    }

    fn take_data(&mut self) -> Option<K> {
        self.k.take()
    }

    fn tag(&self) -> Option<String> {
        Some(format!("h={}", self.h))
    }
}

impl<K> HeightNode for BalancingNode<K> {
    fn height(&self) -> i32 {
        self.h
    }

    fn set_height(&mut self, h: i32) {
        self.h = h;
    }
}

impl<K> Maintain for BalancingNode<K> {
    fn swap_payload(&mut self, other: &mut Self) {
        std::mem::swap(&mut self.k, &mut other.k);
    }

    fn subtree_update(arena: &mut [Self], node: u32) {
        util::update_height(arena, node);
    }

    fn maintain(arena: &mut [Self], node: u32) {
        util::maintain(arena, node);
    }
}

impl<K> Variant<K> for BalancingNode<K> {
    fn assert_structure(arena: &[Self], root: Option<u32>) -> Result<(), ValidationError> {
        util::assert_avl_tree(arena, root)
    }
}
