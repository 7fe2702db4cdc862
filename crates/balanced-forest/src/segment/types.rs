use crate::balancing::{self, HeightNode};
use crate::error::ValidationError;
use crate::types::{DataNode, Maintain, Node, Variant};

use super::util;

/// Balancing node that also caches the number of nodes in its subtree.
#[derive(Clone, Debug)]
pub struct SegmentNode<K> {
    pub p: Option<u32>,
    pub l: Option<u32>,
    pub r: Option<u32>,
    pub k: Option<K>,
    pub h: i32,
    pub size: usize,
}

/// Nodes that cache a subtree node count.
pub trait SizeNode: Maintain {
    fn size(&self) -> usize;
    fn set_size(&mut self, size: usize);
}

impl<K> Node for SegmentNode<K> {
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

impl<K> DataNode<K> for SegmentNode<K> {
    fn new(data: K) -> Self {
        Self {
            p: None,
            l: None,
            r: None,
            k: Some(data),
            h: 0,
            size: 1,
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
        Some(format!("size={} h={}", self.size, self.h))
    }
}

impl<K> HeightNode for SegmentNode<K> {
    fn height(&self) -> i32 {
        self.h
    }

    fn set_height(&mut self, h: i32) {
        self.h = h;
    }
}

impl<K> SizeNode for SegmentNode<K> {
    fn size(&self) -> usize {
        self.size
    }

    fn set_size(&mut self, size: usize) {
        self.size = size;
    }
}

impl<K> Maintain for SegmentNode<K> {
    fn swap_payload(&mut self, other: &mut Self) {
        std::mem::swap(&mut self.k, &mut other.k);
    }

    fn subtree_update(arena: &mut [Self], node: u32) {
        util::update_size(arena, node);
        balancing::update_height(arena, node);
    }

    fn maintain(arena: &mut [Self], node: u32) {
        balancing::maintain(arena, node);
    }
}

impl<K> Variant<K> for SegmentNode<K> {
    fn assert_structure(arena: &[Self], root: Option<u32>) -> Result<(), ValidationError> {
        util::assert_segment_tree(arena, root)
    }
}
