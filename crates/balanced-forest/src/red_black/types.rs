use crate::error::ValidationError;
use crate::types::{DataNode, Maintain, Node, Variant};

use super::util;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Color {
    Red,
    Black,
}

/// Red-black tree node. New nodes start red.
#[derive(Clone, Debug)]
pub struct RedBlackNode<K> {
    pub p: Option<u32>,
    pub l: Option<u32>,
    pub r: Option<u32>,
    pub k: Option<K>,
    pub c: Color,
}

/// Nodes that carry a red-black color.
pub trait ColorNode: Maintain {
    fn color(&self) -> Color;
    fn set_color(&mut self, c: Color);
}

impl<K> Node for RedBlackNode<K> {
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

impl<K> DataNode<K> for RedBlackNode<K> {
    fn new(data: K) -> Self {
        Self {
            p: None,
            l: None,
            r: None,
            k: Some(data),
            c: Color::Red,
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
        Some(match self.c {
            Color::Red => "red".to_string(),
            Color::Black => "black".to_string(),
        })
    }
}

impl<K> ColorNode for RedBlackNode<K> {
    fn color(&self) -> Color {
        self.c
    }

    fn set_color(&mut self, c: Color) {
        self.c = c;
    }
}

impl<K> Maintain for RedBlackNode<K> {
    // Color travels with the key, so a data-swap rotation recolors exactly
    // like a pointer rotation would.
    fn swap_payload(&mut self, other: &mut Self) {
        std::mem::swap(&mut self.k, &mut other.k);
        std::mem::swap(&mut self.c, &mut other.c);
    }
}

impl<K> Variant<K> for RedBlackNode<K> {
    fn insert_fix(arena: &mut [Self], root: u32, node: u32) {
        util::insert_fix(arena, root, node);
    }

    fn delete_fix(arena: &mut [Self], root: u32, leaf: u32) {
        util::delete_fix(arena, root, leaf);
    }

    fn assert_structure(arena: &[Self], root: Option<u32>) -> Result<(), ValidationError> {
        util::assert_red_black_tree(arena, root)
    }
}
