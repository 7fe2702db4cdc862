use crate::types::{DataNode, Maintain, Node, Variant};

/// Unbalanced binary node. `maintain` is a no-op.
#[derive(Clone, Debug)]
pub struct BinaryNode<K> {
    pub p: Option<u32>,
    pub l: Option<u32>,
    pub r: Option<u32>,
    // `None` once the node has been removed from its tree.
    pub k: Option<K>,
}

impl<K> Node for BinaryNode<K> {
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

impl<K> DataNode<K> for BinaryNode<K> {
    fn new(data: K) -> Self {
        Self {
            p: None,
            l: None,
            r: None,
            k: Some(data),
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
}

impl<K> Maintain for BinaryNode<K> {
    fn swap_payload(&mut self, other: &mut Self) {
        std::mem::swap(&mut self.k, &mut other.k);
    }
}

impl<K> Variant<K> for BinaryNode<K> {}
