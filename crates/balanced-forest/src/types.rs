//! Node trait definitions.
//!
//! Every tree in this crate keeps its nodes in a caller-owned arena
//! (`Vec<N>`). Links are `Option<u32>` indices into that arena: `l` and `r`
//! are the owning child links, `p` is a non-owning back-reference used only
//! for walking upward.

use std::cmp::Ordering;

use crate::error::ValidationError;

/// Structural links (`p`, `l`, `r`).
pub trait Node {
    fn p(&self) -> Option<u32>;
    fn l(&self) -> Option<u32>;
    fn r(&self) -> Option<u32>;
    fn set_p(&mut self, v: Option<u32>);
    fn set_l(&mut self, v: Option<u32>);
    fn set_r(&mut self, v: Option<u32>);
}

/// A node that carries a payload of type `K`.
///
/// The payload is held in an `Option` so a physically removed node can hand
/// its value back by move while its slot stays in the arena. Accessing the
/// payload of a vacant slot is a programming error and panics.
pub trait DataNode<K>: Node {
    fn new(data: K) -> Self;
    fn data(&self) -> &K;
    fn data_mut(&mut self) -> &mut K;
    /// Moves the payload out, leaving the slot vacant.
    fn take_data(&mut self) -> Option<K>;
    /// Extra per-variant state shown by the debug printer.
    fn tag(&self) -> Option<String> {
        None
    }
}

/// Post-mutation hooks.
///
/// `maintain` runs after a child was attached to or detached from a node. The
/// plain node leaves it empty; balancing nodes rebalance and walk to the root.
pub trait Maintain: Node + Sized {
    /// Exchanges the payload of two nodes without touching their links.
    ///
    /// Rotations use it to swap the roles of a subtree root and its pivot in
    /// place. Red-black nodes move their color along with the key.
    fn swap_payload(&mut self, other: &mut Self);

    /// Recomputes cached subtree metadata (height, size) from the children.
    fn subtree_update(_arena: &mut [Self], _node: u32) {}

    fn maintain(_arena: &mut [Self], _node: u32) {}
}

/// Variant hooks invoked by the search-tree facade around placement and
/// removal.
///
/// `insert_fix` runs after a new node has been attached (and maintained).
/// `delete_fix` runs on the leaf that is about to be unlinked, while it is
/// still attached. `assert_structure` checks the variant's own invariants
/// (links at minimum); key order is checked separately by the facade.
pub trait Variant<K>: DataNode<K> + Maintain {
    fn insert_fix(_arena: &mut [Self], _root: u32, _node: u32) {}
    fn delete_fix(_arena: &mut [Self], _root: u32, _leaf: u32) {}

    fn assert_structure(arena: &[Self], root: Option<u32>) -> Result<(), ValidationError> {
        crate::util::assert_links(arena, root)
    }
}

pub fn default_comparator<K: Ord>(a: &K, b: &K) -> Ordering {
    a.cmp(b)
}
