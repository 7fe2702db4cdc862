//! Red-black nodes and their insert/delete fix-ups.

pub mod types;
pub mod util;

pub use types::{Color, ColorNode, RedBlackNode};
pub use util::{assert_red_black_tree, delete_fix, grandparent, insert_fix, sibling, uncle};
