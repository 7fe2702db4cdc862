//! Size-augmented balancing nodes for positional indexing.

pub mod sequence_tree;
pub mod types;
pub mod util;

pub use sequence_tree::SequenceTree;
pub use types::{SegmentNode, SizeNode};
pub use util::{assert_segment_tree, size_of, subtree_at, update_size};
