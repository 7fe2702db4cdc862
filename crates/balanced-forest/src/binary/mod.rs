//! Plain binary node: links and a key, no balancing.

pub mod types;

pub use types::BinaryNode;
