use thiserror::Error;

/// Recoverable failures of the fallible facade operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TreeError {
    #[error("tree is empty")]
    Empty,
    #[error("key not found")]
    NotFound,
    #[error("index {index} out of bounds for length {len}")]
    IndexOutOfBounds { index: usize, len: usize },
}

/// Structural invariant violations reported by the `assert_*` validators.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("root has parent")]
    RootHasParent,
    #[error("broken parent link on node {0}")]
    BrokenParentLink(u32),
    #[error("node order violated at node {0}")]
    OrderViolated(u32),
    #[error("height mismatch on node {node}: expected {expected}, got {actual}")]
    HeightMismatch { node: u32, expected: i32, actual: i32 },
    #[error("AVL balance violated on node {node}: skew {skew}")]
    Unbalanced { node: u32, skew: i32 },
    #[error("size mismatch on node {node}: expected {expected}, got {actual}")]
    SizeMismatch {
        node: u32,
        expected: usize,
        actual: usize,
    },
    #[error("root is not black")]
    RedRoot,
    #[error("red node {0} has a red child")]
    RedRed(u32),
    #[error("black height mismatch under node {0}")]
    BlackHeightMismatch(u32),
    #[error("tree counts {counted} nodes but records size {recorded}")]
    CountMismatch { counted: usize, recorded: usize },
}
