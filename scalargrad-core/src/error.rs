use thiserror::Error;

/// Custom error type for the scalargrad engine and its module hierarchy.
#[derive(Error, Debug, PartialEq, Clone)] // PartialEq for easier testing
pub enum AutogradError {
    /// A value of the wrong kind was supplied: a leaf value that has no `f64`
    /// representation, or a graph node where a plain exponent was expected.
    #[error("Type mismatch in operation {operation}: expected {expected}, got {actual}")]
    TypeMismatch {
        operation: String,
        expected: String,
        actual: String,
    },

    #[error("Dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    /// A node id that is not live in the graph it was used with: it comes from
    /// another graph, or its node was dropped by a truncation.
    #[error("Unknown node: id {id} is not a live node of a graph holding {len} nodes")]
    UnknownNode { id: usize, len: usize },

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}
