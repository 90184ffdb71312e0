use crate::node::NodeId;
use thiserror::Error;

/// Custom error type for the GradRust engine.
#[derive(Error, Debug, PartialEq, Clone)] // PartialEq/Clone for easier testing
pub enum GradRustError {
    /// A `NodeId` handed to an operation does not address a node of the
    /// graph the operation was called on. The usual cause is mixing ids
    /// from two different `Graph` arenas.
    #[error("node {node:?} does not belong to this graph ({len} nodes) during operation {operation}")]
    NodeOutOfBounds {
        node: NodeId,
        len: usize,
        operation: String,
    },

    /// A graph node was supplied where `pow` expects a plain scalar
    /// exponent. Derivatives with respect to a variable exponent are
    /// unsupported.
    #[error("exponent must be a plain scalar, got node {node:?} during operation {operation}")]
    ExponentNotConstant { node: NodeId, operation: String },
}
