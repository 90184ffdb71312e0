use crate::error::GradRustError;
use crate::graph::{Graph, Operand};
use crate::node::NodeId;
use crate::ops::arithmetic::mul::mul_op;

/// Negates an operand, defined as `value * -1`.
///
/// Composite: the recorded node is a `Mul` against a fresh `-1` leaf, so
/// the derivative rule is inherited from multiplication.
pub fn neg_op(graph: &mut Graph, value: impl Into<Operand>) -> Result<NodeId, GradRustError> {
    mul_op(graph, value, -1.0)
}
