use crate::error::GradRustError;
use crate::graph::{Graph, Operand};
use crate::node::NodeId;
use crate::ops::arithmetic::mul::mul_op;
use crate::ops::arithmetic::pow::pow_op;

/// Divides `lhs` by `rhs`, defined as `lhs * rhs^-1`.
///
/// Composite: derivative rules are inherited from multiplication and the
/// constant power. Division by a zero-valued node yields an IEEE infinity
/// (or NaN for `0/0`) in the node's `data`, never an `Err`; the coercion
/// still makes `s / node` invert correctly for a raw scalar on the left.
pub fn div_op(
    graph: &mut Graph,
    lhs: impl Into<Operand>,
    rhs: impl Into<Operand>,
) -> Result<NodeId, GradRustError> {
    let reciprocal = pow_op(graph, rhs, -1.0)?;
    mul_op(graph, lhs, reciprocal)
}
