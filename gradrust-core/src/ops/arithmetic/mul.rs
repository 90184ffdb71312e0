use crate::error::GradRustError;
use crate::graph::{Graph, Operand};
use crate::node::{NodeId, Op};

/// Multiplies two operands, recording `lhs * rhs` as a new node.
///
/// During backward each operand receives the other operand's value times
/// the output gradient: `lhs.grad += rhs.data * out.grad` and vice versa.
/// When both operands are the same node the two contributions accumulate
/// into the one slot, giving `d(x*x)/dx = 2x`.
pub fn mul_op(
    graph: &mut Graph,
    lhs: impl Into<Operand>,
    rhs: impl Into<Operand>,
) -> Result<NodeId, GradRustError> {
    let lhs = graph.operand(lhs.into(), "mul_op")?;
    let rhs = graph.operand(rhs.into(), "mul_op")?;
    let data = graph.data(lhs) * graph.data(rhs);
    Ok(graph.push(data, Op::Mul(lhs, rhs)))
}
