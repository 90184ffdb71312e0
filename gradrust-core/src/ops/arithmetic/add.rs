// gradrust-core/src/ops/arithmetic/add.rs

use crate::error::GradRustError;
use crate::graph::{Graph, Operand};
use crate::node::{NodeId, Op};

/// Adds two operands, recording `lhs + rhs` as a new node.
///
/// During backward, each operand receives the output gradient unchanged:
/// `lhs.grad += out.grad; rhs.grad += out.grad`.
pub fn add_op(
    graph: &mut Graph,
    lhs: impl Into<Operand>,
    rhs: impl Into<Operand>,
) -> Result<NodeId, GradRustError> {
    let lhs = graph.operand(lhs.into(), "add_op")?;
    let rhs = graph.operand(rhs.into(), "add_op")?;
    let data = graph.data(lhs) + graph.data(rhs);
    Ok(graph.push(data, Op::Add(lhs, rhs)))
}
