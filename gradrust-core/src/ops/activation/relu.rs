use crate::error::GradRustError;
use crate::graph::{Graph, Operand};
use crate::node::{NodeId, Op};

/// Applies the Rectified Linear Unit, recording `max(0, value)` as a new
/// node.
///
/// During backward the gate is taken on the *output* value: the operand
/// receives `out.grad` if `out.data > 0` and nothing otherwise. At the
/// boundary (`value == 0`) the output is 0 and no gradient flows.
pub fn relu_op(graph: &mut Graph, value: impl Into<Operand>) -> Result<NodeId, GradRustError> {
    let value = graph.operand(value.into(), "relu_op")?;
    let data = graph.data(value).max(0.0);
    Ok(graph.push(data, Op::Relu(value)))
}
