// gradrust-core/src/ops/arithmetic/pow.rs

use crate::error::GradRustError;
use crate::graph::{Graph, Operand};
use crate::node::{NodeId, Op};

/// Raises `base` to a constant scalar `exponent`, recording `base ^
/// exponent` as a new node.
///
/// The exponent must coerce to a plain scalar; a graph node in that
/// position is rejected with [`GradRustError::ExponentNotConstant`], since
/// derivatives with respect to a variable exponent are unsupported. The
/// exponent is stored on the node tag, not as an operand edge.
///
/// During backward: `base.grad += exponent * base.data^(exponent-1) *
/// out.grad`.
///
/// Numerical edge cases (non-positive base with fractional or negative
/// exponent, `0^-1`) surface as IEEE infinities or NaN in the node's
/// `data`, never as an `Err`.
pub fn pow_op(
    graph: &mut Graph,
    base: impl Into<Operand>,
    exponent: impl Into<Operand>,
) -> Result<NodeId, GradRustError> {
    let exponent = match exponent.into() {
        Operand::Scalar(value) => value,
        Operand::Node(node) => {
            return Err(GradRustError::ExponentNotConstant {
                node,
                operation: "pow_op".to_string(),
            })
        }
    };
    let base = graph.operand(base.into(), "pow_op")?;
    let data = graph.data(base).powf(exponent);
    Ok(graph.push(data, Op::Pow { base, exponent }))
}
