use crate::error::GradRustError;
use crate::graph::{Graph, Operand};
use crate::node::NodeId;
use crate::ops::arithmetic::add::add_op;
use crate::ops::arithmetic::neg::neg_op;

/// Subtracts `rhs` from `lhs`, defined as `lhs + (-rhs)`.
///
/// Composite: derivative rules are inherited from addition and negation.
/// Because both positions are coerced before the composition, a raw scalar
/// on the left (`s - node`) inverts correctly: the node is negated, the
/// scalar is not.
pub fn sub_op(
    graph: &mut Graph,
    lhs: impl Into<Operand>,
    rhs: impl Into<Operand>,
) -> Result<NodeId, GradRustError> {
    let negated = neg_op(graph, rhs)?;
    add_op(graph, lhs, negated)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sub_forward() {
        let mut graph = Graph::new();
        let a = graph.leaf(7.0);
        let b = graph.leaf(4.0);
        let c = sub_op(&mut graph, a, b).unwrap();
        assert_eq!(graph.data(c), 3.0);
    }

    #[test]
    fn test_sub_backward() {
        let mut graph = Graph::new();
        let a = graph.leaf(7.0);
        let b = graph.leaf(4.0);
        let c = sub_op(&mut graph, a, b).unwrap();
        graph.backward(c).unwrap();
        // dc/da = 1, dc/db = -1
        assert_eq!(graph.grad(a), 1.0);
        assert_eq!(graph.grad(b), -1.0);
    }

    #[test]
    fn test_sub_scalar_left_inverts_correctly() {
        // 10 - b, not b - 10
        let mut graph = Graph::new();
        let b = graph.leaf(4.0);
        let c = sub_op(&mut graph, 10.0, b).unwrap();
        assert_eq!(graph.data(c), 6.0);
        graph.backward(c).unwrap();
        assert_eq!(graph.grad(b), -1.0);
    }
}
