use approx::relative_eq;
use log::trace;
use thiserror::Error;

use crate::error::GradRustError;
use crate::graph::Graph;
use crate::node::NodeId;

/// Error type specifically for gradient checking failures.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GradCheckError {
    #[error("gradient check failed for input {input_index}: analytical grad {analytical_grad} != numerical grad {numerical_grad} (difference {difference})")]
    GradientMismatch {
        input_index: usize,
        analytical_grad: f64,
        numerical_grad: f64,
        difference: f64,
    },

    #[error("expression builder failed during gradient check: {0}")]
    ForwardPassError(GradRustError),

    #[error("backward pass failed during gradient check: {0}")]
    BackwardPassError(GradRustError),

    #[error("numerical gradient is NaN or infinite for input {input_index} (loss+: {loss_plus}, loss-: {loss_minus})")]
    NumericalGradNaNOrInfinite {
        input_index: usize,
        loss_plus: f64,
        loss_minus: f64,
    },

    #[error("analytical gradient is NaN or infinite for input {input_index}: {value}")]
    AnalyticalGradNaNOrInfinite { input_index: usize, value: f64 },
}

/// Checks analytical gradients against numerical gradients using central
/// finite differences.
///
/// `build` receives a fresh [`Graph`] and one leaf per entry of `inputs`,
/// and returns the root of the expression under test. It is invoked once
/// for the analytical pass and twice more per input for the `±epsilon`
/// evaluations, so it must be a pure function of the leaf values.
///
/// The comparison accepts either an absolute or a relative agreement
/// within `tolerance`, which keeps the check meaningful for gradients both
/// near zero and in the hundreds.
pub fn check_grad<F>(
    build: F,
    inputs: &[f64],
    epsilon: f64,
    tolerance: f64,
) -> Result<(), GradCheckError>
where
    F: Fn(&mut Graph, &[NodeId]) -> Result<NodeId, GradRustError>,
{
    // --- Analytical pass ---
    let mut graph = Graph::new();
    let leaves: Vec<NodeId> = inputs.iter().map(|&value| graph.leaf(value)).collect();
    let root = build(&mut graph, &leaves).map_err(GradCheckError::ForwardPassError)?;
    graph
        .backward(root)
        .map_err(GradCheckError::BackwardPassError)?;
    let analytical: Vec<f64> = leaves.iter().map(|&leaf| graph.grad(leaf)).collect();

    // Forward-only evaluation at shifted inputs.
    let evaluate = |shifted: &[f64]| -> Result<f64, GradCheckError> {
        let mut graph = Graph::new();
        let leaves: Vec<NodeId> = shifted.iter().map(|&value| graph.leaf(value)).collect();
        let root = build(&mut graph, &leaves).map_err(GradCheckError::ForwardPassError)?;
        Ok(graph.data(root))
    };

    for (input_index, analytical_grad) in analytical.iter().copied().enumerate() {
        let mut plus = inputs.to_vec();
        plus[input_index] += epsilon;
        let mut minus = inputs.to_vec();
        minus[input_index] -= epsilon;

        let loss_plus = evaluate(&plus)?;
        let loss_minus = evaluate(&minus)?;
        let numerical_grad = (loss_plus - loss_minus) / (2.0 * epsilon);

        if !numerical_grad.is_finite() {
            return Err(GradCheckError::NumericalGradNaNOrInfinite {
                input_index,
                loss_plus,
                loss_minus,
            });
        }
        if !analytical_grad.is_finite() {
            return Err(GradCheckError::AnalyticalGradNaNOrInfinite {
                input_index,
                value: analytical_grad,
            });
        }

        trace!(
            "check_grad: input {} analytical {} numerical {}",
            input_index,
            analytical_grad,
            numerical_grad
        );
        if !relative_eq!(
            analytical_grad,
            numerical_grad,
            epsilon = tolerance,
            max_relative = tolerance
        ) {
            return Err(GradCheckError::GradientMismatch {
                input_index,
                analytical_grad,
                numerical_grad,
                difference: (analytical_grad - numerical_grad).abs(),
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    const EPSILON: f64 = 1e-4;
    const TOLERANCE: f64 = 1e-2;

    #[test]
    fn test_polynomial_grad() {
        // y = 3x^2 - 4x + 5
        let build = |graph: &mut Graph, leaves: &[NodeId]| {
            let x = leaves[0];
            let sq = graph.pow(x, 2.0)?;
            let a = graph.mul(3.0, sq)?;
            let b = graph.mul(4.0, x)?;
            let diff = graph.sub(a, b)?;
            graph.add(diff, 5.0)
        };
        check_grad(build, &[3.0], EPSILON, TOLERANCE).unwrap();
        check_grad(build, &[-1.25], EPSILON, TOLERANCE).unwrap();
    }

    #[test]
    fn test_product_and_quotient_grad() {
        // z = (x * y + y) / x
        let build = |graph: &mut Graph, leaves: &[NodeId]| {
            let (x, y) = (leaves[0], leaves[1]);
            let xy = graph.mul(x, y)?;
            let num = graph.add(xy, y)?;
            graph.div(num, x)
        };
        check_grad(build, &[2.0, -3.0], EPSILON, TOLERANCE).unwrap();
        check_grad(build, &[-1.5, 0.5], EPSILON, TOLERANCE).unwrap();
    }

    #[test]
    fn test_relu_grad_away_from_boundary() {
        let build = |graph: &mut Graph, leaves: &[NodeId]| {
            let x = leaves[0];
            let r = graph.relu(x)?;
            graph.mul(r, 3.0)
        };
        check_grad(build, &[2.0], EPSILON, TOLERANCE).unwrap();
        check_grad(build, &[-2.0], EPSILON, TOLERANCE).unwrap();
    }

    #[test]
    fn test_diamond_grad() {
        // y = (x + x) * x
        let build = |graph: &mut Graph, leaves: &[NodeId]| {
            let x = leaves[0];
            let s = graph.add(x, x)?;
            graph.mul(s, x)
        };
        check_grad(build, &[1.75], EPSILON, TOLERANCE).unwrap();
    }

    #[test]
    fn test_randomized_expression_grads() {
        let mut rng = StdRng::seed_from_u64(42);
        let build = |graph: &mut Graph, leaves: &[NodeId]| {
            // w = relu(a*b + c) * (a - c) + b/c + c^3
            let (a, b, c) = (leaves[0], leaves[1], leaves[2]);
            let ab = graph.mul(a, b)?;
            let gate = graph.add(ab, c)?;
            let gated = graph.relu(gate)?;
            let amc = graph.sub(a, c)?;
            let left = graph.mul(gated, amc)?;
            let mid = graph.div(b, c)?;
            let cube = graph.pow(c, 3.0)?;
            let sum = graph.add(left, mid)?;
            graph.add(sum, cube)
        };
        for _ in 0..20 {
            let a = rng.gen_range(-3.0..3.0);
            let b = rng.gen_range(-3.0..3.0);
            // Keep c away from zero (b/c) and the relu gate off its kink.
            let mut c: f64 = rng.gen_range(0.5..3.0);
            if (a * b + c).abs() < 0.05 {
                c += 0.1;
            }
            check_grad(build, &[a, b, c], EPSILON, TOLERANCE).unwrap();
        }
    }

    #[test]
    fn test_non_finite_analytical_grad_is_reported() {
        // y = 1/x at x = 0: analytical grad is -1/x^2 = -inf.
        let build = |graph: &mut Graph, leaves: &[NodeId]| graph.div(1.0, leaves[0]);
        match check_grad(build, &[0.0], EPSILON, TOLERANCE) {
            Err(GradCheckError::AnalyticalGradNaNOrInfinite { input_index, .. })
            | Err(GradCheckError::NumericalGradNaNOrInfinite { input_index, .. }) => {
                assert_eq!(input_index, 0)
            }
            other => panic!("expected a non-finite report, got {:?}", other),
        }
    }

    #[test]
    fn test_builder_error_is_propagated() {
        let build = |graph: &mut Graph, leaves: &[NodeId]| {
            let x = leaves[0];
            graph.pow(x, leaves[0]) // node exponent: usage error
        };
        assert!(matches!(
            check_grad(build, &[2.0], EPSILON, TOLERANCE),
            Err(GradCheckError::ForwardPassError(
                GradRustError::ExponentNotConstant { .. }
            ))
        ));
    }
}
