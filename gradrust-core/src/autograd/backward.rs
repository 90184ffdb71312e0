//! The backward executor: one reverse replay of the topological order.

use log::trace;

use crate::autograd::graph::topological_sort;
use crate::error::GradRustError;
use crate::graph::Graph;
use crate::node::{NodeId, Op};

impl Graph {
    /// Runs the backward pass from `root`, accumulating `d root / d node`
    /// into the `grad` of every node reachable from `root`.
    ///
    /// The pass seeds a gradient flow of 1.0 at the root, replays the
    /// topological order in reverse pushing each node's flow into its
    /// operands per the local derivative rule of its tag, and finally
    /// **adds** the flow into the stored grads. Grads are never
    /// overwritten and never implicitly reset:
    ///
    /// - starting from zeroed grads, one pass leaves `grad(root) == 1.0`
    ///   and every ancestor holding its exact derivative;
    /// - calling `backward` again without [`Graph::clear_grads`] adds the
    ///   same flow once more, so all reachable grads are exactly doubled —
    ///   accumulation is the contract, resetting is the caller's job;
    /// - grads of nodes not reachable from `root` are left as found.
    ///
    /// Backward on a leaf is valid: the reachable set is the leaf alone,
    /// so only its own grad receives the 1.0 seed.
    ///
    /// # Errors
    /// [`GradRustError::NodeOutOfBounds`] if `root` is not from this graph.
    pub fn backward(&mut self, root: NodeId) -> Result<(), GradRustError> {
        let order = topological_sort(self, root)?;
        trace!(
            "backward: replaying {} nodes in reverse from {:?}",
            order.len(),
            root
        );

        // Gradient flow of this pass alone, kept apart from the stored
        // grads so repeated passes accumulate instead of compounding on
        // stale values.
        let mut flow = vec![0.0; self.len()];
        flow[root.index()] = 1.0;

        for &node in order.iter().rev() {
            let upstream = flow[node.index()];
            match self[node].op() {
                Op::Leaf => {}
                Op::Add(lhs, rhs) => {
                    flow[lhs.index()] += upstream;
                    flow[rhs.index()] += upstream;
                }
                Op::Mul(lhs, rhs) => {
                    let (lhs_data, rhs_data) = (self.data(lhs), self.data(rhs));
                    flow[lhs.index()] += rhs_data * upstream;
                    flow[rhs.index()] += lhs_data * upstream;
                }
                Op::Pow { base, exponent } => {
                    let base_data = self.data(base);
                    flow[base.index()] += exponent * base_data.powf(exponent - 1.0) * upstream;
                }
                Op::Relu(input) => {
                    // Gate on the output value: max(0, x) > 0 iff x > 0.
                    if self.data(node) > 0.0 {
                        flow[input.index()] += upstream;
                    }
                }
            }
        }

        for &node in &order {
            self.accumulate_grad(node, flow[node.index()]);
        }
        Ok(())
    }
}
