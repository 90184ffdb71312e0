use log::trace;

use crate::error::GradRustError;
use crate::graph::Graph;
use crate::node::NodeId;

/// Orders every node reachable from `root` so that each node appears
/// strictly after all of its operands; `root` comes last.
///
/// Depth-first post-order with a visited set: a node reachable through
/// several paths (shared substructure) is emitted exactly once, at the
/// first completion of its subtree. The visited marking is required for
/// correctness on a DAG, not just to save work — without it a diamond
/// would be emitted twice and backward would double-count its gradient.
///
/// The traversal is iterative, so arbitrarily deep expression chains
/// cannot overflow the call stack. The visited set is a `Vec<bool>`
/// indexed by arena slot.
pub fn topological_sort(graph: &Graph, root: NodeId) -> Result<Vec<NodeId>, GradRustError> {
    graph.check(root, "topological_sort")?;

    let mut visited = vec![false; graph.len()];
    let mut order = Vec::new();
    // (node, expanded): first pop expands the operands, second pop emits.
    let mut stack = vec![(root, false)];

    while let Some((node, expanded)) = stack.pop() {
        if expanded {
            order.push(node);
            continue;
        }
        if visited[node.index()] {
            continue;
        }
        visited[node.index()] = true;
        stack.push((node, true));
        for operand in graph[node].op().operands() {
            if !visited[operand.index()] {
                stack.push((operand, false));
            }
        }
    }

    trace!(
        "topological_sort: {} of {} nodes reachable from {:?}",
        order.len(),
        graph.len(),
        root
    );
    Ok(order)
}
