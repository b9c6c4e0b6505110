use crate::services::graph::DependencyGraph;
use std::collections::VecDeque;

/// The graph has a cycle. `unsorted` holds the fragments that could not be
/// placed, in discovery order.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("dependency cycle: {} fragment(s) could not be ordered", .unsorted.len())]
pub struct CycleDetected {
    pub unsorted: Vec<usize>,
}

/// Kahn's algorithm. Returns every fragment id with dependencies before
/// dependents.
///
/// `pending[f]` counts the edge instances from `f` whose target has not been
/// emitted yet, duplicates included. The FIFO queue is seeded in discovery
/// order, which makes ties, and so the whole order, reproducible.
pub fn topological_sort(graph: &DependencyGraph) -> Result<Vec<usize>, CycleDetected> {
    let n = graph.len();
    let mut pending: Vec<usize> = (0..n).map(|id| graph.dependencies(id).len()).collect();
    let dependents = graph.dependents();

    let mut queue: VecDeque<usize> = (0..n).filter(|&id| pending[id] == 0).collect();
    let mut order = Vec::with_capacity(n);

    while let Some(id) = queue.pop_front() {
        order.push(id);
        for &dependent in &dependents[id] {
            pending[dependent] -= 1;
            if pending[dependent] == 0 {
                queue.push_back(dependent);
            }
        }
    }

    if order.len() != n {
        let unsorted = (0..n).filter(|&id| pending[id] > 0).collect();
        return Err(CycleDetected { unsorted });
    }
    Ok(order)
}
