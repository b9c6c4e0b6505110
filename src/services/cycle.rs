use crate::services::graph::DependencyGraph;

/// Find one dependency cycle, for diagnostics.
///
/// Starting from each fragment in discovery order, walk dependency edges
/// depth first with an explicit stack. `on_path` only marks the fragments on
/// the current path and is cleared on backtrack. A fragment whose walk
/// finished is `exhausted`: nothing reachable from it closes a cycle, so it
/// is not walked again.
///
/// The result starts and ends with the same fragment and consecutive
/// members are joined by an edge. `None` when the graph is acyclic.
pub fn find_cycle(graph: &DependencyGraph) -> Option<Vec<usize>> {
    let n = graph.len();
    let mut on_path = vec![false; n];
    let mut exhausted = vec![false; n];

    for start in 0..n {
        if exhausted[start] {
            continue;
        }
        // (fragment, index of the next dependency to follow)
        let mut stack: Vec<(usize, usize)> = vec![(start, 0)];
        on_path[start] = true;

        while let Some(frame) = stack.last_mut() {
            let node = frame.0;
            let deps = graph.dependencies(node);
            if frame.1 == deps.len() {
                on_path[node] = false;
                exhausted[node] = true;
                stack.pop();
                continue;
            }
            let next = deps[frame.1];
            frame.1 += 1;

            if on_path[next] {
                if let Some(begin) = stack.iter().position(|&(id, _)| id == next) {
                    let mut cycle: Vec<usize> = stack[begin..].iter().map(|&(id, _)| id).collect();
                    cycle.push(next);
                    return Some(cycle);
                }
            }
            if !exhausted[next] {
                on_path[next] = true;
                stack.push((next, 0));
            }
        }
    }
    None
}
