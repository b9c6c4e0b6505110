//! Dependency graph over fragment ids.
//!
//! `deps[a]` lists the fragments `a` requires, one entry per directive line,
//! so the edge direction is dependent -> dependency.

use crate::fragments::FragmentSet;
use crate::services::diagnostics::DiagnosticSink;
use crate::services::extract::extract_dependencies;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencyGraph {
    deps: Vec<Vec<usize>>,
}

impl DependencyGraph {
    /// Graph from ready-made adjacency lists. Targets are trusted to be ids
    /// below `deps.len()`.
    pub fn from_adjacency(deps: Vec<Vec<usize>>) -> Self {
        debug_assert!(deps.iter().flatten().all(|&t| t < deps.len()));
        Self { deps }
    }

    /// Extract every fragment's directives, in discovery order, and build
    /// the graph. Every fragment gets an entry, even with no dependencies.
    pub fn build(set: &FragmentSet, sink: &mut dyn DiagnosticSink) -> Self {
        let deps = (0..set.len())
            .map(|id| extract_dependencies(set, id, sink))
            .collect();
        let graph = Self::from_adjacency(deps);
        tracing::debug!(
            fragments = graph.len(),
            edges = graph.edge_count(),
            "built dependency graph"
        );
        graph
    }

    pub fn len(&self) -> usize {
        self.deps.len()
    }

    pub fn dependencies(&self, id: usize) -> &[usize] {
        &self.deps[id]
    }

    pub fn edge_count(&self) -> usize {
        self.deps.iter().map(Vec::len).sum()
    }

    /// Every edge instance as `(dependent, dependency)`.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.deps
            .iter()
            .enumerate()
            .flat_map(|(from, targets)| targets.iter().map(move |&to| (from, to)))
    }

    /// Reverse adjacency: for each fragment, the fragments requiring it,
    /// once per edge instance.
    pub fn dependents(&self) -> Vec<Vec<usize>> {
        let mut out = vec![Vec::new(); self.deps.len()];
        for (from, to) in self.edges() {
            out[to].push(from);
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::diagnostics::Diagnostic;

    #[test]
    fn every_fragment_has_an_entry() {
        let mut set = FragmentSet::new("res");
        set.insert("res/a.txt", "*require 'b.txt'*");
        set.insert("res/b.txt", "plain");
        set.insert("res/c.txt", "");
        let mut sink: Vec<Diagnostic> = Vec::new();
        let graph = DependencyGraph::build(&set, &mut sink);
        assert_eq!(graph.len(), 3);
        assert_eq!(graph.dependencies(0), &[1]);
        assert!(graph.dependencies(1).is_empty());
        assert!(graph.dependencies(2).is_empty());
    }

    #[test]
    fn dangling_directive_equals_missing_line() {
        let mut with = FragmentSet::new("res");
        with.insert("res/a.txt", "x\n*require 'missing'*\n*require 'b.txt'*");
        with.insert("res/b.txt", "");
        let mut without = FragmentSet::new("res");
        without.insert("res/a.txt", "x\n*require 'b.txt'*");
        without.insert("res/b.txt", "");

        let mut sink_with: Vec<Diagnostic> = Vec::new();
        let mut sink_without: Vec<Diagnostic> = Vec::new();
        let g1 = DependencyGraph::build(&with, &mut sink_with);
        let g2 = DependencyGraph::build(&without, &mut sink_without);
        assert_eq!(g1, g2);
        assert_eq!(sink_with.len(), 1);
        assert!(sink_without.is_empty());
    }

    #[test]
    fn dependents_keep_duplicate_edges() {
        let graph = DependencyGraph::from_adjacency(vec![vec![1, 1], vec![], vec![1]]);
        assert_eq!(graph.edge_count(), 3);
        assert_eq!(graph.dependents(), vec![vec![], vec![0, 0, 2], vec![]]);
        assert_eq!(graph.edges().collect::<Vec<_>>(), vec![(0, 1), (0, 1), (2, 1)]);
    }
}
