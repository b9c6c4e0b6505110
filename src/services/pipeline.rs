use crate::domain::errors::StitchError;
use crate::domain::models::FragmentEntry;
use crate::fragments::FragmentSet;
use crate::services::config::Settings;
use crate::services::cycle::find_cycle;
use crate::services::diagnostics::{Diagnostic, LoggingSink};
use crate::services::graph::DependencyGraph;
use crate::services::sort::topological_sort;

/// Discovered fragments, their graph, and whatever the extractor warned
/// about. Every command starts from one of these.
pub struct Plan {
    pub fragments: FragmentSet,
    pub graph: DependencyGraph,
    pub diagnostics: Vec<Diagnostic>,
}

pub fn load_plan(settings: &Settings) -> Result<Plan, StitchError> {
    let fragments = FragmentSet::discover(
        &settings.root,
        &settings.extensions,
        std::slice::from_ref(&settings.output),
    )?;
    if fragments.is_empty() {
        tracing::warn!(root = %settings.root.display(), "no fragments found");
    }
    let mut sink = LoggingSink::default();
    let graph = DependencyGraph::build(&fragments, &mut sink);
    Ok(Plan {
        fragments,
        graph,
        diagnostics: sink.collected,
    })
}

impl Plan {
    /// Sort order, or `CyclicDependency` naming one cycle.
    pub fn order(&self) -> Result<Vec<usize>, StitchError> {
        match topological_sort(&self.graph) {
            Ok(order) => Ok(order),
            Err(detected) => {
                tracing::debug!("{detected}");
                // Fragments left unsorted by Kahn always contain a cycle, and
                // the search walks every fragment, so it cannot come back empty.
                let found = find_cycle(&self.graph);
                debug_assert!(found.is_some(), "unsorted fragments without a cycle");
                let ids = found.unwrap_or(detected.unsorted);
                Err(StitchError::CyclicDependency {
                    cycle: self.fragments.display_names(&ids),
                })
            }
        }
    }

    pub fn order_names(&self) -> Result<Vec<String>, StitchError> {
        Ok(self.fragments.display_names(&self.order()?))
    }

    pub fn entries(&self) -> Vec<FragmentEntry> {
        (0..self.fragments.len())
            .map(|id| FragmentEntry {
                path: self.fragments.display_name(id),
                dependencies: self.fragments.display_names(self.graph.dependencies(id)),
            })
            .collect()
    }
}
