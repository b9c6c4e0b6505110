use serde::Serialize;
use std::fmt;

/// A recoverable problem found while building the graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Diagnostic {
    UnresolvedDependency {
        fragment: String,
        line: usize,
        target: String,
    },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::UnresolvedDependency {
                fragment,
                line,
                target,
            } => write!(f, "{fragment}:{line}: required {target} not found, skipped"),
        }
    }
}

/// Receives diagnostics from the extractor. The engine never looks at what
/// a sink does with them.
pub trait DiagnosticSink {
    fn emit(&mut self, diagnostic: Diagnostic);
}

impl DiagnosticSink for Vec<Diagnostic> {
    fn emit(&mut self, diagnostic: Diagnostic) {
        self.push(diagnostic);
    }
}

/// Logs each diagnostic as a warning and keeps it for the command report.
#[derive(Debug, Default)]
pub struct LoggingSink {
    pub collected: Vec<Diagnostic>,
}

impl DiagnosticSink for LoggingSink {
    fn emit(&mut self, diagnostic: Diagnostic) {
        tracing::warn!("{diagnostic}");
        self.collected.push(diagnostic);
    }
}
