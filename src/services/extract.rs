use crate::fragments::{relative_name, FragmentSet};
use crate::services::diagnostics::{Diagnostic, DiagnosticSink};
use regex::Regex;
use std::sync::OnceLock;

fn directive_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\*require '([^']+)'\*").unwrap())
}

/// The quoted path of the first `*require '<path>'*` on the line, if any.
pub fn directive_target(line: &str) -> Option<&str> {
    directive_pattern()
        .captures(line)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str())
}

/// Dependency targets declared by fragment `id`, one per matching line, in
/// line order. Repeated directives give repeated targets. Targets outside
/// the universe are reported to `sink` and dropped.
pub fn extract_dependencies(
    set: &FragmentSet,
    id: usize,
    sink: &mut dyn DiagnosticSink,
) -> Vec<usize> {
    let fragment = set.get(id);
    let mut targets = Vec::new();
    for (lineno, line) in fragment.lines.iter().enumerate() {
        let Some(raw) = directive_target(line) else {
            continue;
        };
        let candidate = set.resolve(raw);
        match set.lookup(&candidate) {
            Some(target) => targets.push(target),
            None => sink.emit(Diagnostic::UnresolvedDependency {
                fragment: set.display_name(id),
                line: lineno + 1,
                target: relative_name(set.root(), &candidate),
            }),
        }
    }
    targets
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_directive_anywhere_on_line() {
        assert_eq!(directive_target("*require 'a/b.txt'*"), Some("a/b.txt"));
        assert_eq!(
            directive_target("see *require 'x.txt'* and *require 'y.txt'*"),
            Some("x.txt")
        );
        assert_eq!(directive_target("require 'x.txt'"), None);
        assert_eq!(directive_target("*require ''*"), None);
        assert_eq!(directive_target("*require 'it's'*"), None);
    }

    #[test]
    fn one_edge_per_line_and_repeats_kept() {
        let mut set = FragmentSet::new("res");
        let a = set.insert(
            "res/a.txt",
            "*require 'b.txt'*\ntext\n*require 'b.txt'* *require 'c.txt'*",
        );
        let b = set.insert("res/b.txt", "");
        let _c = set.insert("res/c.txt", "");
        let mut sink: Vec<Diagnostic> = Vec::new();
        assert_eq!(extract_dependencies(&set, a, &mut sink), vec![b, b]);
        assert!(sink.is_empty());
    }

    #[test]
    fn unresolved_target_is_reported_and_dropped() {
        let mut set = FragmentSet::new("res");
        let a = set.insert("res/a.txt", "intro\n*require 'missing'*\n*require 'b.txt'*");
        let b = set.insert("res/b.txt", "");
        let mut sink: Vec<Diagnostic> = Vec::new();
        assert_eq!(extract_dependencies(&set, a, &mut sink), vec![b]);
        assert_eq!(
            sink,
            vec![Diagnostic::UnresolvedDependency {
                fragment: "a.txt".into(),
                line: 2,
                target: "missing".into(),
            }]
        );
    }
}
