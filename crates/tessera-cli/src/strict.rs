//! Strict-mode checks.
//!
//! The compiler is lenient: it skips lines it does not understand and drops
//! edges whose endpoints do not resolve. With `--strict` the CLI turns each
//! of those into an [`Issue`] and fails.

use tessera::Compiled;
use tessera_parser::Span;

/// What was let go of.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IssueKind {
    SkippedLine,
    UnresolvedEdge,
}

/// A single problem found in a compiled source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Issue {
    kind: IssueKind,
    span: Span,
    message: String,
    label: String,
}

impl Issue {
    pub fn kind(&self) -> IssueKind {
        self.kind
    }

    pub fn span(&self) -> Span {
        self.span
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Text shown next to the highlighted span.
    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn help(&self) -> &'static str {
        match self.kind {
            IssueKind::SkippedLine => {
                "expected a node (`<type> <label>`), an edge (`<source> -> <target>`) or `@<kind> \"<title>\"`"
            }
            IssueKind::UnresolvedEdge => "declare both endpoints as nodes, or reference them by label",
        }
    }
}

/// Collects every skipped line and dropped edge, in source order.
pub fn collect_issues(compiled: &Compiled) -> Vec<Issue> {
    let skipped = compiled.skipped().iter().map(|line| Issue {
        kind: IssueKind::SkippedLine,
        span: line.span(),
        message: format!("line {} matches no rule", line.line()),
        label: "skipped".to_string(),
    });

    let unresolved = compiled.unresolved().iter().map(|edge| {
        let labels = compiled.labels();
        let missing: Vec<&str> = [edge.source(), edge.target()]
            .into_iter()
            .filter(|token| !compiled.graph().contains_node(&labels.resolve_or_raw(token)))
            .collect();
        Issue {
            kind: IssueKind::UnresolvedEdge,
            span: edge.span(),
            message: format!("edge `{} -> {}` was dropped", edge.source(), edge.target()),
            label: format!("unknown node `{}`", missing.join("`, `")),
        }
    });

    let mut issues: Vec<Issue> = skipped.chain(unresolved).collect();
    issues.sort_by_key(|issue| issue.span.start());
    issues
}

#[cfg(test)]
mod tests {
    use super::*;
    use tessera::DiagramBuilder;

    #[test]
    fn test_clean_source_has_no_issues() {
        let compiled = DiagramBuilder::default().parse("process A\nprocess B\nA -> B");
        assert!(collect_issues(&compiled).is_empty());
    }

    #[test]
    fn test_issues_in_source_order() {
        let source = "process A\nA -> Ghost\n???\n";
        let compiled = DiagramBuilder::default().parse(source);
        let issues = collect_issues(&compiled);

        let kinds: Vec<IssueKind> = issues.iter().map(Issue::kind).collect();
        assert_eq!(kinds, [IssueKind::UnresolvedEdge, IssueKind::SkippedLine]);
        assert_eq!(&source[issues[0].span().range()], "A -> Ghost");
        assert_eq!(issues[0].label(), "unknown node `Ghost`");
        assert_eq!(issues[1].message(), "line 3 matches no rule");
    }
}
