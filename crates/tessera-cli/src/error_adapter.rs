//! Error adapter for converting CLI errors to miette diagnostics.
//!
//! This module provides the bridge between the library's standard error types
//! and miette's rich diagnostic formatting used in the CLI.
//!
//! # Multi-Error Support
//!
//! A strict-mode failure carries one [`Issue`] per skipped line or dropped
//! edge; each issue is rendered independently, pointing into the source.

use std::fmt;

use miette::{Diagnostic as MietteDiagnostic, LabeledSpan, SourceSpan};

use tessera::TesseraError;

use crate::{
    CliError,
    strict::{Issue, IssueKind},
};

/// Adapter for a single strict-mode issue.
pub struct IssueAdapter<'a> {
    issue: &'a Issue,
    /// Source code for displaying snippets
    src: &'a str,
}

impl<'a> IssueAdapter<'a> {
    pub fn new(issue: &'a Issue, src: &'a str) -> Self {
        Self { issue, src }
    }
}

impl fmt::Debug for IssueAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IssueAdapter")
            .field("issue", &self.issue)
            .finish()
    }
}

impl fmt::Display for IssueAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.issue.message())
    }
}

impl std::error::Error for IssueAdapter<'_> {}

impl MietteDiagnostic for IssueAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match self.issue.kind() {
            IssueKind::SkippedLine => "tessera::skipped_line",
            IssueKind::UnresolvedEdge => "tessera::unresolved_edge",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        Some(Box::new(self.issue.help()))
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        Some(&self.src as &dyn miette::SourceCode)
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        let span = span_to_miette(self.issue.span());
        let label = LabeledSpan::new_primary_with_span(Some(self.issue.label().to_string()), span);
        Some(Box::new(std::iter::once(label)))
    }
}

/// Adapter for [`CliError`] variants without source locations.
pub struct ErrorAdapter<'a>(pub &'a CliError);

impl fmt::Debug for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for ErrorAdapter<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.0.source()
    }
}

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match &self.0 {
            CliError::Tessera(TesseraError::Io(_)) => "tessera::io",
            CliError::Tessera(TesseraError::Document(_)) => "tessera::document",
            CliError::Tessera(TesseraError::Layout(_)) => "tessera::layout",
            CliError::Config(_) => "tessera::config",
            CliError::Strict { .. } => "tessera::strict",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match &self.0 {
            CliError::Tessera(TesseraError::Layout(_)) | CliError::Config(_) => Some(Box::new(
                "check the [layout] and [edges] sections of the configuration file",
            )),
            _ => None,
        }
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        None
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        None
    }
}

/// A reportable error that can be rendered by miette.
#[derive(Debug)]
pub enum Reportable<'a> {
    /// A strict-mode issue with source location information.
    Issue(IssueAdapter<'a>),
    /// A simple error without source location.
    Error(ErrorAdapter<'a>),
}

impl fmt::Display for Reportable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reportable::Issue(i) => fmt::Display::fmt(i, f),
            Reportable::Error(e) => fmt::Display::fmt(e, f),
        }
    }
}

impl std::error::Error for Reportable<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Reportable::Issue(_) => None,
            Reportable::Error(e) => e.source(),
        }
    }
}

impl MietteDiagnostic for Reportable<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match self {
            Reportable::Issue(i) => i.code(),
            Reportable::Error(e) => e.code(),
        }
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match self {
            Reportable::Issue(i) => i.help(),
            Reportable::Error(e) => e.help(),
        }
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        match self {
            Reportable::Issue(i) => i.source_code(),
            Reportable::Error(e) => e.source_code(),
        }
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        match self {
            Reportable::Issue(i) => i.labels(),
            Reportable::Error(e) => e.labels(),
        }
    }
}

/// Convert a tessera [`Span`](tessera_parser::Span) to a miette [`SourceSpan`].
fn span_to_miette(span: tessera_parser::Span) -> SourceSpan {
    SourceSpan::new(span.start().into(), span.len())
}

/// Convert a [`CliError`] into a list of reportable errors.
///
/// For [`CliError::Strict`], this returns the summary followed by one
/// [`Reportable`] per issue. Other variants yield a single [`Reportable`].
pub fn to_reportables(err: &CliError) -> Vec<Reportable<'_>> {
    match err {
        CliError::Strict { src, issues, .. } => std::iter::once(Reportable::Error(ErrorAdapter(err)))
            .chain(
                issues
                    .iter()
                    .map(|issue| Reportable::Issue(IssueAdapter::new(issue, src))),
            )
            .collect(),
        _ => vec![Reportable::Error(ErrorAdapter(err))],
    }
}
