//! Declarations produced by the line parser.
//!
//! The AST is a flat, ordered list of declarations; there is no nesting
//! beyond the attribute lines buffered inside a node block. It lives only
//! between [`parse`](crate::parse) and the [`Builder`](crate::Builder).

use tessera_core::semantic::DiagramMetadata;

use crate::span::{Span, Spanned};

/// A single declaration recognized by the grammar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Declaration {
    Meta(MetaDeclaration),
    Node(NodeDeclaration),
    Edge(EdgeDeclaration),
}

/// `@<kind> "<title>"`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetaDeclaration {
    pub kind: String,
    /// `None` when the line only names a kind.
    pub title: Option<String>,
}

/// `<type> <label>`, `<type> "<label>"` or a `<type> <label> { ... }` block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeDeclaration {
    /// The type token exactly as written.
    pub node_type: String,
    pub label: String,
    /// Raw lines of a block-form declaration; empty for single-line forms.
    pub attributes: Vec<String>,
}

/// `<source> -> <target>`, with an optional inline or trailing label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdgeDeclaration {
    pub source: String,
    pub target: String,
    pub label: Option<String>,
}

/// A non-blank, non-comment line that no grammar rule matched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedLine {
    line: usize,
    span: Span,
    text: String,
}

impl SkippedLine {
    pub(crate) fn new(line: usize, span: Span, text: impl Into<String>) -> Self {
        Self {
            line,
            span,
            text: text.into(),
        }
    }

    /// 1-based line number.
    pub fn line(&self) -> usize {
        self.line
    }

    /// Span of the trimmed line content.
    pub fn span(&self) -> Span {
        self.span
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

/// Result of parsing a source text.
#[derive(Debug, Clone, Default)]
pub struct Ast {
    declarations: Vec<Spanned<Declaration>>,
    metadata: DiagramMetadata,
    skipped: Vec<SkippedLine>,
}

impl Ast {
    pub(crate) fn new(
        declarations: Vec<Spanned<Declaration>>,
        metadata: DiagramMetadata,
        skipped: Vec<SkippedLine>,
    ) -> Self {
        Self {
            declarations,
            metadata,
            skipped,
        }
    }

    /// Declarations in source order.
    pub fn declarations(&self) -> &[Spanned<Declaration>] {
        &self.declarations
    }

    /// Final metadata after every metadata line has been applied.
    pub fn metadata(&self) -> &DiagramMetadata {
        &self.metadata
    }

    /// Lines that were ignored because no rule matched them.
    pub fn skipped(&self) -> &[SkippedLine] {
        &self.skipped
    }

    pub fn nodes(&self) -> impl Iterator<Item = Spanned<&NodeDeclaration>> {
        self.declarations.iter().filter_map(|decl| match decl.inner() {
            Declaration::Node(node) => Some(Spanned::new(node, decl.span())),
            _ => None,
        })
    }

    pub fn edges(&self) -> impl Iterator<Item = Spanned<&EdgeDeclaration>> {
        self.declarations.iter().filter_map(|decl| match decl.inner() {
            Declaration::Edge(edge) => Some(Spanned::new(edge, decl.span())),
            _ => None,
        })
    }
}
