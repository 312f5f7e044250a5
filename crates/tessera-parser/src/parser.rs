//! Line-oriented driver over the [`grammar`](crate::grammar).
//!
//! The driver owns the only parser state there is: whether a node block is
//! currently open. Blank lines and `//` comment lines are discarded before
//! any rule is consulted, including inside blocks.

use log::{debug, trace};

use tessera_core::semantic::DiagramMetadata;

use crate::{
    ast::{Ast, Declaration, EdgeDeclaration, MetaDeclaration, NodeDeclaration, SkippedLine},
    grammar::{self, Rule},
    span::{Span, Spanned},
};

/// Prefix of a comment line.
const COMMENT_PREFIX: &str = "//";

/// A block-form node whose closing `}` has not been seen yet.
struct OpenBlock {
    node_type: String,
    label: String,
    attributes: Vec<String>,
    span: Span,
}

impl OpenBlock {
    fn into_declaration(self) -> Spanned<Declaration> {
        Spanned::new(
            Declaration::Node(NodeDeclaration {
                node_type: self.node_type,
                label: self.label,
                attributes: self.attributes,
            }),
            self.span,
        )
    }
}

/// A trimmed source line with its position.
struct SourceLine<'src> {
    number: usize,
    text: &'src str,
    span: Span,
}

/// Splits `source` into trimmed lines, keeping their byte spans.
fn source_lines(source: &str) -> impl Iterator<Item = SourceLine<'_>> {
    let mut offset = 0;
    source
        .split_inclusive('\n')
        .enumerate()
        .map(move |(index, raw)| {
            let start = offset + (raw.len() - raw.trim_start().len());
            let text = raw.trim();
            offset += raw.len();
            SourceLine {
                number: index + 1,
                text,
                span: Span::new(start..start + text.len()),
            }
        })
}

#[derive(Default)]
struct LineParser {
    declarations: Vec<Spanned<Declaration>>,
    metadata: DiagramMetadata,
    skipped: Vec<SkippedLine>,
    block: Option<OpenBlock>,
}

impl LineParser {
    fn feed(&mut self, line: &SourceLine<'_>) {
        if self.block.is_some() {
            match grammar::match_block_line(line.text) {
                Rule::BlockClose => {
                    if let Some(mut block) = self.block.take() {
                        block.span = block.span.union(line.span);
                        self.declarations.push(block.into_declaration());
                    }
                }
                _ => {
                    if let Some(block) = self.block.as_mut() {
                        block.attributes.push(line.text.to_string());
                        block.span = block.span.union(line.span);
                    }
                }
            }
            return;
        }

        let Some(rule) = grammar::match_line(line.text) else {
            debug!(line = line.number, text = line.text; "Skipping unrecognized line");
            self.skipped
                .push(SkippedLine::new(line.number, line.span, line.text));
            return;
        };
        trace!(line = line.number, rule:? = rule.kind(); "Matched line");

        let declaration = match rule {
            Rule::Meta { kind, title } => {
                self.metadata.set_kind(kind);
                if let Some(title) = title {
                    self.metadata.set_title(title);
                }
                Declaration::Meta(MetaDeclaration {
                    kind: kind.to_string(),
                    title: title.map(str::to_string),
                })
            }
            Rule::LabeledEdge {
                source,
                label,
                target,
            }
            | Rule::ColonEdge {
                source,
                target,
                label,
            } => Declaration::Edge(EdgeDeclaration {
                source: source.to_string(),
                target: target.to_string(),
                label: Some(label.to_string()),
            }),
            Rule::Edge { source, target } => Declaration::Edge(EdgeDeclaration {
                source: source.to_string(),
                target: target.to_string(),
                label: None,
            }),
            Rule::BlockStart { node_type, label } => {
                self.block = Some(OpenBlock {
                    node_type: node_type.to_string(),
                    label: label.to_string(),
                    attributes: Vec::new(),
                    span: line.span,
                });
                return;
            }
            Rule::QuotedNode { node_type, label } | Rule::BareNode { node_type, label } => {
                Declaration::Node(NodeDeclaration {
                    node_type: node_type.to_string(),
                    label: label.to_string(),
                    attributes: Vec::new(),
                })
            }
            // Block rules are only produced by `match_block_line`.
            Rule::BlockClose | Rule::BlockLine(_) => return,
        };

        self.declarations.push(Spanned::new(declaration, line.span));
    }

    fn finish(mut self) -> Ast {
        if let Some(block) = self.block.take() {
            debug!(label = block.label.as_str(); "Closing unterminated block at end of input");
            self.declarations.push(block.into_declaration());
        }
        Ast::new(self.declarations, self.metadata, self.skipped)
    }
}

/// Parses source text into an ordered list of declarations.
///
/// Parsing never fails: lines that match no rule are recorded in
/// [`Ast::skipped`] and otherwise ignored. A block still open at the end of
/// the input is closed implicitly.
pub fn parse(source: &str) -> Ast {
    let mut parser = LineParser::default();

    for line in source_lines(source) {
        if line.text.is_empty() || line.text.starts_with(COMMENT_PREFIX) {
            continue;
        }
        parser.feed(&line);
    }

    let ast = parser.finish();
    debug!(
        declarations = ast.declarations().len(),
        skipped = ast.skipped().len();
        "Source parsed"
    );
    ast
}
