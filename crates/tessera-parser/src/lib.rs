//! # Tessera Parser
//!
//! Parser for the Tessera diagram notation. This crate turns source text
//! into an attributed [`Graph`](tessera_core::graph::Graph).
//!
//! The notation is line oriented. Each trimmed, non-blank line that is not a
//! `//` comment is matched against an ordered list of rules and the first
//! rule that accepts the whole line wins:
//!
//! ```text
//! @er "Shop schema"              metadata
//! A --yes--> B                   edge with inline label
//! A -> B : label                 edge with trailing label
//! A -> B                         edge
//! entity Customer {              node block, closed by `}`
//! decision "In stock?"           node with quoted label
//! process Validate               node with single-token label
//! ```
//!
//! Parsing never fails. Lines that match nothing are skipped and reported
//! in [`Ast::skipped`]; edges whose endpoints do not resolve are dropped and
//! reported in [`Elaborated::unresolved`].
//!
//! ## Usage
//!
//! ```
//! # use tessera_parser::{build, ElaborateConfig};
//! let source = r#"
//!     start Begin
//!     process "Load cart"
//!     start -> "Load cart"
//! "#;
//!
//! let built = build(source, ElaborateConfig::default());
//! assert_eq!(built.graph().nodes_count(), 2);
//! assert_eq!(built.graph().edges_count(), 1);
//! ```

pub mod ast;
mod elaborate;
pub mod grammar;
mod parser;
#[cfg(test)]
mod parser_tests;
mod span;

pub use ast::{Ast, SkippedLine};
pub use elaborate::{Builder, ElaborateConfig, Elaborated, UnresolvedEdge, node_type_for};
pub use span::{Span, Spanned};

/// Parse source text into declarations without building a graph.
pub fn parse(source: &str) -> Ast {
    parser::parse(source)
}

/// Parse source text and build its graph.
///
/// This runs the two front-end stages back to back:
///
/// 1. **Parse** - Match every line against the ordered grammar
/// 2. **Elaborate** - Assign node ids, register labels and resolve edges
///
/// # Arguments
///
/// * `source` - The diagram source text
/// * `config` - Options for the graph builder
pub fn build(source: &str, config: ElaborateConfig) -> Elaborated {
    let ast = parser::parse(source);
    Builder::new(config).build(&ast)
}
