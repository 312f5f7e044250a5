//! Semantic vocabulary shared by every stage of the pipeline.
//!
//! # Pipeline Position
//!
//! ```text
//! Source Text
//!     ↓ parser (ordered line grammar)
//! Declarations (AST)
//!     ↓ elaborate (graph builder)
//! Graph (these types + graph module)
//!     ↓ layout
//! Positioned Graph
//!     ↓ relationships
//! Graph with synthesized cardinality edges
//!     ↓ export
//! Document (JSON) / Text
//! ```
//!
//! The textual keywords for node types live with the stage that reads or
//! writes them (the builder's catalog and the serializer's keyword table);
//! this module only names the semantic kinds.

use serde::{Deserialize, Serialize};

/// Semantic kind of a node.
///
/// Documents coming from external collaborators may carry type strings this
/// catalog does not know; those deserialize to [`NodeType::Unknown`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NodeType {
    #[default]
    Process,
    Decision,
    Start,
    End,
    /// A terminal that does not say whether it starts or ends the flow.
    StartEnd,
    Entity,
    Actor,
    Attribute,
    Relationship,
    #[serde(alias = "usecase")]
    UseCase,
    Lifeline,
    Text,
    InputOutput,
    Database,
    Note,
    #[serde(other)]
    Unknown,
}

/// Cosmetic routing hint carried by edges for renderers.
///
/// Layout never reads it. Unrecognized routing names decode as
/// [`RoutingType::Bezier`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoutingType {
    Straight,
    #[serde(alias = "step")]
    Orthogonal,
    #[default]
    #[serde(other)]
    Bezier,
}

/// Diagram-level metadata set by `@<kind> "<title>"` lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiagramMetadata {
    kind: String,
    title: String,
}

impl DiagramMetadata {
    /// Kind used when no metadata line is present.
    pub const DEFAULT_KIND: &'static str = "flowchart";
    /// Title used when no metadata line is present.
    pub const DEFAULT_TITLE: &'static str = "Untitled";

    pub fn new(kind: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            title: title.into(),
        }
    }

    /// Returns the diagram kind tag, e.g. `flowchart` or `er`.
    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// Returns the diagram title.
    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn set_kind(&mut self, kind: impl Into<String>) {
        self.kind = kind.into();
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }
}

impl Default for DiagramMetadata {
    fn default() -> Self {
        Self::new(Self::DEFAULT_KIND, Self::DEFAULT_TITLE)
    }
}
