//! Text notation backend.
//!
//! Writes a graph back into the notation accepted by the parser:
//!
//! ```text
//! @<kind> "<title>"
//!
//! <keyword> "<label>"
//! <keyword> "<label>" {
//!   <attribute>
//! }
//!
//! "<source label>" -> "<target label>" : <label>
//! ```
//!
//! Nodes follow graph order, not layout order. Re-parsing the output yields
//! the same number of nodes and edges and the same edge labels, but node ids
//! are reassigned in declaration order.

use std::fmt;

use tessera_core::{
    graph::{Graph, Node},
    identifier::NodeId,
    semantic::NodeType,
};

use crate::{error::TesseraError, export::Exporter};

/// Keyword written for each node type.
const KEYWORDS: &[(NodeType, &str)] = &[
    (NodeType::Process, "process"),
    (NodeType::Decision, "decision"),
    (NodeType::Start, "start"),
    (NodeType::End, "end"),
    (NodeType::Entity, "entity"),
    (NodeType::Actor, "actor"),
    (NodeType::Attribute, "attribute"),
    (NodeType::Relationship, "relationship"),
    (NodeType::UseCase, "usecase"),
    (NodeType::Lifeline, "lifeline"),
    (NodeType::Text, "text"),
    (NodeType::InputOutput, "io"),
    (NodeType::Database, "database"),
    (NodeType::Note, "note"),
];

/// Keyword for types without an entry in [`KEYWORDS`].
const FALLBACK_KEYWORD: &str = "process";

const ATTRIBUTE_INDENT: &str = "  ";

/// Returns the keyword written for `node_type`.
fn keyword(node_type: NodeType) -> &'static str {
    KEYWORDS
        .iter()
        .find(|(candidate, _)| *candidate == node_type)
        .map_or(FALLBACK_KEYWORD, |(_, keyword)| *keyword)
}

/// Returns the keyword written for `node`.
///
/// A [`NodeType::StartEnd`] terminal becomes `end` when its label mentions
/// "end" in any case, and `start` otherwise.
pub fn node_keyword(node: &Node) -> &'static str {
    match node.node_type() {
        NodeType::StartEnd if node.label().to_lowercase().contains("end") => "end",
        NodeType::StartEnd => "start",
        node_type => keyword(node_type),
    }
}

/// Serializes graphs into the diagram notation.
#[derive(Debug, Default, Clone, Copy)]
pub struct TextExporter;

impl TextExporter {
    pub fn new() -> Self {
        Self
    }

    /// Renders `graph` as diagram notation.
    pub fn render(&self, graph: &Graph) -> String {
        Notation(graph).to_string()
    }
}

impl Exporter for TextExporter {
    fn export(&self, graph: &Graph) -> Result<String, TesseraError> {
        Ok(self.render(graph))
    }
}

/// Display adapter writing a graph as notation text.
struct Notation<'a>(&'a Graph);

impl Notation<'_> {
    /// Label of the node `id`, or the raw id when no such node exists.
    fn endpoint(&self, id: &NodeId) -> String {
        self.0
            .node(id)
            .map_or_else(|| id.to_string(), |node| node.label().to_string())
    }
}

impl fmt::Display for Notation<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let graph = self.0;
        let metadata = graph.metadata();
        writeln!(f, "@{} \"{}\"", metadata.kind(), metadata.title())?;
        writeln!(f)?;

        for node in graph.nodes() {
            let keyword = node_keyword(node);
            if node.has_attributes() {
                writeln!(f, "{keyword} \"{}\" {{", node.label())?;
                for attribute in node.attributes() {
                    writeln!(f, "{ATTRIBUTE_INDENT}{attribute}")?;
                }
                writeln!(f, "}}")?;
            } else {
                writeln!(f, "{keyword} \"{}\"", node.label())?;
            }
        }

        if graph.edges_count() > 0 {
            writeln!(f)?;
        }

        for edge in graph.edges() {
            let source = self.endpoint(edge.source());
            let target = self.endpoint(edge.target());
            match edge.label() {
                Some(label) => writeln!(f, "\"{source}\" -> \"{target}\" : {label}")?,
                None => writeln!(f, "\"{source}\" -> \"{target}\"")?,
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tessera_core::{graph::Edge, identifier::EdgeId, semantic::DiagramMetadata};

    #[test]
    fn test_keyword_fallback() {
        assert_eq!(keyword(NodeType::Decision), "decision");
        assert_eq!(keyword(NodeType::InputOutput), "io");
        assert_eq!(keyword(NodeType::Unknown), "process");
    }

    #[test]
    fn test_render_layout() {
        let mut graph = Graph::new(DiagramMetadata::new("er", "Shop"));
        graph.add_node(Node::new(
            NodeId::from_index(1),
            NodeType::Entity,
            "Customer",
            vec!["id".to_string(), "name".to_string()],
        ));
        graph.add_node(Node::new(
            NodeId::from_index(2),
            NodeType::Decision,
            "Paid?",
            Vec::new(),
        ));
        graph.add_edge(Edge::new(
            EdgeId::from_index(1),
            NodeId::from_index(1),
            NodeId::from_index(2),
            Some("checks".to_string()),
        ));
        graph.add_edge(Edge::new(
            EdgeId::from_index(2),
            NodeId::from_index(2),
            NodeId::new("ghost"),
            None,
        ));

        let expected = "\
@er \"Shop\"

entity \"Customer\" {
  id
  name
}
decision \"Paid?\"

\"Customer\" -> \"Paid?\" : checks
\"Paid?\" -> \"ghost\"
";
        assert_eq!(TextExporter::new().render(&graph), expected);
    }

    #[test]
    fn test_start_end_terminals_pick_keyword_from_label() {
        let mut graph = Graph::default();
        for (index, label) in ["Begin", "The END", "Send mail"].into_iter().enumerate() {
            graph.add_node(Node::new(
                NodeId::from_index(index + 1),
                NodeType::StartEnd,
                label,
                Vec::new(),
            ));
        }
        let keywords: Vec<&str> = graph.nodes().map(node_keyword).collect();
        assert_eq!(keywords, ["start", "end", "end"]);
    }

    #[test]
    fn test_render_without_edges() {
        let mut graph = Graph::default();
        graph.add_node(Node::new(
            NodeId::from_index(1),
            NodeType::Unknown,
            "Board",
            Vec::new(),
        ));
        assert_eq!(
            TextExporter::new().render(&graph),
            "@flowchart \"Untitled\"\n\nprocess \"Board\"\n"
        );
    }
}
