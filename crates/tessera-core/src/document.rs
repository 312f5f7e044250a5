//! The document shape exchanged with persistence and rendering collaborators.
//!
//! A [`Document`] is a plain data transfer structure:
//!
//! ```text
//! { nodes: [{ id, type, position: { x, y }, width, height, label, attributes? }],
//!   edges: [{ id, source, target, label?, routingType? }] }
//! ```
//!
//! It carries no layer or ordering information; those are recomputed by the
//! layout engine whenever a document is turned back into a [`Graph`].

use log::debug;
use serde::{Deserialize, Serialize};

use crate::{
    geometry::{Point, Size},
    graph::{Edge, Graph, Node},
    identifier::{EdgeId, NodeId},
    semantic::{DiagramMetadata, NodeType, RoutingType},
};

/// A persisted or renderable diagram document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Diagram metadata; collaborators that do not track it may omit it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<DiagramMetadata>,

    #[serde(default)]
    pub nodes: Vec<DocumentNode>,

    #[serde(default)]
    pub edges: Vec<DocumentEdge>,
}

/// A node entry of a [`Document`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentNode {
    pub id: NodeId,
    #[serde(rename = "type", default)]
    pub node_type: NodeType,
    #[serde(default)]
    pub position: Point,
    #[serde(default)]
    pub width: f32,
    #[serde(default)]
    pub height: f32,
    #[serde(default)]
    pub label: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attributes: Vec<String>,
}

/// An edge entry of a [`Document`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentEdge {
    pub id: EdgeId,
    pub source: NodeId,
    pub target: NodeId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Also read from `type`, the field name older documents use.
    #[serde(default, alias = "type", skip_serializing_if = "Option::is_none")]
    pub routing_type: Option<RoutingType>,
}

impl From<&Graph> for Document {
    fn from(graph: &Graph) -> Self {
        let nodes = graph
            .nodes()
            .map(|node| DocumentNode {
                id: node.id().clone(),
                node_type: node.node_type(),
                position: node.position(),
                width: node.size().width(),
                height: node.size().height(),
                label: node.label().to_string(),
                attributes: node.attributes().to_vec(),
            })
            .collect();

        let edges = graph
            .edges()
            .iter()
            .map(|edge| DocumentEdge {
                id: edge.id().clone(),
                source: edge.source().clone(),
                target: edge.target().clone(),
                label: edge.label().map(str::to_string),
                routing_type: Some(edge.routing()),
            })
            .collect();

        Self {
            metadata: Some(graph.metadata().clone()),
            nodes,
            edges,
        }
    }
}

impl From<Document> for Graph {
    /// Rebuilds a graph from a document.
    ///
    /// Edges are kept verbatim, including edges whose endpoints are not in
    /// the document; adjacency and layout ignore those, and the text
    /// serializer falls back to the raw ids for them.
    fn from(document: Document) -> Self {
        let mut graph = Graph::new(document.metadata.unwrap_or_default());

        for entry in document.nodes {
            let mut node = Node::new(entry.id, entry.node_type, entry.label, entry.attributes);
            node.set_position(entry.position);
            node.set_size(Size::new(entry.width, entry.height));
            graph.add_node(node);
        }

        for entry in document.edges {
            if !graph.contains_node(&entry.source) || !graph.contains_node(&entry.target) {
                debug!(edge = entry.id.as_str(); "Document edge has a dangling endpoint");
            }
            let edge = Edge::new(entry.id, entry.source, entry.target, entry.label)
                .with_routing(entry.routing_type.unwrap_or_default());
            graph.add_edge(edge);
        }

        graph
    }
}

impl Graph {
    /// Converts this graph into the collaborator document shape.
    pub fn to_document(&self) -> Document {
        Document::from(self)
    }

    /// Builds a graph from a collaborator document.
    pub fn from_document(document: Document) -> Self {
        Graph::from(document)
    }
}
