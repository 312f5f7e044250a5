//! Cardinality edges synthesized from relationship nodes.
//!
//! A relationship node lists the entities it connects as attribute lines of
//! the form `<EntityLabel> <Cardinality>`, for example:
//!
//! ```text
//! relationship Places {
//!   "Customer" 1
//!   "Order" N
//! }
//! ```
//!
//! Each line naming a known node becomes an edge from the relationship to
//! that node, labeled with the cardinality. This runs after layout, so the
//! new edges never move a node.

use log::{debug, info};

use tessera_core::{
    graph::{Edge, Graph},
    identifier::NodeId,
    labels::LabelIndex,
    semantic::{NodeType, RoutingType},
};

/// A parsed `<EntityLabel> <Cardinality>` attribute line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Participant<'a> {
    pub label: &'a str,
    pub cardinality: &'a str,
}

impl<'a> Participant<'a> {
    /// Splits `line` at its last whitespace run.
    ///
    /// Quotes around the label are optional and stripped. Returns `None`
    /// when the line has fewer than two tokens.
    pub fn parse(line: &'a str) -> Option<Self> {
        let (label, cardinality) = line.trim().rsplit_once(char::is_whitespace)?;
        let label = label.trim();
        let label = label.strip_prefix('"').unwrap_or(label);
        let label = label.strip_suffix('"').unwrap_or(label).trim();

        (!label.is_empty()).then_some(Self { label, cardinality })
    }
}

/// Adds the cardinality edges implied by every relationship node.
///
/// Entity labels are resolved through `labels`. A participant is skipped
/// when it does not resolve, when it is the relationship itself, or when
/// any edge already connects the pair in either direction; running this
/// twice therefore adds nothing the second time.
///
/// Returns the number of edges added.
pub fn synthesize(graph: &mut Graph, labels: &LabelIndex, routing: RoutingType) -> usize {
    let mut pending: Vec<(NodeId, NodeId, String)> = Vec::new();

    for node in graph
        .nodes()
        .filter(|node| node.node_type() == NodeType::Relationship && node.has_attributes())
    {
        for line in node.attributes() {
            let Some(participant) = Participant::parse(line) else {
                debug!(node = node.id().as_str(), line = line.as_str(); "Ignoring malformed participant");
                continue;
            };
            let Some(target) = labels.resolve(participant.label) else {
                debug!(node = node.id().as_str(), label = participant.label; "Unknown participant");
                continue;
            };
            if target == node.id() || !graph.contains_node(target) {
                continue;
            }
            pending.push((
                node.id().clone(),
                target.clone(),
                participant.cardinality.to_string(),
            ));
        }
    }

    let mut added = 0;
    for (source, target, cardinality) in pending {
        // Re-checked per edge so two lines naming the same entity add one edge.
        if graph.has_edge_between(&source, &target) {
            continue;
        }
        let edge = Edge::new(graph.next_edge_id(), source, target, Some(cardinality))
            .with_routing(routing);
        graph.add_edge(edge);
        added += 1;
    }

    info!(edges = added; "Relationship edges synthesized");
    added
}

#[cfg(test)]
mod tests {
    use super::*;
    use tessera_core::graph::Node;

    fn schema() -> Graph {
        let mut graph = Graph::default();
        graph.add_node(Node::new(NodeId::from_index(1), NodeType::Entity, "Customer", Vec::new()));
        graph.add_node(Node::new(NodeId::from_index(2), NodeType::Entity, "Order", Vec::new()));
        graph.add_node(Node::new(
            NodeId::from_index(3),
            NodeType::Relationship,
            "Places",
            vec![
                "\"Customer\" 1".to_string(),
                "Order N".to_string(),
                "Invoice 1".to_string(),
                "lonely".to_string(),
            ],
        ));
        graph
    }

    #[test]
    fn test_participant_parse() {
        assert_eq!(
            Participant::parse("  \"Line item\"   0..N "),
            Some(Participant {
                label: "Line item",
                cardinality: "0..N",
            })
        );
        assert_eq!(Participant::parse("single"), None);
        assert_eq!(Participant::parse("\"\" 1"), None);
    }

    #[test]
    fn test_synthesizes_cardinality_edges() {
        let mut graph = schema();
        let labels = graph.label_index();

        assert_eq!(synthesize(&mut graph, &labels, RoutingType::Straight), 2);

        let edges: Vec<(&str, &str, Option<&str>)> = graph
            .edges()
            .iter()
            .map(|edge| (edge.source().as_str(), edge.target().as_str(), edge.label()))
            .collect();
        assert_eq!(edges, [("n3", "n1", Some("1")), ("n3", "n2", Some("N"))]);
        assert_eq!(graph.edges()[0].id().as_str(), "e1");
        assert_eq!(graph.edges()[1].id().as_str(), "e2");
        assert_eq!(graph.edges()[1].routing(), RoutingType::Straight);
    }

    #[test]
    fn test_rerun_adds_nothing() {
        let mut graph = schema();
        let labels = graph.label_index();
        synthesize(&mut graph, &labels, RoutingType::default());

        assert_eq!(synthesize(&mut graph, &labels, RoutingType::default()), 0);
        assert_eq!(graph.edges_count(), 2);
    }

    #[test]
    fn test_existing_reverse_edge_blocks_synthesis() {
        let mut graph = schema();
        graph.add_edge(Edge::new(
            graph.next_edge_id(),
            NodeId::from_index(1),
            NodeId::from_index(3),
            None,
        ));
        let labels = graph.label_index();

        assert_eq!(synthesize(&mut graph, &labels, RoutingType::default()), 1);
        assert_eq!(graph.edges()[1].id().as_str(), "e2");
        assert_eq!(graph.edges()[1].target().as_str(), "n2");
    }

    #[test]
    fn test_ignores_non_relationship_nodes() {
        let mut graph = Graph::default();
        graph.add_node(Node::new(NodeId::from_index(1), NodeType::Entity, "Order", Vec::new()));
        graph.add_node(Node::new(
            NodeId::from_index(2),
            NodeType::Entity,
            "Customer",
            vec!["Order N".to_string()],
        ));
        let labels = graph.label_index();
        assert_eq!(synthesize(&mut graph, &labels, RoutingType::default()), 0);
    }
}
