//! Graph builder: resolves parsed declarations into a [`Graph`].
//!
//! Nodes receive synthetic ids (`n1`, `n2`, ...) in declaration order and
//! their labels are registered in a [`LabelIndex`]. Edges are resolved only
//! after every node is known, so an edge may reference a node declared
//! further down. An edge with an endpoint that resolves to no node is
//! dropped and reported in [`Elaborated::unresolved`].

use log::{debug, info};

use tessera_core::{
    graph::{Edge, Graph, Node},
    identifier::{EdgeId, NodeId},
    labels::LabelIndex,
    semantic::{NodeType, RoutingType},
};

use crate::{ast::Ast, span::Span};

/// Type keywords recognized in source text, matched case-insensitively.
///
/// Anything not listed here becomes [`NodeType::Process`].
const NODE_CATALOG: &[(&str, NodeType)] = &[
    ("process", NodeType::Process),
    ("decision", NodeType::Decision),
    ("start", NodeType::Start),
    ("end", NodeType::End),
    ("start-end", NodeType::StartEnd),
    ("entity", NodeType::Entity),
    ("actor", NodeType::Actor),
    ("attribute", NodeType::Attribute),
    ("attr", NodeType::Attribute),
    ("relationship", NodeType::Relationship),
    ("rel", NodeType::Relationship),
    ("usecase", NodeType::UseCase),
    ("use-case", NodeType::UseCase),
    ("use_case", NodeType::UseCase),
    ("lifeline", NodeType::Lifeline),
    ("text", NodeType::Text),
    ("io", NodeType::InputOutput),
    ("input-output", NodeType::InputOutput),
    ("input", NodeType::InputOutput),
    ("output", NodeType::InputOutput),
    ("database", NodeType::Database),
    ("db", NodeType::Database),
    ("note", NodeType::Note),
];

/// Type keywords that are also registered as label aliases of their node.
///
/// Unlike catalog lookup this match is exact, so `Start Begin` is a start
/// node without the alias.
const ALIAS_KEYWORDS: [&str; 2] = ["start", "end"];

/// Maps a type token from source text to its semantic type.
pub fn node_type_for(keyword: &str) -> NodeType {
    NODE_CATALOG
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(keyword))
        .map_or(NodeType::Process, |(_, node_type)| *node_type)
}

/// Options for the graph builder.
#[derive(Debug, Clone, Copy, Default)]
pub struct ElaborateConfig {
    routing: RoutingType,
}

impl ElaborateConfig {
    /// # Arguments
    ///
    /// * `routing` - Routing hint stamped on every built edge.
    pub fn new(routing: RoutingType) -> Self {
        Self { routing }
    }

    pub fn routing(&self) -> RoutingType {
        self.routing
    }
}

/// An edge declaration that was dropped because an endpoint did not resolve.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnresolvedEdge {
    source: String,
    target: String,
    span: Span,
}

impl UnresolvedEdge {
    /// Source token as written.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Target token as written.
    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn span(&self) -> Span {
        self.span
    }
}

/// Output of the builder: the graph plus the lookup tables built on the way.
#[derive(Debug, Clone)]
pub struct Elaborated {
    graph: Graph,
    labels: LabelIndex,
    unresolved: Vec<UnresolvedEdge>,
}

impl Elaborated {
    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    /// Label (and `start`/`end` alias) lookup used to resolve edges.
    pub fn labels(&self) -> &LabelIndex {
        &self.labels
    }

    /// Edge declarations that were dropped.
    pub fn unresolved(&self) -> &[UnresolvedEdge] {
        &self.unresolved
    }

    pub fn into_parts(self) -> (Graph, LabelIndex, Vec<UnresolvedEdge>) {
        (self.graph, self.labels, self.unresolved)
    }
}

/// Builds a [`Graph`] from an [`Ast`].
pub struct Builder {
    config: ElaborateConfig,
}

impl Builder {
    pub fn new(config: ElaborateConfig) -> Self {
        Self { config }
    }

    pub fn build(&self, ast: &Ast) -> Elaborated {
        let mut graph = Graph::new(ast.metadata().clone());
        let mut labels = LabelIndex::new();

        for (index, declaration) in ast.nodes().enumerate() {
            let id = NodeId::from_index(index + 1);
            let node_type = node_type_for(&declaration.node_type);

            labels.insert(declaration.label.as_str(), id.clone());
            if ALIAS_KEYWORDS.iter().any(|keyword| *keyword == declaration.node_type) {
                labels.insert(declaration.node_type.as_str(), id.clone());
            }

            graph.add_node(Node::new(
                id,
                node_type,
                declaration.label.as_str(),
                declaration.attributes.clone(),
            ));
        }

        let mut unresolved = Vec::new();
        for declaration in ast.edges() {
            let source = labels.resolve_or_raw(&declaration.source);
            let target = labels.resolve_or_raw(&declaration.target);

            if !graph.contains_node(&source) || !graph.contains_node(&target) {
                debug!(
                    source = declaration.source.as_str(),
                    target = declaration.target.as_str();
                    "Dropping edge with unresolved endpoint"
                );
                unresolved.push(UnresolvedEdge {
                    source: declaration.source.clone(),
                    target: declaration.target.clone(),
                    span: declaration.span(),
                });
                continue;
            }

            let id = EdgeId::from_index(graph.edges_count() + 1);
            let edge = Edge::new(id, source, target, declaration.label.clone())
                .with_routing(self.config.routing());
            graph.add_edge(edge);
        }

        info!(
            nodes = graph.nodes_count(),
            edges = graph.edges_count(),
            dropped = unresolved.len();
            "Graph built"
        );

        Elaborated {
            graph,
            labels,
            unresolved,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse;

    fn build(source: &str) -> Elaborated {
        Builder::new(ElaborateConfig::default()).build(&parse(source))
    }

    #[test]
    fn test_catalog_lookup() {
        assert_eq!(node_type_for("decision"), NodeType::Decision);
        assert_eq!(node_type_for("Entity"), NodeType::Entity);
        assert_eq!(node_type_for("db"), NodeType::Database);
        assert_eq!(node_type_for("use-case"), NodeType::UseCase);
        assert_eq!(node_type_for("rel"), NodeType::Relationship);
        assert_eq!(node_type_for("attr"), NodeType::Attribute);
        assert_eq!(node_type_for("start-end"), NodeType::StartEnd);
        assert_eq!(node_type_for("input-output"), NodeType::InputOutput);
        assert_eq!(node_type_for("widget"), NodeType::Process);
    }

    #[test]
    fn test_short_relationship_keyword() {
        let built = build(
            r#"
            entity Customer
            entity Order
            rel Places {
              "Customer" 1
              "Order" N
            }
            "#,
        );
        let places = built.graph().node(&NodeId::from_index(3)).unwrap();
        assert_eq!(places.node_type(), NodeType::Relationship);
        assert_eq!(places.attributes(), ["\"Customer\" 1", "\"Order\" N"]);
    }

    #[test]
    fn test_ids_follow_declaration_order() {
        let built = build("process A\nprocess B\nprocess C");
        let ids: Vec<&str> = built.graph().node_ids().map(NodeId::as_str).collect();
        assert_eq!(ids, ["n1", "n2", "n3"]);
    }

    #[test]
    fn test_start_end_keywords_alias() {
        let built = build(
            r#"
            start "Begin checkout"
            end Done
            start -> end
            "#,
        );
        let graph = built.graph();
        assert_eq!(graph.edges_count(), 1);
        assert_eq!(graph.edges()[0].source(), &NodeId::from_index(1));
        assert_eq!(graph.edges()[0].target(), &NodeId::from_index(2));
        assert_eq!(built.labels().resolve("Begin checkout"), Some(&NodeId::from_index(1)));
    }

    #[test]
    fn test_alias_needs_exact_keyword() {
        let built = build("Start Begin
process A
start -> A");
        assert_eq!(built.graph().node(&NodeId::from_index(1)).unwrap().node_type(), NodeType::Start);
        assert_eq!(built.labels().resolve("start"), None);
        assert_eq!(built.graph().edges_count(), 0);
        assert_eq!(built.unresolved()[0].source(), "start");
    }

    #[test]
    fn test_dangling_edge_dropped() {
        let built = build("process A\nprocess B\nA -> B\nA -> Missing");
        assert_eq!(built.graph().nodes_count(), 2);
        assert_eq!(built.graph().edges_count(), 1);
        assert_eq!(built.unresolved().len(), 1);
        assert_eq!(built.unresolved()[0].target(), "Missing");
    }

    #[test]
    fn test_duplicate_labels_alias_latest() {
        let built = build("process A\ndecision A\nprocess B\nA -> B");
        let edge = &built.graph().edges()[0];
        assert_eq!(edge.source(), &NodeId::from_index(2));
        assert_eq!(built.graph().nodes_count(), 3);
    }

    #[test]
    fn test_edges_may_reference_raw_ids() {
        let built = build("process A\nprocess B\nn1 -> n2");
        assert_eq!(built.graph().edges_count(), 1);
    }

    #[test]
    fn test_forward_references_resolve() {
        let built = build("A -> B\nprocess A\nprocess B");
        assert_eq!(built.graph().edges_count(), 1);
        assert!(built.unresolved().is_empty());
    }

    #[test]
    fn test_routing_applied_to_edges() {
        let ast = parse("process A\nprocess B\nA -> B");
        let built = Builder::new(ElaborateConfig::new(RoutingType::Orthogonal)).build(&ast);
        assert_eq!(built.graph().edges()[0].routing(), RoutingType::Orthogonal);
    }

    #[test]
    fn test_parallel_edges_kept_in_list() {
        let built = build("process A\nprocess B\nA -> B\nA -> B : again");
        assert_eq!(built.graph().edges_count(), 2);
        assert_eq!(
            built
                .graph()
                .adjacency()
                .children(&NodeId::from_index(1))
                .count(),
            1
        );
    }
}
