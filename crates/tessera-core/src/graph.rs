//! The attributed directed graph produced by the builder.
//!
//! A [`Graph`] owns its [`Node`]s in declaration order and its [`Edge`]s in
//! the order they were added. The layout engine mutates node placement
//! ([`Node::set_layer`], [`Node::set_order`], [`Node::set_position`],
//! [`Node::set_size`]); the relationship post-processor only appends edges.
//! Nothing else mutates a graph once it has been handed to a caller.

use indexmap::IndexMap;

use crate::{
    adjacency::Adjacency,
    geometry::{Point, Size},
    identifier::{EdgeId, NodeId},
    labels::LabelIndex,
    semantic::{DiagramMetadata, NodeType, RoutingType},
};

/// A node of the diagram graph.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    id: NodeId,
    node_type: NodeType,
    label: String,
    layer: usize,
    order: usize,
    position: Point,
    size: Size,
    attributes: Vec<String>,
}

impl Node {
    /// Creates an unplaced node: layer 0, order 0, origin position, zero size.
    pub fn new(
        id: NodeId,
        node_type: NodeType,
        label: impl Into<String>,
        attributes: Vec<String>,
    ) -> Self {
        Self {
            id,
            node_type,
            label: label.into(),
            layer: 0,
            order: 0,
            position: Point::default(),
            size: Size::default(),
            attributes,
        }
    }

    pub fn id(&self) -> &NodeId {
        &self.id
    }

    pub fn node_type(&self) -> NodeType {
        self.node_type
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Layer (rank) assigned by the layout engine.
    pub fn layer(&self) -> usize {
        self.layer
    }

    /// Position index within the node's layer.
    pub fn order(&self) -> usize {
        self.order
    }

    /// Top-left corner of the node box.
    pub fn position(&self) -> Point {
        self.position
    }

    pub fn size(&self) -> Size {
        self.size
    }

    /// Raw attribute lines from a block-form declaration.
    pub fn attributes(&self) -> &[String] {
        &self.attributes
    }

    pub fn has_attributes(&self) -> bool {
        !self.attributes.is_empty()
    }

    pub fn set_layer(&mut self, layer: usize) {
        self.layer = layer;
    }

    pub fn set_order(&mut self, order: usize) {
        self.order = order;
    }

    pub fn set_position(&mut self, position: Point) {
        self.position = position;
    }

    pub fn set_size(&mut self, size: Size) {
        self.size = size;
    }
}

/// A directed edge between two nodes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edge {
    id: EdgeId,
    source: NodeId,
    target: NodeId,
    label: Option<String>,
    routing: RoutingType,
}

impl Edge {
    pub fn new(id: EdgeId, source: NodeId, target: NodeId, label: Option<String>) -> Self {
        Self {
            id,
            source,
            target,
            label,
            routing: RoutingType::default(),
        }
    }

    /// Sets the cosmetic routing hint.
    pub fn with_routing(mut self, routing: RoutingType) -> Self {
        self.routing = routing;
        self
    }

    pub fn id(&self) -> &EdgeId {
        &self.id
    }

    pub fn source(&self) -> &NodeId {
        &self.source
    }

    pub fn target(&self) -> &NodeId {
        &self.target
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    pub fn routing(&self) -> RoutingType {
        self.routing
    }

    /// Checks whether the edge connects `a` and `b` in either direction.
    pub fn connects(&self, a: &NodeId, b: &NodeId) -> bool {
        (&self.source == a && &self.target == b) || (&self.source == b && &self.target == a)
    }
}

/// A diagram graph: metadata, nodes in declaration order, edges.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Graph {
    metadata: DiagramMetadata,
    nodes: IndexMap<NodeId, Node>,
    edges: Vec<Edge>,
}

impl Graph {
    pub fn new(metadata: DiagramMetadata) -> Self {
        Self {
            metadata,
            nodes: IndexMap::new(),
            edges: Vec::new(),
        }
    }

    pub fn metadata(&self) -> &DiagramMetadata {
        &self.metadata
    }

    /// Adds a node, replacing any node that already has the same id.
    ///
    /// A replaced node keeps its original slot in the iteration order.
    pub fn add_node(&mut self, node: Node) {
        self.nodes.insert(node.id().clone(), node);
    }

    /// Appends an edge without checking its endpoints.
    ///
    /// The builder only adds resolved edges; documents from external
    /// collaborators may legitimately carry dangling ones.
    pub fn add_edge(&mut self, edge: Edge) {
        self.edges.push(edge);
    }

    pub fn node(&self, id: &NodeId) -> Option<&Node> {
        self.nodes.get(id)
    }

    pub fn node_mut(&mut self, id: &NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(id)
    }

    pub fn contains_node(&self, id: &NodeId) -> bool {
        self.nodes.contains_key(id)
    }

    /// Returns an iterator over nodes in declaration order.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.values()
    }

    pub fn nodes_mut(&mut self) -> impl Iterator<Item = &mut Node> {
        self.nodes.values_mut()
    }

    pub fn node_ids(&self) -> impl Iterator<Item = &NodeId> {
        self.nodes.keys()
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn nodes_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edges_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Checks whether any edge connects `a` and `b`, in either direction.
    pub fn has_edge_between(&self, a: &NodeId, b: &NodeId) -> bool {
        self.edges.iter().any(|edge| edge.connects(a, b))
    }

    /// Returns the next `eN` id that no edge in this graph uses yet.
    pub fn next_edge_id(&self) -> EdgeId {
        let mut index = self.edges.len() + 1;
        loop {
            let candidate = EdgeId::from_index(index);
            if !self.edges.iter().any(|edge| edge.id() == &candidate) {
                return candidate;
            }
            index += 1;
        }
    }

    /// Builds the deduplicated parent/child view of this graph.
    pub fn adjacency(&self) -> Adjacency {
        Adjacency::from_graph(self)
    }

    /// Builds a label lookup from node labels (last declaration wins).
    pub fn label_index(&self) -> LabelIndex {
        let mut labels = LabelIndex::new();
        for node in self.nodes() {
            labels.insert(node.label(), node.id().clone());
        }
        labels
    }
}
