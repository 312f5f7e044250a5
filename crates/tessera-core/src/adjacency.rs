//! Immutable parent/child view of a [`Graph`].
//!
//! Parallel edges collapse into a single parent/child entry, edges whose
//! endpoints are not nodes of the graph are ignored, and self-loops are left
//! out because a node can never be ranked below itself.

use indexmap::{IndexMap, IndexSet};

use crate::{graph::Graph, identifier::NodeId};

/// Deduplicated adjacency of a graph, keyed in node declaration order.
#[derive(Debug, Clone, Default)]
pub struct Adjacency {
    parents: IndexMap<NodeId, IndexSet<NodeId>>,
    children: IndexMap<NodeId, IndexSet<NodeId>>,
}

impl Adjacency {
    /// Computes parent and child sets for every node of `graph`.
    pub fn from_graph(graph: &Graph) -> Self {
        let mut parents: IndexMap<NodeId, IndexSet<NodeId>> = graph
            .node_ids()
            .map(|id| (id.clone(), IndexSet::new()))
            .collect();
        let mut children = parents.clone();

        for edge in graph.edges() {
            let (source, target) = (edge.source(), edge.target());
            if source == target || !graph.contains_node(source) || !graph.contains_node(target) {
                continue;
            }
            if let Some(set) = children.get_mut(source) {
                set.insert(target.clone());
            }
            if let Some(set) = parents.get_mut(target) {
                set.insert(source.clone());
            }
        }

        Self { parents, children }
    }

    /// Returns node ids in declaration order.
    pub fn node_ids(&self) -> impl Iterator<Item = &NodeId> {
        self.parents.keys()
    }

    pub fn nodes_count(&self) -> usize {
        self.parents.len()
    }

    /// Returns the distinct parents of `id`, in first-edge order.
    pub fn parents(&self, id: &NodeId) -> impl Iterator<Item = &NodeId> {
        self.parents.get(id).into_iter().flatten()
    }

    /// Returns the distinct children of `id`, in first-edge order.
    pub fn children(&self, id: &NodeId) -> impl Iterator<Item = &NodeId> {
        self.children.get(id).into_iter().flatten()
    }

    /// Returns the nodes without parents, in declaration order.
    ///
    /// When every node has a parent (a pure cycle, for instance) the first
    /// declared node is returned as the sole root. An empty graph has no
    /// roots.
    pub fn roots(&self) -> Vec<&NodeId> {
        let roots: Vec<&NodeId> = self
            .parents
            .iter()
            .filter(|(_, parents)| parents.is_empty())
            .map(|(id, _)| id)
            .collect();

        if roots.is_empty() {
            self.parents.keys().take(1).collect()
        } else {
            roots
        }
    }
}
