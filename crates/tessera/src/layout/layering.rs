//! Layer assignment.
//!
//! A breadth-first worklist seeded with every root at depth 0. Each node
//! keeps the deepest depth it has been discovered at, so a node fed by
//! several branches sits below the longest one. A child is only requeued
//! when its depth grows, and depths are capped at `node_count - 1`, which
//! bounds the work on cyclic input.

use std::collections::VecDeque;

use indexmap::IndexMap;
use log::trace;

use tessera_core::{adjacency::Adjacency, identifier::NodeId};

/// Computes the layer of every node in `adjacency`.
///
/// The result is keyed in declaration order. Nodes the traversal never
/// reaches are on layer 0.
pub fn assign_layers(adjacency: &Adjacency) -> IndexMap<NodeId, usize> {
    let max_depth = adjacency.nodes_count().saturating_sub(1);
    let mut depths: IndexMap<&NodeId, usize> = IndexMap::new();
    let mut worklist: VecDeque<(&NodeId, usize)> = VecDeque::new();

    for root in adjacency.roots() {
        depths.insert(root, 0);
        worklist.push_back((root, 0));
    }

    while let Some((id, depth)) = worklist.pop_front() {
        // A deeper discovery of `id` was queued after this one.
        if depths.get(id).is_some_and(|&known| known > depth) {
            continue;
        }

        let child_depth = depth + 1;
        if child_depth > max_depth {
            continue;
        }

        for child in adjacency.children(id) {
            let deeper = depths.get(child).is_none_or(|&known| child_depth > known);
            if deeper {
                depths.insert(child, child_depth);
                worklist.push_back((child, child_depth));
            }
        }
    }

    let layers: IndexMap<NodeId, usize> = adjacency
        .node_ids()
        .map(|id| (id.clone(), depths.get(id).copied().unwrap_or(0)))
        .collect();
    trace!(layers:?; "Layers assigned");

    layers
}

#[cfg(test)]
mod tests {
    use super::*;
    use tessera_core::{
        graph::{Edge, Graph, Node},
        identifier::EdgeId,
        semantic::NodeType,
    };

    fn graph(nodes: &[&str], edges: &[(&str, &str)]) -> Graph {
        let mut graph = Graph::default();
        for id in nodes {
            graph.add_node(Node::new(NodeId::new(*id), NodeType::Process, *id, Vec::new()));
        }
        for (index, (source, target)) in edges.iter().enumerate() {
            graph.add_edge(Edge::new(
                EdgeId::from_index(index + 1),
                NodeId::new(*source),
                NodeId::new(*target),
                None,
            ));
        }
        graph
    }

    fn layer_of(layers: &IndexMap<NodeId, usize>, id: &str) -> usize {
        layers[&NodeId::new(id)]
    }

    #[test]
    fn test_chain() {
        let layers = assign_layers(&graph(&["a", "b", "c"], &[("a", "b"), ("b", "c")]).adjacency());
        assert_eq!(layer_of(&layers, "a"), 0);
        assert_eq!(layer_of(&layers, "b"), 1);
        assert_eq!(layer_of(&layers, "c"), 2);
    }

    #[test]
    fn test_merge_takes_longest_branch() {
        // a -> b -> c -> m and a -> m
        let layers = assign_layers(
            &graph(
                &["a", "b", "c", "m"],
                &[("a", "m"), ("a", "b"), ("b", "c"), ("c", "m")],
            )
            .adjacency(),
        );
        assert_eq!(layer_of(&layers, "m"), 3);
    }

    #[test]
    fn test_disconnected_nodes_stay_on_layer_zero() {
        let layers = assign_layers(&graph(&["a", "b", "lonely"], &[("a", "b")]).adjacency());
        assert_eq!(layer_of(&layers, "lonely"), 0);
    }

    #[test]
    fn test_pure_cycle_terminates() {
        let layers = assign_layers(
            &graph(&["a", "b", "c"], &[("a", "b"), ("b", "c"), ("c", "a")]).adjacency(),
        );
        assert_eq!(layer_of(&layers, "a"), 0);
        assert_eq!(layer_of(&layers, "b"), 1);
        assert_eq!(layer_of(&layers, "c"), 2);
    }

    #[test]
    fn test_cycle_below_root_is_capped() {
        let layers = assign_layers(
            &graph(&["r", "x", "y"], &[("r", "x"), ("x", "y"), ("y", "x")]).adjacency(),
        );
        assert!(layers.values().all(|&layer| layer <= 2));
        assert_eq!(layer_of(&layers, "r"), 0);
    }

    #[test]
    fn test_empty_graph() {
        assert!(assign_layers(&Graph::default().adjacency()).is_empty());
    }
}
