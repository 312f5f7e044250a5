//! Ordering of nodes within their layers.
//!
//! Layer 0 keeps the lexical order of node ids. Every later layer is sorted
//! once by the barycenter of its parents on strictly lower layers, using the
//! positions already fixed for those layers. There is a single forward sweep
//! and earlier layers are never revisited, so some crossings may remain.

use std::{cmp::Ordering, collections::HashMap};

use indexmap::IndexMap;

use tessera_core::{adjacency::Adjacency, identifier::NodeId};

/// Groups nodes into ordered rows, one per layer.
///
/// Rows are indexed by layer; a layer no node landed on yields an empty row.
pub fn order_layers(layers: &IndexMap<NodeId, usize>, adjacency: &Adjacency) -> Vec<Vec<NodeId>> {
    let mut ids: Vec<&NodeId> = layers.keys().collect();
    ids.sort();

    let rows_count = layers.values().max().map_or(0, |&max| max + 1);
    let mut rows: Vec<Vec<NodeId>> = vec![Vec::new(); rows_count];
    for id in ids {
        rows[layers[id]].push(id.clone());
    }

    let mut positions: HashMap<NodeId, usize> = HashMap::new();
    for (layer, row) in rows.iter_mut().enumerate() {
        if layer > 0 {
            let keys: HashMap<NodeId, f32> = row
                .iter()
                .map(|id| (id.clone(), barycenter(id, layer, layers, adjacency, &positions)))
                .collect();
            // Stable, so ties keep lexical order.
            row.sort_by(|a, b| {
                keys[a]
                    .partial_cmp(&keys[b])
                    .unwrap_or(Ordering::Equal)
            });
        }

        for (index, id) in row.iter().enumerate() {
            positions.insert(id.clone(), index);
        }
    }

    rows
}

/// Mean position of the parents of `id` that sit on a lower layer, or 0.
fn barycenter(
    id: &NodeId,
    layer: usize,
    layers: &IndexMap<NodeId, usize>,
    adjacency: &Adjacency,
    positions: &HashMap<NodeId, usize>,
) -> f32 {
    let (sum, count) = adjacency
        .parents(id)
        .filter(|parent| layers.get(*parent).is_some_and(|&l| l < layer))
        .filter_map(|parent| positions.get(parent))
        .fold((0usize, 0usize), |(sum, count), &position| {
            (sum + position, count + 1)
        });

    if count == 0 {
        0.0
    } else {
        sum as f32 / count as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::layering::assign_layers;
    use tessera_core::{
        graph::{Edge, Graph, Node},
        identifier::EdgeId,
        semantic::NodeType,
    };

    fn rows(nodes: &[&str], edges: &[(&str, &str)]) -> Vec<Vec<String>> {
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
        let adjacency = graph.adjacency();
        let layers = assign_layers(&adjacency);
        order_layers(&layers, &adjacency)
            .into_iter()
            .map(|row| row.iter().map(|id| id.to_string()).collect())
            .collect()
    }

    #[test]
    fn test_first_layer_is_lexical() {
        assert_eq!(rows(&["n2", "n10", "n1"], &[]), [["n1", "n10", "n2"]]);
    }

    #[test]
    fn test_children_follow_parent_positions() {
        // Roots a, b; a -> z, b -> y. Lexically y < z, but y's parent is to the right.
        let rows = rows(&["a", "b", "y", "z"], &[("a", "z"), ("b", "y")]);
        assert_eq!(rows[0], ["a", "b"]);
        assert_eq!(rows[1], ["z", "y"]);
    }

    #[test]
    fn test_barycenter_averages_parents() {
        // Roots a, b, c. p has parents a and c (mean 1); q has parent a (0); r has parent c (2).
        let rows = rows(
            &["a", "b", "c", "p", "q", "r"],
            &[("a", "p"), ("c", "p"), ("a", "q"), ("c", "r")],
        );
        assert_eq!(rows[1], ["q", "p", "r"]);
    }

    #[test]
    fn test_parentless_nodes_share_first_layer() {
        let rows = rows(&["a", "c", "b"], &[("a", "c")]);
        assert_eq!(rows[0], ["a", "b"]);
        assert_eq!(rows[1], ["c"]);
    }
}
