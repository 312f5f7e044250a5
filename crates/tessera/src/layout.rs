//! Layered layout engine.
//!
//! Layout runs in three passes over the graph's deduplicated
//! [`Adjacency`](tessera_core::adjacency::Adjacency) view:
//!
//! 1. **Layering** - assign every node a layer from its longest discovered
//!    distance to a root
//! 2. **Ordering** - lexical baseline, then one barycenter sweep per layer
//! 3. **Positioning** - size each node and place rows centered under the
//!    widest one
//!
//! The result is written back onto the graph's nodes. Edges are untouched.

mod layering;
mod ordering;
mod positioning;

pub use positioning::node_size;

use log::{debug, info, trace};

use tessera_core::graph::Graph;

use crate::{config::LayoutConfig, error::TesseraError};

/// Applies the layered layout to graphs.
#[derive(Debug, Clone)]
pub struct Engine {
    config: LayoutConfig,
}

impl Engine {
    /// Creates an engine for the given spacing and sizing.
    ///
    /// # Errors
    ///
    /// Returns [`TesseraError::Layout`] when a configured value is negative
    /// or not finite.
    pub fn new(config: LayoutConfig) -> Result<Self, TesseraError> {
        let values = [
            ("top_margin", config.top_margin()),
            ("left_margin", config.left_margin()),
            ("layer_gap", config.layer_gap()),
            ("horizontal_gap", config.horizontal_gap()),
            ("node_width", config.node_width()),
            ("node_height", config.node_height()),
            ("attribute_header", config.attribute_header()),
            ("attribute_line_height", config.attribute_line_height()),
            ("attribute_padding", config.attribute_padding()),
        ];
        if let Some((name, value)) = values
            .iter()
            .find(|(_, value)| !value.is_finite() || *value < 0.0)
        {
            return Err(TesseraError::Layout(format!(
                "`{name}` must be a finite, non-negative number, got {value}"
            )));
        }

        Ok(Self { config })
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Lays out `graph` in place and returns the number of layers.
    pub fn apply(&self, graph: &mut Graph) -> usize {
        if graph.is_empty() {
            debug!("Nothing to lay out");
            return 0;
        }

        let adjacency = graph.adjacency();
        debug!(roots = adjacency.roots().len(); "Adjacency built");

        let layers = layering::assign_layers(&adjacency);
        let rows = ordering::order_layers(&layers, &adjacency);
        trace!(rows:?; "Layers ordered");

        positioning::place_rows(graph, &rows, &self.config);

        info!(nodes = graph.nodes_count(), layers = rows.len(); "Layout calculated");
        rows.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LayoutConfig;
    use float_cmp::assert_approx_eq;
    use tessera_core::{
        graph::{Edge, Node},
        identifier::{EdgeId, NodeId},
        semantic::NodeType,
    };

    fn diamond() -> Graph {
        let mut graph = Graph::default();
        for index in 1..=5 {
            graph.add_node(Node::new(
                NodeId::from_index(index),
                NodeType::Process,
                format!("step {index}"),
                Vec::new(),
            ));
        }
        // n1 -> n2 -> n4 -> n5, n1 -> n3 -> n5
        for (index, (source, target)) in [(1, 2), (1, 3), (2, 4), (4, 5), (3, 5)]
            .into_iter()
            .enumerate()
        {
            graph.add_edge(Edge::new(
                EdgeId::from_index(index + 1),
                NodeId::from_index(source),
                NodeId::from_index(target),
                None,
            ));
        }
        graph
    }

    #[test]
    fn test_merge_node_sits_below_longest_branch() {
        let mut graph = diamond();
        let layers = Engine::new(LayoutConfig::default()).unwrap().apply(&mut graph);

        assert_eq!(layers, 4);
        let layer = |index| graph.node(&NodeId::from_index(index)).unwrap().layer();
        assert_eq!(layer(2), 1);
        assert_eq!(layer(3), 1);
        assert_eq!(layer(4), 2);
        assert_eq!(layer(5), 3);
    }

    #[test]
    fn test_coordinates_follow_layers() {
        let mut graph = diamond();
        let config = LayoutConfig::default()
            .with_margins(10.0, 20.0)
            .with_gaps(100.0, 200.0);
        Engine::new(config).unwrap().apply(&mut graph);

        let root = graph.node(&NodeId::from_index(1)).unwrap();
        // Widest row has two nodes, so a single node is shifted by half a gap.
        assert_approx_eq!(f32, root.position().x(), 20.0 + 100.0);
        assert_approx_eq!(f32, root.position().y(), 10.0);

        let second = graph.node(&NodeId::from_index(3)).unwrap();
        assert_eq!(second.order(), 1);
        assert_approx_eq!(f32, second.position().x(), 20.0 + 200.0);
        assert_approx_eq!(f32, second.position().y(), 110.0);
    }

    #[test]
    fn test_layout_is_repeatable() {
        let mut first = diamond();
        let mut second = diamond();
        let engine = Engine::new(LayoutConfig::default()).unwrap();
        engine.apply(&mut first);
        engine.apply(&mut second);
        engine.apply(&mut second);
        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_graph() {
        let mut graph = Graph::default();
        assert_eq!(Engine::new(LayoutConfig::default()).unwrap().apply(&mut graph), 0);
    }

    #[test]
    fn test_rejects_invalid_config() {
        let config = LayoutConfig::default().with_gaps(f32::NAN, 10.0);
        assert!(matches!(Engine::new(config), Err(TesseraError::Layout(_))));

        let config = LayoutConfig::default().with_node_size(-1.0, 10.0);
        assert!(Engine::new(config).is_err());
    }
}
