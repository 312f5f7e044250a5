//! Node sizing and coordinates.

use tessera_core::{
    geometry::{Point, Size},
    graph::{Graph, Node},
    identifier::NodeId,
};

use crate::config::LayoutConfig;

/// Size of the box drawn for `node`.
///
/// Nodes carrying attribute lines grow vertically to fit one line per
/// attribute below a header for their label.
pub fn node_size(node: &Node, config: &LayoutConfig) -> Size {
    let size = Size::new(config.node_width(), config.node_height());
    if !node.has_attributes() {
        return size;
    }

    let lines = node.attributes().len() as f32;
    size.with_height(
        config.attribute_header() + lines * config.attribute_line_height() + config.attribute_padding(),
    )
}

/// Top-left corner of the node at `index` in a row of `row_len` nodes on `layer`.
///
/// Rows are centered under the widest row, whose length is `widest_len`.
pub fn row_position(
    layer: usize,
    index: usize,
    row_len: usize,
    widest_len: usize,
    config: &LayoutConfig,
) -> Point {
    let gap = config.horizontal_gap();
    let offset = (widest_len - row_len) as f32 * gap / 2.0;

    Point::new(
        config.left_margin() + offset + index as f32 * gap,
        config.top_margin() + layer as f32 * config.layer_gap(),
    )
}

/// Writes layer, order, size and position of every node in `rows`.
pub fn place_rows(graph: &mut Graph, rows: &[Vec<NodeId>], config: &LayoutConfig) {
    let widest_len = rows.iter().map(Vec::len).max().unwrap_or(0);

    for (layer, row) in rows.iter().enumerate() {
        for (index, id) in row.iter().enumerate() {
            let Some(node) = graph.node_mut(id) else {
                continue;
            };
            let size = node_size(node, config);
            node.set_layer(layer);
            node.set_order(index);
            node.set_size(size);
            node.set_position(row_position(layer, index, row.len(), widest_len, config));
        }
    }
}
