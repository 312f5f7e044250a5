//! Configuration types for Tessera diagram compilation.
//!
//! This module provides configuration structures that control how diagrams
//! are laid out and how edges are tagged. All types implement
//! [`serde::Deserialize`] for loading from external sources; every field is
//! optional and falls back to its default.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration combining layout and edge settings.
//! - [`LayoutConfig`] - Margins, gaps and node sizing used by the layout engine.
//! - [`EdgeConfig`] - Cosmetic edge settings such as the routing hint.
//!
//! # Example
//!
//! ```
//! # use tessera::config::AppConfig;
//! let config = AppConfig::default();
//! assert_eq!(config.layout().layer_gap(), 100.0);
//! ```

use serde::Deserialize;

use tessera_core::semantic::RoutingType;

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Layout configuration section.
    #[serde(default)]
    layout: LayoutConfig,

    /// Edge configuration section.
    #[serde(default)]
    edges: EdgeConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] from its sections.
    ///
    /// # Arguments
    ///
    /// * `layout` - Layout spacing and sizing.
    /// * `edges` - Edge settings.
    pub fn new(layout: LayoutConfig, edges: EdgeConfig) -> Self {
        Self { layout, edges }
    }

    /// Returns the layout configuration.
    pub fn layout(&self) -> &LayoutConfig {
        &self.layout
    }

    /// Returns the edge configuration.
    pub fn edges(&self) -> &EdgeConfig {
        &self.edges
    }
}

/// Spacing and sizing used by the layered layout.
///
/// All values are in the same abstract units as node coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Offset of layer 0 from the top edge.
    top_margin: f32,
    /// Offset of the widest layer from the left edge.
    left_margin: f32,
    /// Vertical distance between consecutive layers.
    layer_gap: f32,
    /// Horizontal distance between neighbouring nodes of a layer.
    horizontal_gap: f32,
    node_width: f32,
    node_height: f32,
    /// Height reserved for the label of an attribute-bearing node.
    attribute_header: f32,
    attribute_line_height: f32,
    attribute_padding: f32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            top_margin: 60.0,
            left_margin: 0.0,
            layer_gap: 100.0,
            horizontal_gap: 180.0,
            node_width: 140.0,
            node_height: 60.0,
            attribute_header: 30.0,
            attribute_line_height: 16.0,
            attribute_padding: 10.0,
        }
    }
}

impl LayoutConfig {
    /// Returns a copy with the given margins.
    pub fn with_margins(mut self, top: f32, left: f32) -> Self {
        self.top_margin = top;
        self.left_margin = left;
        self
    }

    /// Returns a copy with the given layer and horizontal gaps.
    pub fn with_gaps(mut self, layer_gap: f32, horizontal_gap: f32) -> Self {
        self.layer_gap = layer_gap;
        self.horizontal_gap = horizontal_gap;
        self
    }

    /// Returns a copy with the given default node size.
    pub fn with_node_size(mut self, width: f32, height: f32) -> Self {
        self.node_width = width;
        self.node_height = height;
        self
    }

    pub fn top_margin(&self) -> f32 {
        self.top_margin
    }

    pub fn left_margin(&self) -> f32 {
        self.left_margin
    }

    pub fn layer_gap(&self) -> f32 {
        self.layer_gap
    }

    pub fn horizontal_gap(&self) -> f32 {
        self.horizontal_gap
    }

    pub fn node_width(&self) -> f32 {
        self.node_width
    }

    pub fn node_height(&self) -> f32 {
        self.node_height
    }

    pub fn attribute_header(&self) -> f32 {
        self.attribute_header
    }

    pub fn attribute_line_height(&self) -> f32 {
        self.attribute_line_height
    }

    pub fn attribute_padding(&self) -> f32 {
        self.attribute_padding
    }
}

/// Edge settings.
#[derive(Debug, Default, Clone, Copy, Deserialize)]
pub struct EdgeConfig {
    /// Routing hint stamped on every compiled edge.
    #[serde(default)]
    routing: RoutingType,
}

impl EdgeConfig {
    pub fn new(routing: RoutingType) -> Self {
        Self { routing }
    }

    /// Returns the [`RoutingType`] given to compiled edges.
    pub fn routing(&self) -> RoutingType {
        self.routing
    }
}
