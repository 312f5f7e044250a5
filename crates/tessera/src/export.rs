//! Export of compiled graphs.
//!
//! This module provides the [`Exporter`] trait that turns a graph into an
//! output string. It is the final stage of the pipeline.
//!
//! # Pipeline Position
//!
//! ```text
//! Source Text
//!     ↓ parse + elaborate
//! Graph
//!     ↓ layout, relationships
//! Positioned Graph
//!     ↓ export (this module)
//! Text notation / JSON document
//! ```
//!
//! # Available Backends
//!
//! - [`text`] - the diagram notation itself, readable back by the parser
//! - [`json`] - the [`Document`](tessera_core::document::Document) data contract

pub mod json;
pub mod text;

use tessera_core::graph::Graph;

use crate::error::TesseraError;

/// Abstraction for export backends.
pub trait Exporter {
    /// Renders `graph` in the backend's output format.
    ///
    /// # Errors
    ///
    /// Returns a [`TesseraError`] if the graph cannot be encoded.
    fn export(&self, graph: &Graph) -> Result<String, TesseraError>;
}
