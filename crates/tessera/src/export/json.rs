//! JSON document backend.
//!
//! Encodes graphs as the [`Document`] data contract shared with rendering
//! and persistence collaborators, and decodes such documents back.

use log::debug;

use tessera_core::{document::Document, graph::Graph};

use crate::{error::TesseraError, export::Exporter};

/// Serializes graphs as JSON documents.
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonExporter {
    pretty: bool,
}

impl JsonExporter {
    /// # Arguments
    ///
    /// * `pretty` - Indent the output for humans.
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl Exporter for JsonExporter {
    fn export(&self, graph: &Graph) -> Result<String, TesseraError> {
        let document = graph.to_document();
        let json = if self.pretty {
            serde_json::to_string_pretty(&document)?
        } else {
            serde_json::to_string(&document)?
        };
        Ok(json)
    }
}

/// Decodes a JSON document into a graph.
///
/// # Errors
///
/// Returns [`TesseraError::Document`] when `json` is not a valid document.
pub fn from_json(json: &str) -> Result<Graph, TesseraError> {
    let document: Document = serde_json::from_str(json)?;
    debug!(
        nodes = document.nodes.len(),
        edges = document.edges.len();
        "Document decoded"
    );
    Ok(Graph::from_document(document))
}
