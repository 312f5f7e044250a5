//! Tessera - a compiler from a line-oriented diagram notation to laid-out graphs.
//!
//! Source text is parsed into declarations, resolved into an attributed
//! directed graph, laid out in layers and enriched with cardinality edges
//! from relationship nodes. Graphs can be written back as notation text or
//! exchanged as JSON documents.

pub mod config;
pub mod export;
pub mod layout;
pub mod relationships;

mod error;

pub use tessera_core::{adjacency, document, geometry, graph, identifier, labels, semantic};
pub use tessera_parser::{SkippedLine, Span, UnresolvedEdge};

pub use error::TesseraError;

use log::{debug, info, trace};

use tessera_core::{graph::Graph, labels::LabelIndex};
use tessera_parser::{Builder, ElaborateConfig};

use config::AppConfig;
use export::{Exporter, json::JsonExporter, text::TextExporter};

/// Output of [`DiagramBuilder::parse`] and [`DiagramBuilder::compile`].
///
/// Besides the graph it keeps what the lenient front end let go of, so
/// callers can decide whether to report it.
#[derive(Debug, Clone)]
pub struct Compiled {
    graph: Graph,
    labels: LabelIndex,
    skipped: Vec<SkippedLine>,
    unresolved: Vec<UnresolvedEdge>,
}

impl Compiled {
    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    /// Label lookup built while resolving edges, `start`/`end` aliases included.
    pub fn labels(&self) -> &LabelIndex {
        &self.labels
    }

    pub fn into_graph(self) -> Graph {
        self.graph
    }

    /// Source lines no grammar rule matched.
    pub fn skipped(&self) -> &[SkippedLine] {
        &self.skipped
    }

    /// Edge declarations dropped for an unresolved endpoint.
    pub fn unresolved(&self) -> &[UnresolvedEdge] {
        &self.unresolved
    }

    /// Returns `true` when no input was skipped or dropped.
    pub fn is_clean(&self) -> bool {
        self.skipped.is_empty() && self.unresolved.is_empty()
    }
}

/// Builder for compiling and exporting Tessera diagrams.
///
/// # Examples
///
/// ```
/// use tessera::{DiagramBuilder, config::AppConfig};
///
/// let source = r#"
///     process A
///     process B
///     A -> B
/// "#;
///
/// let builder = DiagramBuilder::new(AppConfig::default());
/// let compiled = builder.compile(source).expect("valid configuration");
/// assert_eq!(compiled.graph().edges_count(), 1);
///
/// let text = builder.serialize(compiled.graph());
/// assert!(text.contains("\"A\" -> \"B\""));
/// ```
#[derive(Debug, Default)]
pub struct DiagramBuilder {
    config: AppConfig,
}

impl DiagramBuilder {
    /// Create a new diagram builder with the given configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Application configuration including layout and edge settings
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Parse source text into a graph without laying it out.
    ///
    /// Nodes are left unplaced and no relationship edges are synthesized.
    /// Pair it with [`serialize`](Self::serialize) to reformat source text.
    pub fn parse(&self, source: &str) -> Compiled {
        info!("Parsing diagram");

        let ast = tessera_parser::parse(source);
        let skipped = ast.skipped().to_vec();
        debug!(declarations = ast.declarations().len(), skipped = skipped.len(); "Source parsed");

        let elaborate_config = ElaborateConfig::new(self.config.edges().routing());
        let (graph, labels, unresolved) = Builder::new(elaborate_config).build(&ast).into_parts();

        Compiled {
            graph,
            labels,
            skipped,
            unresolved,
        }
    }

    /// Compile source text into a laid-out graph.
    ///
    /// Runs parsing, graph building, layout and relationship synthesis, in
    /// that order. Unrecognized lines and dangling edges never fail the
    /// compilation; they are returned on the [`Compiled`] value.
    ///
    /// # Errors
    ///
    /// Returns [`TesseraError::Layout`] if the layout configuration is invalid.
    pub fn compile(&self, source: &str) -> Result<Compiled, TesseraError> {
        let engine = layout::Engine::new(*self.config.layout())?;
        let mut compiled = self.parse(source);

        engine.apply(&mut compiled.graph);
        relationships::synthesize(
            &mut compiled.graph,
            &compiled.labels,
            self.config.edges().routing(),
        );

        info!(
            nodes = compiled.graph.nodes_count(),
            edges = compiled.graph.edges_count();
            "Diagram compiled"
        );
        trace!(graph:? = compiled.graph; "Compiled graph");

        Ok(compiled)
    }

    /// Recompute layout and relationship edges for an existing graph.
    ///
    /// Intended for graphs rebuilt from documents. Labels are resolved from
    /// the nodes themselves, so `start`/`end` aliases are not available here.
    ///
    /// # Errors
    ///
    /// Returns [`TesseraError::Layout`] if the layout configuration is invalid.
    pub fn relayout(&self, graph: &mut Graph) -> Result<(), TesseraError> {
        info!(nodes = graph.nodes_count(); "Re-laying out graph");
        let engine = layout::Engine::new(*self.config.layout())?;
        engine.apply(graph);

        let labels = graph.label_index();
        relationships::synthesize(graph, &labels, self.config.edges().routing());
        Ok(())
    }

    /// Render a graph back into diagram notation.
    pub fn serialize(&self, graph: &Graph) -> String {
        TextExporter::new().render(graph)
    }

    /// Encode a graph as a pretty-printed JSON document.
    ///
    /// # Errors
    ///
    /// Returns [`TesseraError::Document`] if encoding fails.
    pub fn to_json(&self, graph: &Graph) -> Result<String, TesseraError> {
        JsonExporter::new(true).export(graph)
    }

    /// Decode a JSON document into a graph.
    ///
    /// The graph keeps the document's positions; call
    /// [`relayout`](Self::relayout) to recompute them.
    ///
    /// # Errors
    ///
    /// Returns [`TesseraError::Document`] for malformed documents.
    pub fn from_json(&self, json: &str) -> Result<Graph, TesseraError> {
        export::json::from_json(json)
    }
}
