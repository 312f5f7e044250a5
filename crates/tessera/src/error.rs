//! Error types for Tessera operations.
//!
//! Compiling source text never fails; [`TesseraError`] covers the
//! operations that can: reading files, decoding or encoding documents and
//! laying out an externally supplied graph.

use std::io;

use thiserror::Error;

/// The main error type for Tessera operations.
#[derive(Debug, Error)]
pub enum TesseraError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Document error: {0}")]
    Document(#[from] serde_json::Error),

    #[error("Layout error: {0}")]
    Layout(String),
}
