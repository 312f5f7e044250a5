//! Tessera Core Types and Definitions
//!
//! This crate provides the foundational types shared by every stage of the
//! Tessera pipeline. It includes:
//!
//! - **Identifiers**: Node and edge ids ([`identifier::NodeId`], [`identifier::EdgeId`])
//! - **Geometry**: Points and sizes ([`geometry`] module)
//! - **Semantic**: Node type catalog, routing hints, metadata ([`semantic`] module)
//! - **Graph**: The attributed directed graph ([`graph::Graph`])
//! - **Adjacency**: Deduplicated parent/child view ([`adjacency::Adjacency`])
//! - **Labels**: Label to id resolution ([`labels::LabelIndex`])
//! - **Document**: The collaborator data contract ([`document::Document`])

pub mod adjacency;
pub mod document;
pub mod geometry;
pub mod graph;
pub mod identifier;
pub mod labels;
pub mod semantic;
