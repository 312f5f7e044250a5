//! Identifiers for graph nodes and edges.
//!
//! Node and edge ids are plain owned strings wrapped in newtypes so the two
//! id spaces cannot be mixed up. The builder assigns ids of the form `n1`,
//! `n2`, ... and `e1`, `e2`, ...; documents loaded from elsewhere may carry
//! any string.
//!
//! Ids order lexically, which is the tie-break baseline the layout engine
//! relies on (`n10` sorts before `n2`).
//!
//! # Examples
//!
//! ```
//! use tessera_core::identifier::NodeId;
//!
//! let id = NodeId::from_index(3);
//! assert_eq!(id, "n3");
//! assert!(NodeId::from_index(10) < NodeId::from_index(2));
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a node within a single graph.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(String);

impl NodeId {
    /// Creates a node id from any string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Creates the synthetic id for the `index`-th declared node (1-based).
    pub fn from_index(index: usize) -> Self {
        Self(format!("n{index}"))
    }

    /// Returns the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Identifier of an edge within a single graph.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EdgeId(String);

impl EdgeId {
    /// Creates an edge id from any string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Creates the synthetic id for the `index`-th edge (1-based).
    pub fn from_index(index: usize) -> Self {
        Self(format!("e{index}"))
    }

    /// Returns the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

macro_rules! impl_id_traits {
    ($ty:ident) => {
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $ty {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }

        impl From<String> for $ty {
            fn from(value: String) -> Self {
                Self(value)
            }
        }

        impl AsRef<str> for $ty {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl PartialEq<str> for $ty {
            fn eq(&self, other: &str) -> bool {
                self.0 == other
            }
        }

        impl PartialEq<&str> for $ty {
            fn eq(&self, other: &&str) -> bool {
                self.0 == *other
            }
        }
    };
}

impl_id_traits!(NodeId);
impl_id_traits!(EdgeId);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_synthetic_ids() {
        assert_eq!(NodeId::from_index(1), "n1");
        assert_eq!(EdgeId::from_index(12), "e12");
    }

    #[test]
    fn test_lexical_ordering() {
        let mut ids = vec![
            NodeId::from_index(2),
            NodeId::from_index(10),
            NodeId::from_index(1),
        ];
        ids.sort();
        let ids: Vec<&str> = ids.iter().map(NodeId::as_str).collect();
        assert_eq!(ids, ["n1", "n10", "n2"]);
    }

    #[test]
    fn test_display_and_serde_transparent() {
        let id = NodeId::new("custom");
        assert_eq!(id.to_string(), "custom");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"custom\"");
        let back: EdgeId = serde_json::from_str("\"e7\"").unwrap();
        assert_eq!(back, "e7");
    }
}
