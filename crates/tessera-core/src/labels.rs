//! Label lookup used to resolve edge endpoints.
//!
//! The builder fills a [`LabelIndex`] while it assigns node ids, and the
//! relationship post-processor reads it afterwards. It is an explicit value
//! handed from stage to stage; there is no shared registry.

use indexmap::IndexMap;

use crate::identifier::NodeId;

/// Mapping from label (or alias) to node id.
///
/// Inserting a label that is already present overwrites it, so duplicate
/// labels alias to the most recently declared node.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LabelIndex {
    entries: IndexMap<String, NodeId>,
}

impl LabelIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Maps `label` to `id`, returning the id it previously mapped to.
    pub fn insert(&mut self, label: impl Into<String>, id: NodeId) -> Option<NodeId> {
        self.entries.insert(label.into(), id)
    }

    /// Looks up the node id registered for `label`.
    pub fn resolve(&self, label: &str) -> Option<&NodeId> {
        self.entries.get(label)
    }

    /// Resolves `token` through the index, falling back to the raw token.
    ///
    /// The fallback lets edges name nodes by id directly; callers still have
    /// to check that the returned id exists.
    pub fn resolve_or_raw(&self, token: &str) -> NodeId {
        self.resolve(token)
            .cloned()
            .unwrap_or_else(|| NodeId::new(token))
    }
}
