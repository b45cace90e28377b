use super::store::{NodeId, Weight};
use thiserror::Error;

/// Error type for graph construction and lookups.
///
/// Every variant except `NodeNotFound` can only be produced while building a
/// graph, so a correctly configured campus table never yields them at runtime.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// Error when an identifier has no entry in the node-name mapping.
    #[error("Location '{0}' is not part of the campus map.")]
    NodeNotFound(NodeId),

    /// Error when the same identifier is declared twice.
    #[error("Location '{0}' is declared more than once.")]
    DuplicateNode(NodeId),

    /// Error when an edge references an identifier without a name.
    #[error("Edge {from} -> {to} references unknown location '{missing}'.")]
    DanglingEdge {
        from: NodeId,
        to: NodeId,
        missing: NodeId,
    },

    /// Error when the same directed edge is declared twice.
    #[error("Edge {from} -> {to} is declared more than once.")]
    DuplicateEdge { from: NodeId, to: NodeId },

    /// Error when an edge has no reverse edge carrying the same weight.
    #[error("Edge {from} -> {to} (weight {weight}) has no matching edge {to} -> {from}.")]
    AsymmetricEdge {
        from: NodeId,
        to: NodeId,
        weight: Weight,
    },
}
