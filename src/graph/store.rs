use std::borrow::Borrow;
use std::collections::HashMap;
use std::fmt;

use super::error::GraphError;

// ──────────────────────────────────────────────────────────────────────────────
// CampusGraph – an immutable, undirected, weighted adjacency structure.
// Adjacency lists keep their declaration order so traversal order, and with it
// the order of enumerated paths, is stable for a given table.
// ──────────────────────────────────────────────────────────────────────────────

/// Weight carried by an edge. Stored but not used by path enumeration.
pub type Weight = u32;

/// Short, case-sensitive code naming a location.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(String);

impl NodeId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for NodeId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for NodeId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// One hop from a node: the neighbor reached and the weight of the edge.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Edge {
    pub to: NodeId,
    pub weight: Weight,
}

/// The campus map: node names plus ordered adjacency lists.
///
/// Built through [`GraphBuilder`](super::GraphBuilder), which enforces
/// referential integrity and edge symmetry. Never mutated afterwards.
#[derive(Clone, Debug, Default)]
pub struct CampusGraph {
    order: Vec<NodeId>,
    names: HashMap<NodeId, String>,
    adjacency: HashMap<NodeId, Vec<Edge>>,
}

impl CampusGraph {
    pub(super) fn from_parts(
        order: Vec<NodeId>,
        names: HashMap<NodeId, String>,
        adjacency: HashMap<NodeId, Vec<Edge>>,
    ) -> Self {
        Self {
            order,
            names,
            adjacency,
        }
    }

    /// Returns the edges leaving `id` in declaration order.
    /// An identifier without outgoing edges yields an empty slice.
    pub fn neighbors(&self, id: &str) -> &[Edge] {
        self.adjacency.get(id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Returns the display name of `id`.
    pub fn name_of(&self, id: &str) -> Result<&str, GraphError> {
        self.names
            .get(id)
            .map(String::as_str)
            .ok_or_else(|| GraphError::NodeNotFound(NodeId::from(id)))
    }

    /// Whether `id` has an entry in the node-name mapping.
    pub fn contains(&self, id: &str) -> bool {
        self.names.contains_key(id)
    }

    /// Returns the weight of the edge `from -> to`, if there is one.
    pub fn weight(&self, from: &str, to: &str) -> Option<Weight> {
        self.neighbors(from)
            .iter()
            .find(|edge| edge.to.as_str() == to)
            .map(|edge| edge.weight)
    }

    /// Node identifiers in declaration order.
    pub fn node_ids(&self) -> impl Iterator<Item = &NodeId> {
        self.order.iter()
    }

    /// `(identifier, display name)` pairs in declaration order.
    pub fn nodes(&self) -> impl Iterator<Item = (&NodeId, &str)> {
        self.node_ids()
            .filter_map(|id| self.names.get(id).map(|name| (id, name.as_str())))
    }

    /// Number of named locations.
    pub fn len(&self) -> usize {
        self.order.len()
    }
}
