use std::collections::HashMap;

use super::error::GraphError;
use super::store::{CampusGraph, Edge, NodeId, Weight};

/// Collects node and edge declarations and validates them into a [`CampusGraph`].
///
/// `arc` declares a single direction and keeps the caller's ordering, which is
/// how literal adjacency tables are loaded. `edge` declares both directions at
/// once. `build` insists that every arc has a reverse arc of equal weight.
#[derive(Debug, Default)]
pub struct GraphBuilder {
    order: Vec<NodeId>,
    names: HashMap<NodeId, String>,
    arcs: Vec<(NodeId, NodeId, Weight)>,
    duplicate: Option<NodeId>,
}

impl GraphBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares a location with its display name.
    pub fn node(mut self, id: impl Into<NodeId>, name: impl Into<String>) -> Self {
        let id = id.into();
        if self.names.contains_key(&id) {
            self.duplicate.get_or_insert(id);
            return self;
        }
        self.order.push(id.clone());
        self.names.insert(id, name.into());
        self
    }

    /// Declares the directed arc `from -> to`.
    pub fn arc(mut self, from: impl Into<NodeId>, to: impl Into<NodeId>, weight: Weight) -> Self {
        self.arcs.push((from.into(), to.into(), weight));
        self
    }

    /// Declares the undirected edge `a <-> b`.
    #[cfg(test)]
    pub fn edge(self, a: impl Into<NodeId>, b: impl Into<NodeId>, weight: Weight) -> Self {
        let (a, b) = (a.into(), b.into());
        if a == b {
            return self.arc(a, b, weight);
        }
        self.arc(a.clone(), b.clone(), weight).arc(b, a, weight)
    }

    /// Validates the declarations and freezes them into a graph.
    pub fn build(self) -> Result<CampusGraph, GraphError> {
        if let Some(id) = self.duplicate {
            return Err(GraphError::DuplicateNode(id));
        }

        let mut adjacency: HashMap<NodeId, Vec<Edge>> = HashMap::new();
        for (from, to, weight) in &self.arcs {
            for endpoint in [from, to] {
                if !self.names.contains_key(endpoint) {
                    return Err(GraphError::DanglingEdge {
                        from: from.clone(),
                        to: to.clone(),
                        missing: endpoint.clone(),
                    });
                }
            }

            let edges = adjacency.entry(from.clone()).or_default();
            if edges.iter().any(|edge| &edge.to == to) {
                return Err(GraphError::DuplicateEdge {
                    from: from.clone(),
                    to: to.clone(),
                });
            }
            edges.push(Edge {
                to: to.clone(),
                weight: *weight,
            });
        }

        let graph = CampusGraph::from_parts(self.order, self.names, adjacency);

        for (from, to, weight) in self.arcs {
            if graph.weight(to.as_str(), from.as_str()) != Some(weight) {
                return Err(GraphError::AsymmetricEdge { from, to, weight });
            }
        }

        Ok(graph)
    }
}
