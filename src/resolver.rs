//! Maps a free-text query onto a pair of campus locations.
//!
//! Matching is a case-insensitive substring test of every display name against
//! the query. Names are tried in the map's declaration order, not in the order
//! they appear in the query, and the first two hits become `(start, end)`.

use crate::graph::{CampusGraph, NodeId};

/// Resolves the start and end locations mentioned in `query`.
///
/// Returns `(None, None)` unless at least two names match. A query naming a
/// single location is treated exactly like one naming none.
pub fn resolve_locations(query: &str, graph: &CampusGraph) -> (Option<NodeId>, Option<NodeId>) {
    let query = query.to_lowercase();
    let matched: Vec<&str> = graph
        .nodes()
        .map(|(_, name)| name)
        .filter(|name| query.contains(&name.to_lowercase()))
        .take(2)
        .collect();

    match matched.as_slice() {
        [start, end] => (id_for_name(graph, start), id_for_name(graph, end)),
        _ => (None, None),
    }
}

/// First identifier whose display name equals `name`, ignoring case.
fn id_for_name(graph: &CampusGraph, name: &str) -> Option<NodeId> {
    let name = name.to_lowercase();
    graph
        .nodes()
        .find(|(_, candidate)| candidate.to_lowercase() == name)
        .map(|(id, _)| id.clone())
}
