use crate::graph::{CampusGraph, NodeId};

/// A simple path: starts at the query's start, ends at its end, and never
/// repeats a node.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Path(Vec<NodeId>);

impl Path {
    /// Node identifiers from start to end.
    pub fn nodes(&self) -> &[NodeId] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

/// Every simple path between two nodes, in traversal order.
pub type PathSet = Vec<Path>;

/// `PathExplorer` is responsible for finding all simple paths between two
/// locations of a `CampusGraph`.
pub struct PathExplorer;

impl PathExplorer {
    /// Returns every simple path from `start` to `end`.
    ///
    /// Paths come out in the order neighbors are declared at each branch point.
    /// When `start == end` the only path is `[start]`. An empty result means
    /// `end` is unreachable and is not an error. Both identifiers are expected
    /// to be known to the graph; unknown ones simply yield no paths.
    pub fn find_all_paths(graph: &CampusGraph, start: &NodeId, end: &NodeId) -> PathSet {
        Self::traverse(graph, start, end)
    }

    /// Performs a depth-first traversal collecting each prefix that reaches `end`.
    ///
    /// The stack holds whole prefixes. Every branch gets its own copy, so a
    /// node appended on one branch is never seen by a sibling.
    fn traverse(graph: &CampusGraph, start: &NodeId, end: &NodeId) -> PathSet {
        let mut all_paths: PathSet = Vec::new();
        let mut stack: Vec<Vec<NodeId>> = vec![vec![start.clone()]];

        while let Some(prefix) = stack.pop() {
            let Some(current) = prefix.last() else {
                continue;
            };

            // A complete path is never extended past its end.
            if current == end {
                all_paths.push(Path(prefix));
                continue;
            }

            // Pushed in reverse so the first declared neighbor is popped first.
            for edge in graph.neighbors(current.as_str()).iter().rev() {
                if prefix.contains(&edge.to) {
                    continue;
                }
                let mut branch = Vec::with_capacity(prefix.len() + 1);
                branch.extend_from_slice(&prefix);
                branch.push(edge.to.clone());
                stack.push(branch);
            }
        }
        all_paths
    }
}
