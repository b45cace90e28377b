//! Handles a single query cycle: capture, resolution, enumeration, reporting.
//!
//! Every user-visible outcome, including failures, reaches the output sink as
//! a complete sentence. Only configuration faults and a broken console surface
//! as `AppError`.

use super::error::AppError;
use super::{verbose_eprintln, verbose_println}; // Macros for conditional logging.
use crate::graph::{CampusGraph, GraphError, NodeId};
use crate::path::{emit_path_set, PathExplorer};
use crate::resolver::resolve_locations;
use crate::speech::{OutputSink, QuerySource};

/// Sentence emitted when a query does not name two locations.
pub const RESOLUTION_FAILURE_MESSAGE: &str =
    "Could not understand the locations. Please try again.";

/// How a query cycle ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryOutcome {
    /// The source produced no usable query.
    NoQuery,
    /// The query did not name two locations.
    Unresolved,
    /// Paths were enumerated and reported. `paths` may be zero.
    Reported {
        start: NodeId,
        end: NodeId,
        paths: usize,
    },
}

/// Runs one query cycle against `graph`, reporting through `sink`.
pub fn handle_query(
    source: &mut dyn QuerySource,
    graph: &CampusGraph,
    sink: &mut dyn OutputSink,
    quiet_mode: bool,
) -> Result<QueryOutcome, AppError> {
    verbose_println!(quiet_mode, "\n[STEP 1] Capturing query...");
    let query = match source.read_query() {
        Ok(query) => query,
        Err(e) => {
            verbose_eprintln!(quiet_mode, "   [INPUT] {:?}", e);
            sink.emit_line(&e.to_string())?;
            return Ok(QueryOutcome::NoQuery);
        }
    };
    sink.print_line(&format!("You said: {}", query))?;
    verbose_println!(quiet_mode, "   => Query: {}", query);

    verbose_println!(quiet_mode, "[STEP 2] Resolving locations...");
    let (Some(start), Some(end)) = resolve_locations(&query, graph) else {
        verbose_println!(quiet_mode, "   => Fewer than two locations recognised.");
        sink.emit_line(RESOLUTION_FAILURE_MESSAGE)?;
        return Ok(QueryOutcome::Unresolved);
    };
    verbose_println!(quiet_mode, "   => Start: {}, End: {}", start, end);

    let paths = report_paths(&start, &end, graph, sink, quiet_mode)?;
    Ok(QueryOutcome::Reported { start, end, paths })
}

/// Enumerates every simple path from `start` to `end` and emits the listing.
///
/// Both identifiers must be named in `graph`; an unknown one is a
/// configuration fault and is returned before anything is emitted.
/// Returns the number of paths found.
pub fn report_paths(
    start: &NodeId,
    end: &NodeId,
    graph: &CampusGraph,
    sink: &mut dyn OutputSink,
    quiet_mode: bool,
) -> Result<usize, AppError> {
    for id in [start, end] {
        if !graph.contains(id.as_str()) {
            return Err(GraphError::NodeNotFound(id.clone()).into());
        }
    }

    verbose_println!(quiet_mode, "[STEP 3] Enumerating paths...");
    let paths = PathExplorer::find_all_paths(graph, start, end);
    if paths.is_empty() {
        verbose_println!(quiet_mode, "   => No path between {} and {}.", start, end);
    } else {
        verbose_println!(quiet_mode, "   => Found {} path(s).", paths.len());
        for (i, path) in paths.iter().enumerate() {
            verbose_println!(quiet_mode, "     Path {}: {} stop(s)", i + 1, path.len());
        }
    }

    verbose_println!(quiet_mode, "[STEP 4] Reporting paths...");
    emit_path_set(&paths, graph, sink)?;
    Ok(paths.len())
}
