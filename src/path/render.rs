use crate::graph::{CampusGraph, GraphError};
use crate::speech::OutputSink;

use super::error::RenderError;
use super::explorer::Path;

/// Separator placed between location names.
pub const PATH_SEPARATOR: &str = " -> ";

/// The only line rendered for an empty path set.
pub const NO_PATH_MESSAGE: &str = "No path found.";

/// Renders a path as its location names joined by [`PATH_SEPARATOR`].
pub fn render_path(path: &Path, graph: &CampusGraph) -> Result<String, GraphError> {
    let names = path
        .nodes()
        .iter()
        .map(|id| graph.name_of(id.as_str()))
        .collect::<Result<Vec<&str>, GraphError>>()?;
    Ok(names.join(PATH_SEPARATOR))
}

/// Renders each path as `Path N: ...` with a 1-based `N`.
/// An empty set renders as the single line [`NO_PATH_MESSAGE`].
pub fn render_path_set(paths: &[Path], graph: &CampusGraph) -> Result<Vec<String>, GraphError> {
    if paths.is_empty() {
        return Ok(vec![NO_PATH_MESSAGE.to_string()]);
    }

    paths
        .iter()
        .enumerate()
        .map(|(i, path)| {
            render_path(path, graph).map(|rendered| format!("Path {}: {}", i + 1, rendered))
        })
        .collect()
}

/// Renders `paths` and hands every line, in order, to `sink`.
///
/// All lines are rendered before the first is emitted, so a lookup failure
/// never leaves a partial listing behind. Returns the number of lines emitted.
pub fn emit_path_set(
    paths: &[Path],
    graph: &CampusGraph,
    sink: &mut dyn OutputSink,
) -> Result<usize, RenderError> {
    let lines = render_path_set(paths, graph)?;
    for line in &lines {
        sink.emit_line(line)?;
    }
    Ok(lines.len())
}
