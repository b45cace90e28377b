use crate::graph::GraphError;
use thiserror::Error;

// Error type for emitting a rendered path listing.
#[derive(Error, Debug)]
pub enum RenderError {
    /// Error when a path names a location missing from the name mapping.
    #[error(transparent)]
    Graph(#[from] GraphError),

    /// Error when the textual output channel cannot be written.
    #[error("Could not write the path listing: {0}.")]
    Io(#[from] std::io::Error),
}
