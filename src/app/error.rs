use thiserror::Error;

// Custom Application Error. Display is printed as-is when the run fails, so
// every variant reads as a sentence.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Could not write to the console: {0}.")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Graph(#[from] crate::graph::GraphError),
    #[error(transparent)]
    Render(#[from] crate::path::RenderError),
}
