// builder module
mod builder;
// campus dataset
mod campus;
// error module
mod error;
// store module
mod store;


//─────────────────────────────────────────────────────────────────────────────
// Public re-exports from the graph modules.
//─────────────────────────────────────────────────────────────────────────────
#[cfg(test)]
pub use builder::GraphBuilder;
pub use campus::campus;
pub use error::GraphError;
pub use store::{CampusGraph, NodeId};
