// error module
mod error;
// explorer module
mod explorer;
// render module
mod render;


//─────────────────────────────────────────────────────────────────────────────
// Public re-exports from the path modules.
//─────────────────────────────────────────────────────────────────────────────
pub use error::RenderError;
pub use explorer::PathExplorer;
pub use render::emit_path_set;
