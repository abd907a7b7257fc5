//! CLI command handlers, one per file.

mod config;
mod inspect;
mod normalize;
mod render;

pub use config::run_config;
pub use inspect::run_inspect;
pub use normalize::run_normalize;
pub use render::{run_render, RenderRequest};
