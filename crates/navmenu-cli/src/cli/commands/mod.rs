//! CLI command handlers. Each command is in its own file.

mod active;
mod completions;
mod order_id;
mod render;
mod resolve;
mod site;

pub use active::run_active;
pub use completions::run_completions;
pub use order_id::run_order_id;
pub use render::run_render;
pub use resolve::run_resolve;
