//! Result rendering adapters.

mod json_renderer;
mod table_renderer;

pub use json_renderer::JsonRenderer;
pub use table_renderer::TableRenderer;
