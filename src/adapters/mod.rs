//! Adapters - Implementations of port interfaces.
//!
//! - `import` - Matrix importers for delimited text and JSON files
//! - `render` - JSON and plain-text table renderers for ranking reports

pub mod import;
pub mod render;

pub use import::{importer_for_path, CsvMatrixImporter, JsonMatrixImporter, XlsxMatrixImporter};
pub use render::{JsonRenderer, TableRenderer};
