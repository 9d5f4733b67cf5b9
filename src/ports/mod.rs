//! Ports - Interfaces between the ranking engines and the outside world.
//!
//! The domain depends on these traits; adapters implement them.
//!
//! - `MatrixImporter` - Parses an uploaded file into a `DecisionMatrix`
//! - `ResultRenderer` - Turns an `AnalysisReport` into printable output

mod matrix_importer;
mod result_renderer;

pub use matrix_importer::MatrixImporter;
pub use result_renderer::{RenderError, ResultRenderer};
