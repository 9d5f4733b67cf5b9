//! Matrix import adapters.
//!
//! - `CsvMatrixImporter` - Delimited text (`.csv`, `.tsv`) via the `csv` crate
//! - `JsonMatrixImporter` - `{"criteria": [...], "rows": [...]}` documents
//! - `XlsxMatrixImporter` - Excel workbooks (`.xlsx`) via `calamine`
//!
//! [`importer_for_path`] picks the adapter from the file extension.

mod csv_importer;
mod json_importer;
mod xlsx_importer;

pub use csv_importer::CsvMatrixImporter;
pub use json_importer::JsonMatrixImporter;
pub use xlsx_importer::XlsxMatrixImporter;

use std::path::Path;

use crate::config::ImportConfig;
use crate::domain::analysis::ImportError;
use crate::ports::MatrixImporter;

/// Selects an importer by file extension (case-insensitive).
///
/// `.csv` uses the configured delimiter, `.tsv` always splits on tabs,
/// `.xlsx` reads the configured worksheet.
///
/// # Errors
///
/// `UnsupportedFormat` for any other extension, and for a configured
/// delimiter that is not a single ASCII character.
pub fn importer_for_path(
    path: &Path,
    config: &ImportConfig,
) -> Result<Box<dyn MatrixImporter>, ImportError> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();

    match extension.as_str() {
        "csv" => {
            let delimiter = config
                .delimiter_byte()
                .map_err(|e| ImportError::UnsupportedFormat(e.to_string()))?;
            Ok(Box::new(CsvMatrixImporter::new(delimiter, config.trim)))
        }
        "tsv" => Ok(Box::new(CsvMatrixImporter::new(b'\t', config.trim))),
        "json" => Ok(Box::new(JsonMatrixImporter::new())),
        "xlsx" => Ok(Box::new(XlsxMatrixImporter::new(config.worksheet.clone()))),
        "" => Err(ImportError::UnsupportedFormat(format!(
            "'{}' has no file extension",
            path.display()
        ))),
        other => Err(ImportError::UnsupportedFormat(format!(
            ".{} (supported: .csv, .tsv, .json, .xlsx)",
            other
        ))),
    }
}
