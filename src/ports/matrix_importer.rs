//! Matrix Importer Port - File content to decision matrix.
//!
//! Text formats implement [`MatrixImporter::import`] and inherit the byte
//! entry point; binary formats (spreadsheets) override
//! [`MatrixImporter::import_bytes`] instead.

use crate::domain::analysis::{DecisionMatrix, ImportError};

/// Port for parsing an uploaded matrix file.
///
/// # Contract
///
/// Implementations must:
/// - Treat the first column as the alternative identifier
/// - Treat the header row as the criterion names
/// - Reject any non-numeric value cell with `ImportError::InvalidNumber`
///
/// # Usage
///
/// ```rust,ignore
/// let importer: &dyn MatrixImporter = importer_for_path(path, &config)?.as_ref();
/// let matrix = importer.import_bytes(&std::fs::read(path)?)?;
/// ```
pub trait MatrixImporter: Send + Sync {
    /// Parse text content into a decision matrix.
    ///
    /// # Errors
    ///
    /// Returns `ImportError` for malformed content or a matrix that fails
    /// shape validation.
    fn import(&self, content: &str) -> Result<DecisionMatrix, ImportError>;

    /// Parse raw file bytes into a decision matrix.
    ///
    /// The default decodes UTF-8 and delegates to [`MatrixImporter::import`].
    fn import_bytes(&self, bytes: &[u8]) -> Result<DecisionMatrix, ImportError> {
        let content = std::str::from_utf8(bytes).map_err(|e| {
            ImportError::UnsupportedFormat(format!(
                "{} content is not UTF-8: {}",
                self.format_name(),
                e
            ))
        })?;
        self.import(content)
    }

    /// Short format name for logs ("csv", "json", ...).
    fn format_name(&self) -> &'static str;
}
