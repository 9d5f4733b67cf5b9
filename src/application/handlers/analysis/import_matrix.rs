//! ImportMatrixHandler - reads a matrix file through the matching importer.

use std::fs;
use std::path::Path;

use tracing::{debug, info};

use crate::adapters::importer_for_path;
use crate::config::ImportConfig;
use crate::domain::analysis::{AnalysisError, DecisionMatrix, ImportError};
use crate::ports::MatrixImporter;

/// Handler for matrix file imports.
pub struct ImportMatrixHandler {
    config: ImportConfig,
}

impl ImportMatrixHandler {
    pub fn new(config: ImportConfig) -> Self {
        Self { config }
    }

    /// Picks the importer from the file extension and parses the file.
    pub fn handle(&self, path: &Path) -> Result<DecisionMatrix, AnalysisError> {
        let importer = importer_for_path(path, &self.config)?;
        debug!(path = %path.display(), format = importer.format_name(), "Importing matrix");

        let bytes = fs::read(path).map_err(ImportError::from)?;
        let matrix = importer.import_bytes(&bytes)?;

        info!(
            path = %path.display(),
            alternatives = matrix.alternative_count(),
            criteria = matrix.criterion_count(),
            "Matrix imported"
        );
        Ok(matrix)
    }
}
