//! JSON importer - decision matrices exported as JSON documents.
//!
//! ```json
//! {
//!   "criteria": ["Cost", "Quality"],
//!   "rows": [
//!     { "name": "A", "values": [100, 8] },
//!     { "name": "B", "values": [80, 6] }
//!   ]
//! }
//! ```

use serde::Deserialize;

use super::csv_importer::shape_error;
use crate::domain::analysis::{DecisionMatrix, ImportError};
use crate::ports::MatrixImporter;

#[derive(Debug, Deserialize)]
struct MatrixDocument {
    criteria: Vec<String>,
    #[serde(default)]
    rows: Vec<RowDocument>,
}

#[derive(Debug, Deserialize)]
struct RowDocument {
    name: String,
    values: Vec<f64>,
}

/// Importer for the JSON matrix document format.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonMatrixImporter;

impl JsonMatrixImporter {
    pub fn new() -> Self {
        Self
    }
}

impl MatrixImporter for JsonMatrixImporter {
    fn import(&self, content: &str) -> Result<DecisionMatrix, ImportError> {
        let document: MatrixDocument = serde_json::from_str(content)?;
        if document.criteria.is_empty() {
            return Err(ImportError::Shape("document lists no criteria".to_string()));
        }

        let mut matrix = DecisionMatrix::with_criteria(document.criteria).map_err(shape_error)?;
        for row in document.rows {
            matrix.push_row(row.name, row.values).map_err(shape_error)?;
        }

        tracing::debug!(
            alternatives = matrix.alternative_count(),
            criteria = matrix.criterion_count(),
            "Parsed JSON matrix"
        );
        Ok(matrix)
    }

    fn format_name(&self) -> &'static str {
        "json"
    }
}
