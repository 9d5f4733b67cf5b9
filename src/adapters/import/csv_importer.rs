//! Delimited-text importer - CSV and TSV decision matrices.
//!
//! Expected layout:
//!
//! ```text
//! Supplier,Cost,Quality,Delivery
//! A,100,8,7
//! B,80,6,9
//! ```
//!
//! The first header cell names the identifier column and is otherwise
//! ignored; the remaining header cells become criterion names.

use csv::{ReaderBuilder, Trim};

use crate::domain::analysis::{AnalysisError, DecisionMatrix, ImportError};
use crate::ports::MatrixImporter;

/// Importer for comma-, tab- or otherwise-delimited matrix files.
#[derive(Debug, Clone)]
pub struct CsvMatrixImporter {
    delimiter: u8,
    trim: bool,
}

impl CsvMatrixImporter {
    pub fn new(delimiter: u8, trim: bool) -> Self {
        Self { delimiter, trim }
    }

    /// Tab-separated importer with trimming.
    pub fn tsv() -> Self {
        Self::new(b'\t', true)
    }
}

impl Default for CsvMatrixImporter {
    fn default() -> Self {
        Self::new(b',', true)
    }
}

impl MatrixImporter for CsvMatrixImporter {
    fn import(&self, content: &str) -> Result<DecisionMatrix, ImportError> {
        let mut reader = ReaderBuilder::new()
            .delimiter(self.delimiter)
            .trim(if self.trim { Trim::All } else { Trim::None })
            .has_headers(true)
            .from_reader(content.as_bytes());

        let headers = reader.headers()?.clone();
        if headers.is_empty() || headers.iter().all(str::is_empty) {
            return Err(ImportError::MissingHeader);
        }
        let criteria: Vec<String> = headers.iter().skip(1).map(str::to_string).collect();
        if criteria.is_empty() {
            return Err(ImportError::Shape(
                "header has an identifier column but no criteria".to_string(),
            ));
        }

        let mut matrix = DecisionMatrix::with_criteria(criteria.clone()).map_err(shape_error)?;

        // Row numbers are 1-based and count the header line.
        for (index, record) in reader.records().enumerate() {
            let record = record?;
            let row = index + 2;
            let name = record.get(0).unwrap_or_default().to_string();

            let mut values = Vec::with_capacity(criteria.len());
            for (column, cell) in criteria.iter().zip(record.iter().skip(1)) {
                let value = cell.parse::<f64>().map_err(|_| ImportError::InvalidNumber {
                    row,
                    column: column.clone(),
                    value: cell.to_string(),
                })?;
                values.push(value);
            }
            matrix.push_row(name, values).map_err(shape_error)?;
        }

        tracing::debug!(
            alternatives = matrix.alternative_count(),
            criteria = matrix.criterion_count(),
            "Parsed delimited matrix"
        );
        Ok(matrix)
    }

    fn format_name(&self) -> &'static str {
        if self.delimiter == b'\t' {
            "tsv"
        } else {
            "csv"
        }
    }
}

pub(super) fn shape_error(err: AnalysisError) -> ImportError {
    ImportError::Shape(err.to_string())
}
