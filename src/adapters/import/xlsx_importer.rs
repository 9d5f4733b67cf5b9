//! Spreadsheet importer - `.xlsx` decision matrices via `calamine`.
//!
//! Same layout as the delimited importer: header row holds the criteria,
//! first column holds the alternative names. Reads the first worksheet
//! unless a worksheet name is configured.

use std::io::Cursor;

use calamine::{open_workbook_from_rs, Data, Range, Reader, Xlsx};

use super::csv_importer::shape_error;
use crate::domain::analysis::{DecisionMatrix, ImportError};
use crate::ports::MatrixImporter;

/// Importer for Excel workbooks.
#[derive(Debug, Clone, Default)]
pub struct XlsxMatrixImporter {
    worksheet: Option<String>,
}

impl XlsxMatrixImporter {
    pub fn new(worksheet: Option<String>) -> Self {
        Self { worksheet }
    }

    fn range(&self, bytes: &[u8]) -> Result<Range<Data>, ImportError> {
        let mut workbook: Xlsx<_> = open_workbook_from_rs(Cursor::new(bytes))?;
        match &self.worksheet {
            Some(name) => Ok(workbook.worksheet_range(name)?),
            None => workbook
                .worksheet_range_at(0)
                .ok_or_else(|| ImportError::Shape("workbook has no worksheets".to_string()))?
                .map_err(ImportError::from),
        }
    }
}

fn cell_text(cell: &Data) -> String {
    match cell {
        Data::String(s) => s.trim().to_string(),
        Data::Float(f) => f.to_string(),
        Data::Int(i) => i.to_string(),
        Data::Empty => String::new(),
        other => format!("{:?}", other),
    }
}

fn cell_number(cell: &Data) -> Option<f64> {
    match cell {
        Data::Float(f) => Some(*f),
        Data::Int(i) => Some(*i as f64),
        Data::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

impl MatrixImporter for XlsxMatrixImporter {
    /// Text cannot carry a workbook; use [`MatrixImporter::import_bytes`].
    fn import(&self, _content: &str) -> Result<DecisionMatrix, ImportError> {
        Err(ImportError::UnsupportedFormat(
            "xlsx workbooks must be imported from raw bytes".to_string(),
        ))
    }

    fn import_bytes(&self, bytes: &[u8]) -> Result<DecisionMatrix, ImportError> {
        let range = self.range(bytes)?;
        let mut rows = range.rows();

        let header = rows.next().ok_or(ImportError::MissingHeader)?;
        let criteria: Vec<String> = header.iter().skip(1).map(cell_text).collect();
        if criteria.is_empty() {
            return Err(ImportError::Shape(
                "header has an identifier column but no criteria".to_string(),
            ));
        }

        let mut matrix = DecisionMatrix::with_criteria(criteria.clone()).map_err(shape_error)?;

        // Row numbers are 1-based and count the header row.
        for (index, cells) in rows.enumerate() {
            let row = index + 2;
            if cells.iter().all(|c| matches!(c, Data::Empty)) {
                continue;
            }
            let name = cells.first().map(cell_text).unwrap_or_default();

            let mut values = Vec::with_capacity(criteria.len());
            for (column, cell) in criteria.iter().zip(cells.iter().skip(1)) {
                let value = cell_number(cell).ok_or_else(|| ImportError::InvalidNumber {
                    row,
                    column: column.clone(),
                    value: cell_text(cell),
                })?;
                values.push(value);
            }
            matrix.push_row(name, values).map_err(shape_error)?;
        }

        tracing::debug!(
            alternatives = matrix.alternative_count(),
            criteria = matrix.criterion_count(),
            worksheet = self.worksheet.as_deref().unwrap_or("<first>"),
            "Parsed spreadsheet matrix"
        );
        Ok(matrix)
    }

    fn format_name(&self) -> &'static str {
        "xlsx"
    }
}
