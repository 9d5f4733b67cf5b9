//! Decision Matrix - alternatives x criteria table of raw numeric values.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::{AnalysisError, NameKind};

/// Rectangular table of raw values, rows keyed by alternative name and
/// columns keyed by criterion name, both in insertion order.
///
/// Rows are only ever appended; every row has one finite value per criterion.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawDecisionMatrix")]
pub struct DecisionMatrix {
    alternative_ids: Vec<String>,
    criterion_ids: Vec<String>,
    values: Vec<Vec<f64>>,
}

#[derive(Deserialize)]
struct RawDecisionMatrix {
    alternative_ids: Vec<String>,
    criterion_ids: Vec<String>,
    values: Vec<Vec<f64>>,
}

impl TryFrom<RawDecisionMatrix> for DecisionMatrix {
    type Error = AnalysisError;

    fn try_from(raw: RawDecisionMatrix) -> Result<Self, Self::Error> {
        if raw.alternative_ids.len() != raw.values.len() {
            return Err(AnalysisError::invalid_input(format!(
                "{} alternative names for {} rows",
                raw.alternative_ids.len(),
                raw.values.len()
            )));
        }
        let mut matrix = DecisionMatrix::with_criteria(raw.criterion_ids)?;
        for (name, row) in raw.alternative_ids.into_iter().zip(raw.values) {
            matrix.push_row(name, row)?;
        }
        Ok(matrix)
    }
}

impl DecisionMatrix {
    /// Creates an empty matrix with the given criterion columns.
    pub fn with_criteria<I, S>(criteria: I) -> Result<Self, AnalysisError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut criterion_ids = Vec::new();
        let mut seen = HashSet::new();
        for name in criteria {
            let name = name.into();
            if name.trim().is_empty() {
                return Err(AnalysisError::invalid_input("criterion name cannot be empty"));
            }
            if !seen.insert(name.clone()) {
                return Err(AnalysisError::duplicate(NameKind::Criterion, name));
            }
            criterion_ids.push(name);
        }
        Ok(Self {
            alternative_ids: Vec::new(),
            criterion_ids,
            values: Vec::new(),
        })
    }

    /// Creates a builder for constructing a decision matrix.
    pub fn builder() -> DecisionMatrixBuilder {
        DecisionMatrixBuilder::new()
    }

    /// Appends one alternative row.
    pub fn push_row(
        &mut self,
        alternative_id: impl Into<String>,
        values: Vec<f64>,
    ) -> Result<(), AnalysisError> {
        let alternative_id = alternative_id.into();
        if alternative_id.trim().is_empty() {
            return Err(AnalysisError::invalid_input("alternative name cannot be empty"));
        }
        if self.alternative_ids.contains(&alternative_id) {
            return Err(AnalysisError::duplicate(NameKind::Alternative, alternative_id));
        }
        if values.len() != self.criterion_ids.len() {
            return Err(AnalysisError::invalid_input(format!(
                "alternative '{}' has {} values but the matrix has {} criteria",
                alternative_id,
                values.len(),
                self.criterion_ids.len()
            )));
        }
        if let Some(pos) = values.iter().position(|v| !v.is_finite()) {
            return Err(AnalysisError::invalid_input(format!(
                "alternative '{}' has a non-finite value for '{}'",
                alternative_id, self.criterion_ids[pos]
            )));
        }
        self.alternative_ids.push(alternative_id);
        self.values.push(values);
        Ok(())
    }

    /// Fails unless the matrix has at least one row and one column.
    pub fn ensure_scorable(&self) -> Result<(), AnalysisError> {
        if self.criterion_ids.is_empty() {
            return Err(AnalysisError::invalid_input("decision matrix has no criteria"));
        }
        if self.alternative_ids.is_empty() {
            return Err(AnalysisError::invalid_input("decision matrix has no alternatives"));
        }
        Ok(())
    }

    pub fn alternative_ids(&self) -> &[String] {
        &self.alternative_ids
    }

    pub fn criterion_ids(&self) -> &[String] {
        &self.criterion_ids
    }

    /// Returns the values of the row at `index`.
    pub fn row(&self, index: usize) -> Option<&[f64]> {
        self.values.get(index).map(Vec::as_slice)
    }

    /// Iterates rows as (alternative name, values).
    pub fn rows(&self) -> impl Iterator<Item = (&str, &[f64])> {
        self.alternative_ids
            .iter()
            .map(String::as_str)
            .zip(self.values.iter().map(Vec::as_slice))
    }

    /// Returns the values of the column at `index`, in row order.
    pub fn column(&self, index: usize) -> Option<Vec<f64>> {
        if index >= self.criterion_ids.len() {
            return None;
        }
        Some(self.values.iter().map(|row| row[index]).collect())
    }

    /// Gets a single value by alternative and criterion name.
    pub fn value(&self, alternative_id: &str, criterion_id: &str) -> Option<f64> {
        let row = self.alternative_index(alternative_id)?;
        let col = self.criterion_index(criterion_id)?;
        Some(self.values[row][col])
    }

    pub fn alternative_index(&self, alternative_id: &str) -> Option<usize> {
        self.alternative_ids.iter().position(|id| id == alternative_id)
    }

    pub fn criterion_index(&self, criterion_id: &str) -> Option<usize> {
        self.criterion_ids.iter().position(|id| id == criterion_id)
    }

    /// Returns true if the matrix has no alternatives.
    pub fn is_empty(&self) -> bool {
        self.alternative_ids.is_empty()
    }

    pub fn alternative_count(&self) -> usize {
        self.alternative_ids.len()
    }

    pub fn criterion_count(&self) -> usize {
        self.criterion_ids.len()
    }
}

/// Builder for constructing DecisionMatrix instances.
#[derive(Debug, Default)]
pub struct DecisionMatrixBuilder {
    criterion_ids: Vec<String>,
    rows: Vec<(String, Vec<f64>)>,
}

impl DecisionMatrixBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the criterion columns.
    pub fn criteria(mut self, ids: Vec<impl Into<String>>) -> Self {
        self.criterion_ids = ids.into_iter().map(|s| s.into()).collect();
        self
    }

    /// Appends an alternative row.
    pub fn row(mut self, alternative_id: impl Into<String>, values: Vec<f64>) -> Self {
        self.rows.push((alternative_id.into(), values));
        self
    }

    /// Builds the matrix, validating names and row shapes.
    pub fn build(self) -> Result<DecisionMatrix, AnalysisError> {
        let mut matrix = DecisionMatrix::with_criteria(self.criterion_ids)?;
        for (alternative_id, values) in self.rows {
            matrix.push_row(alternative_id, values)?;
        }
        Ok(matrix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn supplier_matrix() -> DecisionMatrix {
        DecisionMatrix::builder()
            .criteria(vec!["Cost", "Quality"])
            .row("A", vec![100.0, 8.0])
            .row("B", vec![80.0, 6.0])
            .build()
            .unwrap()
    }

    #[test]
    fn default_matrix_is_empty() {
        let matrix = DecisionMatrix::default();
        assert!(matrix.is_empty());
        assert_eq!(matrix.alternative_count(), 0);
        assert_eq!(matrix.criterion_count(), 0);
    }

    #[test]
    fn builder_keeps_insertion_order() {
        let matrix = supplier_matrix();
        assert_eq!(matrix.alternative_ids(), &["A".to_string(), "B".to_string()]);
        assert_eq!(matrix.criterion_ids(), &["Cost".to_string(), "Quality".to_string()]);
        assert_eq!(matrix.row(1), Some(&[80.0, 6.0][..]));
    }

    #[test]
    fn value_looks_up_by_names() {
        let matrix = supplier_matrix();
        assert_eq!(matrix.value("A", "Quality"), Some(8.0));
        assert_eq!(matrix.value("C", "Quality"), None);
        assert_eq!(matrix.value("A", "Delivery"), None);
    }

    #[test]
    fn column_returns_values_in_row_order() {
        let matrix = supplier_matrix();
        assert_eq!(matrix.column(0), Some(vec![100.0, 80.0]));
        assert_eq!(matrix.column(2), None);
    }

    #[test]
    fn push_row_rejects_duplicate_alternative() {
        let mut matrix = supplier_matrix();
        let err = matrix.push_row("A", vec![1.0, 1.0]).unwrap_err();
        assert!(matches!(
            err,
            AnalysisError::DuplicateName {
                kind: NameKind::Alternative,
                ..
            }
        ));
        assert_eq!(matrix.alternative_count(), 2);
    }

    #[test]
    fn push_row_rejects_ragged_row() {
        let mut matrix = supplier_matrix();
        assert!(matches!(
            matrix.push_row("C", vec![1.0]),
            Err(AnalysisError::InvalidInput { .. })
        ));
    }

    #[test]
    fn push_row_rejects_non_finite_value() {
        let mut matrix = supplier_matrix();
        assert!(matrix.push_row("C", vec![f64::NAN, 1.0]).is_err());
        assert!(matrix.push_row("C", vec![1.0, f64::INFINITY]).is_err());
    }

    #[test]
    fn duplicate_criterion_is_rejected() {
        let err = DecisionMatrix::with_criteria(["Cost", "Cost"]).unwrap_err();
        assert!(matches!(
            err,
            AnalysisError::DuplicateName {
                kind: NameKind::Criterion,
                ..
            }
        ));
    }

    #[test]
    fn ensure_scorable_requires_rows_and_columns() {
        let no_rows = DecisionMatrix::with_criteria(["Cost"]).unwrap();
        assert!(no_rows.ensure_scorable().is_err());

        let no_columns = DecisionMatrix::default();
        assert!(no_columns.ensure_scorable().is_err());

        assert!(supplier_matrix().ensure_scorable().is_ok());
    }

    #[test]
    fn matrix_round_trips_through_json() {
        let matrix = supplier_matrix();
        let json = serde_json::to_string(&matrix).unwrap();
        assert!(json.contains("alternative_ids"));
        let back: DecisionMatrix = serde_json::from_str(&json).unwrap();
        assert_eq!(back, matrix);
    }

    #[test]
    fn deserialization_rejects_ragged_rows() {
        let json = r#"{
            "alternative_ids": ["A", "B"],
            "criterion_ids": ["Cost"],
            "values": [[1.0], [2.0, 3.0]]
        }"#;
        assert!(serde_json::from_str::<DecisionMatrix>(json).is_err());
    }
}
