//! VikorWorkflow - in-progress VIKOR inputs for one ranking session.

use std::collections::HashSet;

use crate::domain::analysis::{
    compute_vikor, AnalysisError, Criterion, DecisionMatrix, NameKind, RankedResult,
};
use crate::domain::foundation::Direction;

/// Owns the criteria and matrix being collected for a VIKOR run.
///
/// Criteria are fixed once the first alternative is added so every row
/// stays aligned with the column list.
#[derive(Debug, Clone, Default)]
pub struct VikorWorkflow {
    criteria: Vec<Criterion>,
    matrix: DecisionMatrix,
}

impl VikorWorkflow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn criteria(&self) -> &[Criterion] {
        &self.criteria
    }

    pub fn matrix(&self) -> &DecisionMatrix {
        &self.matrix
    }

    /// Adds a criterion column.
    ///
    /// # Errors
    /// `InvalidInput` once alternatives exist or for a bad name/weight,
    /// `DuplicateName` for a repeated name.
    pub fn add_criterion(
        &mut self,
        name: impl Into<String>,
        direction: Direction,
        weight: f64,
    ) -> Result<(), AnalysisError> {
        if !self.matrix.is_empty() {
            return Err(AnalysisError::invalid_input(
                "criteria cannot change after alternatives have been added",
            ));
        }
        let criterion = Criterion::new(name, direction, weight)?;
        if self.criteria.iter().any(|c| c.name == criterion.name) {
            return Err(AnalysisError::duplicate(NameKind::Criterion, criterion.name));
        }

        let mut names: Vec<String> = self.criteria.iter().map(|c| c.name.clone()).collect();
        names.push(criterion.name.clone());
        self.matrix = DecisionMatrix::with_criteria(names)?;

        tracing::debug!(
            criterion = %criterion.name,
            direction = %criterion.direction,
            "VIKOR criterion added"
        );
        self.criteria.push(criterion);
        Ok(())
    }

    /// Appends an alternative with one value per criterion, in criterion order.
    pub fn add_alternative(
        &mut self,
        name: impl Into<String>,
        values: Vec<f64>,
    ) -> Result<(), AnalysisError> {
        if self.criteria.is_empty() {
            return Err(AnalysisError::invalid_input(
                "add at least one criterion before alternatives",
            ));
        }
        self.matrix.push_row(name, values)
    }

    /// Adopts an imported matrix, discarding rows entered so far.
    pub fn replace_matrix(&mut self, matrix: DecisionMatrix) {
        tracing::debug!(
            alternatives = matrix.alternative_count(),
            criteria = matrix.criterion_count(),
            "VIKOR matrix replaced"
        );
        self.matrix = matrix;
    }

    /// Runs VIKOR with compromise weight `v`.
    ///
    /// Criteria are matched to matrix columns by name, so an imported
    /// matrix may list its columns in any order.
    pub fn calculate(&self, v: f64) -> Result<RankedResult, AnalysisError> {
        let (weights, directions) = align_criteria(&self.criteria, &self.matrix)?;
        compute_vikor(&self.matrix, &weights, &directions, v)
    }
}

/// Orders criterion weights and directions to match the matrix columns.
pub fn align_criteria(
    criteria: &[Criterion],
    matrix: &DecisionMatrix,
) -> Result<(Vec<f64>, Vec<Direction>), AnalysisError> {
    let mut seen = HashSet::new();
    for criterion in criteria {
        if !seen.insert(criterion.name.as_str()) {
            return Err(AnalysisError::duplicate(NameKind::Criterion, &criterion.name));
        }
    }

    let mut weights = Vec::with_capacity(matrix.criterion_count());
    let mut directions = Vec::with_capacity(matrix.criterion_count());
    for column in matrix.criterion_ids() {
        let criterion = criteria
            .iter()
            .find(|c| &c.name == column)
            .ok_or_else(|| {
                AnalysisError::invalid_input(format!(
                    "matrix column '{}' has no matching criterion",
                    column
                ))
            })?;
        weights.push(criterion.weight);
        directions.push(criterion.direction);
    }
    Ok((weights, directions))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::analysis::CompromiseKind;

    fn filled() -> VikorWorkflow {
        let mut wf = VikorWorkflow::new();
        wf.add_criterion("Cost", Direction::Min, 0.4).unwrap();
        wf.add_criterion("Quality", Direction::Max, 0.3).unwrap();
        wf.add_criterion("Delivery", Direction::Max, 0.3).unwrap();
        wf.add_alternative("A", vec![100.0, 8.0, 7.0]).unwrap();
        wf.add_alternative("B", vec![80.0, 6.0, 9.0]).unwrap();
        wf.add_alternative("C", vec![120.0, 9.0, 5.0]).unwrap();
        wf
    }

    #[test]
    fn calculate_ranks_collected_alternatives() {
        let result = filled().calculate(0.5).unwrap();
        assert_eq!(result.ranking(), vec!["A", "B", "C"]);
        assert_eq!(result.compromise.kind, CompromiseKind::Pair);
    }

    #[test]
    fn criterion_after_alternatives_is_rejected() {
        let mut wf = filled();
        let err = wf.add_criterion("Risk", Direction::Min, 0.1).unwrap_err();
        assert!(matches!(err, AnalysisError::InvalidInput { .. }));
        assert_eq!(wf.criteria().len(), 3);
    }

    #[test]
    fn duplicate_criterion_is_rejected() {
        let mut wf = VikorWorkflow::new();
        wf.add_criterion("Cost", Direction::Min, 1.0).unwrap();
        assert!(matches!(
            wf.add_criterion("Cost", Direction::Max, 1.0),
            Err(AnalysisError::DuplicateName { .. })
        ));
    }

    #[test]
    fn alternative_requires_criteria() {
        let mut wf = VikorWorkflow::new();
        assert!(wf.add_alternative("A", vec![]).is_err());
    }

    #[test]
    fn duplicate_alternative_is_rejected() {
        let mut wf = filled();
        assert!(matches!(
            wf.add_alternative("A", vec![1.0, 1.0, 1.0]),
            Err(AnalysisError::DuplicateName { .. })
        ));
    }

    #[test]
    fn replaced_matrix_is_aligned_by_name() {
        let mut wf = filled();
        let reordered = DecisionMatrix::builder()
            .criteria(vec!["Delivery", "Cost", "Quality"])
            .row("A", vec![7.0, 100.0, 8.0])
            .row("B", vec![9.0, 80.0, 6.0])
            .row("C", vec![5.0, 120.0, 9.0])
            .build()
            .unwrap();
        wf.replace_matrix(reordered);

        let original = filled().calculate(0.5).unwrap();
        let realigned = wf.calculate(0.5).unwrap();
        assert_eq!(original.ranking(), realigned.ranking());
        for score in &original.scores {
            let other = realigned.score_for(&score.alternative_id).unwrap();
            assert!((score.q - other.q).abs() < 1e-9);
        }
    }

    #[test]
    fn unmatched_column_is_invalid_input() {
        let mut wf = filled();
        let matrix = DecisionMatrix::builder()
            .criteria(vec!["Cost", "Risk"])
            .row("A", vec![1.0, 2.0])
            .build()
            .unwrap();
        wf.replace_matrix(matrix);
        let err = wf.calculate(0.5).unwrap_err();
        assert!(err.to_string().contains("Risk"));
    }

    #[test]
    fn empty_workflow_cannot_calculate() {
        assert!(VikorWorkflow::new().calculate(0.5).is_err());
    }
}
