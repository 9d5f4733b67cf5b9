//! PROMETHEE Analyzer - qualitative evaluation, pairwise preference and flows.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::ranking::{descending_order, min_ranks};
use super::{AnalysisError, DecisionMatrix, NameKind, RatedCriterion, Supplier};

/// Criterion weights must add up to this total.
pub const WEIGHT_TOTAL: f64 = 100.0;

/// Allowed floating deviation of the weight sum from [`WEIGHT_TOTAL`].
pub const WEIGHT_TOLERANCE: f64 = 1e-6;

/// Net flows closer than this share a rank.
pub const NET_FLOW_TIE_TOLERANCE: f64 = 1e-9;

/// What to do when a supplier's selected label matches no level.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LevelResolution {
    /// Score the cell as 0.
    #[default]
    Lenient,
    /// Reject the input with `InvalidInput`.
    Strict,
}

/// Pairwise preference index P(i, j), alternatives x alternatives.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PreferenceMatrix {
    pub alternative_ids: Vec<String>,
    /// Row i, column j holds P(i, j); the diagonal is 0.
    pub values: Vec<Vec<f64>>,
}

impl PreferenceMatrix {
    /// P(i, j) by index.
    pub fn get(&self, i: usize, j: usize) -> Option<f64> {
        self.values.get(i).and_then(|row| row.get(j)).copied()
    }

    /// P(a, b) by alternative name.
    pub fn between(&self, a: &str, b: &str) -> Option<f64> {
        let i = self.alternative_ids.iter().position(|id| id == a)?;
        let j = self.alternative_ids.iter().position(|id| id == b)?;
        self.get(i, j)
    }

    pub fn len(&self) -> usize {
        self.alternative_ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.alternative_ids.is_empty()
    }
}

/// Outranking flows and rank of one supplier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SupplierFlow {
    pub alternative_id: String,
    /// How strongly this supplier outranks the others.
    pub leaving: f64,
    /// How strongly the others outrank this supplier.
    pub entering: f64,
    pub net: f64,
    pub rank: usize,
}

/// Full PROMETHEE result, flows sorted descending by net flow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlowResult {
    pub evaluation: DecisionMatrix,
    /// Per-criterion d and H(d) behind the preference matrix.
    pub comparisons: Vec<PairwiseComparison>,
    pub preference: PreferenceMatrix,
    pub flows: Vec<SupplierFlow>,
}

impl FlowResult {
    pub fn flow_for(&self, alternative_id: &str) -> Option<&SupplierFlow> {
        self.flows.iter().find(|f| f.alternative_id == alternative_id)
    }

    /// P(a, b) by supplier name.
    pub fn preference(&self, a: &str, b: &str) -> Option<f64> {
        self.preference.between(a, b)
    }

    /// Supplier names in rank order.
    pub fn ranking(&self) -> Vec<&str> {
        self.flows.iter().map(|f| f.alternative_id.as_str()).collect()
    }
}

/// One entry of the per-criterion comparison table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PairwiseComparison {
    pub criterion: String,
    pub first: String,
    pub second: String,
    pub first_value: f64,
    pub second_value: f64,
    /// first_value - second_value
    pub difference: f64,
    /// H(difference), 0 or 1.
    pub preference: f64,
}

/// PROMETHEE computation steps.
pub struct PrometheeAnalyzer;

impl PrometheeAnalyzer {
    /// Checks criterion names are unique and weights add up to 100.
    pub fn validate_criteria(criteria: &[RatedCriterion]) -> Result<(), AnalysisError> {
        let mut seen = HashSet::new();
        for criterion in criteria {
            if !seen.insert(criterion.name.as_str()) {
                return Err(AnalysisError::duplicate(NameKind::Criterion, &criterion.name));
            }
        }

        let total: f64 = criteria.iter().map(|c| c.weight.value()).sum();
        if (total - WEIGHT_TOTAL).abs() > WEIGHT_TOLERANCE {
            return Err(AnalysisError::invalid_input(format!(
                "criterion weights must sum to {}, got {}",
                WEIGHT_TOTAL, total
            )));
        }
        Ok(())
    }

    /// Checks supplier names are non-empty and unique.
    pub fn validate_suppliers(suppliers: &[Supplier]) -> Result<(), AnalysisError> {
        let mut seen = HashSet::new();
        for supplier in suppliers {
            if supplier.name.trim().is_empty() {
                return Err(AnalysisError::invalid_input("supplier name cannot be empty"));
            }
            if !seen.insert(supplier.name.as_str()) {
                return Err(AnalysisError::duplicate(NameKind::Supplier, &supplier.name));
            }
        }
        Ok(())
    }

    /// Resolves every supplier's level selections into scores.
    ///
    /// Criteria without levels get no column. Unresolved labels score 0
    /// under [`LevelResolution::Lenient`].
    pub fn evaluation_matrix(
        criteria: &[RatedCriterion],
        suppliers: &[Supplier],
        resolution: LevelResolution,
    ) -> Result<DecisionMatrix, AnalysisError> {
        let scored: Vec<&RatedCriterion> = criteria.iter().filter(|c| c.has_levels()).collect();
        let mut matrix = DecisionMatrix::with_criteria(scored.iter().map(|c| c.name.clone()))?;

        for supplier in suppliers {
            let mut row = Vec::with_capacity(scored.len());
            for criterion in &scored {
                let label = supplier.selection(&criterion.name).unwrap_or_default();
                let score = match (criterion.score_for(label), resolution) {
                    (Some(score), _) => score,
                    (None, LevelResolution::Lenient) => 0.0,
                    (None, LevelResolution::Strict) => {
                        return Err(AnalysisError::invalid_input(format!(
                            "supplier '{}' has no valid level for criterion '{}' (selected '{}')",
                            supplier.name, criterion.name, label
                        )));
                    }
                };
                row.push(score);
            }
            matrix.push_row(supplier.name.clone(), row).map_err(|err| match err {
                AnalysisError::DuplicateName { name, .. } => {
                    AnalysisError::duplicate(NameKind::Supplier, name)
                }
                other => other,
            })?;
        }

        Ok(matrix)
    }

    /// The usual preference function: strictly better wins, anything else is 0.
    pub fn usual_preference(difference: f64) -> f64 {
        if difference > 0.0 {
            1.0
        } else {
            0.0
        }
    }

    /// Builds P(i, j) = Σ_c w_c · H(x_ic - x_jc) with `weights` as fractions
    /// aligned to the matrix columns.
    pub fn preference_matrix(
        matrix: &DecisionMatrix,
        weights: &[f64],
    ) -> Result<PreferenceMatrix, AnalysisError> {
        if weights.len() != matrix.criterion_count() {
            return Err(AnalysisError::invalid_input(format!(
                "expected {} weights, got {}",
                matrix.criterion_count(),
                weights.len()
            )));
        }

        let rows: Vec<&[f64]> = matrix.rows().map(|(_, row)| row).collect();
        let n = rows.len();
        let mut values = vec![vec![0.0; n]; n];

        for (i, row_i) in rows.iter().enumerate() {
            for (j, row_j) in rows.iter().enumerate() {
                if i == j {
                    continue;
                }
                values[i][j] = row_i
                    .iter()
                    .zip(row_j.iter())
                    .zip(weights)
                    .map(|((a, b), w)| w * Self::usual_preference(a - b))
                    .sum();
            }
        }

        Ok(PreferenceMatrix {
            alternative_ids: matrix.alternative_ids().to_vec(),
            values,
        })
    }

    /// Computes (leaving, entering, net) per alternative, in matrix order.
    ///
    /// # Errors
    /// `InsufficientAlternatives` for fewer than two alternatives.
    pub fn flows(preference: &PreferenceMatrix) -> Result<Vec<(f64, f64, f64)>, AnalysisError> {
        let n = preference.len();
        if n < 2 {
            return Err(AnalysisError::insufficient_alternatives(2, n));
        }
        let others = (n - 1) as f64;

        Ok((0..n)
            .map(|i| {
                let outgoing: f64 = (0..n).filter(|&j| j != i).map(|j| preference.values[i][j]).sum();
                let incoming: f64 = (0..n).filter(|&j| j != i).map(|j| preference.values[j][i]).sum();
                let leaving = outgoing / others;
                let entering = incoming / others;
                (leaving, entering, leaving - entering)
            })
            .collect())
    }

    /// Lists d and H(d) for every criterion and ordered pair of alternatives.
    pub fn pairwise_comparisons(matrix: &DecisionMatrix) -> Vec<PairwiseComparison> {
        let ids = matrix.alternative_ids();
        let mut comparisons = Vec::new();

        for (c, criterion) in matrix.criterion_ids().iter().enumerate() {
            let column = matrix.column(c).unwrap_or_default();
            for (i, first) in ids.iter().enumerate() {
                for (j, second) in ids.iter().enumerate() {
                    if i == j {
                        continue;
                    }
                    let difference = column[i] - column[j];
                    comparisons.push(PairwiseComparison {
                        criterion: criterion.clone(),
                        first: first.clone(),
                        second: second.clone(),
                        first_value: column[i],
                        second_value: column[j],
                        difference,
                        preference: Self::usual_preference(difference),
                    });
                }
            }
        }

        comparisons
    }
}

/// Ranks suppliers with PROMETHEE, scoring unresolved levels as 0.
pub fn compute_promethee(
    criteria: &[RatedCriterion],
    suppliers: &[Supplier],
) -> Result<FlowResult, AnalysisError> {
    compute_promethee_with(criteria, suppliers, LevelResolution::Lenient)
}

/// Ranks suppliers with PROMETHEE using the given level resolution policy.
///
/// # Errors
/// `DuplicateName` for repeated criterion or supplier names, `InvalidInput`
/// when weights do not sum to 100, `InsufficientAlternatives` for fewer than
/// two suppliers.
pub fn compute_promethee_with(
    criteria: &[RatedCriterion],
    suppliers: &[Supplier],
    resolution: LevelResolution,
) -> Result<FlowResult, AnalysisError> {
    PrometheeAnalyzer::validate_criteria(criteria)?;
    PrometheeAnalyzer::validate_suppliers(suppliers)?;
    if suppliers.len() < 2 {
        return Err(AnalysisError::insufficient_alternatives(2, suppliers.len()));
    }

    let evaluation = PrometheeAnalyzer::evaluation_matrix(criteria, suppliers, resolution)?;
    let weights: Vec<f64> = criteria
        .iter()
        .filter(|c| c.has_levels())
        .map(|c| c.weight.as_fraction())
        .collect();
    let preference = PrometheeAnalyzer::preference_matrix(&evaluation, &weights)?;
    let comparisons = PrometheeAnalyzer::pairwise_comparisons(&evaluation);
    let raw_flows = PrometheeAnalyzer::flows(&preference)?;

    let nets: Vec<f64> = raw_flows.iter().map(|(_, _, net)| *net).collect();
    let order = descending_order(&nets);
    let sorted_nets: Vec<f64> = order.iter().map(|&i| nets[i]).collect();
    let ranks = min_ranks(&sorted_nets, NET_FLOW_TIE_TOLERANCE);

    let flows = order
        .into_iter()
        .zip(ranks)
        .map(|(i, rank)| {
            let (leaving, entering, net) = raw_flows[i];
            SupplierFlow {
                alternative_id: evaluation.alternative_ids()[i].clone(),
                leaving,
                entering,
                net,
                rank,
            }
        })
        .collect();

    Ok(FlowResult {
        evaluation,
        comparisons,
        preference,
        flows,
    })
}
