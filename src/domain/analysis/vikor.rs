//! VIKOR Analyzer - group utility, individual regret and compromise ranking.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::Direction;

use super::ranking::{ascending_order, first_min_position};
use super::{AnalysisError, DecisionMatrix};

/// Substituted for zero ranges so degenerate columns and score spreads
/// never divide by zero.
pub const EPSILON: f64 = 1e-9;

/// Default weight of the group-utility term in Q.
pub const DEFAULT_COMPROMISE_WEIGHT: f64 = 0.5;

/// VIKOR scores for one alternative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VikorScore {
    pub alternative_id: String,
    /// Group utility (lower is better).
    pub s: f64,
    /// Individual regret (lower is better).
    pub r: f64,
    /// Compromise score (lower is better).
    pub q: f64,
    /// 1-based position in the ascending Q order.
    pub rank: usize,
}

/// How the compromise solution was decided.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompromiseKind {
    /// Advantage and stability both hold: A1 alone.
    Single,
    /// Only stability holds: A1 and A2.
    Pair,
    /// Stability fails: every alternative whose Q is within DQ of A1.
    CloseSet,
}

/// The compromise solution selected from the Q ranking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Compromise {
    pub kind: CompromiseKind,
    /// Members in ascending Q order; always starts with A1.
    pub alternatives: Vec<String>,
    /// Acceptable-advantage threshold, 1/(m-1).
    pub dq: f64,
    pub acceptable_advantage: bool,
    pub acceptable_stability: bool,
}

/// Full VIKOR result, scores sorted ascending by Q.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedResult {
    pub v: f64,
    pub scores: Vec<VikorScore>,
    pub compromise: Compromise,
}

impl RankedResult {
    pub fn score_for(&self, alternative_id: &str) -> Option<&VikorScore> {
        self.scores.iter().find(|s| s.alternative_id == alternative_id)
    }

    /// Alternative names in rank order.
    pub fn ranking(&self) -> Vec<&str> {
        self.scores.iter().map(|s| s.alternative_id.as_str()).collect()
    }

    pub fn best(&self) -> Option<&VikorScore> {
        self.scores.first()
    }
}

/// Best and worst value per criterion column.
#[derive(Debug, Clone, PartialEq)]
pub struct IdealPoint {
    pub best: Vec<f64>,
    pub worst: Vec<f64>,
}

/// VIKOR computation steps.
pub struct VikorAnalyzer;

impl VikorAnalyzer {
    /// Scales weights so they sum to 1.
    ///
    /// # Errors
    /// Negative or non-finite weights, an empty vector, or a zero sum.
    pub fn normalize_weights(weights: &[f64]) -> Result<Vec<f64>, AnalysisError> {
        if weights.is_empty() {
            return Err(AnalysisError::invalid_input("weight vector is empty"));
        }
        if let Some(bad) = weights.iter().find(|w| !w.is_finite() || **w < 0.0) {
            return Err(AnalysisError::invalid_input(format!(
                "weights must be finite and non-negative, got {}",
                bad
            )));
        }
        let sum: f64 = weights.iter().sum();
        if sum <= 0.0 {
            return Err(AnalysisError::invalid_input("weights sum to zero"));
        }
        Ok(weights.iter().map(|w| w / sum).collect())
    }

    /// Determines the best and worst value of every column.
    ///
    /// Expects one direction per column of a non-empty matrix.
    pub fn ideal_and_anti_ideal(matrix: &DecisionMatrix, directions: &[Direction]) -> IdealPoint {
        let mut best = Vec::with_capacity(directions.len());
        let mut worst = Vec::with_capacity(directions.len());

        for (j, direction) in directions.iter().enumerate() {
            let column = matrix.column(j).unwrap_or_default();
            let min = column.iter().copied().fold(f64::INFINITY, f64::min);
            let max = column.iter().copied().fold(f64::NEG_INFINITY, f64::max);
            let (b, w) = direction.ideal_and_anti_ideal(min, max);
            best.push(b);
            worst.push(w);
        }

        IdealPoint { best, worst }
    }

    /// Computes S (sum) and R (max) of the weighted normalized distances
    /// to the ideal, one pair per row.
    pub fn group_utility_and_regret(
        matrix: &DecisionMatrix,
        weights: &[f64],
        ideal: &IdealPoint,
    ) -> (Vec<f64>, Vec<f64>) {
        let ranges: Vec<f64> = ideal
            .best
            .iter()
            .zip(&ideal.worst)
            .map(|(b, w)| {
                let diff = b - w;
                if diff == 0.0 {
                    EPSILON
                } else {
                    diff
                }
            })
            .collect();

        matrix
            .rows()
            .map(|(_, row)| {
                let distances = row
                    .iter()
                    .zip(weights)
                    .zip(ideal.best.iter().zip(&ranges))
                    .map(|((value, weight), (best, range))| weight * (best - value) / range);

                distances.fold((0.0, f64::NEG_INFINITY), |(s, r), d| (s + d, r.max(d)))
            })
            .unzip()
    }

    /// Blends normalized S and R into Q with compromise weight `v`.
    pub fn compromise_scores(s: &[f64], r: &[f64], v: f64) -> Vec<f64> {
        let (s_min, s_max) = min_max(s);
        let (r_min, r_max) = min_max(r);

        s.iter()
            .zip(r)
            .map(|(si, ri)| {
                v * (si - s_min) / (s_max - s_min + EPSILON)
                    + (1.0 - v) * (ri - r_min) / (r_max - r_min + EPSILON)
            })
            .collect()
    }

    /// Applies the acceptable-advantage / acceptable-stability rule to
    /// scores sorted ascending by Q. Returns None for an empty list.
    pub fn select_compromise(sorted: &[VikorScore]) -> Option<Compromise> {
        let first = sorted.first()?;
        let m = sorted.len();
        let dq = if m > 1 { 1.0 / (m as f64 - 1.0) } else { 0.0 };

        let acceptable_advantage = match sorted.get(1) {
            Some(second) => second.q - first.q >= dq,
            None => true,
        };

        let s_values: Vec<f64> = sorted.iter().map(|x| x.s).collect();
        let r_values: Vec<f64> = sorted.iter().map(|x| x.r).collect();
        let acceptable_stability =
            first_min_position(&s_values) == Some(0) || first_min_position(&r_values) == Some(0);

        let (kind, alternatives) = if acceptable_advantage && acceptable_stability {
            (CompromiseKind::Single, vec![first.alternative_id.clone()])
        } else if acceptable_stability {
            // Advantage can only fail with at least two alternatives.
            let members: Vec<String> = sorted
                .iter()
                .take(2)
                .map(|x| x.alternative_id.clone())
                .collect();
            (CompromiseKind::Pair, members)
        } else {
            let mut members = vec![first.alternative_id.clone()];
            members.extend(
                sorted
                    .iter()
                    .skip(1)
                    .filter(|x| x.q - first.q < dq)
                    .map(|x| x.alternative_id.clone()),
            );
            (CompromiseKind::CloseSet, members)
        };

        Some(Compromise {
            kind,
            alternatives,
            dq,
            acceptable_advantage,
            acceptable_stability,
        })
    }
}

fn min_max(values: &[f64]) -> (f64, f64) {
    values
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &x| (lo.min(x), hi.max(x)))
}

/// Ranks the alternatives of `matrix` with VIKOR.
///
/// `weights` and `directions` are aligned with the matrix columns; `v` is the
/// compromise weight in [0, 1]. Inputs are never mutated.
///
/// # Errors
/// `InvalidInput` for an empty matrix, mismatched vector lengths, invalid
/// weights or `v` outside [0, 1].
pub fn compute_vikor(
    matrix: &DecisionMatrix,
    weights: &[f64],
    directions: &[Direction],
    v: f64,
) -> Result<RankedResult, AnalysisError> {
    matrix.ensure_scorable()?;

    let columns = matrix.criterion_count();
    if weights.len() != columns {
        return Err(AnalysisError::invalid_input(format!(
            "expected {} weights, got {}",
            columns,
            weights.len()
        )));
    }
    if directions.len() != columns {
        return Err(AnalysisError::invalid_input(format!(
            "expected {} directions, got {}",
            columns,
            directions.len()
        )));
    }
    if !v.is_finite() || !(0.0..=1.0).contains(&v) {
        return Err(AnalysisError::invalid_input(format!(
            "compromise weight v must be within [0, 1], got {}",
            v
        )));
    }

    let weights = VikorAnalyzer::normalize_weights(weights)?;
    let ideal = VikorAnalyzer::ideal_and_anti_ideal(matrix, directions);
    let (s, r) = VikorAnalyzer::group_utility_and_regret(matrix, &weights, &ideal);
    let q = VikorAnalyzer::compromise_scores(&s, &r, v);

    let scores: Vec<VikorScore> = ascending_order(&q)
        .into_iter()
        .enumerate()
        .map(|(position, i)| VikorScore {
            alternative_id: matrix.alternative_ids()[i].clone(),
            s: s[i],
            r: r[i],
            q: q[i],
            rank: position + 1,
        })
        .collect();

    let compromise = VikorAnalyzer::select_compromise(&scores)
        .ok_or_else(|| AnalysisError::invalid_input("decision matrix has no alternatives"))?;

    Ok(RankedResult {
        v,
        scores,
        compromise,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-6;

    fn supplier_matrix() -> DecisionMatrix {
        DecisionMatrix::builder()
            .criteria(vec!["Cost", "Quality", "Delivery"])
            .row("A", vec![100.0, 8.0, 7.0])
            .row("B", vec![80.0, 6.0, 9.0])
            .row("C", vec![120.0, 9.0, 5.0])
            .build()
            .unwrap()
    }

    fn directions() -> Vec<Direction> {
        vec![Direction::Min, Direction::Max, Direction::Max]
    }

    fn score(id: &str, s: f64, r: f64, q: f64, rank: usize) -> VikorScore {
        VikorScore {
            alternative_id: id.to_string(),
            s,
            r,
            q,
            rank,
        }
    }

    // Weight normalization

    #[test]
    fn normalize_weights_sums_to_one() {
        let w = VikorAnalyzer::normalize_weights(&[2.0, 3.0, 5.0]).unwrap();
        assert!((w.iter().sum::<f64>() - 1.0).abs() < TOL);
        assert!((w[2] - 0.5).abs() < TOL);
    }

    #[test]
    fn normalize_weights_rejects_zero_sum() {
        assert!(matches!(
            VikorAnalyzer::normalize_weights(&[0.0, 0.0]),
            Err(AnalysisError::InvalidInput { .. })
        ));
    }

    #[test]
    fn normalize_weights_rejects_negative() {
        assert!(VikorAnalyzer::normalize_weights(&[0.5, -0.1]).is_err());
    }

    // Ideal point

    #[test]
    fn ideal_point_follows_direction() {
        let ideal = VikorAnalyzer::ideal_and_anti_ideal(&supplier_matrix(), &directions());
        assert_eq!(ideal.best, vec![80.0, 9.0, 9.0]);
        assert_eq!(ideal.worst, vec![120.0, 6.0, 5.0]);
    }

    // S and R

    #[test]
    fn group_utility_and_regret_match_hand_computation() {
        let matrix = supplier_matrix();
        let ideal = VikorAnalyzer::ideal_and_anti_ideal(&matrix, &directions());
        let (s, r) = VikorAnalyzer::group_utility_and_regret(&matrix, &[0.4, 0.3, 0.3], &ideal);

        assert!((s[0] - 0.45).abs() < TOL);
        assert!((s[1] - 0.30).abs() < TOL);
        assert!((s[2] - 0.70).abs() < TOL);
        assert!((r[0] - 0.20).abs() < TOL);
        assert!((r[1] - 0.30).abs() < TOL);
        assert!((r[2] - 0.40).abs() < TOL);
    }

    #[test]
    fn constant_column_contributes_nothing() {
        let matrix = DecisionMatrix::builder()
            .criteria(vec!["Flat", "Price"])
            .row("A", vec![5.0, 10.0])
            .row("B", vec![5.0, 20.0])
            .build()
            .unwrap();
        let dirs = [Direction::Max, Direction::Min];
        let ideal = VikorAnalyzer::ideal_and_anti_ideal(&matrix, &dirs);
        let (s, r) = VikorAnalyzer::group_utility_and_regret(&matrix, &[0.5, 0.5], &ideal);

        assert_eq!(s[0], 0.0);
        assert!((s[1] - 0.5).abs() < TOL);
        assert!((r[1] - 0.5).abs() < TOL);
    }

    // Q

    #[test]
    fn compromise_scores_span_zero_to_one() {
        let q = VikorAnalyzer::compromise_scores(&[0.45, 0.30, 0.70], &[0.20, 0.30, 0.40], 0.5);
        assert!((q[0] - 0.1875).abs() < TOL);
        assert!((q[1] - 0.25).abs() < TOL);
        assert!((q[2] - 1.0).abs() < TOL);
    }

    #[test]
    fn equal_scores_give_zero_q() {
        let q = VikorAnalyzer::compromise_scores(&[0.3, 0.3], &[0.2, 0.2], 0.5);
        assert_eq!(q, vec![0.0, 0.0]);
    }

    // Compromise selection

    #[test]
    fn single_alternative_is_its_own_compromise() {
        let sorted = vec![score("A", 0.0, 0.0, 0.0, 1)];
        let compromise = VikorAnalyzer::select_compromise(&sorted).unwrap();
        assert_eq!(compromise.kind, CompromiseKind::Single);
        assert_eq!(compromise.dq, 0.0);
        assert_eq!(compromise.alternatives, vec!["A"]);
    }

    #[test]
    fn clear_winner_is_single_compromise() {
        let sorted = vec![
            score("A", 0.0, 0.0, 0.0, 1),
            score("B", 0.8, 0.5, 0.9, 2),
            score("C", 1.0, 0.6, 1.0, 3),
        ];
        let compromise = VikorAnalyzer::select_compromise(&sorted).unwrap();
        assert_eq!(compromise.kind, CompromiseKind::Single);
        assert!(compromise.acceptable_advantage);
        assert!(compromise.acceptable_stability);
    }

    #[test]
    fn close_runner_up_forms_pair() {
        let sorted = vec![
            score("A", 0.1, 0.3, 0.1, 1),
            score("B", 0.2, 0.2, 0.2, 2),
            score("C", 0.9, 0.6, 1.0, 3),
        ];
        let compromise = VikorAnalyzer::select_compromise(&sorted).unwrap();
        assert_eq!(compromise.kind, CompromiseKind::Pair);
        assert_eq!(compromise.alternatives, vec!["A", "B"]);
    }

    #[test]
    fn unstable_leader_yields_close_set() {
        let sorted = vec![
            score("A", 0.4, 0.4, 0.10, 1),
            score("B", 0.2, 0.2, 0.30, 2),
            score("C", 0.3, 0.3, 0.55, 3),
            score("D", 0.9, 0.9, 0.70, 4),
        ];
        let compromise = VikorAnalyzer::select_compromise(&sorted).unwrap();
        assert!(!compromise.acceptable_stability);
        assert_eq!(compromise.kind, CompromiseKind::CloseSet);
        // DQ = 1/3, so C (0.45 behind) and D are excluded.
        assert_eq!(compromise.alternatives, vec!["A", "B"]);
    }

    #[test]
    fn empty_list_has_no_compromise() {
        assert!(VikorAnalyzer::select_compromise(&[]).is_none());
    }

    // Full computation

    #[test]
    fn compute_vikor_ranks_supplier_scenario() {
        let result =
            compute_vikor(&supplier_matrix(), &[0.4, 0.3, 0.3], &directions(), 0.5).unwrap();

        assert_eq!(result.ranking(), vec!["A", "B", "C"]);
        assert_eq!(result.score_for("C").unwrap().rank, 3);
        assert_eq!(result.compromise.kind, CompromiseKind::Pair);
        assert_eq!(result.compromise.alternatives, vec!["A", "B"]);
        assert!((result.compromise.dq - 0.5).abs() < TOL);
    }

    #[test]
    fn compute_vikor_rejects_mismatched_lengths() {
        let matrix = supplier_matrix();
        assert!(compute_vikor(&matrix, &[0.5, 0.5], &directions(), 0.5).is_err());
        assert!(compute_vikor(&matrix, &[0.4, 0.3, 0.3], &[Direction::Max], 0.5).is_err());
    }

    #[test]
    fn compute_vikor_rejects_empty_matrix() {
        let matrix = DecisionMatrix::with_criteria(["Cost"]).unwrap();
        let err = compute_vikor(&matrix, &[1.0], &[Direction::Min], 0.5).unwrap_err();
        assert!(err.to_string().contains("no alternatives"));
    }

    #[test]
    fn compute_vikor_rejects_out_of_range_v() {
        let matrix = supplier_matrix();
        assert!(compute_vikor(&matrix, &[0.4, 0.3, 0.3], &directions(), 1.5).is_err());
        assert!(compute_vikor(&matrix, &[0.4, 0.3, 0.3], &directions(), f64::NAN).is_err());
    }

    #[test]
    fn compute_vikor_rejects_all_zero_weights() {
        let matrix = supplier_matrix();
        assert!(compute_vikor(&matrix, &[0.0, 0.0, 0.0], &directions(), 0.5).is_err());
    }
}
