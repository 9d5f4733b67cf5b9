//! Plain-text table renderer for terminal output.
//!
//! Numbers are printed with three decimals; names are left-aligned in a
//! column as wide as the longest name.

use std::fmt::Write;

use crate::domain::analysis::{
    AnalysisReport, CompromiseKind, DecisionMatrix, FlowResult, PairwiseComparison, RankedResult,
};
use crate::ports::{RenderError, ResultRenderer};

const NUMBER_WIDTH: usize = 10;

#[derive(Debug, Clone, Copy, Default)]
pub struct TableRenderer;

fn name_width<'a>(header: &str, names: impl Iterator<Item = &'a str>) -> usize {
    names.map(str::len).chain(std::iter::once(header.len())).max().unwrap_or(0)
}

fn write_header<T>(out: &mut String, report: &AnalysisReport<T>) -> std::fmt::Result {
    writeln!(out, "{} ranking ({})", report.method, report.computed_at)?;
    writeln!(out, "Report {}", report.report_id)?;
    writeln!(out)
}

/// Suppliers by criteria, resolved level scores.
fn write_evaluation(out: &mut String, matrix: &DecisionMatrix) -> std::fmt::Result {
    let width = name_width("Supplier", matrix.alternative_ids().iter().map(String::as_str));
    writeln!(out, "Evaluation matrix")?;
    write!(out, "{:<width$}", "Supplier", width = width)?;
    for criterion in matrix.criterion_ids() {
        let cw = criterion.len().max(NUMBER_WIDTH);
        write!(out, "  {:>cw$}", criterion, cw = cw)?;
    }
    writeln!(out)?;
    for (id, row) in matrix.rows() {
        write!(out, "{:<width$}", id, width = width)?;
        for (criterion, value) in matrix.criterion_ids().iter().zip(row) {
            let cw = criterion.len().max(NUMBER_WIDTH);
            write!(out, "  {:>cw$.3}", value, cw = cw)?;
        }
        writeln!(out)?;
    }
    Ok(())
}

/// One block per criterion listing d and H(d) for every ordered pair.
fn write_comparisons(out: &mut String, comparisons: &[PairwiseComparison]) -> std::fmt::Result {
    let pairs: Vec<String> = comparisons
        .iter()
        .map(|c| format!("{} vs {}", c.first, c.second))
        .collect();
    let width = name_width("Pair", pairs.iter().map(String::as_str));

    writeln!(out, "Pairwise comparisons by criterion")?;
    let mut current: Option<&str> = None;
    for (comparison, pair) in comparisons.iter().zip(&pairs) {
        if current != Some(comparison.criterion.as_str()) {
            current = Some(comparison.criterion.as_str());
            writeln!(out, "[{}]", comparison.criterion)?;
            writeln!(
                out,
                "{:<width$}  {:>nw$}  {:>nw$}",
                "Pair",
                "d",
                "H(d)",
                width = width,
                nw = NUMBER_WIDTH
            )?;
        }
        writeln!(
            out,
            "{:<width$}  {:>nw$.3}  {:>nw$.3}",
            pair,
            comparison.difference,
            comparison.preference,
            width = width,
            nw = NUMBER_WIDTH
        )?;
    }
    Ok(())
}

impl ResultRenderer for TableRenderer {
    fn render_vikor(&self, report: &AnalysisReport<RankedResult>) -> Result<String, RenderError> {
        let result = &report.result;
        let width = name_width(
            "Alternative",
            result.scores.iter().map(|s| s.alternative_id.as_str()),
        );
        let mut out = String::new();

        write_header(&mut out, report)?;
        writeln!(out, "v = {:.3}", result.v)?;
        writeln!(
            out,
            "{:<width$}  {:>nw$}  {:>nw$}  {:>nw$}  {:>4}",
            "Alternative",
            "S",
            "R",
            "Q",
            "Rank",
            width = width,
            nw = NUMBER_WIDTH
        )?;
        for score in &result.scores {
            writeln!(
                out,
                "{:<width$}  {:>nw$.3}  {:>nw$.3}  {:>nw$.3}  {:>4}",
                score.alternative_id,
                score.s,
                score.r,
                score.q,
                score.rank,
                width = width,
                nw = NUMBER_WIDTH
            )?;
        }

        let compromise = &result.compromise;
        let label = match compromise.kind {
            CompromiseKind::Single => "single best alternative",
            CompromiseKind::Pair => "pair (acceptable advantage not met)",
            CompromiseKind::CloseSet => "close set (acceptable stability not met)",
        };
        writeln!(out)?;
        writeln!(
            out,
            "Compromise solution: {} [{}]",
            compromise.alternatives.join(", "),
            label
        )?;
        writeln!(
            out,
            "DQ = {:.3}, advantage: {}, stability: {}",
            compromise.dq, compromise.acceptable_advantage, compromise.acceptable_stability
        )?;
        Ok(out)
    }

    fn render_promethee(&self, report: &AnalysisReport<FlowResult>) -> Result<String, RenderError> {
        let result = &report.result;
        let ids = &result.preference.alternative_ids;
        let width = name_width("Supplier", ids.iter().map(String::as_str));
        let mut out = String::new();

        write_header(&mut out, report)?;
        writeln!(
            out,
            "{:<width$}  {:>nw$}  {:>nw$}  {:>nw$}  {:>4}",
            "Supplier",
            "Leaving",
            "Entering",
            "Net",
            "Rank",
            width = width,
            nw = NUMBER_WIDTH
        )?;
        for flow in &result.flows {
            writeln!(
                out,
                "{:<width$}  {:>nw$.3}  {:>nw$.3}  {:>nw$.3}  {:>4}",
                flow.alternative_id,
                flow.leaving,
                flow.entering,
                flow.net,
                flow.rank,
                width = width,
                nw = NUMBER_WIDTH
            )?;
        }

        writeln!(out)?;
        write_evaluation(&mut out, &result.evaluation)?;
        writeln!(out)?;
        write_comparisons(&mut out, &result.comparisons)?;

        writeln!(out)?;
        writeln!(out, "Preference matrix P(row, column)")?;
        let column_width = ids.iter().map(String::len).max().unwrap_or(0).max(NUMBER_WIDTH);
        write!(out, "{:<width$}", "", width = width)?;
        for id in ids {
            write!(out, "  {:>cw$}", id, cw = column_width)?;
        }
        writeln!(out)?;
        for (i, id) in ids.iter().enumerate() {
            write!(out, "{:<width$}", id, width = width)?;
            for j in 0..ids.len() {
                let value = result.preference.get(i, j).unwrap_or_default();
                write!(out, "  {:>cw$.3}", value, cw = column_width)?;
            }
            writeln!(out)?;
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::analysis::{
        compute_promethee, compute_vikor, AnalysisMethod, DecisionMatrix, RatedCriterion, Supplier,
    };
    use crate::domain::foundation::Direction;

    fn vikor_report() -> AnalysisReport<RankedResult> {
        let matrix = DecisionMatrix::builder()
            .criteria(vec!["Cost", "Quality", "Delivery"])
            .row("A", vec![100.0, 8.0, 7.0])
            .row("B", vec![80.0, 6.0, 9.0])
            .row("C", vec![120.0, 9.0, 5.0])
            .build()
            .unwrap();
        let result = compute_vikor(
            &matrix,
            &[0.4, 0.3, 0.3],
            &[Direction::Min, Direction::Max, Direction::Max],
            0.5,
        )
        .unwrap();
        AnalysisReport::new(AnalysisMethod::Vikor, result)
    }

    #[test]
    fn vikor_table_lists_scores_in_rank_order() {
        let text = TableRenderer.render_vikor(&vikor_report()).unwrap();
        let a = text.find("\nA ").unwrap();
        let b = text.find("\nB ").unwrap();
        let c = text.find("\nC ").unwrap();
        assert!(a < b && b < c);
        assert!(text.contains("0.250"));
        assert!(text.contains("Compromise solution: A, B [pair"));
        assert!(text.contains("DQ = 0.500"));
    }

    #[test]
    fn promethee_table_includes_preference_matrix() {
        let criterion = |name: &str| {
            RatedCriterion::new(name, 50.0)
                .and_then(|c| c.with_level("Low", 1.0))
                .and_then(|c| c.with_level("High", 3.0))
                .unwrap()
        };
        let criteria = vec![criterion("Quality"), criterion("Service")];
        let suppliers = vec![
            Supplier::new("Northwind")
                .with_selection("Quality", "High")
                .with_selection("Service", "High"),
            Supplier::new("Contoso")
                .with_selection("Quality", "Low")
                .with_selection("Service", "Low"),
        ];
        let result = compute_promethee(&criteria, &suppliers).unwrap();
        let report = AnalysisReport::new(AnalysisMethod::Promethee, result);

        let text = TableRenderer.render_promethee(&report).unwrap();
        assert!(text.starts_with("PROMETHEE ranking"));
        assert!(text.contains("Preference matrix"));
        assert!(text.contains("-1.000"));
        let row = text
            .lines()
            .find(|l| l.starts_with("Northwind") && l.contains("1.000") && !l.contains("-"))
            .unwrap();
        assert_eq!(row.split_whitespace().last(), Some("1"));
    }

    #[test]
    fn promethee_table_shows_evaluation_and_pairwise_detail() {
        let criterion = |name: &str, weight: f64| {
            RatedCriterion::new(name, weight)
                .and_then(|c| c.with_level("Low", 1.0))
                .and_then(|c| c.with_level("High", 3.0))
                .unwrap()
        };
        let criteria = vec![criterion("Quality", 60.0), criterion("Service", 40.0)];
        let suppliers = vec![
            Supplier::new("Acme")
                .with_selection("Quality", "High")
                .with_selection("Service", "Low"),
            Supplier::new("Globex")
                .with_selection("Quality", "Low")
                .with_selection("Service", "High"),
        ];
        let result = compute_promethee(&criteria, &suppliers).unwrap();
        let report = AnalysisReport::new(AnalysisMethod::Promethee, result);
        let text = TableRenderer.render_promethee(&report).unwrap();

        let evaluation = text.find("Evaluation matrix").unwrap();
        let pairwise = text.find("Pairwise comparisons by criterion").unwrap();
        let preference = text.find("Preference matrix").unwrap();
        assert!(evaluation < pairwise && pairwise < preference);

        let acme_scores: Vec<&str> = text[evaluation..pairwise]
            .lines()
            .find(|l| l.starts_with("Acme"))
            .unwrap()
            .split_whitespace()
            .collect();
        assert_eq!(acme_scores, vec!["Acme", "3.000", "1.000"]);

        let detail = &text[pairwise..preference];
        let quality = detail.find("[Quality]").unwrap();
        let service = detail.find("[Service]").unwrap();
        assert!(quality < service);
        let quality_rows: Vec<Vec<&str>> = detail[quality..service]
            .lines()
            .filter(|l| l.contains(" vs "))
            .map(|l| l.split_whitespace().collect())
            .collect();
        assert_eq!(
            quality_rows,
            vec![
                vec!["Acme", "vs", "Globex", "2.000", "1.000"],
                vec!["Globex", "vs", "Acme", "-2.000", "0.000"],
            ]
        );
    }
}
