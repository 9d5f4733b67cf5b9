//! CalculateVikorHandler - Command handler for VIKOR rankings.

use tracing::{debug, info};

use crate::config::VikorConfig;
use crate::domain::analysis::{
    compute_vikor, AnalysisError, AnalysisMethod, AnalysisReport, Criterion, DecisionMatrix,
    RankedResult,
};
use crate::domain::workflow::align_criteria;

/// Command to rank a decision matrix with VIKOR.
#[derive(Debug, Clone)]
pub struct CalculateVikorCommand {
    pub matrix: DecisionMatrix,
    /// Matched to matrix columns by name.
    pub criteria: Vec<Criterion>,
    /// Compromise weight; the configured default when absent.
    pub v: Option<f64>,
}

/// Handler for VIKOR calculations.
pub struct CalculateVikorHandler {
    config: VikorConfig,
}

impl CalculateVikorHandler {
    pub fn new(config: VikorConfig) -> Self {
        Self { config }
    }

    pub fn handle(
        &self,
        cmd: CalculateVikorCommand,
    ) -> Result<AnalysisReport<RankedResult>, AnalysisError> {
        let v = cmd.v.unwrap_or(self.config.compromise_weight);
        debug!(
            alternatives = cmd.matrix.alternative_count(),
            criteria = cmd.matrix.criterion_count(),
            v,
            "Calculating VIKOR ranking"
        );

        let (weights, directions) = align_criteria(&cmd.criteria, &cmd.matrix)?;
        let result = compute_vikor(&cmd.matrix, &weights, &directions, v)?;

        info!(
            compromise = ?result.compromise.kind,
            members = %result.compromise.alternatives.join(", "),
            "VIKOR ranking computed"
        );
        Ok(AnalysisReport::new(AnalysisMethod::Vikor, result))
    }
}
