//! CalculatePrometheeHandler - Command handler for PROMETHEE rankings.

use tracing::{debug, info};

use crate::config::PrometheeConfig;
use crate::domain::analysis::{
    compute_promethee_with, AnalysisError, AnalysisMethod, AnalysisReport, FlowResult,
    LevelResolution, RatedCriterion, Supplier,
};

/// Command to rank suppliers with PROMETHEE.
#[derive(Debug, Clone)]
pub struct CalculatePrometheeCommand {
    pub criteria: Vec<RatedCriterion>,
    pub suppliers: Vec<Supplier>,
    /// Overrides the configured level resolution.
    pub resolution: Option<LevelResolution>,
}

/// Handler for PROMETHEE calculations.
pub struct CalculatePrometheeHandler {
    config: PrometheeConfig,
}

impl CalculatePrometheeHandler {
    pub fn new(config: PrometheeConfig) -> Self {
        Self { config }
    }

    pub fn handle(
        &self,
        cmd: CalculatePrometheeCommand,
    ) -> Result<AnalysisReport<FlowResult>, AnalysisError> {
        let resolution = cmd
            .resolution
            .unwrap_or_else(|| self.config.level_resolution());
        debug!(
            criteria = cmd.criteria.len(),
            suppliers = cmd.suppliers.len(),
            ?resolution,
            "Calculating PROMETHEE ranking"
        );

        let result = compute_promethee_with(&cmd.criteria, &cmd.suppliers, resolution)?;

        if let Some(top) = result.flows.first() {
            info!(leader = %top.alternative_id, net_flow = top.net, "PROMETHEE ranking computed");
        }
        Ok(AnalysisReport::new(AnalysisMethod::Promethee, result))
    }
}
