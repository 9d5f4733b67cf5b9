//! JSON renderer - pretty-printed reports for machine consumers.

use crate::domain::analysis::{AnalysisReport, FlowResult, RankedResult};
use crate::ports::{RenderError, ResultRenderer};

#[derive(Debug, Clone, Copy, Default)]
pub struct JsonRenderer;

impl ResultRenderer for JsonRenderer {
    fn render_vikor(&self, report: &AnalysisReport<RankedResult>) -> Result<String, RenderError> {
        Ok(serde_json::to_string_pretty(report)?)
    }

    fn render_promethee(&self, report: &AnalysisReport<FlowResult>) -> Result<String, RenderError> {
        Ok(serde_json::to_string_pretty(report)?)
    }
}
