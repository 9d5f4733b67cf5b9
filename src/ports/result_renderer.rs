//! Result Renderer Port - Report to printable output.

use thiserror::Error;

use crate::domain::analysis::{AnalysisReport, FlowResult, RankedResult};
use crate::domain::foundation::{DomainError, ErrorCode};

/// Port for presenting ranking reports.
///
/// Implementations must render every alternative in rank order and must
/// not recompute anything; the report is the single source of numbers.
pub trait ResultRenderer: Send + Sync {
    /// Render a VIKOR report.
    ///
    /// # Errors
    ///
    /// Returns `RenderError` if the output cannot be produced.
    fn render_vikor(&self, report: &AnalysisReport<RankedResult>) -> Result<String, RenderError>;

    /// Render a PROMETHEE report.
    ///
    /// # Errors
    ///
    /// Returns `RenderError` if the output cannot be produced.
    fn render_promethee(&self, report: &AnalysisReport<FlowResult>) -> Result<String, RenderError>;
}

/// Errors that can occur while rendering a report.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Failed to serialize report: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Failed to format report: {0}")]
    Format(#[from] std::fmt::Error),
}

impl From<RenderError> for DomainError {
    fn from(err: RenderError) -> Self {
        DomainError::new(ErrorCode::RenderFailed, err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_error_converts() {
        let err: RenderError = std::fmt::Error.into();
        assert!(matches!(err, RenderError::Format(_)));
        assert!(err.to_string().starts_with("Failed to format report"));
    }

    #[test]
    fn serialization_error_converts() {
        let json_err = serde_json::from_str::<u8>("not json").unwrap_err();
        let err = RenderError::from(json_err);
        assert!(matches!(err, RenderError::Serialization(_)));
    }

    #[test]
    fn maps_to_render_failed_code() {
        let domain = DomainError::from(RenderError::Format(std::fmt::Error));
        assert_eq!(domain.code, ErrorCode::RenderFailed);
        assert!(domain.to_string().starts_with("[RENDER_FAILED] Failed to format report"));
    }
}
