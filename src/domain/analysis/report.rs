//! AnalysisReport - a computed ranking stamped with identity and time.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::{ReportId, Timestamp};

/// Ranking method that produced a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnalysisMethod {
    Vikor,
    Promethee,
}

impl fmt::Display for AnalysisMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            AnalysisMethod::Vikor => "VIKOR",
            AnalysisMethod::Promethee => "PROMETHEE",
        };
        write!(f, "{}", s)
    }
}

/// Result of one ranking computation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport<T> {
    pub report_id: ReportId,
    pub method: AnalysisMethod,
    pub computed_at: Timestamp,
    pub result: T,
}

impl<T> AnalysisReport<T> {
    /// Wraps a fresh result with a new id and the current time.
    pub fn new(method: AnalysisMethod, result: T) -> Self {
        Self {
            report_id: ReportId::new(),
            method,
            computed_at: Timestamp::now(),
            result,
        }
    }
}
