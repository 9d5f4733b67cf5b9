//! Analysis Module - Pure ranking engines for supplier selection.
//!
//! # Components
//!
//! - `DecisionMatrix` - Alternatives x criteria table with an append-only builder
//! - `VikorAnalyzer` - Group utility, individual regret, compromise scores
//! - `PrometheeAnalyzer` - Level evaluation, pairwise preference, outranking flows
//! - `ranking` - Stable ordering and min-method rank assignment
//! - `AnalysisReport` - A result stamped with report id, method and time
//!
//! All functions are pure and stateless. They take validated inputs and
//! return new result values; nothing here performs I/O.

mod criteria;
mod decision_matrix;
mod errors;
mod promethee;
pub mod ranking;
mod report;
mod vikor;

pub use criteria::{Criterion, Level, RatedCriterion, Supplier};
pub use decision_matrix::{DecisionMatrix, DecisionMatrixBuilder};
pub use errors::{AnalysisError, ImportError, NameKind};
pub use promethee::{
    compute_promethee, compute_promethee_with, FlowResult, LevelResolution, PairwiseComparison,
    PreferenceMatrix, PrometheeAnalyzer, SupplierFlow, NET_FLOW_TIE_TOLERANCE, WEIGHT_TOLERANCE,
    WEIGHT_TOTAL,
};
pub use report::{AnalysisMethod, AnalysisReport};
pub use vikor::{
    compute_vikor, Compromise, CompromiseKind, IdealPoint, RankedResult, VikorAnalyzer, VikorScore,
    DEFAULT_COMPROMISE_WEIGHT, EPSILON,
};
