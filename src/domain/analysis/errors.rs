//! Error types for the analysis engines and the matrix import boundary.

use std::fmt;
use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode, ValidationError};

/// Which kind of named entity collided.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameKind {
    Criterion,
    Alternative,
    Supplier,
    Level,
}

impl fmt::Display for NameKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            NameKind::Criterion => "criterion",
            NameKind::Alternative => "alternative",
            NameKind::Supplier => "supplier",
            NameKind::Level => "level",
        };
        write!(f, "{}", s)
    }
}

/// Errors raised while parsing a tabular file into a decision matrix.
#[derive(Debug, Error)]
pub enum ImportError {
    #[error("Failed to read matrix file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed delimited text: {0}")]
    Csv(#[from] csv::Error),

    #[error("Malformed JSON matrix: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unreadable spreadsheet: {0}")]
    Spreadsheet(#[from] calamine::XlsxError),

    #[error("Matrix file has no header row")]
    MissingHeader,

    #[error("Row {row}, column '{column}': '{value}' is not a number")]
    InvalidNumber {
        row: usize,
        column: String,
        value: String,
    },

    #[error("Unsupported matrix format: {0}")]
    UnsupportedFormat(String),

    #[error("Imported matrix has an invalid shape: {0}")]
    Shape(String),
}

/// Errors that stop a ranking computation.
///
/// All variants are terminal for the computation that raised them; the
/// caller corrects the input and recomputes.
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("Invalid input: {reason}")]
    InvalidInput { reason: String },

    #[error("Duplicate {kind} name '{name}'")]
    DuplicateName { kind: NameKind, name: String },

    #[error("Import failed: {0}")]
    Import(#[from] ImportError),

    #[error("At least {required} alternatives are required, got {actual}")]
    InsufficientAlternatives { required: usize, actual: usize },

    #[error("Workflow error: {0}")]
    Workflow(#[from] ValidationError),
}

impl AnalysisError {
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        AnalysisError::InvalidInput {
            reason: reason.into(),
        }
    }

    pub fn duplicate(kind: NameKind, name: impl Into<String>) -> Self {
        AnalysisError::DuplicateName {
            kind,
            name: name.into(),
        }
    }

    pub fn insufficient_alternatives(required: usize, actual: usize) -> Self {
        AnalysisError::InsufficientAlternatives { required, actual }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            AnalysisError::InvalidInput { .. } => ErrorCode::InvalidInput,
            AnalysisError::DuplicateName { .. } => ErrorCode::DuplicateName,
            AnalysisError::Import(_) => ErrorCode::ImportFailed,
            AnalysisError::InsufficientAlternatives { .. } => ErrorCode::InsufficientAlternatives,
            AnalysisError::Workflow(_) => ErrorCode::InvalidStateTransition,
        }
    }
}

impl From<AnalysisError> for DomainError {
    fn from(err: AnalysisError) -> Self {
        let code = err.code();
        let domain = DomainError::new(code, err.to_string());
        match err {
            AnalysisError::DuplicateName { kind, name } => domain
                .with_detail("kind", kind.to_string())
                .with_detail("name", name),
            AnalysisError::InsufficientAlternatives { required, actual } => domain
                .with_detail("required", required.to_string())
                .with_detail("actual", actual.to_string()),
            _ => domain,
        }
    }
}
