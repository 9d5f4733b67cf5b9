//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, enums, and error types
//! that form the vocabulary of the supplier ranking domain.

mod direction;
mod errors;
mod ids;
mod percentage;
mod state_machine;
mod timestamp;

pub use direction::Direction;
pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::ReportId;
pub use percentage::Percentage;
pub use state_machine::StateMachine;
pub use timestamp::Timestamp;
