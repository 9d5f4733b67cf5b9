//! Workflow Module - session objects that own in-progress ranking inputs.
//!
//! Each workflow collects criteria and alternatives step by step, validates
//! them as they arrive and hands them to the pure engines in `analysis`.

mod promethee_workflow;
mod vikor_workflow;

pub use promethee_workflow::{PrometheeStage, PrometheeWorkflow};
pub use vikor_workflow::{align_criteria, VikorWorkflow};
