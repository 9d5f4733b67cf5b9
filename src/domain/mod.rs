//! Domain layer containing ranking logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, enums, errors)
//! - `analysis` - Pure VIKOR and PROMETHEE engines and the decision matrix
//! - `workflow` - Session objects collecting inputs for each method

pub mod analysis;
pub mod foundation;
pub mod workflow;
