//! Analysis command handlers.
//!
//! - `CalculateVikorHandler` - ranks a decision matrix with VIKOR
//! - `CalculatePrometheeHandler` - ranks rated suppliers with PROMETHEE
//! - `ImportMatrixHandler` - loads a decision matrix from a file

mod calculate_promethee;
mod calculate_vikor;
mod import_matrix;

pub use calculate_promethee::{CalculatePrometheeCommand, CalculatePrometheeHandler};
pub use calculate_vikor::{CalculateVikorCommand, CalculateVikorHandler};
pub use import_matrix::ImportMatrixHandler;
