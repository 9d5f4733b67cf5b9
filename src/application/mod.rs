//! Application layer - Commands and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports
//! and configuration.

pub mod handlers;

pub use handlers::{
    CalculatePrometheeCommand, CalculatePrometheeHandler, CalculateVikorCommand,
    CalculateVikorHandler, ImportMatrixHandler,
};
