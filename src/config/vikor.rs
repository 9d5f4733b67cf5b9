//! VIKOR engine configuration

use serde::Deserialize;

use crate::domain::analysis::DEFAULT_COMPROMISE_WEIGHT;

use super::error::ValidationError;

/// VIKOR defaults
#[derive(Debug, Clone, Deserialize)]
pub struct VikorConfig {
    /// Weight of the group utility strategy (v) when a request gives none
    #[serde(default = "default_compromise_weight")]
    pub compromise_weight: f64,
}

impl VikorConfig {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.compromise_weight.is_finite() || !(0.0..=1.0).contains(&self.compromise_weight) {
            return Err(ValidationError::InvalidCompromiseWeight(self.compromise_weight));
        }
        Ok(())
    }
}

impl Default for VikorConfig {
    fn default() -> Self {
        Self {
            compromise_weight: default_compromise_weight(),
        }
    }
}

fn default_compromise_weight() -> f64 {
    DEFAULT_COMPROMISE_WEIGHT
}
