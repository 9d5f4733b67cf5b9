//! PROMETHEE engine configuration

use serde::Deserialize;

use crate::domain::analysis::LevelResolution;

/// PROMETHEE options
#[derive(Debug, Clone, Deserialize, Default)]
pub struct PrometheeConfig {
    /// Reject suppliers whose selected label matches no level
    /// instead of scoring the cell as 0
    #[serde(default)]
    pub strict_levels: bool,
}

impl PrometheeConfig {
    pub fn level_resolution(&self) -> LevelResolution {
        if self.strict_levels {
            LevelResolution::Strict
        } else {
            LevelResolution::Lenient
        }
    }
}
