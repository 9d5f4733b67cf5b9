//! Criterion direction value object (benefit vs cost).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ValidationError;

/// Whether larger or smaller raw values are preferred on a criterion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Benefit criterion: the column maximum is the ideal value.
    #[default]
    Max,
    /// Cost criterion: the column minimum is the ideal value.
    Min,
}

impl Direction {
    /// Returns the (best, worst) pair for a column with the given extremes.
    pub fn ideal_and_anti_ideal(&self, column_min: f64, column_max: f64) -> (f64, f64) {
        match self {
            Direction::Max => (column_max, column_min),
            Direction::Min => (column_min, column_max),
        }
    }

    /// Returns the short label used in inputs and outputs.
    pub fn label(&self) -> &'static str {
        match self {
            Direction::Max => "max",
            Direction::Min => "min",
        }
    }

    /// Returns true for benefit criteria.
    pub fn is_benefit(&self) -> bool {
        matches!(self, Direction::Max)
    }
}

impl FromStr for Direction {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "max" | "benefit" => Ok(Direction::Max),
            "min" | "cost" => Ok(Direction::Min),
            other => Err(ValidationError::invalid_format(
                "direction",
                format!("expected 'max' or 'min', got '{}'", other),
            )),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
