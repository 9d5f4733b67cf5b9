//! Criteria, qualitative levels and suppliers.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::domain::foundation::{Direction, Percentage};

use super::{AnalysisError, NameKind};

/// A numeric criterion used by VIKOR.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawCriterion")]
pub struct Criterion {
    pub name: String,
    pub direction: Direction,
    pub weight: f64,
}

#[derive(Deserialize)]
struct RawCriterion {
    name: String,
    direction: Direction,
    weight: f64,
}

impl TryFrom<RawCriterion> for Criterion {
    type Error = AnalysisError;

    fn try_from(raw: RawCriterion) -> Result<Self, Self::Error> {
        Criterion::new(raw.name, raw.direction, raw.weight)
    }
}

impl Criterion {
    /// Creates a criterion, rejecting empty names and negative or non-finite weights.
    pub fn new(
        name: impl Into<String>,
        direction: Direction,
        weight: f64,
    ) -> Result<Self, AnalysisError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(AnalysisError::invalid_input("criterion name cannot be empty"));
        }
        if !weight.is_finite() || weight < 0.0 {
            return Err(AnalysisError::invalid_input(format!(
                "weight of criterion '{}' must be a finite non-negative number, got {}",
                name, weight
            )));
        }
        Ok(Self {
            name,
            direction,
            weight,
        })
    }
}

/// An ordinal label with its numeric score, scoped to one criterion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Level {
    pub label: String,
    pub score: f64,
}

impl Level {
    pub fn new(label: impl Into<String>, score: f64) -> Self {
        Self {
            label: label.into(),
            score,
        }
    }
}

/// A PROMETHEE criterion: a percentage weight and its qualitative levels.
///
/// Deserialization goes through [`RatedCriterion::add_level`], so a problem
/// file cannot smuggle in empty or repeated labels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawRatedCriterion")]
pub struct RatedCriterion {
    pub name: String,
    pub weight: Percentage,
    pub levels: Vec<Level>,
}

#[derive(Deserialize)]
struct RawRatedCriterion {
    name: String,
    weight: f64,
    #[serde(default)]
    levels: Vec<Level>,
}

impl TryFrom<RawRatedCriterion> for RatedCriterion {
    type Error = AnalysisError;

    fn try_from(raw: RawRatedCriterion) -> Result<Self, Self::Error> {
        raw.levels
            .into_iter()
            .try_fold(RatedCriterion::new(raw.name, raw.weight)?, |criterion, level| {
                criterion.with_level(level.label, level.score)
            })
    }
}

impl RatedCriterion {
    /// Creates a criterion with no levels yet.
    pub fn new(name: impl Into<String>, weight: f64) -> Result<Self, AnalysisError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(AnalysisError::invalid_input("criterion name cannot be empty"));
        }
        let weight = Percentage::try_new(weight).map_err(|_| {
            AnalysisError::invalid_input(format!(
                "weight of criterion '{}' must be between 0 and 100, got {}",
                name, weight
            ))
        })?;
        Ok(Self {
            name,
            weight,
            levels: Vec::new(),
        })
    }

    /// Builder-style variant of [`RatedCriterion::add_level`].
    pub fn with_level(mut self, label: impl Into<String>, score: f64) -> Result<Self, AnalysisError> {
        self.add_level(label, score)?;
        Ok(self)
    }

    /// Appends a level. Labels are unique within a criterion.
    pub fn add_level(&mut self, label: impl Into<String>, score: f64) -> Result<(), AnalysisError> {
        let label = label.into();
        if label.trim().is_empty() {
            return Err(AnalysisError::invalid_input(format!(
                "level label for criterion '{}' cannot be empty",
                self.name
            )));
        }
        if !score.is_finite() {
            return Err(AnalysisError::invalid_input(format!(
                "score of level '{}' must be finite",
                label
            )));
        }
        if self.levels.iter().any(|l| l.label == label) {
            return Err(AnalysisError::duplicate(NameKind::Level, label));
        }
        self.levels.push(Level::new(label, score));
        Ok(())
    }

    /// Returns the score of the level with the given label.
    pub fn score_for(&self, label: &str) -> Option<f64> {
        self.levels.iter().find(|l| l.label == label).map(|l| l.score)
    }

    pub fn has_levels(&self) -> bool {
        !self.levels.is_empty()
    }

    pub fn level_labels(&self) -> Vec<&str> {
        self.levels.iter().map(|l| l.label.as_str()).collect()
    }
}

/// A supplier and the level label it was rated at on each criterion.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Supplier {
    pub name: String,
    /// Maps criterion name -> selected level label.
    #[serde(default)]
    pub selections: HashMap<String, String>,
}

impl Supplier {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            selections: HashMap::new(),
        }
    }

    /// Builder-style variant of [`Supplier::select`].
    pub fn with_selection(mut self, criterion: impl Into<String>, label: impl Into<String>) -> Self {
        self.select(criterion, label);
        self
    }

    pub fn select(&mut self, criterion: impl Into<String>, label: impl Into<String>) {
        self.selections.insert(criterion.into(), label.into());
    }

    /// Returns the selected label, treating an empty selection as none.
    pub fn selection(&self, criterion: &str) -> Option<&str> {
        self.selections
            .get(criterion)
            .map(String::as_str)
            .filter(|label| !label.is_empty())
    }
}
