//! PrometheeWorkflow - staged collection of criteria, levels and suppliers.
//!
//! The stages mirror the order a user fills in a PROMETHEE problem:
//! weighted criteria first, then the qualitative levels of each criterion,
//! then suppliers and their ratings, and finally the results.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::analysis::{
    compute_promethee_with, AnalysisError, FlowResult, LevelResolution, NameKind, RatedCriterion,
    Supplier, WEIGHT_TOLERANCE, WEIGHT_TOTAL,
};
use crate::domain::foundation::StateMachine;

/// Stage of a PROMETHEE workflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PrometheeStage {
    #[default]
    CriteriaInput,
    LevelDefinition,
    SupplierInput,
    Results,
}

impl StateMachine for PrometheeStage {
    fn can_transition_to(&self, target: &Self) -> bool {
        use PrometheeStage::*;
        matches!(
            (self, target),
            (CriteriaInput, LevelDefinition)
                | (LevelDefinition, SupplierInput)
                | (SupplierInput, Results)
                | (SupplierInput, LevelDefinition)
                | (Results, SupplierInput)
        )
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use PrometheeStage::*;
        match self {
            CriteriaInput => vec![LevelDefinition],
            LevelDefinition => vec![SupplierInput],
            SupplierInput => vec![Results, LevelDefinition],
            Results => vec![SupplierInput],
        }
    }
}

impl fmt::Display for PrometheeStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            PrometheeStage::CriteriaInput => "Criteria Input",
            PrometheeStage::LevelDefinition => "Level Definition",
            PrometheeStage::SupplierInput => "Supplier Input",
            PrometheeStage::Results => "Results",
        };
        write!(f, "{}", s)
    }
}

/// Session state for one PROMETHEE problem.
#[derive(Debug, Clone, Default)]
pub struct PrometheeWorkflow {
    stage: PrometheeStage,
    criteria: Vec<RatedCriterion>,
    suppliers: Vec<Supplier>,
}

impl PrometheeWorkflow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stage(&self) -> PrometheeStage {
        self.stage
    }

    pub fn criteria(&self) -> &[RatedCriterion] {
        &self.criteria
    }

    pub fn suppliers(&self) -> &[Supplier] {
        &self.suppliers
    }

    /// Sum of the criterion weights entered so far.
    pub fn total_weight(&self) -> f64 {
        self.criteria.iter().map(|c| c.weight.value()).sum()
    }

    fn ensure_stage(&self, expected: PrometheeStage) -> Result<(), AnalysisError> {
        if self.stage != expected {
            return Err(AnalysisError::invalid_input(format!(
                "operation requires the {} stage, workflow is at {}",
                expected, self.stage
            )));
        }
        Ok(())
    }

    fn advance(&mut self, target: PrometheeStage) -> Result<(), AnalysisError> {
        let next = self.stage.transition_to(target)?;
        tracing::debug!(from = %self.stage, to = %next, "PROMETHEE stage changed");
        self.stage = next;
        Ok(())
    }

    /// Adds a weighted criterion. The running total may not exceed 100.
    pub fn add_criterion(&mut self, name: impl Into<String>, weight: f64) -> Result<(), AnalysisError> {
        self.ensure_stage(PrometheeStage::CriteriaInput)?;
        let criterion = RatedCriterion::new(name, weight)?;
        if self.criteria.iter().any(|c| c.name == criterion.name) {
            return Err(AnalysisError::duplicate(NameKind::Criterion, criterion.name));
        }
        let total = self.total_weight() + criterion.weight.value();
        if total > WEIGHT_TOTAL + WEIGHT_TOLERANCE {
            return Err(AnalysisError::invalid_input(format!(
                "adding '{}' would bring the total weight to {}, above {}",
                criterion.name, total, WEIGHT_TOTAL
            )));
        }
        self.criteria.push(criterion);
        Ok(())
    }

    /// Moves on to level definition once the weights add up to 100.
    pub fn proceed_to_levels(&mut self) -> Result<(), AnalysisError> {
        let total = self.total_weight();
        if (total - WEIGHT_TOTAL).abs() > WEIGHT_TOLERANCE {
            return Err(AnalysisError::invalid_input(format!(
                "criterion weights must sum to {}, got {}",
                WEIGHT_TOTAL, total
            )));
        }
        self.advance(PrometheeStage::LevelDefinition)
    }

    /// Adds a qualitative level to a criterion.
    pub fn add_level(
        &mut self,
        criterion: &str,
        label: impl Into<String>,
        score: f64,
    ) -> Result<(), AnalysisError> {
        self.ensure_stage(PrometheeStage::LevelDefinition)?;
        let target = self
            .criteria
            .iter_mut()
            .find(|c| c.name == criterion)
            .ok_or_else(|| AnalysisError::invalid_input(format!("unknown criterion '{}'", criterion)))?;
        target.add_level(label, score)
    }

    pub fn proceed_to_suppliers(&mut self) -> Result<(), AnalysisError> {
        self.advance(PrometheeStage::SupplierInput)
    }

    /// Returns to level editing; supplier ratings are kept.
    pub fn back_to_levels(&mut self) -> Result<(), AnalysisError> {
        self.advance(PrometheeStage::LevelDefinition)
    }

    /// Returns from results to supplier editing.
    pub fn back_to_suppliers(&mut self) -> Result<(), AnalysisError> {
        self.advance(PrometheeStage::SupplierInput)
    }

    /// Adds a supplier with an empty selection for every known criterion.
    pub fn add_supplier(&mut self, name: impl Into<String>) -> Result<(), AnalysisError> {
        self.ensure_stage(PrometheeStage::SupplierInput)?;
        let name = name.into();
        if name.trim().is_empty() {
            return Err(AnalysisError::invalid_input("supplier name cannot be empty"));
        }
        if self.suppliers.iter().any(|s| s.name == name) {
            return Err(AnalysisError::duplicate(NameKind::Supplier, name));
        }
        let supplier = self
            .criteria
            .iter()
            .fold(Supplier::new(name), |s, c| s.with_selection(c.name.clone(), ""));
        self.suppliers.push(supplier);
        Ok(())
    }

    /// Rates a supplier on a criterion. The label must be one of the
    /// criterion's levels.
    pub fn select_level(
        &mut self,
        supplier: &str,
        criterion: &str,
        label: &str,
    ) -> Result<(), AnalysisError> {
        self.ensure_stage(PrometheeStage::SupplierInput)?;
        let rated = self
            .criteria
            .iter()
            .find(|c| c.name == criterion)
            .ok_or_else(|| AnalysisError::invalid_input(format!("unknown criterion '{}'", criterion)))?;
        if rated.score_for(label).is_none() {
            return Err(AnalysisError::invalid_input(format!(
                "'{}' is not a level of criterion '{}' (expected one of: {})",
                label,
                criterion,
                rated.level_labels().join(", ")
            )));
        }
        let target = self
            .suppliers
            .iter_mut()
            .find(|s| s.name == supplier)
            .ok_or_else(|| AnalysisError::invalid_input(format!("unknown supplier '{}'", supplier)))?;
        target.select(criterion, label);
        Ok(())
    }

    /// Computes the flows and moves to the results stage.
    ///
    /// The stage only changes when the computation succeeds.
    pub fn evaluate(&mut self, resolution: LevelResolution) -> Result<FlowResult, AnalysisError> {
        let next = self.stage.transition_to(PrometheeStage::Results)?;
        let result = compute_promethee_with(&self.criteria, &self.suppliers, resolution)?;
        self.stage = next;
        tracing::info!(suppliers = self.suppliers.len(), "PROMETHEE workflow evaluated");
        Ok(result)
    }
}
