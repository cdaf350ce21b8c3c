//! Cost Model UseCase

use crate::config::{CostModelInputV1, ModelParameters};
use crate::error::Result;
use crate::features::cost_model::domain::{CallCostTable, CostBreakdown, UnrollEstimate};
use crate::features::cost_model::infrastructure::CostModel;

/// Cost Model UseCase Trait
pub trait CostModelUseCase: Send + Sync {
    /// Total estimated cycles
    fn estimate(&self, costs: &CallCostTable, params: &ModelParameters) -> Result<f64>;

    /// Full breakdown for a parsed input document
    fn estimate_input(&self, input: &CostModelInputV1) -> Result<CostBreakdown>;

    /// Estimates across every unroll factor
    fn compare_unroll(
        &self,
        costs: &CallCostTable,
        params: &ModelParameters,
    ) -> Result<Vec<UnrollEstimate>>;
}

/// Cost Model UseCase Implementation
#[derive(Debug, Clone, Default)]
pub struct CostModelUseCaseImpl {
    model: CostModel,
}

impl CostModelUseCaseImpl {
    pub fn new(model: CostModel) -> Self {
        Self { model }
    }

    pub fn model(&self) -> &CostModel {
        &self.model
    }
}

impl CostModelUseCase for CostModelUseCaseImpl {
    fn estimate(&self, costs: &CallCostTable, params: &ModelParameters) -> Result<f64> {
        self.model.evaluate(costs, params)
    }

    fn estimate_input(&self, input: &CostModelInputV1) -> Result<CostBreakdown> {
        self.model.breakdown(&input.call_costs, &input.parameters())
    }

    fn compare_unroll(
        &self,
        costs: &CallCostTable,
        params: &ModelParameters,
    ) -> Result<Vec<UnrollEstimate>> {
        self.model.sweep_unroll(costs, params)
    }
}
