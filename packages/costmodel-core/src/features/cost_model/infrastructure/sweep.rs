//! Unroll-factor sweep
//!
//! Evaluates one model at every unroll factor of its unroll table. Each
//! evaluation is independent, so the sweep runs on the rayon pool.

use super::evaluator::CostModel;
use crate::config::ModelParameters;
use crate::error::Result;
use crate::features::cost_model::domain::{
    CallCostTable, UnrollEstimate, MAX_UNROLL, MIN_UNROLL,
};
use rayon::prelude::*;

impl CostModel {
    /// Estimate at each unroll factor 1..=10, ordered by unroll
    ///
    /// The unroll factor in `params` is ignored; trip counts are taken as given.
    pub fn sweep_unroll(
        &self,
        costs: &CallCostTable,
        params: &ModelParameters,
    ) -> Result<Vec<UnrollEstimate>> {
        let estimates = (MIN_UNROLL..=MAX_UNROLL)
            .into_par_iter()
            .map(|unroll| -> Result<UnrollEstimate> {
                let cost = self.evaluate(costs, &params.unroll(unroll))?;
                Ok(UnrollEstimate { unroll, cost })
            })
            .collect::<Result<Vec<_>>>()?;

        tracing::debug!(
            kernel = %self.kernel(),
            factors = estimates.len(),
            "unroll sweep complete"
        );

        Ok(estimates)
    }

    /// Cheapest unroll factor; ties go to the smallest factor
    pub fn best_unroll(
        &self,
        costs: &CallCostTable,
        params: &ModelParameters,
    ) -> Result<UnrollEstimate> {
        let estimates = self.sweep_unroll(costs, params)?;

        let mut best = estimates[0];
        for estimate in &estimates[1..] {
            if estimate.cost < best.cost {
                best = *estimate;
            }
        }

        Ok(best)
    }
}
