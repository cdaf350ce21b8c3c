//! Kernel Cost Model Evaluator
//!
//! Closed-form cycle estimate for the sparse block-matrix-vector multiply
//! (`matmult_seqbaij`, 1x1 blocks).
//!
//! Control-flow regions, in order:
//!
//! ```text
//! base_entry_0 -> vecgetarrayread -> base_entry_1 -> vecgetarray -> base_entry_2
//! loop1 (rows, loop1_its):
//!     loop1_entry
//!     loop1_1 (block columns, loop1_1_its): seg_0 [unrolled]
//!     loop1_exit
//! base_exit_0 -> vecrestorearrayread -> base_exit_1 -> vecrestorearray -> base_exit_2
//! ```
//!
//! The outer loop total is `loop1_its * body + output`: the loop's output
//! path is counted once on top of the per-trip body cost.

use crate::config::{ModelParameters, Validatable};
use crate::error::{CostModelError, Result};
use crate::features::cost_model::domain::{
    BlockWeights, CallCostTable, CostBreakdown, CostRegion, UnrollCostTable,
};

/// Array-access setup calls in the prologue, in call order
pub const SETUP_CALLS: [&str; 2] = ["vecgetarrayread", "vecgetarray"];

/// Array-access teardown calls in the epilogue, in call order
pub const TEARDOWN_CALLS: [&str; 2] = ["vecrestorearrayread", "vecrestorearray"];

const REQUIRED_CALLS: [&str; 4] = [
    SETUP_CALLS[0],
    SETUP_CALLS[1],
    TEARDOWN_CALLS[0],
    TEARDOWN_CALLS[1],
];

/// Cost model for one kernel variant
///
/// Stateless apart from its fixed tables; evaluation is pure.
#[derive(Debug, Clone, PartialEq)]
pub struct CostModel {
    kernel: String,
    unroll_table: UnrollCostTable,
    weights: BlockWeights,
}

impl CostModel {
    pub fn new(
        kernel: impl Into<String>,
        unroll_table: UnrollCostTable,
        weights: BlockWeights,
    ) -> Self {
        Self {
            kernel: kernel.into(),
            unroll_table,
            weights,
        }
    }

    /// `matmult_seqbaij_1_0_0`: all block weights and segment costs are zero
    pub fn seqbaij() -> Self {
        Self::new(
            "matmult_seqbaij_1_0_0",
            UnrollCostTable::seqbaij(),
            BlockWeights::default(),
        )
    }

    pub fn kernel(&self) -> &str {
        &self.kernel
    }

    pub fn unroll_table(&self) -> &UnrollCostTable {
        &self.unroll_table
    }

    pub fn weights(&self) -> &BlockWeights {
        &self.weights
    }

    /// Calls the cost table must provide, in lookup order
    pub fn required_calls() -> &'static [&'static str] {
        &REQUIRED_CALLS
    }

    /// Total estimated cycles
    pub fn evaluate(&self, costs: &CallCostTable, params: &ModelParameters) -> Result<f64> {
        Ok(self.breakdown(costs, params)?.total)
    }

    /// Total estimated cycles with default parameters
    pub fn evaluate_default(&self, costs: &CallCostTable) -> Result<f64> {
        self.evaluate(costs, &ModelParameters::default())
    }

    /// Evaluate and keep every intermediate
    ///
    /// Fails before computing anything if a parameter is out of range or a
    /// required call cost is missing.
    pub fn breakdown(
        &self,
        costs: &CallCostTable,
        params: &ModelParameters,
    ) -> Result<CostBreakdown> {
        params.validate()?;
        if let Some(call) = costs.missing(&REQUIRED_CALLS) {
            return Err(CostModelError::missing_call_cost(call));
        }

        let w = &self.weights;
        let unroll = params.loop1_1_seg_0_unroll;

        // Inner loop (loop1_1)
        let segment_cost = self.unroll_table.segment_cost(unroll)?;
        let inner_loop_output = segment_cost;
        let inner_loop_total = params.loop1_1_its * inner_loop_output;

        // Outer loop (loop1)
        let outer_loop_body =
            w.weight(CostRegion::LoopEntry) + inner_loop_total + w.weight(CostRegion::LoopExit);
        let outer_loop_output = outer_loop_body;
        let outer_loop_total = params.loop1_its * outer_loop_body + outer_loop_output;

        let prologue = w.weight(CostRegion::ModelEntry(0))
            + costs.cost(SETUP_CALLS[0])?
            + w.weight(CostRegion::ModelEntry(1))
            + costs.cost(SETUP_CALLS[1])?
            + w.weight(CostRegion::ModelEntry(2));

        let epilogue = w.weight(CostRegion::ModelExit(0))
            + costs.cost(TEARDOWN_CALLS[0])?
            + w.weight(CostRegion::ModelExit(1))
            + costs.cost(TEARDOWN_CALLS[1])?
            + w.weight(CostRegion::ModelExit(2));

        let total = prologue + outer_loop_total + epilogue;

        tracing::debug!(
            kernel = %self.kernel,
            loop1_its = params.loop1_its,
            loop1_1_its = params.loop1_1_its,
            unroll,
            total,
            "cost model evaluated"
        );

        Ok(CostBreakdown {
            segment_cost,
            inner_loop_output,
            inner_loop_total,
            outer_loop_body,
            outer_loop_output,
            outer_loop_total,
            prologue,
            epilogue,
            total,
        })
    }
}

impl Default for CostModel {
    fn default() -> Self {
        Self::seqbaij()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    fn zero_costs() -> CallCostTable {
        REQUIRED_CALLS.iter().map(|c| (*c, 0.0)).collect()
    }

    fn costs_1234() -> CallCostTable {
        CallCostTable::new()
            .with("vecgetarrayread", 1.0)
            .with("vecgetarray", 2.0)
            .with("vecrestorearrayread", 3.0)
            .with("vecrestorearray", 4.0)
    }

    #[test]
    fn test_default_params_zero_costs() {
        let model = CostModel::seqbaij();
        assert_eq!(model.evaluate_default(&zero_costs()).unwrap(), 0.0);
    }

    #[test]
    fn test_prologue_epilogue_only() {
        let model = CostModel::seqbaij();
        let params = ModelParameters::new(0.0, 0.0, 1);
        let breakdown = model.breakdown(&costs_1234(), &params).unwrap();

        assert_eq!(breakdown.prologue, 3.0);
        assert_eq!(breakdown.outer_loop_total, 0.0);
        assert_eq!(breakdown.epilogue, 7.0);
        assert_eq!(breakdown.total, 10.0);
    }

    #[test]
    fn test_single_trip_zero_costs() {
        let model = CostModel::seqbaij();
        let params = ModelParameters::new(1.0, 1.0, 1);
        assert_eq!(model.evaluate(&zero_costs(), &params).unwrap(), 0.0);
    }

    #[test]
    fn test_outer_loop_counts_output_once_more() {
        let weights = BlockWeights {
            loop_entry: 1.0,
            loop_exit: 2.0,
            ..BlockWeights::default()
        };
        let model = CostModel::new("weighted", UnrollCostTable::seqbaij(), weights);
        let params = ModelParameters::new(5.0, 0.0, 1);
        let breakdown = model.breakdown(&zero_costs(), &params).unwrap();

        assert_eq!(breakdown.outer_loop_body, 3.0);
        assert_eq!(breakdown.outer_loop_output, 3.0);
        // 5 trips * 3 + 3
        assert_eq!(breakdown.outer_loop_total, 18.0);
    }

    #[test]
    fn test_segment_cost_flows_through_nest() {
        let mut values = [0.0; 10];
        values[3] = 8.0; // unroll 4
        let model =
            CostModel::new("segment", UnrollCostTable::new(values), BlockWeights::default());
        let params = ModelParameters::new(10.0, 3.0, 4);
        let breakdown = model.breakdown(&zero_costs(), &params).unwrap();

        assert_eq!(breakdown.segment_cost, 2.0);
        assert_eq!(breakdown.inner_loop_output, 2.0);
        assert_eq!(breakdown.inner_loop_total, 6.0);
        assert_eq!(breakdown.outer_loop_total, 10.0 * 6.0 + 6.0);
        assert_eq!(breakdown.total, 66.0);
    }

    #[test]
    fn test_block_weights_interleave_with_calls() {
        let weights = BlockWeights {
            model_entry: [10.0, 20.0, 30.0],
            model_exit: [100.0, 200.0, 300.0],
            ..BlockWeights::default()
        };
        let model = CostModel::new("weighted", UnrollCostTable::seqbaij(), weights);
        let breakdown = model
            .breakdown(&costs_1234(), &ModelParameters::new(0.0, 0.0, 1))
            .unwrap();

        assert_eq!(breakdown.prologue, 63.0);
        assert_eq!(breakdown.epilogue, 607.0);
        assert_eq!(breakdown.total, 670.0);
    }

    #[test]
    fn test_missing_call_cost() {
        let model = CostModel::seqbaij();
        let costs = CallCostTable::new()
            .with("vecgetarrayread", 1.0)
            .with("vecrestorearrayread", 3.0)
            .with("vecrestorearray", 4.0);

        let err = model.evaluate_default(&costs).unwrap_err();
        assert!(matches!(
            err,
            CostModelError::MissingCallCost { ref key } if key == "vecgetarray"
        ));
    }

    #[test]
    fn test_invalid_unroll() {
        let model = CostModel::seqbaij();
        let params = ModelParameters::default().unroll(11);
        let err = model.evaluate(&zero_costs(), &params).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidUnroll);
        assert!(err.to_string().contains("1..=10"));
    }

    #[test]
    fn test_invalid_trip_count() {
        let model = CostModel::seqbaij();
        let params = ModelParameters::default().loop1_its(-1.0);
        let err = model.evaluate(&zero_costs(), &params).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidTripCount);
    }

    #[test]
    fn test_extra_call_costs_ignored() {
        let model = CostModel::seqbaij();
        let costs = costs_1234().with("vecnorm", 1000.0);
        let params = ModelParameters::new(0.0, 0.0, 1);
        assert_eq!(model.evaluate(&costs, &params).unwrap(), 10.0);
    }

    #[test]
    fn test_required_calls_order() {
        assert_eq!(
            CostModel::required_calls(),
            &["vecgetarrayread", "vecgetarray", "vecrestorearrayread", "vecrestorearray"]
        );
    }
}
