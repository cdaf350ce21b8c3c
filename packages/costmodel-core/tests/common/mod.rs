//! Shared fixtures for costmodel-core integration tests

#![allow(dead_code)]

use costmodel_core::features::cost_model::{BlockWeights, UnrollCostTable};
use costmodel_core::{CallCostTable, CostModel};

/// Cost table with every required call at `cycles`
pub fn uniform_costs(cycles: f64) -> CallCostTable {
    CostModel::required_calls()
        .iter()
        .map(|c| (*c, cycles))
        .collect()
}

/// Setup calls 1, 2 and teardown calls 3, 4
pub fn costs_1234() -> CallCostTable {
    CallCostTable::new()
        .with("vecgetarrayread", 1.0)
        .with("vecgetarray", 2.0)
        .with("vecrestorearrayread", 3.0)
        .with("vecrestorearray", 4.0)
}

/// Variant with non-zero weights and segment costs, so every term of the
/// formula contributes
pub fn weighted_model() -> CostModel {
    CostModel::new(
        "matmult_seqbaij_weighted",
        // Per-iteration segment cost: 6.0, 5.5, 5.0, ... 1.5
        UnrollCostTable::new([6.0, 11.0, 15.0, 18.0, 20.0, 21.0, 21.0, 20.0, 18.0, 15.0]),
        BlockWeights {
            model_entry: [1.0, 2.0, 3.0],
            model_exit: [4.0, 5.0, 6.0],
            loop_entry: 7.0,
            loop_exit: 8.0,
        },
    )
}

pub fn assert_close(actual: f64, expected: f64) {
    let tolerance = 1e-9 * expected.abs().max(1.0);
    assert!(
        (actual - expected).abs() <= tolerance,
        "expected {expected}, got {actual}"
    );
}
