//! Infrastructure layer for the cost model

pub mod evaluator;
pub mod sweep;

pub use evaluator::{CostModel, SETUP_CALLS, TEARDOWN_CALLS};
