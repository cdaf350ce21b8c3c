//! Kernel Cost Model
//!
//! Static cycle estimate for the sparse block-matrix-vector multiply kernel,
//! parameterized by loop trip counts and the inner-segment unroll factor.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │ Application Layer                       │
//! │  - CostModelUseCase (pipeline seam)     │
//! └─────────────────────────────────────────┘
//!                   │
//! ┌─────────────────────────────────────────┐
//! │ Infrastructure Layer                    │
//! │  - CostModel (evaluator)                │
//! │  - sweep_unroll / best_unroll           │
//! └─────────────────────────────────────────┘
//!                   │
//! ┌─────────────────────────────────────────┐
//! │ Domain Layer                            │
//! │  - CallCostTable, UnrollCostTable       │
//! │  - BlockWeights, CostRegion             │
//! │  - CostBreakdown, UnrollEstimate        │
//! └─────────────────────────────────────────┘
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! use costmodel_core::features::cost_model::{CallCostTable, CostModel};
//! use costmodel_core::config::ModelParameters;
//!
//! let costs = CallCostTable::new()
//!     .with("vecgetarrayread", 120.0)
//!     .with("vecgetarray", 118.0)
//!     .with("vecrestorearrayread", 40.0)
//!     .with("vecrestorearray", 42.0);
//!
//! let model = CostModel::seqbaij();
//! let cycles = model.evaluate(&costs, &ModelParameters::default().unroll(4))?;
//! ```

pub mod application;
pub mod domain;
pub mod infrastructure;

pub use application::{CostModelUseCase, CostModelUseCaseImpl};

pub use domain::{
    BlockWeights, CallCostTable, CostBreakdown, CostRegion, UnrollCostTable, UnrollEstimate,
    MAX_UNROLL, MIN_UNROLL,
};

pub use infrastructure::{CostModel, SETUP_CALLS, TEARDOWN_CALLS};
