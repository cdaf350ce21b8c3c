//! Application layer for the cost model

pub mod cost_usecase;

pub use cost_usecase::{CostModelUseCase, CostModelUseCaseImpl};
