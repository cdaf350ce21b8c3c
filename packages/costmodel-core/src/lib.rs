/*
 * Costmodel Core - static cycle estimates for generated kernel models
 *
 * Feature-First Hexagonal Architecture:
 * - config/    : Model parameters, validation, versioned input documents
 * - features/  : Vertical slices (cost_model: domain → infrastructure → application)
 * - error      : Unified error type
 */

pub mod config;
pub mod error;
pub mod features;

pub use config::{CostModelInputV1, ModelParameters, Validatable};
pub use error::{CostModelError, ErrorKind, Result};
pub use features::cost_model::{
    CallCostTable, CostBreakdown, CostModel, CostModelUseCase, CostModelUseCaseImpl, CostRegion,
    UnrollEstimate,
};
