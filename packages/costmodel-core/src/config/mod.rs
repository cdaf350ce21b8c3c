//! Configuration: evaluation parameters and model input documents
//!
//! # Examples
//!
//! ```rust,ignore
//! use costmodel_core::config::{CostModelInputV1, ModelParameters};
//!
//! // Defaults: loop1_its=80000, loop1_1_its=6.86, unroll=1
//! let params = ModelParameters::default().unroll(4);
//!
//! // Versioned YAML document from the generating pipeline
//! let input = CostModelInputV1::from_yaml_str(&yaml)?;
//! ```

pub mod io;
pub mod model_params;
pub mod validation;

// Re-exports
pub use io::{CostModelInputV1, SUPPORTED_VERSIONS};
pub use model_params::{ModelParameters, DEFAULT_LOOP1_1_ITS, DEFAULT_LOOP1_ITS, DEFAULT_UNROLL};
pub use validation::Validatable;
