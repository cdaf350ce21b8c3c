//! Versioned model input document (YAML)
//!
//! ```yaml
//! version: 1
//! call_costs:
//!   vecgetarrayread: 120.0
//!   vecgetarray: 118.0
//!   vecrestorearrayread: 40.0
//!   vecrestorearray: 42.0
//! parameters:        # optional, missing fields take defaults
//!   loop1_1_seg_0_unroll: 4
//! ```
//!
//! Documents are parsed from memory; reading them from disk is the caller's job.

use super::model_params::ModelParameters;
use super::validation::Validatable;
use crate::error::{CostModelError, Result};
use crate::features::cost_model::domain::CallCostTable;
use serde::{Deserialize, Serialize};

pub const SUPPORTED_VERSIONS: [u32; 1] = [1];

/// Input schema v1
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CostModelInputV1 {
    /// Schema version (always 1 for v1)
    #[serde(default)]
    pub version: Option<u32>,

    /// External call costs, cycles per invocation
    pub call_costs: CallCostTable,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameters: Option<ModelParameters>,
}

impl CostModelInputV1 {
    pub fn new(call_costs: CallCostTable) -> Self {
        Self {
            version: Some(1),
            call_costs,
            parameters: None,
        }
    }

    pub fn with_parameters(mut self, parameters: ModelParameters) -> Self {
        self.parameters = Some(parameters);
        self
    }

    /// Parse and validate a YAML document
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        let input: Self = serde_yaml::from_str(content)?;
        input.validate()?;
        Ok(input)
    }

    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Parameters with defaults applied
    pub fn parameters(&self) -> ModelParameters {
        self.parameters.unwrap_or_default()
    }
}

impl Validatable for CostModelInputV1 {
    fn validate(&self) -> Result<()> {
        let version = self.version.ok_or(CostModelError::MissingVersion)?;
        if !SUPPORTED_VERSIONS.contains(&version) {
            return Err(CostModelError::UnsupportedVersion {
                found: version,
                supported: SUPPORTED_VERSIONS.to_vec(),
            });
        }
        self.parameters.validate()
    }

    fn config_name(&self) -> &'static str {
        "CostModelInputV1"
    }
}
