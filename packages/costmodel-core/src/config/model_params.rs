//! Model parameters: loop trip counts and the inner-segment unroll factor

use super::validation::Validatable;
use crate::error::{CostModelError, Result};
use crate::features::cost_model::domain::{MAX_UNROLL, MIN_UNROLL};
use serde::{Deserialize, Serialize};

/// Outer (row) loop trip count
pub const DEFAULT_LOOP1_ITS: f64 = 80000.0;

/// Average inner (block-column) loop trip count per row
pub const DEFAULT_LOOP1_1_ITS: f64 = 6.86;

pub const DEFAULT_UNROLL: u32 = 1;

/// Evaluation parameters
///
/// Trip counts may be fractional: the inner count is an average over rows of
/// varying length.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ModelParameters {
    /// Outer loop trip count (finite, >= 0)
    pub loop1_its: f64,

    /// Inner loop trip count (finite, >= 0)
    pub loop1_1_its: f64,

    /// Unroll factor of inner segment 0 (1..=10)
    pub loop1_1_seg_0_unroll: u32,
}

impl Default for ModelParameters {
    fn default() -> Self {
        Self {
            loop1_its: DEFAULT_LOOP1_ITS,
            loop1_1_its: DEFAULT_LOOP1_1_ITS,
            loop1_1_seg_0_unroll: DEFAULT_UNROLL,
        }
    }
}

impl ModelParameters {
    pub fn new(loop1_its: f64, loop1_1_its: f64, unroll: u32) -> Self {
        Self {
            loop1_its,
            loop1_1_its,
            loop1_1_seg_0_unroll: unroll,
        }
    }

    pub fn loop1_its(mut self, its: f64) -> Self {
        self.loop1_its = its;
        self
    }

    pub fn loop1_1_its(mut self, its: f64) -> Self {
        self.loop1_1_its = its;
        self
    }

    pub fn unroll(mut self, unroll: u32) -> Self {
        self.loop1_1_seg_0_unroll = unroll;
        self
    }
}

fn check_trip_count(field: &'static str, value: f64) -> Result<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(CostModelError::invalid_trip_count(field, value));
    }
    Ok(())
}

impl Validatable for ModelParameters {
    fn validate(&self) -> Result<()> {
        check_trip_count("loop1_its", self.loop1_its)?;
        check_trip_count("loop1_1_its", self.loop1_1_its)?;

        if !(MIN_UNROLL..=MAX_UNROLL).contains(&self.loop1_1_seg_0_unroll) {
            return Err(CostModelError::InvalidUnroll {
                value: self.loop1_1_seg_0_unroll,
                min: MIN_UNROLL,
                max: MAX_UNROLL,
            });
        }

        Ok(())
    }

    fn config_name(&self) -> &'static str {
        "ModelParameters"
    }
}
