//! Input validation trait

use crate::error::Result;

/// Trait for validatable model inputs
///
/// Evaluation validates every input through this trait before computing
/// anything, so a failed evaluation never yields a partial result.
pub trait Validatable {
    /// Returns `Ok(())` if valid, `Err(CostModelError)` with details if invalid.
    fn validate(&self) -> Result<()>;

    /// Name used in log fields
    fn config_name(&self) -> &'static str {
        "Config"
    }
}

impl<T: Validatable> Validatable for Option<T> {
    fn validate(&self) -> Result<()> {
        match self {
            Some(inner) => inner.validate(),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ModelParameters;

    #[test]
    fn test_default_config_name() {
        struct Dummy;
        impl Validatable for Dummy {
            fn validate(&self) -> Result<()> {
                Ok(())
            }
        }
        assert_eq!(Dummy.config_name(), "Config");
        assert_eq!(ModelParameters::default().config_name(), "ModelParameters");
    }

    #[test]
    fn test_option_validation() {
        let none: Option<ModelParameters> = None;
        assert!(none.validate().is_ok());

        let bad = Some(ModelParameters::default().unroll(0));
        assert!(bad.validate().is_err());
    }
}
