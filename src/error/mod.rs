use thiserror::Error;

/// An argument violated a documented domain precondition.
///
/// This is the only failure kind produced by the link-budget core. It is
/// never transient, so callers either fix the input or give up.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("invalid input: {parameter} = {value} ({requirement})")]
pub struct InvalidInputError {
    pub parameter: &'static str,
    pub value: f64,
    pub requirement: &'static str,
}

impl InvalidInputError {
    pub fn new(parameter: &'static str, value: f64, requirement: &'static str) -> Self {
        Self { parameter, value, requirement }
    }
}

pub type Result<T> = std::result::Result<T, InvalidInputError>;

/// Fails unless `value > 0`. NaN fails too.
pub(crate) fn require_positive(parameter: &'static str, value: f64) -> Result<f64> {
    if value > 0.0 {
        Ok(value)
    } else {
        Err(InvalidInputError::new(parameter, value, "must be > 0"))
    }
}

/// Fails unless `value >= 0`. NaN fails too.
pub(crate) fn require_non_negative(parameter: &'static str, value: f64) -> Result<f64> {
    if value >= 0.0 {
        Ok(value)
    } else {
        Err(InvalidInputError::new(parameter, value, "must be >= 0"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_names_parameter() {
        let err = InvalidInputError::new("target_rcs", -1.0, "must be > 0");
        assert_eq!(err.to_string(), "invalid input: target_rcs = -1 (must be > 0)");
    }

    #[test]
    fn test_guards_reject_nan() {
        assert!(require_positive("x", f64::NAN).is_err());
        assert!(require_non_negative("x", f64::NAN).is_err());
        assert!(require_non_negative("x", 0.0).is_ok());
        assert!(require_positive("x", 0.0).is_err());
    }
}
