//! Error types for path simulation.

use thiserror::Error;

/// Errors raised by the simulation routines.
///
/// There is a single failure mode: a parameter that makes the requested
/// simulation meaningless. Validation happens before any random draw, so a
/// returned error guarantees the random source was not advanced.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimulationError {
    /// A parameter is outside its valid range
    #[error("invalid parameter `{name}`: {value} ({constraint})")]
    InvalidParameter {
        /// Parameter name as it appears in the API
        name: &'static str,
        /// The rejected value
        value: f64,
        /// The constraint it violates
        constraint: &'static str,
    },
}

/// Convenience alias for simulation results.
pub type SimResult<T> = Result<T, SimulationError>;

/// Rejects non-finite and non-positive real parameters.
pub(crate) fn ensure_positive(name: &'static str, value: f64) -> SimResult<()> {
    if !value.is_finite() {
        return Err(SimulationError::InvalidParameter {
            name,
            value,
            constraint: "must be finite",
        });
    }
    if value <= 0.0 {
        return Err(SimulationError::InvalidParameter {
            name,
            value,
            constraint: "must be positive",
        });
    }
    Ok(())
}

/// Rejects zero counts (step or path counts must be at least 1).
pub(crate) fn ensure_nonzero(name: &'static str, count: usize) -> SimResult<()> {
    if count == 0 {
        return Err(SimulationError::InvalidParameter {
            name,
            value: 0.0,
            constraint: "must be at least 1",
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_parameter_display() {
        let err = SimulationError::InvalidParameter {
            name: "horizon",
            value: -1.0,
            constraint: "must be positive",
        };
        assert_eq!(
            format!("{}", err),
            "invalid parameter `horizon`: -1 (must be positive)"
        );
    }

    #[test]
    fn test_error_trait_implementation() {
        let err = SimulationError::InvalidParameter {
            name: "n_steps",
            value: 0.0,
            constraint: "must be at least 1",
        };
        let _: &dyn std::error::Error = &err;
    }

    #[test]
    fn test_ensure_positive_accepts_positive() {
        assert!(ensure_positive("horizon", 1.0).is_ok());
        assert!(ensure_positive("horizon", 1e-12).is_ok());
    }

    #[test]
    fn test_ensure_positive_rejects_zero_and_negative() {
        assert!(ensure_positive("horizon", 0.0).is_err());
        assert!(ensure_positive("horizon", -3.5).is_err());
    }

    #[test]
    fn test_ensure_positive_rejects_non_finite() {
        assert!(ensure_positive("horizon", f64::NAN).is_err());
        assert!(ensure_positive("horizon", f64::INFINITY).is_err());
    }

    #[test]
    fn test_ensure_nonzero() {
        assert!(ensure_nonzero("n_paths", 1).is_ok());
        assert!(ensure_nonzero("n_paths", 0).is_err());
    }
}
