//! Errors returned by engine commands.

use crate::types::BodyId;

/// Rejection reasons for engine commands.
///
/// A command that returns an error has not mutated the engine.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    #[error("invalid mass {0} (must be positive and finite)")]
    InvalidMass(f64),

    #[error("invalid radius {0} (must be positive and finite)")]
    InvalidRadius(f64),

    #[error("non-finite {field}")]
    NonFinite { field: &'static str },

    #[error("no body with id {0}")]
    NotFound(BodyId),

    #[error("invalid gravitational constant {0} (must be positive and finite)")]
    InvalidGravity(f64),

    #[error("invalid speed multiplier {0} (must be positive and finite)")]
    InvalidSpeed(f64),
}

pub type Result<T> = std::result::Result<T, EngineError>;

/// Check that a value is a positive, finite real.
pub(crate) fn is_positive_finite(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positive_finite() {
        assert!(is_positive_finite(0.1));
        assert!(!is_positive_finite(0.0));
        assert!(!is_positive_finite(-1.0));
        assert!(!is_positive_finite(f64::NAN));
        assert!(!is_positive_finite(f64::INFINITY));
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            EngineError::InvalidMass(-1.0).to_string(),
            "invalid mass -1 (must be positive and finite)"
        );
        assert_eq!(
            EngineError::NonFinite { field: "position" }.to_string(),
            "non-finite position"
        );
    }
}
