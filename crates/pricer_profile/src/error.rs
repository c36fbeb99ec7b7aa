//! Error types for the price-risk profile engine.
//!
//! Every failure is terminal for the request that produced it: no partial
//! results are returned and nothing is substituted with a default value.

use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ProfileError>;

/// Error raised by the simulator, the analyser, or configuration builders.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum ProfileError {
    /// A single field violates its precondition.
    #[error("Invalid parameter '{field}': {reason}")]
    InvalidParameter {
        /// Name of the offending field.
        field: &'static str,
        /// Description of the violated constraint.
        reason: String,
    },

    /// Statistics were requested over zero samples.
    #[error("Empty distribution: statistics require at least one sample")]
    EmptyDistribution,

    /// Percentile bands were requested over paths of differing lengths.
    #[error("Inconsistent path length at path {path_index}: expected {expected} points, found {found}")]
    InconsistentPathLength {
        /// Index of the first offending path.
        path_index: usize,
        /// Length of the first path.
        expected: usize,
        /// Length of the offending path.
        found: usize,
    },
}

impl ProfileError {
    /// Builds an [`ProfileError::InvalidParameter`] for `field`.
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            field,
            reason: reason.into(),
        }
    }

    /// Returns the offending field name for parameter errors.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            Self::InvalidParameter { field, .. } => Some(field),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_error_display() {
        let err = ProfileError::invalid("volatility", "must be non-negative, got -0.2");
        assert!(err.to_string().contains("volatility"));
        assert!(err.to_string().contains("-0.2"));
        assert_eq!(err.field(), Some("volatility"));

        let err = ProfileError::EmptyDistribution;
        assert!(err.to_string().contains("at least one sample"));
        assert_eq!(err.field(), None);

        let err = ProfileError::InconsistentPathLength {
            path_index: 3,
            expected: 31,
            found: 30,
        };
        assert!(err.to_string().contains("path 3"));
        assert!(err.to_string().contains("expected 31"));
    }
}
