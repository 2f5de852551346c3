//! Errors for the checked calling convention of external kernels.
//!
//! The optimizers themselves do not validate their inputs; shape mismatches
//! there panic inside `ndarray`. Only the boundary to foreign numerical
//! kernels (see [`crate::prox`]) checks its arguments and reports a
//! [`ProxError`].

use std::fmt;

/// Result alias for calls that may produce a [`ProxError`].
pub type ProxResult<T> = Result<T, ProxError>;

/// Invalid arguments to a proximal kernel call.
#[derive(Debug, Clone, PartialEq)]
pub enum ProxError {
    /// An array does not have the declared problem length `n`.
    LengthMismatch {
        name: &'static str,
        expected: usize,
        found: usize,
    },

    /// The output array is not contiguous, so it cannot be handed to the
    /// kernel as a flat buffer.
    NonContiguous { name: &'static str },

    /// The penalty weight must be finite and nonnegative.
    InvalidLambda { lam: f64 },
}

impl fmt::Display for ProxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProxError::LengthMismatch {
                name,
                expected,
                found,
            } => write!(f, "`{name}` has length {found}, expected {expected}"),
            ProxError::NonContiguous { name } => {
                write!(f, "`{name}` must be contiguous in memory")
            }
            ProxError::InvalidLambda { lam } => {
                write!(f, "lambda must be finite and nonnegative, got {lam}")
            }
        }
    }
}

impl std::error::Error for ProxError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display() {
        let err = ProxError::LengthMismatch {
            name: "theta",
            expected: 4,
            found: 3,
        };
        assert_eq!(err.to_string(), "`theta` has length 3, expected 4");
        assert_eq!(
            ProxError::InvalidLambda { lam: -1. }.to_string(),
            "lambda must be finite and nonnegative, got -1"
        );
    }
}
