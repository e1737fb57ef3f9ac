//! Error types for planforge-core.
//!
//! The derivation functions themselves are total: any set of catalog item
//! ids, any tier, and any region produce a plan without error. Errors exist
//! only at the seams: parsing wire tokens and validating configuration.

use thiserror::Error;

/// Crate-wide result alias.
pub type PlanResult<T> = Result<T, PlanError>;

/// Errors produced at the parse/config boundary.
#[derive(Debug, Clone, Error)]
pub enum PlanError {
    /// A caller-supplied value was rejected.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// An internal invariant did not hold.
    #[error("invariant violated: {0}")]
    Invariant(String),
}

impl PlanError {
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    pub fn invariant(msg: impl Into<String>) -> Self {
        Self::Invariant(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_message() {
        let e = PlanError::invalid_argument("bad tier");
        assert!(e.to_string().contains("bad tier"));
    }
}
