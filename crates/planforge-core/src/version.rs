//! Catalog revision helpers.
//!
//! Persisted selections carry the catalog revision they were made
//! against, so consumers can detect stale state. Item tokens are
//! append-only within a revision.

use crate::errors::{PlanError, PlanResult};

/// The current catalog revision.
pub const CATALOG_VERSION: &str = "v1";

/// Known catalog revisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogVersion {
    V1,
}

impl CatalogVersion {
    /// Parse a revision string (e.g. "v1").
    pub fn parse(s: &str) -> PlanResult<Self> {
        match s {
            "v1" => Ok(Self::V1),
            _ => Err(PlanError::invalid_argument(format!("unsupported catalog version: {s}"))),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::V1 => "v1",
        }
    }
}
