//! Configuration for planforge-core.
//!
//! The core never reads environment variables or files; callers pass
//! configuration explicitly so derivations stay deterministic. Defaults
//! match the shipped pricing model.

use crate::errors::{PlanError, PlanResult};

/// Tunables for the pricing engine.
#[derive(Debug, Clone)]
pub struct PricingConfig {
    /// Ceiling applied to the summed complexity score.
    pub complexity_ceiling: u32,
    /// Fixed monthly baseline of the infrastructure-usage estimate, USD.
    pub infra_baseline: u32,
    /// Dollars added to the infrastructure estimate per complexity point.
    pub infra_per_point: u32,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            complexity_ceiling: 100,
            infra_baseline: 20,
            infra_per_point: 3,
        }
    }
}

/// Validate a pricing configuration.
pub fn validate_config(cfg: &PricingConfig) -> PlanResult<()> {
    if cfg.complexity_ceiling == 0 {
        return Err(PlanError::invalid_argument(
            "complexity_ceiling must be greater than zero",
        ));
    }
    Ok(())
}
