//! Compile orchestration.
//!
//! One entry point fans a recipe out to the rules engine, the topology
//! builder, the pricing engine, and the flow narrator, and combines their
//! outputs into a single immutable report.
//!
//! Determinism contract:
//! - no system time, randomness, env vars, or I/O
//! - output order is governed by fixed internal precedence, never by
//!   selection order
//! - identical inputs produce identical reports

use serde::{Deserialize, Serialize};

use crate::config::PricingConfig;
use crate::flows::derive_flows;
use crate::model::plan::DeploymentPlan;
use crate::model::price::PriceEstimate;
use crate::model::recipe::{Addons, RecipeRequest, Region, Tier};
use crate::pricing::calculate_estimate;
use crate::rules::{derive_components, FeatureFlags};
use crate::topology::derive_vpc;
use crate::validate;

/// Severity of an advisory diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiagnosticLevel {
    Info,
    Warning,
}

/// A structured advisory emitted alongside a compiled plan. Diagnostics
/// never block compilation; the compiler is total over its input domain.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Diagnostic {
    pub level: DiagnosticLevel,
    pub code: String,
    pub message: String,
}

/// The combined compiler output for one recipe.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanReport {
    pub plan: DeploymentPlan,
    pub estimate: PriceEstimate,
    pub diagnostics: Vec<Diagnostic>,
}

/// Compile a recipe with the default pricing configuration.
pub fn compile_recipe(req: &RecipeRequest) -> PlanReport {
    compile_recipe_with(req, &PricingConfig::default())
}

/// Compile a recipe with an explicit pricing configuration.
pub fn compile_recipe_with(req: &RecipeRequest, cfg: &PricingConfig) -> PlanReport {
    let flags = FeatureFlags::derive(req.tier, &req.selection, &req.addons);
    let vpc = derive_vpc(flags.multi_az, req.region);
    let components = derive_components(req.tier, &req.selection, &flags, &vpc);
    let flows = derive_flows(&components, &flags);
    let estimate = calculate_estimate(req.tier, &req.selection, &req.addons, req.region, cfg);

    let plan = DeploymentPlan { tier: req.tier, region: req.region, vpc, components, flows };

    PlanReport { plan, estimate, diagnostics: validate::check_selection(req) }
}

/// The payload handed to the payment-session endpoint at checkout.
///
/// Field names and token values are wire-stable.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutSummary {
    pub tier: Tier,
    pub region: Region,
    pub selections: Vec<String>,
    pub addons: Addons,
    pub setup_fee: u32,
    pub monthly_fee: u32,
    pub aws_monthly_estimate: u32,
    pub complexity_score: u32,
}

impl CheckoutSummary {
    pub fn from_report(req: &RecipeRequest, report: &PlanReport) -> Self {
        Self {
            tier: req.tier,
            region: req.region,
            selections: req.selection.iter().map(|id| id.as_str().to_string()).collect(),
            addons: req.addons,
            setup_fee: report.estimate.setup_fee,
            monthly_fee: report.estimate.monthly_fee,
            aws_monthly_estimate: report.estimate.infra_monthly_estimate,
            complexity_score: report.estimate.complexity_score,
        }
    }
}
