//! The pricing engine.
//!
//! Two separate figures come out of one recipe:
//!
//! - the **provider fee**: a tiered base amount plus a flat per-item fee
//!   looked up from a fixed table (three tier columns), plus add-on fees.
//!   One-time for tiers 1 and 3, recurring for tier 2.
//! - the **infrastructure-usage estimate**: a linear model over the
//!   complexity score plus per-feature surcharges, scaled by the region
//!   cost multiplier. Billed by the cloud vendor, not the provider.
//!
//! The complexity score is a weighted sum over selected items, clamped to
//! a configurable ceiling. Unknown ids never reach this module; items
//! missing from a table contribute zero.
//!
//! All amounts are whole US dollars; region-multiplied values round to the
//! nearest dollar.

use crate::catalog::ItemId;
use crate::config::PricingConfig;
use crate::model::price::{PriceEstimate, PriceLine, StartsFrom};
use crate::model::recipe::{Addons, Region, Selection, Tier};

/// Tiered base fee: label, amount, and whether it recurs.
pub fn base_fee(tier: Tier) -> (&'static str, u32, bool) {
    match tier {
        Tier::Deploy => ("Tier 1 - Deploy & Ownership Transfer (base)", 1500, false),
        Tier::Managed => ("Tier 2 - Managed Cloud (base)", 299, true),
        Tier::Kit => ("Tier 3 - Terraform Kit (base)", 499, false),
    }
}

/// Floor prices shown on tier cards.
pub fn starts_from(tier: Tier) -> StartsFrom {
    let (_, amount, recurring) = base_fee(tier);
    if recurring {
        StartsFrom { setup_fee: 0, monthly_fee: amount }
    } else {
        StartsFrom { setup_fee: amount, monthly_fee: 0 }
    }
}

/// Per-item flat fee table. Columns: tier-1 one-time, tier-2 monthly,
/// tier-3 one-time. This table is the canonical provider-fee surcharge
/// model; zero-fee rows are included items.
fn item_fee(id: ItemId) -> (&'static str, [u32; 3]) {
    use ItemId::*;
    match id {
        TrafficPrototype => ("Prototype scale", [0, 0, 0]),
        TrafficSmall => ("Small scale infra", [250, 49, 75]),
        TrafficMedium => ("Medium scale infra", [750, 149, 200]),
        TrafficLarge => ("Large scale infra", [1500, 299, 350]),
        StyleStatic => ("Static site setup", [0, 0, 0]),
        StyleWebsiteApi => ("Website + API setup", [300, 59, 100]),
        StyleApiFirst => ("API backend setup", [200, 39, 75]),
        StyleRealtime => ("Realtime/WS setup", [500, 99, 150]),
        StyleJobs => ("Background jobs", [250, 49, 75]),
        DataSql => ("SQL database", [300, 59, 100]),
        DataNosql => ("NoSQL database", [150, 29, 50]),
        DataFiles => ("File storage (S3)", [100, 19, 35]),
        DataCache => ("Caching layer", [200, 39, 75]),
        DataSearch => ("Full-text search", [350, 69, 100]),
        SecHttps => ("HTTPS / TLS", [0, 0, 0]),
        SecWaf => ("WAF protection", [200, 49, 75]),
        SecPrivateDb => ("Private DB networking", [150, 29, 50]),
        SecCompliance => ("Compliance setup", [400, 79, 125]),
        RelSingleAz => ("Single-AZ config", [0, 0, 0]),
        RelMultiAz => ("Multi-AZ HA setup", [400, 79, 125]),
        RelBackups => ("Backup & PITR config", [100, 19, 35]),
        RelBlueGreen => ("Blue/green deploy", [250, 49, 75]),
        OpsBasic => ("Basic monitoring", [0, 0, 0]),
        OpsAdvanced => ("Advanced monitoring", [300, 59, 100]),
    }
}

/// Per-item complexity weight. Weights are non-negative, so adding an item
/// never lowers the score.
fn complexity_weight(id: ItemId) -> u32 {
    use ItemId::*;
    match id {
        TrafficPrototype => 2,
        TrafficSmall => 4,
        TrafficMedium => 8,
        TrafficLarge => 12,
        StyleStatic => 1,
        StyleWebsiteApi => 6,
        StyleApiFirst => 5,
        StyleRealtime => 10,
        StyleJobs => 6,
        DataSql => 6,
        DataNosql => 4,
        DataFiles => 3,
        DataCache => 4,
        DataSearch => 8,
        SecHttps => 1,
        SecWaf => 4,
        SecPrivateDb => 3,
        SecCompliance => 8,
        RelSingleAz => 0,
        RelMultiAz => 8,
        RelBackups => 3,
        RelBlueGreen => 6,
        OpsBasic => 2,
        OpsAdvanced => 7,
    }
}

/// Monthly infrastructure surcharge for high-cost items, USD before the
/// region multiplier.
fn infra_surcharge(id: ItemId) -> u32 {
    use ItemId::*;
    match id {
        DataSql => 40,
        DataSearch => 150,
        StyleRealtime => 30,
        RelMultiAz => 60,
        SecWaf => 20,
        DataFiles => 15,
        OpsAdvanced => 50,
        _ => 0,
    }
}

/// CI/CD add-on fee per tier: label and one-time amount.
fn cicd_fee(tier: Tier) -> (&'static str, u32) {
    match tier {
        Tier::Deploy => ("CI/CD pipeline setup (one-time)", 500),
        Tier::Managed => ("CI/CD setup fee (one-time)", 500),
        Tier::Kit => ("CI/CD pipeline template (one-time)", 299),
    }
}

/// Support add-on, tier 2 only: label and monthly amount.
const SUPPORT_FEE: (&str, u32) = ("Support & infra changes (monthly)", 199);

/// Sum item weights and clamp to the configured ceiling.
pub fn complexity_score(selection: &Selection, cfg: &PricingConfig) -> u32 {
    let sum: u32 = selection.iter().map(complexity_weight).sum();
    sum.min(cfg.complexity_ceiling)
}

/// Region-adjusted monthly infrastructure estimate, rounded to the
/// nearest dollar.
pub fn infra_estimate(selection: &Selection, region: Region, cfg: &PricingConfig) -> u32 {
    if selection.is_empty() {
        return 0;
    }
    let score = complexity_score(selection, cfg);
    let surcharges: u32 = selection.iter().map(infra_surcharge).sum();
    let raw = cfg.infra_baseline + score * cfg.infra_per_point + surcharges;
    (f64::from(raw) * region.cost_multiplier()).round() as u32
}

/// Compute the full price estimate for one recipe.
pub fn calculate_estimate(
    tier: Tier,
    selection: &Selection,
    addons: &Addons,
    region: Region,
    cfg: &PricingConfig,
) -> PriceEstimate {
    let (base_label, base_amount, base_recurring) = base_fee(tier);
    let mut breakdown =
        vec![PriceLine { label: base_label.to_string(), amount: base_amount, recurring: base_recurring }];

    for id in selection.iter() {
        let (label, fees) = item_fee(id);
        let amount = fees[(tier.as_u8() - 1) as usize];
        if amount > 0 {
            breakdown.push(PriceLine {
                label: label.to_string(),
                amount,
                recurring: tier.is_recurring(),
            });
        }
    }

    if addons.cicd {
        let (label, amount) = cicd_fee(tier);
        breakdown.push(PriceLine { label: label.to_string(), amount, recurring: false });
    }

    // Support outside tier 2 is ignored, never billed.
    if addons.support && tier == Tier::Managed {
        let (label, amount) = SUPPORT_FEE;
        breakdown.push(PriceLine { label: label.to_string(), amount, recurring: true });
    }

    let setup_fee = breakdown.iter().filter(|l| !l.recurring).map(|l| l.amount).sum();
    let monthly_fee = breakdown.iter().filter(|l| l.recurring).map(|l| l.amount).sum();

    PriceEstimate {
        setup_fee,
        monthly_fee,
        complexity_score: complexity_score(selection, cfg),
        infra_monthly_estimate: infra_estimate(selection, region, cfg),
        breakdown,
        starts_from: starts_from(tier),
    }
}
