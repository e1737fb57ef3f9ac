//! Price estimate output types.
//!
//! All monetary amounts are whole US dollars. Any fractional intermediate
//! (region-multiplied estimates) is rounded to the nearest dollar, never
//! truncated.

use serde::{Deserialize, Serialize};

/// A single line in the provider-fee breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceLine {
    pub label: String,
    pub amount: u32,
    /// `true` = recurring monthly charge; `false` = one-time/setup charge.
    pub recurring: bool,
}

/// Floor prices shown on tier cards ("Starts from").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StartsFrom {
    pub setup_fee: u32,
    /// Always 0 for the one-time tiers.
    pub monthly_fee: u32,
}

/// Aggregate pricing output.
///
/// The provider fee (setup + monthly, itemized in `breakdown`) is what the
/// customer pays the provider. The infrastructure estimate is what the
/// cloud vendor bills separately; it is region-adjusted and clearly an
/// estimate, not a quote.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceEstimate {
    /// One-time setup/deployment fee.
    pub setup_fee: u32,
    /// Recurring monthly fee. 0 for the one-time tiers unless an add-on
    /// applies.
    pub monthly_fee: u32,
    /// Raw complexity point total derived from selected items.
    pub complexity_score: u32,
    /// Estimated monthly infrastructure spend, region-adjusted.
    pub infra_monthly_estimate: u32,
    /// Itemized provider-fee lines; filtering on `recurring` and summing
    /// reconstructs `setup_fee` and `monthly_fee`.
    pub breakdown: Vec<PriceLine>,
    pub starts_from: StartsFrom,
}

impl PriceEstimate {
    /// Sum of one-time lines in the breakdown.
    pub fn breakdown_setup_total(&self) -> u32 {
        self.breakdown.iter().filter(|l| !l.recurring).map(|l| l.amount).sum()
    }

    /// Sum of recurring lines in the breakdown.
    pub fn breakdown_monthly_total(&self) -> u32 {
        self.breakdown.iter().filter(|l| l.recurring).map(|l| l.amount).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn breakdown_totals_split_by_recurring_flag() {
        let e = PriceEstimate {
            setup_fee: 0,
            monthly_fee: 0,
            complexity_score: 0,
            infra_monthly_estimate: 0,
            breakdown: vec![
                PriceLine { label: "a".into(), amount: 100, recurring: false },
                PriceLine { label: "b".into(), amount: 25, recurring: true },
                PriceLine { label: "c".into(), amount: 75, recurring: true },
            ],
            starts_from: StartsFrom { setup_fee: 0, monthly_fee: 0 },
        };
        assert_eq!(e.breakdown_setup_total(), 100);
        assert_eq!(e.breakdown_monthly_total(), 100);
    }
}
