//! Recipe input types: tier, region, add-ons, and the selection set.

use serde::{Deserialize, Serialize};

use crate::catalog::ItemId;
use crate::errors::{PlanError, PlanResult};

/// Delivery/ownership model.
///
/// Serialized as the integers 1-3, which are part of the payment payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Tier {
    /// One-time deploy into the customer's own AWS account.
    Deploy,
    /// Recurring, fully managed hosting.
    Managed,
    /// One-time Terraform-kit delivery; the customer deploys.
    Kit,
}

impl Tier {
    pub const ALL: &'static [Tier] = &[Self::Deploy, Self::Managed, Self::Kit];

    pub fn as_u8(&self) -> u8 {
        match self {
            Self::Deploy => 1,
            Self::Managed => 2,
            Self::Kit => 3,
        }
    }

    pub fn parse(n: u8) -> PlanResult<Self> {
        match n {
            1 => Ok(Self::Deploy),
            2 => Ok(Self::Managed),
            3 => Ok(Self::Kit),
            _ => Err(PlanError::invalid_argument(format!("unsupported tier: {n}"))),
        }
    }

    /// Whether the base fee (and per-item fees) recur monthly.
    pub fn is_recurring(&self) -> bool {
        matches!(self, Self::Managed)
    }
}

impl TryFrom<u8> for Tier {
    type Error = PlanError;
    fn try_from(n: u8) -> PlanResult<Self> {
        Self::parse(n)
    }
}

impl From<Tier> for u8 {
    fn from(t: Tier) -> u8 {
        t.as_u8()
    }
}

/// Supported deployment regions.
///
/// Region codes are stable wire tokens. The cost multiplier scales the
/// infrastructure-usage estimate; the baseline region multiplies by 1.00.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Region {
    #[serde(rename = "us-east-1")]
    UsEast1,
    #[serde(rename = "us-west-2")]
    UsWest2,
    #[serde(rename = "eu-west-1")]
    EuWest1,
    #[serde(rename = "eu-central-1")]
    EuCentral1,
    #[serde(rename = "ap-southeast-1")]
    ApSoutheast1,
}

impl Region {
    pub const ALL: &'static [Region] = &[
        Self::UsEast1,
        Self::UsWest2,
        Self::EuWest1,
        Self::EuCentral1,
        Self::ApSoutheast1,
    ];

    /// Return the stable region code.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::UsEast1 => "us-east-1",
            Self::UsWest2 => "us-west-2",
            Self::EuWest1 => "eu-west-1",
            Self::EuCentral1 => "eu-central-1",
            Self::ApSoutheast1 => "ap-southeast-1",
        }
    }

    pub fn parse(s: &str) -> PlanResult<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|r| r.as_str() == s)
            .ok_or_else(|| PlanError::invalid_argument(format!("unsupported region: {s}")))
    }

    /// Display label for consumers.
    pub fn label(&self) -> &'static str {
        match self {
            Self::UsEast1 => "US East (N. Virginia)",
            Self::UsWest2 => "US West (Oregon)",
            Self::EuWest1 => "EU (Ireland)",
            Self::EuCentral1 => "EU (Frankfurt)",
            Self::ApSoutheast1 => "Asia Pacific (Singapore)",
        }
    }

    /// Infrastructure cost multiplier relative to the baseline region.
    pub fn cost_multiplier(&self) -> f64 {
        match self {
            Self::UsEast1 => 1.00,
            Self::UsWest2 => 1.02,
            Self::EuWest1 => 1.05,
            Self::EuCentral1 => 1.10,
            Self::ApSoutheast1 => 1.20,
        }
    }
}

impl Default for Region {
    fn default() -> Self {
        Self::UsEast1
    }
}

/// Independent add-on toggles.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Addons {
    /// CI/CD pipeline setup (all tiers).
    pub cicd: bool,
    /// Ongoing support and infra changes. Only effective under
    /// [`Tier::Managed`]; ignored elsewhere.
    pub support: bool,
}

/// The customer's selected catalog items.
///
/// Insertion order is preserved for display, ids are de-duplicated, and
/// order never influences derivation output. Construction from wire strings
/// is permissive: unknown tokens are dropped, not errored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Selection {
    ids: Vec<ItemId>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a selection from typed ids, dropping duplicates.
    pub fn from_items(items: impl IntoIterator<Item = ItemId>) -> Self {
        let mut sel = Self::new();
        for id in items {
            sel.insert(id);
        }
        sel
    }

    /// Build a selection from wire tokens. Returns the selection plus the
    /// tokens that did not match any catalog item (stale or foreign ids).
    pub fn from_wire<'a>(tokens: impl IntoIterator<Item = &'a str>) -> (Self, Vec<String>) {
        let mut sel = Self::new();
        let mut unknown = Vec::new();
        for tok in tokens {
            match ItemId::from_wire(tok) {
                Some(id) => sel.insert(id),
                None => unknown.push(tok.to_string()),
            }
        }
        (sel, unknown)
    }

    /// Insert an id, keeping first-insertion order.
    pub fn insert(&mut self, id: ItemId) {
        if !self.ids.contains(&id) {
            self.ids.push(id);
        }
    }

    pub fn contains(&self, id: ItemId) -> bool {
        self.ids.contains(&id)
    }

    pub fn iter(&self) -> impl Iterator<Item = ItemId> + '_ {
        self.ids.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

/// The full compiler input: one customer recipe.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeRequest {
    pub tier: Tier,
    #[serde(default)]
    pub region: Region,
    #[serde(default)]
    pub selection: Selection,
    #[serde(default)]
    pub addons: Addons,
}
