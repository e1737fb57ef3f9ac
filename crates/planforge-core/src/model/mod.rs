//! planforge data models.
//!
//! Strongly-typed representations of the compiler's inputs (recipe) and
//! outputs (deployment plan, price estimate). Models are intentionally
//! "dumb" data: derivation logic lives in `rules`, `topology`, `pricing`,
//! and `flows`; validation policy lives in `validate`.
//!
//! Wire stability: serialized field names (camelCase) and the string tokens
//! for item ids, region codes, and component ids are persisted by external
//! consumers and must remain stable across versions.

pub mod plan;
pub mod price;
pub mod recipe;

pub use plan::{
    ComponentCategory, ComponentId, DeploymentPlan, DiagramGroup, FlowKind, PlanComponent,
    PlanFlow, PlanTrigger, Subnet, SubnetRole, VpcPlan,
};
pub use price::{PriceEstimate, PriceLine, StartsFrom};
pub use recipe::{Addons, RecipeRequest, Region, Selection, Tier};
