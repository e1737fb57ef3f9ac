//! planforge-core
//!
//! The deployment plan compiler:
//! - static recipe catalog with stable wire tokens
//! - rules engine deriving an ordered, priced component list
//! - network topology builder (VPC/AZ/subnet layout)
//! - pricing engine (provider fee + infrastructure-usage estimate)
//! - flow narrator (request/upload/async/telemetry paths)
//!
//! Everything here is a pure function over explicit inputs: no I/O, no
//! clocks, no shared mutable state. Derivations are total; unknown item
//! ids are dropped at the selection boundary and never error.

pub mod catalog;
pub mod compile;
pub mod config;
pub mod errors;
pub mod flows;
pub mod model;
pub mod pricing;
pub mod rules;
pub mod topology;
pub mod validate;
pub mod version;

pub use crate::errors::{PlanError, PlanResult};

/// Convenience re-exports.
pub mod prelude {
    pub use crate::catalog::{ItemId, RecipeItem, Topic, TopicCategory, TOPICS};
    pub use crate::compile::{
        compile_recipe, compile_recipe_with, CheckoutSummary, Diagnostic, DiagnosticLevel,
        PlanReport,
    };
    pub use crate::config::PricingConfig;
    pub use crate::model::plan::{
        ComponentCategory, ComponentId, DeploymentPlan, DiagramGroup, FlowKind, PlanComponent,
        PlanFlow, PlanTrigger, Subnet, SubnetRole, VpcPlan,
    };
    pub use crate::model::price::{PriceEstimate, PriceLine, StartsFrom};
    pub use crate::model::recipe::{Addons, RecipeRequest, Region, Selection, Tier};
    pub use crate::{PlanError, PlanResult};
}
