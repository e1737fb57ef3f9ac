//! Deployment plan output types.

use serde::{Deserialize, Serialize};

use crate::catalog::ItemId;
use crate::model::recipe::{Region, Tier};

/// Category of a derived infrastructure component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComponentCategory {
    Edge,
    Network,
    Compute,
    Data,
    Async,
    Realtime,
    Ops,
    Compliance,
    Cicd,
}

impl ComponentCategory {
    /// Display label for consumers (BOM grouping headers).
    pub fn label(&self) -> &'static str {
        match self {
            Self::Edge => "Edge & CDN",
            Self::Network => "Network (VPC)",
            Self::Compute => "Compute",
            Self::Data => "Data stores",
            Self::Async => "Async / Queue",
            Self::Realtime => "Real-time",
            Self::Ops => "Observability",
            Self::Compliance => "Compliance",
            Self::Cicd => "CI/CD",
        }
    }
}

/// Placement group tag consumed by external diagram renderers.
///
/// Coordinate layout is out of scope; the tag is carried as data only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DiagramGroup {
    #[serde(rename = "external-left")]
    ExternalLeft,
    #[serde(rename = "public")]
    Public,
    #[serde(rename = "app")]
    App,
    #[serde(rename = "data")]
    Data,
    #[serde(rename = "async")]
    Async,
    #[serde(rename = "external-right")]
    ExternalRight,
}

/// Stable identifiers for derivable components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ComponentId {
    #[serde(rename = "internet")]
    Internet,
    #[serde(rename = "dns")]
    Dns,
    #[serde(rename = "acm")]
    TlsCert,
    #[serde(rename = "waf")]
    Waf,
    #[serde(rename = "cdn")]
    Cdn,
    #[serde(rename = "vpc")]
    Vpc,
    #[serde(rename = "alb")]
    LoadBalancer,
    #[serde(rename = "wsapi")]
    WebSocketApi,
    #[serde(rename = "compute")]
    Compute,
    #[serde(rename = "rds")]
    RelationalDb,
    #[serde(rename = "nosql")]
    KeyValueStore,
    #[serde(rename = "cache")]
    Cache,
    #[serde(rename = "search")]
    SearchIndex,
    #[serde(rename = "files")]
    ObjectStorage,
    #[serde(rename = "s3-frontend")]
    FrontendAssets,
    #[serde(rename = "queue")]
    Queue,
    #[serde(rename = "worker")]
    Worker,
    #[serde(rename = "monitoring")]
    Monitoring,
    #[serde(rename = "audit")]
    Audit,
    #[serde(rename = "cicd")]
    CiCd,
    #[serde(rename = "support")]
    Support,
}

impl ComponentId {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Internet => "internet",
            Self::Dns => "dns",
            Self::TlsCert => "acm",
            Self::Waf => "waf",
            Self::Cdn => "cdn",
            Self::Vpc => "vpc",
            Self::LoadBalancer => "alb",
            Self::WebSocketApi => "wsapi",
            Self::Compute => "compute",
            Self::RelationalDb => "rds",
            Self::KeyValueStore => "nosql",
            Self::Cache => "cache",
            Self::SearchIndex => "search",
            Self::ObjectStorage => "files",
            Self::FrontendAssets => "s3-frontend",
            Self::Queue => "queue",
            Self::Worker => "worker",
            Self::Monitoring => "monitoring",
            Self::Audit => "audit",
            Self::CiCd => "cicd",
            Self::Support => "support",
        }
    }
}

/// What caused a component to be included in the plan.
///
/// Serialized as a single string: either a catalog item token or one of
/// the add-on pseudo-tokens `cicd-addon` / `support-addon`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum PlanTrigger {
    Item(ItemId),
    CicdAddon,
    SupportAddon,
}

impl PlanTrigger {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Item(id) => id.as_str(),
            Self::CicdAddon => "cicd-addon",
            Self::SupportAddon => "support-addon",
        }
    }
}

impl From<PlanTrigger> for String {
    fn from(t: PlanTrigger) -> String {
        t.as_str().to_string()
    }
}

impl TryFrom<String> for PlanTrigger {
    type Error = crate::errors::PlanError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        match s.as_str() {
            "cicd-addon" => Ok(Self::CicdAddon),
            "support-addon" => Ok(Self::SupportAddon),
            other => ItemId::from_wire(other).map(Self::Item).ok_or_else(|| {
                crate::errors::PlanError::invalid_argument(format!("unknown trigger: {other}"))
            }),
        }
    }
}

/// A derived infrastructure building block.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanComponent {
    pub id: ComponentId,
    pub name: String,
    /// One-line subtitle shown under the name.
    pub subtitle: String,
    pub category: ComponentCategory,
    /// Underlying service names.
    pub services: Vec<String>,
    /// Descriptive detail lines; each line's presence is governed by the
    /// other active features that affect this component.
    pub details: Vec<String>,
    /// Selected items (or add-ons) that pulled this component in.
    pub driven_by: Vec<PlanTrigger>,
    pub diagram_group: DiagramGroup,
}

/// Subnet role within an availability zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SubnetRole {
    #[serde(rename = "public")]
    Public,
    #[serde(rename = "private-app")]
    PrivateApp,
    #[serde(rename = "private-data")]
    PrivateData,
}

impl SubnetRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Public => "public",
            Self::PrivateApp => "private-app",
            Self::PrivateData => "private-data",
        }
    }
}

/// One allocated subnet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subnet {
    /// Full availability-zone id, e.g. `us-east-1a`.
    pub az: String,
    pub role: SubnetRole,
    pub cidr: String,
}

/// The derived network shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VpcPlan {
    pub cidr: String,
    pub multi_az: bool,
    pub azs: Vec<String>,
    pub subnets: Vec<Subnet>,
}

/// Kind tag for a narrative flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlowKind {
    Request,
    Upload,
    Async,
    Telemetry,
}

/// A named, ordered sequence of plain-text steps describing one logical
/// traffic pattern. Purely descriptive.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanFlow {
    pub kind: FlowKind,
    pub name: String,
    pub steps: Vec<String>,
}

/// The aggregate, immutable compiler output.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeploymentPlan {
    pub tier: Tier,
    pub region: Region,
    pub vpc: VpcPlan,
    pub components: Vec<PlanComponent>,
    pub flows: Vec<PlanFlow>,
}

impl DeploymentPlan {
    /// Whether a component id is present in this plan.
    pub fn has_component(&self, id: ComponentId) -> bool {
        self.components.iter().any(|c| c.id == id)
    }

    /// Look up a component by id.
    pub fn component(&self, id: ComponentId) -> Option<&PlanComponent> {
        self.components.iter().find(|c| c.id == id)
    }
}
