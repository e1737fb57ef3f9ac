//! The static recipe catalog.
//!
//! The catalog is the process-wide, read-only registry of selectable
//! feature items, grouped into topics. It is baked into the binary and
//! never mutated at runtime; every derivation reads it and nothing else.
//!
//! Wire stability: the string tokens returned by [`ItemId::as_str`] are
//! persisted by external consumers and sent to the payment backend. They
//! must never change across versions. New items may be added; existing
//! tokens are append-only.

use serde::{Deserialize, Serialize};

/// Topic grouping for catalog items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TopicCategory {
    Traffic,
    AppStyle,
    Data,
    Security,
    Reliability,
    Ops,
}

impl TopicCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Traffic => "traffic",
            Self::AppStyle => "appStyle",
            Self::Data => "data",
            Self::Security => "security",
            Self::Reliability => "reliability",
            Self::Ops => "ops",
        }
    }
}

/// A selectable catalog item, identified by a stable wire token.
///
/// This is a closed enum on purpose: every lookup table in the pricing and
/// rules modules matches on it exhaustively, so adding an item forces a
/// review of every table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ItemId {
    #[serde(rename = "traffic-prototype")]
    TrafficPrototype,
    #[serde(rename = "traffic-small")]
    TrafficSmall,
    #[serde(rename = "traffic-medium")]
    TrafficMedium,
    #[serde(rename = "traffic-large")]
    TrafficLarge,
    #[serde(rename = "style-static")]
    StyleStatic,
    #[serde(rename = "style-website-api")]
    StyleWebsiteApi,
    #[serde(rename = "style-api-first")]
    StyleApiFirst,
    #[serde(rename = "style-realtime")]
    StyleRealtime,
    #[serde(rename = "style-jobs")]
    StyleJobs,
    #[serde(rename = "data-sql")]
    DataSql,
    #[serde(rename = "data-nosql")]
    DataNosql,
    #[serde(rename = "data-files")]
    DataFiles,
    #[serde(rename = "data-cache")]
    DataCache,
    #[serde(rename = "data-search")]
    DataSearch,
    #[serde(rename = "sec-https")]
    SecHttps,
    #[serde(rename = "sec-waf")]
    SecWaf,
    #[serde(rename = "sec-private-db")]
    SecPrivateDb,
    #[serde(rename = "sec-compliance")]
    SecCompliance,
    #[serde(rename = "rel-single-az")]
    RelSingleAz,
    #[serde(rename = "rel-multi-az")]
    RelMultiAz,
    #[serde(rename = "rel-backups")]
    RelBackups,
    #[serde(rename = "rel-blue-green")]
    RelBlueGreen,
    #[serde(rename = "ops-basic")]
    OpsBasic,
    #[serde(rename = "ops-advanced")]
    OpsAdvanced,
}

impl ItemId {
    /// All catalog item ids, in catalog display order.
    pub const ALL: &'static [ItemId] = &[
        Self::TrafficPrototype,
        Self::TrafficSmall,
        Self::TrafficMedium,
        Self::TrafficLarge,
        Self::StyleStatic,
        Self::StyleWebsiteApi,
        Self::StyleApiFirst,
        Self::StyleRealtime,
        Self::StyleJobs,
        Self::DataSql,
        Self::DataNosql,
        Self::DataFiles,
        Self::DataCache,
        Self::DataSearch,
        Self::SecHttps,
        Self::SecWaf,
        Self::SecPrivateDb,
        Self::SecCompliance,
        Self::RelSingleAz,
        Self::RelMultiAz,
        Self::RelBackups,
        Self::RelBlueGreen,
        Self::OpsBasic,
        Self::OpsAdvanced,
    ];

    /// Return the stable wire token for this item.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::TrafficPrototype => "traffic-prototype",
            Self::TrafficSmall => "traffic-small",
            Self::TrafficMedium => "traffic-medium",
            Self::TrafficLarge => "traffic-large",
            Self::StyleStatic => "style-static",
            Self::StyleWebsiteApi => "style-website-api",
            Self::StyleApiFirst => "style-api-first",
            Self::StyleRealtime => "style-realtime",
            Self::StyleJobs => "style-jobs",
            Self::DataSql => "data-sql",
            Self::DataNosql => "data-nosql",
            Self::DataFiles => "data-files",
            Self::DataCache => "data-cache",
            Self::DataSearch => "data-search",
            Self::SecHttps => "sec-https",
            Self::SecWaf => "sec-waf",
            Self::SecPrivateDb => "sec-private-db",
            Self::SecCompliance => "sec-compliance",
            Self::RelSingleAz => "rel-single-az",
            Self::RelMultiAz => "rel-multi-az",
            Self::RelBackups => "rel-backups",
            Self::RelBlueGreen => "rel-blue-green",
            Self::OpsBasic => "ops-basic",
            Self::OpsAdvanced => "ops-advanced",
        }
    }

    /// Parse a wire token. Unknown tokens return `None`; the compiler is
    /// permissive by design since persisted selections may reference items
    /// from an older catalog revision.
    pub fn from_wire(s: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|id| id.as_str() == s)
    }

    /// The topic category this item belongs to.
    pub fn category(&self) -> TopicCategory {
        match self {
            Self::TrafficPrototype | Self::TrafficSmall | Self::TrafficMedium | Self::TrafficLarge => {
                TopicCategory::Traffic
            }
            Self::StyleStatic
            | Self::StyleWebsiteApi
            | Self::StyleApiFirst
            | Self::StyleRealtime
            | Self::StyleJobs => TopicCategory::AppStyle,
            Self::DataSql | Self::DataNosql | Self::DataFiles | Self::DataCache | Self::DataSearch => {
                TopicCategory::Data
            }
            Self::SecHttps | Self::SecWaf | Self::SecPrivateDb | Self::SecCompliance => {
                TopicCategory::Security
            }
            Self::RelSingleAz | Self::RelMultiAz | Self::RelBackups | Self::RelBlueGreen => {
                TopicCategory::Reliability
            }
            Self::OpsBasic | Self::OpsAdvanced => TopicCategory::Ops,
        }
    }
}

/// An atomic selectable feature, as displayed by consumers.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeItem {
    pub id: ItemId,
    pub label: &'static str,
    pub category: TopicCategory,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<&'static str>,
    /// Human-readable service hints shown alongside the item.
    pub hints: &'static [&'static str],
}

/// A named grouping of items sharing a category.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Topic {
    pub id: TopicCategory,
    pub label: &'static str,
    /// At most one item of an exclusive topic may be selected at once.
    /// Enforced by the consumer; [`crate::validate`] reports violations.
    pub exclusive: bool,
    pub items: &'static [RecipeItem],
}

/// The full catalog, in display order.
pub const TOPICS: &[Topic] = &[
    Topic {
        id: TopicCategory::Traffic,
        label: "Traffic & scale",
        exclusive: true,
        items: &[
            RecipeItem {
                id: ItemId::TrafficPrototype,
                label: "Prototype",
                category: TopicCategory::Traffic,
                description: Some("0-100 users"),
                hints: &["t3.micro EC2 or Lambda", "Single-AZ RDS if needed", "No CDN required"],
            },
            RecipeItem {
                id: ItemId::TrafficSmall,
                label: "Small",
                category: TopicCategory::Traffic,
                description: Some("100-1,000 users"),
                hints: &["t3.small/medium EC2 or Lambda", "RDS single-AZ", "CloudFront optional"],
            },
            RecipeItem {
                id: ItemId::TrafficMedium,
                label: "Medium",
                category: TopicCategory::Traffic,
                description: Some("1k-100k users"),
                hints: &["ECS Fargate + ALB + Auto Scaling", "RDS Multi-AZ", "CloudFront CDN"],
            },
            RecipeItem {
                id: ItemId::TrafficLarge,
                label: "Large",
                category: TopicCategory::Traffic,
                description: Some("100k+ users"),
                hints: &[
                    "ECS/EKS with horizontal scaling",
                    "Aurora Global or RDS Multi-AZ",
                    "CloudFront + WAF",
                ],
            },
        ],
    },
    Topic {
        id: TopicCategory::AppStyle,
        label: "App style",
        exclusive: false,
        items: &[
            RecipeItem {
                id: ItemId::StyleStatic,
                label: "Static website only",
                category: TopicCategory::AppStyle,
                description: None,
                hints: &["S3 + CloudFront", "No server required"],
            },
            RecipeItem {
                id: ItemId::StyleWebsiteApi,
                label: "Website + API",
                category: TopicCategory::AppStyle,
                description: None,
                hints: &["CloudFront + S3 (frontend)", "API Gateway or ALB + Lambda/ECS (API)"],
            },
            RecipeItem {
                id: ItemId::StyleApiFirst,
                label: "API-first backend",
                category: TopicCategory::AppStyle,
                description: None,
                hints: &["API Gateway + Lambda", "or ALB + ECS Fargate"],
            },
            RecipeItem {
                id: ItemId::StyleRealtime,
                label: "Realtime (websockets)",
                category: TopicCategory::AppStyle,
                description: None,
                hints: &["WebSocket API Gateway", "or ALB + ECS with sticky sessions"],
            },
            RecipeItem {
                id: ItemId::StyleJobs,
                label: "Background jobs",
                category: TopicCategory::AppStyle,
                description: None,
                hints: &["SQS + Lambda", "or SQS + ECS worker"],
            },
        ],
    },
    Topic {
        id: TopicCategory::Data,
        label: "Data needs",
        exclusive: false,
        items: &[
            RecipeItem {
                id: ItemId::DataSql,
                label: "SQL database",
                category: TopicCategory::Data,
                description: None,
                hints: &["RDS PostgreSQL", "or Aurora Serverless v2"],
            },
            RecipeItem {
                id: ItemId::DataNosql,
                label: "NoSQL (key-value)",
                category: TopicCategory::Data,
                description: None,
                hints: &["DynamoDB"],
            },
            RecipeItem {
                id: ItemId::DataFiles,
                label: "File uploads",
                category: TopicCategory::Data,
                description: None,
                hints: &["S3 with pre-signed URLs", "optionally CloudFront for delivery"],
            },
            RecipeItem {
                id: ItemId::DataCache,
                label: "Caching",
                category: TopicCategory::Data,
                description: None,
                hints: &["ElastiCache Redis", "or DAX for DynamoDB"],
            },
            RecipeItem {
                id: ItemId::DataSearch,
                label: "Full-text search",
                category: TopicCategory::Data,
                description: None,
                hints: &["OpenSearch (Elasticsearch)", "or RDS with pg_trgm extension"],
            },
        ],
    },
    Topic {
        id: TopicCategory::Security,
        label: "Security needs",
        exclusive: false,
        items: &[
            RecipeItem {
                id: ItemId::SecHttps,
                label: "HTTPS",
                category: TopicCategory::Security,
                description: None,
                hints: &["ACM certificate", "ALB or CloudFront TLS termination"],
            },
            RecipeItem {
                id: ItemId::SecWaf,
                label: "WAF / rate limiting",
                category: TopicCategory::Security,
                description: None,
                hints: &["AWS WAF on CloudFront or ALB", "Rate-based rules included"],
            },
            RecipeItem {
                id: ItemId::SecPrivateDb,
                label: "Private DB (no public access)",
                category: TopicCategory::Security,
                description: None,
                hints: &["RDS in private subnet", "VPC + Security Groups"],
            },
            RecipeItem {
                id: ItemId::SecCompliance,
                label: "Compliance-ish",
                category: TopicCategory::Security,
                description: Some("Audit logs, encryption"),
                hints: &[
                    "CloudTrail + S3 audit logs",
                    "KMS encryption at rest",
                    "RDS encryption enabled",
                ],
            },
        ],
    },
    Topic {
        id: TopicCategory::Reliability,
        label: "Reliability",
        exclusive: false,
        items: &[
            RecipeItem {
                id: ItemId::RelSingleAz,
                label: "Single AZ ok",
                category: TopicCategory::Reliability,
                description: None,
                hints: &["Resources in one AZ", "Lower cost, some downtime risk"],
            },
            RecipeItem {
                id: ItemId::RelMultiAz,
                label: "Multi-AZ HA",
                category: TopicCategory::Reliability,
                description: None,
                hints: &["ALB + Auto Scaling across AZs", "RDS Multi-AZ standby"],
            },
            RecipeItem {
                id: ItemId::RelBackups,
                label: "Backups + PITR",
                category: TopicCategory::Reliability,
                description: Some("Point-in-time restore"),
                hints: &["RDS automated backups (7-35 days)", "S3 versioning enabled"],
            },
            RecipeItem {
                id: ItemId::RelBlueGreen,
                label: "Blue/green deploy",
                category: TopicCategory::Reliability,
                description: None,
                hints: &["CodeDeploy blue/green", "or ECS rolling + circuit breaker"],
            },
        ],
    },
    Topic {
        id: TopicCategory::Ops,
        label: "Ops",
        exclusive: false,
        items: &[
            RecipeItem {
                id: ItemId::OpsBasic,
                label: "Basic monitoring",
                category: TopicCategory::Ops,
                description: None,
                hints: &["CloudWatch metrics + alarms", "Basic dashboard included"],
            },
            RecipeItem {
                id: ItemId::OpsAdvanced,
                label: "Advanced monitoring",
                category: TopicCategory::Ops,
                description: Some("Tracing + SLOs"),
                hints: &["CloudWatch + X-Ray tracing", "SLO dashboards", "SNS or PagerDuty alerting"],
            },
        ],
    },
];

/// Look up a catalog item by id.
pub fn find_item(id: ItemId) -> &'static RecipeItem {
    for topic in TOPICS {
        for item in topic.items {
            if item.id == id {
                return item;
            }
        }
    }
    // ItemId is a closed enum and every variant appears in TOPICS.
    unreachable!("catalog item missing for {:?}", id)
}

/// Total number of items across all topics.
pub fn item_count() -> usize {
    TOPICS.iter().map(|t| t.items.len()).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_item_id_appears_in_catalog() {
        for id in ItemId::ALL {
            let item = find_item(*id);
            assert_eq!(item.id, *id);
            assert_eq!(item.category, id.category());
        }
        assert_eq!(item_count(), ItemId::ALL.len());
    }

    #[test]
    fn wire_tokens_round_trip() {
        for id in ItemId::ALL {
            assert_eq!(ItemId::from_wire(id.as_str()), Some(*id));
        }
        assert_eq!(ItemId::from_wire("not-an-item"), None);
    }

    #[test]
    fn serde_uses_wire_tokens() {
        let j = serde_json::to_string(&ItemId::StyleWebsiteApi).unwrap();
        assert_eq!(j, "\"style-website-api\"");
        let back: ItemId = serde_json::from_str("\"data-sql\"").unwrap();
        assert_eq!(back, ItemId::DataSql);
    }

    #[test]
    fn only_traffic_topic_is_exclusive() {
        for topic in TOPICS {
            assert_eq!(topic.exclusive, topic.id == TopicCategory::Traffic);
        }
    }

    #[test]
    fn topic_items_match_topic_category() {
        for topic in TOPICS {
            for item in topic.items {
                assert_eq!(item.category, topic.id);
            }
        }
    }
}
