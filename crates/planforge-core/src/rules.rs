//! The rules engine: selected items in, ordered components out.
//!
//! Component inclusion is governed by independently-evaluable boolean
//! feature predicates derived from the selection. The output order is
//! fixed by this module and never depends on selection order.
//!
//! Detail lines are cross-cut: every component's description is assembled
//! from the *other* active features that affect it (a Multi-AZ line on the
//! relational database, an encryption line under compliance, and so on).
//! The set of governing conditions is a contract; the wording is not.
//!
//! The engine is total: unknown ids never reach it (dropped at the
//! `Selection` boundary), overlapping predicates are tolerated, and the
//! realtime entry point and the HTTP load balancer are mutually exclusive
//! by construction of the predicates, never both.

use crate::catalog::ItemId;
use crate::model::plan::{
    ComponentCategory, ComponentId, DiagramGroup, PlanComponent, PlanTrigger, VpcPlan,
};
use crate::model::recipe::{Addons, Selection, Tier};

/// Boolean feature predicates derived from one recipe.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FeatureFlags {
    pub is_static: bool,
    pub has_web_api: bool,
    pub is_api_first: bool,
    pub is_realtime: bool,
    pub has_jobs: bool,
    pub has_sql: bool,
    pub has_nosql: bool,
    pub has_files: bool,
    pub has_cache: bool,
    pub has_search: bool,
    pub has_https: bool,
    pub has_waf: bool,
    pub has_private_db: bool,
    pub has_compliance: bool,
    pub multi_az: bool,
    pub has_backups: bool,
    pub has_blue_green: bool,
    pub has_basic_mon: bool,
    pub has_adv_mon: bool,
    pub cicd: bool,
    /// Support add-on, effective only under [`Tier::Managed`].
    pub support: bool,
}

impl FeatureFlags {
    /// Evaluate the predicate battery for one recipe.
    pub fn derive(tier: Tier, selection: &Selection, addons: &Addons) -> Self {
        let has = |id| selection.contains(id);
        Self {
            is_static: has(ItemId::StyleStatic),
            has_web_api: has(ItemId::StyleWebsiteApi),
            is_api_first: has(ItemId::StyleApiFirst),
            is_realtime: has(ItemId::StyleRealtime),
            has_jobs: has(ItemId::StyleJobs),
            has_sql: has(ItemId::DataSql),
            has_nosql: has(ItemId::DataNosql),
            has_files: has(ItemId::DataFiles),
            has_cache: has(ItemId::DataCache),
            has_search: has(ItemId::DataSearch),
            has_https: has(ItemId::SecHttps),
            has_waf: has(ItemId::SecWaf),
            has_private_db: has(ItemId::SecPrivateDb),
            has_compliance: has(ItemId::SecCompliance),
            multi_az: has(ItemId::RelMultiAz),
            has_backups: has(ItemId::RelBackups),
            has_blue_green: has(ItemId::RelBlueGreen),
            has_basic_mon: has(ItemId::OpsBasic),
            has_adv_mon: has(ItemId::OpsAdvanced),
            cicd: addons.cicd,
            support: addons.support && tier == Tier::Managed,
        }
    }

    /// A CDN fronts static sites and website+API apps.
    pub fn needs_cdn(&self) -> bool {
        self.is_static || self.has_web_api
    }

    /// Any app style other than pure-static requires compute, as does
    /// website+API (its API half).
    pub fn needs_compute(&self) -> bool {
        self.has_web_api || self.is_api_first || self.is_realtime || self.has_jobs
    }

    /// HTTP entry point. Realtime apps use a WebSocket API instead; the
    /// two are mutually exclusive here by construction.
    pub fn needs_alb(&self) -> bool {
        !self.is_realtime && (self.has_web_api || self.is_api_first || self.has_jobs)
    }

    /// A VPC shell exists whenever any compute or in-VPC data store will.
    pub fn needs_vpc(&self) -> bool {
        self.needs_compute() || self.has_sql || self.has_nosql || self.has_cache || self.has_search
    }

    /// Any monitoring component present.
    pub fn has_monitoring(&self) -> bool {
        self.has_basic_mon || self.has_adv_mon
    }
}

/// Push `line` when `cond` holds. Detail predicates are independent
/// booleans; there is no order-dependence between them.
fn push_if(details: &mut Vec<String>, cond: bool, line: impl Into<String>) {
    if cond {
        details.push(line.into());
    }
}

/// Of the candidate triggers, keep those actually selected.
fn selected(selection: &Selection, candidates: &[ItemId]) -> Vec<PlanTrigger> {
    candidates
        .iter()
        .copied()
        .filter(|id| selection.contains(*id))
        .map(PlanTrigger::Item)
        .collect()
}

fn strings(xs: &[&str]) -> Vec<String> {
    xs.iter().map(|s| s.to_string()).collect()
}

/// Derive the ordered component list for one recipe.
///
/// The order is fixed: internet, DNS, TLS, WAF, CDN, VPC, entry point,
/// compute, data stores, queue+worker, monitoring, audit, CI/CD, support.
pub fn derive_components(
    tier: Tier,
    selection: &Selection,
    flags: &FeatureFlags,
    vpc: &VpcPlan,
) -> Vec<PlanComponent> {
    let mut out = Vec::new();

    // Internet, always first.
    out.push(PlanComponent {
        id: ComponentId::Internet,
        name: "Internet".into(),
        subtitle: "Public traffic entry".into(),
        category: ComponentCategory::Edge,
        services: vec![],
        details: strings(&["Public inbound traffic from end-users and clients"]),
        driven_by: vec![],
        diagram_group: DiagramGroup::ExternalLeft,
    });

    // DNS, always.
    out.push(PlanComponent {
        id: ComponentId::Dns,
        name: "DNS".into(),
        subtitle: "Route 53 (optional)".into(),
        category: ComponentCategory::Edge,
        services: strings(&["Route 53"]),
        details: strings(&[
            "Custom domain routing via Route 53 hosted zone",
            "Health-check based failover if Multi-AZ is selected",
            "Can be managed externally; Route 53 is optional",
        ]),
        driven_by: vec![],
        diagram_group: DiagramGroup::ExternalLeft,
    });

    if flags.has_https {
        out.push(PlanComponent {
            id: ComponentId::TlsCert,
            name: "TLS Certificate".into(),
            subtitle: "ACM-managed".into(),
            category: ComponentCategory::Edge,
            services: strings(&["AWS Certificate Manager"]),
            details: strings(&[
                "Managed TLS certificate via ACM, free and auto-renewing",
                "Attached to CloudFront or ALB for HTTPS termination",
            ]),
            driven_by: vec![PlanTrigger::Item(ItemId::SecHttps)],
            diagram_group: DiagramGroup::ExternalLeft,
        });
    }

    if flags.has_waf {
        out.push(PlanComponent {
            id: ComponentId::Waf,
            name: "WAF".into(),
            subtitle: "Rate limiting & rules".into(),
            category: ComponentCategory::Edge,
            services: strings(&["AWS WAF"]),
            details: strings(&[
                "Web Application Firewall in front of CloudFront or ALB",
                "Rate-based rules to block abusive IPs",
                "Managed rule groups (common threats, SQLi, XSS)",
            ]),
            driven_by: vec![PlanTrigger::Item(ItemId::SecWaf)],
            diagram_group: DiagramGroup::ExternalLeft,
        });
    }

    if flags.needs_cdn() {
        let mut details = strings(&[
            "Global CDN with 400+ points of presence via CloudFront",
            "Caches static assets at the edge (HTML, CSS, JS, images)",
        ]);
        details.push(if flags.has_https {
            "HTTPS/TLS enforced via ACM certificate".into()
        } else {
            "HTTP only (HTTPS recommended)".into()
        });
        push_if(&mut details, flags.has_waf, "WAF rules evaluated before origin requests");
        out.push(PlanComponent {
            id: ComponentId::Cdn,
            name: "CDN".into(),
            subtitle: "CloudFront global edge".into(),
            category: ComponentCategory::Edge,
            services: strings(&["CloudFront", "ACM"]),
            details,
            driven_by: selected(selection, &[ItemId::StyleStatic, ItemId::StyleWebsiteApi]),
            diagram_group: DiagramGroup::ExternalLeft,
        });
    }

    if flags.needs_vpc() {
        let az_count = if flags.multi_az { "2 AZs" } else { "1 AZ" };
        let mut details = vec![format!("CIDR: {}", vpc.cidr)];
        details.push(if flags.multi_az {
            format!("Spans 2 AZs ({}) for high availability", vpc.azs.join(", "))
        } else {
            format!("Single AZ ({})", vpc.azs[0])
        });
        details.extend(strings(&[
            "Internet Gateway for public subnet egress",
            "NAT Gateway for private subnet outbound traffic",
            "Security Groups as per-resource firewall rules",
            "VPC Flow Logs enabled for network auditing",
        ]));
        out.push(PlanComponent {
            id: ComponentId::Vpc,
            name: "VPC".into(),
            subtitle: format!("{} / {}", vpc.cidr, az_count),
            category: ComponentCategory::Network,
            services: strings(&["VPC", "Internet Gateway", "NAT Gateway"]),
            details,
            driven_by: vec![],
            diagram_group: DiagramGroup::ExternalLeft,
        });
    }

    if flags.needs_alb() {
        let mut services = strings(&["ALB", "ACM"]);
        if flags.has_waf {
            services.push("WAF".into());
        }
        let mut details = vec!["Application Load Balancer in public subnet".to_string()];
        details.push(if flags.has_https {
            "TLS termination via ACM certificate".into()
        } else {
            "HTTP listener (HTTPS recommended)".into()
        });
        details.push(if flags.multi_az {
            "Multi-AZ targets for high availability".into()
        } else {
            "Single-AZ target group".into()
        });
        details.push("Health checks on /health endpoint".into());
        push_if(&mut details, flags.has_waf, "WAF rules evaluated on each request");
        push_if(
            &mut details,
            flags.has_blue_green,
            "Blue/green deploy via weighted target groups",
        );
        out.push(PlanComponent {
            id: ComponentId::LoadBalancer,
            name: "HTTPS Load Balancer".into(),
            subtitle: "Application Load Balancer".into(),
            category: ComponentCategory::Compute,
            services,
            details,
            driven_by: selected(
                selection,
                &[ItemId::StyleWebsiteApi, ItemId::StyleApiFirst, ItemId::StyleJobs],
            ),
            diagram_group: DiagramGroup::Public,
        });
    }

    if flags.is_realtime {
        let mut details = strings(&[
            "Managed WebSocket API via API Gateway",
            "Persistent connections for real-time push events",
        ]);
        details.push(if flags.has_https {
            "WSS/TLS enforced".into()
        } else {
            "WS only (WSS recommended)".into()
        });
        details.extend(strings(&[
            "Connection table stored in DynamoDB (connectionId)",
            "Routes: $connect, $disconnect, $default plus custom routes",
        ]));
        out.push(PlanComponent {
            id: ComponentId::WebSocketApi,
            name: "WebSocket API".into(),
            subtitle: "Real-time connections".into(),
            category: ComponentCategory::Realtime,
            services: strings(&["API Gateway (WebSocket)", "ACM"]),
            details,
            driven_by: vec![PlanTrigger::Item(ItemId::StyleRealtime)],
            diagram_group: DiagramGroup::Public,
        });
    }

    if flags.needs_compute() {
        let name = if flags.is_realtime {
            "WS Handlers"
        } else if flags.is_api_first {
            "API Compute"
        } else {
            "App Compute"
        };
        let is_kit = tier == Tier::Kit;
        let services = if is_kit {
            strings(&["Lambda or ECS Fargate (Terraform)"])
        } else {
            strings(&["ECS Fargate", "Lambda", "ECR"])
        };
        let mut details = Vec::new();
        details.push(if is_kit {
            "Terraform module supports both Lambda (serverless) and ECS Fargate (containers)".into()
        } else {
            "Lambda or ECS Fargate selected per workload characteristics".into()
        });
        details.push("Private-app subnet, no direct public internet access".into());
        details.push(if flags.multi_az {
            "Deployed across 2 AZs for high availability".into()
        } else {
            "Single-AZ deployment".into()
        });
        details.push(if flags.has_blue_green {
            "Blue/green deployment with zero-downtime rollouts".into()
        } else {
            "Rolling deploy strategy".into()
        });
        push_if(&mut details, flags.cicd, "Deployed via GitHub Actions OIDC pipeline");
        if flags.has_adv_mon {
            details.push("X-Ray tracing instrumented".into());
        } else if flags.has_basic_mon {
            details.push("CloudWatch metrics + alarms".into());
        }
        out.push(PlanComponent {
            id: ComponentId::Compute,
            name: name.into(),
            subtitle: if is_kit {
                "Containers / serverless (you deploy)".into()
            } else {
                "Lambda / ECS Fargate".into()
            },
            category: ComponentCategory::Compute,
            services,
            details,
            driven_by: selected(
                selection,
                &[
                    ItemId::StyleWebsiteApi,
                    ItemId::StyleApiFirst,
                    ItemId::StyleRealtime,
                    ItemId::StyleJobs,
                ],
            ),
            diagram_group: DiagramGroup::App,
        });
    }

    if flags.has_sql {
        let mut services = strings(&["RDS PostgreSQL"]);
        if flags.multi_az {
            services.push("Multi-AZ Standby".into());
        }
        let mut details = vec!["RDS PostgreSQL in private-data subnet".to_string()];
        details.push(if flags.multi_az {
            "Multi-AZ standby replica, automatic failover under 60s".into()
        } else {
            "Single-AZ instance".into()
        });
        push_if(
            &mut details,
            flags.has_private_db,
            "No public access: VPC-only with strict security group",
        );
        push_if(
            &mut details,
            flags.has_backups,
            "Automated backups with point-in-time restore (7-35 days)",
        );
        push_if(&mut details, flags.has_compliance, "Storage encrypted at rest via KMS");
        details.push("Parameter group tuned for production (connection pooling, autovacuum)".into());
        out.push(PlanComponent {
            id: ComponentId::RelationalDb,
            name: "Relational DB".into(),
            subtitle: "PostgreSQL / RDS".into(),
            category: ComponentCategory::Data,
            services,
            details,
            driven_by: vec![PlanTrigger::Item(ItemId::DataSql)],
            diagram_group: DiagramGroup::Data,
        });
    }

    if flags.has_nosql {
        let mut services = strings(&["DynamoDB"]);
        if flags.multi_az {
            services.push("Global Tables (optional)".into());
        }
        let mut details = strings(&[
            "DynamoDB with single-digit millisecond reads",
            "On-demand capacity mode (auto-scales, pay-per-request)",
        ]);
        push_if(&mut details, flags.has_backups, "Point-in-time recovery (PITR) enabled");
        push_if(&mut details, flags.has_compliance, "Encryption at rest via KMS");
        push_if(&mut details, flags.is_realtime, "Stores the WebSocket connectionId table");
        out.push(PlanComponent {
            id: ComponentId::KeyValueStore,
            name: "Key-Value Store".into(),
            subtitle: "DynamoDB".into(),
            category: ComponentCategory::Data,
            services,
            details,
            driven_by: vec![PlanTrigger::Item(ItemId::DataNosql)],
            diagram_group: DiagramGroup::Data,
        });
    }

    if flags.has_cache {
        let mut details = vec!["ElastiCache for Redis in private-data subnet".to_string()];
        details.push(if flags.multi_az {
            "Multi-AZ with automatic failover".into()
        } else {
            "Single-node".into()
        });
        details.push("Sub-millisecond reads: session store, rate limiting, hot data".into());
        push_if(&mut details, flags.has_compliance, "Encryption in transit and at rest");
        out.push(PlanComponent {
            id: ComponentId::Cache,
            name: "Cache".into(),
            subtitle: "Redis / ElastiCache".into(),
            category: ComponentCategory::Data,
            services: strings(&["ElastiCache for Redis"]),
            details,
            driven_by: vec![PlanTrigger::Item(ItemId::DataCache)],
            diagram_group: DiagramGroup::Data,
        });
    }

    if flags.has_search {
        let mut details = strings(&[
            "Amazon OpenSearch (managed Elasticsearch) in private-data subnet",
            "Full-text search and analytics with millisecond latency",
        ]);
        details.push(if flags.multi_az {
            "2-node cluster across AZs".into()
        } else {
            "1-node dev cluster".into()
        });
        push_if(
            &mut details,
            flags.has_compliance,
            "Fine-grained access control plus at-rest encryption",
        );
        out.push(PlanComponent {
            id: ComponentId::SearchIndex,
            name: "Search Index".into(),
            subtitle: "OpenSearch".into(),
            category: ComponentCategory::Data,
            services: strings(&["Amazon OpenSearch Service"]),
            details,
            driven_by: vec![PlanTrigger::Item(ItemId::DataSearch)],
            diagram_group: DiagramGroup::Data,
        });
    }

    if flags.has_files {
        let mut services = strings(&["S3"]);
        if flags.needs_cdn() {
            services.push("CloudFront (delivery)".into());
        }
        let mut details = strings(&[
            "S3 bucket for user-uploaded files",
            "Pre-signed URLs generated by compute; clients upload directly",
        ]);
        details.push(if flags.has_compliance {
            "Server-side encryption (SSE-KMS)".into()
        } else {
            "SSE-S3 encryption".into()
        });
        push_if(&mut details, flags.has_backups, "Versioning enabled for file recovery");
        push_if(
            &mut details,
            flags.needs_cdn(),
            "CloudFront distribution for fast global delivery",
        );
        out.push(PlanComponent {
            id: ComponentId::ObjectStorage,
            name: "Object Storage".into(),
            subtitle: "S3 / file uploads".into(),
            category: ComponentCategory::Data,
            services,
            details,
            driven_by: vec![PlanTrigger::Item(ItemId::DataFiles)],
            diagram_group: DiagramGroup::Data,
        });
    }

    if flags.needs_cdn() {
        out.push(PlanComponent {
            id: ComponentId::FrontendAssets,
            name: "Frontend Assets".into(),
            subtitle: "S3 / static hosting".into(),
            category: ComponentCategory::Data,
            services: strings(&["S3", "CloudFront OAC"]),
            details: strings(&[
                "S3 bucket for the compiled frontend (HTML/CSS/JS)",
                "Private bucket, accessible only via CloudFront OAC",
                "Deployed on each build by CI/CD or the provider",
            ]),
            driven_by: selected(selection, &[ItemId::StyleStatic, ItemId::StyleWebsiteApi]),
            diagram_group: DiagramGroup::Data,
        });
    }

    // Queue and worker always appear together.
    if flags.has_jobs {
        out.push(PlanComponent {
            id: ComponentId::Queue,
            name: "Message Queue".into(),
            subtitle: "SQS / async tasks".into(),
            category: ComponentCategory::Async,
            services: strings(&["SQS (Standard or FIFO)"]),
            details: strings(&[
                "SQS queue for decoupled async task processing",
                "Visibility timeout prevents duplicate processing",
                "Dead-letter queue (DLQ) captures failed messages",
                "Worker scales independently from API compute",
            ]),
            driven_by: vec![PlanTrigger::Item(ItemId::StyleJobs)],
            diagram_group: DiagramGroup::Async,
        });
        out.push(PlanComponent {
            id: ComponentId::Worker,
            name: "Worker".into(),
            subtitle: "Background processing".into(),
            category: ComponentCategory::Async,
            services: strings(&["Lambda (event source mapping)", "or ECS Fargate task"]),
            details: strings(&[
                "Processes messages from the SQS queue",
                "Triggered automatically by SQS event source mapping",
                "Retries with exponential backoff on failure",
            ]),
            driven_by: vec![PlanTrigger::Item(ItemId::StyleJobs)],
            diagram_group: DiagramGroup::Async,
        });
    }

    if flags.has_monitoring() {
        let mut services = strings(&["CloudWatch Logs", "CloudWatch Metrics", "CloudWatch Alarms"]);
        if flags.has_adv_mon {
            services.push("X-Ray".into());
            services.push("CloudWatch ServiceLens".into());
        }
        let mut details = strings(&[
            "CloudWatch log groups for all services",
            "Metric alarms on error rate, latency, CPU/memory",
        ]);
        push_if(&mut details, flags.has_adv_mon, "X-Ray distributed tracing with service map");
        push_if(&mut details, flags.has_adv_mon, "SLO dashboards with burn-rate alerts");
        details.push("SNS topic for alarm notifications (email/PagerDuty)".into());
        out.push(PlanComponent {
            id: ComponentId::Monitoring,
            name: if flags.has_adv_mon {
                "Monitoring & Tracing".into()
            } else {
                "Monitoring & Logs".into()
            },
            subtitle: if flags.has_adv_mon {
                "CloudWatch + X-Ray + SLOs".into()
            } else {
                "CloudWatch metrics + alerts".into()
            },
            category: ComponentCategory::Ops,
            services,
            details,
            driven_by: selected(selection, &[ItemId::OpsBasic, ItemId::OpsAdvanced]),
            diagram_group: DiagramGroup::ExternalRight,
        });
    }

    if flags.has_compliance {
        out.push(PlanComponent {
            id: ComponentId::Audit,
            name: "Audit & Encryption".into(),
            subtitle: "CloudTrail + KMS".into(),
            category: ComponentCategory::Compliance,
            services: strings(&["CloudTrail", "KMS", "S3 (audit logs)"]),
            details: strings(&[
                "CloudTrail enabled for all API calls, forming the audit trail",
                "CloudTrail logs stored in a dedicated S3 bucket with integrity validation",
                "KMS CMK for encryption at rest on RDS, S3, and ElastiCache",
                "AWS Config rules for compliance drift detection",
            ]),
            driven_by: vec![PlanTrigger::Item(ItemId::SecCompliance)],
            diagram_group: DiagramGroup::ExternalRight,
        });
    }

    if flags.cicd {
        let mut details = strings(&[
            "GitHub Actions workflow with AWS OIDC (no long-lived credentials)",
            "On push to main: build, test, push image to ECR, deploy to ECS/Lambda",
        ]);
        details.push(if tier == Tier::Kit {
            "Terraform CI: plan on PR, apply on merge".into()
        } else {
            "Provider-managed deploy pipeline".into()
        });
        details.push("Rollback trigger on CloudWatch alarm breach".into());
        out.push(PlanComponent {
            id: ComponentId::CiCd,
            name: "CI/CD Pipeline".into(),
            subtitle: "GitHub Actions + OIDC".into(),
            category: ComponentCategory::Cicd,
            services: strings(&["GitHub Actions", "IAM OIDC", "ECR", "S3 (artifacts)"]),
            details,
            driven_by: vec![PlanTrigger::CicdAddon],
            diagram_group: DiagramGroup::ExternalRight,
        });
    }

    if flags.support {
        out.push(PlanComponent {
            id: ComponentId::Support,
            name: "Support & Changes".into(),
            subtitle: "Provider managed / Tier 2".into(),
            category: ComponentCategory::Ops,
            services: vec![],
            details: strings(&[
                "Monthly infrastructure changes handled by provider engineers",
                "Priority support via email/Slack",
                "Security patch management included",
            ]),
            driven_by: vec![PlanTrigger::SupportAddon],
            diagram_group: DiagramGroup::ExternalRight,
        });
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::recipe::Region;
    use crate::topology::derive_vpc;

    fn components_for(tier: Tier, ids: &[ItemId], addons: Addons) -> Vec<PlanComponent> {
        let selection = Selection::from_items(ids.iter().copied());
        let flags = FeatureFlags::derive(tier, &selection, &addons);
        let vpc = derive_vpc(flags.multi_az, Region::UsEast1);
        derive_components(tier, &selection, &flags, &vpc)
    }

    fn ids(components: &[PlanComponent]) -> Vec<ComponentId> {
        components.iter().map(|c| c.id).collect()
    }

    #[test]
    fn internet_and_dns_always_present() {
        let c = components_for(Tier::Deploy, &[], Addons::default());
        assert_eq!(ids(&c), vec![ComponentId::Internet, ComponentId::Dns]);
    }

    #[test]
    fn realtime_uses_websocket_entry_never_alb() {
        let c = components_for(Tier::Deploy, &[ItemId::StyleRealtime], Addons::default());
        let present = ids(&c);
        assert!(present.contains(&ComponentId::WebSocketApi));
        assert!(!present.contains(&ComponentId::LoadBalancer));

        // Even with an ALB-driving style also selected, realtime wins the
        // entry point and the ALB is suppressed.
        let c = components_for(
            Tier::Deploy,
            &[ItemId::StyleRealtime, ItemId::StyleApiFirst],
            Addons::default(),
        );
        let present = ids(&c);
        assert!(present.contains(&ComponentId::WebSocketApi));
        assert!(!present.contains(&ComponentId::LoadBalancer));
    }

    #[test]
    fn jobs_bring_queue_and_worker_together() {
        let c = components_for(Tier::Managed, &[ItemId::StyleJobs], Addons::default());
        let ids = ids(&c);
        let qi = ids.iter().position(|i| *i == ComponentId::Queue).unwrap();
        let wi = ids.iter().position(|i| *i == ComponentId::Worker).unwrap();
        assert_eq!(wi, qi + 1);
    }

    #[test]
    fn static_site_has_no_compute_or_vpc() {
        let c = components_for(Tier::Kit, &[ItemId::StyleStatic], Addons::default());
        let ids = ids(&c);
        assert!(ids.contains(&ComponentId::Cdn));
        assert!(ids.contains(&ComponentId::FrontendAssets));
        assert!(!ids.contains(&ComponentId::Compute));
        assert!(!ids.contains(&ComponentId::Vpc));
        assert!(!ids.contains(&ComponentId::LoadBalancer));
    }

    #[test]
    fn rds_details_cross_cut_by_other_features() {
        let base = components_for(Tier::Deploy, &[ItemId::DataSql], Addons::default());
        let rds = base.iter().find(|c| c.id == ComponentId::RelationalDb).unwrap();
        assert!(rds.details.iter().any(|d| d.contains("Single-AZ")));
        assert!(!rds.details.iter().any(|d| d.contains("KMS")));

        let rich = components_for(
            Tier::Deploy,
            &[
                ItemId::DataSql,
                ItemId::RelMultiAz,
                ItemId::RelBackups,
                ItemId::SecCompliance,
                ItemId::SecPrivateDb,
            ],
            Addons::default(),
        );
        let rds = rich.iter().find(|c| c.id == ComponentId::RelationalDb).unwrap();
        assert!(rds.details.iter().any(|d| d.contains("standby")));
        assert!(rds.details.iter().any(|d| d.contains("point-in-time")));
        assert!(rds.details.iter().any(|d| d.contains("KMS")));
        assert!(rds.details.iter().any(|d| d.contains("No public access")));
    }

    #[test]
    fn support_addon_requires_managed_tier() {
        let addons = Addons { cicd: false, support: true };
        let c = components_for(Tier::Deploy, &[], addons);
        assert!(!ids(&c).contains(&ComponentId::Support));
        let c = components_for(Tier::Managed, &[], addons);
        assert!(ids(&c).contains(&ComponentId::Support));
    }

    #[test]
    fn driven_by_lists_only_selected_items() {
        let c = components_for(
            Tier::Deploy,
            &[ItemId::StyleWebsiteApi, ItemId::SecHttps],
            Addons::default(),
        );
        let cdn = c.iter().find(|x| x.id == ComponentId::Cdn).unwrap();
        assert_eq!(cdn.driven_by, vec![PlanTrigger::Item(ItemId::StyleWebsiteApi)]);
    }

    #[test]
    fn kit_tier_changes_compute_wording() {
        let c = components_for(Tier::Kit, &[ItemId::StyleApiFirst], Addons::default());
        let compute = c.iter().find(|x| x.id == ComponentId::Compute).unwrap();
        assert_eq!(compute.name, "API Compute");
        assert!(compute.details[0].contains("Terraform"));
    }
}
