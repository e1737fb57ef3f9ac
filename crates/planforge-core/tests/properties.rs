//! Property tests for the compiler's determinism contract.

use proptest::prelude::*;

use planforge_core::config::PricingConfig;
use planforge_core::prelude::*;
use planforge_core::pricing;

fn arb_items() -> impl Strategy<Value = Vec<ItemId>> {
    proptest::collection::vec(proptest::sample::select(ItemId::ALL.to_vec()), 0..12)
}

fn arb_tier() -> impl Strategy<Value = Tier> {
    proptest::sample::select(Tier::ALL.to_vec())
}

fn arb_region() -> impl Strategy<Value = Region> {
    proptest::sample::select(Region::ALL.to_vec())
}

fn arb_addons() -> impl Strategy<Value = Addons> {
    (any::<bool>(), any::<bool>()).prop_map(|(cicd, support)| Addons { cicd, support })
}

fn request(tier: Tier, region: Region, items: &[ItemId], addons: Addons) -> RecipeRequest {
    RecipeRequest {
        tier,
        region,
        selection: Selection::from_items(items.iter().copied()),
        addons,
    }
}

/// Map a flow step back to the component it narrates.
fn step_anchor(step: &str) -> Option<ComponentId> {
    if step.starts_with("WAF evaluates") {
        Some(ComponentId::Waf)
    } else if step.starts_with("CloudFront checks") {
        Some(ComponentId::Cdn)
    } else if step.starts_with("ALB terminates") {
        Some(ComponentId::LoadBalancer)
    } else if step.starts_with("API Gateway upgrades") {
        Some(ComponentId::WebSocketApi)
    } else if step.starts_with("Compute processes") {
        Some(ComponentId::Compute)
    } else if step.starts_with("Relational DB query") {
        Some(ComponentId::RelationalDb)
    } else if step.starts_with("Cache lookup") {
        Some(ComponentId::Cache)
    } else if step.starts_with("Key-value read/write") {
        Some(ComponentId::KeyValueStore)
    } else {
        None
    }
}

proptest! {
    #[test]
    fn compile_is_deterministic(
        items in arb_items(),
        tier in arb_tier(),
        region in arb_region(),
        addons in arb_addons(),
    ) {
        let req = request(tier, region, &items, addons);
        let a = serde_json::to_string(&compile_recipe(&req)).unwrap();
        let b = serde_json::to_string(&compile_recipe(&req)).unwrap();
        prop_assert_eq!(a, b);
    }

    #[test]
    fn selection_order_never_changes_output(
        items in arb_items(),
        tier in arb_tier(),
        region in arb_region(),
        addons in arb_addons(),
    ) {
        let forward = request(tier, region, &items, addons);
        let mut rev = items.clone();
        rev.reverse();
        let backward = request(tier, region, &rev, addons);

        let a = compile_recipe(&forward);
        let b = compile_recipe(&backward);

        let ids_a: Vec<_> = a.plan.components.iter().map(|c| c.id).collect();
        let ids_b: Vec<_> = b.plan.components.iter().map(|c| c.id).collect();
        prop_assert_eq!(ids_a, ids_b);
        prop_assert_eq!(a.estimate.setup_fee, b.estimate.setup_fee);
        prop_assert_eq!(a.estimate.monthly_fee, b.estimate.monthly_fee);
        prop_assert_eq!(a.estimate.complexity_score, b.estimate.complexity_score);
        prop_assert_eq!(a.estimate.infra_monthly_estimate, b.estimate.infra_monthly_estimate);
    }

    #[test]
    fn adding_an_item_never_lowers_the_score(
        items in arb_items(),
        extra in proptest::sample::select(ItemId::ALL.to_vec()),
    ) {
        let cfg = PricingConfig::default();
        let base = Selection::from_items(items.iter().copied());
        let mut grown = base.clone();
        grown.insert(extra);

        prop_assert!(
            pricing::complexity_score(&grown, &cfg) >= pricing::complexity_score(&base, &cfg)
        );
    }

    #[test]
    fn multi_az_subnets_are_pairwise_disjoint(
        items in arb_items(),
        tier in arb_tier(),
        region in arb_region(),
    ) {
        let mut with_ha = items.clone();
        with_ha.push(ItemId::RelMultiAz);
        let req = request(tier, region, &with_ha, Addons::default());
        let report = compile_recipe(&req);

        let subnets = &report.plan.vpc.subnets;
        prop_assert_eq!(subnets.len(), 6);
        for i in 0..subnets.len() {
            for j in (i + 1)..subnets.len() {
                prop_assert_ne!(&subnets[i].cidr, &subnets[j].cidr);
            }
        }
    }

    #[test]
    fn fees_respect_tier_floors(
        items in arb_items(),
        tier in arb_tier(),
        region in arb_region(),
        addons in arb_addons(),
    ) {
        let req = request(tier, region, &items, addons);
        let report = compile_recipe(&req);
        let e = &report.estimate;

        match tier {
            Tier::Deploy => {
                prop_assert!(e.setup_fee >= 1500);
                prop_assert_eq!(e.monthly_fee, 0);
            }
            Tier::Kit => {
                prop_assert!(e.setup_fee >= 499);
                prop_assert_eq!(e.monthly_fee, 0);
            }
            Tier::Managed => {
                prop_assert!(e.monthly_fee >= 299);
            }
        }
        prop_assert_eq!(e.breakdown_setup_total(), e.setup_fee);
        prop_assert_eq!(e.breakdown_monthly_total(), e.monthly_fee);
    }

    #[test]
    fn flows_only_reference_present_components(
        items in arb_items(),
        tier in arb_tier(),
        region in arb_region(),
        addons in arb_addons(),
    ) {
        let req = request(tier, region, &items, addons);
        let report = compile_recipe(&req);
        let plan = &report.plan;

        for flow in &plan.flows {
            for step in &flow.steps {
                if let Some(anchor) = step_anchor(step) {
                    prop_assert!(
                        plan.has_component(anchor),
                        "flow '{}' references absent component {:?}",
                        flow.name,
                        anchor
                    );
                }
            }
            match flow.kind {
                FlowKind::Upload => prop_assert!(plan.has_component(ComponentId::ObjectStorage)),
                FlowKind::Async => {
                    prop_assert!(plan.has_component(ComponentId::Queue));
                    prop_assert!(plan.has_component(ComponentId::Worker));
                }
                FlowKind::Telemetry => prop_assert!(plan.has_component(ComponentId::Monitoring)),
                FlowKind::Request => {}
            }
        }

        // The request path always exists and comes first.
        prop_assert_eq!(plan.flows[0].kind, FlowKind::Request);
    }
}
