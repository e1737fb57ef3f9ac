//! End-to-end scenario tests over the compile entry point.
//!
//! Each scenario pins the exact component set, topology, and fee shape for
//! a representative recipe.

use assert_matches::assert_matches;
use planforge_core::prelude::*;

fn request(tier: Tier, region: Region, ids: &[ItemId], addons: Addons) -> RecipeRequest {
    RecipeRequest {
        tier,
        region,
        selection: Selection::from_items(ids.iter().copied()),
        addons,
    }
}

fn component_ids(report: &PlanReport) -> Vec<ComponentId> {
    report.plan.components.iter().map(|c| c.id).collect()
}

#[test]
fn static_prototype_kit() {
    // Prototype-scale static site delivered as a Terraform kit.
    let req = request(
        Tier::Kit,
        Region::UsEast1,
        &[ItemId::TrafficPrototype, ItemId::StyleStatic],
        Addons::default(),
    );
    let report = compile_recipe(&req);

    assert_eq!(
        component_ids(&report),
        vec![
            ComponentId::Internet,
            ComponentId::Dns,
            ComponentId::Cdn,
            ComponentId::FrontendAssets,
        ]
    );
    assert!(!report.plan.has_component(ComponentId::Compute));
    assert!(!report.plan.has_component(ComponentId::LoadBalancer));

    // One-time tier, zero-fee items: base fee only.
    assert_eq!(report.estimate.monthly_fee, 0);
    assert_eq!(report.estimate.setup_fee, 499);
    assert_eq!(report.estimate.breakdown.len(), 1);
}

#[test]
fn managed_website_api_with_sql_and_ha() {
    let req = request(
        Tier::Managed,
        Region::UsEast1,
        &[
            ItemId::TrafficMedium,
            ItemId::StyleWebsiteApi,
            ItemId::DataSql,
            ItemId::SecHttps,
            ItemId::RelMultiAz,
        ],
        Addons { cicd: false, support: true },
    );
    let report = compile_recipe(&req);

    for id in [
        ComponentId::Cdn,
        ComponentId::Vpc,
        ComponentId::LoadBalancer,
        ComponentId::Compute,
        ComponentId::RelationalDb,
        ComponentId::TlsCert,
    ] {
        assert!(report.plan.has_component(id), "missing {id:?}");
    }

    assert!(report.plan.vpc.multi_az);
    assert_eq!(report.plan.vpc.azs.len(), 2);
    assert_eq!(report.plan.vpc.subnets.len(), 6);

    // Recurring fee above the tier-2 base: items + support add-on.
    assert!(report.estimate.monthly_fee > 299);
    assert_eq!(report.estimate.setup_fee, 0);
    assert!(report
        .estimate
        .breakdown
        .iter()
        .any(|l| l.label.contains("Support") && l.recurring));
}

#[test]
fn realtime_entry_point_excludes_alb() {
    let req = request(Tier::Deploy, Region::UsEast1, &[ItemId::StyleRealtime], Addons::default());
    let report = compile_recipe(&req);

    assert!(report.plan.has_component(ComponentId::WebSocketApi));
    assert!(!report.plan.has_component(ComponentId::LoadBalancer));
}

#[test]
fn background_jobs_always_pair_queue_with_worker() {
    for tier in Tier::ALL {
        let req = request(*tier, Region::UsEast1, &[ItemId::StyleJobs], Addons::default());
        let report = compile_recipe(&req);
        assert_eq!(
            report.plan.has_component(ComponentId::Queue),
            report.plan.has_component(ComponentId::Worker),
        );
        assert!(report.plan.has_component(ComponentId::Queue));
    }
}

#[test]
fn internet_always_leads_the_component_list() {
    let req = request(Tier::Deploy, Region::EuWest1, &[], Addons::default());
    let report = compile_recipe(&req);
    assert_matches!(
        report.plan.components.first(),
        Some(PlanComponent { id: ComponentId::Internet, .. })
    );
}

#[test]
fn diagnostics_surface_exclusive_violation_without_blocking() {
    let req = request(
        Tier::Deploy,
        Region::UsEast1,
        &[ItemId::TrafficSmall, ItemId::TrafficLarge, ItemId::StyleApiFirst],
        Addons::default(),
    );
    let report = compile_recipe(&req);

    assert!(report.diagnostics.iter().any(|d| d.code == "selection.exclusive"));
    // Permissive "all active": both traffic items contribute their fee.
    assert_eq!(report.estimate.setup_fee, 1500 + 250 + 1500 + 200);
}

#[test]
fn report_serializes_with_stable_wire_tokens() {
    let req = request(
        Tier::Managed,
        Region::ApSoutheast1,
        &[ItemId::StyleWebsiteApi, ItemId::DataFiles],
        Addons { cicd: true, support: false },
    );
    let report = compile_recipe(&req);
    let v = serde_json::to_value(&report).unwrap();

    assert_eq!(v["plan"]["tier"], 2);
    assert_eq!(v["plan"]["region"], "ap-southeast-1");
    let first = &v["plan"]["components"][0];
    assert_eq!(first["id"], "internet");
    assert_eq!(first["diagramGroup"], "external-left");

    let cicd = v["plan"]["components"]
        .as_array()
        .unwrap()
        .iter()
        .find(|c| c["id"] == "cicd")
        .unwrap();
    assert_eq!(cicd["drivenBy"][0], "cicd-addon");
}
