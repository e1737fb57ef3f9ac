//! Advisory recipe validation.
//!
//! These checks are intentionally minimal and caller-invoked: the
//! derivation functions stay permissive and total regardless of what this
//! module reports. A violated exclusive-category invariant, for example,
//! still derives deterministically ("all active"); the warning exists so
//! the consumer can surface it before checkout.

use crate::catalog::{self, TopicCategory};
use crate::compile::{Diagnostic, DiagnosticLevel};
use crate::model::recipe::{RecipeRequest, Tier};

/// Run the advisory check battery for one recipe. Returns warnings only;
/// an empty vector means nothing to surface.
pub fn check_selection(req: &RecipeRequest) -> Vec<Diagnostic> {
    let mut out = Vec::new();

    for topic in catalog::TOPICS {
        if !topic.exclusive {
            continue;
        }
        let picked: Vec<_> =
            req.selection.iter().filter(|id| id.category() == topic.id).collect();
        if picked.len() > 1 {
            out.push(Diagnostic {
                level: DiagnosticLevel::Warning,
                code: "selection.exclusive".into(),
                message: format!(
                    "{} items from the exclusive '{}' topic are selected; derivation treats all as active",
                    picked.len(),
                    topic.id.as_str()
                ),
            });
        }
    }

    let has_traffic = req.selection.iter().any(|id| id.category() == TopicCategory::Traffic);
    if !has_traffic {
        out.push(Diagnostic {
            level: DiagnosticLevel::Warning,
            code: "selection.traffic.missing".into(),
            message: "no traffic-scale item selected; the estimate assumes prototype scale".into(),
        });
    }

    if req.addons.support && req.tier != Tier::Managed {
        out.push(Diagnostic {
            level: DiagnosticLevel::Warning,
            code: "addons.support.tier".into(),
            message: "the support add-on only applies to tier 2 and is ignored here".into(),
        });
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ItemId;
    use crate::model::recipe::{Addons, Region, Selection};

    fn req(tier: Tier, ids: &[ItemId], addons: Addons) -> RecipeRequest {
        RecipeRequest {
            tier,
            region: Region::UsEast1,
            selection: Selection::from_items(ids.iter().copied()),
            addons,
        }
    }

    #[test]
    fn clean_recipe_passes() {
        let r = req(Tier::Deploy, &[ItemId::TrafficSmall, ItemId::StyleApiFirst], Addons::default());
        assert!(check_selection(&r).is_empty());
    }

    #[test]
    fn double_traffic_flagged() {
        let r = req(
            Tier::Deploy,
            &[ItemId::TrafficSmall, ItemId::TrafficLarge],
            Addons::default(),
        );
        let diags = check_selection(&r);
        assert!(diags.iter().any(|d| d.code == "selection.exclusive"));
    }

    #[test]
    fn missing_traffic_flagged() {
        let r = req(Tier::Deploy, &[ItemId::StyleStatic], Addons::default());
        let diags = check_selection(&r);
        assert!(diags.iter().any(|d| d.code == "selection.traffic.missing"));
    }

    #[test]
    fn support_outside_managed_flagged() {
        let addons = Addons { cicd: false, support: true };
        let r = req(Tier::Kit, &[ItemId::TrafficSmall], addons);
        let diags = check_selection(&r);
        assert!(diags.iter().any(|d| d.code == "addons.support.tier"));

        let r = req(Tier::Managed, &[ItemId::TrafficSmall], addons);
        assert!(check_selection(&r).is_empty());
    }
}
