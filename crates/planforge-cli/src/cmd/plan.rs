use anyhow::Result;
use tracing::debug;

use planforge_core::prelude::*;

use crate::io::input;
use crate::output;

pub fn run(input_arg: &str) -> Result<()> {
    let loaded = input::load_recipe(input_arg)?;
    for id in &loaded.unknown_ids {
        output::warn(&format!("unknown selection id ignored: {id}"))?;
    }

    debug!(
        tier = loaded.request.tier.as_u8(),
        region = loaded.request.region.as_str(),
        items = loaded.request.selection.len(),
        "compiling recipe"
    );
    let report = compile_recipe(&loaded.request);

    if output::is_json() {
        return output::print_json(&report);
    }

    print_human(&report)
}

fn print_human(report: &PlanReport) -> Result<()> {
    let plan = &report.plan;

    output::heading(&format!(
        "Deployment plan - tier {} / {}",
        plan.tier.as_u8(),
        plan.region.as_str()
    ))?;

    output::heading("Components")?;
    for c in &plan.components {
        println!("  [{}] {} - {}", c.category.label(), c.name, c.subtitle);
        for d in &c.details {
            println!("      - {d}");
        }
    }

    output::heading("Network")?;
    println!(
        "  VPC {} across {} AZ(s): {}",
        plan.vpc.cidr,
        plan.vpc.azs.len(),
        plan.vpc.azs.join(", ")
    );
    for s in &plan.vpc.subnets {
        println!("  {} {} {}", s.az, s.role.as_str(), s.cidr);
    }

    output::heading("Flows")?;
    for f in &plan.flows {
        println!("  {}:", f.name);
        for (i, step) in f.steps.iter().enumerate() {
            println!("    {}. {step}", i + 1);
        }
    }

    output::heading("Pricing")?;
    for line in &report.estimate.breakdown {
        let cadence = if line.recurring { "/mo" } else { " one-time" };
        println!("  {} - {}{}", line.label, output::usd(line.amount), cadence);
    }
    println!("  Setup total: {}", output::usd(report.estimate.setup_fee));
    println!("  Monthly total: {}", output::usd(report.estimate.monthly_fee));
    println!(
        "  Estimated AWS spend: ~{}/mo (billed separately, complexity {} pts)",
        output::usd(report.estimate.infra_monthly_estimate),
        report.estimate.complexity_score
    );

    for d in &report.diagnostics {
        output::warn(&format!("{}: {}", d.code, d.message))?;
    }

    Ok(())
}
