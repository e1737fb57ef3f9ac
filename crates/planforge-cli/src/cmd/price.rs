use anyhow::Result;

use planforge_core::prelude::*;

use crate::io::input;
use crate::output;

pub fn run(input_arg: &str) -> Result<()> {
    let loaded = input::load_recipe(input_arg)?;
    for id in &loaded.unknown_ids {
        output::warn(&format!("unknown selection id ignored: {id}"))?;
    }

    let report = compile_recipe(&loaded.request);

    if output::is_json() {
        return output::print_json(&report.estimate);
    }

    output::heading(&format!("Price estimate - tier {}", loaded.request.tier.as_u8()))?;
    for line in &report.estimate.breakdown {
        let cadence = if line.recurring { "/mo" } else { " one-time" };
        println!("  {} - {}{}", line.label, output::usd(line.amount), cadence);
    }
    println!("  Setup total: {}", output::usd(report.estimate.setup_fee));
    println!("  Monthly total: {}", output::usd(report.estimate.monthly_fee));
    println!(
        "  Estimated AWS spend: ~{}/mo",
        output::usd(report.estimate.infra_monthly_estimate)
    );
    Ok(())
}
