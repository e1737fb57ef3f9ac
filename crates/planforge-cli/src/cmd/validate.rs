use anyhow::Result;
use serde::Serialize;

use planforge_core::prelude::*;
use planforge_core::validate::check_selection;

use crate::io::input;
use crate::output;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ValidateOut {
    diagnostics: Vec<Diagnostic>,
    unknown_ids: Vec<String>,
}

pub fn run(input_arg: &str) -> Result<()> {
    let loaded = input::load_recipe(input_arg)?;
    let diagnostics = check_selection(&loaded.request);

    if output::is_json() {
        return output::print_json(&ValidateOut {
            diagnostics,
            unknown_ids: loaded.unknown_ids,
        });
    }

    if diagnostics.is_empty() && loaded.unknown_ids.is_empty() {
        println!("recipe is clean");
        return Ok(());
    }
    for d in &diagnostics {
        output::warn(&format!("{}: {}", d.code, d.message))?;
    }
    for id in &loaded.unknown_ids {
        output::warn(&format!("unknown selection id: {id}"))?;
    }
    Ok(())
}
