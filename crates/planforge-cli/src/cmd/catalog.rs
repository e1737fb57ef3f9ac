use anyhow::Result;

use planforge_core::catalog::TOPICS;
use planforge_core::version::CATALOG_VERSION;

use crate::output;

pub fn run() -> Result<()> {
    if output::is_json() {
        return output::print_json(&TOPICS);
    }

    output::heading(&format!("Catalog ({CATALOG_VERSION})"))?;
    for topic in TOPICS {
        let marker = if topic.exclusive { " (pick one)" } else { "" };
        println!("{}{marker}", topic.label);
        for item in topic.items {
            match item.description {
                Some(desc) => println!("  {} - {} ({desc})", item.id.as_str(), item.label),
                None => println!("  {} - {}", item.id.as_str(), item.label),
            }
            for hint in item.hints {
                println!("      {hint}");
            }
        }
    }
    Ok(())
}
