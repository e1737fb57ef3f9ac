use anyhow::Result;

use crate::args::{Cli, Command};

mod catalog;
mod plan;
mod price;
mod validate;

pub fn dispatch(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Plan { input } => plan::run(&input),
        Command::Price { input } => price::run(&input),
        Command::Catalog => catalog::run(),
        Command::Validate { input } => validate::run(&input),
    }
}
