use clap::{Parser, Subcommand};

#[derive(Parser, Debug, Clone)]
#[command(name = "planforge", version, about = "planforge deployment plan compiler")]
pub struct Cli {
    /// Emit JSON output on stdout.
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Compile a recipe into a deployment plan and price estimate.
    Plan {
        /// Recipe JSON file ("-" for stdin).
        input: String,
    },

    /// Compute the price estimate only.
    Price {
        /// Recipe JSON file ("-" for stdin).
        input: String,
    },

    /// Print the selectable catalog (topics and items).
    Catalog,

    /// Run advisory checks on a recipe without compiling it.
    Validate {
        /// Recipe JSON file ("-" for stdin).
        input: String,
    },
}
