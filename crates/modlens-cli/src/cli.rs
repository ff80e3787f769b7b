//! CLI argument definitions for modlens.
//!
//! Uses `clap` derive macros to define the command surface. Each command
//! corresponds to a handler in the [`super::commands`] module.

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "modlens",
    version,
    about = "Inspect module replace directives across a dependency graph",
    long_about = "modlens collects the replace directives declared by every module of a \
                  dependency graph and shows which of them agree with the ones declared \
                  by the main module, the only ones that take effect in the build."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show the replace directives declared by dependencies
    Reveal {
        /// Module listing (`go list -m -json all` output); `-` reads stdin.
        /// Without it the configured listing command is run
        #[arg(short, long)]
        listing: Option<String>,
        /// Only show replacements declared by these modules
        #[arg(short, long, value_delimiter = ',')]
        offenders: Vec<String>,
        /// Only show replacements of these modules
        #[arg(short, long, value_delimiter = ',')]
        replaced: Vec<String>,
        /// Manifest file name looked up in module directories
        #[arg(long)]
        manifest_file: Option<String>,
    },
}

pub fn parse() -> Cli {
    Cli::parse()
}
