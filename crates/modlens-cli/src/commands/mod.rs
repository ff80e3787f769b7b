//! Command dispatch and handler modules.

mod reveal;

use miette::Result;

use crate::cli::{Cli, Command};

/// Route a parsed CLI invocation to the appropriate command handler.
pub fn dispatch(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Reveal {
            listing,
            offenders,
            replaced,
            manifest_file,
        } => reveal::exec(listing.as_deref(), offenders, replaced, manifest_file),
    }
}
