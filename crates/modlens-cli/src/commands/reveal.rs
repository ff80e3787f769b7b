//! Handler for `modlens reveal`.

use std::path::PathBuf;

use miette::Result;

use modlens_core::config::GlobalConfig;
use modlens_ops::ops_reveal::{self, ListingSource, RevealOptions};

pub fn exec(
    listing: Option<&str>,
    offenders: Vec<String>,
    replaced: Vec<String>,
    manifest_file: Option<String>,
) -> Result<()> {
    let config = match GlobalConfig::load() {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!("Failed to load global config, using defaults: {e}");
            GlobalConfig::default()
        }
    };

    let dir = std::env::current_dir().map_err(modlens_util::errors::ModlensError::Io)?;
    let listing = match listing {
        Some("-") => ListingSource::Stdin,
        Some(path) => ListingSource::File(PathBuf::from(path)),
        None => ListingSource::Command(config.listing),
    };

    let opts = RevealOptions {
        listing,
        dir,
        manifest_file: manifest_file.unwrap_or(config.reveal.manifest_file),
        offenders: if offenders.is_empty() {
            config.reveal.offenders
        } else {
            offenders
        },
        replaced: if replaced.is_empty() {
            config.reveal.replaced
        } else {
            replaced
        },
    };

    let stdout = std::io::stdout();
    ops_reveal::reveal(&opts, &mut stdout.lock())
}
