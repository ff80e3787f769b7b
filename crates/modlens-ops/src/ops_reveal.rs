//! Operation: report the `replace` directives of a module graph.

use std::io::{Read, Write};
use std::path::PathBuf;

use modlens_core::config::ListingConfig;
use modlens_core::graph::DepGraph;
use modlens_core::listing;
use modlens_core::DEFAULT_MANIFEST_FILE;
use modlens_reveal::find_replacements;
use modlens_util::errors::{ModlensError, ModlensResult};
use modlens_util::fs::StdFs;
use modlens_util::process::CommandBuilder;

/// Where the module listing comes from.
#[derive(Debug, Clone)]
pub enum ListingSource {
    /// A file holding `go list -m -json all` output.
    File(PathBuf),
    /// The same, read from standard input.
    Stdin,
    /// Run the configured listing command.
    Command(ListingConfig),
}

/// Options for `modlens reveal`.
#[derive(Debug, Clone)]
pub struct RevealOptions {
    pub listing: ListingSource,
    /// Working directory for the listing command.
    pub dir: PathBuf,
    pub manifest_file: String,
    /// Only report replacements declared by these modules.
    pub offenders: Vec<String>,
    /// Only report these replaced modules.
    pub replaced: Vec<String>,
}

impl Default for RevealOptions {
    fn default() -> Self {
        Self {
            listing: ListingSource::Command(ListingConfig::default()),
            dir: PathBuf::from("."),
            manifest_file: DEFAULT_MANIFEST_FILE.to_string(),
            offenders: Vec::new(),
            replaced: Vec::new(),
        }
    }
}

/// Load the module graph, collect its replacements and print the report to `out`.
pub fn reveal<W: Write + ?Sized>(opts: &RevealOptions, out: &mut W) -> miette::Result<()> {
    let graph = load_graph(opts)?;
    tracing::info!("analysing {} modules", graph.len());

    let replacements = find_replacements(&graph, &StdFs, &opts.manifest_file)?;
    if replacements.is_empty() {
        tracing::info!("no replace directives outside the main module");
    }

    replacements
        .print_filtered(out, &opts.offenders, &opts.replaced)
        .map_err(ModlensError::Io)?;
    Ok(())
}

fn load_graph(opts: &RevealOptions) -> ModlensResult<DepGraph> {
    match &opts.listing {
        ListingSource::File(path) => listing::load_listing(path),
        ListingSource::Stdin => {
            let mut content = String::new();
            std::io::stdin()
                .read_to_string(&mut content)
                .map_err(|e| ModlensError::Listing {
                    message: format!("Failed to read standard input: {e}"),
                })?;
            Ok(listing::parse_listing(&content)?)
        }
        ListingSource::Command(cfg) => {
            let dir = opts.dir.to_str().ok_or_else(|| ModlensError::Generic {
                message: format!("Non UTF-8 directory: {}", opts.dir.display()),
            })?;
            let cmd = CommandBuilder::new(&cfg.program)
                .args(cfg.args.iter().cloned())
                .cwd(dir);
            tracing::debug!("running `{cmd}`");
            let content = cmd.stdout()?;
            Ok(listing::parse_listing(&content)?)
        }
    }
}
