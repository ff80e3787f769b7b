//! Module listings: the JSON stream printed by `go list -m -json all`.
//!
//! A listing is a sequence of concatenated JSON objects, one per module, in
//! the order the build tool enumerated them. Loading a listing does no
//! resolution of its own; every object becomes one graph node as-is.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::Deserialize;

use modlens_util::errors::{ModlensError, ModlensResult};

use crate::graph::DepGraph;
use crate::module::{Module, ModuleRef};

/// One module object of a listing. Unknown fields are ignored.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListedModule {
    pub path: String,
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub main: bool,
    #[serde(default)]
    pub replace: Option<Box<ListedModule>>,
    #[serde(default)]
    pub go_mod: Option<String>,
}

impl ListedModule {
    /// Convert into a shared module handle, following nested replacements.
    pub fn into_module(self) -> ModuleRef {
        let manifest = self
            .go_mod
            .filter(|p| !p.is_empty())
            .map(PathBuf::from);
        Arc::new(Module {
            path: self.path,
            version: self.version,
            main: self.main,
            replace: self.replace.map(|r| r.into_module()),
            manifest,
        })
    }
}

/// Decode a listing into its module records, in stream order.
pub fn parse_modules(text: &str) -> Result<Vec<ListedModule>, ModlensError> {
    serde_json::Deserializer::from_str(text)
        .into_iter::<ListedModule>()
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| ModlensError::Listing {
            message: e.to_string(),
        })
}

/// Build a graph from listing text.
///
/// The first module flagged `Main` becomes the graph's main module. A listing
/// without one yields a graph without a main module.
pub fn parse_listing(text: &str) -> Result<DepGraph, ModlensError> {
    let mut graph = DepGraph::new();
    let mut has_main = false;
    for listed in parse_modules(text)? {
        let module = listed.into_module();
        let is_main = module.main;
        let path = module.path.clone();
        let idx = graph.add_module(module);
        if is_main {
            if has_main {
                tracing::warn!("ignoring additional main module {path}");
            } else {
                graph.set_main(idx);
                has_main = true;
            }
        }
    }
    tracing::debug!("loaded {} modules from listing", graph.len());
    Ok(graph)
}

/// Load a listing file from disk.
pub fn load_listing(path: &Path) -> ModlensResult<DepGraph> {
    let content = std::fs::read_to_string(path).map_err(|e| ModlensError::Listing {
        message: format!("Failed to read {}: {e}", path.display()),
    })?;
    Ok(parse_listing(&content)?)
}
