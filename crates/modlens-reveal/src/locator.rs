//! Finding the manifest that governs a module.

use std::collections::HashSet;
use std::path::PathBuf;
use std::sync::Arc;

use modlens_core::module::ModuleRef;
use modlens_util::errors::ModlensError;
use modlens_util::fs::ManifestFs;

/// Outcome of locating a module's manifest.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Located {
    /// The module whose manifest applies, after following replacements.
    pub module: Option<ModuleRef>,
    /// Manifest path; `None` when the module is known but has no readable manifest.
    pub manifest: Option<PathBuf>,
}

/// Resolves modules to manifest files.
pub struct Locator<'a> {
    fs: &'a dyn ManifestFs,
    manifest_file: &'a str,
}

impl<'a> Locator<'a> {
    pub fn new(fs: &'a dyn ManifestFs, manifest_file: &'a str) -> Self {
        Self { fs, manifest_file }
    }

    /// Determine which manifest governs `module`.
    ///
    /// A module that is itself replaced is resolved through its replacement
    /// chain; its own manifest location is ignored. A known manifest path is
    /// trusted as is. Otherwise `<module path>/<manifest file>` is used if it
    /// exists.
    pub fn locate(&self, module: Option<&ModuleRef>) -> Result<Located, ModlensError> {
        let Some(start) = module else {
            return Ok(Located::default());
        };

        let mut current = Arc::clone(start);
        let mut visited = HashSet::new();
        loop {
            if !visited.insert(current.key()) {
                return Err(ModlensError::RedirectCycle {
                    module: start.key(),
                });
            }
            let Some(target) = current.replace.clone() else {
                break;
            };
            current = target;
        }

        if let Some(manifest) = current.manifest.clone() {
            return Ok(Located {
                module: Some(current),
                manifest: Some(manifest),
            });
        }

        let candidate = PathBuf::from(&current.path).join(self.manifest_file);
        let manifest = if self.fs.exists(&candidate) {
            Some(candidate)
        } else {
            tracing::debug!("no manifest at {} for {}", candidate.display(), current);
            None
        };
        Ok(Located {
            module: Some(current),
            manifest,
        })
    }
}
