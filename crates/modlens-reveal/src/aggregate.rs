//! Graph-wide discovery of `replace` directives.

use modlens_core::graph::ModuleSource;
use modlens_util::errors::ModlensError;
use modlens_util::fs::ManifestFs;

use crate::locator::Locator;
use crate::parser::parse_replacements;
use crate::replacements::Replacements;

/// Collect the `replace` directives of every module in `source`.
///
/// Directives of the main module go into the top-level map; all others are
/// grouped per replaced module in enumeration order. Modules whose manifest
/// cannot be located or read are skipped. Only a graph without a main module
/// is an error.
pub fn find_replacements<S>(
    source: &S,
    fs: &dyn ManifestFs,
    manifest_file: &str,
) -> miette::Result<Replacements>
where
    S: ModuleSource + ?Sized,
{
    let main = source.main_module().ok_or_else(|| ModlensError::Graph {
        message: "no main module in dependency graph".to_string(),
    })?;
    let locator = Locator::new(fs, manifest_file);
    let mut replacements = Replacements::new(main.path.clone());

    for module in source.modules() {
        let located = match locator.locate(Some(&module)) {
            Ok(located) => located,
            Err(e) => {
                tracing::warn!("skipping {module}: {e}");
                continue;
            }
        };
        let (Some(effective), Some(manifest)) = (located.module, located.manifest) else {
            tracing::warn!("no manifest found for {module}, skipping");
            continue;
        };
        let content = match fs.read_to_string(&manifest) {
            Ok(content) => content,
            Err(e) => {
                tracing::warn!("failed to read {} for {module}: {e}", manifest.display());
                continue;
            }
        };

        let found = parse_replacements(&effective, &content);
        tracing::debug!(
            "{} replace directives in {}",
            found.len(),
            manifest.display()
        );
        for replacement in found {
            if effective.main {
                replacements.insert_top_level(replacement.original, replacement.target);
            } else {
                replacements.push(replacement);
            }
        }
    }

    Ok(replacements)
}
