use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

/// Shared, immutable handle to a [`Module`].
///
/// Many replacement records point at the same module; none of them own it.
pub type ModuleRef = Arc<Module>;

/// A single module of the dependency graph.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Module {
    /// Identifying path, unique within a graph.
    pub path: String,
    pub version: String,
    /// Whether this is the main (root) module.
    pub main: bool,
    /// The module this one is itself replaced by, if any.
    pub replace: Option<ModuleRef>,
    /// Manifest location, when already known.
    pub manifest: Option<PathBuf>,
}

impl Module {
    pub fn new(path: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            version: version.into(),
            ..Self::default()
        }
    }

    /// Mark this module as the main module.
    pub fn main(mut self) -> Self {
        self.main = true;
        self
    }

    pub fn with_replace(mut self, target: impl Into<ModuleRef>) -> Self {
        self.replace = Some(target.into());
        self
    }

    pub fn with_manifest(mut self, manifest: impl Into<PathBuf>) -> Self {
        self.manifest = Some(manifest.into());
        self
    }

    /// `path@version` identifier, or just the path for unversioned modules.
    pub fn key(&self) -> String {
        if self.version.is_empty() {
            self.path.clone()
        } else {
            format!("{}@{}", self.path, self.version)
        }
    }
}

impl fmt::Display for Module {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_includes_version() {
        let m = Module::new("example.com/a", "v1.2.0");
        assert_eq!(m.key(), "example.com/a@v1.2.0");
        assert_eq!(m.to_string(), "example.com/a@v1.2.0");
    }

    #[test]
    fn key_without_version() {
        let m = Module::new("example.com/main", "").main();
        assert_eq!(m.key(), "example.com/main");
        assert!(m.main);
    }

    #[test]
    fn shared_handles_compare_by_content() {
        let a: ModuleRef = Arc::new(Module::new("a", "v1.0.0"));
        let b: ModuleRef = Arc::new(Module::new("a", "v1.0.0"));
        assert!(!Arc::ptr_eq(&a, &b));
        assert_eq!(a, b);
    }

    #[test]
    fn builder_sets_replace_and_manifest() {
        let target = Module::new("b", "v2.0.0");
        let m = Module::new("a", "v1.0.0")
            .with_replace(target.clone())
            .with_manifest("a/go.mod");
        assert_eq!(m.replace.as_deref(), Some(&target));
        assert_eq!(m.manifest, Some(PathBuf::from("a/go.mod")));
    }
}
