//! The replacement aggregate and its filters.

use std::collections::{BTreeMap, HashMap, HashSet};

use modlens_core::module::ModuleRef;

/// A single `replace` directive found in a module's manifest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Replacement {
    /// The module whose manifest declared the directive.
    pub offender: ModuleRef,
    /// The module being replaced.
    pub original: String,
    /// What it is replaced by: a module path or a local filesystem path.
    pub target: String,
    /// Version of `target`; empty for local paths.
    pub version: String,
}

/// All `replace` directives discovered across a module graph.
///
/// Directives of the main module are kept apart in [`top_level`](Self::top_level):
/// they are the ones that govern the build. Directives of every other module
/// are grouped per replaced module, in discovery order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Replacements {
    main: String,
    top_level: BTreeMap<String, String>,
    /// Replaced modules in first-discovery order; same key set as `by_original`.
    originals: Vec<String>,
    by_original: HashMap<String, Vec<Replacement>>,
}

impl Replacements {
    pub fn new(main: impl Into<String>) -> Self {
        Self {
            main: main.into(),
            ..Self::default()
        }
    }

    /// Path of the main module.
    pub fn main(&self) -> &str {
        &self.main
    }

    /// The main module's own replacements, `original -> target`.
    pub fn top_level(&self) -> &BTreeMap<String, String> {
        &self.top_level
    }

    /// Replaced modules in the order they were first discovered.
    pub fn originals(&self) -> &[String] {
        &self.originals
    }

    /// Non-main replacements of `original`, in discovery order.
    pub fn replacements_of(&self, original: &str) -> &[Replacement] {
        self.by_original
            .get(original)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Whether the main module's replacement of `original` is `target`.
    pub fn is_top_level(&self, original: &str, target: &str) -> bool {
        self.top_level.get(original).is_some_and(|t| t == target)
    }

    /// Number of replaced modules with at least one non-main replacement.
    pub fn len(&self) -> usize {
        self.originals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.originals.is_empty()
    }

    /// Record a replacement declared by the main module. A later call for the
    /// same original overwrites the earlier one.
    pub fn insert_top_level(&mut self, original: impl Into<String>, target: impl Into<String>) {
        self.top_level.insert(original.into(), target.into());
    }

    /// Append a replacement declared by a non-main module.
    pub fn push(&mut self, replacement: Replacement) {
        match self.by_original.get_mut(&replacement.original) {
            Some(list) => list.push(replacement),
            None => {
                self.originals.push(replacement.original.clone());
                self.by_original
                    .insert(replacement.original.clone(), vec![replacement]);
            }
        }
    }

    /// Keep only replacements declared by one of `offenders`.
    ///
    /// Replaced modules left without any replacement are dropped. An empty
    /// list keeps everything. The top-level map is never filtered.
    pub fn filter_on_offending_module<S: AsRef<str>>(&self, offenders: &[S]) -> Self {
        if offenders.is_empty() {
            return self.clone();
        }
        let allowed: HashSet<&str> = offenders.iter().map(|s| s.as_ref()).collect();

        let mut filtered = self.with_top_level();
        for original in &self.originals {
            for replacement in self.replacements_of(original) {
                if allowed.contains(replacement.offender.path.as_str()) {
                    filtered.push(replacement.clone());
                }
            }
        }
        filtered
    }

    /// Keep only the replaced modules named in `originals`, with all their
    /// replacements. An empty list keeps everything. The top-level map is
    /// never filtered.
    pub fn filter_on_replaced_module<S: AsRef<str>>(&self, originals: &[S]) -> Self {
        if originals.is_empty() {
            return self.clone();
        }
        let allowed: HashSet<&str> = originals.iter().map(|s| s.as_ref()).collect();

        let mut filtered = self.with_top_level();
        for original in &self.originals {
            if !allowed.contains(original.as_str()) {
                continue;
            }
            for replacement in self.replacements_of(original) {
                filtered.push(replacement.clone());
            }
        }
        filtered
    }

    /// Same main module and top-level map, no other replacements.
    fn with_top_level(&self) -> Self {
        Self {
            main: self.main.clone(),
            top_level: self.top_level.clone(),
            ..Self::default()
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use modlens_core::module::Module;
    use std::sync::Arc;

    fn replacement(
        offender: &ModuleRef,
        original: &str,
        target: &str,
        version: &str,
    ) -> Replacement {
        Replacement {
            offender: Arc::clone(offender),
            original: original.into(),
            target: target.into(),
            version: version.into(),
        }
    }

    /// Three replaced modules declared by four offenders, two matching the top level.
    pub(crate) fn sample() -> Replacements {
        let offender = Arc::new(Module::new("offender", ""));
        let offender_bis = Arc::new(Module::new("offender-bis", ""));
        let offender_tertio = Arc::new(Module::new("offender-tertio", ""));
        let module_a = Arc::new(Module::new("moduleA", "v1.0.0"));

        let mut r = Replacements::new("test-module");
        r.insert_top_level("originalA", "overrideA");
        r.insert_top_level("originalB", "overrideB-bis");
        r.push(replacement(&offender, "originalA", "overrideA", "v1.0.0"));
        r.push(replacement(&module_a, "originalB", "overrideB", "v1.0.0"));
        r.push(replacement(&module_a, "originalC", "./overrideC", ""));
        r.push(replacement(&offender_bis, "originalA", "overrideA-bis", "v2.0.0"));
        r.push(replacement(&offender_tertio, "originalB", "overrideB-bis", "v2.0.0"));
        r
    }

    fn offenders_of<'a>(r: &'a Replacements, original: &str) -> Vec<&'a str> {
        r.replacements_of(original)
            .iter()
            .map(|x| x.offender.path.as_str())
            .collect()
    }

    #[test]
    fn push_groups_in_discovery_order() {
        let r = sample();
        assert_eq!(r.originals(), ["originalA", "originalB", "originalC"]);
        assert_eq!(offenders_of(&r, "originalA"), ["offender", "offender-bis"]);
        assert_eq!(offenders_of(&r, "originalB"), ["moduleA", "offender-tertio"]);
        assert_eq!(r.len(), 3);
    }

    #[test]
    fn unknown_original_has_no_replacements() {
        assert!(sample().replacements_of("nope").is_empty());
    }

    #[test]
    fn top_level_last_write_wins() {
        let mut r = Replacements::new("main");
        r.insert_top_level("a", "b");
        r.insert_top_level("a", "c");
        assert_eq!(r.top_level().get("a").map(String::as_str), Some("c"));
        assert!(r.is_top_level("a", "c"));
        assert!(!r.is_top_level("a", "b"));
        assert!(r.is_empty());
    }

    #[test]
    fn offender_filter_empty_is_identity() {
        let r = sample();
        let none: &[&str] = &[];
        assert_eq!(r.filter_on_offending_module(none), r);
    }

    #[test]
    fn offender_filter() {
        let r = sample();
        let filtered =
            r.filter_on_offending_module(&["offender", "pre-offender", "offender-post"]);
        assert_eq!(filtered.originals(), ["originalA"]);
        assert_eq!(offenders_of(&filtered, "originalA"), ["offender"]);
        assert!(filtered.replacements_of("originalB").is_empty());
        assert_eq!(filtered.top_level(), r.top_level());
        assert_eq!(filtered.main(), "test-module");
    }

    #[test]
    fn replaced_filter_empty_is_identity() {
        let r = sample();
        let none: Vec<String> = Vec::new();
        assert_eq!(r.filter_on_replaced_module(&none), r);
    }

    #[test]
    fn replaced_filter() {
        let r = sample();
        let filtered = r.filter_on_replaced_module(&["originalA", "originalC", "not-original"]);
        assert_eq!(filtered.originals(), ["originalA", "originalC"]);
        assert_eq!(filtered.replacements_of("originalA"), r.replacements_of("originalA"));
        assert_eq!(filtered.replacements_of("originalC"), r.replacements_of("originalC"));
        assert!(filtered.replacements_of("originalB").is_empty());
        assert_eq!(filtered.top_level(), r.top_level());
    }

    #[test]
    fn filters_commute() {
        let r = sample();
        let offenders = ["moduleA", "offender-bis"];
        let originals = ["originalA", "originalC"];
        let a = r
            .filter_on_offending_module(&offenders)
            .filter_on_replaced_module(&originals);
        let b = r
            .filter_on_replaced_module(&originals)
            .filter_on_offending_module(&offenders);
        assert_eq!(a, b);
        assert_eq!(a.originals(), ["originalA", "originalC"]);
    }

    #[test]
    fn filtered_order_is_a_subsequence() {
        let r = sample();
        let filtered = r.filter_on_replaced_module(&["originalC", "originalA"]);
        let mut source = r.originals().iter();
        for original in filtered.originals() {
            assert!(source.any(|o| o == original), "{original} out of order");
        }
    }

    #[test]
    fn filters_leave_source_untouched() {
        let r = sample();
        let before = r.clone();
        let _ = r.filter_on_offending_module(&["offender"]);
        let _ = r.filter_on_replaced_module(&["originalB"]);
        assert_eq!(r, before);
    }

    #[test]
    fn filter_matching_nothing_is_empty() {
        let r = sample();
        let filtered = r.filter_on_offending_module(&["stranger"]);
        assert!(filtered.is_empty());
        assert_eq!(filtered.top_level(), r.top_level());
    }
}
