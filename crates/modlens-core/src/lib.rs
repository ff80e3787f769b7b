//! Core data types for modlens.
//!
//! This crate defines the modules of a dependency graph, the read-only graph
//! view the analysis crates consume, the module-listing loader that fills a
//! graph from `go list -m -json all` output, and the global configuration.
//!
//! This crate is intentionally free of network I/O.

/// File name of a module manifest.
pub const DEFAULT_MANIFEST_FILE: &str = "go.mod";

pub mod config;
pub mod graph;
pub mod listing;
pub mod module;
