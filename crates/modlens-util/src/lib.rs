//! Shared utilities for modlens.
//!
//! This crate provides cross-cutting concerns used by all other modlens crates:
//! error types, the file-system read capability and process spawning.

pub mod errors;
pub mod fs;
pub mod process;
