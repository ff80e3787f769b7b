use miette::Diagnostic;
use thiserror::Error;

/// Unified error type for all modlens operations.
#[derive(Debug, Error, Diagnostic)]
pub enum ModlensError {
    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A module manifest could not be read or interpreted.
    #[error("Manifest error: {message}")]
    Manifest { message: String },

    /// The dependency graph is structurally unusable (e.g. no main module).
    #[error("Dependency graph error: {message}")]
    #[diagnostic(help("The module listing must contain exactly one main module"))]
    Graph { message: String },

    /// Following a module's replacement chain led back to a module already visited.
    #[error("Replacement cycle detected while resolving '{module}'")]
    RedirectCycle { module: String },

    /// A module listing could not be decoded.
    #[error("Module listing error: {message}")]
    #[diagnostic(help("Expected the output of `go list -m -json all`"))]
    Listing { message: String },

    /// An external process failed.
    #[error("Process error: {message}")]
    Process { message: String },

    /// Catch-all for miscellaneous errors.
    #[error("{message}")]
    Generic { message: String },
}

/// Convenience alias for `miette::Result<T>`.
pub type ModlensResult<T> = miette::Result<T>;
