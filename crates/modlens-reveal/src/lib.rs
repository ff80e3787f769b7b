//! Discovery and reporting of `replace` directives across a module graph.
//!
//! Every module's manifest is located ([`locator`]), its `replace` directives
//! are extracted ([`parser`]) and folded into a [`Replacements`] aggregate
//! ([`aggregate`]). The aggregate separates the main module's directives, the
//! ones that actually govern the build, from those declared by dependencies.
//! It can be narrowed with two independent filters and rendered as a
//! consistency report ([`printer`]).

pub mod aggregate;
pub mod locator;
pub mod parser;
pub mod printer;
pub mod replacements;

pub use aggregate::find_replacements;
pub use replacements::{Replacement, Replacements};
