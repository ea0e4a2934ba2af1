//! vkexpand - Vulkan initializer call expander
//!
//! vkexpand is a CLI tool and library that locates `vkTools::initializers::`
//! factory calls in C++ sample code and rewrites each one into explicit
//! field-by-field struct initialization, so the structure fields a sample
//! sets are visible at the call site. Calls that cannot be expanded safely
//! are annotated with an explanatory comment instead.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (user-facing commands)
//! - `config`: Configuration file loading and parsing
//! - `registry`: Descriptor table mapping factory signatures to field lists
//! - `locate` / `classify` / `rewrite`: the per-file pipeline stages
//! - `expand`: ties the pipeline stages together over one source text
//! - `scan`: source tree traversal and filtering
//! - `diagnostic` / `reporter`: findings and cargo-style output
//! - `utils`: shared text-scanning helpers

pub mod classify;
pub mod cli;
pub mod commands;
pub mod config;
pub mod diagnostic;
pub mod expand;
pub mod locate;
pub mod registry;
pub mod reporter;
pub mod rewrite;
pub mod scan;
pub mod utils;
