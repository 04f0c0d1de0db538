//! Vitatex core library.
//!
//! Build and lint orchestration for a LaTeX document tree. All real work is
//! delegated to external tools (`xelatex`, `latexindent`, `chktex`); this
//! crate discovers inputs, resolves tool configs, runs the tools and reports.
//!
//! High-level modules:
//! - `cli`: CLI argument parsing (binary uses this).
//! - `config`: Run configuration and two-tier tool config discovery.
//! - `compile`: Two-pass document build.
//! - `discover`: Source file discovery with exclusions.
//! - `format`: Formatter invocation and diff recoloring.
//! - `lint`: Linter invocation and output classification.
//! - `pipeline`: Format-then-lint driver producing a `Report`.
//! - `models`: Summary counters.
//! - `output`: Palette and summary printer.
//! - `process`: Inherit/capture subprocess runner.
//! - `error`: Shared error type.
pub mod cli;
pub mod compile;
pub mod config;
pub mod discover;
pub mod error;
pub mod format;
pub mod lint;
pub mod models;
pub mod output;
pub mod pipeline;
pub mod process;
