//! clang-gate: a build-system gate for clang-format and clang-tidy.
//!
//! Decides per CMake project whether a clang tool needs to run: a YAML
//! settings document carries per-tool enable flags plus project allow/deny
//! lists, and a cached snapshot of the previous settings turns that decision
//! into an edge trigger — a sentinel file is set only when a tool newly
//! becomes required. Two invoker subcommands wrap the tools themselves and
//! honor the trigger.
//!
//! # Architecture
//!
//! - **[`settings`]** — YAML settings document and per-project eligibility.
//! - **[`trigger`]** — change detection, trigger file, settings cache.
//! - **[`parse`]** — list/glob/path parsing for CLI input.
//! - **[`diagnostics`]** — clang-format replacement extraction and reporting.
//! - **[`commands`]** — the check/format/tidy subcommand drivers.
//! - **[`logging`]** — stderr terminal logging.

/// Subcommand drivers: check, format, tidy.
pub mod commands;
/// Formatting diagnostics: replacement parsing and line/column mapping.
pub mod diagnostics;
/// Error taxonomy for the whole crate.
pub mod error;
/// Terminal logging setup.
pub mod logging;
/// List, glob, and path parsing helpers.
pub mod parse;
/// Settings document and eligibility evaluation.
pub mod settings;
/// Trigger file and settings cache handling.
pub mod trigger;

pub use error::{Error, Result};
