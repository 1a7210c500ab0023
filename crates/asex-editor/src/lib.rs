//! # asex-editor - Aseprite Discovery and Invocation
//!
//! Finds the Aseprite executable, builds its batch-mode command lines and runs
//! it as a child process, one asset at a time.
//!
//! Depends on [`asex_core`] for domain types and error handling.
//!
//! ## Public API
//!
//! ### Discovery
//! - [`EditorLocator`] - Resolve Aseprite from `ASEPRITE_PATH` or a candidate list
//! - [`default_candidates()`] - Platform install locations
//!
//! ### Command Lines
//! - [`build_export_args()`] - Argument vector for one asset export
//! - [`ExportJob`], [`ExportOption`] - An asset plus its extra flags
//! - [`render_command_line()`] - Shell-style rendering for dry runs
//!
//! ### Process Execution
//! - [`CommandRunner`] - Run an executable in a working directory
//! - [`SystemRunner`] - Real child processes via `tokio::process`
//! - [`Exporter`] - Export one job and map the exit code to an error

pub mod command;
pub mod export;
pub mod locator;
pub mod runner;
#[cfg(any(test, feature = "test-helpers"))]
pub mod test_utils;

pub use command::{build_export_args, render_command_line, ExportJob, ExportOption};
pub use export::{require_source, Exporter};
pub use locator::{default_candidates, EditorLocator, EditorPath, EditorSource, ASEPRITE_PATH_ENV};
pub use runner::{CommandRunner, RunStatus, SystemRunner};
