//! # asex-app - Export Orchestration
//!
//! Resolves the run configuration, defines the export plans and drives them
//! through [`asex_editor`] one asset at a time.
//!
//! ## Public API
//!
//! ### Configuration (`config`)
//! - [`Settings`] - `.asex/config.toml` contents
//! - [`RunConfig`] - Assets directory, editor locator and flags for one run
//! - [`CliOverrides`] - Command-line values folded into [`RunConfig`]
//!
//! ### Plans (`plan`)
//! - [`ExportPlan::graphics()`] - manhattan, splash and pman_font01
//! - [`ExportPlan::spritesheet()`] - manhattan only
//!
//! ### Driver (`driver`)
//! - [`run_plan()`] - Run a plan sequentially, stopping at the first failure
//! - [`preview_plan()`] - Print the command lines a plan would run

pub mod config;
pub mod driver;
pub mod plan;

pub use config::{load_settings, CliOverrides, RunConfig, Settings};
pub use driver::{preview_plan, run_plan, ExportReport};
pub use plan::ExportPlan;
