//! aseprite-export Library
//!
//! Batch exports of Aseprite sources into PNG sprite sheets plus JSON
//! metadata. The binaries `export-graphics` and `export-spritesheet` are thin
//! wrappers over [`cli::main`].

pub mod cli;

pub use asex_app::{ExportPlan, ExportReport};
