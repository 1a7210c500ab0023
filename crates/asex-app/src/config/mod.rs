//! Configuration for aseprite-export
//!
//! Supports:
//! - `.asex/config.toml` - Project settings (assets directory, extra editor locations)
//! - Command-line overrides, folded into a [`RunConfig`] at startup

pub mod settings;
pub mod types;

pub use settings::{load_settings, resolve_assets_dir, ASEX_DIR, CONFIG_FILENAME};
pub use types::*;
