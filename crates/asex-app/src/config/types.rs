//! Configuration types for aseprite-export
//!
//! Defines:
//! - `Settings` - Contents of `.asex/config.toml`
//! - `RunConfig` - Everything one run needs, resolved once at startup

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use asex_editor::EditorLocator;

/// Default assets directory, relative to the project directory
pub const DEFAULT_ASSETS_DIR: &str = "graphics";

/// Global settings from `.asex/config.toml`
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Settings {
    pub assets: AssetSettings,
    pub editor: EditorSettings,
}

/// `[assets]` section
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct AssetSettings {
    /// Directory holding the `.aseprite` sources and the exported files
    #[serde(default = "default_assets_dir")]
    pub dir: PathBuf,
}

impl Default for AssetSettings {
    fn default() -> Self {
        Self {
            dir: default_assets_dir(),
        }
    }
}

fn default_assets_dir() -> PathBuf {
    PathBuf::from(DEFAULT_ASSETS_DIR)
}

/// `[editor]` section
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct EditorSettings {
    /// Extra install locations, checked before the built-in ones
    #[serde(default)]
    pub candidates: Vec<PathBuf>,
}

/// Command-line values that take precedence over settings
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub assets_dir: Option<PathBuf>,
    pub aseprite: Option<PathBuf>,
    pub dry_run: bool,
}

/// Configuration for one run, built once and passed down explicitly
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub project_dir: PathBuf,
    pub assets_dir: PathBuf,
    pub locator: EditorLocator,
    pub dry_run: bool,
}
