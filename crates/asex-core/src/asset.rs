//! Asset descriptors
//!
//! An asset is identified by a base name shared by its editable source and
//! the two files Aseprite writes next to it.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Extension of Aseprite's editable source files
pub const SOURCE_EXTENSION: &str = "aseprite";

/// Extension of the JSON metadata written by `--data`
pub const DATA_EXTENSION: &str = "json";

/// Extension of the PNG atlas written by `--sheet`
pub const SHEET_EXTENSION: &str = "png";

/// A sprite asset, named by its filename stem
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AssetDescriptor {
    name: String,
}

impl AssetDescriptor {
    /// Create a descriptor for `name`.
    ///
    /// The name must be a bare stem: non-empty and without path separators,
    /// since every derived file lives directly in the assets directory.
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        if name.is_empty() || name.contains(['/', '\\']) {
            return Err(Error::InvalidAsset { name });
        }
        Ok(Self { name })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// `<name>.aseprite`
    pub fn source_file(&self) -> String {
        format!("{}.{}", self.name, SOURCE_EXTENSION)
    }

    /// `<name>.json`
    pub fn data_file(&self) -> String {
        format!("{}.{}", self.name, DATA_EXTENSION)
    }

    /// `<name>.png`
    pub fn sheet_file(&self) -> String {
        format!("{}.{}", self.name, SHEET_EXTENSION)
    }

    pub fn source_path(&self, assets_dir: &Path) -> PathBuf {
        assets_dir.join(self.source_file())
    }

    pub fn data_path(&self, assets_dir: &Path) -> PathBuf {
        assets_dir.join(self.data_file())
    }

    pub fn sheet_path(&self, assets_dir: &Path) -> PathBuf {
        assets_dir.join(self.sheet_file())
    }
}

impl fmt::Display for AssetDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derived_file_names() {
        let asset = AssetDescriptor::new("manhattan").unwrap();
        assert_eq!(asset.source_file(), "manhattan.aseprite");
        assert_eq!(asset.data_file(), "manhattan.json");
        assert_eq!(asset.sheet_file(), "manhattan.png");
    }

    #[test]
    fn test_paths_share_assets_dir() {
        let asset = AssetDescriptor::new("splash").unwrap();
        let dir = Path::new("/project/graphics");
        assert_eq!(
            asset.source_path(dir),
            PathBuf::from("/project/graphics/splash.aseprite")
        );
        assert_eq!(asset.data_path(dir), dir.join("splash.json"));
        assert_eq!(asset.sheet_path(dir), dir.join("splash.png"));
    }

    #[test]
    fn test_rejects_empty_name() {
        let err = AssetDescriptor::new("").unwrap_err();
        assert!(matches!(err, Error::InvalidAsset { .. }));
    }

    #[test]
    fn test_rejects_path_separators() {
        assert!(AssetDescriptor::new("sprites/hero").is_err());
        assert!(AssetDescriptor::new("sprites\\hero").is_err());
    }

    #[test]
    fn test_display_is_name() {
        let asset = AssetDescriptor::new("pman_font01").unwrap();
        assert_eq!(asset.to_string(), "pman_font01");
    }
}
