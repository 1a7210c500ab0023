//! Application error types with rich context

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Application error types organized by layer/domain
#[derive(Debug, Error)]
pub enum Error {
    // ─────────────────────────────────────────────────────────────
    // Common/Infrastructure Errors
    // ─────────────────────────────────────────────────────────────
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    Config { message: String },

    // ─────────────────────────────────────────────────────────────
    // Editor Discovery Errors
    // ─────────────────────────────────────────────────────────────
    #[error(
        "Aseprite not found, please define ASEPRITE_PATH in your environment! (searched {} location(s))",
        .searched.len()
    )]
    EditorNotFound { searched: Vec<PathBuf> },

    #[error(
        "Aseprite could not be started from {path}: the file or its script interpreter is missing. Check ASEPRITE_PATH or --aseprite."
    )]
    EditorUnavailable { path: PathBuf },

    #[error("Assets directory not found: {path}")]
    AssetsDirNotFound { path: PathBuf },

    #[error("Invalid asset name: {name:?}")]
    InvalidAsset { name: String },

    // ─────────────────────────────────────────────────────────────
    // Export Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Source file not found: {path}")]
    SourceNotFound { path: PathBuf },

    #[error("Failed to spawn Aseprite: {reason}")]
    ProcessSpawn { reason: String },

    #[error("Exporting {asset} failed (exit code: {code:?})")]
    ExportFailed { asset: String, code: Option<i32> },
}

// ─────────────────────────────────────────────────────────────────
// Convenience Constructors
// ─────────────────────────────────────────────────────────────────

impl Error {
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    pub fn editor_unavailable(path: impl Into<PathBuf>) -> Self {
        Self::EditorUnavailable { path: path.into() }
    }

    pub fn assets_dir_not_found(path: impl Into<PathBuf>) -> Self {
        Self::AssetsDirNotFound { path: path.into() }
    }

    pub fn source_not_found(path: impl Into<PathBuf>) -> Self {
        Self::SourceNotFound { path: path.into() }
    }

    pub fn export_failed(asset: impl Into<String>, code: Option<i32>) -> Self {
        Self::ExportFailed {
            asset: asset.into(),
            code,
        }
    }

    /// Check if this error comes from the environment rather than from an export
    ///
    /// These are raised before any export starts: the editor or the assets
    /// cannot be resolved.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            Error::Config { .. }
                | Error::EditorNotFound { .. }
                | Error::EditorUnavailable { .. }
                | Error::AssetsDirNotFound { .. }
                | Error::InvalidAsset { .. }
        )
    }

    /// Check if this error was raised while exporting a single asset
    pub fn is_export_failure(&self) -> bool {
        matches!(
            self,
            Error::SourceNotFound { .. } | Error::ProcessSpawn { .. } | Error::ExportFailed { .. }
        )
    }
}

// ─────────────────────────────────────────────────────────────────
// Error Context Extensions
// ─────────────────────────────────────────────────────────────────

/// Extension trait for adding context to Results
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context with a closure (lazy evaluation)
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            let err = e.into();
            tracing::error!("{}: {:?}", context.into(), err);
            err
        })
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| {
            let err = e.into();
            tracing::error!("{}: {:?}", f(), err);
            err
        })
    }
}
