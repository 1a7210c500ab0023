//! Aseprite executable discovery
//!
//! Resolution order:
//! 1. An explicit override (`ASEPRITE_PATH`, or `--aseprite` on the command
//!    line). Returned verbatim, without checking that it exists.
//! 2. The candidate list, checked in order. The first existing path wins.
//!
//! Nothing is cached: the resolved [`EditorPath`] is handed to the caller and
//! lives for the rest of the run.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use asex_core::prelude::*;

/// Environment variable that overrides the candidate list
///
/// The `EditorNotFound` and `EditorUnavailable` messages name it literally.
pub const ASEPRITE_PATH_ENV: &str = "ASEPRITE_PATH";

/// How the editor path was obtained
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorSource {
    Override,
    Candidate,
}

/// Resolved path to the Aseprite executable
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorPath {
    path: PathBuf,
    source: EditorSource,
}

impl EditorPath {
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn source(&self) -> EditorSource {
        self.source
    }
}

/// Finds the Aseprite executable from an override and a candidate list
#[derive(Debug, Clone, Default)]
pub struct EditorLocator {
    override_path: Option<PathBuf>,
    candidates: Vec<PathBuf>,
}

impl EditorLocator {
    pub fn new(candidates: Vec<PathBuf>) -> Self {
        Self {
            override_path: None,
            candidates,
        }
    }

    /// Build a locator whose override comes from `ASEPRITE_PATH`
    pub fn from_env(candidates: Vec<PathBuf>) -> Self {
        Self::new(candidates).with_override(std::env::var_os(ASEPRITE_PATH_ENV))
    }

    /// Set the override. An empty value counts as unset.
    pub fn with_override(mut self, value: Option<impl Into<OsString>>) -> Self {
        self.override_path = value
            .map(Into::into)
            .filter(|v| !v.is_empty())
            .map(PathBuf::from);
        self
    }

    pub fn override_path(&self) -> Option<&Path> {
        self.override_path.as_deref()
    }

    pub fn candidates(&self) -> &[PathBuf] {
        &self.candidates
    }

    /// Resolve the editor path
    pub fn locate(&self) -> Result<EditorPath> {
        if let Some(path) = &self.override_path {
            debug!("Using Aseprite override: {}", path.display());
            return Ok(EditorPath {
                path: path.clone(),
                source: EditorSource::Override,
            });
        }

        for candidate in &self.candidates {
            if candidate.exists() {
                debug!("Found Aseprite at {}", candidate.display());
                return Ok(EditorPath {
                    path: candidate.clone(),
                    source: EditorSource::Candidate,
                });
            }
            trace!("Aseprite not at {}", candidate.display());
        }

        warn!(
            "Aseprite not found in {} candidate location(s) and {} is unset",
            self.candidates.len(),
            ASEPRITE_PATH_ENV
        );
        Err(Error::EditorNotFound {
            searched: self.candidates.clone(),
        })
    }
}

/// Common Aseprite install locations for the current platform
pub fn default_candidates() -> Vec<PathBuf> {
    let mut paths = Vec::new();

    #[cfg(target_os = "windows")]
    {
        paths.push(PathBuf::from(r"C:\Program Files\Aseprite\Aseprite.exe"));
        paths.push(PathBuf::from(
            r"C:\Program Files (x86)\Steam\steamapps\common\Aseprite\Aseprite.exe",
        ));
    }

    #[cfg(target_os = "macos")]
    {
        paths.push(PathBuf::from(
            "/Applications/Aseprite.app/Contents/MacOS/aseprite",
        ));
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(
                "Library/Application Support/Steam/steamapps/common/Aseprite/Aseprite.app/Contents/MacOS/aseprite",
            ));
        }
    }

    #[cfg(not(any(target_os = "windows", target_os = "macos")))]
    {
        paths.push(PathBuf::from("/usr/bin/aseprite"));
        paths.push(PathBuf::from("/usr/local/bin/aseprite"));
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".steam/steam/steamapps/common/Aseprite/aseprite"));
        }
    }

    paths
}
