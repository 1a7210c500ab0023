//! Single-asset export
//!
//! On Windows, Aseprite may exit with code 0 even when the export itself
//! failed. A zero exit is reported as success; the produced files are not
//! inspected.

use std::path::{Path, PathBuf};

use asex_core::prelude::*;

use crate::command::ExportJob;
use crate::locator::EditorPath;
use crate::runner::CommandRunner;

/// Path of the job's source file, or [`Error::SourceNotFound`] if it is missing
pub fn require_source(job: &ExportJob, assets_dir: &Path) -> Result<PathBuf> {
    let source = job.asset.source_path(assets_dir);
    if !source.is_file() {
        return Err(Error::source_not_found(source));
    }
    Ok(source)
}

/// Runs Aseprite once per job inside the assets directory
pub struct Exporter<'a, R> {
    editor: &'a EditorPath,
    assets_dir: &'a Path,
    runner: &'a R,
}

impl<'a, R: CommandRunner> Exporter<'a, R> {
    pub fn new(editor: &'a EditorPath, assets_dir: &'a Path, runner: &'a R) -> Self {
        Self {
            editor,
            assets_dir,
            runner,
        }
    }

    /// Export one asset.
    ///
    /// Fails with [`Error::SourceNotFound`] before spawning anything if the
    /// source file is missing, and with [`Error::ExportFailed`] when Aseprite
    /// exits non-zero.
    pub async fn export(&self, job: &ExportJob) -> Result<()> {
        require_source(job, self.assets_dir)?;

        let args = job.args();
        let status = self
            .runner
            .run(self.editor.path(), &args, self.assets_dir)
            .await?;

        if !status.is_success() {
            error!("Export of {} failed: exit code {:?}", job.asset, status.code);
            return Err(Error::export_failed(job.asset.name(), status.code));
        }

        info!("Exported {}", job);
        Ok(())
    }
}
