//! Sequential plan execution
//!
//! Jobs run one after another. The first failure stops the plan; later jobs
//! are never started and files already written are left in place.
//! [`preview_plan`] walks the same jobs for `--dry-run` without spawning.

use std::io::Write;
use std::path::Path;

use asex_core::prelude::*;
use asex_editor::{render_command_line, require_source, CommandRunner, EditorPath, Exporter};

use crate::plan::ExportPlan;

/// Assets exported by a completed plan, in order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExportReport {
    pub exported: Vec<String>,
}

/// Run every job of `plan`, printing progress to `out`.
///
/// Prints `Exporting <src> to <json> and <png>...` before each job and
/// `Done.` once all of them succeed.
pub async fn run_plan<R, W>(
    plan: &ExportPlan,
    editor: &EditorPath,
    assets_dir: &Path,
    runner: &R,
    out: &mut W,
) -> Result<ExportReport>
where
    R: CommandRunner,
    W: Write,
{
    info!(
        "Running plan '{}' ({} job(s)) with {}",
        plan.name,
        plan.len(),
        editor.path().display()
    );
    if plan.is_empty() {
        warn!("Plan '{}' has no jobs", plan.name);
    }

    let exporter = Exporter::new(editor, assets_dir, runner);
    let mut report = ExportReport::default();

    for job in &plan.jobs {
        writeln!(out, "Exporting {job}...")?;
        out.flush()?;

        if let Err(e) = exporter.export(job).await {
            warn!(
                "Plan '{}' aborted at {} after {} export(s)",
                plan.name,
                job.asset,
                report.exported.len()
            );
            return Err(e);
        }
        report.exported.push(job.asset.name().to_string());
    }

    writeln!(out, "Done.")?;
    info!("Plan '{}' finished", plan.name);
    Ok(report)
}

/// Walk `plan` without spawning anything, printing each command line to `out`.
///
/// Progress lines match [`run_plan`]; each is followed by
/// `  (dry run) <command line>`. Missing sources still stop the walk.
pub fn preview_plan<W: Write>(
    plan: &ExportPlan,
    editor: &EditorPath,
    assets_dir: &Path,
    out: &mut W,
) -> Result<ExportReport> {
    info!("Dry run of plan '{}' ({} job(s))", plan.name, plan.len());

    let mut report = ExportReport::default();
    for job in &plan.jobs {
        writeln!(out, "Exporting {job}...")?;
        require_source(job, assets_dir)?;

        let line = render_command_line(editor.path(), &job.args());
        debug!("Dry run in {}: {}", assets_dir.display(), line);
        writeln!(out, "  (dry run) {line}")?;
        report.exported.push(job.asset.name().to_string());
    }

    writeln!(out, "Done.")?;
    out.flush()?;
    Ok(report)
}
