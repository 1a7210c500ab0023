//! Command-line entry point shared by the export binaries

use std::io::Write;
use std::path::PathBuf;

use clap::Parser;

use asex_app::{
    load_settings, preview_plan, run_plan, CliOverrides, ExportPlan, ExportReport, RunConfig,
};
use asex_core::prelude::*;
use asex_editor::SystemRunner;

/// Export Aseprite sprite sheets and their JSON metadata
#[derive(Parser, Debug, Default)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Project root holding the assets directory and `.asex/config.toml`
    #[arg(long, value_name = "DIR")]
    pub project_dir: Option<PathBuf>,

    /// Assets directory, relative to the project root (default: graphics)
    #[arg(long, value_name = "DIR")]
    pub assets_dir: Option<PathBuf>,

    /// Aseprite executable; takes precedence over ASEPRITE_PATH
    #[arg(long, value_name = "PATH")]
    pub aseprite: Option<PathBuf>,

    /// Print the Aseprite command lines instead of running them
    #[arg(long)]
    pub dry_run: bool,
}

/// Binary entry point: parse arguments, set up reporting and run `plan`.
///
/// Any error is returned to `main`, which prints it and exits with status 1.
pub async fn main(plan: fn() -> Result<ExportPlan>) -> color_eyre::Result<()> {
    color_eyre::install()?;

    if let Err(e) = asex_core::logging::init() {
        eprintln!("warning: file logging disabled: {e}");
    }

    let args = Args::parse();
    let plan = plan()?;

    info!("═══════════════════════════════════════════════════════");
    info!("aseprite-export starting: plan '{}'", plan.name);
    info!("═══════════════════════════════════════════════════════");

    match run(&plan, args, &mut std::io::stdout()).await {
        Ok(report) => {
            info!("Exported {} asset(s)", report.exported.len());
            Ok(())
        }
        Err(e) => {
            error!("Export failed: {:?}", e);
            Err(e.into())
        }
    }
}

/// Resolve configuration and the editor once, then run `plan`.
///
/// Progress lines, and with `--dry-run` the command lines, go to `out`.
pub async fn run<W: Write>(plan: &ExportPlan, args: Args, out: &mut W) -> Result<ExportReport> {
    let project_dir = match args.project_dir {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };

    let settings = load_settings(&project_dir);
    let overrides = CliOverrides {
        assets_dir: args.assets_dir,
        aseprite: args.aseprite,
        dry_run: args.dry_run,
    };
    let config = RunConfig::resolve(&project_dir, &overrides, &settings)?;
    let editor = config.locator.locate()?;

    info!("Project: {}", config.project_dir.display());
    info!("Aseprite: {} ({:?})", editor.path().display(), editor.source());
    info!("Assets: {}", config.assets_dir.display());

    if config.dry_run {
        preview_plan(plan, &editor, &config.assets_dir, out)
    } else {
        run_plan(plan, &editor, &config.assets_dir, &SystemRunner, out).await
    }
}
