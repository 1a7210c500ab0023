//! Export every game graphic: manhattan (split by layer), splash and pman_font01

use asex_app::ExportPlan;

#[tokio::main(flavor = "current_thread")]
async fn main() -> color_eyre::Result<()> {
    aseprite_export::cli::main(ExportPlan::graphics).await
}
