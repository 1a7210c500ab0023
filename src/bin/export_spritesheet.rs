//! Export the manhattan sprite sheet only

use asex_app::ExportPlan;

#[tokio::main(flavor = "current_thread")]
async fn main() -> color_eyre::Result<()> {
    aseprite_export::cli::main(ExportPlan::spritesheet).await
}
