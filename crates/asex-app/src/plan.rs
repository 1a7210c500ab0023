//! Export plans: which assets to export, in which order, with which flags

use asex_core::prelude::*;
use asex_core::AssetDescriptor;
use asex_editor::{ExportJob, ExportOption};

/// Layer excluded from the splash and font sheets
pub const BACKGROUND_LAYER: &str = "Background";

/// Frame naming pattern used when splitting layers
pub const LAYER_FILENAME_FORMAT: &str = "{layer}";

/// A named, ordered sequence of export jobs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportPlan {
    pub name: &'static str,
    pub jobs: Vec<ExportJob>,
}

impl ExportPlan {
    pub fn new(name: &'static str, jobs: Vec<ExportJob>) -> Self {
        Self { name, jobs }
    }

    /// All game graphics: the city sheet split by layer, and the splash and
    /// font sheets without their background layer.
    pub fn graphics() -> Result<Self> {
        Ok(Self::new(
            "graphics",
            vec![
                ExportJob::new(AssetDescriptor::new("manhattan")?)
                    .with_option(ExportOption::SplitLayers)
                    .with_option(ExportOption::filename_format(LAYER_FILENAME_FORMAT)),
                ExportJob::new(AssetDescriptor::new("splash")?)
                    .with_option(ExportOption::ignore_layer(BACKGROUND_LAYER)),
                ExportJob::new(AssetDescriptor::new("pman_font01")?)
                    .with_option(ExportOption::ignore_layer(BACKGROUND_LAYER)),
            ],
        ))
    }

    /// Only the city sprite sheet, with no extra flags
    pub fn spritesheet() -> Result<Self> {
        Ok(Self::new(
            "spritesheet",
            vec![ExportJob::new(AssetDescriptor::new("manhattan")?)],
        ))
    }

    pub fn len(&self) -> usize {
        self.jobs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }
}
