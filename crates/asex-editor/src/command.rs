//! Aseprite batch-mode command line construction
//!
//! See <https://www.aseprite.org/docs/cli/> for the flags used here.

use std::fmt;
use std::path::Path;

use asex_core::AssetDescriptor;

/// Run without opening the UI
pub const BATCH_FLAG: &str = "-b";

/// Write the JSON metadata to the following path
pub const DATA_FLAG: &str = "--data";

/// Write the PNG sheet to the following path
pub const SHEET_FLAG: &str = "--sheet";

pub const SPLIT_LAYERS_FLAG: &str = "--split-layers";
pub const FILENAME_FORMAT_FLAG: &str = "--filename-format";
pub const IGNORE_LAYER_FLAG: &str = "--ignore-layer";

/// One extra export flag, placed between the output flags and the source file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportOption {
    /// Export each layer as separate frames
    SplitLayers,
    /// Frame naming pattern, e.g. `{layer}`
    FilenameFormat(String),
    /// Leave the named layer out of the export
    IgnoreLayer(String),
    /// Passed through verbatim
    Raw(String),
}

impl ExportOption {
    pub fn filename_format(format: impl Into<String>) -> Self {
        Self::FilenameFormat(format.into())
    }

    pub fn ignore_layer(layer: impl Into<String>) -> Self {
        Self::IgnoreLayer(layer.into())
    }

    /// Append this option's arguments to `args`
    pub fn push_args(&self, args: &mut Vec<String>) {
        match self {
            ExportOption::SplitLayers => args.push(SPLIT_LAYERS_FLAG.to_string()),
            ExportOption::FilenameFormat(format) => {
                args.push(FILENAME_FORMAT_FLAG.to_string());
                args.push(format.clone());
            }
            ExportOption::IgnoreLayer(layer) => {
                args.push(IGNORE_LAYER_FLAG.to_string());
                args.push(layer.clone());
            }
            ExportOption::Raw(arg) => args.push(arg.clone()),
        }
    }
}

/// A single asset export: which asset, with which extra options
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportJob {
    pub asset: AssetDescriptor,
    pub options: Vec<ExportOption>,
}

impl ExportJob {
    pub fn new(asset: AssetDescriptor) -> Self {
        Self {
            asset,
            options: Vec::new(),
        }
    }

    pub fn with_option(mut self, option: ExportOption) -> Self {
        self.options.push(option);
        self
    }

    /// Full argument vector for this job
    pub fn args(&self) -> Vec<String> {
        build_export_args(&self.asset, &self.options)
    }
}

impl fmt::Display for ExportJob {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} to {} and {}",
            self.asset.source_file(),
            self.asset.data_file(),
            self.asset.sheet_file()
        )
    }
}

/// Build the Aseprite argument vector for one asset.
///
/// Order is fixed: batch flag, data output, sheet output, the extra options
/// in caller order, and the source file as the final positional argument.
/// Paths are relative; the process runs inside the assets directory.
pub fn build_export_args(asset: &AssetDescriptor, options: &[ExportOption]) -> Vec<String> {
    let mut args = vec![
        BATCH_FLAG.to_string(),
        DATA_FLAG.to_string(),
        asset.data_file(),
        SHEET_FLAG.to_string(),
        asset.sheet_file(),
    ];
    for option in options {
        option.push_args(&mut args);
    }
    args.push(asset.source_file());
    args
}

/// Shell-style rendering of a command line, quoting parts that need it
pub fn render_command_line(program: &Path, args: &[String]) -> String {
    std::iter::once(program.display().to_string())
        .chain(args.iter().cloned())
        .map(|part| {
            if part.is_empty() || part.contains([' ', '{', '}', '"']) {
                format!("\"{}\"", part.replace('"', "\\\""))
            } else {
                part
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
