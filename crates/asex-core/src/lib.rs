//! # asex-core - Core Domain Types
//!
//! Foundation crate for aseprite-export. Provides the asset descriptor, the
//! error taxonomy shared by every crate, and logging setup.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (thiserror, tracing, dirs).
//!
//! ## Public API
//!
//! ### Assets (`asset`)
//! - [`AssetDescriptor`] - Base name of a sprite plus its derived source/data/sheet files
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Error enum split into configuration errors and export failures
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ### Logging (`logging`)
//! - [`logging::init()`] - File logging controlled by `ASEX_LOG`
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use asex_core::prelude::*;
//! ```

pub mod asset;
pub mod error;
pub mod logging;

/// Prelude for common imports used throughout all aseprite-export crates
pub mod prelude {
    pub use super::error::{Error, Result, ResultExt};
    pub use tracing::{debug, error, info, instrument, trace, warn};
}

pub use asset::{AssetDescriptor, DATA_EXTENSION, SHEET_EXTENSION, SOURCE_EXTENSION};
pub use error::{Error, Result, ResultExt};
