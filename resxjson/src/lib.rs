#![forbid(unsafe_code)]
//! Convert .NET `.resx` resource bundles into JSON for client-side
//! localization loaders.
//!
//! Resource files sharing a base name (`Messages.resx`, `Messages.fr.resx`,
//! `Messages.en-US.resx`) are discovered and grouped into bundles, and each
//! bundle is projected into one base document plus one document per culture,
//! in either of two output flavors:
//!
//! - **RequireJS**: AMD modules (`define({...});`) for the RequireJS i18n
//!   plugin, with the base document carrying a `"root"` field and one
//!   boolean flag per available culture.
//! - **i18next**: plain JSON dictionaries, one flat object per culture, with
//!   the base resources placed under a configurable fallback-culture
//!   subdirectory.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use resxjson::{ConverterOptions, OutputFormat, convert};
//!
//! let mut options = ConverterOptions::default();
//! options.inputs.push("./resources".into());
//! options.output_folder = Some("./dist/locales".into());
//! options.output_format = OutputFormat::I18next;
//! options.fallback_culture = "en".to_string();
//!
//! let log = convert(&options);
//! for item in &log {
//!     println!("[{}] {}", item.severity, item.message);
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! The library performs no terminal I/O and never exits the process: all
//! trace/info/warning/error messages accumulate in the returned
//! [`ConverterLog`], and per-item problems (an orphaned culture file, an
//! unreadable resx, a read-only output target) reduce the output set instead
//! of aborting the run.

pub mod bundle;
pub mod converter;
pub mod discover;
pub mod error;
pub mod formats;
pub mod locale;
pub mod log;
pub mod options;
pub mod projector;
pub mod traits;
pub mod writer;

// Re-export most used types for easy consumption
pub use crate::{
    bundle::{FileBundle, ResourceBundle},
    converter::{convert, convert_with_registry},
    error::Error,
    formats::OutputFormat,
    locale::{KnownLocales, Locale},
    log::{ConverterLog, LogItem, Severity},
    options::{ConverterOptions, KeyCasing, OverwriteMode},
};
