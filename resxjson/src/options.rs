//! Converter options supplied by the embedding CLI.
//!
//! The CLI collaborator fully populates a [`ConverterOptions`] before the
//! core runs; the core treats it as read-only.

use std::path::PathBuf;
use std::str::FromStr;

use crate::{error::Error, formats::OutputFormat};

/// Key-name transform applied uniformly to every emitted key.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum KeyCasing {
    /// Do not change key names.
    #[default]
    Keep,
    /// Lowercase the first character only: `SomeMsg` -> `someMsg`.
    Camel,
    /// Lowercase the whole key: `SomeMsg` -> `somemsg`.
    Lower,
}

impl KeyCasing {
    /// Apply the transform to one key. Pure, and applying it twice yields the
    /// same key as applying it once.
    pub fn apply(&self, key: &str) -> String {
        match self {
            KeyCasing::Keep => key.to_string(),
            KeyCasing::Camel => {
                let mut chars = key.chars();
                match chars.next() {
                    Some(first) => first.to_lowercase().chain(chars).collect(),
                    None => String::new(),
                }
            }
            KeyCasing::Lower => key.to_lowercase(),
        }
    }
}

impl FromStr for KeyCasing {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "keep" => Ok(KeyCasing::Keep),
            "camel" => Ok(KeyCasing::Camel),
            "lower" => Ok(KeyCasing::Lower),
            other => Err(Error::UnknownOption(other.to_string())),
        }
    }
}

/// What to do when an output file already exists and is read-only.
/// Writable files are always overwritten.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OverwriteMode {
    /// Leave the read-only file untouched and log an error.
    #[default]
    Skip,
    /// Clear the read-only attribute and overwrite.
    Force,
}

/// Options for one conversion run.
#[derive(Debug, Clone)]
pub struct ConverterOptions {
    /// Explicit input paths not yet classified; each entry is treated as a
    /// directory if one exists at that path, otherwise as a file.
    pub inputs: Vec<PathBuf>,

    /// Explicit resource file paths.
    pub input_files: Vec<PathBuf>,

    /// Directories to enumerate for resource files.
    pub input_folders: Vec<PathBuf>,

    /// Enumerate input directories recursively.
    pub recursive: bool,

    /// Directory receiving one output per bundle. Falls back to the current
    /// directory when neither this nor `output_file` is set.
    pub output_folder: Option<PathBuf>,

    /// Single output file; when set and several bundles are discovered, they
    /// are merged into one bundle named after this file.
    pub output_file: Option<PathBuf>,

    pub output_format: OutputFormat,

    /// Subdirectory that receives the base (non-localized) document under
    /// the i18next format, simulating the base resources as a culture.
    pub fallback_culture: String,

    pub casing: KeyCasing,

    pub overwrite: OverwriteMode,
}

impl Default for ConverterOptions {
    fn default() -> Self {
        ConverterOptions {
            inputs: Vec::new(),
            input_files: Vec::new(),
            input_folders: Vec::new(),
            recursive: false,
            output_folder: None,
            output_file: None,
            output_format: OutputFormat::default(),
            fallback_culture: "dev".to_string(),
            casing: KeyCasing::default(),
            overwrite: OverwriteMode::default(),
        }
    }
}
