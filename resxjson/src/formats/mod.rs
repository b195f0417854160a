//! The resx input container and the supported output formats.
//!
//! This module provides the [`OutputFormat`] enum, which co-locates the two
//! format-specific behaviors: the shape of the base JSON document, the text
//! rendering of a document, and the directory that receives the base
//! document.

pub mod resx;

use std::{
    fmt::{Display, Formatter},
    path::{Path, PathBuf},
    str::FromStr,
};

use serde_json::{Map, Value};

pub use resx::Format as ResxFormat;

use crate::{Error, locale::Locale};

/// The two supported output flavors.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// AMD modules (`define({...});`) for the RequireJS i18n plugin.
    #[default]
    RequireJs,
    /// Plain JSON dictionaries for i18next.
    I18next,
}

impl Display for OutputFormat {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::RequireJs => write!(f, "requirejs"),
            OutputFormat::I18next => write!(f, "i18next"),
        }
    }
}

/// Accepts the case-insensitive strings `"requirejs"` (also `"require-js"`,
/// `"amd"`) and `"i18next"`.
///
/// # Example
/// ```rust
/// use resxjson::formats::OutputFormat;
/// use std::str::FromStr;
/// assert_eq!(OutputFormat::from_str("RequireJs").unwrap(), OutputFormat::RequireJs);
/// assert_eq!(OutputFormat::from_str("i18next").unwrap(), OutputFormat::I18next);
/// assert!(OutputFormat::from_str("yaml").is_err());
/// ```
impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "requirejs" | "require-js" | "amd" => Ok(OutputFormat::RequireJs),
            "i18next" => Ok(OutputFormat::I18next),
            other => Err(Error::UnknownOption(other.to_string())),
        }
    }
}

impl OutputFormat {
    /// File extension of output documents for this format.
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::RequireJs => "js",
            OutputFormat::I18next => "json",
        }
    }

    /// Shape the base document from the casing-transformed base values and
    /// the locales present in the bundle.
    ///
    /// RequireJS expects the base translations under a `"root"` field with
    /// one boolean `true` field per available locale; i18next expects the
    /// flat key/value object itself.
    pub fn base_document<'a>(
        &self,
        values: Map<String, Value>,
        locales: impl Iterator<Item = &'a Locale>,
    ) -> Value {
        match self {
            OutputFormat::RequireJs => {
                let mut root = Map::new();
                root.insert("root".to_string(), Value::Object(values));
                for locale in locales {
                    root.insert(locale.name().to_string(), Value::Bool(true));
                }
                Value::Object(root)
            }
            OutputFormat::I18next => Value::Object(values),
        }
    }

    /// Render a document as output text: pretty-printed JSON, wrapped as an
    /// AMD module definition for RequireJS.
    pub fn render(&self, document: &Value) -> Result<String, Error> {
        let text = serde_json::to_string_pretty(document)?;
        Ok(match self {
            OutputFormat::RequireJs => format!("define({});", text),
            OutputFormat::I18next => text,
        })
    }

    /// Directory receiving the base document. i18next nests it under the
    /// fallback-culture subdirectory as if the base resources were their own
    /// culture; RequireJS keeps it at the output root.
    pub fn base_document_dir(&self, base_dir: &Path, fallback_culture: &str) -> PathBuf {
        match self {
            OutputFormat::RequireJs => base_dir.to_path_buf(),
            OutputFormat::I18next => base_dir.join(fallback_culture),
        }
    }
}
