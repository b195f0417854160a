//! All error types for the resxjson crate.
//!
//! These are returned from the fallible leaf operations (parsing resx files,
//! serializing JSON, parsing option values). Per-item failures inside the
//! conversion pipeline degrade to log entries instead; see [`crate::log`].

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("XML parse error: {0}")]
    XmlParse(#[from] quick_xml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid resource: {0}")]
    InvalidResource(String),

    #[error("unknown option value `{0}`")]
    UnknownOption(String),
}
