//! Traits for reading resource container files in resxjson.

use std::{
    fs::File,
    io::{BufRead, BufReader, Cursor},
    path::Path,
};

use crate::error::Error;

/// A trait for parsing a resource container from one file.
///
/// Only the reading half exists: resxjson extracts flat key/value data and
/// never writes resource containers back.
///
/// # Example
///
/// ```rust,no_run
/// use resxjson::traits::Parser;
/// let resources = resxjson::formats::resx::Format::read_from("Messages.resx")?;
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub trait Parser {
    /// Parse from any reader.
    fn from_reader<R: BufRead>(reader: R) -> Result<Self, Error>
    where
        Self: Sized;

    /// Parse from file path.
    fn read_from<P: AsRef<Path>>(path: P) -> Result<Self, Error>
    where
        Self: Sized,
    {
        let file = File::open(path).map_err(Error::Io)?;
        let reader = BufReader::new(file);
        Self::from_reader(reader)
    }

    /// Parse from a string.
    fn from_str(s: &str) -> Result<Self, Error>
    where
        Self: Sized,
    {
        Self::from_reader(Cursor::new(s))
    }

    /// Parse from bytes.
    fn from_bytes(bytes: &[u8]) -> Result<Self, Error>
    where
        Self: Sized,
    {
        Self::from_reader(Cursor::new(bytes))
    }
}
