//! Support for the .NET `.resx` resource container format (read-only).
//!
//! Only flat string entries are extracted: `<data>` elements carrying a
//! `type` or `mimetype` attribute hold serialized objects or binary payloads
//! and are skipped, not errors. Header and metadata elements are ignored.

use std::{
    fs::File,
    io::{BufRead, Read},
    path::Path,
};

use quick_xml::{
    Reader,
    events::{BytesStart, Event},
};

use crate::{bundle::ValueMap, error::Error, traits::Parser};

/// The string entries of one `.resx` file, in document order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Format {
    pub entries: Vec<DataEntry>,
}

/// A single `<data name="...">` element holding a string value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataEntry {
    pub name: String,
    pub value: String,
}

impl Format {
    /// Collapse the entries into an ordered key/value map. The last
    /// occurrence of a duplicated key wins.
    pub fn into_values(self) -> ValueMap {
        let mut values = ValueMap::with_capacity(self.entries.len());
        for entry in self.entries {
            values.insert(entry.name, entry.value);
        }
        values
    }
}

impl Parser for Format {
    /// Parse from any reader.
    fn from_reader<R: BufRead>(reader: R) -> Result<Self, Error> {
        let mut xml_reader = Reader::from_reader(reader);
        xml_reader.config_mut().trim_text(true);

        let mut buf = Vec::new();
        let mut entries = Vec::new();

        loop {
            match xml_reader.read_event_into(&mut buf) {
                Ok(Event::Start(ref e)) if e.name().as_ref() == b"data" => {
                    if let Some(entry) = parse_data_element(e, &mut xml_reader)? {
                        entries.push(entry);
                    }
                }
                Ok(Event::Empty(ref e)) if e.name().as_ref() == b"data" => {
                    if let Some(name) = string_entry_name(e)? {
                        entries.push(DataEntry {
                            name,
                            value: String::new(),
                        });
                    }
                }
                Ok(Event::Eof) => break,
                Ok(_) => {}
                Err(e) => return Err(Error::XmlParse(e)),
            }
            buf.clear();
        }
        Ok(Format { entries })
    }

    /// Override default file reading to support BOM-aware decoding; Visual
    /// Studio writes resx files with a UTF-8 BOM, occasionally as UTF-16.
    fn read_from<P: AsRef<Path>>(path: P) -> Result<Self, Error>
    where
        Self: Sized,
    {
        let file = File::open(path).map_err(Error::Io)?;
        let mut decoder = encoding_rs_io::DecodeReaderBytesBuilder::new()
            .bom_override(true)
            .build(file);

        let mut decoded = String::new();
        decoder.read_to_string(&mut decoded).map_err(Error::Io)?;

        Self::from_str(&decoded)
    }
}

/// The entry name if this `<data>` element is a plain string entry, `None`
/// when it should be skipped (typed value, binary payload, missing name).
fn string_entry_name(e: &BytesStart) -> Result<Option<String>, Error> {
    let mut name = None;
    let mut is_string = true;

    for attr in e.attributes().with_checks(false) {
        let attr = attr.map_err(|e| Error::InvalidResource(e.to_string()))?;
        match attr.key.as_ref() {
            b"name" => name = Some(attr.unescape_value()?.to_string()),
            b"type" | b"mimetype" => is_string = false,
            _ => {}
        }
    }

    Ok(name.filter(|_| is_string))
}

fn parse_data_element<R: BufRead>(
    e: &BytesStart,
    xml_reader: &mut Reader<R>,
) -> Result<Option<DataEntry>, Error> {
    let name = string_entry_name(e)?;

    // Consume the element to its end even when the entry is skipped.
    let mut value = String::new();
    let mut in_value = false;
    let mut buf = Vec::new();
    loop {
        match xml_reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref inner)) if inner.name().as_ref() == b"value" => in_value = true,
            Ok(Event::End(ref inner)) if inner.name().as_ref() == b"value" => in_value = false,
            Ok(Event::Text(t)) if in_value => {
                value.push_str(&t.unescape().map_err(Error::XmlParse)?);
            }
            Ok(Event::End(ref inner)) if inner.name().as_ref() == b"data" => break,
            Ok(Event::Eof) => {
                return Err(Error::InvalidResource(
                    "unexpected EOF inside <data> element".to_string(),
                ));
            }
            Ok(_) => {}
            Err(e) => return Err(Error::XmlParse(e)),
        }
        buf.clear();
    }

    Ok(name.map(|name| DataEntry { name, value }))
}
