//! Projection of a resource bundle into format-specific JSON documents.

use std::collections::BTreeMap;

use serde_json::{Map, Value};

use crate::{
    bundle::{ResourceBundle, ValueMap},
    formats::OutputFormat,
    locale::Locale,
    options::KeyCasing,
};

/// JSON documents generated from one bundle: one base document plus one flat
/// document per locale.
#[derive(Debug, Clone, PartialEq)]
pub struct JsonResources {
    pub base: Value,
    pub localized: BTreeMap<Locale, Value>,
}

/// Project a bundle into its output documents, applying the key casing to
/// every key of every document.
pub fn project_bundle(
    bundle: &ResourceBundle,
    format: OutputFormat,
    casing: KeyCasing,
) -> JsonResources {
    let base_values = convert_values(bundle.base_values(), casing);
    let base = format.base_document(base_values, bundle.locales());

    let localized = bundle
        .localized()
        .iter()
        .map(|(locale, values)| {
            (
                locale.clone(),
                Value::Object(convert_values(values, casing)),
            )
        })
        .collect();

    JsonResources { base, localized }
}

fn convert_values(values: &ValueMap, casing: KeyCasing) -> Map<String, Value> {
    values
        .iter()
        .map(|(key, value)| (casing.apply(key), Value::String(value.clone())))
        .collect()
}
