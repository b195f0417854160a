use std::fs;
use std::path::Path;

use resxjson::{
    ConverterLog, ConverterOptions, KeyCasing, KnownLocales, OutputFormat, Severity, convert,
    convert_with_registry,
};
use serde_json::{Value, json};
use tempfile::TempDir;

fn write_resx(dir: &Path, name: &str, pairs: &[(&str, &str)]) {
    let mut body = String::from("<?xml version=\"1.0\" encoding=\"utf-8\"?>\n<root>\n");
    for (key, value) in pairs {
        body.push_str(&format!(
            "  <data name=\"{}\" xml:space=\"preserve\"><value>{}</value></data>\n",
            key, value
        ));
    }
    body.push_str("</root>\n");
    fs::write(dir.join(name), body).unwrap();
}

fn read_json(path: &Path) -> Value {
    serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
}

/// Unwrap `define(<json>);` and parse the payload.
fn read_amd_json(path: &Path) -> Value {
    let text = fs::read_to_string(path).unwrap();
    let inner = text
        .strip_prefix("define(")
        .and_then(|t| t.strip_suffix(");"))
        .expect("AMD module wrapper");
    serde_json::from_str(inner).unwrap()
}

#[test]
fn test_i18next_end_to_end() {
    let input = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();
    write_resx(input.path(), "Messages.resx", &[("Hello", "Hi")]);
    write_resx(input.path(), "Messages.fr.resx", &[("Hello", "Salut")]);

    let mut options = ConverterOptions::default();
    options.input_folders.push(input.path().to_path_buf());
    options.output_folder = Some(output.path().to_path_buf());
    options.output_format = OutputFormat::I18next;
    options.casing = KeyCasing::Lower;
    options.fallback_culture = "en".to_string();

    let log = convert(&options);
    assert!(!log.has_errors());

    assert_eq!(
        read_json(&output.path().join("en/messages.json")),
        json!({ "hello": "Hi" })
    );
    assert_eq!(
        read_json(&output.path().join("fr/messages.json")),
        json!({ "hello": "Salut" })
    );
}

#[test]
fn test_requirejs_end_to_end() {
    let input = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();
    write_resx(input.path(), "Messages.resx", &[("A", "1")]);
    write_resx(input.path(), "Messages.fr.resx", &[("A", "2")]);

    let mut options = ConverterOptions::default();
    options.input_folders.push(input.path().to_path_buf());
    options.output_folder = Some(output.path().to_path_buf());

    let log = convert(&options);
    assert!(!log.has_errors());

    assert_eq!(
        read_amd_json(&output.path().join("messages.js")),
        json!({ "root": { "A": "1" }, "fr": true })
    );
    assert_eq!(
        read_amd_json(&output.path().join("fr/messages.js")),
        json!({ "A": "2" })
    );
}

#[test]
fn test_orphaned_locale_files_produce_no_output() {
    let input = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();
    write_resx(input.path(), "Lost.fr.resx", &[("A", "1")]);
    write_resx(input.path(), "Lost.de.resx", &[("A", "2")]);

    let mut options = ConverterOptions::default();
    options.input_folders.push(input.path().to_path_buf());
    options.output_folder = Some(output.path().to_path_buf());

    let log = convert(&options);

    let errors: Vec<_> = log.items_with_severity(Severity::Error).collect();
    assert_eq!(errors.len(), 1);
    assert!(errors[0].message.contains("Lost.de.resx"));
    assert!(errors[0].message.contains("Lost.fr.resx"));
    assert!(fs::read_dir(output.path()).unwrap().next().is_none());
}

#[test]
fn test_multiple_bundles_merge_into_single_output_file() {
    let input = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();
    write_resx(
        input.path(),
        "Alpha.resx",
        &[("K", "a"), ("Shared", "alpha")],
    );
    write_resx(input.path(), "Beta.resx", &[("Shared", "beta")]);
    write_resx(input.path(), "Beta.fr.resx", &[("Shared", "beta-fr")]);

    let mut options = ConverterOptions::default();
    options.input_folders.push(input.path().to_path_buf());
    options.output_file = Some(output.path().join("resources.js"));

    let log = convert(&options);
    assert!(!log.has_errors());

    let base = read_amd_json(&output.path().join("resources.js"));
    assert_eq!(
        base,
        json!({ "root": { "K": "a", "Shared": "beta" }, "fr": true })
    );
    assert_eq!(
        read_amd_json(&output.path().join("fr/resources.js")),
        json!({ "Shared": "beta-fr" })
    );
}

#[test]
fn test_unrecognized_suffix_is_its_own_bundle() {
    let input = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();
    write_resx(input.path(), "Messages.resx", &[("A", "1")]);
    write_resx(input.path(), "Messages.v2.resx", &[("A", "2")]);

    let mut options = ConverterOptions::default();
    options.input_folders.push(input.path().to_path_buf());
    options.output_folder = Some(output.path().to_path_buf());

    let log = convert(&options);
    assert!(!log.has_errors());

    assert_eq!(
        read_amd_json(&output.path().join("messages.js")),
        json!({ "root": { "A": "1" } })
    );
    assert_eq!(
        read_amd_json(&output.path().join("messages.v2.js")),
        json!({ "root": { "A": "2" } })
    );
}

#[test]
fn test_no_inputs_is_a_warning_not_an_error() {
    let input = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();

    let mut options = ConverterOptions::default();
    options.input_folders.push(input.path().to_path_buf());
    options.output_folder = Some(output.path().to_path_buf());

    let log = convert(&options);
    assert!(!log.has_errors());
    let warnings: Vec<_> = log.items_with_severity(Severity::Warning).collect();
    assert_eq!(warnings.len(), 1);
    assert!(warnings[0].message.contains("no resx files"));
    assert!(fs::read_dir(output.path()).unwrap().next().is_none());
}

#[test]
fn test_restricted_registry_changes_classification() {
    let input = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();
    write_resx(input.path(), "Messages.resx", &[("A", "1")]);
    write_resx(input.path(), "Messages.fr.resx", &[("A", "2")]);
    write_resx(input.path(), "Messages.de.resx", &[("A", "3")]);

    let mut options = ConverterOptions::default();
    options.input_folders.push(input.path().to_path_buf());
    options.output_folder = Some(output.path().to_path_buf());

    // Only `fr` is a known culture here, so `Messages.de` becomes a bundle
    // of its own.
    let locales = KnownLocales::from_names(["fr"]);
    let mut log = ConverterLog::new();
    convert_with_registry(&options, &locales, &mut log);
    assert!(!log.has_errors());

    assert_eq!(
        read_amd_json(&output.path().join("messages.js")),
        json!({ "root": { "A": "1" }, "fr": true })
    );
    assert_eq!(
        read_amd_json(&output.path().join("messages.de.js")),
        json!({ "root": { "A": "3" } })
    );
}

#[test]
fn test_explicit_files_and_directory_inputs_merge_by_base_name() {
    let dir_a = TempDir::new().unwrap();
    let dir_b = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();
    write_resx(dir_a.path(), "Messages.resx", &[("A", "1")]);
    write_resx(dir_b.path(), "Messages.fr.resx", &[("A", "2")]);

    let mut options = ConverterOptions::default();
    options.input_folders.push(dir_a.path().to_path_buf());
    options
        .input_files
        .push(dir_b.path().join("Messages.fr.resx"));
    options.output_folder = Some(output.path().to_path_buf());

    let log = convert(&options);
    assert!(!log.has_errors());

    assert_eq!(
        read_amd_json(&output.path().join("messages.js")),
        json!({ "root": { "A": "1" }, "fr": true })
    );
}
