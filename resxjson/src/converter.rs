//! The end-to-end conversion pipeline: discover, assemble, project, write.

use std::collections::BTreeMap;
use std::path::Path;

use serde_json::Value;

use crate::{
    bundle::ResourceBundle,
    discover,
    locale::KnownLocales,
    log::ConverterLog,
    options::ConverterOptions,
    projector, writer,
};

/// Run a full conversion.
///
/// Every problem surfaces through the returned log; per-item failures reduce
/// the output set but never terminate the run.
///
/// # Example
///
/// ```rust,no_run
/// use resxjson::{ConverterOptions, convert};
///
/// let mut options = ConverterOptions::default();
/// options.inputs.push("./resources".into());
/// options.output_folder = Some("./dist/locales".into());
/// let log = convert(&options);
/// for item in &log {
///     println!("[{}] {}", item.severity, item.message);
/// }
/// ```
pub fn convert(options: &ConverterOptions) -> ConverterLog {
    let mut log = ConverterLog::new();
    let locales = KnownLocales::new();
    convert_with_registry(options, &locales, &mut log);
    log
}

/// Like [`convert`], with an injected locale registry and log, for callers
/// that restrict the recognized cultures or interleave their own messages.
pub fn convert_with_registry(
    options: &ConverterOptions,
    locales: &KnownLocales,
    log: &mut ConverterLog,
) {
    let files = discover::collect_input_files(options);
    let file_bundles = discover::group_files(&files, locales, log);
    let mut bundles = discover::read_bundles(file_bundles, log);

    if bundles.is_empty() {
        log.warning("no resx files were found");
        return;
    }
    log.trace(format!("found {} resx bundle(s)", bundles.len()));

    if bundles.len() > 1 && options.output_file.is_some() {
        bundles = merge_into_single_bundle(bundles, options, log);
    }

    for bundle in bundles.values() {
        let json = projector::project_bundle(bundle, options.output_format, options.casing);
        let (base_dir, file_name) = writer::output_location(bundle.base_name(), options);
        log.trace(format!(
            "processing bundle '{}' ({} locale(s))",
            bundle.base_name(),
            json.localized.len()
        ));

        let base_document_dir = options
            .output_format
            .base_document_dir(&base_dir, &options.fallback_culture);
        write_document(&base_document_dir.join(&file_name), &json.base, options, log);

        for (locale, document) in &json.localized {
            let path = base_dir.join(locale.name()).join(&file_name);
            write_document(&path, document, options, log);
        }
    }
}

fn write_document(
    path: &Path,
    document: &Value,
    options: &ConverterOptions,
    log: &mut ConverterLog,
) {
    match options.output_format.render(document) {
        Ok(text) => writer::write_output(path, &text, options.overwrite, log),
        Err(e) => log.error(format!(
            "could not serialize the document for '{}': {}",
            path.display(),
            e
        )),
    }
}

/// When one output file was requested, every discovered bundle is merged into
/// a single bundle named after that file; per key and locale, the bundle
/// merged last wins.
fn merge_into_single_bundle(
    bundles: BTreeMap<String, ResourceBundle>,
    options: &ConverterOptions,
    log: &mut ConverterLog,
) -> BTreeMap<String, ResourceBundle> {
    let base_name = options
        .output_file
        .as_ref()
        .and_then(|path| path.file_stem())
        .and_then(|stem| stem.to_str())
        .unwrap_or("resources")
        .to_string();

    let mut merged = ResourceBundle::new(&base_name);
    for bundle in bundles.values() {
        merged.merge_with(bundle);
    }
    log.trace(format!(
        "merged {} bundles into '{}' because a single output file was requested",
        bundles.len(),
        base_name
    ));
    BTreeMap::from([(base_name, merged)])
}
