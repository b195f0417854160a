//! Discovery and grouping of resource files into bundles.
//!
//! Explicit files and enumerated directories feed one candidate list that is
//! grouped in a single pass, so same-named bundles coming from different
//! inputs merge at the file level instead of replacing each other.

use std::collections::BTreeMap;
use std::path::PathBuf;

use walkdir::WalkDir;

use crate::{
    bundle::{FileBundle, ResourceBundle},
    formats::ResxFormat,
    locale::{KnownLocales, Locale},
    log::ConverterLog,
    options::ConverterOptions,
    traits::Parser,
};

/// File extension of the resource container files the converter consumes.
pub const RESOURCE_EXTENSION: &str = "resx";

/// Collect the candidate resource files for a run: explicit files are taken
/// as-is, each input directory is enumerated for `*.resx` files (recursively
/// when requested). Directories that do not exist are skipped.
pub fn collect_input_files(options: &ConverterOptions) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = Vec::new();
    let mut folders: Vec<PathBuf> = Vec::new();

    for input in &options.inputs {
        if input.is_dir() {
            folders.push(input.clone());
        } else {
            files.push(input.clone());
        }
    }
    files.extend(options.input_files.iter().cloned());
    folders.extend(options.input_folders.iter().cloned());

    for folder in &folders {
        if !folder.is_dir() {
            continue;
        }
        let walker = WalkDir::new(folder).sort_by_file_name();
        let walker = if options.recursive {
            walker
        } else {
            walker.max_depth(1)
        };
        for entry in walker.into_iter().filter_map(Result::ok) {
            let path = entry.path();
            let is_resource = path.extension().and_then(|s| s.to_str()) == Some(RESOURCE_EXTENSION);
            if entry.file_type().is_file() && is_resource {
                files.push(path.to_path_buf());
            }
        }
    }
    files
}

/// Split an extension-stripped file name into base name and locale suffix.
///
/// The suffix is everything after the FIRST dot. A suffix that does not
/// resolve against the registry leaves the dot as part of the base name, so
/// `Messages.v2` stays one base name while `Messages.fr` splits.
pub fn split_base_name(stem: &str, locales: &KnownLocales) -> (String, Option<Locale>) {
    match stem.split_once('.') {
        Some((base, suffix)) => match locales.resolve(suffix) {
            Some(locale) => (base.to_string(), Some(locale)),
            None => (stem.to_string(), None),
        },
        None => (stem.to_string(), None),
    }
}

/// Group candidate files into file bundles keyed by base name.
pub fn group_files(
    files: &[PathBuf],
    locales: &KnownLocales,
    log: &mut ConverterLog,
) -> BTreeMap<String, FileBundle> {
    let mut bundles: BTreeMap<String, FileBundle> = BTreeMap::new();

    for path in files {
        let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
            log.error(format!(
                "could not extract a base name from '{}', skipping",
                path.display()
            ));
            continue;
        };
        let (base_name, locale) = split_base_name(stem, locales);
        if base_name.is_empty() {
            log.error(format!(
                "could not extract a base name from '{}', skipping",
                path.display()
            ));
            continue;
        }

        let bundle = bundles
            .entry(base_name.clone())
            .or_insert_with(|| FileBundle::new(base_name));
        match locale {
            Some(locale) => bundle.add_locale_file(locale, path.clone()),
            None => bundle.base_file = Some(path.clone()),
        }
    }
    bundles
}

/// Read the grouped files into resource bundles.
///
/// A group without a base file is invalid: its locale files are named in an
/// error entry and the group contributes no output. An unreadable locale
/// file costs only that locale; an unreadable base file costs the bundle.
pub fn read_bundles(
    file_bundles: BTreeMap<String, FileBundle>,
    log: &mut ConverterLog,
) -> BTreeMap<String, ResourceBundle> {
    let mut bundles = BTreeMap::new();

    for (base_name, file_bundle) in file_bundles {
        let Some(base_file) = file_bundle.base_file.as_ref() else {
            let orphaned = file_bundle
                .locale_files()
                .values()
                .map(|path| path.display().to_string())
                .collect::<Vec<_>>()
                .join(", ");
            log.error(format!(
                "ignoring localized resources without a base resx file: {}",
                orphaned
            ));
            continue;
        };

        let mut bundle = ResourceBundle::new(&base_name);
        match ResxFormat::read_from(base_file) {
            Ok(format) => bundle.add_values(None, format.into_values()),
            Err(e) => {
                log.error(format!(
                    "could not read base file '{}': {}, skipping bundle '{}'",
                    base_file.display(),
                    e,
                    base_name
                ));
                continue;
            }
        }

        for (locale, path) in file_bundle.locale_files() {
            match ResxFormat::read_from(path) {
                Ok(format) => bundle.add_values(Some(locale), format.into_values()),
                Err(e) => log.error(format!(
                    "could not read '{}': {}, skipping",
                    path.display(),
                    e
                )),
            }
        }
        bundles.insert(base_name, bundle);
    }
    bundles
}
