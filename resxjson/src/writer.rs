//! Output writing: directory layout, overwrite policy, and the final write.

use std::fs;
use std::path::{Path, PathBuf};

use crate::{
    log::ConverterLog,
    options::{ConverterOptions, OverwriteMode},
};

/// Base directory and file name shared by all documents of one bundle.
///
/// With an explicit output file every bundle uses that literal file name and
/// its directory; otherwise the bundle writes `<lowercased base name>.<ext>`
/// into the output folder (current directory when none was given).
pub fn output_location(bundle_name: &str, options: &ConverterOptions) -> (PathBuf, String) {
    if let Some(output_file) = &options.output_file {
        let file_name = output_file
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        let dir = match output_file.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        (dir, file_name)
    } else {
        let file_name = format!(
            "{}.{}",
            bundle_name.to_lowercase(),
            options.output_format.extension()
        );
        let dir = options
            .output_folder
            .clone()
            .unwrap_or_else(|| PathBuf::from("."));
        (dir, file_name)
    }
}

/// Write rendered content to `path`, creating parent directories first.
///
/// An existing writable file is overwritten unconditionally; an existing
/// read-only file is overwritten only under [`OverwriteMode::Force`], which
/// clears the read-only attribute. Every outcome is reported through the
/// log, and a failed write never aborts the run.
pub fn write_output(path: &Path, content: &str, overwrite: OverwriteMode, log: &mut ConverterLog) {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        if let Err(e) = fs::create_dir_all(parent) {
            log.error(format!(
                "could not create directory '{}': {}",
                parent.display(),
                e
            ));
            return;
        }
    }

    if let Ok(metadata) = fs::metadata(path) {
        if metadata.permissions().readonly() {
            match overwrite {
                OverwriteMode::Skip => {
                    log.error(format!(
                        "cannot overwrite read-only file '{}', skipping",
                        path.display()
                    ));
                    return;
                }
                OverwriteMode::Force => {
                    let mut permissions = metadata.permissions();
                    permissions.set_readonly(false);
                    if let Err(e) = fs::set_permissions(path, permissions) {
                        log.error(format!(
                            "could not clear the read-only attribute on '{}': {}",
                            path.display(),
                            e
                        ));
                        return;
                    }
                }
            }
        }
    }

    match fs::write(path, content) {
        Ok(()) => log.info(format!("created '{}'", path.display())),
        Err(e) => log.error(format!("could not write '{}': {}", path.display(), e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formats::OutputFormat;
    use crate::log::Severity;

    #[test]
    fn test_output_location_per_bundle() {
        let mut options = ConverterOptions::default();
        options.output_folder = Some(PathBuf::from("out"));
        let (dir, name) = output_location("Messages", &options);
        assert_eq!(dir, PathBuf::from("out"));
        assert_eq!(name, "messages.js");

        options.output_format = OutputFormat::I18next;
        let (_, name) = output_location("Messages", &options);
        assert_eq!(name, "messages.json");
    }

    #[test]
    fn test_output_location_with_explicit_file() {
        let mut options = ConverterOptions::default();
        options.output_file = Some(PathBuf::from("client/resources.js"));
        let (dir, name) = output_location("Whatever", &options);
        assert_eq!(dir, PathBuf::from("client"));
        assert_eq!(name, "resources.js");

        options.output_file = Some(PathBuf::from("resources.js"));
        let (dir, name) = output_location("Whatever", &options);
        assert_eq!(dir, PathBuf::from("."));
        assert_eq!(name, "resources.js");
    }

    #[test]
    fn test_write_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fr/messages.json");
        let mut log = ConverterLog::new();
        write_output(&path, "{}", OverwriteMode::Skip, &mut log);
        assert_eq!(fs::read_to_string(&path).unwrap(), "{}");
        assert!(!log.has_errors());
        assert_eq!(log.items_with_severity(Severity::Info).count(), 1);
    }

    #[test]
    fn test_writable_file_is_overwritten() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("messages.json");
        fs::write(&path, "old").unwrap();
        let mut log = ConverterLog::new();
        write_output(&path, "new", OverwriteMode::Skip, &mut log);
        assert_eq!(fs::read_to_string(&path).unwrap(), "new");
        assert!(!log.has_errors());
    }

    #[test]
    fn test_read_only_file_is_skipped_and_logged() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("messages.json");
        fs::write(&path, "old").unwrap();
        let mut permissions = fs::metadata(&path).unwrap().permissions();
        permissions.set_readonly(true);
        fs::set_permissions(&path, permissions).unwrap();

        let mut log = ConverterLog::new();
        write_output(&path, "new", OverwriteMode::Skip, &mut log);
        assert_eq!(fs::read_to_string(&path).unwrap(), "old");
        let errors: Vec<_> = log.items_with_severity(Severity::Error).collect();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].message.contains("messages.json"));
    }

    #[test]
    fn test_read_only_file_is_overwritten_under_force() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("messages.json");
        fs::write(&path, "old").unwrap();
        let mut permissions = fs::metadata(&path).unwrap().permissions();
        permissions.set_readonly(true);
        fs::set_permissions(&path, permissions).unwrap();

        let mut log = ConverterLog::new();
        write_output(&path, "new", OverwriteMode::Force, &mut log);
        assert_eq!(fs::read_to_string(&path).unwrap(), "new");
        assert!(!log.has_errors());
        assert!(!fs::metadata(&path).unwrap().permissions().readonly());
    }
}
