//! File-system and value bundles grouped by base name.
//!
//! A bundle is the set of resource files sharing one base name: the base
//! (non-localized) file plus its culture-specific siblings
//! (`Messages.resx` + `Messages.ru.resx` + `Messages.es.resx`).
//! [`FileBundle`] describes the files on disk; [`ResourceBundle`] holds the
//! extracted values.

use std::collections::BTreeMap;
use std::path::PathBuf;

use indexmap::IndexMap;

use crate::locale::Locale;

/// Ordered key/value set extracted from one or more resource files.
pub type ValueMap = IndexMap<String, String>;

/// Descriptor for the files of one bundle before any content is read.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileBundle {
    /// Name without extension of the base resource file.
    pub base_name: String,

    /// Path of the base resource file, if one was discovered.
    pub base_file: Option<PathBuf>,

    locale_files: BTreeMap<Locale, PathBuf>,
}

impl FileBundle {
    pub fn new(base_name: impl Into<String>) -> Self {
        FileBundle {
            base_name: base_name.into(),
            base_file: None,
            locale_files: BTreeMap::new(),
        }
    }

    /// Register a culture-specific sibling file. A later registration for the
    /// same locale replaces the earlier path.
    pub fn add_locale_file(&mut self, locale: Locale, path: PathBuf) {
        self.locale_files.insert(locale, path);
    }

    /// Culture-specific sibling files, keyed by locale in stable order.
    pub fn locale_files(&self) -> &BTreeMap<Locale, PathBuf> {
        &self.locale_files
    }

    /// A bundle without a base file is invalid and must not produce output.
    pub fn has_base_file(&self) -> bool {
        self.base_file.is_some()
    }
}

/// In-memory values of one bundle: the base (invariant) key/value set plus
/// one set per locale.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResourceBundle {
    base_name: String,
    base: ValueMap,
    localized: BTreeMap<Locale, ValueMap>,
}

impl ResourceBundle {
    pub fn new(base_name: impl Into<String>) -> Self {
        ResourceBundle {
            base_name: base_name.into(),
            base: ValueMap::new(),
            localized: BTreeMap::new(),
        }
    }

    /// Base name of the bundle (usually the base name of the resx files it
    /// was created from).
    pub fn base_name(&self) -> &str {
        &self.base_name
    }

    /// The base (non-localized) key/value set.
    pub fn base_values(&self) -> &ValueMap {
        &self.base
    }

    /// All locale-specific value sets, keyed by locale in stable order.
    pub fn localized(&self) -> &BTreeMap<Locale, ValueMap> {
        &self.localized
    }

    /// Value set for one locale, if present.
    pub fn values(&self, locale: &Locale) -> Option<&ValueMap> {
        self.localized.get(locale)
    }

    /// Locales present in the bundle (not counting the base set).
    pub fn locales(&self) -> impl Iterator<Item = &Locale> {
        self.localized.keys()
    }

    /// Append values into the base set (`locale` = `None`) or a locale's set.
    /// Keys already present in the target set are overwritten.
    pub fn add_values(&mut self, locale: Option<&Locale>, values: ValueMap) {
        let slot = match locale {
            None => &mut self.base,
            Some(locale) => self.localized.entry(locale.clone()).or_default(),
        };
        slot.extend(values);
    }

    /// Merge another bundle into this one, locale by locale. Sets absent here
    /// are created; per key, the other bundle's value wins.
    pub fn merge_with(&mut self, other: &ResourceBundle) {
        self.base
            .extend(other.base.iter().map(|(k, v)| (k.clone(), v.clone())));
        for (locale, values) in &other.localized {
            self.localized
                .entry(locale.clone())
                .or_default()
                .extend(values.iter().map(|(k, v)| (k.clone(), v.clone())));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locale::KnownLocales;

    fn locale(name: &str) -> Locale {
        KnownLocales::new().resolve(name).unwrap()
    }

    fn values(pairs: &[(&str, &str)]) -> ValueMap {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_add_values_overwrites_existing_keys() {
        let mut bundle = ResourceBundle::new("Messages");
        bundle.add_values(None, values(&[("A", "1"), ("B", "2")]));
        bundle.add_values(None, values(&[("A", "3")]));
        assert_eq!(bundle.base_values().get("A").unwrap(), "3");
        assert_eq!(bundle.base_values().get("B").unwrap(), "2");
    }

    #[test]
    fn test_add_values_creates_locale_slot() {
        let mut bundle = ResourceBundle::new("Messages");
        let fr = locale("fr");
        bundle.add_values(Some(&fr), values(&[("A", "2")]));
        assert_eq!(bundle.values(&fr).unwrap().get("A").unwrap(), "2");
        assert_eq!(bundle.locales().count(), 1);
    }

    #[test]
    fn test_merge_is_last_writer_wins_per_key() {
        let fr = locale("fr");

        let mut a = ResourceBundle::new("merged");
        let mut b = ResourceBundle::new("B");
        b.add_values(None, values(&[("K", "from-b")]));
        b.add_values(Some(&fr), values(&[("K", "fr-b")]));
        let mut c = ResourceBundle::new("C");
        c.add_values(None, values(&[("K", "from-c"), ("Only", "c")]));

        a.merge_with(&b);
        a.merge_with(&c);

        assert_eq!(a.base_values().get("K").unwrap(), "from-c");
        assert_eq!(a.base_values().get("Only").unwrap(), "c");
        assert_eq!(a.values(&fr).unwrap().get("K").unwrap(), "fr-b");
    }

    #[test]
    fn test_merge_creates_absent_locale_sets() {
        let de = locale("de");
        let mut a = ResourceBundle::new("A");
        let mut b = ResourceBundle::new("B");
        b.add_values(Some(&de), values(&[("X", "y")]));
        a.merge_with(&b);
        assert_eq!(a.values(&de).unwrap().get("X").unwrap(), "y");
    }

    #[test]
    fn test_file_bundle_validity() {
        let mut bundle = FileBundle::new("Messages");
        bundle.add_locale_file(locale("fr"), PathBuf::from("Messages.fr.resx"));
        assert!(!bundle.has_base_file());
        bundle.base_file = Some(PathBuf::from("Messages.resx"));
        assert!(bundle.has_base_file());
    }
}
