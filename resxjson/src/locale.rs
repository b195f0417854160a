//! Locale token resolution against a registry of known culture identifiers.
//!
//! File name suffixes (`Messages.fr.resx`, `Messages.en-US.resx`) are only
//! treated as culture markers when they resolve against a [`KnownLocales`]
//! registry. Resolution is total: a token either resolves to exactly one
//! locale or to none, in which case the dot is part of the base name.

use std::collections::HashSet;
use std::fmt::{self, Display};

use serde::Serialize;
use unic_langid::LanguageIdentifier;

/// A recognized culture identifier in canonical form (`fr`, `en-US`, ...).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Locale(String);

impl Locale {
    /// The canonical culture name, e.g. `en-US`.
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for Locale {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Immutable lookup service over the set of culture names the converter
/// recognizes.
///
/// The converter injects one registry into discovery instead of consulting
/// global state, so tests can swap in a restricted table via
/// [`KnownLocales::from_names`].
#[derive(Debug, Clone)]
pub struct KnownLocales {
    names: HashSet<String>,
}

impl KnownLocales {
    /// Registry over the full built-in table of known culture names.
    pub fn new() -> Self {
        Self::from_names(KNOWN_CULTURE_NAMES.iter().copied())
    }

    /// Registry over an explicit set of culture names, taken verbatim.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        KnownLocales {
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    /// Resolve a file name suffix token to a locale, or `None` when the token
    /// is not a known culture.
    ///
    /// Tokens are canonicalized through [`LanguageIdentifier`] first, so
    /// `en-us` and `en-US` resolve to the same locale; tokens that are not
    /// well-formed language identifiers (`v2`, `Designer`) never resolve.
    pub fn resolve(&self, token: &str) -> Option<Locale> {
        let id: LanguageIdentifier = token.parse().ok()?;
        let name = id.to_string();
        self.names.contains(&name).then_some(Locale(name))
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl Default for KnownLocales {
    fn default() -> Self {
        KnownLocales::new()
    }
}

/// The built-in culture table: neutral languages plus the language-region
/// pairs commonly produced by .NET resource tooling.
static KNOWN_CULTURE_NAMES: &[&str] = &[
    // neutral languages
    "af", "am", "ar", "as", "az", "be", "bg", "bn", "bo", "br", "bs", "ca", "cs", "cy", "da",
    "de", "dv", "el", "en", "eo", "es", "et", "eu", "fa", "fi", "fil", "fo", "fr", "fy", "ga",
    "gd", "gl", "gu", "ha", "he", "hi", "hr", "hu", "hy", "id", "ig", "is", "it", "ja", "ka",
    "kk", "km", "kn", "ko", "kok", "ku", "ky", "lb", "lo", "lt", "lv", "mi", "mk", "ml", "mn",
    "mr", "ms", "mt", "my", "nb", "ne", "nl", "nn", "no", "oc", "om", "or", "pa", "pl", "ps",
    "pt", "rm", "ro", "ru", "rw", "sa", "sd", "se", "si", "sk", "sl", "so", "sq", "sr", "sv",
    "sw", "syr", "ta", "te", "tg", "th", "ti", "tk", "tn", "tr", "tt", "ug", "uk", "ur", "uz",
    "vi", "wo", "xh", "yo", "zh", "zu",
    // language-region pairs
    "af-ZA", "am-ET", "ar-AE", "ar-BH", "ar-DZ", "ar-EG", "ar-IQ", "ar-JO", "ar-KW", "ar-LB",
    "ar-LY", "ar-MA", "ar-OM", "ar-QA", "ar-SA", "ar-SY", "ar-TN", "ar-YE", "az-AZ", "be-BY",
    "bg-BG", "bn-BD", "bn-IN", "bo-CN", "br-FR", "bs-BA", "ca-ES", "cs-CZ", "cy-GB", "da-DK",
    "de-AT", "de-CH", "de-DE", "de-LI", "de-LU", "dv-MV", "el-GR", "en-AU", "en-BZ", "en-CA",
    "en-GB", "en-IE", "en-IN", "en-JM", "en-MY", "en-NZ", "en-PH", "en-SG", "en-TT", "en-US",
    "en-ZA", "en-ZW", "es-AR", "es-BO", "es-CL", "es-CO", "es-CR", "es-DO", "es-EC", "es-ES",
    "es-GT", "es-HN", "es-MX", "es-NI", "es-PA", "es-PE", "es-PR", "es-PY", "es-SV", "es-US",
    "es-UY", "es-VE", "et-EE", "eu-ES", "fa-IR", "fi-FI", "fil-PH", "fo-FO", "fr-BE", "fr-CA",
    "fr-CH", "fr-FR", "fr-LU", "fr-MC", "fy-NL", "ga-IE", "gd-GB", "gl-ES", "gu-IN", "ha-NG",
    "he-IL", "hi-IN", "hr-BA", "hr-HR", "hu-HU", "hy-AM", "id-ID", "ig-NG", "is-IS", "it-CH",
    "it-IT", "ja-JP", "ka-GE", "kk-KZ", "km-KH", "kn-IN", "ko-KR", "kok-IN", "ky-KG", "lb-LU",
    "lo-LA", "lt-LT", "lv-LV", "mi-NZ", "mk-MK", "ml-IN", "mn-MN", "mr-IN", "ms-BN", "ms-MY",
    "mt-MT", "my-MM", "nb-NO", "ne-NP", "nl-BE", "nl-NL", "nn-NO", "or-IN", "pa-IN", "pl-PL",
    "ps-AF", "pt-BR", "pt-PT", "rm-CH", "ro-RO", "ru-RU", "rw-RW", "sa-IN", "sd-PK", "se-FI",
    "se-NO", "se-SE", "si-LK", "sk-SK", "sl-SI", "so-SO", "sq-AL", "sr-BA", "sr-RS", "sv-FI",
    "sv-SE", "sw-KE", "syr-SY", "ta-IN", "ta-LK", "te-IN", "tg-TJ", "th-TH", "ti-ET", "tk-TM",
    "tn-ZA", "tr-TR", "tt-RU", "ug-CN", "uk-UA", "ur-IN", "ur-PK", "uz-UZ", "vi-VN", "wo-SN",
    "xh-ZA", "yo-NG", "zh-CN", "zh-HK", "zh-MO", "zh-SG", "zh-TW", "zu-ZA",
    // script variants used by Chinese and Serbian resources
    "zh-Hans", "zh-Hant", "sr-Latn", "sr-Cyrl", "uz-Latn", "uz-Cyrl",
];
