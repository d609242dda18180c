use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::Path;
use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::error::CatalogError;
use crate::locale::DEFAULT_LOCALE;

/// Flat key → string mapping for one locale.
pub type TranslationSet = BTreeMap<String, String>;

const LOCALE_FILE_EXTENSION: &str = "json";

/// Locale codes become the `Content-Language` header, so they are limited to
/// ASCII alphanumerics, `-` and `_`.
fn is_locale_code(stem: &str) -> bool {
    !stem.is_empty()
        && stem
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_')
}

/// All translation sets, keyed by locale code.
///
/// Built once before serving and never mutated afterwards; there is no
/// `&mut self` API, so concurrent readers need no locking.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    sets: BTreeMap<String, Arc<TranslationSet>>,
}

impl Catalog {
    /// Load every `<locale>.json` file in `dir`.
    ///
    /// The file stem is the locale code and the content must be a flat JSON
    /// object of strings. A missing directory yields an empty catalog; an
    /// unreadable or malformed file is an error. Files whose stem is not a
    /// usable locale code are skipped with a warning.
    pub fn load(dir: &Path) -> Result<Self, CatalogError> {
        let entries = match fs::read_dir(dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                warn!(dir = %dir.display(), "translation directory not found, catalog is empty");
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(CatalogError::ReadDir {
                    path: dir.to_path_buf(),
                    source,
                });
            }
        };

        let mut sets = BTreeMap::new();
        for entry in entries {
            let path = entry
                .map_err(|source| CatalogError::ReadDir {
                    path: dir.to_path_buf(),
                    source,
                })?
                .path();

            if !path.is_file()
                || path.extension().and_then(|ext| ext.to_str()) != Some(LOCALE_FILE_EXTENSION)
            {
                continue;
            }

            let Some(locale) = path.file_stem().and_then(|stem| stem.to_str()) else {
                warn!(path = %path.display(), "skipping translation file with non UTF-8 name");
                continue;
            };
            if !is_locale_code(locale) {
                warn!(path = %path.display(), "skipping translation file with invalid locale name");
                continue;
            }

            let contents = fs::read_to_string(&path).map_err(|source| CatalogError::ReadFile {
                path: path.clone(),
                source,
            })?;
            let set: TranslationSet =
                serde_json::from_str(&contents).map_err(|source| CatalogError::Malformed {
                    path: path.clone(),
                    source,
                })?;

            debug!(locale, keys = set.len(), path = %path.display(), "loaded translation file");
            sets.insert(locale.to_string(), Arc::new(set));
        }

        let catalog = Self { sets };
        catalog.warn_on_missing_keys();
        info!(
            dir = %dir.display(),
            locales = ?catalog.locales(),
            "translation catalog loaded"
        );
        Ok(catalog)
    }

    /// Build a catalog from in-memory translation sets.
    pub fn from_sets<I, S>(sets: I) -> Self
    where
        I: IntoIterator<Item = (S, TranslationSet)>,
        S: Into<String>,
    {
        Self {
            sets: sets
                .into_iter()
                .map(|(locale, set)| (locale.into(), Arc::new(set)))
                .collect(),
        }
    }

    pub fn get(&self, locale: &str) -> Option<&TranslationSet> {
        self.sets.get(locale).map(Arc::as_ref)
    }

    pub fn contains(&self, locale: &str) -> bool {
        self.sets.contains_key(locale)
    }

    /// Locale codes in sorted order.
    pub fn locales(&self) -> Vec<&str> {
        self.sets.keys().map(String::as_str).collect()
    }

    pub fn len(&self) -> usize {
        self.sets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }

    /// Stored locale key and a shared handle to its set.
    pub(crate) fn entry(&self, locale: &str) -> Option<(&str, &Arc<TranslationSet>)> {
        self.sets
            .get_key_value(locale)
            .map(|(code, set)| (code.as_str(), set))
    }

    /// Key sets across locales are not enforced to match; this only reports
    /// keys the default locale has and another locale lacks.
    fn warn_on_missing_keys(&self) {
        let Some(reference) = self.get(DEFAULT_LOCALE) else {
            if !self.is_empty() {
                warn!(default = DEFAULT_LOCALE, "default locale missing from catalog");
            }
            return;
        };

        for (locale, set) in &self.sets {
            let missing: Vec<&str> = reference
                .keys()
                .filter(|key| !set.contains_key(*key))
                .map(String::as_str)
                .collect();
            if !missing.is_empty() {
                warn!(locale = %locale, missing = ?missing, "locale is missing translation keys");
            }
        }
    }
}
