//! Per-request locale resolution.

use std::sync::Arc;

use tracing::debug;

use crate::catalog::{Catalog, TranslationSet};
use crate::error::CoreError;

/// Locale substituted when the request names none, or one the catalog lacks.
pub const DEFAULT_LOCALE: &str = "en";

/// Outcome of resolving a request's language preference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedLocale {
    /// Catalog key actually used.
    pub code: String,
    pub translations: Arc<TranslationSet>,
    /// `true` when the default locale was substituted.
    pub fallback: bool,
}

/// Pick the translation set for an `accept-language` header value.
///
/// The trimmed value must be exactly a catalog key. Anything else, including
/// weighted lists and region tags the catalog lacks, falls back to
/// [`DEFAULT_LOCALE`]; if that is missing too the error is returned, with no
/// further fallback.
pub fn resolve(catalog: &Catalog, requested: Option<&str>) -> Result<ResolvedLocale, CoreError> {
    let requested = requested.map(str::trim).filter(|value| !value.is_empty());

    if let Some((code, translations)) = requested.and_then(|locale| catalog.entry(locale)) {
        return Ok(ResolvedLocale {
            code: code.to_string(),
            translations: Arc::clone(translations),
            fallback: false,
        });
    }

    debug!(
        requested = requested.unwrap_or_default(),
        default = DEFAULT_LOCALE,
        "requested locale not available, using default"
    );

    let (code, translations) = catalog
        .entry(DEFAULT_LOCALE)
        .ok_or_else(|| CoreError::LocaleNotFound(DEFAULT_LOCALE.to_string()))?;

    Ok(ResolvedLocale {
        code: code.to_string(),
        translations: Arc::clone(translations),
        fallback: true,
    })
}
