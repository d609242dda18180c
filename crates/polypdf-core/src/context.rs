use std::collections::BTreeMap;

use serde::Serialize;
use tracing::debug;

use crate::app_data::AppData;
use crate::catalog::TranslationSet;
use crate::error::CoreError;

/// Flat key → string mapping handed to the template engine.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RenderContext(BTreeMap<String, String>);

impl RenderContext {
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Merge a translation set with application data.
///
/// Fails with [`CoreError::KeyCollision`] (keys sorted) if any application
/// key is also a translation key; nothing is merged in that case.
pub fn build(
    translations: &TranslationSet,
    app_data: &AppData,
) -> Result<RenderContext, CoreError> {
    let collisions: Vec<String> = app_data
        .keys()
        .filter(|key| translations.contains_key(*key))
        .cloned()
        .collect();

    if !collisions.is_empty() {
        return Err(CoreError::KeyCollision { keys: collisions });
    }

    let merged: BTreeMap<String, String> = translations
        .iter()
        .chain(app_data.iter())
        .map(|(k, v)| (k.clone(), v.clone()))
        .collect();

    debug!(keys = ?merged.keys().collect::<Vec<_>>(), "render context built");
    Ok(RenderContext(merged))
}
