//! Fixed application data merged into each render context.
//!
//! Pure functions, one per request type. Keys here must never appear in a
//! translation file; [`crate::context::build`] rejects any overlap.

use std::collections::BTreeMap;

pub type AppData = BTreeMap<String, String>;

/// Data points rendered by `GET /generate-pdf`.
pub fn generate_pdf() -> AppData {
    [
        ("data_point_1", "Testing 123"),
        ("data_point_2", "Testing 456"),
        ("data_point_3", "Testing 789"),
    ]
    .into_iter()
    .map(|(key, value)| (key.to_string(), value.to_string()))
    .collect()
}
