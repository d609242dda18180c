//! polypdf-core
//!
//! Translation catalog, locale resolution, and render-context building.
//! No HTTP or rendering dependency; this is the pure vocabulary shared by
//! the export pipeline and the server.

pub mod app_data;
pub mod catalog;
pub mod context;
pub mod error;
pub mod locale;
