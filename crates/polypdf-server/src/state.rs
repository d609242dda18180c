use std::sync::Arc;

use polypdf_core::catalog::Catalog;
use polypdf_export::pipeline::PdfPipeline;

use crate::config::ResponseMode;

/// Shared application state, injected into all route handlers via Axum state.
///
/// Everything here is built before serving starts and only read afterwards.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub pipeline: Arc<PdfPipeline>,
    pub template: Arc<str>,
    pub response_mode: ResponseMode,
    pub bom: bool,
}
