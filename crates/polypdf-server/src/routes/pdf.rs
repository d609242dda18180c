use std::convert::Infallible;
use std::sync::Arc;

use axum::Extension;
use axum::body::Body;
use axum::extract::State;
use axum::http::{HeaderValue, StatusCode};
use axum::http::header::{CONTENT_DISPOSITION, CONTENT_LANGUAGE, CONTENT_TYPE};
use axum::response::Response;
use futures_util::stream;

use polypdf_core::app_data;
use polypdf_core::context;
use polypdf_core::locale::ResolvedLocale;
use polypdf_export::chunks::pdf_chunks;

use crate::config::ResponseMode;
use crate::error::ApiError;
use crate::state::AppState;

pub const PDF_CONTENT_TYPE: &str = "application/pdf";

/// Render the configured template in the request's locale and return it as a PDF.
pub async fn generate_pdf(
    State(state): State<AppState>,
    Extension(locale): Extension<ResolvedLocale>,
) -> Result<Response, ApiError> {
    let context = context::build(&locale.translations, &app_data::generate_pdf())?;

    let pipeline = Arc::clone(&state.pipeline);
    let template = Arc::clone(&state.template);
    let pdf = tokio::task::spawn_blocking(move || pipeline.render(&template, &context))
        .await
        .map_err(|e| ApiError::Internal(format!("render task failed: {e}")))??;

    tracing::debug!(locale = %locale.code, bytes = pdf.len(), "pdf generated");

    let body = match state.response_mode {
        ResponseMode::Buffered => Body::from(pdf),
        ResponseMode::Streamed => Body::from_stream(stream::iter(
            pdf_chunks(pdf, state.bom).map(Ok::<_, Infallible>),
        )),
    };

    let mut builder = Response::builder()
        .status(StatusCode::OK)
        .header(CONTENT_TYPE, PDF_CONTENT_TYPE)
        .header(CONTENT_DISPOSITION, "inline; filename=\"document.pdf\"");
    match HeaderValue::from_str(&locale.code) {
        Ok(value) => builder = builder.header(CONTENT_LANGUAGE, value),
        Err(_) => tracing::warn!(
            locale = %locale.code,
            "locale is not a valid header value, omitting content-language"
        ),
    }

    builder
        .body(body)
        .map_err(|e| ApiError::Internal(format!("failed to build response: {e}")))
}
