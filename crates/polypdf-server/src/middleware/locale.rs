use axum::extract::{Request, State};
use axum::http::header::ACCEPT_LANGUAGE;
use axum::middleware::Next;
use axum::response::Response;

use polypdf_core::locale;

use crate::error::ApiError;
use crate::state::AppState;

/// Locale resolution middleware.
///
/// Reads `accept-language`, resolves it against the catalog and inserts the
/// [`locale::ResolvedLocale`] into request extensions for handlers to take
/// via `Extension`. A header that is not valid visible ASCII counts as absent.
pub async fn resolve_locale(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let requested = req
        .headers()
        .get(ACCEPT_LANGUAGE)
        .and_then(|v| v.to_str().ok());

    let resolved = locale::resolve(&state.catalog, requested)?;
    tracing::debug!(
        requested = requested.unwrap_or_default(),
        locale = %resolved.code,
        fallback = resolved.fallback,
        "locale resolved"
    );

    req.extensions_mut().insert(resolved);

    Ok(next.run(req).await)
}
