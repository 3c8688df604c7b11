//! Share-link resolution.
//!
//! Handles `GET /s/{code}` and `GET /s?code=...`. The handler:
//! 1. Extracts the token (path wins over query; no token at all is a 400)
//! 2. Attempts to decode it; failures degrade, they never error
//! 3. Classifies the requester by User-Agent
//! 4. Redirects humans to the canonical application route, or serves the
//!    preview document to automated agents
//! 5. Stamps the no-store/noindex policy headers on the way out

use axum::extract::{Path, Query, State};
use axum::http::{HeaderMap, header};
use axum::response::{IntoResponse, Redirect, Response};
use serde::Deserialize;

use crate::classify;
use crate::error::ShareError;
use crate::policy;
use crate::render;
use crate::state::AppState;

/// Query parameters accepted by the share routes.
#[derive(Debug, Deserialize)]
pub struct ShareQuery {
    /// Token fallback when the path carries none.
    pub code: Option<String>,
}

/// Handle `GET /s/{code}` (token in the path).
///
/// The path token wins even when a `code` query parameter is also present.
pub async fn share_by_path(
    State(state): State<AppState>,
    Path(code): Path<String>,
    headers: HeaderMap,
) -> Response {
    resolve(&state, &code, &headers)
}

/// Handle `GET /s?code=...` (token in the query).
pub async fn share_by_query(
    State(state): State<AppState>,
    Query(query): Query<ShareQuery>,
    headers: HeaderMap,
) -> Result<Response, ShareError> {
    let code = query.code.ok_or(ShareError::MissingToken)?;
    Ok(resolve(&state, &code, &headers))
}

/// Decode, classify, and compose the terminal response for a token.
fn resolve(state: &AppState, token: &str, headers: &HeaderMap) -> Response {
    let user_agent = headers
        .get(header::USER_AGENT)
        .and_then(|value| value.to_str().ok());

    // Decode is attempted on every request. A failed decode must never
    // block the redirect path, and the preview path falls back to the
    // generic card.
    let summary = match reelist_core::try_decode(token) {
        Ok(summary) => Some(summary),
        Err(err) => {
            tracing::debug!(error = %err, "share token failed to decode");
            None
        }
    };

    let canonical = canonical_route(&state.config.base_url, token);

    let response = if classify::is_preview_agent(user_agent) {
        render::playlist::render(summary.as_ref(), &canonical, &state.config).into_response()
    } else {
        Redirect::temporary(&canonical).into_response()
    };

    policy::apply(response)
}

/// Canonical in-app route for a share token: `<base_url>/p?s=<token>`.
///
/// The original token passes through untouched apart from
/// percent-encoding; the application performs its own decode.
fn canonical_route(base_url: &str, token: &str) -> String {
    format!("{base_url}/p?s={}", urlencoding::encode(token))
}
