//! Route definitions for the share resolver.
//!
//! ## Routes
//!
//! - `GET /` - Landing page
//! - `GET /health` - Health check (JSON)
//! - `GET /robots.txt` - Crawler instructions
//! - `GET /s/{code}` - Share link resolution (token in path)
//! - `GET /s` - Share link resolution (token in `code` query parameter)

mod health;
mod home;
mod share;

use axum::Router;
use axum::response::IntoResponse;
use axum::routing::get;

use crate::state::AppState;

/// Build the complete share resolver router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(home::home_page))
        .route("/health", get(health::health_check))
        .route("/robots.txt", get(robots_txt))
        .route("/s", get(share::share_by_query))
        .route("/s/{code}", get(share::share_by_path))
        .with_state(state)
}

/// Serve robots.txt allowing all crawlers.
///
/// Preview agents must be able to fetch share links to build their cards;
/// the responses themselves carry `X-Robots-Tag: noindex` to stay out of
/// search indexes.
async fn robots_txt() -> impl IntoResponse {
    (
        [("content-type", "text/plain; charset=utf-8")],
        "User-agent: *\nAllow: /\n",
    )
}
