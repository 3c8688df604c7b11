//! Response-wide caching and robots policy.
//!
//! Every response this service emits depends on the requesting client's
//! class, so nothing may be stored by a browser or intermediate cache,
//! and nothing may land in a search index. These headers ride on both
//! terminal states and on error responses.

use axum::http::{HeaderName, HeaderValue, header};
use axum::response::Response;

/// Cache-Control value forbidding storage anywhere.
pub const NO_STORE: &str = "no-store, no-cache, must-revalidate";

/// Robots directive keeping responses out of search indexes.
pub const NOINDEX: &str = "noindex";

/// Header carrying the robots directive.
pub const X_ROBOTS_TAG: HeaderName = HeaderName::from_static("x-robots-tag");

/// Stamp the policy headers onto a response.
pub fn apply(mut response: Response) -> Response {
    let headers = response.headers_mut();
    headers.insert(header::CACHE_CONTROL, HeaderValue::from_static(NO_STORE));
    headers.insert(header::VARY, HeaderValue::from_static("User-Agent"));
    headers.insert(X_ROBOTS_TAG, HeaderValue::from_static(NOINDEX));
    response
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::response::IntoResponse;

    #[test]
    fn apply_sets_all_policy_headers() {
        let response = apply("hello".into_response());
        let headers = response.headers();
        assert_eq!(
            headers.get(header::CACHE_CONTROL).unwrap(),
            "no-store, no-cache, must-revalidate"
        );
        assert_eq!(headers.get(header::VARY).unwrap(), "User-Agent");
        assert_eq!(headers.get("x-robots-tag").unwrap(), "noindex");
    }

    #[test]
    fn apply_overrides_existing_cache_header() {
        let response = (
            [(header::CACHE_CONTROL, "public, max-age=3600")],
            "cached",
        )
            .into_response();
        let response = apply(response);
        assert_eq!(
            response.headers().get(header::CACHE_CONTROL).unwrap(),
            "no-store, no-cache, must-revalidate"
        );
    }
}
