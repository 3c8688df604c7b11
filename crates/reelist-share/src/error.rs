//! Error types for the share resolver.
//!
//! Decode failures are deliberately not represented here: the codec
//! downgrades them to a generic preview or a plain redirect, because a
//! broken preview is worse than a generic one. The only client-visible
//! error is a request that carries no token at all.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::policy;

/// Share resolver error type.
#[derive(Debug, thiserror::Error)]
pub enum ShareError {
    /// Neither the path nor the `code` query parameter carried a token.
    #[error("missing share token")]
    MissingToken,
}

impl IntoResponse for ShareError {
    fn into_response(self) -> Response {
        let status = match self {
            Self::MissingToken => StatusCode::BAD_REQUEST,
        };

        // Plain text body; the policy headers apply to errors too.
        policy::apply((status, self.to_string()).into_response())
    }
}
