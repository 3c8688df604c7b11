//! Error types for the share-token codec.
//!
//! Every variant is a recoverable decode failure: tokens are user- and
//! attacker-supplied, and partial corruption (links truncated by chat
//! clients) is expected in production traffic. Consumers downgrade these
//! to a `None` summary rather than surfacing them.

use thiserror::Error;

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while decoding or encoding a share token.
#[derive(Error, Debug)]
pub enum Error {
    /// The token is not valid base64 after alphabet normalization.
    #[error("base64 decode error: {0}")]
    Base64(#[from] base64::DecodeError),

    /// The decoded bytes are not a valid zlib stream.
    #[error("decompression error: {0}")]
    Inflate(#[from] std::io::Error),

    /// The inflated payload is not valid UTF-8.
    #[error("payload is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    /// The payload text is not valid JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The payload's `v` field is missing or not the supported version.
    #[error("unsupported schema version: expected {expected}, found {found:?}")]
    SchemaVersion {
        /// The version this codec supports.
        expected: u64,
        /// The version the payload carried, if any.
        found: Option<u64>,
    },

    /// The payload has no `p` object to project a summary from.
    #[error("payload has no playlist object")]
    MissingPlaylist,

    /// The inflated payload exceeds the safety ceiling.
    #[error("decoded payload exceeds {limit} bytes")]
    Oversized {
        /// The ceiling that was exceeded.
        limit: usize,
    },
}
