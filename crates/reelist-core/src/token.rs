//! Share-token encode/decode.
//!
//! A token is `base64url(zlib(utf8(json)))` with padding stripped. The
//! decode path has to survive whatever arrives in a URL: wrong alphabet,
//! truncation, garbage bytes, compression bombs. Every failure is a typed
//! [`Error`](crate::Error), and [`decode`] collapses them to `None` for
//! callers that only care whether a summary came out.

use std::io::{Read, Write};

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use flate2::Compression;
use flate2::read::ZlibDecoder;
use flate2::write::ZlibEncoder;

use crate::MAX_DECODED_BYTES;
use crate::error::{Error, Result};
use crate::summary::PlaylistSummary;

/// Decode a share token into a playlist summary.
///
/// Never panics; any malformed input yields `None`. Use [`try_decode`]
/// when the failure reason matters (e.g. for debug logging).
pub fn decode(token: &str) -> Option<PlaylistSummary> {
    try_decode(token).ok()
}

/// Decode a share token, reporting why it failed.
pub fn try_decode(token: &str) -> Result<PlaylistSummary> {
    let raw = STANDARD.decode(normalize_alphabet(token))?;
    let text = inflate_bounded(&raw)?;
    let doc: serde_json::Value = serde_json::from_str(&text)?;
    PlaylistSummary::from_document(&doc)
}

/// Encode a share document into a token.
///
/// This is the producer side of the wire format; the application tier
/// calls it when a user shares a playlist. The document is serialized,
/// deflated, and base64url-encoded with padding stripped.
pub fn encode_document(doc: &serde_json::Value) -> Result<String> {
    let json = serde_json::to_vec(doc)?;

    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(&json)?;
    let compressed = encoder.finish()?;

    let mut token = STANDARD.encode(&compressed);
    token.truncate(token.trim_end_matches('=').len());
    Ok(token.replace('+', "-").replace('/', "_"))
}

/// Map the URL-safe alphabet back to standard base64 and restore padding.
fn normalize_alphabet(token: &str) -> String {
    let mut normalized = token.replace('-', "+").replace('_', "/");
    while normalized.len() % 4 != 0 {
        normalized.push('=');
    }
    normalized
}

/// Inflate a zlib stream, refusing to produce more than [`MAX_DECODED_BYTES`].
fn inflate_bounded(raw: &[u8]) -> Result<String> {
    let mut inflater = ZlibDecoder::new(raw).take(MAX_DECODED_BYTES as u64 + 1);
    let mut buf = Vec::new();
    inflater.read_to_end(&mut buf)?;

    if buf.len() > MAX_DECODED_BYTES {
        return Err(Error::Oversized {
            limit: MAX_DECODED_BYTES,
        });
    }

    Ok(String::from_utf8(buf)?)
}
