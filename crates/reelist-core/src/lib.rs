//! Core types and the share-token codec for the Reelist sharing surface.
//!
//! This crate provides:
//! - The share-token codec (base64url + zlib-deflate + JSON)
//! - The [`PlaylistSummary`] type and its defensive projection from decoded payloads
//! - Shared error types
//!
//! Tokens are minted by the application tier when a user shares a playlist
//! and consumed by the share resolver. The wire format is load-bearing for
//! every link already in the wild and must not change:
//!
//! ```text
//! base64url(zlib(utf8(JSON {"v": 2, "p": {"id", "name", "desc", "thumb", "cat", "count" | "vids"}})))
//! ```

mod error;
mod summary;
mod token;

// ═══════════════════════════════════════════════════════════════════════════
// Constants
// ═══════════════════════════════════════════════════════════════════════════

/// Schema version every share payload must carry in its `v` field.
pub const SCHEMA_VERSION: u64 = 2;

/// Hard ceiling on the decompressed payload size.
/// Tokens come straight from URLs, so the inflater must never be allowed
/// to run unbounded on attacker-supplied input.
pub const MAX_DECODED_BYTES: usize = 64 * 1024;

/// Display name used when a payload carries none.
pub const DEFAULT_NAME: &str = "Shared Playlist";

/// Category label used when a payload carries none.
pub const DEFAULT_CATEGORY: &str = "Mixed";

pub use error::{Error, Result};
pub use summary::PlaylistSummary;
pub use token::{decode, encode_document, try_decode};
