//! Playlist summary projection from decoded share payloads.
//!
//! Payloads parse to a generic `serde_json::Value` first; projection into
//! the fixed [`PlaylistSummary`] shape happens field-by-field with explicit
//! presence and type checks. Field types in the wire document are never
//! trusted directly: a payload that puts a number where a string belongs
//! simply falls back to the default for that field.

use serde_json::Value;

use crate::error::{Error, Result};
use crate::{DEFAULT_CATEGORY, DEFAULT_NAME, SCHEMA_VERSION};

/// The subset of a shared playlist needed to render a social preview.
///
/// Either fully resolved (every default applied) or absent entirely;
/// a decode failure never produces a partially-valid summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaylistSummary {
    /// Opaque playlist identifier, when the payload carries one.
    pub id: Option<String>,
    /// Display name, [`DEFAULT_NAME`] when absent or empty.
    pub name: String,
    /// Free-text description, empty when absent.
    pub description: String,
    /// Opaque preview-image reference, empty when absent.
    pub thumbnail: String,
    /// Category label, [`DEFAULT_CATEGORY`] when absent.
    pub category: String,
    /// Number of items in the playlist.
    pub item_count: u64,
}

impl PlaylistSummary {
    /// Project a decoded share document into a summary.
    ///
    /// The document must carry `v == 2` and a `p` object; every playlist
    /// field inside `p` is optional. `count` wins over the length of the
    /// `vids` array when both are present.
    pub fn from_document(doc: &Value) -> Result<Self> {
        let version = doc.get("v").and_then(Value::as_u64);
        if version != Some(SCHEMA_VERSION) {
            return Err(Error::SchemaVersion {
                expected: SCHEMA_VERSION,
                found: version,
            });
        }

        let playlist = doc
            .get("p")
            .and_then(Value::as_object)
            .ok_or(Error::MissingPlaylist)?;

        let string_field = |key: &str| {
            playlist
                .get(key)
                .and_then(Value::as_str)
                .map(str::to_string)
        };

        let name = string_field("name")
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_NAME.to_string());

        let category = string_field("cat")
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_CATEGORY.to_string());

        let item_count = playlist
            .get("count")
            .and_then(Value::as_u64)
            .or_else(|| {
                playlist
                    .get("vids")
                    .and_then(Value::as_array)
                    .map(|vids| vids.len() as u64)
            })
            .unwrap_or(0);

        Ok(Self {
            id: string_field("id"),
            name,
            description: string_field("desc").unwrap_or_default(),
            thumbnail: string_field("thumb").unwrap_or_default(),
            category,
            item_count,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn full_payload_projects_all_fields() {
        let doc = json!({
            "v": 2,
            "p": {
                "id": "abc",
                "name": "My Picks",
                "desc": "Hand-picked favorites",
                "thumb": "https://img.example/t.jpg",
                "cat": "Music",
                "count": 5
            }
        });
        let summary = PlaylistSummary::from_document(&doc).unwrap();
        assert_eq!(summary.id.as_deref(), Some("abc"));
        assert_eq!(summary.name, "My Picks");
        assert_eq!(summary.description, "Hand-picked favorites");
        assert_eq!(summary.thumbnail, "https://img.example/t.jpg");
        assert_eq!(summary.category, "Music");
        assert_eq!(summary.item_count, 5);
    }

    #[test]
    fn empty_playlist_object_gets_defaults() {
        let doc = json!({"v": 2, "p": {}});
        let summary = PlaylistSummary::from_document(&doc).unwrap();
        assert_eq!(summary.id, None);
        assert_eq!(summary.name, DEFAULT_NAME);
        assert_eq!(summary.description, "");
        assert_eq!(summary.thumbnail, "");
        assert_eq!(summary.category, DEFAULT_CATEGORY);
        assert_eq!(summary.item_count, 0);
    }

    #[test]
    fn empty_name_falls_back_to_default() {
        let doc = json!({"v": 2, "p": {"name": ""}});
        let summary = PlaylistSummary::from_document(&doc).unwrap();
        assert_eq!(summary.name, DEFAULT_NAME);
    }

    #[test]
    fn non_string_name_falls_back_to_default() {
        let doc = json!({"v": 2, "p": {"name": 42}});
        let summary = PlaylistSummary::from_document(&doc).unwrap();
        assert_eq!(summary.name, DEFAULT_NAME);
    }

    #[test]
    fn count_wins_over_vids_length() {
        let doc = json!({"v": 2, "p": {"count": 9, "vids": ["a", "b"]}});
        let summary = PlaylistSummary::from_document(&doc).unwrap();
        assert_eq!(summary.item_count, 9);
    }

    #[test]
    fn vids_length_used_when_count_absent() {
        let doc = json!({"v": 2, "p": {"vids": ["a", "b", "c"]}});
        let summary = PlaylistSummary::from_document(&doc).unwrap();
        assert_eq!(summary.item_count, 3);
    }

    #[test]
    fn negative_count_ignored() {
        let doc = json!({"v": 2, "p": {"count": -3, "vids": ["a"]}});
        let summary = PlaylistSummary::from_document(&doc).unwrap();
        assert_eq!(summary.item_count, 1);
    }

    #[test]
    fn wrong_version_rejected() {
        let doc = json!({"v": 1, "p": {}});
        let err = PlaylistSummary::from_document(&doc).unwrap_err();
        assert!(matches!(
            err,
            Error::SchemaVersion {
                expected: 2,
                found: Some(1)
            }
        ));
    }

    #[test]
    fn missing_version_rejected() {
        let doc = json!({"p": {}});
        let err = PlaylistSummary::from_document(&doc).unwrap_err();
        assert!(matches!(err, Error::SchemaVersion { found: None, .. }));
    }

    #[test]
    fn string_version_rejected() {
        // "2" is not 2; the version must be a number
        let doc = json!({"v": "2", "p": {}});
        let err = PlaylistSummary::from_document(&doc).unwrap_err();
        assert!(matches!(err, Error::SchemaVersion { found: None, .. }));
    }

    #[test]
    fn missing_playlist_rejected() {
        let doc = json!({"v": 2});
        let err = PlaylistSummary::from_document(&doc).unwrap_err();
        assert!(matches!(err, Error::MissingPlaylist));
    }

    #[test]
    fn non_object_playlist_rejected() {
        let doc = json!({"v": 2, "p": [1, 2, 3]});
        let err = PlaylistSummary::from_document(&doc).unwrap_err();
        assert!(matches!(err, Error::MissingPlaylist));
    }
}
