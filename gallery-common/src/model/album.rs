use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{base64_bytes, data_uri, Tag, User};

/// A named collection of photos
///
/// `id` is absent until the server has persisted the album. `creation_date`
/// is always set on persisted albums but may be missing on a draft.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Album {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    #[serde(default)]
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creation_date: Option<DateTime<Utc>>,

    /// User-supplied date that takes precedence over `creation_date` for display
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub override_date: Option<DateTime<Utc>>,

    #[serde(
        default,
        with = "base64_bytes",
        skip_serializing_if = "Option::is_none"
    )]
    pub thumbnail: Option<Vec<u8>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail_content_type: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keywords: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,

    #[serde(default, deserialize_with = "null_as_empty")]
    pub tags: Vec<Tag>,
}

impl Album {
    /// Create a draft album with the given name, created now
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            creation_date: Some(crate::time::now()),
            ..Default::default()
        }
    }

    /// Date used for display and date ordering: override date, else creation date
    pub fn effective_date(&self) -> Option<DateTime<Utc>> {
        self.override_date.or(self.creation_date)
    }

    /// Event label with surrounding whitespace removed, if non-blank
    pub fn trimmed_event(&self) -> Option<&str> {
        self.event
            .as_deref()
            .map(str::trim)
            .filter(|e| !e.is_empty())
    }

    pub fn has_event(&self) -> bool {
        self.trimmed_event().is_some()
    }

    /// `data:` URI for the inline thumbnail, when both bytes and type are present
    pub fn thumbnail_data_uri(&self) -> Option<String> {
        data_uri(
            self.thumbnail_content_type.as_deref(),
            self.thumbnail.as_deref(),
        )
    }

    /// Login of the owning user, if known
    pub fn owner_login(&self) -> Option<&str> {
        self.user.as_ref().and_then(|u| u.login.as_deref())
    }
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    #[test]
    fn test_deserialize_full_record() {
        let album: Album = serde_json::from_value(json!({
            "id": 7,
            "name": "Summer",
            "event": "Trip",
            "creationDate": "2024-06-01T10:00:00Z",
            "overrideDate": null,
            "thumbnail": "AQID",
            "thumbnailContentType": "image/png",
            "keywords": "beach sun",
            "user": { "id": 3, "login": "alice" },
            "tags": [{ "id": 1, "name": "holiday" }],
            "somethingNew": true
        }))
        .unwrap();

        assert_eq!(album.id, Some(7));
        assert_eq!(album.name, "Summer");
        assert_eq!(album.event.as_deref(), Some("Trip"));
        assert_eq!(
            album.creation_date,
            Some(Utc.with_ymd_and_hms(2024, 6, 1, 10, 0, 0).unwrap())
        );
        assert!(album.override_date.is_none());
        assert_eq!(album.thumbnail, Some(vec![1, 2, 3]));
        assert_eq!(album.owner_login(), Some("alice"));
        assert_eq!(album.tags, vec![Tag { id: Some(1), name: "holiday".into() }]);
    }

    #[test]
    fn test_null_tags_become_empty() {
        let album: Album = serde_json::from_value(json!({ "name": "A", "tags": null })).unwrap();
        assert!(album.tags.is_empty());
    }

    #[test]
    fn test_serialize_omits_absent_optionals() {
        let album = Album {
            name: "Draft".into(),
            ..Default::default()
        };
        let value = serde_json::to_value(&album).unwrap();
        assert_eq!(value, json!({ "name": "Draft", "tags": [] }));
    }

    #[test]
    fn test_thumbnail_serialized_as_base64() {
        let album = Album {
            name: "Pic".into(),
            thumbnail: Some(b"hello".to_vec()),
            thumbnail_content_type: Some("image/jpeg".into()),
            ..Default::default()
        };
        let value = serde_json::to_value(&album).unwrap();
        assert_eq!(value["thumbnail"], "aGVsbG8=");
        assert_eq!(
            album.thumbnail_data_uri().as_deref(),
            Some("data:image/jpeg;base64,aGVsbG8=")
        );
    }

    #[test]
    fn test_thumbnail_data_uri_requires_content_type() {
        let album = Album {
            thumbnail: Some(vec![1]),
            ..Default::default()
        };
        assert!(album.thumbnail_data_uri().is_none());
    }

    #[test]
    fn test_effective_date_prefers_override() {
        let created = Utc.with_ymd_and_hms(2024, 1, 5, 0, 0, 0).unwrap();
        let overridden = Utc.with_ymd_and_hms(2020, 3, 1, 0, 0, 0).unwrap();
        let mut album = Album {
            creation_date: Some(created),
            ..Default::default()
        };
        assert_eq!(album.effective_date(), Some(created));

        album.override_date = Some(overridden);
        assert_eq!(album.effective_date(), Some(overridden));
    }

    #[test]
    fn test_blank_event_is_not_an_event() {
        let mut album = Album::new("X");
        assert!(!album.has_event());
        album.event = Some("   ".into());
        assert!(!album.has_event());
        album.event = Some("  Wedding ".into());
        assert_eq!(album.trimmed_event(), Some("Wedding"));
    }
}
