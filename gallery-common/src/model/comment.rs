use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Album, Photo, User};

/// A comment left on an album or a photo
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    #[serde(default)]
    pub content: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_date: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<User>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub album: Option<Album>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo: Option<Photo>,
}

impl Comment {
    /// New comment on an album, timestamped now
    pub fn on_album(album_id: i64, content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            created_date: Some(crate::time::now()),
            album: Some(Album {
                id: Some(album_id),
                ..Default::default()
            }),
            ..Default::default()
        }
    }

    /// New comment on a photo, timestamped now
    pub fn on_photo(photo_id: i64, content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            created_date: Some(crate::time::now()),
            photo: Some(Photo {
                id: Some(photo_id),
                ..Default::default()
            }),
            ..Default::default()
        }
    }
}
