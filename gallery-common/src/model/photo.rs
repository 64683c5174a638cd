use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{base64_bytes, data_uri, Album, Tag};

/// A single image, optionally belonging to an album
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Photo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(
        default,
        with = "base64_bytes",
        skip_serializing_if = "Option::is_none"
    )]
    pub image: Option<Vec<u8>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_content_type: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub upload_date: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capture_date: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keywords: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub album: Option<Box<Album>>,

    #[serde(default)]
    pub tags: Vec<Tag>,
}

impl Photo {
    /// Title for display, falling back to the id
    pub fn display_title(&self) -> String {
        match (&self.title, self.id) {
            (Some(title), _) if !title.trim().is_empty() => title.clone(),
            (_, Some(id)) => format!("Photo #{}", id),
            _ => "Untitled photo".to_string(),
        }
    }

    pub fn image_data_uri(&self) -> Option<String> {
        data_uri(self.image_content_type.as_deref(), self.image.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_title_fallbacks() {
        let mut photo = Photo::default();
        assert_eq!(photo.display_title(), "Untitled photo");
        photo.id = Some(12);
        assert_eq!(photo.display_title(), "Photo #12");
        photo.title = Some("Sunset".into());
        assert_eq!(photo.display_title(), "Sunset");
    }

    #[test]
    fn test_nested_album_reference() {
        let photo: Photo = serde_json::from_str(
            r#"{"id":1,"uploadDate":"2024-02-02T00:00:00Z","album":{"id":4,"name":"Trip"}}"#,
        )
        .unwrap();
        assert_eq!(photo.album.as_ref().and_then(|a| a.id), Some(4));
        assert!(photo.upload_date.is_some());
    }
}
