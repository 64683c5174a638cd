//! Records exchanged with the gallery REST API
//!
//! Field names follow the API's camelCase JSON. Every field except the
//! identifying ones may be absent; absent optionals are omitted on write.

mod album;
mod comment;
mod filter_options;
mod photo;
mod tag;
mod user;

pub use album::Album;
pub use comment::Comment;
pub use filter_options::AlbumFilterOptions;
pub use photo::Photo;
pub use tag::Tag;
pub use user::User;

/// Serde adapter for binary blobs carried as base64 strings in JSON
pub(crate) mod base64_bytes {
    use base64::engine::general_purpose::STANDARD;
    use base64::Engine;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &Option<Vec<u8>>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(bytes) => serializer.serialize_str(&STANDARD.encode(bytes)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Vec<u8>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let encoded: Option<String> = Option::deserialize(deserializer)?;
        match encoded {
            Some(s) if !s.is_empty() => STANDARD
                .decode(s.as_bytes())
                .map(Some)
                .map_err(serde::de::Error::custom),
            _ => Ok(None),
        }
    }
}

/// Render a `data:` URI for an inline image blob
pub(crate) fn data_uri(content_type: Option<&str>, bytes: Option<&[u8]>) -> Option<String> {
    use base64::engine::general_purpose::STANDARD;
    use base64::Engine;

    match (content_type, bytes) {
        (Some(ct), Some(b)) if !ct.is_empty() => {
            Some(format!("data:{};base64,{}", ct, STANDARD.encode(b)))
        }
        _ => None,
    }
}
