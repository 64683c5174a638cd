use serde::{Deserialize, Serialize};

/// Distinct values available for populating the gallery filter dropdowns
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlbumFilterOptions {
    #[serde(default)]
    pub events: Vec<String>,
    #[serde(default)]
    pub years: Vec<i32>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub contributors: Vec<String>,
}

impl AlbumFilterOptions {
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
            && self.years.is_empty()
            && self.tags.is_empty()
            && self.contributors.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_lists_default_to_empty() {
        let options: AlbumFilterOptions = serde_json::from_str(r#"{"events":["Trip"]}"#).unwrap();
        assert_eq!(options.events, vec!["Trip".to_string()]);
        assert!(options.years.is_empty());
        assert!(options.tags.is_empty());
        assert!(options.contributors.is_empty());
        assert!(!options.is_empty());
    }

    #[test]
    fn test_default_is_empty() {
        assert!(AlbumFilterOptions::default().is_empty());
    }
}
