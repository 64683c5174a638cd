//! Query parameters for the album read endpoints

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Gallery grouping/ordering mode, sent to the API as `sortBy`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SortMode {
    #[default]
    Event,
    Date,
}

impl SortMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortMode::Event => "EVENT",
            SortMode::Date => "DATE",
        }
    }
}

impl fmt::Display for SortMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortMode {
    type Err = String;

    /// Case-insensitive, as the server treats it
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "EVENT" => Ok(SortMode::Event),
            "DATE" => Ok(SortMode::Date),
            other => Err(format!("Unknown sort mode '{}' (expected EVENT or DATE)", other)),
        }
    }
}

/// Parameters for `GET /api/albums/search`
///
/// Only non-empty fields are sent; `sortBy` is always sent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery {
    pub keyword: Option<String>,
    pub event: Option<String>,
    pub year: Option<i32>,
    pub tag_name: Option<String>,
    pub contributor_login: Option<String>,
    pub sort_by: SortMode,
}

impl SearchQuery {
    /// Query pairs in the order the web client sends them
    pub fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();

        push_text(&mut pairs, "keyword", &self.keyword);
        push_text(&mut pairs, "event", &self.event);
        if let Some(year) = self.year {
            pairs.push(("year", year.to_string()));
        }
        push_text(&mut pairs, "tagName", &self.tag_name);
        push_text(&mut pairs, "contributorLogin", &self.contributor_login);

        pairs.push(("sortBy", self.sort_by.to_string()));
        pairs
    }
}

fn push_text(pairs: &mut Vec<(&'static str, String)>, name: &'static str, value: &Option<String>) {
    if let Some(v) = value.as_deref().filter(|v| !v.is_empty()) {
        pairs.push((name, v.to_string()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_mode_parse_is_case_insensitive() {
        assert_eq!("event".parse::<SortMode>().unwrap(), SortMode::Event);
        assert_eq!(" Date ".parse::<SortMode>().unwrap(), SortMode::Date);
        assert!("name".parse::<SortMode>().is_err());
    }

    #[test]
    fn test_sort_mode_serializes_uppercase() {
        assert_eq!(serde_json::to_string(&SortMode::Date).unwrap(), "\"DATE\"");
        assert_eq!(SortMode::default(), SortMode::Event);
    }

    #[test]
    fn test_search_query_skips_empty_fields() {
        let query = SearchQuery {
            keyword: Some(String::new()),
            event: Some("Trip".into()),
            year: None,
            tag_name: Some("beach".into()),
            contributor_login: None,
            sort_by: SortMode::Date,
        };

        assert_eq!(
            query.to_query_pairs(),
            vec![
                ("event", "Trip".to_string()),
                ("tagName", "beach".to_string()),
                ("sortBy", "DATE".to_string()),
            ]
        );
    }

    #[test]
    fn test_search_query_all_fields() {
        let query = SearchQuery {
            keyword: Some("sun".into()),
            event: Some("Trip".into()),
            year: Some(2024),
            tag_name: Some("beach".into()),
            contributor_login: Some("alice".into()),
            sort_by: SortMode::Event,
        };
        let names: Vec<&str> = query.to_query_pairs().iter().map(|(n, _)| *n).collect();
        assert_eq!(
            names,
            vec!["keyword", "event", "year", "tagName", "contributorLogin", "sortBy"]
        );
    }
}
