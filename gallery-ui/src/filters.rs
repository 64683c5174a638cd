//! Gallery filter state
//!
//! Holds the structured filter criteria, the free-text search keyword and
//! the sort mode, and decides which read a fetch should use.

use crate::api::{SearchQuery, SortMode};

/// Structured filter criteria; every field independently optional
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    pub keyword: Option<String>,
    pub event: Option<String>,
    pub year: Option<i32>,
    pub tag_name: Option<String>,
    pub contributor_login: Option<String>,
}

impl FilterCriteria {
    /// Number of non-empty fields among event, year, tag and contributor
    pub fn active_count(&self) -> usize {
        [
            self.event.is_some(),
            self.year.is_some(),
            self.tag_name.is_some(),
            self.contributor_login.is_some(),
        ]
        .iter()
        .filter(|set| **set)
        .count()
    }

    pub fn is_empty(&self) -> bool {
        self.keyword.is_none() && self.active_count() == 0
    }
}

/// Which external read the next fetch should issue
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchPlan {
    /// Plain gallery read with only the sort mode
    Gallery(SortMode),
    /// Search read with every non-empty field
    Search(SearchQuery),
}

/// Identifies one structured filter field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterField {
    Event,
    Year,
    TagName,
    ContributorLogin,
}

/// Current gallery filter/sort state
///
/// Setters normalise empty or whitespace-only input to "unset".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    criteria: FilterCriteria,
    keyword: Option<String>,
    sort: SortMode,
}

fn normalise(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

impl FilterState {
    pub fn new(sort: SortMode) -> Self {
        Self {
            sort,
            ..Default::default()
        }
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn keyword(&self) -> Option<&str> {
        self.keyword.as_deref()
    }

    pub fn sort(&self) -> SortMode {
        self.sort
    }

    pub fn set_sort(&mut self, sort: SortMode) {
        self.sort = sort;
    }

    /// Free-text search keyword
    pub fn set_keyword(&mut self, keyword: Option<String>) {
        self.keyword = normalise(keyword);
    }

    pub fn set_event(&mut self, event: Option<String>) {
        self.criteria.event = normalise(event);
    }

    pub fn set_year(&mut self, year: Option<i32>) {
        self.criteria.year = year;
    }

    pub fn set_tag_name(&mut self, tag_name: Option<String>) {
        self.criteria.tag_name = normalise(tag_name);
    }

    pub fn set_contributor_login(&mut self, login: Option<String>) {
        self.criteria.contributor_login = normalise(login);
    }

    /// Keyword carried in the structured criteria rather than the search box
    pub fn set_criteria_keyword(&mut self, keyword: Option<String>) {
        self.criteria.keyword = normalise(keyword);
    }

    /// Unset one structured field
    pub fn remove(&mut self, field: FilterField) {
        match field {
            FilterField::Event => self.criteria.event = None,
            FilterField::Year => self.criteria.year = None,
            FilterField::TagName => self.criteria.tag_name = None,
            FilterField::ContributorLogin => self.criteria.contributor_login = None,
        }
    }

    /// Badge count; the keyword never counts
    pub fn active_filter_count(&self) -> usize {
        self.criteria.active_count()
    }

    /// Reset every filter field and the keyword; the sort mode is kept
    pub fn clear(&mut self) {
        self.criteria = FilterCriteria::default();
        self.keyword = None;
    }

    pub fn has_filters(&self) -> bool {
        !self.criteria.is_empty() || self.keyword.is_some()
    }

    /// Decide between the gallery read and the search read
    pub fn fetch_plan(&self) -> FetchPlan {
        if !self.has_filters() {
            return FetchPlan::Gallery(self.sort);
        }

        FetchPlan::Search(SearchQuery {
            keyword: self.keyword.clone().or_else(|| self.criteria.keyword.clone()),
            event: self.criteria.event.clone(),
            year: self.criteria.year,
            tag_name: self.criteria.tag_name.clone(),
            contributor_login: self.criteria.contributor_login.clone(),
            sort_by: self.sort,
        })
    }
}
