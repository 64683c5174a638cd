//! Client-side form validation
//!
//! Runs before any create/update request is issued. Records that fail
//! validation are never sent to the server. All violations are collected
//! so a form can report every offending field at once.

use std::fmt;

use crate::model::{Album, Comment, Photo};

pub const ALBUM_NAME_MIN: usize = 3;
pub const ALBUM_NAME_MAX: usize = 255;
pub const ALBUM_EVENT_MAX: usize = 255;
pub const KEYWORDS_MAX: usize = 500;
pub const PHOTO_TITLE_MAX: usize = 255;
pub const PHOTO_DESCRIPTION_MAX: usize = 1000;
pub const PHOTO_LOCATION_MAX: usize = 255;
pub const COMMENT_CONTENT_MAX: usize = 1000;

/// Kind of rule a field broke
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Violation {
    Required,
    MinLength(usize),
    MaxLength(usize),
    /// Binary payload supplied without its MIME type
    MissingContentType,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::Required => write!(f, "is required"),
            Violation::MinLength(n) => write!(f, "must be at least {} characters", n),
            Violation::MaxLength(n) => write!(f, "cannot be longer than {} characters", n),
            Violation::MissingContentType => write!(f, "requires a content type"),
        }
    }
}

/// Single field failure
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub violation: Violation,
}

/// Every failure found on one record
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: Vec<FieldError>,
}

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    /// Violations recorded against one field
    pub fn for_field(&self, field: &str) -> Vec<Violation> {
        self.errors
            .iter()
            .filter(|e| e.field == field)
            .map(|e| e.violation)
            .collect()
    }

    fn push(&mut self, field: &'static str, violation: Violation) {
        self.errors.push(FieldError { field, violation });
    }

    fn into_result(self) -> Result<(), ValidationErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .errors
            .iter()
            .map(|e| format!("{} {}", e.field, e.violation))
            .collect();
        write!(f, "{}", parts.join("; "))
    }
}

impl std::error::Error for ValidationErrors {}

/// Records that can be checked before submission
pub trait Validate {
    fn validate(&self) -> Result<(), ValidationErrors>;
}

fn char_len(s: &str) -> usize {
    s.chars().count()
}

fn check_max(errors: &mut ValidationErrors, field: &'static str, value: Option<&str>, max: usize) {
    if let Some(v) = value {
        if char_len(v) > max {
            errors.push(field, Violation::MaxLength(max));
        }
    }
}

impl Validate for Album {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::default();

        let name_len = char_len(&self.name);
        if self.name.trim().is_empty() {
            errors.push("name", Violation::Required);
        } else if name_len < ALBUM_NAME_MIN {
            errors.push("name", Violation::MinLength(ALBUM_NAME_MIN));
        } else if name_len > ALBUM_NAME_MAX {
            errors.push("name", Violation::MaxLength(ALBUM_NAME_MAX));
        }

        check_max(&mut errors, "event", self.event.as_deref(), ALBUM_EVENT_MAX);

        if self.creation_date.is_none() {
            errors.push("creationDate", Violation::Required);
        }

        check_max(&mut errors, "keywords", self.keywords.as_deref(), KEYWORDS_MAX);

        if self.thumbnail.is_some() && self.thumbnail_content_type.as_deref().map_or(true, str::is_empty) {
            errors.push("thumbnail", Violation::MissingContentType);
        }

        errors.into_result()
    }
}

impl Validate for Photo {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::default();

        check_max(&mut errors, "title", self.title.as_deref(), PHOTO_TITLE_MAX);
        check_max(&mut errors, "description", self.description.as_deref(), PHOTO_DESCRIPTION_MAX);
        check_max(&mut errors, "location", self.location.as_deref(), PHOTO_LOCATION_MAX);
        check_max(&mut errors, "keywords", self.keywords.as_deref(), KEYWORDS_MAX);

        if self.upload_date.is_none() {
            errors.push("uploadDate", Violation::Required);
        }
        if self.image.is_some() && self.image_content_type.as_deref().map_or(true, str::is_empty) {
            errors.push("image", Violation::MissingContentType);
        }

        errors.into_result()
    }
}

impl Validate for Comment {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::default();

        if self.content.trim().is_empty() {
            errors.push("content", Violation::Required);
        } else {
            check_max(&mut errors, "content", Some(self.content.as_str()), COMMENT_CONTENT_MAX);
        }
        if self.created_date.is_none() {
            errors.push("createdDate", Violation::Required);
        }

        errors.into_result()
    }
}
