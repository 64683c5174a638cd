//! # Gallery Common Library
//!
//! Shared code for the photo gallery client including:
//! - Domain records exchanged with the gallery REST API
//! - Client-side form validation
//! - Configuration loading
//! - Common error type

pub mod config;
pub mod error;
pub mod model;
pub mod time;
pub mod validation;

pub use error::{Error, Result};
pub use model::{Album, AlbumFilterOptions, Comment, Photo, Tag, User};
