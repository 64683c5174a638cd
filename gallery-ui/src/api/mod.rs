//! Gallery REST API access
//!
//! The backend is an opaque collaborator. Everything the client needs from
//! it is expressed by the [`AlbumApi`] and [`MediaApi`] traits; the
//! [`GalleryClient`] implements both over HTTP.

use async_trait::async_trait;
use gallery_common::validation::ValidationErrors;
use gallery_common::{Album, AlbumFilterOptions, Comment, Photo, Tag};
use thiserror::Error;

pub mod client;
pub mod query;

pub use client::GalleryClient;
pub use query::{SearchQuery, SortMode};

use crate::pagination::PageRequest;

/// Gallery API errors
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("API error {status}: {body}")]
    Api { status: u16, body: String },

    #[error("Parse error: {0}")]
    Parse(String),

    /// Rejected before sending
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationErrors),

    /// Request could not be formed (bad id, bad URL)
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

pub type ApiResult<T> = std::result::Result<T, ApiError>;

/// One page of a list response plus the server-reported total
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total_items: u64,
}

impl<T> Page<T> {
    /// Page whose total is just the number of items it holds
    pub fn complete(items: Vec<T>) -> Self {
        let total_items = items.len() as u64;
        Self { items, total_items }
    }
}

/// Album reads and writes
#[async_trait]
pub trait AlbumApi: Send + Sync {
    /// `GET /api/albums` - paged table listing
    async fn list_albums(&self, page: &PageRequest) -> ApiResult<Page<Album>>;

    /// `GET /api/albums/gallery` - every album eligible for the gallery
    async fn gallery_albums(&self, sort: SortMode) -> ApiResult<Page<Album>>;

    /// `GET /api/albums/search` - albums matching keyword and filter criteria
    async fn search_albums(&self, query: &SearchQuery) -> ApiResult<Page<Album>>;

    /// `GET /api/albums/filter-options`
    async fn filter_options(&self) -> ApiResult<AlbumFilterOptions>;

    async fn get_album(&self, id: i64) -> ApiResult<Album>;

    /// `POST /api/albums`; the album must not carry an id yet
    async fn create_album(&self, album: &Album) -> ApiResult<Album>;

    /// `PUT /api/albums/{id}`
    async fn update_album(&self, album: &Album) -> ApiResult<Album>;

    /// `PATCH /api/albums/{id}` with merge-patch semantics
    async fn partial_update_album(&self, album: &Album) -> ApiResult<Album>;

    async fn delete_album(&self, id: i64) -> ApiResult<()>;
}

/// Photo, comment and tag access used by the detail screens
#[async_trait]
pub trait MediaApi: Send + Sync {
    async fn list_photos(&self, page: &PageRequest) -> ApiResult<Page<Photo>>;

    async fn get_photo(&self, id: i64) -> ApiResult<Photo>;

    /// Comments on an album, newest first
    async fn comments_for_album(&self, album_id: i64) -> ApiResult<Vec<Comment>>;

    /// Comments on a photo, newest first
    async fn comments_for_photo(&self, photo_id: i64) -> ApiResult<Vec<Comment>>;

    async fn create_comment(&self, comment: &Comment) -> ApiResult<Comment>;

    async fn list_tags(&self) -> ApiResult<Vec<Tag>>;
}
