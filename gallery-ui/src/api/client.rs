//! HTTP client for the gallery REST API

use async_trait::async_trait;
use gallery_common::config::TomlConfig;
use gallery_common::validation::Validate;
use gallery_common::{time, Album, AlbumFilterOptions, Comment, Photo, Tag};
use reqwest::header::CONTENT_TYPE;
use reqwest::{RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use std::time::Duration;

use super::{AlbumApi, ApiError, ApiResult, MediaApi, Page, SearchQuery, SortMode};
use crate::pagination::{parse_total_count, PageRequest, TOTAL_COUNT_HEADER};

const USER_AGENT: &str = concat!("gallery-ui/", env!("CARGO_PKG_VERSION"));
const MERGE_PATCH_JSON: &str = "application/merge-patch+json";

/// Gallery API client
///
/// No retries and, unless configured, no timeout: a request that never
/// completes leaves the caller waiting.
pub struct GalleryClient {
    http_client: reqwest::Client,
    base_url: String,
}

impl GalleryClient {
    pub fn new(base_url: &str, timeout: Option<Duration>) -> ApiResult<Self> {
        let base_url = base_url.trim().trim_end_matches('/').to_string();
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(ApiError::InvalidRequest(format!(
                "API base URL must start with http:// or https://: '{}'",
                base_url
            )));
        }

        let mut builder = reqwest::Client::builder().user_agent(USER_AGENT);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let http_client = builder
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Ok(Self {
            http_client,
            base_url,
        })
    }

    pub fn from_config(config: &TomlConfig) -> ApiResult<Self> {
        Self::new(
            &config.api_base_url,
            config.request_timeout_secs.map(Duration::from_secs),
        )
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/api/{}", self.base_url, path)
    }

    /// Send a request and map non-success statuses to errors
    async fn execute(&self, request: RequestBuilder, resource: &str) -> ApiResult<Response> {
        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let status = response.status();
        tracing::debug!(resource = %resource, status = %status, "Gallery API response");

        if status == StatusCode::NOT_FOUND {
            return Err(ApiError::NotFound(resource.to_string()));
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::Api {
                status: status.as_u16(),
                body,
            });
        }

        Ok(response)
    }

    async fn fetch_json<T: DeserializeOwned>(&self, request: RequestBuilder, resource: &str) -> ApiResult<T> {
        self.execute(request, resource)
            .await?
            .json()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))
    }

    /// Fetch a JSON array, taking the total from `X-Total-Count`
    async fn fetch_page<T: DeserializeOwned>(&self, request: RequestBuilder, resource: &str) -> ApiResult<Page<T>> {
        let response = self.execute(request, resource).await?;
        let total_header = response
            .headers()
            .get(TOTAL_COUNT_HEADER)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);

        let items: Vec<T> = response
            .json()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))?;

        let total_items = parse_total_count(total_header.as_deref(), items.len());
        Ok(Page { items, total_items })
    }

    fn get_list(&self, path: &str, mut params: Vec<(&'static str, String)>) -> RequestBuilder {
        params.push(("cacheBuster", time::cache_buster().to_string()));
        self.http_client.get(self.url(path)).query(&params)
    }
}

fn require_id(id: Option<i64>) -> ApiResult<i64> {
    id.ok_or_else(|| ApiError::InvalidRequest("Invalid id: entity has no id".to_string()))
}

#[async_trait]
impl AlbumApi for GalleryClient {
    async fn list_albums(&self, page: &PageRequest) -> ApiResult<Page<Album>> {
        tracing::debug!(page = page.page, size = page.size, "Listing albums");
        let request = self.get_list("albums", page.to_query_pairs());
        self.fetch_page(request, "albums").await
    }

    async fn gallery_albums(&self, sort: SortMode) -> ApiResult<Page<Album>> {
        tracing::debug!(sort = %sort, "Fetching gallery albums");
        let request = self.get_list("albums/gallery", vec![("sortBy", sort.to_string())]);
        self.fetch_page(request, "albums/gallery").await
    }

    async fn search_albums(&self, query: &SearchQuery) -> ApiResult<Page<Album>> {
        tracing::debug!(?query, "Searching albums");
        let request = self.get_list("albums/search", query.to_query_pairs());
        self.fetch_page(request, "albums/search").await
    }

    async fn filter_options(&self) -> ApiResult<AlbumFilterOptions> {
        let request = self.http_client.get(self.url("albums/filter-options"));
        self.fetch_json(request, "albums/filter-options").await
    }

    async fn get_album(&self, id: i64) -> ApiResult<Album> {
        let path = format!("albums/{}", id);
        let request = self.http_client.get(self.url(&path));
        self.fetch_json(request, &path).await
    }

    async fn create_album(&self, album: &Album) -> ApiResult<Album> {
        if album.id.is_some() {
            return Err(ApiError::InvalidRequest(
                "A new album cannot already have an ID".to_string(),
            ));
        }
        album.validate()?;

        let request = self.http_client.post(self.url("albums")).json(album);
        let created: Album = self.fetch_json(request, "albums").await?;
        tracing::info!(id = ?created.id, name = %created.name, "Album created");
        Ok(created)
    }

    async fn update_album(&self, album: &Album) -> ApiResult<Album> {
        let id = require_id(album.id)?;
        album.validate()?;

        let path = format!("albums/{}", id);
        let request = self.http_client.put(self.url(&path)).json(album);
        let updated: Album = self.fetch_json(request, &path).await?;
        tracing::info!(id, "Album updated");
        Ok(updated)
    }

    async fn partial_update_album(&self, album: &Album) -> ApiResult<Album> {
        let id = require_id(album.id)?;
        let body = serde_json::to_vec(album).map_err(|e| ApiError::Parse(e.to_string()))?;

        let path = format!("albums/{}", id);
        let request = self
            .http_client
            .patch(self.url(&path))
            .header(CONTENT_TYPE, MERGE_PATCH_JSON)
            .body(body);
        let updated: Album = self.fetch_json(request, &path).await?;
        tracing::info!(id, "Album partially updated");
        Ok(updated)
    }

    async fn delete_album(&self, id: i64) -> ApiResult<()> {
        let path = format!("albums/{}", id);
        self.execute(self.http_client.delete(self.url(&path)), &path)
            .await?;
        tracing::info!(id, "Album deleted");
        Ok(())
    }
}

#[async_trait]
impl MediaApi for GalleryClient {
    async fn list_photos(&self, page: &PageRequest) -> ApiResult<Page<Photo>> {
        let request = self.get_list("photos", page.to_query_pairs());
        self.fetch_page(request, "photos").await
    }

    async fn get_photo(&self, id: i64) -> ApiResult<Photo> {
        let path = format!("photos/{}", id);
        let request = self.http_client.get(self.url(&path));
        self.fetch_json(request, &path).await
    }

    async fn comments_for_album(&self, album_id: i64) -> ApiResult<Vec<Comment>> {
        let path = format!("comments/album/{}", album_id);
        let request = self.http_client.get(self.url(&path));
        self.fetch_json(request, &path).await
    }

    async fn comments_for_photo(&self, photo_id: i64) -> ApiResult<Vec<Comment>> {
        let path = format!("comments/photo/{}", photo_id);
        let request = self.http_client.get(self.url(&path));
        self.fetch_json(request, &path).await
    }

    async fn create_comment(&self, comment: &Comment) -> ApiResult<Comment> {
        if comment.id.is_some() {
            return Err(ApiError::InvalidRequest(
                "A new comment cannot already have an ID".to_string(),
            ));
        }
        comment.validate()?;

        let request = self.http_client.post(self.url("comments")).json(comment);
        self.fetch_json(request, "comments").await
    }

    async fn list_tags(&self) -> ApiResult<Vec<Tag>> {
        let request = self.http_client.get(self.url("tags"));
        self.fetch_json(request, "tags").await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let client = GalleryClient::new("http://localhost:8080/", None).unwrap();
        assert_eq!(client.base_url(), "http://localhost:8080");
        assert_eq!(client.url("albums/gallery"), "http://localhost:8080/api/albums/gallery");
    }

    #[test]
    fn test_base_url_requires_scheme() {
        assert!(matches!(
            GalleryClient::new("localhost:8080", None),
            Err(ApiError::InvalidRequest(_))
        ));
    }

    #[tokio::test]
    async fn test_create_with_id_rejected_without_request() {
        // Unroutable port: any attempt to send would surface as a network error
        let client = GalleryClient::new("http://127.0.0.1:9", None).unwrap();
        let album = Album {
            id: Some(5),
            ..Album::new("Existing")
        };
        assert!(matches!(
            client.create_album(&album).await,
            Err(ApiError::InvalidRequest(_))
        ));
    }

    #[tokio::test]
    async fn test_invalid_album_not_sent() {
        let client = GalleryClient::new("http://127.0.0.1:9", None).unwrap();
        let result = client.create_album(&Album::new("ab")).await;
        assert!(matches!(result, Err(ApiError::Validation(_))));
    }

    #[tokio::test]
    async fn test_update_requires_id() {
        let client = GalleryClient::new("http://127.0.0.1:9", None).unwrap();
        let result = client.update_album(&Album::new("No id yet")).await;
        assert!(matches!(result, Err(ApiError::InvalidRequest(_))));
    }
}
