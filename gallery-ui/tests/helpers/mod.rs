//! In-memory AlbumApi used by the view, dispatcher and editor tests

#![allow(dead_code)]

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use gallery_common::{Album, AlbumFilterOptions};
use gallery_ui::api::{AlbumApi, ApiError, ApiResult, Page, SearchQuery, SortMode};
use gallery_ui::pagination::PageRequest;
use tokio::sync::Notify;

/// Which read the fake served
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    List(PageRequest),
    Gallery(SortMode),
    Search(SearchQuery),
    FilterOptions,
    Get(i64),
    Create(String),
    Update(i64),
    Delete(i64),
}

#[derive(Default)]
pub struct FakeApi {
    pub albums: Mutex<Vec<Album>>,
    pub search_results: Mutex<Vec<Album>>,
    pub calls: Mutex<Vec<Call>>,
    pub fail_reads: AtomicBool,
    /// When set, gallery reads wait for a notification before answering
    pub gallery_gate: Option<Arc<Notify>>,
}

impl FakeApi {
    pub fn with_albums(albums: Vec<Album>) -> Self {
        Self {
            albums: Mutex::new(albums),
            ..Default::default()
        }
    }

    pub fn with_gallery_gate(mut self, gate: Arc<Notify>) -> Self {
        self.gallery_gate = Some(gate);
        self
    }

    pub fn set_search_results(&self, albums: Vec<Album>) {
        *self.search_results.lock().unwrap() = albums;
    }

    pub fn set_failing(&self, failing: bool) {
        self.fail_reads.store(failing, Ordering::SeqCst);
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }

    fn check_failing(&self) -> ApiResult<()> {
        if self.fail_reads.load(Ordering::SeqCst) {
            Err(ApiError::Network("connection refused".to_string()))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl AlbumApi for FakeApi {
    async fn list_albums(&self, page: &PageRequest) -> ApiResult<Page<Album>> {
        self.record(Call::List(page.clone()));
        self.check_failing()?;
        let albums = self.albums.lock().unwrap().clone();
        let total_items = albums.len() as u64;
        let items = albums
            .into_iter()
            .skip((page.page * page.size) as usize)
            .take(page.size as usize)
            .collect();
        Ok(Page { items, total_items })
    }

    async fn gallery_albums(&self, sort: SortMode) -> ApiResult<Page<Album>> {
        self.record(Call::Gallery(sort));
        if let Some(gate) = &self.gallery_gate {
            gate.notified().await;
        }
        self.check_failing()?;
        Ok(Page::complete(self.albums.lock().unwrap().clone()))
    }

    async fn search_albums(&self, query: &SearchQuery) -> ApiResult<Page<Album>> {
        self.record(Call::Search(query.clone()));
        self.check_failing()?;
        Ok(Page::complete(self.search_results.lock().unwrap().clone()))
    }

    async fn filter_options(&self) -> ApiResult<AlbumFilterOptions> {
        self.record(Call::FilterOptions);
        self.check_failing()?;
        Ok(AlbumFilterOptions {
            events: vec!["Trip".into()],
            years: vec![2024],
            tags: vec![],
            contributors: vec!["alice".into()],
        })
    }

    async fn get_album(&self, id: i64) -> ApiResult<Album> {
        self.record(Call::Get(id));
        self.albums
            .lock()
            .unwrap()
            .iter()
            .find(|a| a.id == Some(id))
            .cloned()
            .ok_or_else(|| ApiError::NotFound(format!("albums/{}", id)))
    }

    async fn create_album(&self, album: &Album) -> ApiResult<Album> {
        self.record(Call::Create(album.name.clone()));
        let mut albums = self.albums.lock().unwrap();
        let next_id = albums.iter().filter_map(|a| a.id).max().unwrap_or(0) + 1;
        let created = Album {
            id: Some(next_id),
            ..album.clone()
        };
        albums.push(created.clone());
        Ok(created)
    }

    async fn update_album(&self, album: &Album) -> ApiResult<Album> {
        let id = album.id.ok_or_else(|| ApiError::InvalidRequest("no id".into()))?;
        self.record(Call::Update(id));
        let mut albums = self.albums.lock().unwrap();
        match albums.iter_mut().find(|a| a.id == Some(id)) {
            Some(existing) => {
                *existing = album.clone();
                Ok(album.clone())
            }
            None => Err(ApiError::NotFound(format!("albums/{}", id))),
        }
    }

    async fn partial_update_album(&self, album: &Album) -> ApiResult<Album> {
        self.update_album(album).await
    }

    async fn delete_album(&self, id: i64) -> ApiResult<()> {
        self.record(Call::Delete(id));
        self.albums.lock().unwrap().retain(|a| a.id != Some(id));
        Ok(())
    }
}

pub fn album(id: i64, name: &str, event: Option<&str>) -> Album {
    Album {
        id: Some(id),
        name: name.to_string(),
        event: event.map(str::to_string),
        creation_date: Some(Utc.with_ymd_and_hms(2024, 1, id as u32 % 28 + 1, 0, 0, 0).unwrap()),
        ..Default::default()
    }
}
