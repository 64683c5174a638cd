//! Gallery view: filter state, fetch dispatch and grouping in one place
//!
//! Every change to the sort mode, the keyword or a filter field triggers one
//! fetch through the dispatcher. Grouping is recomputed from the latest
//! snapshot on demand.

use std::sync::Arc;

use gallery_common::{Album, AlbumFilterOptions};
use tracing::{info, warn};

use crate::api::{AlbumApi, ApiResult, SortMode};
use crate::dispatcher::{FetchDispatcher, FetchOutcome};
use crate::filters::{FilterField, FilterState};
use crate::grouping::{group_albums, GroupedAlbums};
use crate::store::ListState;

/// Album list plus the sort mode it should be grouped by
#[derive(Debug, Clone)]
pub struct GallerySnapshot {
    pub albums: ListState<Album>,
    pub sort: SortMode,
}

impl GallerySnapshot {
    pub fn groups(&self) -> GroupedAlbums<'_> {
        group_albums(&self.albums.entities, self.sort)
    }

    /// True when the last fetch succeeded with nothing to show
    pub fn is_empty(&self) -> bool {
        self.albums.entities.is_empty()
    }
}

pub struct GalleryView<A: AlbumApi> {
    filters: FilterState,
    dispatcher: FetchDispatcher<A>,
    filter_options: AlbumFilterOptions,
}

impl<A: AlbumApi> GalleryView<A> {
    pub fn new(api: Arc<A>, sort: SortMode) -> Self {
        Self {
            filters: FilterState::new(sort),
            dispatcher: FetchDispatcher::new(api),
            filter_options: AlbumFilterOptions::default(),
        }
    }

    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    pub fn active_filter_count(&self) -> usize {
        self.filters.active_filter_count()
    }

    pub fn filter_options(&self) -> &AlbumFilterOptions {
        &self.filter_options
    }

    pub fn dispatcher(&self) -> &FetchDispatcher<A> {
        &self.dispatcher
    }

    /// Re-issue the read for the current state
    pub async fn refresh(&self) -> FetchOutcome {
        self.dispatcher.fetch(&self.filters.fetch_plan()).await
    }

    pub async fn set_sort(&mut self, sort: SortMode) -> FetchOutcome {
        self.filters.set_sort(sort);
        self.refresh().await
    }

    pub async fn search(&mut self, keyword: Option<String>) -> FetchOutcome {
        self.filters.set_keyword(keyword);
        self.refresh().await
    }

    pub async fn set_event(&mut self, event: Option<String>) -> FetchOutcome {
        self.filters.set_event(event);
        self.refresh().await
    }

    pub async fn set_year(&mut self, year: Option<i32>) -> FetchOutcome {
        self.filters.set_year(year);
        self.refresh().await
    }

    pub async fn set_tag_name(&mut self, tag_name: Option<String>) -> FetchOutcome {
        self.filters.set_tag_name(tag_name);
        self.refresh().await
    }

    pub async fn set_contributor_login(&mut self, login: Option<String>) -> FetchOutcome {
        self.filters.set_contributor_login(login);
        self.refresh().await
    }

    pub async fn remove_filter(&mut self, field: FilterField) -> FetchOutcome {
        self.filters.remove(field);
        self.refresh().await
    }

    /// Replace the whole filter state at once, then fetch once
    pub async fn apply(&mut self, filters: FilterState) -> FetchOutcome {
        self.filters = filters;
        self.refresh().await
    }

    pub async fn clear_filters(&mut self) -> FetchOutcome {
        info!("Clearing gallery filters");
        self.filters.clear();
        self.refresh().await
    }

    /// Load dropdown values; on failure the previous options are kept
    pub async fn load_filter_options(&mut self) -> ApiResult<&AlbumFilterOptions> {
        match self.dispatcher.api().filter_options().await {
            Ok(options) => {
                self.filter_options = options;
                Ok(&self.filter_options)
            }
            Err(e) => {
                warn!("Failed to load filter options: {}", e);
                Err(e)
            }
        }
    }

    pub async fn snapshot(&self) -> GallerySnapshot {
        GallerySnapshot {
            albums: self.dispatcher.snapshot().await,
            sort: self.filters.sort(),
        }
    }
}
