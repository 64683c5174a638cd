//! Album table listing and create/update/delete
//!
//! Each successful write is followed by a reload of the current table page,
//! so the listing always reflects the server after an edit.

use std::sync::Arc;

use gallery_common::validation::Validate;
use gallery_common::Album;
use tracing::{error, info};

use crate::api::{AlbumApi, ApiError, ApiResult};
use crate::pagination::{calculate_pagination, PageRequest, Pagination};
use crate::store::{EntityState, ListState};

pub struct AlbumEditor<A: AlbumApi> {
    api: Arc<A>,
    page: PageRequest,
    list: ListState<Album>,
    entity: EntityState<Album>,
}

impl<A: AlbumApi> AlbumEditor<A> {
    pub fn new(api: Arc<A>, page: PageRequest) -> Self {
        Self {
            api,
            page,
            list: ListState::default(),
            entity: EntityState::default(),
        }
    }

    pub fn list(&self) -> &ListState<Album> {
        &self.list
    }

    pub fn entity(&self) -> &EntityState<Album> {
        &self.entity
    }

    pub fn page_request(&self) -> &PageRequest {
        &self.page
    }

    /// Pagination metadata for the current listing
    pub fn pagination(&self) -> Pagination {
        calculate_pagination(self.list.total_items, self.page.page, self.page.size)
    }

    /// Load a table page; failure keeps the previous rows
    pub async fn load_page(&mut self, page: PageRequest) -> ApiResult<()> {
        self.page = page;
        self.reload().await
    }

    pub async fn reload(&mut self) -> ApiResult<()> {
        self.list.begin();
        match self.api.list_albums(&self.page).await {
            Ok(page) => {
                self.list.succeed(page);
                Ok(())
            }
            Err(e) => {
                error!("Failed to list albums: {}", e);
                self.list.fail(e.to_string());
                Err(e)
            }
        }
    }

    pub async fn load(&mut self, id: i64) -> ApiResult<&Album> {
        self.entity.begin_load();
        match self.api.get_album(id).await {
            Ok(album) => {
                self.entity.loaded(album);
                self.entity
                    .entity
                    .as_ref()
                    .ok_or_else(|| ApiError::NotFound(format!("albums/{}", id)))
            }
            Err(e) => {
                self.entity.fail(e.to_string());
                Err(e)
            }
        }
    }

    /// Create when the album has no id, update otherwise
    ///
    /// Invalid albums are rejected before anything is sent and leave the
    /// entity state untouched.
    pub async fn save(&mut self, album: &Album) -> ApiResult<Album> {
        album.validate()?;

        self.entity.begin_update();
        let result = match album.id {
            None => self.api.create_album(album).await,
            Some(_) => self.api.update_album(album).await,
        };

        match result {
            Ok(saved) => {
                info!(id = ?saved.id, "Album saved");
                self.entity.saved(saved.clone());
                self.refresh_after_write().await;
                Ok(saved)
            }
            Err(e) => {
                self.entity.fail(e.to_string());
                Err(e)
            }
        }
    }

    pub async fn delete(&mut self, id: i64) -> ApiResult<()> {
        self.entity.begin_update();
        match self.api.delete_album(id).await {
            Ok(()) => {
                self.entity.deleted();
                self.refresh_after_write().await;
                Ok(())
            }
            Err(e) => {
                self.entity.fail(e.to_string());
                Err(e)
            }
        }
    }

    pub fn reset(&mut self) {
        self.entity.reset();
    }

    // The write already succeeded; a failed reload only marks the list
    async fn refresh_after_write(&mut self) {
        let _ = self.reload().await;
    }
}
