//! Client-side state for list and single-entity operations
//!
//! A list fetch moves `Idle → Loading → Succeeded | Failed`. Success
//! replaces the entities and total; failure records the message and keeps
//! whatever the last success left behind. Nothing here retries.

use crate::api::Page;

/// Lifecycle of the most recent list fetch
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FetchStatus {
    #[default]
    Idle,
    Loading,
    Succeeded,
    Failed,
}

/// Snapshot of a fetched list
#[derive(Debug, Clone)]
pub struct ListState<T> {
    pub status: FetchStatus,
    pub entities: Vec<T>,
    pub total_items: u64,
    pub error_message: Option<String>,
}

impl<T> Default for ListState<T> {
    fn default() -> Self {
        Self {
            status: FetchStatus::Idle,
            entities: Vec::new(),
            total_items: 0,
            error_message: None,
        }
    }
}

impl<T> ListState<T> {
    pub fn begin(&mut self) {
        self.status = FetchStatus::Loading;
        self.error_message = None;
    }

    pub fn succeed(&mut self, page: Page<T>) {
        self.status = FetchStatus::Succeeded;
        self.entities = page.items;
        self.total_items = page.total_items;
        self.error_message = None;
    }

    pub fn fail(&mut self, message: impl Into<String>) {
        self.status = FetchStatus::Failed;
        self.error_message = Some(message.into());
    }

    pub fn is_loading(&self) -> bool {
        self.status == FetchStatus::Loading
    }
}

/// State of a single entity being viewed or edited
#[derive(Debug, Clone)]
pub struct EntityState<T> {
    pub entity: Option<T>,
    pub loading: bool,
    pub updating: bool,
    pub update_success: bool,
    pub error_message: Option<String>,
}

impl<T> Default for EntityState<T> {
    fn default() -> Self {
        Self {
            entity: None,
            loading: false,
            updating: false,
            update_success: false,
            error_message: None,
        }
    }
}

impl<T> EntityState<T> {
    pub fn begin_load(&mut self) {
        self.loading = true;
        self.update_success = false;
        self.error_message = None;
    }

    pub fn loaded(&mut self, entity: T) {
        self.loading = false;
        self.entity = Some(entity);
    }

    pub fn begin_update(&mut self) {
        self.updating = true;
        self.update_success = false;
        self.error_message = None;
    }

    /// Create/update finished; the server's copy becomes current
    pub fn saved(&mut self, entity: T) {
        self.updating = false;
        self.loading = false;
        self.update_success = true;
        self.entity = Some(entity);
    }

    pub fn deleted(&mut self) {
        self.updating = false;
        self.update_success = true;
        self.entity = None;
    }

    pub fn fail(&mut self, message: impl Into<String>) {
        self.loading = false;
        self.updating = false;
        self.error_message = Some(message.into());
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
