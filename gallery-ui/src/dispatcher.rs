//! Fetch dispatcher for the gallery album list
//!
//! Issues exactly one external read per call and applies its result to the
//! shared album snapshot. Every fetch is tagged with an increasing request
//! id; a response that arrives after a newer request was issued is dropped
//! instead of overwriting the newer data. There is no debouncing, no
//! cancellation of the in-flight call and no retry.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use gallery_common::Album;
use tokio::sync::RwLock;
use tracing::{debug, error, info};

use crate::api::AlbumApi;
use crate::filters::FetchPlan;
use crate::store::ListState;

/// What happened to one fetch
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    /// Response replaced the snapshot
    Applied { request_id: u64, total_items: u64 },
    /// Request failed; the error is stored and the previous albums kept
    Failed { request_id: u64, message: String },
    /// A newer request was issued before this one completed; result dropped
    Superseded { request_id: u64 },
}

impl FetchOutcome {
    pub fn request_id(&self) -> u64 {
        match self {
            FetchOutcome::Applied { request_id, .. }
            | FetchOutcome::Failed { request_id, .. }
            | FetchOutcome::Superseded { request_id } => *request_id,
        }
    }

    pub fn is_applied(&self) -> bool {
        matches!(self, FetchOutcome::Applied { .. })
    }
}

pub struct FetchDispatcher<A: AlbumApi> {
    api: Arc<A>,
    state: RwLock<ListState<Album>>,
    latest_request: AtomicU64,
}

impl<A: AlbumApi> FetchDispatcher<A> {
    pub fn new(api: Arc<A>) -> Self {
        Self {
            api,
            state: RwLock::new(ListState::default()),
            latest_request: AtomicU64::new(0),
        }
    }

    pub fn api(&self) -> &Arc<A> {
        &self.api
    }

    /// Id of the most recently issued request (0 before the first fetch)
    pub fn latest_request_id(&self) -> u64 {
        self.latest_request.load(Ordering::SeqCst)
    }

    /// Issue the read described by `plan` and apply its result
    pub async fn fetch(&self, plan: &FetchPlan) -> FetchOutcome {
        let request_id = self.latest_request.fetch_add(1, Ordering::SeqCst) + 1;
        self.state.write().await.begin();

        let result = match plan {
            FetchPlan::Gallery(sort) => {
                debug!(request_id, sort = %sort, "Dispatching gallery read");
                self.api.gallery_albums(*sort).await
            }
            FetchPlan::Search(query) => {
                debug!(request_id, ?query, "Dispatching search read");
                self.api.search_albums(query).await
            }
        };

        // Fence check and apply happen under the same write lock
        let mut state = self.state.write().await;
        if request_id != self.latest_request_id() {
            debug!(
                request_id,
                latest = self.latest_request_id(),
                "Discarding response from superseded request"
            );
            return FetchOutcome::Superseded { request_id };
        }

        match result {
            Ok(page) => {
                let total_items = page.total_items;
                info!(request_id, albums = page.items.len(), total_items, "Album list loaded");
                state.succeed(page);
                FetchOutcome::Applied {
                    request_id,
                    total_items,
                }
            }
            Err(e) => {
                let message = e.to_string();
                error!(request_id, "Album fetch failed: {}", message);
                state.fail(message.clone());
                FetchOutcome::Failed {
                    request_id,
                    message,
                }
            }
        }
    }

    /// Copy of the current album snapshot
    pub async fn snapshot(&self) -> ListState<Album> {
        self.state.read().await.clone()
    }
}
