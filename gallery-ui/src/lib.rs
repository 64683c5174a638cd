//! gallery-ui library - photo gallery client
//!
//! Fetches albums from the gallery REST API, keeps the filter/sort state of
//! the gallery view, and groups albums for display.

pub mod api;
pub mod dispatcher;
pub mod editor;
pub mod filters;
pub mod grouping;
pub mod pagination;
pub mod store;
pub mod view;

pub use api::{AlbumApi, ApiError, GalleryClient, MediaApi, SearchQuery, SortMode};
pub use dispatcher::{FetchDispatcher, FetchOutcome};
pub use filters::{FetchPlan, FilterCriteria, FilterState};
pub use grouping::{group_albums, GroupedAlbums};
pub use view::{GallerySnapshot, GalleryView};
