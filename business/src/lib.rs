//! Domain layer for the roster app: configuration, the users endpoint client
//! and the users table state machine. Nothing here depends on egui.

pub mod config;
pub mod error;
pub mod fetch_service;
pub mod http;
pub mod user;
pub mod users_table;

pub use config::{BusinessConfig, ConfigError};
pub use error::{FetchError, FetchErrorKind};
#[cfg(any(test, feature = "test-utils"))]
pub use fetch_service::MockUserFetcher;
pub use fetch_service::{FetchFuture, FetchResult, HttpUserFetcher, UserFetchService};
pub use user::UserRecord;
pub use users_table::{LoadState, PageEvent, SortDirection, SortKey, SortState, TableView, ViewState};
