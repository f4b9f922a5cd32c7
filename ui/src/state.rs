use std::sync::Arc;

use roster_business::{BusinessConfig, HttpUserFetcher, TableView, UserFetchService};
use tokio::runtime::Handle;

use crate::widgets::UsersTableUiState;

/// The main application state.
pub struct State {
    /// Fetch, view state and event handlers of the users table.
    pub users_table: TableView,
    /// Widget-local input buffers.
    pub users_table_ui: UsersTableUiState,
}

impl State {
    pub fn new(config: &BusinessConfig, runtime: Handle) -> Self {
        let fetcher = Arc::new(HttpUserFetcher::from_config(config));
        Self::with_fetcher(config, fetcher, runtime)
    }

    pub fn with_fetcher(
        config: &BusinessConfig,
        fetcher: Arc<dyn UserFetchService>,
        runtime: Handle,
    ) -> Self {
        Self {
            users_table: TableView::new(fetcher, runtime, config),
            users_table_ui: UsersTableUiState::default(),
        }
    }

    /// State fetching from `{base_url}/users` on the current tokio runtime.
    ///
    /// Panics outside a tokio runtime; meant for tests.
    pub fn test(base_url: String) -> Self {
        Self::new(
            &BusinessConfig::new(format!("{base_url}/users")),
            Handle::current(),
        )
    }
}
