//! Controller behind the users table.
//!
//! Owns the single fetch, the [`ViewState`] and the reactions to filter, sort
//! and paginator events. The UI calls [`TableView::sync`] once per frame to
//! pick up a finished fetch.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use log::{debug, error, info, trace, warn};
use roster_states::TaskSlot;
use tokio::runtime::Handle;

use super::query::SortKey;
use super::view_state::{PageEvent, ViewState};
use crate::config::BusinessConfig;
use crate::error::FetchError;
use crate::fetch_service::{FetchResult, UserFetchService};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LoadState {
    /// Nothing requested yet.
    #[default]
    Idle,
    Loading,
    Loaded,
    Error(FetchError),
}

impl LoadState {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn error(&self) -> Option<&FetchError> {
        match self {
            Self::Error(err) => Some(err),
            _ => None,
        }
    }
}

#[derive(Debug)]
pub struct TableView {
    fetcher: Arc<dyn UserFetchService>,
    slot: TaskSlot<FetchResult>,
    load_state: LoadState,
    view: ViewState,
    page_size_options: Vec<usize>,
    loaded_at: Option<DateTime<Utc>>,
}

impl TableView {
    pub fn new(
        fetcher: Arc<dyn UserFetchService>,
        runtime: Handle,
        config: &BusinessConfig,
    ) -> Self {
        let mut page_size_options = config.page_size_options.clone();
        if !page_size_options.contains(&config.page_size) {
            page_size_options.push(config.page_size);
            page_size_options.sort_unstable();
        }

        Self {
            fetcher,
            slot: TaskSlot::new("fetch_users", runtime),
            load_state: LoadState::Idle,
            view: ViewState::new(config.page_size),
            page_size_options,
            loaded_at: None,
        }
    }

    pub fn load_state(&self) -> &LoadState {
        &self.load_state
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn page_size_options(&self) -> &[usize] {
        &self.page_size_options
    }

    /// When the current records arrived.
    pub fn loaded_at(&self) -> Option<DateTime<Utc>> {
        self.loaded_at
    }

    pub fn is_fetch_pending(&self) -> bool {
        self.slot.is_pending()
    }

    /// Starts the one fetch. Later calls do nothing.
    pub fn initialize(&mut self) {
        if self.load_state != LoadState::Idle {
            trace!("Users table already initialized ({:?})", self.load_state);
            return;
        }

        info!("Users table initializing, requesting users");
        self.load_state = LoadState::Loading;
        let task = self.slot.spawn(self.fetcher.fetch_users());
        debug!("Spawned {task:?}");
    }

    /// Applies a finished fetch, if one is waiting. Returns true when state changed.
    pub fn sync(&mut self) -> bool {
        match self.slot.poll() {
            Some(result) => {
                self.apply(result);
                true
            }
            None => false,
        }
    }

    fn apply(&mut self, result: FetchResult) {
        match result {
            Ok(records) => {
                info!("Loaded {} users", records.len());
                self.view.replace_records(records);
                self.load_state = LoadState::Loaded;
                self.loaded_at = Some(Utc::now());
            }
            Err(err) => {
                error!("Failed to load users ({}): {err}", err.kind());
                self.load_state = LoadState::Error(err);
            }
        }
    }

    pub fn on_page_change(&mut self, event: PageEvent) {
        if self.view.set_page(event) {
            debug!(
                "Page changed to index {} (size {})",
                event.page_index, event.page_size
            );
        } else {
            warn!("Ignoring page change with page size 0");
        }
    }

    pub fn on_filter_change(&mut self, raw: &str) {
        self.view.set_filter(raw);
        debug!("Filter set to {:?}", self.view.filter_text());
    }

    pub fn on_sort_change(&mut self, key: SortKey) {
        self.view.toggle_sort(key);
        debug!("Sort set to {:?}", self.view.sort());
    }

    /// Cancels the in-flight fetch; its result will never be applied.
    pub fn teardown(&mut self) {
        if self.slot.is_pending() {
            info!("Tearing down users table with a fetch in flight");
        }
        self.slot.cancel();
    }
}

impl Drop for TableView {
    fn drop(&mut self) {
        self.teardown();
    }
}
