use super::query::{
    SortKey, SortState, normalize_filter, page_count, page_range, range_label, record_matches,
    visible_records,
};
use crate::user::UserRecord;

/// A paginator request: show `page_index` with `page_size` rows per page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageEvent {
    pub page_size: usize,
    pub page_index: usize,
}

/// Everything the users table renders from.
///
/// `total_count` always equals the number of fetched records; the filtered
/// count is derived on demand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    records: Vec<UserRecord>,
    total_count: usize,
    page_index: usize,
    page_size: usize,
    filter_text: String,
    sort: Option<SortState>,
}

impl ViewState {
    pub fn new(page_size: usize) -> Self {
        Self {
            records: Vec::new(),
            total_count: 0,
            page_index: 0,
            page_size: page_size.max(1),
            filter_text: String::new(),
            sort: None,
        }
    }

    pub fn records(&self) -> &[UserRecord] {
        &self.records
    }

    pub fn total_count(&self) -> usize {
        self.total_count
    }

    pub fn page_index(&self) -> usize {
        self.page_index
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn filter_text(&self) -> &str {
        &self.filter_text
    }

    pub fn sort(&self) -> Option<SortState> {
        self.sort
    }

    /// Installs freshly fetched records and returns to the first page.
    pub(crate) fn replace_records(&mut self, records: Vec<UserRecord>) {
        self.total_count = records.len();
        self.records = records;
        self.page_index = 0;
    }

    /// Applies a page event. Returns false (and changes nothing) for a zero page size.
    pub(crate) fn set_page(&mut self, event: PageEvent) -> bool {
        if event.page_size == 0 {
            return false;
        }
        self.page_size = event.page_size;
        self.page_index = event.page_index;
        true
    }

    pub(crate) fn set_filter(&mut self, raw: &str) {
        self.filter_text = normalize_filter(raw);
        self.page_index = 0;
    }

    pub(crate) fn toggle_sort(&mut self, key: SortKey) {
        self.sort = SortState::cycle(self.sort, key);
        self.page_index = 0;
    }

    /// Records passing the filter, in display order.
    pub fn filtered(&self) -> Vec<&UserRecord> {
        visible_records(&self.records, &self.filter_text, self.sort)
    }

    pub fn filtered_count(&self) -> usize {
        self.records
            .iter()
            .filter(|record| record_matches(record, &self.filter_text))
            .count()
    }

    /// Rows of the current page, in display order.
    pub fn page_rows(&self) -> Vec<&UserRecord> {
        let rows = self.filtered();
        let range = page_range(rows.len(), self.page_index, self.page_size);
        rows[range].to_vec()
    }

    pub fn page_count(&self) -> usize {
        page_count(self.filtered_count(), self.page_size)
    }

    pub fn range_label(&self) -> String {
        range_label(self.page_index, self.page_size, self.filtered_count())
    }

    pub fn has_previous_page(&self) -> bool {
        self.page_index > 0
    }

    pub fn has_next_page(&self) -> bool {
        self.page_index.saturating_add(1) < self.page_count()
    }

    pub fn first_page(&self) -> Option<PageEvent> {
        self.has_previous_page().then(|| self.page_event(0))
    }

    pub fn previous_page(&self) -> Option<PageEvent> {
        self.has_previous_page()
            .then(|| self.page_event(self.page_index - 1))
    }

    pub fn next_page(&self) -> Option<PageEvent> {
        self.has_next_page()
            .then(|| self.page_event(self.page_index + 1))
    }

    pub fn last_page(&self) -> Option<PageEvent> {
        self.has_next_page()
            .then(|| self.page_event(self.page_count() - 1))
    }

    /// Page event for a new page size that keeps the first visible row on screen.
    pub fn resize_page(&self, page_size: usize) -> PageEvent {
        let first_row = self.page_index.saturating_mul(self.page_size);
        PageEvent {
            page_size,
            page_index: first_row.checked_div(page_size).unwrap_or(0),
        }
    }

    fn page_event(&self, page_index: usize) -> PageEvent {
        PageEvent {
            page_size: self.page_size,
            page_index,
        }
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_PAGE_SIZE)
    }
}
