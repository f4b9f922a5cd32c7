//! Filter, sort and page helpers.
//!
//! Rendering always runs the same pipeline: filter the fetched records, sort
//! what is left, then cut out the current page.

use std::cmp::Ordering;
use std::ops::Range;

use crate::user::UserRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortKey {
    Id,
    Name,
    Username,
}

impl SortKey {
    /// Columns in display order.
    pub const ALL: [SortKey; 3] = [SortKey::Id, SortKey::Name, SortKey::Username];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Id => "ID",
            Self::Name => "Name",
            Self::Username => "Username",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn arrow(&self) -> &'static str {
        match self {
            Self::Ascending => "⬆",
            Self::Descending => "⬇",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortState {
    pub key: SortKey,
    pub direction: SortDirection,
}

impl SortState {
    pub fn ascending(key: SortKey) -> Self {
        Self {
            key,
            direction: SortDirection::Ascending,
        }
    }

    pub fn descending(key: SortKey) -> Self {
        Self {
            key,
            direction: SortDirection::Descending,
        }
    }

    /// Sort after clicking the header of `key`.
    ///
    /// The same column goes ascending, descending, then unsorted. Another
    /// column always starts ascending.
    pub fn cycle(current: Option<SortState>, key: SortKey) -> Option<SortState> {
        match current {
            Some(state) if state.key == key => match state.direction {
                SortDirection::Ascending => Some(Self::descending(key)),
                SortDirection::Descending => None,
            },
            _ => Some(Self::ascending(key)),
        }
    }
}

/// Trims and lowercases raw filter input.
pub fn normalize_filter(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Whether `record` passes an already normalized `filter`.
pub fn record_matches(record: &UserRecord, filter: &str) -> bool {
    if filter.is_empty() {
        return true;
    }

    record.id.to_string().contains(filter)
        || record.name.to_lowercase().contains(filter)
        || record.username.to_lowercase().contains(filter)
}

/// Case-insensitive, so "bob" sorts before "Carl".
fn compare_text(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}

fn compare(a: &UserRecord, b: &UserRecord, key: SortKey) -> Ordering {
    match key {
        SortKey::Id => a.id.cmp(&b.id),
        SortKey::Name => compare_text(&a.name, &b.name),
        SortKey::Username => compare_text(&a.username, &b.username),
    }
}

/// Stable sort; equal keys keep their fetch order in both directions.
pub fn sort_records(records: &mut [&UserRecord], sort: SortState) {
    records.sort_by(|a, b| {
        let ordering = compare(a, b, sort.key);
        match sort.direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    });
}

/// Filtered and sorted view over `records`, before pagination.
pub fn visible_records<'a>(
    records: &'a [UserRecord],
    filter: &str,
    sort: Option<SortState>,
) -> Vec<&'a UserRecord> {
    let mut rows: Vec<&UserRecord> = records
        .iter()
        .filter(|record| record_matches(record, filter))
        .collect();
    if let Some(sort) = sort {
        sort_records(&mut rows, sort);
    }
    rows
}

/// Index range of the page inside a list of `len` rows. Empty past the end.
pub fn page_range(len: usize, page_index: usize, page_size: usize) -> Range<usize> {
    if page_size == 0 {
        return 0..0;
    }

    let start = page_index.saturating_mul(page_size);
    if start >= len {
        return len..len;
    }
    start..start.saturating_add(page_size).min(len)
}

pub fn page_count(len: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    len.div_ceil(page_size)
}

/// Paginator caption, e.g. `6 – 10 of 12`.
pub fn range_label(page_index: usize, page_size: usize, len: usize) -> String {
    if len == 0 || page_size == 0 {
        return format!("0 of {len}");
    }

    let start = page_index.saturating_mul(page_size);
    let end = if start < len {
        start.saturating_add(page_size).min(len)
    } else {
        start.saturating_add(page_size)
    };
    format!("{} – {} of {}", start.saturating_add(1), end, len)
}
