//! Users table domain module.
//!
//! This module is the single home for:
//! - The pure filter/sort/paginate pipeline over fetched records (`query`)
//! - The view state the table renders from (`view_state`)
//! - The controller that owns the fetch and reacts to user events (`table_view`)
//!
//! UI code under `ui/src/widgets/**` only reads from [`TableView`] and reports
//! events back through its `on_*` handlers.

pub mod query;
pub mod table_view;
pub mod view_state;

pub use query::{SortDirection, SortKey, SortState};
pub use table_view::{LoadState, TableView};
pub use view_state::{PageEvent, ViewState};
