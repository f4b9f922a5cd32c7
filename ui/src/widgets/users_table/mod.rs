//! Users table widget.
//!
//! Split into:
//! - `panel`: filter input, status line and overall layout
//! - `table`: header, rows and cells on top of `egui_extras::TableBuilder`
//! - `paginator`: page size selector and page navigation
//!
//! Nothing here owns domain state. Reads go through [`TableView`] and every
//! user action is reported back through its `on_*` handlers.
//!
//! [`TableView`]: roster_business::TableView

mod paginator;
mod panel;
mod state;
pub mod table;

pub use paginator::paginator;
pub use panel::users_table;
pub use state::UsersTableUiState;
