pub mod users_table;

pub use users_table::{UsersTableUiState, users_table};
