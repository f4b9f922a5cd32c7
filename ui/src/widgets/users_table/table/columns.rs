//! Column definitions for the users table.

use egui_extras::Column;

/// Fixed column widths for consistent table layout
pub const ID_WIDTH: f32 = 60.0;
pub const ROW_HEIGHT: f32 = 28.0;
pub const HEADER_HEIGHT: f32 = 24.0;

/// Columns in order: ID (fixed), Name and Username (sharing the rest).
#[inline]
pub fn table_columns() -> Vec<Column> {
    vec![
        Column::exact(ID_WIDTH),             // ID
        Column::remainder().at_least(140.0), // Name
        Column::remainder().at_least(100.0), // Username
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use roster_business::SortKey;

    #[test]
    fn one_column_per_sort_key() {
        assert_eq!(table_columns().len(), SortKey::ALL.len());
    }
}
