/// Widget-local state that does not belong in the business layer.
#[derive(Debug, Default, Clone)]
pub struct UsersTableUiState {
    /// Filter input exactly as typed; the table only sees its normalized form.
    pub filter_input: String,
}
