use serde::{Deserialize, Serialize};

/// A user as returned by the users endpoint.
///
/// Only the three displayed fields are kept; anything else in the payload
/// (email, address, company, ...) is ignored while decoding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: i64,
    pub name: String,
    pub username: String,
}

impl UserRecord {
    pub fn new(id: i64, name: impl Into<String>, username: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            username: username.into(),
        }
    }
}
