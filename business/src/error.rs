use std::fmt;

use thiserror::Error;

use crate::http::HttpError;

/// Why a users fetch failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// The endpoint could not be reached or the transfer broke off.
    #[error("request failed: {message}")]
    Network { message: String },

    /// The endpoint answered with a non-2xx status.
    #[error("API returned status: {status}")]
    Status { status: u16 },

    /// The body was not a JSON array of users.
    #[error("failed to decode users: {message}")]
    Decode { message: String },
}

/// Coarse failure class shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchErrorKind {
    Network,
    Decode,
}

impl FetchErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Network => "network error",
            Self::Decode => "decode error",
        }
    }
}

impl fmt::Display for FetchErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FetchError {
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network {
            message: message.into(),
        }
    }

    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    pub fn kind(&self) -> FetchErrorKind {
        match self {
            Self::Network { .. } | Self::Status { .. } => FetchErrorKind::Network,
            Self::Decode { .. } => FetchErrorKind::Decode,
        }
    }
}

impl From<HttpError> for FetchError {
    fn from(err: HttpError) -> Self {
        Self::Network {
            message: err.message,
        }
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(err: serde_json::Error) -> Self {
        Self::decode(err.to_string())
    }
}
