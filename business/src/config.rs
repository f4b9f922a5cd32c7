use std::env::vars_os;
use std::ffi::OsString;

use log::{info, warn};
use serde::Deserialize;
use thiserror::Error;
use ustr::Ustr;

pub const DEFAULT_USERS_URL: &str = "https://jsonplaceholder.typicode.com/users";
pub const DEFAULT_PAGE_SIZE: usize = 5;
pub const DEFAULT_PAGE_SIZE_OPTIONS: [usize; 4] = [5, 10, 25, 100];

/// Only variables starting with this prefix are considered.
const ENV_PREFIX: &str = "ROSTER_";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read environment: {0}")]
    Env(#[from] serde_env::Error),
    #[error("ROSTER_USERS_URL must not be empty")]
    EmptyUsersUrl,
    #[error("ROSTER_PAGE_SIZE must be greater than zero")]
    ZeroPageSize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BusinessConfig {
    /// Endpoint returning the JSON array of users.
    pub users_url: Ustr,
    /// Rows per page when the table first renders.
    pub page_size: usize,
    /// Choices offered by the paginator; always contains `page_size`.
    pub page_size_options: Vec<usize>,
}

/// Environment view with every field optional, defaults applied in `from_raw`.
#[derive(Debug, Default, Deserialize)]
struct RawConfig {
    users_url: Option<String>,
    page_size: Option<usize>,
}

impl BusinessConfig {
    pub fn new(users_url: impl AsRef<str>) -> Self {
        Self {
            users_url: Ustr::from(users_url.as_ref()),
            ..Self::default()
        }
    }

    /// Reads `ROSTER_*` variables and applies defaults for anything unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        info!("Loading configuration from environment variables");
        Self::from_vars(vars_os())
    }

    /// Variables that are not valid Unicode are skipped, never fatal.
    fn from_vars(
        vars: impl IntoIterator<Item = (OsString, OsString)>,
    ) -> Result<Self, ConfigError> {
        let prefixed = vars.into_iter().filter_map(|(key, value)| {
            let key = key.into_string().ok()?;
            let stripped = key.strip_prefix(ENV_PREFIX)?.to_owned();
            match value.into_string() {
                Ok(value) => Some((stripped, value)),
                Err(_) => {
                    warn!("Ignoring {key}: value is not valid Unicode");
                    None
                }
            }
        });
        let raw: RawConfig = serde_env::from_iter(prefixed)?;
        Self::from_raw(raw)
    }

    fn from_raw(raw: RawConfig) -> Result<Self, ConfigError> {
        let RawConfig {
            users_url,
            page_size,
        } = raw;

        let users_url = match users_url {
            Some(url) if url.trim().is_empty() => return Err(ConfigError::EmptyUsersUrl),
            Some(url) => {
                info!("Using provided ROSTER_USERS_URL: {url}");
                Ustr::from(url.trim())
            }
            None => Ustr::from(DEFAULT_USERS_URL),
        };

        let page_size = match page_size {
            Some(0) => return Err(ConfigError::ZeroPageSize),
            Some(size) => size,
            None => DEFAULT_PAGE_SIZE,
        };

        let mut page_size_options = DEFAULT_PAGE_SIZE_OPTIONS.to_vec();
        if let Err(pos) = page_size_options.binary_search(&page_size) {
            page_size_options.insert(pos, page_size);
        }

        Ok(Self {
            users_url,
            page_size,
            page_size_options,
        })
    }
}

impl Default for BusinessConfig {
    fn default() -> Self {
        Self {
            users_url: Ustr::from(DEFAULT_USERS_URL),
            page_size: DEFAULT_PAGE_SIZE,
            page_size_options: DEFAULT_PAGE_SIZE_OPTIONS.to_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_env::from_iter;

    #[test]
    fn defaults_point_at_public_fixture() {
        let config = BusinessConfig::default();

        assert_eq!(config.users_url, Ustr::from(DEFAULT_USERS_URL));
        assert_eq!(config.page_size, 5);
        assert_eq!(config.page_size_options, vec![5, 10, 25, 100]);
    }

    #[test]
    fn new_overrides_only_the_url() {
        let config = BusinessConfig::new("http://127.0.0.1:8080/users");

        assert_eq!(config.users_url.as_str(), "http://127.0.0.1:8080/users");
        assert_eq!(config.page_size, DEFAULT_PAGE_SIZE);
    }

    #[test]
    fn empty_environment_uses_defaults() {
        let raw: RawConfig = from_iter(Vec::<(&str, &str)>::new()).unwrap();

        let config = BusinessConfig::from_raw(raw).unwrap();
        assert_eq!(config, BusinessConfig::default());
    }

    #[test]
    fn environment_overrides_url_and_page_size() {
        let raw: RawConfig = from_iter(vec![
            ("USERS_URL", "http://localhost:7788/users"),
            ("PAGE_SIZE", "10"),
        ])
        .unwrap();

        let config = BusinessConfig::from_raw(raw).unwrap();
        assert_eq!(config.users_url.as_str(), "http://localhost:7788/users");
        assert_eq!(config.page_size, 10);
    }

    #[test]
    fn prefix_is_stripped_and_other_variables_ignored() {
        let config = BusinessConfig::from_vars(vec![
            (
                OsString::from("ROSTER_USERS_URL"),
                OsString::from("http://localhost:7788/users"),
            ),
            (OsString::from("PAGE_SIZE"), OsString::from("0")),
        ])
        .unwrap();

        assert_eq!(config.users_url.as_str(), "http://localhost:7788/users");
        assert_eq!(config.page_size, DEFAULT_PAGE_SIZE);
    }

    #[cfg(unix)]
    #[test]
    fn non_unicode_variables_are_skipped() {
        use std::os::unix::ffi::OsStringExt;

        let config = BusinessConfig::from_vars(vec![
            (
                OsString::from_vec(b"UNRELATED_\xff".to_vec()),
                OsString::from("x"),
            ),
            (
                OsString::from("HOME"),
                OsString::from_vec(b"/home/\xfe".to_vec()),
            ),
            (
                OsString::from("ROSTER_USERS_URL"),
                OsString::from_vec(b"http://\xff".to_vec()),
            ),
            (OsString::from("ROSTER_PAGE_SIZE"), OsString::from("10")),
        ])
        .unwrap();

        assert_eq!(config.users_url.as_str(), DEFAULT_USERS_URL);
        assert_eq!(config.page_size, 10);
    }

    #[test]
    fn custom_page_size_joins_the_options_in_order() {
        let raw = RawConfig {
            users_url: None,
            page_size: Some(7),
        };

        let config = BusinessConfig::from_raw(raw).unwrap();
        assert_eq!(config.page_size_options, vec![5, 7, 10, 25, 100]);
    }

    #[test]
    fn zero_page_size_is_rejected() {
        let raw = RawConfig {
            users_url: None,
            page_size: Some(0),
        };

        let err = BusinessConfig::from_raw(raw).unwrap_err();
        assert!(matches!(err, ConfigError::ZeroPageSize));
    }

    #[test]
    fn blank_url_is_rejected() {
        let raw = RawConfig {
            users_url: Some("   ".to_owned()),
            page_size: None,
        };

        let err = BusinessConfig::from_raw(raw).unwrap_err();
        assert!(err.to_string().contains("ROSTER_USERS_URL"));
    }
}
