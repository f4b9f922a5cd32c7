use std::fmt::Debug;
use std::future::Future;
use std::pin::Pin;

use log::{error, info};
use ustr::Ustr;

use crate::config::BusinessConfig;
use crate::error::FetchError;
use crate::http::{Client, RequestBuilder};
use crate::user::UserRecord;

pub type FetchResult = Result<Vec<UserRecord>, FetchError>;
pub type FetchFuture = Pin<Box<dyn Future<Output = FetchResult> + Send + 'static>>;

/// Source of the user list.
///
/// Each call starts one request; the returned future resolves exactly once.
pub trait UserFetchService: Send + Sync + Debug {
    fn fetch_users(&self) -> FetchFuture;
}

/// Fetches users with a single `GET` against a fixed URL.
#[derive(Debug, Clone)]
pub struct HttpUserFetcher {
    client: Client,
    url: Ustr,
}

impl HttpUserFetcher {
    pub fn new(url: Ustr) -> Self {
        Self {
            client: Client::new(),
            url,
        }
    }

    pub fn from_config(config: &BusinessConfig) -> Self {
        Self::new(config.users_url)
    }

    pub fn url(&self) -> Ustr {
        self.url
    }
}

impl UserFetchService for HttpUserFetcher {
    fn fetch_users(&self) -> FetchFuture {
        let request = self
            .client
            .get(self.url.as_str())
            .header("accept", "application/json");

        Box::pin(request_users(request))
    }
}

async fn request_users(request: RequestBuilder) -> FetchResult {
    info!("Fetching users from {}", request.url());
    let response = request.send().await.inspect_err(|err| {
        error!("Users request failed: {err}");
    })?;

    if !response.is_success() {
        error!("Users endpoint returned status {}", response.status);
        return Err(FetchError::Status {
            status: response.status,
        });
    }

    let users: Vec<UserRecord> = response.json().inspect_err(|err| {
        error!("Users body could not be decoded: {err}");
    })?;
    info!("Fetched {} users", users.len());
    Ok(users)
}

#[cfg(any(test, feature = "test-utils"))]
pub use mock::MockUserFetcher;

#[cfg(any(test, feature = "test-utils"))]
mod mock {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    use super::*;

    /// Canned fetcher for tests. Counts calls and can hold its answer back.
    #[derive(Debug, Default)]
    pub struct MockUserFetcher {
        pub response: Option<FetchResult>,
        pub delay: Option<Duration>,
        calls: AtomicUsize,
    }

    impl MockUserFetcher {
        pub fn with_users(users: Vec<UserRecord>) -> Self {
            Self {
                response: Some(Ok(users)),
                ..Self::default()
            }
        }

        pub fn with_error(err: FetchError) -> Self {
            Self {
                response: Some(Err(err)),
                ..Self::default()
            }
        }

        pub fn delayed(mut self, delay: Duration) -> Self {
            self.delay = Some(delay);
            self
        }

        pub fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    impl UserFetchService for MockUserFetcher {
        fn fetch_users(&self) -> FetchFuture {
            self.calls.fetch_add(1, Ordering::SeqCst);
            let response = self
                .response
                .clone()
                .unwrap_or_else(|| Err(FetchError::network("MockUserFetcher: no response set")));
            let delay = self.delay;

            Box::pin(async move {
                if let Some(delay) = delay {
                    tokio::time::sleep(delay).await;
                }
                response
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FetchErrorKind;
    use serde_json::json;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn fetcher_for(server: &MockServer) -> HttpUserFetcher {
        HttpUserFetcher::new(Ustr::from(format!("{}/users", server.uri()).as_str()))
    }

    #[tokio::test]
    async fn test_fetch_users_success() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/users"))
            .and(header("accept", "application/json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                { "id": 1, "name": "Leanne Graham", "username": "Bret", "email": "a@b.c" },
                { "id": 2, "name": "Ervin Howell", "username": "Antonette" }
            ])))
            .expect(1)
            .mount(&mock_server)
            .await;

        let users = fetcher_for(&mock_server).fetch_users().await.unwrap();

        assert_eq!(
            users,
            vec![
                UserRecord::new(1, "Leanne Graham", "Bret"),
                UserRecord::new(2, "Ervin Howell", "Antonette"),
            ]
        );
    }

    #[tokio::test]
    async fn test_fetch_users_server_error_is_network_kind() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/users"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&mock_server)
            .await;

        let err = fetcher_for(&mock_server)
            .fetch_users()
            .await
            .unwrap_err();

        assert_eq!(err, FetchError::Status { status: 500 });
        assert_eq!(err.kind(), FetchErrorKind::Network);
    }

    #[tokio::test]
    async fn test_fetch_users_malformed_body_is_decode_kind() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/users"))
            .respond_with(ResponseTemplate::new(200).set_body_string("{not json"))
            .mount(&mock_server)
            .await;

        let err = fetcher_for(&mock_server)
            .fetch_users()
            .await
            .unwrap_err();

        assert_eq!(err.kind(), FetchErrorKind::Decode);
    }

    #[tokio::test]
    async fn test_fetch_users_wrong_shape_is_decode_kind() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/users"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "users": [] })))
            .mount(&mock_server)
            .await;

        let err = fetcher_for(&mock_server)
            .fetch_users()
            .await
            .unwrap_err();

        assert_eq!(err.kind(), FetchErrorKind::Decode);
    }

    #[tokio::test]
    async fn test_fetch_users_unreachable_is_network_kind() {
        let fetcher = HttpUserFetcher::new(Ustr::from("http://127.0.0.1:9/users"));

        let err = fetcher.fetch_users().await.unwrap_err();

        assert!(matches!(err, FetchError::Network { .. }));
    }

    #[test]
    fn test_from_config_uses_users_url() {
        let config = BusinessConfig::new("http://localhost:3000/users");

        assert_eq!(
            HttpUserFetcher::from_config(&config).url().as_str(),
            "http://localhost:3000/users"
        );
    }

    #[tokio::test]
    async fn test_mock_counts_calls() {
        let mock = MockUserFetcher::with_users(vec![UserRecord::new(1, "Ana", "ana")]);

        assert_eq!(mock.fetch_users().await.unwrap().len(), 1);
        assert_eq!(mock.fetch_users().await.unwrap().len(), 1);
        assert_eq!(mock.calls(), 2);
    }

    #[tokio::test]
    async fn test_mock_without_response_errors() {
        let err = MockUserFetcher::default().fetch_users().await.unwrap_err();

        assert_eq!(err.kind(), FetchErrorKind::Network);
    }
}
