use egui_kittest::Harness;
use roster_ui::RosterApp;
use roster_ui::state::State;
use serde_json::Value;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub struct TestCtx<'a> {
    /// Mock server must be retained to keep HTTP endpoints alive during tests.
    mock_server: MockServer,
    harness: Harness<'a, RosterApp>,
}

impl<'a> TestCtx<'a> {
    pub fn harness_mut(&mut self) -> &mut Harness<'a, RosterApp> {
        &mut self.harness
    }

    #[allow(unused)]
    pub fn mock_server(&self) -> &MockServer {
        &self.mock_server
    }

    /// App whose users endpoint answers `200` with `body`.
    pub async fn new_app(body: Value) -> Self {
        Self::with_response(ResponseTemplate::new(200).set_body_json(body)).await
    }

    #[allow(unused)]
    pub async fn new_app_with_status(status_code: u16) -> Self {
        Self::with_response(ResponseTemplate::new(status_code)).await
    }

    pub async fn with_response(response: ResponseTemplate) -> Self {
        let _ = env_logger::builder().is_test(true).try_init();
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/users"))
            .respond_with(response)
            .mount(&mock_server)
            .await;

        let state = State::test(mock_server.uri());
        let app = RosterApp::new(state);
        let harness = Harness::new_eframe(|_| app);

        Self {
            mock_server,
            harness,
        }
    }

    /// Lets the fetch finish, then renders a few frames.
    pub async fn settle(&mut self) {
        self.harness.step();
        tokio::time::sleep(std::time::Duration::from_millis(200)).await;
        for _ in 0..5 {
            self.harness.step();
        }
    }
}

#[allow(unused)]
pub fn users_json(count: i64) -> Value {
    let users: Vec<Value> = (1..=count)
        .map(|id| {
            serde_json::json!({
                "id": id,
                "name": format!("User {id}"),
                "username": format!("user{id}"),
                "email": format!("user{id}@example.com"),
                "phone": "1-770-736-8031 x56442",
            })
        })
        .collect();
    Value::Array(users)
}
