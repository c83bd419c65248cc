//! Shared harness setup for the users panel tests.

use std::time::Duration;

use egui_kittest::Harness;
use roster_ui::RosterApp;
use roster_ui::state::State;
use serde_json::{Value, json};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const ROLES: [&str; 5] = [
    "Developer",
    "Designer",
    "Manager",
    "QA Engineer",
    "Product Manager",
];

pub fn user_json(id: u64) -> Value {
    json!({
        "id": id,
        "name": format!("User {id}"),
        "email": format!("user{id}@example.com"),
        "role": ROLES[(id % 5) as usize],
        "status": if id % 2 == 0 { "Inactive" } else { "Active" },
        "joinDate": format!("2024-01-{id:02}"),
    })
}

pub fn users_json(ids: impl IntoIterator<Item = u64>) -> Value {
    Value::Array(ids.into_iter().map(user_json).collect())
}

pub fn page_response(body: Value, total: usize) -> ResponseTemplate {
    ResponseTemplate::new(200)
        .insert_header("X-Total-Count", total.to_string().as_str())
        .set_body_json(body)
}

/// Test context: the mock backend must outlive the harness.
pub struct TestCtx<'a> {
    pub mock_server: MockServer,
    harness: Harness<'a, RosterApp>,
}

impl<'a> TestCtx<'a> {
    /// Starts a mock backend; mount mocks on it before calling [`TestCtx::start`].
    pub async fn mock_server() -> MockServer {
        let _ = env_logger::builder().is_test(true).try_init();
        MockServer::start().await
    }

    pub fn start(mock_server: MockServer) -> Self {
        let state = State::test(mock_server.uri());
        let app = RosterApp::new(state);
        let harness = Harness::new_eframe(|_| app);

        Self {
            mock_server,
            harness,
        }
    }

    pub fn harness_mut(&mut self) -> &mut Harness<'a, RosterApp> {
        &mut self.harness
    }

    #[allow(unused)]
    pub fn harness(&self) -> &Harness<'a, RosterApp> {
        &self.harness
    }

    /// Runs frames while giving spawned requests time to finish.
    pub async fn settle(&mut self) {
        for _ in 0..10 {
            self.harness.step();
            tokio::time::sleep(Duration::from_millis(50)).await;
        }
        self.harness.step();
    }
}

/// Mounts a paged response for `_page=page` with the default page size.
pub async fn mock_page(mock_server: &MockServer, page: usize, body: Value, total: usize) {
    Mock::given(method("GET"))
        .and(path("/users"))
        .and(query_param("_page", page.to_string().as_str()))
        .respond_with(page_response(body, total))
        .mount(mock_server)
        .await;
}
