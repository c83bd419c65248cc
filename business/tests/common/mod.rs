//! Shared helpers for the business integration tests: sample records, a mock
//! `/users` backend and a loop that drives a [`UsersTable`] until it is idle.

#![allow(dead_code)]

use std::time::{Duration, Instant};

use chrono::Utc;
use roster_business::{BusinessConfig, UsersApi, UsersTable};
use serde_json::{Value, json};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const ROLES: [&str; 5] = [
    "Developer",
    "Designer",
    "Manager",
    "QA Engineer",
    "Product Manager",
];

/// JSON for one user as json-server would return it.
pub fn user_json(id: u64) -> Value {
    json!({
        "id": id,
        "name": format!("User {id}"),
        "email": format!("user{id}@example.com"),
        "role": ROLES[(id as usize) % ROLES.len()],
        "status": if id % 2 == 0 { "Inactive" } else { "Active" },
        "joinDate": format!("2024-01-{:02}", id.min(28)),
    })
}

pub fn users_json(ids: impl IntoIterator<Item = u64>) -> Value {
    Value::Array(ids.into_iter().map(user_json).collect())
}

/// A paged `GET /users` response with `X-Total-Count`.
pub fn page_response(body: Value, total: usize) -> ResponseTemplate {
    ResponseTemplate::new(200)
        .insert_header("X-Total-Count", total.to_string().as_str())
        .set_body_json(body)
}

pub struct TestContext {
    pub mock_server: MockServer,
    pub api: UsersApi,
}

impl TestContext {
    pub async fn new() -> Self {
        let _ = env_logger::builder().is_test(true).try_init();
        let mock_server = MockServer::start().await;
        let api = UsersApi::new(BusinessConfig::new(mock_server.uri()));
        Self { mock_server, api }
    }

    pub fn table(&self) -> UsersTable {
        UsersTable::new(self.api.clone())
    }

    /// Mounts `GET /users?_page={page}` returning `body` with the given total.
    pub async fn mock_page(&self, page: usize, body: Value, total: usize) {
        Mock::given(method("GET"))
            .and(path("/users"))
            .and(query_param("_page", page.to_string()))
            .respond_with(page_response(body, total))
            .mount(&self.mock_server)
            .await;
    }

    /// Requests received so far with the given method.
    pub async fn requests(&self, http_method: &str) -> Vec<wiremock::Request> {
        self.mock_server
            .received_requests()
            .await
            .unwrap_or_default()
            .into_iter()
            .filter(|request| request.method.as_str() == http_method)
            .collect()
    }
}

/// Calls `sync` until the table has nothing left in flight.
pub async fn settle(table: &mut UsersTable) {
    let timeout = Duration::from_secs(5);
    let start = Instant::now();

    loop {
        table.sync(Utc::now());
        if !table.is_busy() {
            break;
        }
        assert!(
            start.elapsed() < timeout,
            "Timed out waiting for the users table to settle"
        );
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
}

pub fn names(table: &UsersTable) -> Vec<String> {
    table.users().iter().map(|user| user.name.clone()).collect()
}
