//! Integration tests for the users panel: listing, paging, columns and modals.
//!
//! Clicks inside `TableBuilder` rows are not propagated by kittest, so row
//! actions (Edit/Delete) are started through the app state and the resulting
//! modal is then driven with real clicks.

#![cfg(not(target_arch = "wasm32"))]

mod common;

use common::{TestCtx, mock_page, page_response, users_json};
use kittest::Queryable;
use wiremock::matchers::{method, path};
use wiremock::{Mock, ResponseTemplate};

#[tokio::test]
async fn test_users_are_listed_after_initial_fetch() {
    let mock_server = TestCtx::mock_server().await;
    mock_page(&mock_server, 1, users_json(1..=5), 6).await;

    let mut ctx = TestCtx::start(mock_server);
    ctx.settle().await;
    let harness = ctx.harness_mut();

    assert!(harness.query_by_label_contains("User 1").is_some());
    assert!(harness.query_by_label_contains("user5@example.com").is_some());
    assert!(harness.query_by_label("Showing 5 of 6 entries").is_some());
    assert!(harness.query_by_label("Page 1 of 2").is_some());
}

#[tokio::test]
async fn test_empty_backend_shows_placeholder_row() {
    let mock_server = TestCtx::mock_server().await;
    mock_page(&mock_server, 1, users_json([]), 0).await;

    let mut ctx = TestCtx::start(mock_server);
    ctx.settle().await;

    assert!(ctx.harness_mut().query_by_label("No users found").is_some());
}

#[tokio::test]
async fn test_fetch_failure_replaces_table_with_error() {
    let mock_server = TestCtx::mock_server().await;
    Mock::given(method("GET"))
        .and(path("/users"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let mut ctx = TestCtx::start(mock_server);
    ctx.settle().await;
    let harness = ctx.harness_mut();

    assert!(harness.query_by_label("Failed to fetch users.").is_some());
    assert!(harness.query_by_label("No users found").is_none());
}

#[tokio::test]
async fn test_next_button_loads_second_page() {
    let mock_server = TestCtx::mock_server().await;
    mock_page(&mock_server, 1, users_json(1..=5), 6).await;
    mock_page(&mock_server, 2, users_json([6]), 6).await;

    let mut ctx = TestCtx::start(mock_server);
    ctx.settle().await;

    ctx.harness_mut().get_by_label("Next").click();
    ctx.settle().await;
    let harness = ctx.harness_mut();

    assert!(harness.query_by_label_contains("User 6").is_some());
    assert!(harness.query_by_label_contains("user1@example.com").is_none());
    assert!(harness.query_by_label("Showing 6 of 6 entries").is_some());
    assert!(harness.query_by_label("Page 2 of 2").is_some());
    assert_eq!(harness.state().state().users.query().page, 2);
}

#[tokio::test]
async fn test_column_picker_hides_email_column() {
    let mock_server = TestCtx::mock_server().await;
    mock_page(&mock_server, 1, users_json(1..=2), 2).await;

    let mut ctx = TestCtx::start(mock_server);
    ctx.settle().await;
    assert!(
        ctx.harness_mut()
            .query_by_label_contains("user1@example.com")
            .is_some()
    );

    ctx.harness_mut().get_by_label("Columns").click();
    ctx.settle().await;
    ctx.harness_mut().get_by_label("Email").click();
    ctx.settle().await;

    let harness = ctx.harness_mut();
    assert!(
        !harness
            .state()
            .state()
            .users
            .columns()
            .is_visible(roster_business::UserField::Email)
    );
    assert!(harness.query_by_label_contains("user1@example.com").is_none());
    assert!(harness.query_by_label_contains("User 1").is_some());
}

#[tokio::test]
async fn test_empty_create_form_shows_errors_without_posting() {
    let mock_server = TestCtx::mock_server().await;
    mock_page(&mock_server, 1, users_json(1..=2), 2).await;

    let mut ctx = TestCtx::start(mock_server);
    ctx.settle().await;

    ctx.harness_mut().get_by_label("Add User").click();
    ctx.settle().await;
    assert!(ctx.harness_mut().query_by_label("Create User").is_some());

    ctx.harness_mut().get_by_label("Create").click();
    ctx.settle().await;
    let harness = ctx.harness_mut();

    assert!(harness.query_by_label("Name is required").is_some());
    assert!(harness.query_by_label("Email is required").is_some());
    assert!(harness.query_by_label("Role is required").is_some());
    assert!(harness.state().state().users.form().is_some());

    let posts = ctx
        .mock_server
        .received_requests()
        .await
        .unwrap_or_default()
        .into_iter()
        .filter(|request| request.method.as_str() == "POST")
        .count();
    assert_eq!(posts, 0);
}

#[tokio::test]
async fn test_cancel_closes_the_form() {
    let mock_server = TestCtx::mock_server().await;
    mock_page(&mock_server, 1, users_json(1..=2), 2).await;

    let mut ctx = TestCtx::start(mock_server);
    ctx.settle().await;

    ctx.harness_mut().get_by_label("Add User").click();
    ctx.settle().await;
    ctx.harness_mut().get_by_label("Cancel").click();
    ctx.settle().await;

    let harness = ctx.harness_mut();
    assert!(harness.state().state().users.form().is_none());
    assert!(harness.query_by_label("Create User").is_none());
}

#[tokio::test]
async fn test_edit_form_is_prefilled() {
    let mock_server = TestCtx::mock_server().await;
    mock_page(&mock_server, 1, users_json(1..=2), 2).await;

    let mut ctx = TestCtx::start(mock_server);
    ctx.settle().await;

    {
        let users = &mut ctx.harness_mut().state_mut().state_mut().users;
        let user = users.users()[1].clone();
        users.open_edit(&user);
    }
    ctx.settle().await;
    let harness = ctx.harness_mut();

    assert!(harness.query_by_label("Edit User").is_some());
    assert!(harness.query_by_label("Update").is_some());
    let form = harness.state().state().users.form().cloned();
    assert_eq!(form.map(|form| form.data.name), Some("User 2".to_owned()));
}

#[tokio::test]
async fn test_confirming_delete_removes_row_after_refetch() {
    let mock_server = TestCtx::mock_server().await;

    Mock::given(method("DELETE"))
        .and(path("/users/2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let mut ctx = TestCtx::start(mock_server);

    // Served until the delete lands, then replaced by the shorter list
    let before = Mock::given(method("GET"))
        .and(path("/users"))
        .respond_with(page_response(users_json(1..=3), 3))
        .mount_as_scoped(&ctx.mock_server)
        .await;
    ctx.settle().await;

    {
        let users = &mut ctx.harness_mut().state_mut().state_mut().users;
        let user = users.users()[1].clone();
        users.request_delete(&user);
    }
    ctx.settle().await;
    assert!(
        ctx.harness_mut()
            .query_by_label("Are you sure you want to delete this user?")
            .is_some()
    );

    drop(before);
    Mock::given(method("GET"))
        .and(path("/users"))
        .respond_with(page_response(users_json([1, 3]), 2))
        .mount(&ctx.mock_server)
        .await;

    ctx.harness_mut().get_by_label("Confirm Delete").click();
    ctx.settle().await;
    let harness = ctx.harness_mut();

    assert!(harness.state().state().users.pending_delete().is_none());
    assert!(harness.query_by_label_contains("User 2").is_none());
    assert!(harness.query_by_label("Showing 2 of 2 entries").is_some());
}
