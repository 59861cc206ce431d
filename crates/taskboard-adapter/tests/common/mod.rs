/*
[INPUT]:  Test configuration and mock server requirements
[OUTPUT]: Shared test utilities, fixtures, and mock helpers
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new test patterns or fixtures
*/

//! Common test utilities for taskboard-adapter tests

use taskboard_adapter::{ClientConfig, TaskboardClient};
use wiremock::MockServer;

/// Setup a mock HTTP server for testing
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// Client pointed at the mock server
pub fn client_for(server: &MockServer) -> TaskboardClient {
    TaskboardClient::with_config_and_base_url(ClientConfig::default(), &server.uri())
        .expect("client init")
}

/// Wire task record in the remote vocabulary
pub fn remote_task(id: i64, title: &str, status: &str, board_id: i64) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "slug": format!("task-{id}"),
        "title": title,
        "description": "",
        "status": status,
        "board_id": board_id,
        "created_at": "2024-01-01T00:00:00Z",
        "created_by": { "id": 1, "name": "Test User", "email": "test@example.com" },
        "updated_at": "2024-01-01T00:00:00Z",
        "updated_by": { "id": null, "name": null, "email": null }
    })
}
