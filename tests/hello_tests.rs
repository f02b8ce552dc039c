//! HTTP tests against the assembled router.

use axum_test::TestServer;
use greeting_api::{app, routes::hello::GREETING};
use serde_json::Value;

#[tokio::test]
async fn hello_returns_the_fixed_greeting() {
    let server = TestServer::new(app()).unwrap();

    let response = server.get("/api/v1/hello").await;

    response.assert_status_ok();
    response.assert_text(GREETING);
}

#[tokio::test]
async fn hello_is_served_as_plain_text() {
    let server = TestServer::new(app()).unwrap();

    let response = server.get("/api/v1/hello").await;

    let content_type = response.header("content-type");
    let content_type = content_type.to_str().unwrap();
    assert!(
        content_type.starts_with("text/plain"),
        "unexpected content type: {content_type}"
    );
}

#[tokio::test]
async fn hello_is_idempotent() {
    let server = TestServer::new(app()).unwrap();

    for _ in 0..3 {
        let response = server.get("/api/v1/hello").await;

        response.assert_status_ok();
        response.assert_text(GREETING);
    }
}

#[tokio::test]
async fn openapi_document_is_served() {
    let server = TestServer::new(app()).unwrap();

    let response = server.get("/api-doc/openapi.json").await;
    response.assert_status_ok();

    let document: Value = response.json();
    assert_eq!(document["info"]["version"], "v1.0");
    assert_eq!(document["info"]["license"]["name"], "Apache 2.0");

    let operation = &document["paths"]["/api/v1/hello"]["get"];
    assert_eq!(
        operation["responses"]["200"]["content"]["text/plain"]["example"],
        GREETING
    );
    assert_eq!(
        operation["responses"]["500"]["content"]["application/json"]["schema"]["$ref"],
        "#/components/schemas/ProblemDetail"
    );
}

#[tokio::test]
async fn unknown_path_yields_problem_details() {
    let server = TestServer::new(app()).unwrap();

    let response = server.get("/api/v1/nope").await;

    response.assert_status_not_found();
    let problem: Value = response.json();
    assert_eq!(problem["status"], 404);
    assert_eq!(problem["title"], "Not Found");
    assert_eq!(problem["instance"], "/api/v1/nope");
}
