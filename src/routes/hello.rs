use axum::{http::StatusCode, response::IntoResponse};

/// Greeting served by [`get`], byte-identical to the example advertised in
/// the OpenAPI document.
pub const GREETING: &str = "Hello, GraalVM Native Image!";

/// Say Hello
///
/// Returns a greeting message.
#[utoipa::path(
    get,
    path = "/api/v1/hello",
    tag = "hello",
    responses(
        (status = 200, description = "Successful operation", body = String,
         content_type = "text/plain", example = json!(GREETING))
    )
)]
pub async fn get() -> impl IntoResponse {
    log::debug!("fn: routes::hello::get");

    (StatusCode::OK, GREETING)
}
