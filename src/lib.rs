//! A minimal greeting REST API with generated OpenAPI documentation.
//!
//! Exposes a single plain-text hello endpoint plus its machine-readable
//! description, served alongside a Swagger UI.

use std::time::Duration;

use axum::{
    BoxError, Router,
    error_handling::HandleErrorLayer,
    http::{StatusCode, Uri},
    routing::get,
};
use tower::ServiceBuilder;
use tower_http::{compression::CompressionLayer, limit::RequestBodyLimitLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub mod apidoc;
pub mod args;
pub mod errors;
pub mod routes;

use crate::apidoc::ApiDoc;
use crate::errors::ProblemDetail;

/// Assembles the router: the hello route, the OpenAPI document with its
/// Swagger UI, and the middleware stack. The document is built once here
/// and never mutated afterwards.
pub fn app() -> Router {
    Router::new()
        .route("/api/v1/hello", get(routes::hello::get))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-doc/openapi.json", ApiDoc::openapi()))
        .fallback(not_found)
        .layer(
            ServiceBuilder::new()
                .layer(HandleErrorLayer::new(handle_middleware_error))
                .load_shed()
                .concurrency_limit(512)
                .timeout(Duration::from_secs(10)),
        )
        .layer(CompressionLayer::new())
        .layer(RequestBodyLimitLayer::new(1024))
}

async fn not_found(uri: Uri) -> ProblemDetail {
    ProblemDetail::new(StatusCode::NOT_FOUND, "The requested resource was not found.")
        .with_instance(uri.path())
}

async fn handle_middleware_error(error: BoxError) -> ProblemDetail {
    if error.is::<tower::timeout::error::Elapsed>() {
        ProblemDetail::new(
            StatusCode::REQUEST_TIMEOUT,
            "Request took too long to complete.",
        )
    } else if error.is::<tower::load_shed::error::Overloaded>() {
        ProblemDetail::new(
            StatusCode::SERVICE_UNAVAILABLE,
            "Server is under heavy load, try again later.",
        )
    } else {
        log::error!("unhandled middleware error: {error}");
        ProblemDetail::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            "An internal server error occurred. Please try again later.",
        )
    }
}
