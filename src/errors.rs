use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use utoipa::ToSchema;

/// RFC 7807 problem details, the body shape of every non-2xx response.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ProblemDetail {
    /// URI identifying the problem type.
    #[serde(rename = "type")]
    #[schema(example = "about:blank")]
    pub kind: String,
    /// Short summary, the reason phrase of the status code.
    #[schema(example = "Internal Server Error")]
    pub title: String,
    /// HTTP status code this problem was served with.
    #[schema(example = 500)]
    pub status: u16,
    /// Explanation specific to this occurrence.
    #[schema(example = "An internal server error occurred. Please try again later.")]
    pub detail: String,
    /// Path of the request that produced the problem.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance: Option<String>,
}

impl ProblemDetail {
    pub fn new(status: StatusCode, detail: impl Into<String>) -> ProblemDetail {
        ProblemDetail {
            kind: String::from("about:blank"),
            title: status.canonical_reason().unwrap_or("Unknown").to_string(),
            status: status.as_u16(),
            detail: detail.into(),
            instance: None,
        }
    }

    pub fn with_instance(mut self, instance: impl Into<String>) -> ProblemDetail {
        self.instance = Some(instance.into());
        self
    }
}

impl IntoResponse for ProblemDetail {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        (status, Json(self)).into_response()
    }
}
