//! OpenAPI document assembly.

use utoipa::{
    Modify, OpenApi,
    openapi::{ContentBuilder, Ref, RefOr, Response, ResponseBuilder},
};

use crate::errors::ProblemDetail;
use crate::routes::hello;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "GraalVM Native Example REST API",
        description = "GraalVM Native Example REST API Documentation",
        version = "v1.0",
        contact(
            name = "Şuayb Şimşek",
            url = "https://github.com/susimsek",
            email = "suaybsimsek58@gmail.com"
        ),
        license(name = "Apache 2.0", url = "https://www.apache.org/licenses/LICENSE-2.0")
    ),
    paths(hello::get),
    components(schemas(ProblemDetail)),
    tags((name = "hello", description = "Endpoints for Hello World operations")),
    modifiers(&ErrorResponses)
)]
pub struct ApiDoc;

/// Adds the shared problem-details 500 response to every operation.
///
/// Runs after path collection, so it also covers routes registered later.
pub struct ErrorResponses;

impl Modify for ErrorResponses {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        for path_item in openapi.paths.paths.values_mut() {
            let operations = [
                path_item.get.as_mut(),
                path_item.put.as_mut(),
                path_item.post.as_mut(),
                path_item.delete.as_mut(),
                path_item.options.as_mut(),
                path_item.head.as_mut(),
                path_item.patch.as_mut(),
                path_item.trace.as_mut(),
            ];

            for operation in operations.into_iter().flatten() {
                operation
                    .responses
                    .responses
                    .insert(String::from("500"), RefOr::T(internal_server_error()));
            }
        }
    }
}

fn internal_server_error() -> Response {
    ResponseBuilder::new()
        .description("Internal Server Error")
        .content(
            "application/json",
            ContentBuilder::new()
                .schema(Some(Ref::from_schema_name("ProblemDetail")))
                .build(),
        )
        .build()
}
