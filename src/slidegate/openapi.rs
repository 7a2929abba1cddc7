use super::handlers::{health, session};
use axum::Json;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(health::health, session::session),
    components(schemas(health::Health, session::SessionResponse)),
    tags(
        (name = "health", description = "Service status"),
        (name = "auth", description = "Session lookup")
    )
)]
pub struct ApiDoc;

pub(super) async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
