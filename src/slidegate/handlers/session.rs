//! Session endpoint for scripts and health checks.

use crate::slidegate::auth::{AuthStatus, Authenticator};
use axum::{
    extract::Extension,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Json, Response},
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::ToSchema;

#[derive(ToSchema, Serialize, Deserialize, Debug, PartialEq, Eq)]
pub struct SessionResponse {
    pub name: String,
    pub username: String,
    pub status: String,
}

#[utoipa::path(
    get,
    path = "/v1/auth/session",
    responses(
        (status = 200, description = "Cookie resolves to a user", body = SessionResponse),
        (status = 204, description = "No active session")
    ),
    tag = "auth"
)]
pub async fn session(
    headers: HeaderMap,
    Extension(authenticator): Extension<Arc<Authenticator>>,
) -> Response {
    let status = authenticator.from_cookie(&headers, Utc::now());
    match status.identity() {
        Some(identity) => {
            let response = SessionResponse {
                name: identity.name.clone(),
                username: identity.username.clone(),
                status: status.as_str().to_string(),
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        None => StatusCode::NO_CONTENT.into_response(),
    }
}
