use super::redirect_home;
use crate::slidegate::{
    auth::{AuthStatus, Authenticator, LoginForm},
    ui::{login_page, Notice},
};
use axum::{
    extract::Extension,
    http::{header::SET_COOKIE, HeaderMap, StatusCode},
    response::{Html, IntoResponse, Response},
    Form,
};
use chrono::Utc;
use std::sync::Arc;
use tracing::error;

// axum handler for the login form
pub async fn login(
    Extension(authenticator): Extension<Arc<Authenticator>>,
    form: Option<Form<LoginForm>>,
) -> Response {
    let form = form.map(|Form(form)| form);

    // Argon2 verification is CPU-bound; keep it off the async workers.
    let checker = Arc::clone(&authenticator);
    let status = match tokio::task::spawn_blocking(move || checker.login(form.as_ref())).await {
        Ok(status) => status,
        Err(err) => {
            error!("Login task failed: {err}");
            return StatusCode::INTERNAL_SERVER_ERROR.into_response();
        }
    };

    match status {
        AuthStatus::Authenticated(identity) => {
            let signer = authenticator.signer();
            let cookie = match signer.sign(&identity, Utc::now()) {
                Ok(token) => signer.set_cookie(&token),
                Err(err) => {
                    error!("Failed to sign session cookie: {err}");
                    return StatusCode::INTERNAL_SERVER_ERROR.into_response();
                }
            };
            match cookie {
                Ok(cookie) => {
                    let mut headers = HeaderMap::new();
                    headers.insert(SET_COOKIE, cookie);
                    redirect_home(headers)
                }
                Err(err) => {
                    error!("Failed to build session cookie: {err}");
                    StatusCode::INTERNAL_SERVER_ERROR.into_response()
                }
            }
        }
        AuthStatus::Failed => (
            StatusCode::UNAUTHORIZED,
            Html(login_page(Some(&Notice::failed()))),
        )
            .into_response(),
        AuthStatus::Pending => Html(login_page(Some(&Notice::pending()))).into_response(),
    }
}
