use super::redirect_home;
use crate::slidegate::auth::Authenticator;
use axum::{
    extract::Extension,
    http::{header::SET_COOKIE, HeaderMap},
    response::Response,
};
use std::sync::Arc;
use tracing::{error, info};

// axum handler for logout
pub async fn logout(Extension(authenticator): Extension<Arc<Authenticator>>) -> Response {
    // Always clear the cookie, even if none was sent.
    let mut headers = HeaderMap::new();
    match authenticator.signer().clear_cookie() {
        Ok(cookie) => {
            headers.insert(SET_COOKIE, cookie);
        }
        Err(err) => error!("Failed to build logout cookie: {err}"),
    }
    info!("Logged out");
    redirect_home(headers)
}
