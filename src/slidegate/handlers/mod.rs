pub mod health;
pub mod login;
pub mod logout;
pub mod page;
pub mod session;

use axum::{
    http::{header::LOCATION, HeaderMap, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};

/// `303 See Other` back to the page, with any extra headers (cookies).
fn redirect_home(mut headers: HeaderMap) -> Response {
    headers.insert(LOCATION, HeaderValue::from_static("/"));
    (StatusCode::SEE_OTHER, headers).into_response()
}
