use crate::slidegate::{
    auth::{AuthStatus, Authenticator},
    ui::{authenticated_page, login_page, Notice},
    PageConfig,
};
use axum::{
    extract::{Extension, Query},
    http::HeaderMap,
    response::Html,
};
use chrono::Utc;
use serde::Deserialize;
use std::sync::Arc;

#[derive(Debug, Default, Deserialize)]
pub struct SliderQuery {
    number: Option<String>,
}

impl SliderQuery {
    /// Unparsable picks fall back to the slider default; integers too large
    /// for `i64` saturate so the slider clamps them like any other
    /// out-of-range pick.
    fn number(&self) -> Option<i64> {
        let raw = self.number.as_deref()?.trim();
        if let Ok(value) = raw.parse::<i64>() {
            return Some(value);
        }

        let (negative, digits) = match raw.as_bytes().first() {
            Some(b'-') => (true, &raw[1..]),
            Some(b'+') => (false, &raw[1..]),
            _ => (false, raw),
        };
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        Some(if negative { i64::MIN } else { i64::MAX })
    }
}

// axum handler for the page: gated content or the login form
pub async fn root(
    headers: HeaderMap,
    Query(query): Query<SliderQuery>,
    Extension(authenticator): Extension<Arc<Authenticator>>,
    Extension(page): Extension<Arc<PageConfig>>,
) -> Html<String> {
    match authenticator.from_cookie(&headers, Utc::now()) {
        AuthStatus::Authenticated(identity) => {
            let slider = page.slider();
            let value = slider.select(query.number());
            Html(authenticated_page(page.title(), &identity, slider, value))
        }
        AuthStatus::Failed | AuthStatus::Pending => Html(login_page(Some(&Notice::pending()))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_number_parsing() {
        let query = |raw: Option<&str>| SliderQuery {
            number: raw.map(ToString::to_string),
        };
        assert_eq!(query(None).number(), None);
        assert_eq!(query(Some("42")).number(), Some(42));
        assert_eq!(query(Some(" 7 ")).number(), Some(7));
        assert_eq!(query(Some("abc")).number(), None);
        assert_eq!(query(Some("")).number(), None);
        assert_eq!(query(Some("-")).number(), None);
        assert_eq!(query(Some("12x")).number(), None);
    }

    #[test]
    fn oversized_numbers_saturate() {
        let query = |raw: &str| SliderQuery {
            number: Some(raw.to_string()),
        };
        assert_eq!(query("99999999999999999999").number(), Some(i64::MAX));
        assert_eq!(query("+99999999999999999999").number(), Some(i64::MAX));
        assert_eq!(query("-99999999999999999999").number(), Some(i64::MIN));

        let slider = crate::slidegate::ui::Slider::demo();
        assert_eq!(slider.select(query("99999999999999999999").number()), 100);
        assert_eq!(slider.select(query("-99999999999999999999").number()), 0);
    }
}
