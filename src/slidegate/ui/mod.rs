//! Server-rendered HTML for the login form and the gated page.

mod page;
mod slider;

pub use self::page::{authenticated_page, login_page, Notice};
pub use self::slider::{Slider, SliderError};

/// Escape text for safe interpolation into HTML bodies and attributes.
#[must_use]
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}
