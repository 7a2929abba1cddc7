//! # Slidegate
//!
//! `slidegate` serves one page of UI controls behind a login form.
//!
//! ## Authentication
//!
//! Credentials are three parallel arrays (display names, usernames and
//! Argon2id password hashes) where index `i` in each refers to the same user.
//! A login attempt resolves to one of three states:
//!
//! - **Authenticated:** the page renders a title, a welcome message, a slider
//!   and a logout control.
//! - **Failed:** the login form is shown again with an error.
//! - **Pending:** nothing was entered yet, the login form carries a warning.
//!
//! A successful login sets an HMAC-signed cookie so the visitor stays
//! authenticated until it expires or they log out.

pub mod cli;
pub mod slidegate;

#[allow(clippy::doc_markdown, clippy::needless_raw_string_hashes)]
pub mod built_info {
    include!(concat!(env!("OUT_DIR"), "/built.rs"));
}

pub const GIT_COMMIT_HASH: &str = match built_info::GIT_COMMIT_HASH {
    Some(hash) => hash,
    None => "unknown",
};
