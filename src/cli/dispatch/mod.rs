//! Command-line argument dispatch.
//!
//! Maps validated CLI arguments to the action that starts the server.

use crate::cli::actions::{server::Args, Action};
use crate::cli::commands::{self, auth};
use anyhow::{Context, Result};

/// Map validated CLI matches to a server action.
///
/// # Errors
/// Returns an error if required arguments are missing.
pub fn handler(matches: &clap::ArgMatches) -> Result<Action> {
    let port = matches
        .get_one::<u16>(commands::ARG_PORT)
        .copied()
        .unwrap_or(8080);
    let title = matches
        .get_one::<String>(commands::ARG_TITLE)
        .cloned()
        .context("missing required argument: --title")?;

    let auth_opts = auth::Options::parse(matches)?;

    Ok(Action::Server(Args {
        port,
        title,
        cookie_name: auth_opts.cookie_name,
        cookie_key: auth_opts.cookie_key,
        cookie_expiry_days: auth_opts.cookie_expiry_days,
        cookie_secure: auth_opts.cookie_secure,
        demo_name: auth_opts.demo_name,
        demo_username: auth_opts.demo_username,
        demo_password: auth_opts.demo_password,
    }))
}
