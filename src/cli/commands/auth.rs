use crate::slidegate::auth::{DEMO_NAME, DEMO_PASSWORD, DEMO_USERNAME};
use anyhow::{Context, Result};
use clap::{builder::BoolishValueParser, Arg, ArgAction, Command};
use secrecy::SecretString;

pub const ARG_COOKIE_NAME: &str = "cookie-name";
pub const ARG_COOKIE_KEY: &str = "cookie-key";
pub const ARG_COOKIE_EXPIRY_DAYS: &str = "cookie-expiry-days";
pub const ARG_COOKIE_SECURE: &str = "cookie-secure";
pub const ARG_DEMO_NAME: &str = "demo-name";
pub const ARG_DEMO_USERNAME: &str = "demo-username";
pub const ARG_DEMO_PASSWORD: &str = "demo-password";

#[must_use]
pub fn with_args(command: Command) -> Command {
    let command = with_cookie_args(command);
    with_demo_args(command)
}

fn with_cookie_args(command: Command) -> Command {
    command
        .arg(
            Arg::new(ARG_COOKIE_NAME)
                .long(ARG_COOKIE_NAME)
                .help("Name of the re-authentication cookie")
                .env("SLIDEGATE_COOKIE_NAME")
                .default_value("some_cookie_name"),
        )
        .arg(
            Arg::new(ARG_COOKIE_KEY)
                .long(ARG_COOKIE_KEY)
                .help("Key used to sign the re-authentication cookie")
                .env("SLIDEGATE_COOKIE_KEY")
                .hide_env_values(true)
                .default_value("some_signature_key"),
        )
        .arg(
            Arg::new(ARG_COOKIE_EXPIRY_DAYS)
                .long(ARG_COOKIE_EXPIRY_DAYS)
                .help("Days before the re-authentication cookie expires")
                .env("SLIDEGATE_COOKIE_EXPIRY_DAYS")
                .default_value("1")
                .value_parser(clap::value_parser!(u32).range(1..=365)),
        )
        .arg(
            Arg::new(ARG_COOKIE_SECURE)
                .long(ARG_COOKIE_SECURE)
                .help("Mark the cookie Secure (serve over HTTPS)")
                .env("SLIDEGATE_COOKIE_SECURE")
                .action(ArgAction::SetTrue)
                .value_parser(BoolishValueParser::new()),
        )
}

fn with_demo_args(command: Command) -> Command {
    command
        .arg(
            Arg::new(ARG_DEMO_NAME)
                .long(ARG_DEMO_NAME)
                .help("Display name of the demo user")
                .env("SLIDEGATE_DEMO_NAME")
                .default_value(DEMO_NAME),
        )
        .arg(
            Arg::new(ARG_DEMO_USERNAME)
                .long(ARG_DEMO_USERNAME)
                .help("Username of the demo user")
                .env("SLIDEGATE_DEMO_USERNAME")
                .default_value(DEMO_USERNAME),
        )
        .arg(
            Arg::new(ARG_DEMO_PASSWORD)
                .long(ARG_DEMO_PASSWORD)
                .help("Plaintext password of the demo user, hashed at startup")
                .env("SLIDEGATE_DEMO_PASSWORD")
                .hide_env_values(true)
                .default_value(DEMO_PASSWORD),
        )
}

pub struct Options {
    pub cookie_name: String,
    pub cookie_key: SecretString,
    pub cookie_expiry_days: u32,
    pub cookie_secure: bool,
    pub demo_name: String,
    pub demo_username: String,
    pub demo_password: SecretString,
}

impl Options {
    /// Read the authenticator options from validated matches.
    ///
    /// # Errors
    /// Returns an error if a defaulted argument is unexpectedly missing.
    pub fn parse(matches: &clap::ArgMatches) -> Result<Self> {
        let string = |id: &str| -> Result<String> {
            matches
                .get_one::<String>(id)
                .cloned()
                .with_context(|| format!("missing required argument: --{id}"))
        };

        Ok(Self {
            cookie_name: string(ARG_COOKIE_NAME)?,
            cookie_key: SecretString::from(string(ARG_COOKIE_KEY)?),
            cookie_expiry_days: matches
                .get_one::<u32>(ARG_COOKIE_EXPIRY_DAYS)
                .copied()
                .unwrap_or(1),
            cookie_secure: matches.get_flag(ARG_COOKIE_SECURE),
            demo_name: string(ARG_DEMO_NAME)?,
            demo_username: string(ARG_DEMO_USERNAME)?,
            demo_password: SecretString::from(string(ARG_DEMO_PASSWORD)?),
        })
    }
}
