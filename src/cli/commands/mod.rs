pub mod auth;
pub mod logging;

use clap::{
    builder::styling::{AnsiColor, Effects, Styles},
    Arg, ColorChoice, Command,
};

pub const ARG_PORT: &str = "port";
pub const ARG_TITLE: &str = "title";

#[must_use]
pub fn new() -> Command {
    let styles = Styles::styled()
        .header(AnsiColor::Yellow.on_default() | Effects::BOLD)
        .usage(AnsiColor::Green.on_default() | Effects::BOLD)
        .literal(AnsiColor::Blue.on_default() | Effects::BOLD)
        .placeholder(AnsiColor::Green.on_default());

    let long_version: &'static str = Box::leak(
        format!("{} - {}", env!("CARGO_PKG_VERSION"), crate::GIT_COMMIT_HASH).into_boxed_str(),
    );

    let command = Command::new("slidegate")
        .about("Login-gated demo page with a slider")
        .version(env!("CARGO_PKG_VERSION"))
        .long_version(long_version)
        .color(ColorChoice::Auto)
        .styles(styles)
        .arg(
            Arg::new(ARG_PORT)
                .short('p')
                .long(ARG_PORT)
                .help("Port to listen on")
                .default_value("8080")
                .env("SLIDEGATE_PORT")
                .value_parser(clap::value_parser!(u16)),
        )
        .arg(
            Arg::new(ARG_TITLE)
                .long(ARG_TITLE)
                .help("Title shown on the page behind the login")
                .default_value("My First Slidegate App")
                .env("SLIDEGATE_TITLE"),
        );

    let command = auth::with_args(command);
    logging::with_args(command)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;

    const ENV_VARS: [&str; 10] = [
        "SLIDEGATE_PORT",
        "SLIDEGATE_TITLE",
        "SLIDEGATE_COOKIE_NAME",
        "SLIDEGATE_COOKIE_KEY",
        "SLIDEGATE_COOKIE_EXPIRY_DAYS",
        "SLIDEGATE_COOKIE_SECURE",
        "SLIDEGATE_DEMO_NAME",
        "SLIDEGATE_DEMO_USERNAME",
        "SLIDEGATE_DEMO_PASSWORD",
        "SLIDEGATE_LOG_LEVEL",
    ];

    fn clean_env<F: FnOnce()>(f: F) {
        temp_env::with_vars(ENV_VARS.map(|key| (key, None::<&str>)), f);
    }

    #[test]
    fn test_new() {
        let command = new();

        assert_eq!(command.get_name(), "slidegate");
        assert_eq!(
            command.get_about().map(ToString::to_string),
            Some("Login-gated demo page with a slider".to_string())
        );
        assert_eq!(
            command.get_version().map(ToString::to_string),
            Some(env!("CARGO_PKG_VERSION").to_string())
        );
    }

    #[test]
    fn test_defaults() {
        clean_env(|| {
            let matches = new().get_matches_from(vec!["slidegate"]);
            assert_eq!(matches.get_one::<u16>(ARG_PORT).copied(), Some(8080));
            assert_eq!(
                matches.get_one::<String>(ARG_TITLE).cloned(),
                Some("My First Slidegate App".to_string())
            );

            let opts = auth::Options::parse(&matches).unwrap();
            assert_eq!(opts.cookie_name, "some_cookie_name");
            assert_eq!(opts.cookie_key.expose_secret(), "some_signature_key");
            assert_eq!(opts.cookie_expiry_days, 1);
            assert!(!opts.cookie_secure);
            assert_eq!(opts.demo_name, "Demo User");
            assert_eq!(opts.demo_username, "user");
            assert_eq!(opts.demo_password.expose_secret(), "password");
        });
    }

    #[test]
    fn test_demo_defaults_match_credentials() {
        use crate::slidegate::auth::{DEMO_NAME, DEMO_PASSWORD, DEMO_USERNAME};

        clean_env(|| {
            let matches = new().get_matches_from(vec!["slidegate"]);
            let opts = auth::Options::parse(&matches).unwrap();
            assert_eq!(opts.demo_name, DEMO_NAME);
            assert_eq!(opts.demo_username, DEMO_USERNAME);
            assert_eq!(opts.demo_password.expose_secret(), DEMO_PASSWORD);
        });
    }

    #[test]
    fn test_check_args() {
        clean_env(|| {
            let matches = new().get_matches_from(vec![
                "slidegate",
                "--port",
                "9090",
                "--cookie-name",
                "gate",
                "--cookie-expiry-days",
                "7",
                "--cookie-secure",
                "--demo-username",
                "alice",
            ]);
            assert_eq!(matches.get_one::<u16>(ARG_PORT).copied(), Some(9090));

            let opts = auth::Options::parse(&matches).unwrap();
            assert_eq!(opts.cookie_name, "gate");
            assert_eq!(opts.cookie_expiry_days, 7);
            assert!(opts.cookie_secure);
            assert_eq!(opts.demo_username, "alice");
        });
    }

    #[test]
    fn test_check_env() {
        temp_env::with_vars(
            [
                ("SLIDEGATE_PORT", Some("443")),
                ("SLIDEGATE_TITLE", Some("Numbers")),
                ("SLIDEGATE_COOKIE_KEY", Some("s3cret")),
                ("SLIDEGATE_COOKIE_SECURE", Some("true")),
                ("SLIDEGATE_DEMO_NAME", Some("Ada")),
                ("SLIDEGATE_LOG_LEVEL", Some("info")),
            ],
            || {
                let matches = new().get_matches_from(vec!["slidegate"]);
                assert_eq!(matches.get_one::<u16>(ARG_PORT).copied(), Some(443));
                assert_eq!(
                    matches.get_one::<String>(ARG_TITLE).cloned(),
                    Some("Numbers".to_string())
                );
                assert_eq!(
                    matches.get_one::<u8>(logging::ARG_VERBOSITY).copied(),
                    Some(2)
                );

                let opts = auth::Options::parse(&matches).unwrap();
                assert_eq!(opts.cookie_key.expose_secret(), "s3cret");
                assert!(opts.cookie_secure);
                assert_eq!(opts.demo_name, "Ada");
            },
        );
    }

    #[test]
    fn test_cookie_expiry_days_out_of_range() {
        clean_env(|| {
            let result = new().try_get_matches_from(vec!["slidegate", "--cookie-expiry-days", "0"]);
            assert!(result.is_err());

            let result =
                new().try_get_matches_from(vec!["slidegate", "--cookie-expiry-days", "366"]);
            assert!(result.is_err());
        });
    }

    #[test]
    fn test_check_log_level_env() {
        let levels = vec!["error", "warn", "info", "debug", "trace"];
        for (index, &level) in levels.iter().enumerate() {
            temp_env::with_vars([("SLIDEGATE_LOG_LEVEL", Some(level))], || {
                let matches = new().get_matches_from(vec!["slidegate"]);
                assert_eq!(
                    matches.get_one::<u8>(logging::ARG_VERBOSITY).copied(),
                    Some(index as u8)
                );
            });
        }
    }

    #[test]
    fn test_check_log_level_verbosity() {
        for index in 0..5 {
            temp_env::with_vars([("SLIDEGATE_LOG_LEVEL", None::<String>)], || {
                let mut args = vec!["slidegate".to_string()];

                if index > 0 {
                    args.push(format!("-{}", "v".repeat(index)));
                }

                let matches = new().get_matches_from(args);

                assert_eq!(
                    matches.get_one::<u8>(logging::ARG_VERBOSITY).copied(),
                    Some(index as u8)
                );
            });
        }
    }
}
