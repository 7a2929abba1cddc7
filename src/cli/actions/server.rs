use crate::slidegate::{
    self,
    auth::{Authenticator, CookieSigner, Credentials, Hasher},
    ui::Slider,
};
use anyhow::{Context, Result};
use secrecy::{ExposeSecret, SecretString};
use std::sync::Arc;
use tracing::debug;

pub struct Args {
    pub port: u16,
    pub title: String,
    pub cookie_name: String,
    pub cookie_key: SecretString,
    pub cookie_expiry_days: u32,
    pub cookie_secure: bool,
    pub demo_name: String,
    pub demo_username: String,
    pub demo_password: SecretString,
}

impl std::fmt::Debug for Args {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Args")
            .field("port", &self.port)
            .field("title", &self.title)
            .field("cookie_name", &self.cookie_name)
            .field("cookie_key", &"***")
            .field("cookie_expiry_days", &self.cookie_expiry_days)
            .field("cookie_secure", &self.cookie_secure)
            .field("demo_name", &self.demo_name)
            .field("demo_username", &self.demo_username)
            .field("demo_password", &"***")
            .finish()
    }
}

/// Execute the server action.
/// # Errors
/// Returns an error if hashing the demo password fails, the credentials are
/// inconsistent, or the server fails to start.
pub async fn execute(args: Args) -> Result<()> {
    debug!("Server args: {:?}", args);

    let usernames = vec![args.demo_username];
    let passwords = Hasher::new(vec![args.demo_password.expose_secret().to_string()])
        .generate()
        .context("Failed to hash demo password")?;
    let names = vec![args.demo_name];

    let credentials =
        Credentials::new(names, usernames, passwords).context("Invalid demo credentials")?;

    let signer = CookieSigner::new(args.cookie_name, args.cookie_key, args.cookie_expiry_days)
        .with_secure(args.cookie_secure);

    let authenticator = Arc::new(
        Authenticator::new(credentials, signer).context("Failed to build authenticator")?,
    );
    let page = Arc::new(slidegate::PageConfig::new(args.title, Slider::demo()));

    slidegate::new(args.port, authenticator, page).await
}
