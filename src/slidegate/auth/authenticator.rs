use super::{
    cookie::CookieSigner,
    credentials::Credentials,
    hasher::{hash_password, verify_password},
    status::{AuthStatus, Identity},
};
use anyhow::{Context, Result};
use axum::http::HeaderMap;
use chrono::{DateTime, Utc};
use rand::{distributions::Alphanumeric, Rng};
use serde::Deserialize;
use tracing::{debug, info, instrument, warn};

/// Fields posted by the login form. Missing fields deserialize as empty.
#[derive(Default, Clone, Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

impl std::fmt::Debug for LoginForm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginForm")
            .field("username", &self.username)
            .field("password", &"***")
            .finish()
    }
}

#[derive(Debug)]
pub struct Authenticator {
    credentials: Credentials,
    signer: CookieSigner,
    /// Verified against for unknown usernames so they cost the same as a wrong password.
    dummy_hash: String,
}

impl Authenticator {
    /// # Errors
    /// Returns an error if hashing the random placeholder password fails.
    pub fn new(credentials: Credentials, signer: CookieSigner) -> Result<Self> {
        let placeholder: String = rand::thread_rng()
            .sample_iter(&Alphanumeric)
            .take(32)
            .map(char::from)
            .collect();
        let dummy_hash = hash_password(&placeholder).context("Failed to build dummy hash")?;

        Ok(Self {
            credentials,
            signer,
            dummy_hash,
        })
    }

    #[must_use]
    pub fn signer(&self) -> &CookieSigner {
        &self.signer
    }

    /// Check a submitted login form.
    ///
    /// An absent form, or one with either field empty, counts as nothing
    /// entered yet.
    #[instrument(skip(self))]
    pub fn login(&self, form: Option<&LoginForm>) -> AuthStatus {
        let Some(form) = form else {
            return AuthStatus::Pending;
        };
        if form.username.is_empty() || form.password.is_empty() {
            debug!("Login form incomplete");
            return AuthStatus::Pending;
        }

        match self.credentials.lookup(&form.username) {
            Some(user) if verify_password(&form.password, &user.password_hash) => {
                info!(username = %user.username, "Login succeeded");
                AuthStatus::Authenticated(Identity {
                    name: user.name.clone(),
                    username: user.username.clone(),
                })
            }
            Some(_) => {
                warn!(username = %form.username, "Login failed: wrong password");
                AuthStatus::Failed
            }
            None => {
                // Dummy flow: pay the Argon2 cost so response time does not reveal the username.
                let _ = verify_password(&form.password, &self.dummy_hash);
                warn!(username = %form.username, "Login failed: unknown username");
                AuthStatus::Failed
            }
        }
    }

    /// Resolve the re-authentication cookie, if any.
    ///
    /// A missing, forged, or expired cookie, or one for a user that no longer
    /// exists, leaves the visitor pending.
    pub fn from_cookie(&self, headers: &HeaderMap, now: DateTime<Utc>) -> AuthStatus {
        let Some(token) = self.signer.extract(headers) else {
            return AuthStatus::Pending;
        };
        let Some(claims) = self.signer.verify(&token, now) else {
            debug!("Ignoring invalid or expired cookie");
            return AuthStatus::Pending;
        };
        match self.credentials.lookup(&claims.username) {
            Some(user) => AuthStatus::Authenticated(Identity {
                name: user.name.clone(),
                username: user.username.clone(),
            }),
            None => {
                debug!(username = %claims.username, "Cookie names an unknown user");
                AuthStatus::Pending
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::slidegate::auth::Hasher;
    use axum::http::{header::COOKIE, HeaderValue};
    use secrecy::SecretString;

    fn authenticator() -> Authenticator {
        let credentials = Credentials::demo().unwrap();
        let signer = CookieSigner::new(
            "some_cookie_name".to_string(),
            SecretString::from("some_signature_key".to_string()),
            1,
        );
        Authenticator::new(credentials, signer).unwrap()
    }

    fn form(username: &str, password: &str) -> LoginForm {
        LoginForm {
            username: username.to_string(),
            password: password.to_string(),
        }
    }

    #[test]
    fn correct_credentials_authenticate_with_display_name() {
        let status = authenticator().login(Some(&form("user", "password")));
        assert_eq!(
            status,
            AuthStatus::Authenticated(Identity {
                name: "Demo User".to_string(),
                username: "user".to_string(),
            })
        );
    }

    #[test]
    fn incorrect_credentials_fail() {
        let auth = authenticator();
        assert_eq!(auth.login(Some(&form("user", "wrong"))), AuthStatus::Failed);
        assert_eq!(
            auth.login(Some(&form("nobody", "password"))),
            AuthStatus::Failed
        );
    }

    #[test]
    fn unknown_username_runs_dummy_verify_and_fails() {
        let auth = authenticator();
        // The unknown-user arm verifies against this hash instead of returning early.
        assert!(auth.dummy_hash.starts_with("$argon2id$"));
        assert!(!verify_password("password", &auth.dummy_hash));
        assert_eq!(
            auth.login(Some(&form("nobody", "password"))),
            AuthStatus::Failed
        );
        assert_eq!(auth.login(Some(&form("nobody", ""))), AuthStatus::Pending);
    }

    #[test]
    fn dummy_hash_differs_per_authenticator() {
        assert_ne!(authenticator().dummy_hash, authenticator().dummy_hash);
    }

    #[test]
    fn missing_credentials_are_pending() {
        let auth = authenticator();
        assert_eq!(auth.login(None), AuthStatus::Pending);
        assert_eq!(auth.login(Some(&form("", ""))), AuthStatus::Pending);
        assert_eq!(auth.login(Some(&form("user", ""))), AuthStatus::Pending);
        assert_eq!(auth.login(Some(&form("", "password"))), AuthStatus::Pending);
    }

    #[test]
    fn cookie_round_trip_and_unknown_user() {
        let auth = authenticator();
        let now = Utc::now();

        assert_eq!(auth.from_cookie(&HeaderMap::new(), now), AuthStatus::Pending);

        let identity = Identity {
            name: "Demo User".to_string(),
            username: "user".to_string(),
        };
        let token = auth.signer().sign(&identity, now).unwrap();
        let mut headers = HeaderMap::new();
        headers.insert(
            COOKIE,
            HeaderValue::from_str(&format!("some_cookie_name={token}")).unwrap(),
        );
        assert_eq!(
            auth.from_cookie(&headers, now),
            AuthStatus::Authenticated(identity)
        );

        let ghost = Identity {
            name: "Ghost".to_string(),
            username: "ghost".to_string(),
        };
        let token = auth.signer().sign(&ghost, now).unwrap();
        headers.insert(
            COOKIE,
            HeaderValue::from_str(&format!("some_cookie_name={token}")).unwrap(),
        );
        assert_eq!(auth.from_cookie(&headers, now), AuthStatus::Pending);
    }

    #[test]
    fn supports_several_users() {
        let passwords = Hasher::new(vec!["a-pass".to_string(), "b-pass".to_string()])
            .generate()
            .unwrap();
        let credentials = Credentials::new(
            vec!["Ada".to_string(), "Bob".to_string()],
            vec!["ada".to_string(), "bob".to_string()],
            passwords,
        )
        .unwrap();
        let auth = Authenticator::new(
            credentials,
            CookieSigner::new("c".to_string(), SecretString::from("k".to_string()), 1),
        )
        .unwrap();
        assert_eq!(
            auth.login(Some(&form("bob", "b-pass")))
                .identity()
                .map(|identity| identity.name.as_str()),
            Some("Bob")
        );
        assert_eq!(auth.login(Some(&form("bob", "a-pass"))), AuthStatus::Failed);
    }
}
