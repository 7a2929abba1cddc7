//! Signed re-authentication cookie.
//!
//! The token is `base64url(claims_json) "." base64url(hmac_sha256(key, payload))`,
//! so a visitor stays logged in across page loads without a server-side store.

use super::status::Identity;
use anyhow::{anyhow, Result};
use axum::http::{
    header::{InvalidHeaderValue, COOKIE},
    HeaderMap, HeaderValue,
};
use base64ct::{Base64UrlUnpadded, Encoding};
use chrono::{DateTime, Utc};
use hmac::{Hmac, Mac};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

const SECONDS_PER_DAY: i64 = 86_400;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    pub name: String,
    pub username: String,
    /// Expiry as a unix timestamp in seconds.
    pub exp: i64,
}

pub struct CookieSigner {
    cookie_name: String,
    key: SecretString,
    expiry_days: u32,
    secure: bool,
}

impl std::fmt::Debug for CookieSigner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CookieSigner")
            .field("cookie_name", &self.cookie_name)
            .field("key", &"***")
            .field("expiry_days", &self.expiry_days)
            .field("secure", &self.secure)
            .finish()
    }
}

impl CookieSigner {
    #[must_use]
    pub fn new(cookie_name: String, key: SecretString, expiry_days: u32) -> Self {
        Self {
            cookie_name,
            key,
            expiry_days,
            secure: false,
        }
    }

    /// Only mark cookies secure when the page is served over HTTPS.
    #[must_use]
    pub fn with_secure(mut self, secure: bool) -> Self {
        self.secure = secure;
        self
    }

    #[must_use]
    pub fn cookie_name(&self) -> &str {
        &self.cookie_name
    }

    #[must_use]
    pub fn max_age_seconds(&self) -> i64 {
        i64::from(self.expiry_days) * SECONDS_PER_DAY
    }

    fn mac(&self) -> Result<HmacSha256> {
        HmacSha256::new_from_slice(self.key.expose_secret().as_bytes())
            .map_err(|_| anyhow!("invalid cookie signature key"))
    }

    /// Sign a token for `identity` that expires `expiry_days` after `now`.
    ///
    /// # Errors
    /// Returns an error if the claims cannot be serialized or the key is rejected.
    pub fn sign(&self, identity: &Identity, now: DateTime<Utc>) -> Result<String> {
        let claims = Claims {
            name: identity.name.clone(),
            username: identity.username.clone(),
            exp: now.timestamp() + self.max_age_seconds(),
        };
        let payload = Base64UrlUnpadded::encode_string(&serde_json::to_vec(&claims)?);

        let mut mac = self.mac()?;
        mac.update(payload.as_bytes());
        let signature = Base64UrlUnpadded::encode_string(&mac.finalize().into_bytes());

        Ok(format!("{payload}.{signature}"))
    }

    /// Return the claims of a well-formed, correctly signed, unexpired token.
    #[must_use]
    pub fn verify(&self, token: &str, now: DateTime<Utc>) -> Option<Claims> {
        let (payload, signature) = token.split_once('.')?;
        let signature = Base64UrlUnpadded::decode_vec(signature).ok()?;

        let mut mac = self.mac().ok()?;
        mac.update(payload.as_bytes());
        mac.verify_slice(&signature).ok()?;

        let json = Base64UrlUnpadded::decode_vec(payload).ok()?;
        let claims: Claims = serde_json::from_slice(&json).ok()?;
        if claims.exp <= now.timestamp() {
            return None;
        }
        Some(claims)
    }

    /// Build the `Set-Cookie` value carrying `token`.
    ///
    /// # Errors
    /// Returns an error if the cookie name or token contain invalid header bytes.
    pub fn set_cookie(&self, token: &str) -> Result<HeaderValue, InvalidHeaderValue> {
        self.build_cookie(token, self.max_age_seconds())
    }

    /// Build the `Set-Cookie` value that removes the cookie.
    ///
    /// # Errors
    /// Returns an error if the cookie name contains invalid header bytes.
    pub fn clear_cookie(&self) -> Result<HeaderValue, InvalidHeaderValue> {
        self.build_cookie("", 0)
    }

    fn build_cookie(&self, value: &str, max_age: i64) -> Result<HeaderValue, InvalidHeaderValue> {
        let mut cookie = format!(
            "{}={value}; Path=/; HttpOnly; SameSite=Lax; Max-Age={max_age}",
            self.cookie_name
        );
        if self.secure {
            cookie.push_str("; Secure");
        }
        HeaderValue::from_str(&cookie)
    }

    /// Pull this signer's cookie out of the request headers.
    #[must_use]
    pub fn extract(&self, headers: &HeaderMap) -> Option<String> {
        headers
            .get_all(COOKIE)
            .iter()
            .filter_map(|header| header.to_str().ok())
            .flat_map(|value| value.split(';'))
            .find_map(|pair| {
                let (key, val) = pair.trim().split_once('=')?;
                (key.trim() == self.cookie_name).then(|| val.trim().to_string())
            })
            .filter(|token| !token.is_empty())
    }
}
