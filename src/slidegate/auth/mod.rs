//! Credential checking and the re-authentication cookie.

mod authenticator;
mod cookie;
mod credentials;
mod hasher;
mod status;

pub use self::authenticator::{Authenticator, LoginForm};
pub use self::cookie::{Claims, CookieSigner};
pub use self::credentials::{
    Credentials, CredentialsError, User, DEMO_NAME, DEMO_PASSWORD, DEMO_USERNAME,
};
pub use self::hasher::{hash_password, verify_password, Hasher};
pub use self::status::{AuthStatus, Identity};
