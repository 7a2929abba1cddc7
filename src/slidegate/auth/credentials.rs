//! The user table: display names, usernames and password hashes.

use super::hasher::Hasher;
use anyhow::Result;
use std::collections::HashSet;
use thiserror::Error;

pub const DEMO_NAME: &str = "Demo User";
pub const DEMO_USERNAME: &str = "user";
pub const DEMO_PASSWORD: &str = "password";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CredentialsError {
    #[error("credential arrays differ in length: {names} names, {usernames} usernames, {passwords} passwords")]
    LengthMismatch {
        names: usize,
        usernames: usize,
        passwords: usize,
    },
    #[error("at least one user is required")]
    Empty,
    #[error("username at index {0} is empty")]
    EmptyUsername(usize),
    #[error("duplicate username: {0}")]
    DuplicateUsername(String),
}

#[derive(Clone)]
pub struct User {
    pub name: String,
    pub username: String,
    pub password_hash: String,
}

impl std::fmt::Debug for User {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("User")
            .field("name", &self.name)
            .field("username", &self.username)
            .field("password_hash", &"***")
            .finish()
    }
}

#[derive(Debug, Clone)]
pub struct Credentials {
    users: Vec<User>,
}

impl Credentials {
    /// Zip the parallel arrays into users; index `i` of each array is the same user.
    ///
    /// # Errors
    /// Returns an error when the arrays differ in length, are empty, or carry
    /// an empty or duplicate username.
    pub fn new(
        names: Vec<String>,
        usernames: Vec<String>,
        password_hashes: Vec<String>,
    ) -> Result<Self, CredentialsError> {
        if names.len() != usernames.len() || usernames.len() != password_hashes.len() {
            return Err(CredentialsError::LengthMismatch {
                names: names.len(),
                usernames: usernames.len(),
                passwords: password_hashes.len(),
            });
        }
        if usernames.is_empty() {
            return Err(CredentialsError::Empty);
        }

        let mut seen = HashSet::new();
        let mut users = Vec::with_capacity(usernames.len());
        for (index, ((name, username), password_hash)) in names
            .into_iter()
            .zip(usernames)
            .zip(password_hashes)
            .enumerate()
        {
            if username.is_empty() {
                return Err(CredentialsError::EmptyUsername(index));
            }
            if !seen.insert(username.clone()) {
                return Err(CredentialsError::DuplicateUsername(username));
            }
            users.push(User {
                name,
                username,
                password_hash,
            });
        }

        Ok(Self { users })
    }

    /// The single built-in demo account.
    ///
    /// # Errors
    /// Returns an error if hashing the demo password fails.
    pub fn demo() -> Result<Self> {
        let passwords = Hasher::new(vec![DEMO_PASSWORD.to_string()]).generate()?;
        Ok(Self::new(
            vec![DEMO_NAME.to_string()],
            vec![DEMO_USERNAME.to_string()],
            passwords,
        )?)
    }

    #[must_use]
    pub fn lookup(&self, username: &str) -> Option<&User> {
        self.users.iter().find(|user| user.username == username)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.users.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}
