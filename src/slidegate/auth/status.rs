/// Who a successful login or cookie resolved to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub name: String,
    pub username: String,
}

/// Outcome of a login attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthStatus {
    Authenticated(Identity),
    /// Credentials were submitted and did not match.
    Failed,
    /// Nothing has been submitted yet.
    Pending,
}

impl AuthStatus {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Authenticated(_) => "authenticated",
            Self::Failed => "failed",
            Self::Pending => "pending",
        }
    }

    #[must_use]
    pub const fn identity(&self) -> Option<&Identity> {
        match self {
            Self::Authenticated(identity) => Some(identity),
            Self::Failed | Self::Pending => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_strings() {
        let identity = Identity {
            name: "Demo User".to_string(),
            username: "user".to_string(),
        };
        assert_eq!(
            AuthStatus::Authenticated(identity.clone()).as_str(),
            "authenticated"
        );
        assert_eq!(AuthStatus::Failed.as_str(), "failed");
        assert_eq!(AuthStatus::Pending.as_str(), "pending");
        assert_eq!(
            AuthStatus::Authenticated(identity.clone()).identity(),
            Some(&identity)
        );
        assert_eq!(AuthStatus::Failed.identity(), None);
    }
}
