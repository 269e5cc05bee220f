use std::fmt;
use std::str::FromStr;

use crate::domain::auth::errors::EmailError;

/// User aggregate entity.
///
/// Represents a registered account. The password hash is opaque Argon2id
/// PHC output; it is never returned to callers.
#[derive(Debug, Clone)]
pub struct User {
    pub id: UserId,
    pub email: EmailAddress,
    pub password_hash: String,
}

/// User unique identifier, assigned by the store on insertion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UserId(pub i64);

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Application identifier, supplied by callers and managed outside this
/// service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AppId(pub i64);

impl fmt::Display for AppId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Relying application that accepts tokens issued by this service.
///
/// The secret signs only this application's tokens. A compromised secret
/// invalidates trust in every outstanding token of the application until the
/// secret is rotated and all holders re-authenticate.
#[derive(Debug, Clone)]
pub struct Application {
    pub id: AppId,
    pub name: String,
    pub secret: String,
}

/// Email address type
///
/// Validates email format using RFC 5322 compliant parser. Uniqueness and
/// case policy are fixed by the store's unique index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Create a new validated email address.
    ///
    /// # Arguments
    /// * `email` - Raw email string
    ///
    /// # Errors
    /// * `InvalidFormat` - Email does not conform to RFC 5322
    pub fn new(email: String) -> Result<Self, EmailError> {
        email_address::EmailAddress::from_str(&email)
            .map(|_| EmailAddress(email))
            .map_err(|e| EmailError::InvalidFormat(e.to_string()))
    }

    /// Get email as string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
