use auth::JwtError;
use auth::PasswordError;
use thiserror::Error;

use crate::domain::auth::models::AppId;
use crate::domain::auth::models::UserId;

/// Error for email address validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EmailError {
    #[error("Invalid email format: {0}")]
    InvalidFormat(String),
}

/// Error for token signing and verification
#[derive(Debug, Clone, Error)]
pub enum TokenError {
    #[error("Failed to sign token: {0}")]
    SigningFailed(String),

    #[error("Token is expired")]
    Expired,

    #[error("Token is invalid: {0}")]
    Invalid(String),
}

impl From<JwtError> for TokenError {
    fn from(err: JwtError) -> Self {
        match err {
            JwtError::EncodingFailed(msg) => TokenError::SigningFailed(msg),
            JwtError::DecodingFailed(msg) => TokenError::Invalid(msg),
            JwtError::TokenExpired => TokenError::Expired,
        }
    }
}

/// Top-level error for authentication operations.
///
/// Every failure carries exactly one kind, chosen at the point of
/// occurrence; the transport adapter maps kinds to status codes with a
/// single match and never re-derives a kind downstream.
#[derive(Debug, Clone, Error)]
pub enum AuthError {
    /// Unknown email or wrong password. The two causes are deliberately
    /// indistinguishable so callers cannot probe which emails are registered.
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("User already exists: {0}")]
    UserExists(String),

    #[error("User not found: {0}")]
    UserNotFound(UserId),

    #[error("Application not found: {0}")]
    ApplicationNotFound(AppId),

    // Value object validation errors (automatically converted via #[from])
    #[error("Invalid email: {0}")]
    InvalidEmail(#[from] EmailError),

    #[error("Password error: {0}")]
    Password(#[from] PasswordError),

    #[error("Token error: {0}")]
    Token(#[from] TokenError),

    // Infrastructure errors
    #[error("Database error: {0}")]
    Database(String),
}
