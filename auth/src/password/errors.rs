use thiserror::Error;

/// Error type for password operations.
///
/// `InvalidHash` signals a stored hash this hasher could not have produced;
/// it is never returned for a plain mismatch.
#[derive(Debug, Clone, Error)]
pub enum PasswordError {
    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    #[error("Stored password hash is malformed: {0}")]
    InvalidHash(String),

    #[error("Password verification failed: {0}")]
    VerificationFailed(String),
}
