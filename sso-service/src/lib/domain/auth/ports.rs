use async_trait::async_trait;
use chrono::Duration;

use crate::domain::auth::errors::AuthError;
use crate::domain::auth::errors::TokenError;
use crate::domain::auth::models::AppId;
use crate::domain::auth::models::Application;
use crate::domain::auth::models::EmailAddress;
use crate::domain::auth::models::User;
use crate::domain::auth::models::UserId;
use crate::domain::auth::token::AccessTokenClaims;

/// Port for authentication domain operations.
#[async_trait]
pub trait AuthServicePort: Send + Sync + 'static {
    /// Verify credentials and issue an access token scoped to one application.
    ///
    /// # Arguments
    /// * `email` - Email of a previously registered account
    /// * `password` - Plaintext password to verify
    /// * `app_id` - Identifier of the relying application
    ///
    /// # Returns
    /// Signed access token, verifiable with the application's secret
    ///
    /// # Errors
    /// * `InvalidCredentials` - Unknown email or password mismatch
    /// * `ApplicationNotFound` - No application with this id
    /// * `Database` - Store operation failed
    async fn login(
        &self,
        email: &EmailAddress,
        password: &str,
        app_id: AppId,
    ) -> Result<String, AuthError>;

    /// Create a new user account from an email and plaintext password.
    ///
    /// The password is hashed before it reaches the store; the plaintext is
    /// not retained.
    ///
    /// # Returns
    /// Store-assigned id of the new user
    ///
    /// # Errors
    /// * `UserExists` - Email is already registered
    /// * `Database` - Store operation failed
    async fn register(&self, email: EmailAddress, password: &str) -> Result<UserId, AuthError>;

    /// Report whether the user holds administrative privileges.
    ///
    /// Reads the stored flag only; no credentials are involved and nothing
    /// is cached.
    ///
    /// # Errors
    /// * `UserNotFound` - No user with this id
    /// * `Database` - Store operation failed
    async fn is_admin(&self, user_id: UserId) -> Result<bool, AuthError>;
}

/// Persistence operations for user accounts.
#[async_trait]
pub trait UserRepository: Send + Sync + 'static {
    /// Persist a new user, returning the store-assigned id.
    ///
    /// # Errors
    /// * `UserExists` - Email uniqueness constraint violated
    /// * `Database` - Store operation failed
    async fn insert(&self, email: &EmailAddress, password_hash: &str)
        -> Result<UserId, AuthError>;

    /// Retrieve a user by email address.
    ///
    /// # Returns
    /// Optional user entity (None if not found)
    ///
    /// # Errors
    /// * `Database` - Store operation failed
    async fn find_by_email(&self, email: &EmailAddress) -> Result<Option<User>, AuthError>;

    /// Retrieve the admin flag for a user id.
    ///
    /// # Returns
    /// Optional flag (None if no such user)
    ///
    /// # Errors
    /// * `Database` - Store operation failed
    async fn find_admin_flag(&self, id: UserId) -> Result<Option<bool>, AuthError>;
}

/// Persistence operations for relying applications.
#[async_trait]
pub trait ApplicationRepository: Send + Sync + 'static {
    /// Retrieve an application by identifier.
    ///
    /// # Returns
    /// Optional application record (None if not found)
    ///
    /// # Errors
    /// * `Database` - Store operation failed
    async fn find_by_id(&self, id: AppId) -> Result<Option<Application>, AuthError>;
}

/// Signs and verifies per-application access tokens.
pub trait TokenIssuer: Send + Sync + 'static {
    /// Mint a token asserting `user`'s identity towards `app`, expiring
    /// `ttl` after issuance.
    fn issue(&self, user: &User, app: &Application, ttl: Duration) -> Result<String, TokenError>;

    /// Verify a token with `app`'s secret and return its claims.
    ///
    /// Fails closed on signature mismatch, malformed structure, or expiry.
    fn verify(&self, token: &str, app: &Application) -> Result<AccessTokenClaims, TokenError>;
}
