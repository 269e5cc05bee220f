use std::sync::Arc;

use async_trait::async_trait;
use chrono::Duration;

use auth::PasswordHasher;

use crate::domain::auth::errors::AuthError;
use crate::domain::auth::models::AppId;
use crate::domain::auth::models::EmailAddress;
use crate::domain::auth::models::UserId;
use crate::domain::auth::ports::ApplicationRepository;
use crate::domain::auth::ports::AuthServicePort;
use crate::domain::auth::ports::TokenIssuer;
use crate::domain::auth::ports::UserRepository;

/// Domain service for credential verification, account registration, admin
/// lookup and token issuance.
///
/// Holds immutable collaborator references and the token TTL, nothing else;
/// it takes no locks and is safe to share across any number of concurrent
/// calls. Application secrets are fetched through the repository on every
/// login, never cached here.
pub struct AuthService<UR, AR, TI>
where
    UR: UserRepository,
    AR: ApplicationRepository,
    TI: TokenIssuer,
{
    users: Arc<UR>,
    applications: Arc<AR>,
    token_issuer: Arc<TI>,
    password_hasher: PasswordHasher,
    token_ttl: Duration,
}

impl<UR, AR, TI> AuthService<UR, AR, TI>
where
    UR: UserRepository,
    AR: ApplicationRepository,
    TI: TokenIssuer,
{
    /// Create a new authentication service with injected dependencies.
    ///
    /// # Arguments
    /// * `users` - User persistence implementation
    /// * `applications` - Application persistence implementation
    /// * `token_issuer` - Access token signing implementation
    /// * `token_ttl` - Lifetime of issued access tokens
    pub fn new(
        users: Arc<UR>,
        applications: Arc<AR>,
        token_issuer: Arc<TI>,
        token_ttl: Duration,
    ) -> Self {
        Self {
            users,
            applications,
            token_issuer,
            password_hasher: PasswordHasher::new(),
            token_ttl,
        }
    }
}

#[async_trait]
impl<UR, AR, TI> AuthServicePort for AuthService<UR, AR, TI>
where
    UR: UserRepository,
    AR: ApplicationRepository,
    TI: TokenIssuer,
{
    async fn login(
        &self,
        email: &EmailAddress,
        password: &str,
        app_id: AppId,
    ) -> Result<String, AuthError> {
        let user = match self.users.find_by_email(email).await? {
            Some(user) => user,
            None => {
                // Reported exactly like a wrong password so callers cannot
                // probe which emails are registered.
                tracing::warn!(app_id = %app_id, "login attempt for unknown email");
                return Err(AuthError::InvalidCredentials);
            }
        };

        let matched = self
            .password_hasher
            .verify(password, &user.password_hash)?;
        if !matched {
            tracing::info!(user_id = %user.id, "login attempt with wrong password");
            return Err(AuthError::InvalidCredentials);
        }

        let app = self
            .applications
            .find_by_id(app_id)
            .await?
            .ok_or(AuthError::ApplicationNotFound(app_id))?;

        let token = self.token_issuer.issue(&user, &app, self.token_ttl)?;

        tracing::info!(user_id = %user.id, app_id = %app.id, "user logged in");
        Ok(token)
    }

    async fn register(&self, email: EmailAddress, password: &str) -> Result<UserId, AuthError> {
        let password_hash = self.password_hasher.hash(password)?;

        let id = self.users.insert(&email, &password_hash).await?;

        tracing::info!(user_id = %id, "user registered");
        Ok(id)
    }

    async fn is_admin(&self, user_id: UserId) -> Result<bool, AuthError> {
        let is_admin = self
            .users
            .find_admin_flag(user_id)
            .await?
            .ok_or(AuthError::UserNotFound(user_id))?;

        tracing::info!(user_id = %user_id, is_admin, "admin flag checked");
        Ok(is_admin)
    }
}
