use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

use auth::JwtHandler;

use crate::domain::auth::errors::TokenError;
use crate::domain::auth::models::Application;
use crate::domain::auth::models::User;
use crate::domain::auth::ports::TokenIssuer;

/// Claim set asserted inside an access token.
///
/// Always scoped to exactly one user and one application; `exp` is `iat`
/// plus the configured TTL, both taken from a single clock read just before
/// signing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AccessTokenClaims {
    pub user_id: i64,
    pub email: String,
    pub app_id: i64,
    pub iat: i64,
    pub exp: i64,
}

/// Token issuer backed by HS256-signed JWTs.
///
/// The signing key is rebuilt from the application record on every call, so
/// secret rotation in the store takes effect immediately. There is no
/// revocation list: an issued token stays valid until its `exp`.
pub struct JwtTokenIssuer;

impl JwtTokenIssuer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JwtTokenIssuer {
    fn default() -> Self {
        Self::new()
    }
}

impl TokenIssuer for JwtTokenIssuer {
    fn issue(&self, user: &User, app: &Application, ttl: Duration) -> Result<String, TokenError> {
        let issued_at = Utc::now();

        let claims = AccessTokenClaims {
            user_id: user.id.0,
            email: user.email.as_str().to_string(),
            app_id: app.id.0,
            iat: issued_at.timestamp(),
            exp: (issued_at + ttl).timestamp(),
        };

        JwtHandler::new(app.secret.as_bytes())
            .encode(&claims)
            .map_err(TokenError::from)
    }

    fn verify(&self, token: &str, app: &Application) -> Result<AccessTokenClaims, TokenError> {
        JwtHandler::new(app.secret.as_bytes())
            .decode(token)
            .map_err(TokenError::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::auth::models::AppId;
    use crate::domain::auth::models::EmailAddress;
    use crate::domain::auth::models::UserId;

    fn test_user() -> User {
        User {
            id: UserId(42),
            email: EmailAddress::new("alice@example.com".to_string()).unwrap(),
            password_hash: "$argon2id$test_hash".to_string(),
        }
    }

    fn test_app(id: i64, secret: &str) -> Application {
        Application {
            id: AppId(id),
            name: format!("app-{}", id),
            secret: secret.to_string(),
        }
    }

    #[test]
    fn test_issue_and_verify() {
        let issuer = JwtTokenIssuer::new();
        let user = test_user();
        let app = test_app(1, "test_app_secret_at_least_32_bytes!");

        let token = issuer
            .issue(&user, &app, Duration::seconds(3600))
            .expect("Failed to issue token");
        assert_eq!(token.split('.').count(), 3);

        let claims = issuer.verify(&token, &app).expect("Failed to verify token");
        assert_eq!(claims.user_id, 42);
        assert_eq!(claims.email, "alice@example.com");
        assert_eq!(claims.app_id, 1);
        assert_eq!(claims.exp - claims.iat, 3600);
    }

    #[test]
    fn test_expiry_matches_ttl() {
        let issuer = JwtTokenIssuer::new();
        let user = test_user();
        let app = test_app(1, "test_app_secret_at_least_32_bytes!");

        let before = Utc::now().timestamp();
        let token = issuer
            .issue(&user, &app, Duration::seconds(900))
            .expect("Failed to issue token");
        let after = Utc::now().timestamp();

        let claims = issuer.verify(&token, &app).expect("Failed to verify token");
        assert!(claims.iat >= before && claims.iat <= after);
        assert_eq!(claims.exp, claims.iat + 900);
    }

    #[test]
    fn test_verify_with_other_application_secret_fails() {
        let issuer = JwtTokenIssuer::new();
        let user = test_user();
        let app = test_app(1, "first_app_secret_at_least_32_bytes!");
        let other = test_app(2, "other_app_secret_at_least_32_bytes!");

        let token = issuer
            .issue(&user, &app, Duration::seconds(3600))
            .expect("Failed to issue token");

        let result = issuer.verify(&token, &other);
        assert!(matches!(result, Err(TokenError::Invalid(_))));
    }

    #[test]
    fn test_verify_expired_token() {
        let issuer = JwtTokenIssuer::new();
        let user = test_user();
        let app = test_app(1, "test_app_secret_at_least_32_bytes!");

        // Negative TTL puts exp well in the past, beyond validation leeway.
        let token = issuer
            .issue(&user, &app, Duration::seconds(-3600))
            .expect("Failed to issue token");

        let result = issuer.verify(&token, &app);
        assert!(matches!(result, Err(TokenError::Expired)));
    }

    #[test]
    fn test_verify_malformed_token() {
        let issuer = JwtTokenIssuer::new();
        let app = test_app(1, "test_app_secret_at_least_32_bytes!");

        let result = issuer.verify("not.a.token", &app);
        assert!(matches!(result, Err(TokenError::Invalid(_))));
    }
}
