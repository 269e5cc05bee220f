use std::sync::Arc;

use tonic::Status;

use super::status_from_error;
use crate::domain::auth::models::AppId;
use crate::domain::auth::models::EmailAddress;
use crate::domain::auth::ports::AuthServicePort;
use crate::domain::auth::service::AuthService;
use crate::domain::auth::token::JwtTokenIssuer;
use crate::outbound::repositories::PostgresApplicationRepository;
use crate::outbound::repositories::PostgresUserRepository;
use crate::proto::LoginRequest;
use crate::proto::LoginResponse;

pub async fn login(
    service: Arc<
        AuthService<PostgresUserRepository, PostgresApplicationRepository, JwtTokenIssuer>,
    >,
    request: LoginRequest,
) -> Result<LoginResponse, Status> {
    validate(&request)?;

    let email = EmailAddress::new(request.email)
        .map_err(|e| Status::invalid_argument(format!("invalid email: {}", e)))?;

    let token = service
        .login(&email, &request.password, AppId(request.app_id))
        .await
        .map_err(status_from_error)?;

    Ok(LoginResponse { token })
}

fn validate(request: &LoginRequest) -> Result<(), Status> {
    if request.email.is_empty() {
        return Err(Status::invalid_argument("email is required"));
    }
    if request.password.is_empty() {
        return Err(Status::invalid_argument("password is required"));
    }
    if request.app_id == 0 {
        return Err(Status::invalid_argument("app_id is required"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use tonic::Code;

    use super::*;

    fn request(email: &str, password: &str, app_id: i64) -> LoginRequest {
        LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
            app_id,
        }
    }

    #[test]
    fn test_validate_accepts_complete_request() {
        assert!(validate(&request("a@x.com", "Pw1!aaaa", 1)).is_ok());
    }

    #[test]
    fn test_validate_rejects_empty_email() {
        let status = validate(&request("", "Pw1!aaaa", 1)).unwrap_err();
        assert_eq!(status.code(), Code::InvalidArgument);
    }

    #[test]
    fn test_validate_rejects_empty_password() {
        let status = validate(&request("a@x.com", "", 1)).unwrap_err();
        assert_eq!(status.code(), Code::InvalidArgument);
    }

    #[test]
    fn test_validate_rejects_zero_app_id() {
        let status = validate(&request("a@x.com", "Pw1!aaaa", 0)).unwrap_err();
        assert_eq!(status.code(), Code::InvalidArgument);
    }
}
