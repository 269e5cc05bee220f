use std::sync::Arc;

use tonic::Status;

use super::status_from_error;
use crate::domain::auth::models::EmailAddress;
use crate::domain::auth::ports::AuthServicePort;
use crate::domain::auth::service::AuthService;
use crate::domain::auth::token::JwtTokenIssuer;
use crate::outbound::repositories::PostgresApplicationRepository;
use crate::outbound::repositories::PostgresUserRepository;
use crate::proto::RegisterRequest;
use crate::proto::RegisterResponse;

pub async fn register(
    service: Arc<
        AuthService<PostgresUserRepository, PostgresApplicationRepository, JwtTokenIssuer>,
    >,
    request: RegisterRequest,
) -> Result<RegisterResponse, Status> {
    validate(&request)?;

    let email = EmailAddress::new(request.email)
        .map_err(|e| Status::invalid_argument(format!("invalid email: {}", e)))?;

    let user_id = service
        .register(email, &request.password)
        .await
        .map_err(status_from_error)?;

    Ok(RegisterResponse { user_id: user_id.0 })
}

fn validate(request: &RegisterRequest) -> Result<(), Status> {
    if request.email.is_empty() {
        return Err(Status::invalid_argument("email is required"));
    }
    if request.password.is_empty() {
        return Err(Status::invalid_argument("password is required"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use tonic::Code;

    use super::*;

    #[test]
    fn test_validate_accepts_complete_request() {
        let request = RegisterRequest {
            email: "a@x.com".to_string(),
            password: "Pw1!aaaa".to_string(),
        };
        assert!(validate(&request).is_ok());
    }

    #[test]
    fn test_validate_rejects_missing_fields() {
        let cases = [
            ("", "Pw1!aaaa"),
            ("a@x.com", ""),
            ("", ""),
        ];

        for (email, password) in cases {
            let request = RegisterRequest {
                email: email.to_string(),
                password: password.to_string(),
            };
            let status = validate(&request).unwrap_err();
            assert_eq!(status.code(), Code::InvalidArgument);
        }
    }
}
