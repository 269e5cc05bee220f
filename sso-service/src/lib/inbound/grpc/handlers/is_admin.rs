use std::sync::Arc;

use tonic::Status;

use super::status_from_error;
use crate::domain::auth::models::UserId;
use crate::domain::auth::ports::AuthServicePort;
use crate::domain::auth::service::AuthService;
use crate::domain::auth::token::JwtTokenIssuer;
use crate::outbound::repositories::PostgresApplicationRepository;
use crate::outbound::repositories::PostgresUserRepository;
use crate::proto::IsAdminRequest;
use crate::proto::IsAdminResponse;

pub async fn is_admin(
    service: Arc<
        AuthService<PostgresUserRepository, PostgresApplicationRepository, JwtTokenIssuer>,
    >,
    request: IsAdminRequest,
) -> Result<IsAdminResponse, Status> {
    validate(&request)?;

    let is_admin = service
        .is_admin(UserId(request.user_id))
        .await
        .map_err(status_from_error)?;

    Ok(IsAdminResponse { is_admin })
}

fn validate(request: &IsAdminRequest) -> Result<(), Status> {
    if request.user_id == 0 {
        return Err(Status::invalid_argument("user_id is required"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use tonic::Code;

    use super::*;

    #[test]
    fn test_validate_accepts_nonzero_user_id() {
        assert!(validate(&IsAdminRequest { user_id: 1 }).is_ok());
    }

    #[test]
    fn test_validate_rejects_zero_user_id() {
        let status = validate(&IsAdminRequest { user_id: 0 }).unwrap_err();
        assert_eq!(status.code(), Code::InvalidArgument);
    }
}
