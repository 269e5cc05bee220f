use tonic::Status;

use crate::domain::auth::errors::AuthError;

pub mod is_admin;
pub mod login;
pub mod register;

/// Map a domain error kind onto the caller-facing status vocabulary.
///
/// Unclassified kinds collapse to an opaque `INTERNAL`; their detail is
/// logged here and never crosses the boundary.
pub fn status_from_error(err: AuthError) -> Status {
    match err {
        AuthError::InvalidCredentials => Status::invalid_argument("invalid credentials"),
        AuthError::UserExists(_) => Status::already_exists("user already exists"),
        AuthError::UserNotFound(_) => Status::not_found("user not found"),
        AuthError::ApplicationNotFound(_) => Status::not_found("application not found"),
        other => {
            tracing::error!(error = %other, "auth operation failed");
            Status::internal("internal error")
        }
    }
}

#[cfg(test)]
mod tests {
    use tonic::Code;

    use super::*;
    use crate::domain::auth::errors::EmailError;
    use crate::domain::auth::models::AppId;
    use crate::domain::auth::models::UserId;

    #[test]
    fn test_invalid_credentials_maps_to_invalid_argument() {
        let status = status_from_error(AuthError::InvalidCredentials);
        assert_eq!(status.code(), Code::InvalidArgument);
    }

    #[test]
    fn test_user_exists_maps_to_already_exists() {
        let status = status_from_error(AuthError::UserExists("a@x.com".to_string()));
        assert_eq!(status.code(), Code::AlreadyExists);
    }

    #[test]
    fn test_not_found_kinds_map_to_not_found() {
        let status = status_from_error(AuthError::UserNotFound(UserId(1)));
        assert_eq!(status.code(), Code::NotFound);

        let status = status_from_error(AuthError::ApplicationNotFound(AppId(1)));
        assert_eq!(status.code(), Code::NotFound);
    }

    #[test]
    fn test_unclassified_kinds_map_to_opaque_internal() {
        let status = status_from_error(AuthError::Database(
            "connection refused (pool timeout)".to_string(),
        ));
        assert_eq!(status.code(), Code::Internal);
        // No internal detail crosses the boundary
        assert_eq!(status.message(), "internal error");

        let status = status_from_error(AuthError::InvalidEmail(EmailError::InvalidFormat(
            "bad row".to_string(),
        )));
        assert_eq!(status.code(), Code::Internal);
    }
}
