use tonic::Status;

use crate::domain::auth::errors::AuthError;
use crate::inbound::validation::ValidationError;

pub mod is_admin;
pub mod login;
pub mod register;

impl From<AuthError> for Status {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::InvalidCredentials | AuthError::InvalidAppId => {
                Status::invalid_argument(err.to_string())
            }
            AuthError::UserAlreadyExists => Status::already_exists(err.to_string()),
            AuthError::UserNotFound => Status::not_found(err.to_string()),
            AuthError::Internal => Status::internal(err.to_string()),
        }
    }
}

impl From<ValidationError> for Status {
    fn from(err: ValidationError) -> Self {
        Status::invalid_argument(err.to_string())
    }
}
