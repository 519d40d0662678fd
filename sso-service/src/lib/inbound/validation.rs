//! Request validation shared by the gRPC and HTTP transports.
//!
//! The auth service assumes its inputs already passed these checks.

use thiserror::Error;

use crate::domain::auth::models::AppId;
use crate::domain::auth::models::Password;
use crate::domain::auth::models::UserId;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("email is required")]
    EmailRequired,

    #[error("password is required")]
    PasswordRequired,

    #[error("app_id is required")]
    AppIdRequired,

    #[error("user_id is required")]
    UserIdRequired,
}

pub fn email(email: &str) -> Result<&str, ValidationError> {
    if email.is_empty() {
        return Err(ValidationError::EmailRequired);
    }
    Ok(email)
}

pub fn password(password: String) -> Result<Password, ValidationError> {
    if password.is_empty() {
        return Err(ValidationError::PasswordRequired);
    }
    Ok(Password::new(password))
}

pub fn app_id(app_id: i32) -> Result<AppId, ValidationError> {
    if app_id == 0 {
        return Err(ValidationError::AppIdRequired);
    }
    Ok(AppId(app_id))
}

pub fn user_id(user_id: i64) -> Result<UserId, ValidationError> {
    if user_id <= 0 {
        return Err(ValidationError::UserIdRequired);
    }
    Ok(UserId(user_id))
}
