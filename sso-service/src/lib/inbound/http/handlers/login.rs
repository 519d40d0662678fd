use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::auth::models::AppId;
use crate::domain::auth::models::Password;
use crate::domain::auth::ports::AuthServicePort;
use crate::inbound::http::router::AppState;
use crate::inbound::validation;
use crate::inbound::validation::ValidationError;

pub async fn login<AS: AuthServicePort>(
    State(state): State<AppState<AS>>,
    Json(body): Json<LoginRequestBody>,
) -> Result<ApiSuccess<LoginResponseData>, ApiError> {
    let (email, password, app_id) = body.try_into_parts()?;

    state
        .auth_service
        .login(&email, password, app_id)
        .await
        .map_err(ApiError::from)
        .map(|token| {
            ApiSuccess::new(
                StatusCode::OK,
                LoginResponseData {
                    token: token.into_inner(),
                },
            )
        })
}

#[derive(Deserialize)]
pub struct LoginRequestBody {
    email: String,
    password: String,
    app_id: i32,
}

impl LoginRequestBody {
    fn try_into_parts(self) -> Result<(String, Password, AppId), ValidationError> {
        validation::email(&self.email)?;
        let password = validation::password(self.password)?;
        let app_id = validation::app_id(self.app_id)?;
        Ok((self.email, password, app_id))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoginResponseData {
    pub token: String,
}
