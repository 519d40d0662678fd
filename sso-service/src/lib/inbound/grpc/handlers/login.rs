use tonic::Status;

use crate::domain::auth::ports::AuthServicePort;
use crate::inbound::validation;
use crate::proto::LoginRequest;
use crate::proto::LoginResponse;

pub async fn login<AS: AuthServicePort>(
    service: &AS,
    request: LoginRequest,
) -> Result<LoginResponse, Status> {
    let email = validation::email(&request.email)?;
    let password = validation::password(request.password)?;
    let app_id = validation::app_id(request.app_id)?;

    let token = service.login(email, password, app_id).await?;

    Ok(LoginResponse {
        token: token.into_inner(),
    })
}
