use tonic::Status;

use crate::domain::auth::ports::AuthServicePort;
use crate::inbound::validation;
use crate::proto::RegisterRequest;
use crate::proto::RegisterResponse;

pub async fn register<AS: AuthServicePort>(
    service: &AS,
    request: RegisterRequest,
) -> Result<RegisterResponse, Status> {
    let email = validation::email(&request.email)?;
    let password = validation::password(request.password)?;

    let user_id = service.register(email, password).await?;

    Ok(RegisterResponse { user_id: user_id.0 })
}
