mod common;

use common::APP_ID;
use common::APP_SECRET;
use sso_service::domain::auth::models::UserId;
use sso_service::inbound::grpc::AuthGrpcService;
use sso_service::proto::auth_server::Auth;
use sso_service::proto::IsAdminRequest;
use sso_service::proto::LoginRequest;
use sso_service::proto::RegisterRequest;
use tonic::Code;
use tonic::Request;

fn register_request(email: &str, password: &str) -> Request<RegisterRequest> {
    Request::new(RegisterRequest {
        email: email.to_string(),
        password: password.to_string(),
    })
}

fn login_request(email: &str, password: &str, app_id: i32) -> Request<LoginRequest> {
    Request::new(LoginRequest {
        email: email.to_string(),
        password: password.to_string(),
        app_id,
    })
}

#[tokio::test]
async fn test_register_and_login() {
    let (service, _store) = common::auth_service().await;
    let grpc = AuthGrpcService::new(service);

    let user_id = grpc
        .register(register_request("a@x.com", "pw123"))
        .await
        .expect("Register failed")
        .into_inner()
        .user_id;
    assert_eq!(user_id, 1);

    let token = grpc
        .login(login_request("a@x.com", "pw123", APP_ID))
        .await
        .expect("Login failed")
        .into_inner()
        .token;

    let claims = auth::SessionTokens::new()
        .verify(&token, APP_SECRET)
        .expect("Token should verify");
    assert_eq!(claims.uid, user_id);
    assert_eq!(claims.app_id, APP_ID);
}

#[tokio::test]
async fn test_domain_errors_map_to_status_codes() {
    let (service, _store) = common::auth_service().await;
    let grpc = AuthGrpcService::new(service);

    grpc.register(register_request("a@x.com", "pw123"))
        .await
        .unwrap();

    let status = grpc
        .register(register_request("a@x.com", "pw456"))
        .await
        .unwrap_err();
    assert_eq!(status.code(), Code::AlreadyExists);

    let status = grpc
        .login(login_request("a@x.com", "wrong", APP_ID))
        .await
        .unwrap_err();
    assert_eq!(status.code(), Code::InvalidArgument);
    assert_eq!(status.message(), "invalid credentials");

    let status = grpc
        .login(login_request("nobody@x.com", "pw123", APP_ID))
        .await
        .unwrap_err();
    assert_eq!(status.code(), Code::InvalidArgument);
    assert_eq!(status.message(), "invalid credentials");

    let status = grpc
        .login(login_request("a@x.com", "pw123", 42))
        .await
        .unwrap_err();
    assert_eq!(status.code(), Code::InvalidArgument);
    assert_eq!(status.message(), "invalid app id");

    let status = grpc
        .is_admin(Request::new(IsAdminRequest { user_id: 999 }))
        .await
        .unwrap_err();
    assert_eq!(status.code(), Code::NotFound);
}

#[tokio::test]
async fn test_concurrent_register_same_email() {
    let (service, store) = common::auth_service().await;
    let grpc = AuthGrpcService::new(service);

    let (first, second) = tokio::join!(
        grpc.register(register_request("a@x.com", "pw123")),
        grpc.register(register_request("a@x.com", "pw456")),
    );

    let (winner, loser) = match (first, second) {
        (Ok(winner), Err(loser)) | (Err(loser), Ok(winner)) => (winner, loser),
        (first, second) => panic!("expected one success, got {:?} and {:?}", first, second),
    };
    assert_eq!(winner.into_inner().user_id, 1);
    assert_eq!(loser.code(), Code::AlreadyExists);

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users WHERE email = ?1")
        .bind("a@x.com")
        .fetch_one(store.pool())
        .await
        .unwrap();
    assert_eq!(count, 1);
}

#[tokio::test]
async fn test_is_admin() {
    let (service, store) = common::auth_service().await;
    let grpc = AuthGrpcService::new(service);

    let user_id = grpc
        .register(register_request("a@x.com", "pw123"))
        .await
        .unwrap()
        .into_inner()
        .user_id;

    let is_admin = grpc
        .is_admin(Request::new(IsAdminRequest { user_id }))
        .await
        .unwrap()
        .into_inner()
        .is_admin;
    assert!(!is_admin);

    store.set_admin(UserId(user_id), true).await.unwrap();

    let is_admin = grpc
        .is_admin(Request::new(IsAdminRequest { user_id }))
        .await
        .unwrap()
        .into_inner()
        .is_admin;
    assert!(is_admin);
}

#[tokio::test]
async fn test_validation_rejects_before_service() {
    let (service, store) = common::auth_service().await;
    let grpc = AuthGrpcService::new(service);

    let cases = [
        grpc.register(register_request("", "pw123")).await,
        grpc.register(register_request("a@x.com", "")).await,
    ];
    for result in cases {
        assert_eq!(result.unwrap_err().code(), Code::InvalidArgument);
    }

    let status = grpc
        .login(login_request("a@x.com", "pw123", 0))
        .await
        .unwrap_err();
    assert_eq!(status.code(), Code::InvalidArgument);
    assert_eq!(status.message(), "app_id is required");

    let status = grpc
        .is_admin(Request::new(IsAdminRequest { user_id: 0 }))
        .await
        .unwrap_err();
    assert_eq!(status.code(), Code::InvalidArgument);
    assert_eq!(status.message(), "user_id is required");

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
        .fetch_one(store.pool())
        .await
        .unwrap();
    assert_eq!(count, 0);
}
