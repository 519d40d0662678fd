//! Shared by the HTTP and gRPC test crates; each uses a subset.
#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use sso_service::domain::auth::models::App;
use sso_service::domain::auth::models::AppId;
use sso_service::domain::auth::models::AppSecret;
use sso_service::domain::auth::models::TokenTtl;
use sso_service::domain::auth::service::AuthService;
use sso_service::inbound::http::router::create_router;
use sso_service::outbound::crypto::Argon2PasswordHasher;
use sso_service::outbound::crypto::JwtTokenIssuer;
use sso_service::outbound::repositories::SqliteCredentialStore;
use sso_service::outbound::telemetry::TracingObserver;

pub const APP_ID: i32 = 7;
pub const APP_SECRET: &[u8] = b"test-secret-key-for-jwt-signing-at-least-32-bytes";
pub const TOKEN_TTL_SECONDS: u64 = 3600;

pub type TestAuthService =
    AuthService<SqliteCredentialStore, Argon2PasswordHasher, JwtTokenIssuer, TracingObserver>;

/// Auth service over a fresh in-memory store with one registered app
pub async fn auth_service() -> (Arc<TestAuthService>, SqliteCredentialStore) {
    let store = SqliteCredentialStore::in_memory()
        .await
        .expect("Failed to create in-memory store");

    store
        .upsert_app(&App {
            id: AppId(APP_ID),
            name: "test".to_string(),
            secret: AppSecret::from_bytes(APP_SECRET.to_vec()),
        })
        .await
        .expect("Failed to seed test app");

    let service = Arc::new(AuthService::new(
        Arc::new(store.clone()),
        Arc::new(Argon2PasswordHasher::new()),
        Arc::new(JwtTokenIssuer::new()),
        Arc::new(TracingObserver::new()),
        TokenTtl::from_secs(TOKEN_TTL_SECONDS).expect("Invalid token ttl"),
    ));

    (service, store)
}

/// Test application that spawns a real server
pub struct TestApp {
    pub address: String,
    pub store: SqliteCredentialStore,
    pub api_client: reqwest::Client,
}

impl TestApp {
    /// Spawn the application in a background task and return TestApp
    pub async fn spawn() -> Self {
        let (service, store) = auth_service().await;

        // Use random port (0 = OS assigns)
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind random port");
        let address = format!("http://127.0.0.1:{}", listener.local_addr().unwrap().port());

        let router = create_router(service, Duration::from_secs(10));

        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("Server error");
        });

        Self {
            address,
            store,
            api_client: reqwest::Client::new(),
        }
    }

    /// Helper to make GET request
    pub fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.get(&format!("{}{}", self.address, path))
    }

    /// Helper to make POST request
    pub fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.post(&format!("{}{}", self.address, path))
    }
}
