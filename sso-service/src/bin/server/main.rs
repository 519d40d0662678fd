use std::sync::Arc;

use sso_service::config::Config;
use sso_service::domain::auth::models::App;
use sso_service::domain::auth::service::AuthService;
use sso_service::inbound::grpc::AuthGrpcService;
use sso_service::inbound::http::router::create_router;
use sso_service::outbound::crypto::Argon2PasswordHasher;
use sso_service::outbound::crypto::JwtTokenIssuer;
use sso_service::outbound::repositories::SqliteCredentialStore;
use sso_service::outbound::telemetry::TracingObserver;
use sso_service::proto::auth_server::AuthServer;
use tokio::sync::watch;
use tonic::transport::Server;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "sso_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "sso-service",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    let config = Config::load()?;
    let token_ttl = config.token.ttl()?;

    tracing::info!(
        database_url = %config.database.url,
        http_port = config.server.http_port,
        grpc_port = config.server.grpc_port,
        token_ttl_seconds = config.token.ttl_seconds,
        apps = config.apps.len(),
        "Configuration loaded"
    );

    let store = SqliteCredentialStore::connect(&config.database.url).await?;
    tracing::info!(database = "sqlite", "Database connection pool created");

    store.migrate().await?;
    tracing::info!(database = "sqlite", "Database migrations completed");

    for app in &config.apps {
        store.upsert_app(&App::from(app)).await?;
        tracing::info!(app_id = app.id, app_name = %app.name, "Application registered");
    }

    let auth_service = Arc::new(AuthService::new(
        Arc::new(store),
        Arc::new(Argon2PasswordHasher::new()),
        Arc::new(JwtTokenIssuer::new()),
        Arc::new(TracingObserver::new()),
        token_ttl,
    ));

    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    tokio::spawn(async move {
        shutdown_signal().await;
        tracing::info!("Shutdown signal received");
        let _ = shutdown_tx.send(true);
    });

    let http_address = format!("0.0.0.0:{}", config.server.http_port);
    let http_listener = tokio::net::TcpListener::bind(&http_address).await?;
    tracing::info!(
        address = %http_address,
        port = config.server.http_port,
        protocol = "http",
        "Http server listening"
    );

    let http_application = create_router(
        Arc::clone(&auth_service),
        config.server.request_timeout(),
    );
    let mut http_shutdown = shutdown_rx.clone();
    let http_server = tokio::spawn(async move {
        axum::serve(http_listener, http_application)
            .with_graceful_shutdown(async move {
                let _ = http_shutdown.wait_for(|stop| *stop).await;
            })
            .await
    });

    let grpc_address = format!("0.0.0.0:{}", config.server.grpc_port).parse()?;
    let grpc_service = AuthGrpcService::new(Arc::clone(&auth_service));
    tracing::info!(
        address = %grpc_address,
        port = config.server.grpc_port,
        protocol = "grpc",
        "gRpc server listening"
    );

    let request_timeout = config.server.request_timeout();
    let mut grpc_shutdown = shutdown_rx;
    let grpc_server = tokio::spawn(async move {
        Server::builder()
            .timeout(request_timeout)
            .add_service(AuthServer::new(grpc_service))
            .serve_with_shutdown(grpc_address, async move {
                let _ = grpc_shutdown.wait_for(|stop| *stop).await;
            })
            .await
    });

    match tokio::try_join!(http_server, grpc_server) {
        Ok((http_result, grpc_result)) => {
            http_result?;
            grpc_result?;
            tracing::info!("Servers exited successfully");
        }
        Err(e) => tracing::error!(error = %e, "Server error"),
    };

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
