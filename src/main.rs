// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Job Portal Contributors

use std::env;

use tracing_subscriber::EnvFilter;

use job_portal_server::api::router;
use job_portal_server::auth::{CookiePolicy, TokenCodec};
use job_portal_server::config::Config;
use job_portal_server::state::AppState;
use job_portal_server::storage::{DocumentStorage, StoragePaths};

#[tokio::main]
async fn main() {
    init_tracing();

    let config = Config::from_env();

    // Storage must be ready before the first request.
    let mut storage = DocumentStorage::new(StoragePaths::new(&config.data_dir));
    storage
        .initialize()
        .expect("Failed to initialize document storage");

    let tokens = TokenCodec::new(
        config.jwt_secret.as_bytes(),
        chrono::Duration::days(config.token_ttl_days),
    );
    let cookies = CookiePolicy::from_config(&config);

    let state = AppState::new(storage, tokens, cookies);
    let app = router(state, config.client_origin.clone());

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("Failed to bind listen address");

    tracing::info!(%addr, data_dir = %config.data_dir.display(), "job portal server listening (docs at /docs)");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server failed");
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,tower_http=debug"));

    let json = env::var("LOG_FORMAT").is_ok_and(|v| v == "json");
    if json {
        tracing_subscriber::fmt().with_env_filter(filter).json().init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("shutdown signal received");
}
