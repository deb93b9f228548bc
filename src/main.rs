// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use std::{env, net::SocketAddr};

use tokio_util::sync::CancellationToken;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use nebula_notary::{
    api::router,
    chain::{EvidenceGateway, SEPOLIA},
    config,
    drive::DriveClient,
    prefs::PreferenceStore,
    state::AppState,
};

fn init_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info,tower_http=debug"));

    let registry = tracing_subscriber::registry().with(env_filter);

    let format = env::var(config::LOG_FORMAT_ENV).unwrap_or_else(|_| "pretty".to_string());
    if format.eq_ignore_ascii_case("json") {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_target(true))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_target(true))
            .init();
    }
}

#[tokio::main]
async fn main() {
    init_tracing();

    let rpc_url = config::rpc_url();
    let contract_address = config::contract_address();

    let gateway = EvidenceGateway::connect(SEPOLIA, &rpc_url, &contract_address)
        .expect("chain configuration is invalid");

    let data_dir = config::data_dir();
    if let Err(e) = std::fs::create_dir_all(&data_dir) {
        tracing::warn!(path = %data_dir.display(), error = %e, "could not create data directory");
    }
    let prefs = PreferenceStore::open(data_dir.join("preferences.json"));
    let state = AppState::new(gateway, prefs, DriveClient::new(), rpc_url);
    let app = router(state);

    // Parse bind address
    let host = env::var(config::HOST_ENV).unwrap_or_else(|_| "0.0.0.0".to_string());
    let port: u16 = env::var(config::PORT_ENV)
        .unwrap_or_else(|_| "8080".to_string())
        .parse()
        .unwrap_or(8080);

    let addr: SocketAddr = format!("{host}:{port}")
        .parse()
        .expect("Failed to parse bind address");

    let shutdown = CancellationToken::new();
    let signal_token = shutdown.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::info!("shutdown signal received");
            signal_token.cancel();
        }
    });

    tracing::info!(%addr, contract = %contract_address, "Nebula Notary listening (docs at /docs)");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind listener");

    axum::serve(listener, app)
        .with_graceful_shutdown(async move { shutdown.cancelled().await })
        .await
        .expect("HTTP server failed");
}
