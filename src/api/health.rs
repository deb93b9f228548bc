// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{config, state::AppState};

/// Readiness report: overall status plus the individual checks behind it.
#[derive(Debug, Serialize, ToSchema)]
pub struct ReadyResponse {
    /// "ok" or "degraded".
    pub status: String,
    /// Network the service is pinned to.
    pub network: String,
    /// Contract address records are read from and written to.
    pub contract: String,
    pub checks: HealthChecks,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct HealthChecks {
    /// The process is up and serving.
    pub service: String,
    /// Preference storage directory: "ok" or "missing".
    pub data_dir: String,
}

/// Minimal body for liveness probes.
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
}

/// "ok" when the resolved data directory exists, "missing" otherwise. The
/// same resolution (`DATA_DIR` or the `./data` default) the preference
/// store writes through, so the probe and the store can never disagree on
/// which directory is being checked.
fn check_data_dir() -> String {
    if config::data_dir().exists() {
        "ok".to_string()
    } else {
        "missing".to_string()
    }
}

/// Readiness check.
///
/// Deliberately does not call out to the RPC endpoint: a flaky provider
/// would flap the probe, and chain reachability already surfaces through
/// the record routes as 503s.
#[utoipa::path(
    get,
    path = "/health",
    tag = "Health",
    responses(
        (status = 200, description = "Service is healthy", body = ReadyResponse),
        (status = 503, description = "Service is degraded", body = ReadyResponse)
    )
)]
pub async fn health(State(state): State<AppState>) -> (StatusCode, Json<ReadyResponse>) {
    let data_dir = check_data_dir();
    let all_ok = data_dir == "ok";

    let network = state.gateway.network();
    let response = ReadyResponse {
        status: if all_ok { "ok" } else { "degraded" }.to_string(),
        network: network.name.to_string(),
        contract: state.gateway.contract_address().to_string(),
        checks: HealthChecks {
            service: "ok".to_string(),
            data_dir,
        },
    };

    let status = if all_ok {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (status, Json(response))
}

/// Liveness probe. Always 200 while the process runs; readiness lives at
/// `/health`.
#[utoipa::path(
    get,
    path = "/health/live",
    tag = "Health",
    responses(
        (status = 200, description = "Service is alive", body = HealthResponse)
    )
)]
pub async fn liveness() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::testing::test_state;

    #[tokio::test]
    async fn liveness_always_ok() {
        let Json(body) = liveness().await;
        assert_eq!(body.status, "ok");
    }

    #[tokio::test]
    async fn health_reports_pinned_network_and_storage() {
        let (state, _dir) = test_state();
        let (status, Json(body)) = health(State(state)).await;
        assert_eq!(body.network, "Sepolia Testnet");
        assert!(body.contract.starts_with("0x"));
        assert_eq!(body.checks.service, "ok");

        // The storage check is always present, default data dir included,
        // and the overall status follows it.
        match body.checks.data_dir.as_str() {
            "ok" => assert_eq!(status, StatusCode::OK),
            "missing" => assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE),
            other => panic!("unexpected storage check value {other:?}"),
        }
    }
}
