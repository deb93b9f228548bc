// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{chain::ensure_sepolia_network, error::ApiError, state::AppState};

/// Current wallet session status.
#[derive(Debug, Serialize, ToSchema)]
pub struct SessionResponse {
    /// Whether a signing account is connected.
    pub connected: bool,
    /// Connected account address (checksummed), if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    /// Network the service is pinned to.
    pub network: String,
    /// Chain ID of that network.
    pub chain_id: u64,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct ConnectRequest {
    /// Requested network; only `sepolia` is accepted.
    #[serde(default)]
    pub network: Option<String>,
}

fn session_body(state: &AppState, address: Option<String>) -> SessionResponse {
    let network = state.gateway.network();
    SessionResponse {
        connected: address.is_some(),
        address,
        network: network.name.to_string(),
        chain_id: network.chain_id,
    }
}

/// Current session status.
#[utoipa::path(
    get,
    path = "/v1/session",
    tag = "Session",
    responses((status = 200, body = SessionResponse))
)]
pub async fn get_session(State(state): State<AppState>) -> Json<SessionResponse> {
    let address = state.session.read().await.address().map(|a| a.to_string());
    Json(session_body(&state, address))
}

/// Connect the configured signing account.
///
/// The key comes from the environment; the request may only confirm the
/// network. A missing key is reported as the wallet provider being
/// unavailable.
#[utoipa::path(
    post,
    path = "/v1/session",
    request_body = ConnectRequest,
    tag = "Session",
    responses(
        (status = 200, body = SessionResponse),
        (status = 400, description = "Unsupported network"),
        (status = 503, description = "No signing key configured")
    )
)]
pub async fn connect_session(
    State(state): State<AppState>,
    request: Option<Json<ConnectRequest>>,
) -> Result<Json<SessionResponse>, ApiError> {
    let request = request.map(|Json(r)| r).unwrap_or_default();
    ensure_sepolia_network(request.network.as_deref()).map_err(ApiError::bad_request)?;

    let mut session = state.session.write().await;
    let address = session.connect_from_env()?;

    Ok(Json(session_body(&state, Some(address.to_string()))))
}

/// Disconnect the active session. Local sign-out only.
#[utoipa::path(
    delete,
    path = "/v1/session",
    tag = "Session",
    responses((status = 204, description = "Session cleared"))
)]
pub async fn disconnect_session(State(state): State<AppState>) -> StatusCode {
    state.session.write().await.disconnect();
    StatusCode::NO_CONTENT
}
