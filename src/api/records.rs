// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use axum::{
    body::Bytes,
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{
    chain::{ensure_sepolia_network, EvidenceRecord, RecordSubmitter},
    error::ApiError,
    flows::{
        feed::{recent_activity, ActivityFeed, FEED_LIMIT},
        lookup::lookup_record,
        submission::{fingerprint, SubmissionFlow, SubmissionState},
    },
    state::AppState,
};

/// Total number of records stored by the contract.
#[derive(Debug, Serialize, ToSchema)]
pub struct CountResponse {
    pub count: u64,
}

/// A record as served to clients: the on-chain tuple plus the contract
/// timestamp rendered as UTC.
#[derive(Debug, Serialize, ToSchema)]
pub struct RecordResponse {
    #[serde(flatten)]
    pub record: EvidenceRecord,
    /// `timestamp` as a UTC datetime, when representable.
    pub recorded_at: Option<chrono::DateTime<chrono::Utc>>,
}

impl From<EvidenceRecord> for RecordResponse {
    fn from(record: EvidenceRecord) -> Self {
        let recorded_at = record.recorded_at();
        Self {
            record,
            recorded_at,
        }
    }
}

/// Fingerprint of an uploaded payload.
#[derive(Debug, Serialize, ToSchema)]
pub struct HashResponse {
    /// Keccak-256 content fingerprint, 0x-prefixed hex.
    pub file_hash: String,
    /// Number of bytes hashed.
    pub size: usize,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct SubmitRecordRequest {
    /// Content fingerprint computed by the client (or via the hash route).
    pub file_hash: String,
    /// Display label for the record.
    pub file_name: String,
    /// Small integer file-type tag; stored as-is.
    #[serde(default)]
    pub file_type: u8,
    /// Requested network; only `sepolia` is accepted.
    #[serde(default)]
    pub network: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SubmitRecordResponse {
    pub success: bool,
    /// Record ID assigned by the contract.
    pub record_id: u64,
    /// Hash of the confirmed transaction.
    pub tx_hash: String,
    /// Block explorer link for the transaction.
    pub explorer_url: String,
}

/// Total record count.
#[utoipa::path(
    get,
    path = "/v1/records/count",
    tag = "Records",
    responses(
        (status = 200, body = CountResponse),
        (status = 503, description = "RPC endpoint unreachable")
    )
)]
pub async fn record_count(State(state): State<AppState>) -> Result<Json<CountResponse>, ApiError> {
    use crate::flows::ChainReader;
    let count = state.gateway.record_count().await?;
    Ok(Json(CountResponse { count }))
}

/// Fetch one record by its contract-assigned ID.
#[utoipa::path(
    get,
    path = "/v1/records/{id}",
    params(("id" = u64, Path, description = "Record ID (1-based)")),
    tag = "Records",
    responses(
        (status = 200, body = RecordResponse),
        (status = 404, description = "No record under this ID"),
        (status = 503, description = "RPC endpoint unreachable")
    )
)]
pub async fn get_record(
    Path(id): Path<u64>,
    State(state): State<AppState>,
) -> Result<Json<RecordResponse>, ApiError> {
    let record = lookup_record(&*state.gateway, id).await?;
    Ok(Json(record.into()))
}

/// Recent activity feed: the newest records, newest first.
#[utoipa::path(
    get,
    path = "/v1/records/recent",
    tag = "Records",
    responses(
        (status = 200, body = ActivityFeed),
        (status = 503, description = "RPC endpoint unreachable")
    )
)]
pub async fn recent_records(State(state): State<AppState>) -> Result<Json<ActivityFeed>, ApiError> {
    let feed = recent_activity(&*state.gateway, FEED_LIMIT).await?;
    Ok(Json(feed))
}

/// Compute the content fingerprint for an uploaded payload.
///
/// The body is the raw file bytes; nothing is stored.
#[utoipa::path(
    post,
    path = "/v1/records/hash",
    request_body(content = String, content_type = "application/octet-stream"),
    tag = "Records",
    responses((status = 200, body = HashResponse))
)]
pub async fn hash_payload(body: Bytes) -> Json<HashResponse> {
    Json(HashResponse {
        file_hash: fingerprint(&body),
        size: body.len(),
    })
}

/// Submit a prepared record to the contract.
///
/// Requires a connected wallet session; the transaction is signed locally,
/// sent, and confirmed before this route returns.
#[utoipa::path(
    post,
    path = "/v1/records",
    request_body = SubmitRecordRequest,
    tag = "Records",
    responses(
        (status = 200, body = SubmitRecordResponse),
        (status = 400, description = "Missing fingerprint or name, or unsupported network"),
        (status = 401, description = "No wallet session"),
        (status = 429, description = "RPC provider is rate limiting"),
        (status = 502, description = "Sent but unconfirmed")
    )
)]
pub async fn submit_record(
    State(state): State<AppState>,
    Json(request): Json<SubmitRecordRequest>,
) -> Result<Json<SubmitRecordResponse>, ApiError> {
    ensure_sepolia_network(request.network.as_deref()).map_err(ApiError::bad_request)?;
    if request.file_hash.trim().is_empty() || request.file_name.trim().is_empty() {
        return Err(ApiError::bad_request("Missing file_hash or file_name."));
    }

    let wallet = {
        let session = state.session.read().await;
        session
            .account()
            .map(|a| a.wallet())
            .ok_or_else(|| ApiError::unauthorized("Connect a wallet before submitting."))?
    };

    let submitter = RecordSubmitter::connect(
        state.gateway.network().clone(),
        &state.rpc_url,
        &state.gateway.contract_address().to_string(),
        wallet,
    )?;

    let mut flow = SubmissionFlow::with_prepared(&request.file_hash, &request.file_name);
    let record_id = flow.submit(&submitter, request.file_type).await?;

    let tx_hash = match flow.state() {
        SubmissionState::Confirmed { tx_hash, .. } => tx_hash.clone(),
        // submit() only returns Ok from Confirmed.
        _ => String::new(),
    };
    let explorer_url = format!("{}/tx/{}", state.gateway.network().explorer_url, tx_hash);

    Ok(Json(SubmitRecordResponse {
        success: true,
        record_id,
        tx_hash,
        explorer_url,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::testing::test_state;
    use axum::http::StatusCode;

    #[test]
    fn record_response_carries_recorded_at() {
        let record = EvidenceRecord {
            id: 1,
            file_hash: "0xabc".into(),
            file_name: "doc.pdf".into(),
            file_type: 0,
            timestamp: 1_700_000_000,
            uploader: "0x0000000000000000000000000000000000000001".into(),
        };

        let response = RecordResponse::from(record);
        assert_eq!(response.recorded_at.unwrap().timestamp(), 1_700_000_000);

        let json = serde_json::to_value(&response).unwrap();
        // Flattened tuple fields sit next to the derived datetime.
        assert_eq!(json["id"], 1);
        assert_eq!(json["file_name"], "doc.pdf");
        assert!(json["recorded_at"].as_str().unwrap().starts_with("2023-11-14T"));
    }

    #[tokio::test]
    async fn hash_payload_matches_fingerprint() {
        let Json(body) = hash_payload(Bytes::from_static(b"evidence bytes")).await;
        assert_eq!(body.file_hash, fingerprint(b"evidence bytes"));
        assert_eq!(body.size, 14);
        assert!(body.file_hash.starts_with("0x"));
    }

    #[tokio::test]
    async fn submit_requires_wallet_session() {
        let (state, _dir) = test_state();
        let err = submit_record(
            State(state),
            Json(SubmitRecordRequest {
                file_hash: "0xabc".into(),
                file_name: "doc.pdf".into(),
                file_type: 0,
                network: None,
            }),
        )
        .await
        .unwrap_err();
        assert_eq!(err.status, StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn submit_validates_request_shape() {
        let (state, _dir) = test_state();

        let missing = submit_record(
            State(state.clone()),
            Json(SubmitRecordRequest {
                file_hash: "  ".into(),
                file_name: "doc.pdf".into(),
                file_type: 0,
                network: None,
            }),
        )
        .await
        .unwrap_err();
        assert_eq!(missing.status, StatusCode::BAD_REQUEST);

        let wrong_network = submit_record(
            State(state),
            Json(SubmitRecordRequest {
                file_hash: "0xabc".into(),
                file_name: "doc.pdf".into(),
                file_type: 0,
                network: Some("mainnet".into()),
            }),
        )
        .await
        .unwrap_err();
        assert_eq!(wrong_network.status, StatusCode::BAD_REQUEST);
    }
}
