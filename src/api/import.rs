// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{drive::placeholder_ipfs_hash, error::ApiError, state::AppState};

/// Import request as sent by the dashboard's drive picker.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DriveImportRequest {
    /// Google Drive file ID.
    pub file_id: String,
    /// OAuth access token scoped to the file.
    pub access_token: String,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DriveImportResponse {
    pub success: bool,
    /// Placeholder hash; no bytes are pinned anywhere.
    pub ipfs_hash: String,
}

/// Import a file from Google Drive (stub).
///
/// Downloads the file to prove the token works, then returns a fabricated
/// IPFS-style hash derived from the file ID.
#[utoipa::path(
    post,
    path = "/import-from-drive",
    request_body = DriveImportRequest,
    tag = "Import",
    responses(
        (status = 200, body = DriveImportResponse),
        (status = 400, description = "Missing fileId or accessToken"),
        (status = 500, description = "Drive fetch failed")
    )
)]
pub async fn import_from_drive(
    State(state): State<AppState>,
    Json(request): Json<DriveImportRequest>,
) -> Result<Json<DriveImportResponse>, ApiError> {
    if request.file_id.trim().is_empty() || request.access_token.trim().is_empty() {
        return Err(ApiError::bad_request("Missing fileId or accessToken."));
    }

    state
        .drive
        .fetch_file(&request.file_id, &request.access_token)
        .await?;

    Ok(Json(DriveImportResponse {
        success: true,
        ipfs_hash: placeholder_ipfs_hash(&request.file_id),
    }))
}
