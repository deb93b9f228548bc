// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{error::ApiError, prefs::Theme, state::AppState};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ThemeResponse {
    pub theme: Theme,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct SetThemeRequest {
    pub theme: Theme,
}

/// Current display theme.
#[utoipa::path(
    get,
    path = "/v1/preferences/theme",
    tag = "Preferences",
    responses((status = 200, body = ThemeResponse))
)]
pub async fn get_theme(State(state): State<AppState>) -> Json<ThemeResponse> {
    let theme = state.prefs.read().await.theme();
    Json(ThemeResponse { theme })
}

/// Set and persist the display theme.
#[utoipa::path(
    put,
    path = "/v1/preferences/theme",
    request_body = SetThemeRequest,
    tag = "Preferences",
    responses((status = 200, body = ThemeResponse))
)]
pub async fn set_theme(
    State(state): State<AppState>,
    Json(request): Json<SetThemeRequest>,
) -> Result<Json<ThemeResponse>, ApiError> {
    let mut prefs = state.prefs.write().await;
    prefs.set_theme(request.theme)?;
    Ok(Json(ThemeResponse {
        theme: prefs.theme(),
    }))
}

/// Flip the display theme and persist the result.
#[utoipa::path(
    post,
    path = "/v1/preferences/theme/toggle",
    tag = "Preferences",
    responses((status = 200, body = ThemeResponse))
)]
pub async fn toggle_theme(State(state): State<AppState>) -> Result<Json<ThemeResponse>, ApiError> {
    let theme = state.prefs.write().await.toggle_theme()?;
    Ok(Json(ThemeResponse { theme }))
}
