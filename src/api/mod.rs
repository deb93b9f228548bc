// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    chain::EvidenceRecord,
    flows::feed::{ActivityFeed, FeedEntry, FeedEntryStatus},
    prefs::Theme,
    state::AppState,
};

pub mod health;
pub mod import;
pub mod prefs;
pub mod records;
pub mod session;

pub fn router(state: AppState) -> Router {
    let v1_routes = Router::new()
        .route(
            "/session",
            get(session::get_session)
                .post(session::connect_session)
                .delete(session::disconnect_session),
        )
        .route("/records", post(records::submit_record))
        .route("/records/count", get(records::record_count))
        .route("/records/recent", get(records::recent_records))
        .route("/records/hash", post(records::hash_payload))
        .route("/records/{id}", get(records::get_record))
        .route(
            "/preferences/theme",
            get(prefs::get_theme).put(prefs::set_theme),
        )
        .route("/preferences/theme/toggle", post(prefs::toggle_theme));

    Router::new()
        .nest("/v1", v1_routes)
        .route("/health", get(health::health))
        .route("/health/live", get(health::liveness))
        .route("/import-from-drive", post(import::import_from_drive))
        .with_state(state)
        .merge(SwaggerUi::new("/docs").url("/api-doc/openapi.json", ApiDoc::openapi()))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health,
        health::liveness,
        session::get_session,
        session::connect_session,
        session::disconnect_session,
        records::record_count,
        records::get_record,
        records::recent_records,
        records::hash_payload,
        records::submit_record,
        prefs::get_theme,
        prefs::set_theme,
        prefs::toggle_theme,
        import::import_from_drive
    ),
    components(
        schemas(
            EvidenceRecord,
            ActivityFeed,
            FeedEntry,
            FeedEntryStatus,
            Theme,
            health::ReadyResponse,
            health::HealthChecks,
            health::HealthResponse,
            session::SessionResponse,
            session::ConnectRequest,
            records::RecordResponse,
            records::CountResponse,
            records::HashResponse,
            records::SubmitRecordRequest,
            records::SubmitRecordResponse,
            prefs::ThemeResponse,
            prefs::SetThemeRequest,
            import::DriveImportRequest,
            import::DriveImportResponse
        )
    ),
    tags(
        (name = "Health", description = "Service health probes"),
        (name = "Session", description = "Wallet session management"),
        (name = "Records", description = "Evidence record submission and lookup"),
        (name = "Preferences", description = "Persisted display preferences"),
        (name = "Import", description = "Google Drive import stub")
    )
)]
struct ApiDoc;


#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn router_builds_with_all_routes() {
        let (state, _dir) = testing::test_state();
        let app = router(state);
        // Ensure the router can be converted into a service without panicking.
        let _ = app.into_make_service();
    }
}
