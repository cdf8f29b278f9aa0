use crate::LeagueAppData;
use axum::routing::{get, post};
use axum::Router;

pub fn routes() -> Router<LeagueAppData> {
    Router::new()
        .route(
            "/api/tenants/{slug}/matches",
            get(super::tenant_matches_action),
        )
        .route(
            "/api/matches/{match_id}/report",
            post(super::match_report_action),
        )
}
