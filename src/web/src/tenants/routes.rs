use crate::LeagueAppData;
use axum::routing::get;
use axum::Router;

pub fn routes() -> Router<LeagueAppData> {
    Router::new().route(
        "/api/tenants/{slug}/settings",
        get(super::tenant_settings_action),
    )
}
