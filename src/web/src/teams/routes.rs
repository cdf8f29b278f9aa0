use crate::LeagueAppData;
use axum::routing::get;
use axum::Router;

pub fn routes() -> Router<LeagueAppData> {
    Router::new()
        .route("/api/tenants/{slug}/teams", get(super::tenant_teams_action))
        .route("/api/teams/{team_id}/roster", get(super::team_roster_action))
}
