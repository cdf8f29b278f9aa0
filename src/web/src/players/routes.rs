use crate::LeagueAppData;
use axum::routing::{get, post};
use axum::Router;

pub fn routes() -> Router<LeagueAppData> {
    Router::new()
        .route(
            "/api/players/{player_id}/transfer",
            post(super::player_transfer_action),
        )
        .route(
            "/api/players/{player_id}/eligibility",
            get(super::player_eligibility_action),
        )
}
