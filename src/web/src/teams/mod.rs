pub mod routes;

use crate::{ApiError, ApiResult, LeagueAppData};
use axum::extract::{Path, State};
use axum::Json;
use axum::response::IntoResponse;
use core::{Player, Team};
use serde::Deserialize;

#[derive(Deserialize)]
pub struct TenantTeamsRequest {
    pub slug: String,
}

#[derive(Deserialize)]
pub struct TeamRosterRequest {
    pub team_id: u32,
}

pub async fn tenant_teams_action(
    State(state): State<LeagueAppData>,
    Path(route_params): Path<TenantTeamsRequest>,
) -> ApiResult<impl IntoResponse> {
    let store = state.store.read().await;

    let settings = store
        .tenant_by_slug(&route_params.slug)
        .ok_or_else(|| ApiError::NotFound(format!("tenant {} not found", route_params.slug)))?;

    let teams: Vec<Team> = store
        .teams_for_tenant(settings.id)
        .into_iter()
        .cloned()
        .collect();

    Ok(Json(teams))
}

pub async fn team_roster_action(
    State(state): State<LeagueAppData>,
    Path(route_params): Path<TeamRosterRequest>,
) -> ApiResult<impl IntoResponse> {
    let store = state.store.read().await;

    if store.team(route_params.team_id).is_none() {
        return Err(ApiError::NotFound(format!(
            "team {} not found",
            route_params.team_id
        )));
    }

    let roster: Vec<Player> = store
        .roster(route_params.team_id)
        .into_iter()
        .cloned()
        .collect();

    Ok(Json(roster))
}
