pub mod routes;

use crate::{ApiError, ApiResult, LeagueAppData};
use axum::extract::{Path, State};
use axum::Json;
use axum::response::IntoResponse;
use core::TenantSettings;
use database::LeagueStore;
use serde::{Deserialize, Serialize};

#[derive(Deserialize)]
pub struct PlayerRequest {
    pub player_id: u32,
}

#[derive(Deserialize)]
pub struct PlayerTransferPayload {
    pub team_id: u32,
}

#[derive(Serialize)]
pub struct PlayerEligibilityJson {
    pub player_id: u32,
    pub appearances: u16,
    pub playoff_eligible: bool,
    pub suspended: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suspended_until_matchday: Option<u16>,
}

/// The settings of the tenant a player belongs to, via team membership.
fn settings_for_player<'s>(
    store: &'s LeagueStore,
    player_id: u32,
) -> Result<&'s TenantSettings, ApiError> {
    let player = store
        .player(player_id)
        .ok_or_else(|| ApiError::NotFound(format!("player {} not found", player_id)))?;

    let team_id = player
        .team_id
        .ok_or_else(|| ApiError::BadRequest(format!("player {} has no team", player_id)))?;

    let team = store
        .team(team_id)
        .ok_or_else(|| ApiError::NotFound(format!("team {} not found", team_id)))?;

    store
        .tenants
        .iter()
        .find(|t| t.id == team.tenant_id)
        .ok_or_else(|| ApiError::NotFound(format!("tenant {} not found", team.tenant_id)))
}

pub async fn player_transfer_action(
    State(state): State<LeagueAppData>,
    Path(route_params): Path<PlayerRequest>,
    Json(payload): Json<PlayerTransferPayload>,
) -> ApiResult<impl IntoResponse> {
    let mut store = state.store.write().await;

    let settings = settings_for_player(&store, route_params.player_id)?.clone();

    store.transfer_player(route_params.player_id, payload.team_id, &settings)?;

    Ok(Json(()))
}

pub async fn player_eligibility_action(
    State(state): State<LeagueAppData>,
    Path(route_params): Path<PlayerRequest>,
) -> ApiResult<impl IntoResponse> {
    let store = state.store.read().await;

    let settings = settings_for_player(&store, route_params.player_id)?;

    let player = store
        .player(route_params.player_id)
        .ok_or_else(|| ApiError::NotFound(format!("player {} not found", route_params.player_id)))?;

    let current_matchday = store
        .active_season(settings.id)
        .map(|season| season.current_matchday)
        .unwrap_or(0);

    let appearances = store.appearances(player.id);

    Ok(Json(PlayerEligibilityJson {
        player_id: player.id,
        appearances,
        playoff_eligible: settings.is_playoff_eligible(appearances),
        suspended: player.is_suspended(current_matchday),
        suspended_until_matchday: player.suspended_until_matchday,
    }))
}
