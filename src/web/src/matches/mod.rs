pub mod routes;

use crate::{ApiError, ApiResult, LeagueAppData};
use axum::extract::{Path, State};
use axum::Json;
use axum::response::IntoResponse;
use chrono::NaiveDateTime;
use core::r#match::{MatchEvent, MatchStatus};
use serde::{Deserialize, Serialize};

#[derive(Deserialize)]
pub struct TenantMatchesRequest {
    pub slug: String,
}

#[derive(Deserialize)]
pub struct MatchReportRequest {
    pub match_id: u32,
}

#[derive(Deserialize)]
pub struct MatchReportPayload {
    pub events: Vec<MatchEvent>,
}

/// A fixture as served to clients. The score fields are derived from the
/// event log on the way out and are absent for unplayed matches.
#[derive(Serialize)]
pub struct MatchJson {
    pub id: u32,
    pub season_id: u32,
    pub home_team_id: u32,
    pub away_team_id: u32,
    pub date: NaiveDateTime,
    pub matchday: u16,
    pub status: MatchStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub home_goals: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub away_goals: Option<u8>,
}

pub async fn tenant_matches_action(
    State(state): State<LeagueAppData>,
    Path(route_params): Path<TenantMatchesRequest>,
) -> ApiResult<impl IntoResponse> {
    let store = state.store.read().await;

    let settings = store
        .tenant_by_slug(&route_params.slug)
        .ok_or_else(|| ApiError::NotFound(format!("tenant {} not found", route_params.slug)))?;

    let mut matches: Vec<MatchJson> = store
        .matches_for_tenant(settings.id)
        .into_iter()
        .map(|m| {
            let (home_goals, away_goals) = match m.status {
                MatchStatus::Finished => {
                    let (home, away) = m.score();
                    (Some(home), Some(away))
                }
                _ => (None, None),
            };

            MatchJson {
                id: m.id,
                season_id: m.season_id,
                home_team_id: m.home_team_id,
                away_team_id: m.away_team_id,
                date: m.date,
                matchday: m.matchday,
                status: m.status,
                home_goals,
                away_goals,
            }
        })
        .collect();

    matches.sort_by_key(|m| (m.matchday, m.date, m.id));

    Ok(Json(matches))
}

pub async fn match_report_action(
    State(state): State<LeagueAppData>,
    Path(route_params): Path<MatchReportRequest>,
    Json(payload): Json<MatchReportPayload>,
) -> ApiResult<impl IntoResponse> {
    let mut store = state.store.write().await;

    let settings = store.settings_for_match(route_params.match_id)?.clone();

    store.apply_match_report(route_params.match_id, payload.events, &settings)?;

    Ok(Json(()))
}
