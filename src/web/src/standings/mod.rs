pub mod routes;

use crate::{ApiError, ApiResult, LeagueAppData};
use axum::extract::{Path, State};
use axum::Json;
use axum::response::IntoResponse;
use serde::Deserialize;

#[derive(Deserialize)]
pub struct TenantStandingsRequest {
    pub slug: String,
}

pub async fn tenant_standings_action(
    State(state): State<LeagueAppData>,
    Path(route_params): Path<TenantStandingsRequest>,
) -> ApiResult<impl IntoResponse> {
    let store = state.store.read().await;

    let settings = store
        .tenant_by_slug(&route_params.slug)
        .ok_or_else(|| ApiError::NotFound(format!("tenant {} not found", route_params.slug)))?;

    let view = store.standings_for_tenant(settings);

    Ok(Json(view))
}
