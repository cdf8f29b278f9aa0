pub mod routes;

use crate::{ApiError, ApiResult, LeagueAppData};
use axum::extract::{Path, State};
use axum::Json;
use axum::response::IntoResponse;
use core::TenantSettings;
use serde::Deserialize;

#[derive(Deserialize)]
pub struct TenantSettingsRequest {
    pub slug: String,
}

pub async fn tenant_settings_action(
    State(state): State<LeagueAppData>,
    Path(route_params): Path<TenantSettingsRequest>,
) -> ApiResult<impl IntoResponse> {
    let store = state.store.read().await;

    let settings: TenantSettings = store
        .tenant_by_slug(&route_params.slug)
        .cloned()
        .ok_or_else(|| ApiError::NotFound(format!("tenant {} not found", route_params.slug)))?;

    Ok(Json(settings))
}
