use axum::{extract::State, Json};
use serde::Serialize;

use crate::app_state::AppState;
use crate::db::{ParticipantRepository, RegionRepository};
use crate::error::AppResult;

#[derive(Debug, Serialize)]
pub struct DashboardStats {
    pub total_participants: i64,
    pub khuddam: i64,
    pub atfal: i64,
    pub under_seven: i64,
    pub regions: i64,
    pub regions_with_participants: i64,
}

pub async fn dashboard_stats(State(state): State<AppState>) -> AppResult<Json<DashboardStats>> {
    let total_participants = ParticipantRepository::count_total(&state.db).await?;
    let by_category = ParticipantRepository::count_by_category(&state.db).await?;
    let regions = RegionRepository::count(&state.db).await?;
    let regions_with_participants =
        ParticipantRepository::count_regions_with_participants(&state.db).await?;

    Ok(Json(DashboardStats {
        total_participants,
        khuddam: by_category.khuddam,
        atfal: by_category.atfal,
        under_seven: by_category.under_seven,
        regions,
        regions_with_participants,
    }))
}
