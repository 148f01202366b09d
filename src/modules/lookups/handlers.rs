use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use validator::Validate;

use crate::app_state::AppState;
use crate::db::{Jamaat, JamaatRepository, NewJamaat, NewRegion, Region, RegionRepository};
use crate::error::{AppError, AppResult};

pub async fn list_regions(State(state): State<AppState>) -> AppResult<Json<Vec<Region>>> {
    let regions = RegionRepository::list(&state.db).await?;
    Ok(Json(regions))
}

pub async fn create_region(
    State(state): State<AppState>,
    Json(payload): Json<NewRegion>,
) -> AppResult<(StatusCode, Json<Region>)> {
    payload
        .validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;
    let region = RegionRepository::create(&state.db, &payload).await?;
    Ok((StatusCode::CREATED, Json(region)))
}

#[derive(Debug, Deserialize)]
pub struct JamaatListParams {
    pub region_id: Option<i64>,
}

pub async fn list_jamaats(
    State(state): State<AppState>,
    Query(params): Query<JamaatListParams>,
) -> AppResult<Json<Vec<Jamaat>>> {
    let jamaats = JamaatRepository::list(&state.db, params.region_id).await?;
    Ok(Json(jamaats))
}

pub async fn create_jamaat(
    State(state): State<AppState>,
    Json(payload): Json<NewJamaat>,
) -> AppResult<(StatusCode, Json<Jamaat>)> {
    payload
        .validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;
    let jamaat = JamaatRepository::create(&state.db, &payload).await?;
    Ok((StatusCode::CREATED, Json(jamaat)))
}
