use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;
use validator::Validate;

use crate::app_state::AppState;
use crate::db::{EventSettings, EventSettingsRepository, NewEventSettings, UpdateEventSettings};
use crate::error::{AppError, AppResult};
use crate::ordinal::format_ordinal;

/// Current event with the ordinal-suffixed display names used on badges,
/// dashboards and exports.
#[derive(Debug, Serialize)]
pub struct CurrentEventResponse {
    #[serde(flatten)]
    pub settings: EventSettings,
    pub khuddam_event_name: String,
    pub atfal_event_name: String,
}

pub async fn list_event_settings(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<EventSettings>>> {
    let settings = EventSettingsRepository::list(&state.db).await?;
    Ok(Json(settings))
}

pub async fn current_event_settings(
    State(state): State<AppState>,
) -> AppResult<Json<CurrentEventResponse>> {
    let settings = EventSettingsRepository::current(&state.db)
        .await?
        .ok_or_else(|| AppError::NotFound("no event settings configured".to_string()))?;

    let khuddam_event_name = format!(
        "{} {}",
        format_ordinal(settings.khuddam_ordinal),
        settings.event_name
    );
    let atfal_event_name = format!(
        "{} Annual Majlis Atfal-ul-Ahmadiyya Kenya Ijtemaa",
        format_ordinal(settings.atfal_ordinal)
    );

    Ok(Json(CurrentEventResponse {
        settings,
        khuddam_event_name,
        atfal_event_name,
    }))
}

pub async fn create_event_settings(
    State(state): State<AppState>,
    Json(payload): Json<NewEventSettings>,
) -> AppResult<(StatusCode, Json<EventSettings>)> {
    payload
        .validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;
    let settings = EventSettingsRepository::create(&state.db, &payload).await?;
    Ok((StatusCode::CREATED, Json(settings)))
}

pub async fn update_event_settings(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateEventSettings>,
) -> AppResult<Json<EventSettings>> {
    payload
        .validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;
    let settings = EventSettingsRepository::update(&state.db, id, &payload).await?;
    Ok(Json(settings))
}

pub async fn delete_event_settings(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<StatusCode> {
    EventSettingsRepository::delete(&state.db, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
