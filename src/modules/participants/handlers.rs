use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;
use validator::Validate;

use crate::app_state::AppState;
use crate::db::{
    NewParticipant, Participant, ParticipantFilter, ParticipantRepository,
    ParticipantWithAffiliation, UpdateParticipant,
};
use crate::error::{AppError, AppResult};
use crate::registration::{
    classify, issue_registration_number, Category, PgSequenceStore, RegistrationError,
};

#[derive(Debug, Deserialize)]
pub struct ClassifyParams {
    pub date_of_birth: NaiveDate,
    /// Defaults to today (UTC). The UI passes its own "now" so the preview
    /// matches what the client displays.
    pub reference_date: Option<NaiveDate>,
}

#[derive(Debug, Serialize)]
pub struct ClassifyResponse {
    pub age_years: i32,
    pub category: Option<Category>,
    pub category_label: Option<&'static str>,
    pub age_band: Option<&'static str>,
}

/// Classifier preview for the registration form. An unclassifiable age is
/// not an error here; the form uses the null category to disable submission.
pub async fn classify_preview(
    Query(params): Query<ClassifyParams>,
) -> AppResult<Json<ClassifyResponse>> {
    let reference = params
        .reference_date
        .unwrap_or_else(|| Utc::now().date_naive());
    let classification = classify(params.date_of_birth, reference)?;

    Ok(Json(ClassifyResponse {
        age_years: classification.age_years,
        category: classification.category,
        category_label: classification.category.map(|c| c.label()),
        age_band: classification.category.map(|c| c.age_band()),
    }))
}

/// Register a participant: classify server-side, issue a registration
/// number, then persist. If the insert fails the issued number is abandoned
/// and never reissued.
pub async fn register_participant(
    State(state): State<AppState>,
    Json(payload): Json<NewParticipant>,
) -> AppResult<(StatusCode, Json<Participant>)> {
    payload
        .validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let today = Utc::now().date_naive();
    let classification = classify(payload.date_of_birth, today)?;
    let category = classification
        .category
        .ok_or(RegistrationError::UnclassifiedAge(classification.age_years))?;

    let store = PgSequenceStore::new(&state.db);
    let registration_number = issue_registration_number(&store, category).await?;

    let participant = ParticipantRepository::create(
        &state.db,
        &registration_number,
        classification.age_years,
        category,
        &payload,
    )
    .await?;

    info!(
        registration_number = %participant.registration_number,
        category = %category,
        "Participant registered"
    );

    Ok((StatusCode::CREATED, Json(participant)))
}

pub async fn list_participants(
    State(state): State<AppState>,
    Query(filter): Query<ParticipantFilter>,
) -> AppResult<Json<Vec<ParticipantWithAffiliation>>> {
    let participants = ParticipantRepository::list(&state.db, &filter).await?;
    Ok(Json(participants))
}

pub async fn get_participant(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<ParticipantWithAffiliation>> {
    let participant = ParticipantRepository::get_by_id(&state.db, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("participant {}", id)))?;
    Ok(Json(participant))
}

/// Partial update. A changed date of birth reclassifies the participant;
/// the registration number is immutable.
pub async fn update_participant(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateParticipant>,
) -> AppResult<Json<Participant>> {
    payload
        .validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let reclassified = match payload.date_of_birth {
        Some(date_of_birth) => {
            let classification = classify(date_of_birth, Utc::now().date_naive())?;
            let category = classification
                .category
                .ok_or(RegistrationError::UnclassifiedAge(classification.age_years))?;
            Some((classification.age_years, category))
        }
        None => None,
    };

    let participant =
        ParticipantRepository::update(&state.db, id, &payload, reclassified).await?;
    Ok(Json(participant))
}

pub async fn delete_participant(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<StatusCode> {
    ParticipantRepository::delete(&state.db, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
