use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::registration::Category;

#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize)]
pub struct Participant {
    pub id: i64,
    pub registration_number: String,
    pub full_name: String,
    pub date_of_birth: NaiveDate,
    pub age: i32,
    pub category: Category,
    pub phone_number: String,
    pub region_id: i64,
    pub jamaat_id: i64,
    pub date_of_arrival: NaiveDate,
    pub luggage_box_number: Option<String>,
    pub created_by: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Participant row joined with its region and jamaat names, as shown on the
/// roster listing.
#[derive(Debug, Clone, sqlx::FromRow, Serialize)]
pub struct ParticipantWithAffiliation {
    pub id: i64,
    pub registration_number: String,
    pub full_name: String,
    pub date_of_birth: NaiveDate,
    pub age: i32,
    pub category: Category,
    pub phone_number: String,
    pub region_id: i64,
    pub region_name: String,
    pub jamaat_id: i64,
    pub jamaat_name: String,
    pub date_of_arrival: NaiveDate,
    pub luggage_box_number: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Registration payload. Age and category are derived server-side from the
/// date of birth; the registration number is issued by the sequence store.
#[derive(Debug, Deserialize, Validate)]
pub struct NewParticipant {
    #[validate(length(min = 1))]
    pub full_name: String,
    pub date_of_birth: NaiveDate,
    pub phone_number: Option<String>,
    pub region_id: i64,
    pub jamaat_id: i64,
    pub date_of_arrival: NaiveDate,
    pub luggage_box_number: Option<String>,
    pub created_by: Option<Uuid>,
}

/// Partial update. The registration number and category are never editable;
/// changing the date of birth reclassifies the participant.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateParticipant {
    #[validate(length(min = 1))]
    pub full_name: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub phone_number: Option<String>,
    pub region_id: Option<i64>,
    pub jamaat_id: Option<i64>,
    pub date_of_arrival: Option<NaiveDate>,
    pub luggage_box_number: Option<String>,
}

/// Roster listing filters.
#[derive(Debug, Default, Deserialize)]
pub struct ParticipantFilter {
    pub search: Option<String>,
    pub category: Option<Category>,
    pub region_id: Option<i64>,
    pub jamaat_id: Option<i64>,
}
