use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Per-edition event configuration. The most recently created row is the
/// "current" event.
#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize)]
pub struct EventSettings {
    pub id: i64,
    pub event_name: String,
    pub khuddam_ordinal: i32,
    pub atfal_ordinal: i32,
    pub year: i32,
    pub venue: String,
    pub theme: Option<String>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct NewEventSettings {
    #[validate(length(min = 1))]
    pub event_name: String,
    #[validate(range(min = 1))]
    pub khuddam_ordinal: i32,
    #[validate(range(min = 1))]
    pub atfal_ordinal: i32,
    #[validate(range(min = 1900))]
    pub year: i32,
    #[validate(length(min = 1))]
    pub venue: String,
    pub theme: Option<String>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateEventSettings {
    #[validate(length(min = 1))]
    pub event_name: Option<String>,
    #[validate(range(min = 1))]
    pub khuddam_ordinal: Option<i32>,
    #[validate(range(min = 1))]
    pub atfal_ordinal: Option<i32>,
    #[validate(range(min = 1900))]
    pub year: Option<i32>,
    #[validate(length(min = 1))]
    pub venue: Option<String>,
    pub theme: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}
