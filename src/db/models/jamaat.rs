use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Local chapter; every jamaat belongs to a region.
#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize)]
pub struct Jamaat {
    pub id: i64,
    pub name: String,
    pub region_id: i64,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct NewJamaat {
    #[validate(length(min = 1))]
    pub name: String,
    pub region_id: i64,
}
