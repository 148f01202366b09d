use sqlx::PgPool;

use crate::db::models::{EventSettings, NewEventSettings, UpdateEventSettings};
use crate::db::DatabaseError;

const EVENT_COLUMNS: &str = "id, event_name, khuddam_ordinal, atfal_ordinal, year, venue, \
     theme, start_date, end_date, created_at";

pub struct EventSettingsRepository;

impl EventSettingsRepository {
    /// All event configurations, newest first.
    pub async fn list(pool: &PgPool) -> Result<Vec<EventSettings>, DatabaseError> {
        let settings = sqlx::query_as::<_, EventSettings>(&format!(
            "SELECT {EVENT_COLUMNS} FROM event_settings ORDER BY id DESC"
        ))
        .fetch_all(pool)
        .await?;
        Ok(settings)
    }

    /// The current event is the most recently created row.
    pub async fn current(pool: &PgPool) -> Result<Option<EventSettings>, DatabaseError> {
        let settings = sqlx::query_as::<_, EventSettings>(&format!(
            "SELECT {EVENT_COLUMNS} FROM event_settings ORDER BY id DESC LIMIT 1"
        ))
        .fetch_optional(pool)
        .await?;
        Ok(settings)
    }

    pub async fn create(
        pool: &PgPool,
        data: &NewEventSettings,
    ) -> Result<EventSettings, DatabaseError> {
        let settings = sqlx::query_as::<_, EventSettings>(&format!(
            r#"
            INSERT INTO event_settings
                (event_name, khuddam_ordinal, atfal_ordinal, year, venue, theme,
                 start_date, end_date)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING {EVENT_COLUMNS}
            "#
        ))
        .bind(&data.event_name)
        .bind(data.khuddam_ordinal)
        .bind(data.atfal_ordinal)
        .bind(data.year)
        .bind(&data.venue)
        .bind(&data.theme)
        .bind(data.start_date)
        .bind(data.end_date)
        .fetch_one(pool)
        .await?;
        Ok(settings)
    }

    pub async fn update(
        pool: &PgPool,
        id: i64,
        data: &UpdateEventSettings,
    ) -> Result<EventSettings, DatabaseError> {
        let settings = sqlx::query_as::<_, EventSettings>(&format!(
            r#"
            UPDATE event_settings
            SET
                event_name = COALESCE($1, event_name),
                khuddam_ordinal = COALESCE($2, khuddam_ordinal),
                atfal_ordinal = COALESCE($3, atfal_ordinal),
                year = COALESCE($4, year),
                venue = COALESCE($5, venue),
                theme = COALESCE($6, theme),
                start_date = COALESCE($7, start_date),
                end_date = COALESCE($8, end_date)
            WHERE id = $9
            RETURNING {EVENT_COLUMNS}
            "#
        ))
        .bind(&data.event_name)
        .bind(data.khuddam_ordinal)
        .bind(data.atfal_ordinal)
        .bind(data.year)
        .bind(&data.venue)
        .bind(&data.theme)
        .bind(data.start_date)
        .bind(data.end_date)
        .bind(id)
        .fetch_optional(pool)
        .await?
        .ok_or(DatabaseError::NotFound)?;
        Ok(settings)
    }

    pub async fn delete(pool: &PgPool, id: i64) -> Result<(), DatabaseError> {
        let result = sqlx::query("DELETE FROM event_settings WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DatabaseError::NotFound);
        }
        Ok(())
    }
}
