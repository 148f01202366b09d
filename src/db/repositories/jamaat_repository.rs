use sqlx::PgPool;

use crate::db::models::{Jamaat, NewJamaat};
use crate::db::DatabaseError;

pub struct JamaatRepository;

impl JamaatRepository {
    /// List jamaats, optionally narrowed to one region (the registration
    /// form filters the jamaat dropdown by the selected region).
    pub async fn list(
        pool: &PgPool,
        region_id: Option<i64>,
    ) -> Result<Vec<Jamaat>, DatabaseError> {
        let jamaats = match region_id {
            Some(region_id) => {
                sqlx::query_as::<_, Jamaat>(
                    "SELECT id, name, region_id, created_at FROM jamaats \
                     WHERE region_id = $1 ORDER BY name",
                )
                .bind(region_id)
                .fetch_all(pool)
                .await?
            }
            None => {
                sqlx::query_as::<_, Jamaat>(
                    "SELECT id, name, region_id, created_at FROM jamaats ORDER BY name",
                )
                .fetch_all(pool)
                .await?
            }
        };
        Ok(jamaats)
    }

    pub async fn create(pool: &PgPool, data: &NewJamaat) -> Result<Jamaat, DatabaseError> {
        let jamaat = sqlx::query_as::<_, Jamaat>(
            "INSERT INTO jamaats (name, region_id) VALUES ($1, $2) \
             RETURNING id, name, region_id, created_at",
        )
        .bind(&data.name)
        .bind(data.region_id)
        .fetch_one(pool)
        .await?;
        Ok(jamaat)
    }
}
