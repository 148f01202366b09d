use sqlx::PgPool;

use crate::db::models::{NewRegion, Region};
use crate::db::DatabaseError;

pub struct RegionRepository;

impl RegionRepository {
    pub async fn list(pool: &PgPool) -> Result<Vec<Region>, DatabaseError> {
        let regions = sqlx::query_as::<_, Region>(
            "SELECT id, name, created_at FROM regions ORDER BY name",
        )
        .fetch_all(pool)
        .await?;
        Ok(regions)
    }

    pub async fn count(pool: &PgPool) -> Result<i64, DatabaseError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM regions")
            .fetch_one(pool)
            .await?;
        Ok(count)
    }

    pub async fn create(pool: &PgPool, data: &NewRegion) -> Result<Region, DatabaseError> {
        let region = sqlx::query_as::<_, Region>(
            "INSERT INTO regions (name) VALUES ($1) RETURNING id, name, created_at",
        )
        .bind(&data.name)
        .fetch_one(pool)
        .await?;
        Ok(region)
    }
}
