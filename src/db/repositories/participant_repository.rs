use sqlx::{PgPool, Postgres, QueryBuilder};

use crate::db::models::{
    NewParticipant, Participant, ParticipantFilter, ParticipantWithAffiliation, UpdateParticipant,
};
use crate::db::DatabaseError;
use crate::registration::Category;

const PARTICIPANT_COLUMNS: &str = "id, registration_number, full_name, date_of_birth, age, \
     category, phone_number, region_id, jamaat_id, date_of_arrival, luggage_box_number, \
     created_by, created_at, updated_at";

const ROSTER_COLUMNS: &str = "p.id, p.registration_number, p.full_name, p.date_of_birth, \
     p.age, p.category, p.phone_number, p.region_id, r.name AS region_name, p.jamaat_id, \
     j.name AS jamaat_name, p.date_of_arrival, p.luggage_box_number, p.created_at";

pub struct ParticipantRepository;

impl ParticipantRepository {
    /// Insert a participant with an already-issued registration number and
    /// server-derived classification. A failure here abandons the number;
    /// the resulting sequence gap is intentional.
    pub async fn create(
        pool: &PgPool,
        registration_number: &str,
        age: i32,
        category: Category,
        data: &NewParticipant,
    ) -> Result<Participant, DatabaseError> {
        let participant = sqlx::query_as::<_, Participant>(&format!(
            r#"
            INSERT INTO participants
                (registration_number, full_name, date_of_birth, age, category, phone_number,
                 region_id, jamaat_id, date_of_arrival, luggage_box_number, created_by)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            RETURNING {PARTICIPANT_COLUMNS}
            "#
        ))
        .bind(registration_number)
        .bind(&data.full_name)
        .bind(data.date_of_birth)
        .bind(age)
        .bind(category)
        .bind(data.phone_number.as_deref().unwrap_or(""))
        .bind(data.region_id)
        .bind(data.jamaat_id)
        .bind(data.date_of_arrival)
        .bind(&data.luggage_box_number)
        .bind(data.created_by)
        .fetch_one(pool)
        .await?;

        Ok(participant)
    }

    pub async fn get_by_id(
        pool: &PgPool,
        id: i64,
    ) -> Result<Option<ParticipantWithAffiliation>, DatabaseError> {
        let participant = sqlx::query_as::<_, ParticipantWithAffiliation>(&format!(
            r#"
            SELECT {ROSTER_COLUMNS}
            FROM participants p
            JOIN regions r ON r.id = p.region_id
            JOIN jamaats j ON j.id = p.jamaat_id
            WHERE p.id = $1
            "#
        ))
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(participant)
    }

    /// Roster listing. Search matches name, registration number and phone;
    /// category/region/jamaat narrow the result further.
    pub async fn list(
        pool: &PgPool,
        filter: &ParticipantFilter,
    ) -> Result<Vec<ParticipantWithAffiliation>, DatabaseError> {
        let mut query: QueryBuilder<'_, Postgres> = QueryBuilder::new(format!(
            r#"
            SELECT {ROSTER_COLUMNS}
            FROM participants p
            JOIN regions r ON r.id = p.region_id
            JOIN jamaats j ON j.id = p.jamaat_id
            WHERE 1 = 1
            "#
        ));

        if let Some(search) = filter.search.as_deref().filter(|s| !s.is_empty()) {
            let pattern = format!("%{}%", search);
            query.push(" AND (p.full_name ILIKE ");
            query.push_bind(pattern.clone());
            query.push(" OR p.registration_number ILIKE ");
            query.push_bind(pattern.clone());
            query.push(" OR p.phone_number LIKE ");
            query.push_bind(pattern);
            query.push(")");
        }
        if let Some(category) = filter.category {
            query.push(" AND p.category = ");
            query.push_bind(category);
        }
        if let Some(region_id) = filter.region_id {
            query.push(" AND p.region_id = ");
            query.push_bind(region_id);
        }
        if let Some(jamaat_id) = filter.jamaat_id {
            query.push(" AND p.jamaat_id = ");
            query.push_bind(jamaat_id);
        }
        query.push(" ORDER BY p.created_at DESC");

        let participants = query
            .build_query_as::<ParticipantWithAffiliation>()
            .fetch_all(pool)
            .await?;

        Ok(participants)
    }

    /// Partial update. `reclassified` carries the new age and category when
    /// the date of birth changed; the registration number is never touched.
    pub async fn update(
        pool: &PgPool,
        id: i64,
        data: &UpdateParticipant,
        reclassified: Option<(i32, Category)>,
    ) -> Result<Participant, DatabaseError> {
        let (age, category) = match reclassified {
            Some((age, category)) => (Some(age), Some(category)),
            None => (None, None),
        };

        let participant = sqlx::query_as::<_, Participant>(&format!(
            r#"
            UPDATE participants
            SET
                full_name = COALESCE($1, full_name),
                date_of_birth = COALESCE($2, date_of_birth),
                age = COALESCE($3, age),
                category = COALESCE($4, category),
                phone_number = COALESCE($5, phone_number),
                region_id = COALESCE($6, region_id),
                jamaat_id = COALESCE($7, jamaat_id),
                date_of_arrival = COALESCE($8, date_of_arrival),
                luggage_box_number = COALESCE($9, luggage_box_number),
                updated_at = NOW()
            WHERE id = $10
            RETURNING {PARTICIPANT_COLUMNS}
            "#
        ))
        .bind(&data.full_name)
        .bind(data.date_of_birth)
        .bind(age)
        .bind(category)
        .bind(&data.phone_number)
        .bind(data.region_id)
        .bind(data.jamaat_id)
        .bind(data.date_of_arrival)
        .bind(&data.luggage_box_number)
        .bind(id)
        .fetch_optional(pool)
        .await?
        .ok_or(DatabaseError::NotFound)?;

        Ok(participant)
    }

    pub async fn delete(pool: &PgPool, id: i64) -> Result<(), DatabaseError> {
        let result = sqlx::query("DELETE FROM participants WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DatabaseError::NotFound);
        }
        Ok(())
    }

    pub async fn count_total(pool: &PgPool) -> Result<i64, DatabaseError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM participants")
            .fetch_one(pool)
            .await?;
        Ok(count)
    }

    pub async fn count_by_category(pool: &PgPool) -> Result<CategoryCounts, DatabaseError> {
        let rows = sqlx::query_as::<_, (Category, i64)>(
            "SELECT category, COUNT(*) FROM participants GROUP BY category",
        )
        .fetch_all(pool)
        .await?;

        let mut counts = CategoryCounts::default();
        for (category, count) in rows {
            match category {
                Category::Khuddam => counts.khuddam = count,
                Category::Atfal => counts.atfal = count,
                Category::UnderSeven => counts.under_seven = count,
            }
        }
        Ok(counts)
    }

    pub async fn count_regions_with_participants(pool: &PgPool) -> Result<i64, DatabaseError> {
        let count = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(DISTINCT region_id) FROM participants",
        )
        .fetch_one(pool)
        .await?;
        Ok(count)
    }
}

/// Per-category participant totals for the dashboard.
#[derive(Debug, Default, Clone, Copy, serde::Serialize)]
pub struct CategoryCounts {
    pub khuddam: i64,
    pub atfal: i64,
    pub under_seven: i64,
}
