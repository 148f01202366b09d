use async_trait::async_trait;
use sqlx::PgPool;
use tracing::debug;

use super::{format_registration_number, Category, RegistrationError};

/// Atomic increment-and-read primitive behind the registration number
/// generator. Implementations must guarantee that concurrent calls for the
/// same category never observe the same value.
#[async_trait]
pub trait SequenceStore: Send + Sync {
    /// Allocate the next value of the category's sequence. The first call
    /// for a category returns 1.
    async fn next_value(&self, category: Category) -> Result<i64, RegistrationError>;
}

/// Postgres-backed sequence store. A single upsert-returning statement keeps
/// the read-increment-return step atomic; the row lock taken by
/// `ON CONFLICT DO UPDATE` serializes concurrent issuances per category.
pub struct PgSequenceStore<'a> {
    pool: &'a PgPool,
}

impl<'a> PgSequenceStore<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SequenceStore for PgSequenceStore<'_> {
    async fn next_value(&self, category: Category) -> Result<i64, RegistrationError> {
        sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO registration_sequences (category, next_value)
            VALUES ($1, 2)
            ON CONFLICT (category)
            DO UPDATE SET next_value = registration_sequences.next_value + 1
            RETURNING next_value - 1
            "#,
        )
        .bind(category)
        .fetch_one(self.pool)
        .await
        .map_err(|e| RegistrationError::SequenceUnavailable(e.to_string()))
    }
}

/// Issue a fresh registration number for the category.
///
/// Not idempotent: every call allocates. If the caller's participant insert
/// fails afterwards, the number becomes a permanent gap in the sequence.
pub async fn issue_registration_number<S: SequenceStore + ?Sized>(
    store: &S,
    category: Category,
) -> Result<String, RegistrationError> {
    let value = store.next_value(category).await?;
    let number = format_registration_number(category, value);
    debug!(category = %category, number = %number, "Issued registration number");
    Ok(number)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::{HashMap, HashSet};
    use std::sync::Arc;
    use tokio::sync::Mutex;

    /// In-memory store with the same atomicity contract as the Postgres
    /// implementation.
    #[derive(Default)]
    struct InMemorySequenceStore {
        counters: Mutex<HashMap<Category, i64>>,
    }

    #[async_trait]
    impl SequenceStore for InMemorySequenceStore {
        async fn next_value(&self, category: Category) -> Result<i64, RegistrationError> {
            let mut counters = self.counters.lock().await;
            let next = counters.entry(category).or_insert(0);
            *next += 1;
            Ok(*next)
        }
    }

    /// Store that always fails, standing in for an unreachable backend.
    struct UnavailableStore;

    #[async_trait]
    impl SequenceStore for UnavailableStore {
        async fn next_value(&self, _category: Category) -> Result<i64, RegistrationError> {
            Err(RegistrationError::SequenceUnavailable(
                "connection refused".into(),
            ))
        }
    }

    #[tokio::test]
    async fn first_issuance_starts_at_one() {
        let store = InMemorySequenceStore::default();
        let number = issue_registration_number(&store, Category::Khuddam)
            .await
            .unwrap();
        assert_eq!(number, "K-0001");
    }

    #[tokio::test]
    async fn sequences_are_scoped_per_category() {
        let store = InMemorySequenceStore::default();
        issue_registration_number(&store, Category::Khuddam)
            .await
            .unwrap();
        issue_registration_number(&store, Category::Khuddam)
            .await
            .unwrap();

        let atfal = issue_registration_number(&store, Category::Atfal)
            .await
            .unwrap();
        assert_eq!(atfal, "A-0001");
    }

    #[tokio::test]
    async fn concurrent_issuances_never_collide() {
        let store = Arc::new(InMemorySequenceStore::default());

        let mut handles = Vec::new();
        for _ in 0..50 {
            let store = Arc::clone(&store);
            handles.push(tokio::spawn(async move {
                issue_registration_number(store.as_ref(), Category::Khuddam).await
            }));
        }

        let mut numbers = Vec::new();
        for handle in handles {
            numbers.push(handle.await.unwrap().unwrap());
        }

        let distinct: HashSet<_> = numbers.iter().cloned().collect();
        assert_eq!(distinct.len(), 50);
    }

    #[tokio::test]
    async fn issued_values_are_strictly_increasing() {
        let store = InMemorySequenceStore::default();
        let mut previous = 0;
        for _ in 0..20 {
            let value = store.next_value(Category::Atfal).await.unwrap();
            assert!(value > previous);
            previous = value;
        }
    }

    #[tokio::test]
    async fn backend_failure_surfaces_as_sequence_unavailable() {
        let err = issue_registration_number(&UnavailableStore, Category::Khuddam)
            .await
            .unwrap_err();
        assert!(matches!(err, RegistrationError::SequenceUnavailable(_)));
    }
}
