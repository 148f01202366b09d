use thiserror::Error;

#[derive(Error, Debug)]
pub enum DatabaseError {
    #[error("Database error: {0}")]
    Sqlx(sqlx::Error),

    #[error("Record not found")]
    NotFound,

    #[error("Duplicate record")]
    Duplicate,

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Referenced record does not exist: {0}")]
    ForeignKey(String),

    #[error("Database connection error: {0}")]
    ConnectionError(String),
}

impl From<sqlx::Error> for DatabaseError {
    fn from(err: sqlx::Error) -> Self {
        if matches!(err, sqlx::Error::RowNotFound) {
            return DatabaseError::NotFound;
        }
        if matches!(err, sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed) {
            return DatabaseError::ConnectionError(err.to_string());
        }
        if let sqlx::Error::Database(ref db_err) = err {
            // Postgres SQLSTATE: 23505 unique violation, 23503 FK violation.
            let code = db_err.code().map(|c| c.into_owned());
            match code.as_deref() {
                Some("23505") => return DatabaseError::Duplicate,
                Some("23503") => {
                    return DatabaseError::ForeignKey(db_err.message().to_string())
                }
                _ => {}
            }
        }
        DatabaseError::Sqlx(err)
    }
}
