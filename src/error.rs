use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::db::DatabaseError;
use crate::registration::RegistrationError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] DatabaseError),

    #[error("Registration error: {0}")]
    Registration(#[from] RegistrationError),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Internal server error: {0}")]
    InternalServerError(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::Database(ref err) => match err {
                DatabaseError::NotFound => (StatusCode::NOT_FOUND, "Resource not found"),
                DatabaseError::Duplicate => (StatusCode::CONFLICT, "Resource already exists"),
                DatabaseError::InvalidInput(_) => (StatusCode::BAD_REQUEST, "Invalid input data"),
                DatabaseError::ForeignKey(_) => {
                    (StatusCode::BAD_REQUEST, "Referenced record does not exist")
                }
                DatabaseError::ConnectionError(_) => {
                    (StatusCode::SERVICE_UNAVAILABLE, "Database unavailable")
                }
                _ => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An internal server error occurred",
                ),
            },
            AppError::Registration(ref err) => match err {
                RegistrationError::InvalidDate(_) => {
                    (StatusCode::UNPROCESSABLE_ENTITY, "Invalid date of birth")
                }
                RegistrationError::UnclassifiedAge(_) => (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    "Age is outside all registration categories",
                ),
                // Retryable by the user; the whole issuance+persist step is
                // attempted fresh on re-submission.
                RegistrationError::SequenceUnavailable(_) => (
                    StatusCode::SERVICE_UNAVAILABLE,
                    "Registration number could not be issued",
                ),
            },
            AppError::Validation(_) => (StatusCode::BAD_REQUEST, "Validation error"),
            AppError::NotFound(_) => (StatusCode::NOT_FOUND, "Resource not found"),
            AppError::BadRequest(_) => (StatusCode::BAD_REQUEST, "Bad request"),
            AppError::InternalServerError(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "An internal server error occurred",
            ),
        };

        let body = Json(json!({
            "error": {
                "message": error_message,
                "details": self.to_string(),
            }
        }));

        (status, body).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sequence_unavailable_maps_to_503() {
        let err = AppError::Registration(RegistrationError::SequenceUnavailable(
            "timeout".into(),
        ));
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[test]
    fn unclassified_age_maps_to_422() {
        let err = AppError::Registration(RegistrationError::UnclassifiedAge(41));
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn duplicate_maps_to_conflict() {
        let err = AppError::Database(DatabaseError::Duplicate);
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::CONFLICT);
    }
}
