mod age;
mod number;
mod sequence;

pub use age::{classify, Category, Classification};
pub use number::format_registration_number;
pub use sequence::{issue_registration_number, PgSequenceStore, SequenceStore};

use thiserror::Error;

/// Failures of the registration core. Classification errors are resolved
/// before submission; sequence errors are always surfaced to the caller.
#[derive(Debug, Error)]
pub enum RegistrationError {
    #[error("Invalid date of birth: {0}")]
    InvalidDate(String),

    #[error("Age {0} is outside all registration categories (1-40 years)")]
    UnclassifiedAge(i32),

    #[error("Registration number sequence unavailable: {0}")]
    SequenceUnavailable(String),
}
