//! Error types for dinopark
//!
//! Uses `thiserror` for library errors; the binary wraps them in `anyhow`.

use thiserror::Error;

use crate::domain::entities::AdmissionError;
use crate::domain::ports::PersistError;

/// Result type alias for dinopark operations
pub type DinoparkResult<T> = Result<T, DinoparkError>;

/// Main error type for dinopark operations
#[derive(Error, Debug)]
pub enum DinoparkError {
    /// A dinosaur was refused entry into an enclosure
    #[error(transparent)]
    Admission(#[from] AdmissionError),

    /// The persistence collaborator failed
    #[error(transparent)]
    Persist(#[from] PersistError),

    /// `base_length + index` does not fit in a dinosaur length
    #[error("dinosaur length overflow: base length {base_length} plus index {index}")]
    LengthOverflow { base_length: i64, index: usize },

    /// Configuration could not be used
    #[error("invalid configuration ({origin}): {message}")]
    InvalidConfig { origin: String, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl DinoparkError {
    /// True for the "no active security" admission failure
    pub fn is_unsecured_enclosure(&self) -> bool {
        matches!(
            self,
            DinoparkError::Admission(AdmissionError::UnsecuredEnclosure)
        )
    }

    /// True for the diet mismatch admission failure
    pub fn is_diet_mismatch(&self) -> bool {
        matches!(
            self,
            DinoparkError::Admission(AdmissionError::DietMismatch { .. })
        )
    }
}
