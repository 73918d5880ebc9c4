use thiserror::Error;

use nav_core::NavError;

/// Outcome of a failed provider call.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum LookupError {
    #[error("no match")]
    NotFound,

    #[error("service unavailable: {0}")]
    Service(String),
}

impl From<LookupError> for NavError {
    fn from(e: LookupError) -> Self {
        match e {
            LookupError::NotFound   => NavError::NotFound("no match".to_string()),
            LookupError::Service(m) => NavError::ServiceError(m),
        }
    }
}

pub type LookupResult<T> = Result<T, LookupError>;
