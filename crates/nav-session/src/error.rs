use thiserror::Error;

#[derive(Debug, Error)]
pub enum TrackError {
    #[error("track parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type TrackResult<T> = Result<T, TrackError>;
