use thiserror::Error;

#[derive(Debug, Error)]
pub enum FeatureError {
    /// The landmark set is too short for the fixed hand topology.
    #[error("invalid landmark set: expected at least {expected} landmarks, found {found}")]
    InvalidLandmarkSet { expected: usize, found: usize },

    #[error("no landmarks provided")]
    MissingLandmarks,

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid glob pattern: {0}")]
    Pattern(#[from] glob::PatternError),
}

pub type Result<T> = std::result::Result<T, FeatureError>;
