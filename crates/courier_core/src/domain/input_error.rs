use thiserror::Error;

/// Raised at the input boundary, before anything reaches the recommender.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum InputError {
    #[error("Unknown {kind} label: {label:?}")]
    UnknownLabel { kind: &'static str, label: String },

    #[error("Drone limit must be between {min} and {max} km, got {value}")]
    DroneLimitOutOfRange { value: f64, min: f64, max: f64 },

    #[error("Invalid coordinate: {0:?}")]
    InvalidCoordinate(String),
}
