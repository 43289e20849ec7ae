use thiserror::Error;

pub type PlaneResult<T> = Result<T, PlaneError>;

#[derive(Debug, Error)]
pub enum PlaneError {
    #[error("invalid grid unit: {value} (must be finite and > 0)")]
    InvalidGridUnit { value: f64 },

    #[error("invalid `{property}` for {category}: {reason}")]
    InvalidProperty {
        category: &'static str,
        property: &'static str,
        reason: String,
    },

    #[error("{category} does not support the `{capability}` property")]
    UnsupportedCapability {
        category: &'static str,
        capability: &'static str,
    },

    #[error("invalid data: {0}")]
    InvalidData(String),
}
