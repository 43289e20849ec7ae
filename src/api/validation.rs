use crate::error::{PlaneError, PlaneResult};

pub(super) fn validate_non_negative(
    category: &'static str,
    property: &'static str,
    value: f64,
) -> PlaneResult<f64> {
    if !value.is_finite() || value < 0.0 {
        return Err(PlaneError::InvalidProperty {
            category,
            property,
            reason: format!("must be finite and >= 0, got {value}"),
        });
    }
    Ok(value)
}

pub(super) fn validate_positive(
    category: &'static str,
    property: &'static str,
    value: f64,
) -> PlaneResult<f64> {
    if !value.is_finite() || value <= 0.0 {
        return Err(PlaneError::InvalidProperty {
            category,
            property,
            reason: format!("must be finite and > 0, got {value}"),
        });
    }
    Ok(value)
}

pub(super) fn validate_non_empty(
    category: &'static str,
    property: &'static str,
    value: &str,
) -> PlaneResult<()> {
    if value.trim().is_empty() {
        return Err(PlaneError::InvalidProperty {
            category,
            property,
            reason: "must not be empty".to_owned(),
        });
    }
    Ok(())
}
