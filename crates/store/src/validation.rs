//! Field validation for reminder mutations.
//!
//! The same rules apply on create and on update. Order matters to the
//! caller when several fields are invalid at once: the store checks
//! radius first, then coordinates, then text on create.

use crate::error::StoreError;

/// Validate a trigger radius.
///
/// NaN and infinite values are rejected as not-a-number before the
/// positivity check, so a caller coercing a missing field to NaN gets
/// the "valid number" error rather than the positivity one.
pub fn validate_radius(radius: f64) -> Result<(), StoreError> {
    if !radius.is_finite() {
        return Err(StoreError::RadiusNotNumeric);
    }
    if radius <= 0.0 {
        return Err(StoreError::InvalidRadius);
    }
    Ok(())
}

/// Validate a coordinate pair.
///
/// Only numeric usability is checked; out-of-range geographic values
/// (latitude beyond ±90, longitude beyond ±180) pass through.
pub fn validate_coordinates(latitude: f64, longitude: f64) -> Result<(), StoreError> {
    if !latitude.is_finite() || !longitude.is_finite() {
        return Err(StoreError::InvalidCoordinates);
    }
    Ok(())
}

/// Validate reminder text, returning the trimmed form that gets stored.
pub fn validate_text(text: &str) -> Result<&str, StoreError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(StoreError::EmptyText);
    }
    Ok(trimmed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn radius_accepts_positive() {
        assert!(validate_radius(500.0).is_ok());
        assert!(validate_radius(0.001).is_ok());
        assert!(validate_radius(f64::MAX).is_ok());
    }

    #[test]
    fn radius_rejects_zero_and_negative() {
        assert_eq!(validate_radius(0.0), Err(StoreError::InvalidRadius));
        assert_eq!(validate_radius(-100.0), Err(StoreError::InvalidRadius));
        assert_eq!(validate_radius(-0.0), Err(StoreError::InvalidRadius));
    }

    #[test]
    fn radius_rejects_non_numeric() {
        assert_eq!(validate_radius(f64::NAN), Err(StoreError::RadiusNotNumeric));
        assert_eq!(
            validate_radius(f64::INFINITY),
            Err(StoreError::RadiusNotNumeric)
        );
        assert_eq!(
            validate_radius(f64::NEG_INFINITY),
            Err(StoreError::RadiusNotNumeric)
        );
    }

    #[test]
    fn coordinates_accept_any_finite_values() {
        assert!(validate_coordinates(40.7128, -74.0060).is_ok());
        // Out-of-range geographic values are deliberately not rejected.
        assert!(validate_coordinates(1000.0, -1000.0).is_ok());
    }

    #[test]
    fn coordinates_reject_non_numeric() {
        assert_eq!(
            validate_coordinates(f64::NAN, 0.0),
            Err(StoreError::InvalidCoordinates)
        );
        assert_eq!(
            validate_coordinates(0.0, f64::INFINITY),
            Err(StoreError::InvalidCoordinates)
        );
    }

    #[test]
    fn text_trims_and_rejects_empty() {
        assert_eq!(validate_text("  Pick up groceries  "), Ok("Pick up groceries"));
        assert_eq!(validate_text(""), Err(StoreError::EmptyText));
        assert_eq!(validate_text("   "), Err(StoreError::EmptyText));
        assert_eq!(validate_text("\t\n"), Err(StoreError::EmptyText));
    }
}
