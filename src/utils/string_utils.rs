//! # String utilities
//!
//! Common helpers for string handling shared by validation and
//! deserialization.

use serde::Deserialize;

use crate::errors::errors::AppError;

/// Validates and cleans a required string field
///
/// Returns the trimmed string, or a `ValidationError` naming the field
/// when the value is empty or whitespace-only.
///
/// # Arguments
/// * `value` - string to validate
/// * `field_name` - field name used in the error message
///
/// # Examples
/// ```rust,ignore
/// use crate::utils::string_utils::validate_required_string;
///
/// assert_eq!(validate_required_string("  Hello  ", "text").unwrap(), "Hello");
/// assert!(validate_required_string("   ", "text").is_err());
/// ```
pub fn validate_required_string(value: &str, field_name: &str) -> Result<String, AppError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(AppError::ValidationError(format!(
            "{} is required",
            field_name
        )));
    }
    Ok(trimmed.to_string())
}

/// Cleans an optional string field
///
/// `None`, empty, and whitespace-only values all become `None`; anything
/// else is returned trimmed.
pub fn clean_optional_string(value: Option<String>) -> Option<String> {
    value.and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// Serde deserializer for optional string fields
///
/// Maps `null`, empty, and whitespace-only input to `None` and trims the
/// rest. Use with `#[serde(deserialize_with = "deserialize_optional_string")]`.
pub fn deserialize_optional_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(clean_optional_string(opt))
}
