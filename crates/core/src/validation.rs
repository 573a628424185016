//! Pure request-field validators.

use crate::error::CoreError;

/// Require that a field is present and non-empty (after trimming).
///
/// Returns the trimmed value, or `CoreError::Validation` naming the field.
pub fn require_non_empty<'a>(field: &'static str, value: &'a str) -> Result<&'a str, CoreError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(CoreError::Validation(format!(
            "Missing required field: {field}"
        )));
    }
    Ok(trimmed)
}

/// Unwrap an optional request field, rejecting absent or blank values the
/// same way so clients cannot tell the two apart.
pub fn require_field<'a>(
    field: &'static str,
    value: Option<&'a str>,
) -> Result<&'a str, CoreError> {
    require_non_empty(field, value.unwrap_or_default())
}
