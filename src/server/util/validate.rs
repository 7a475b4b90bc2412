use crate::server::error::AppError;

/// Builds the validation error for a create request missing required fields.
///
/// # Arguments
/// - `fields` - Every required field name paired with whether it was present in the body
///
/// # Returns
/// - `AppError::Validation` listing the absent fields in declaration order
pub fn missing_fields(fields: &[(&'static str, bool)]) -> AppError {
    let missing: Vec<&str> = fields
        .iter()
        .filter(|(_, present)| !present)
        .map(|(name, _)| *name)
        .collect();

    AppError::Validation(format!("Missing required fields: {}", missing.join(", ")))
}
