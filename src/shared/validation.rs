use std::borrow::Cow;

use validator::ValidationError;

/// Required-field check for free-text form inputs.
/// Rejects empty strings and strings made only of whitespace.
/// - Valid: "ул. Ленина, 15", " a "
/// - Invalid: "", "   ", "\n\t"
pub fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut error = ValidationError::new("blank");
        error.message = Some(Cow::Borrowed("must not be blank"));
        return Err(error);
    }
    Ok(())
}
