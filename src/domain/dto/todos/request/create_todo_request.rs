//! Todo creation request DTO
//!
//! Defines the request body of `POST /todos` and its validation. The only
//! accepted field is `text`; completion state is never accepted on create,
//! the store default applies.

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// Request DTO for creating a todo
///
/// `text` is modeled as an `Option` so that an entirely missing field is
/// caught by the `required` rule and reported through the validation
/// envelope instead of failing at deserialization.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateTodoRequest {
    /// Todo text, required and non-empty after trimming
    #[validate(
        required(message = "text is required"),
        custom(function = "validate_text_not_blank")
    )]
    pub text: Option<String>,
}

/// Rejects text that trims down to nothing.
fn validate_text_not_blank(text: &str) -> Result<(), ValidationError> {
    if text.trim().is_empty() {
        return Err(ValidationError::new("text_blank")
            .with_message("text is required".into()));
    }
    Ok(())
}
