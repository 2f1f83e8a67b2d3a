//! Todo patch request DTO
//!
//! Defines the request body of `PATCH /todos/{id}`. Both fields are
//! optional and unknown fields are ignored; an empty body is a valid
//! no-op patch. Only a type mismatch is rejected, at deserialization.

use serde::{Deserialize, Serialize};

use crate::utils::string_utils::deserialize_optional_string;

/// Request DTO for partially updating a todo
///
/// `None` means "field not supplied" and leaves the stored value
/// untouched; text that trims down to nothing is treated as not supplied.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateTodoRequest {
    /// Replacement text, trimmed on the way in
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub text: Option<String>,
    /// New completion flag; drives the completion timestamp derivation
    #[serde(default)]
    pub completed: Option<bool>,
}
