//! Field set accepted by the store on insert.

/// Fields of a todo about to be created
///
/// Only the validated, trimmed text; id and completion state are assigned
/// by the store (`completed = false`, `completed_at = None`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTodo {
    pub text: String,
}
