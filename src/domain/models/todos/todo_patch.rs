//! Partial-update value passed from the service layer to the store.
//!
//! A patch distinguishes "field not supplied" from "field supplied as
//! false/empty": plain fields use `Option`, and the derived completion
//! timestamp uses the tagged [`CompletedAtUpdate`], since "leave untouched"
//! and "clear to null" are different store operations.

/// What the store should do with the `completed_at` field
///
/// The service derives this from the *supplied* `completed` value before
/// the store call; the store itself performs no derivation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CompletedAtUpdate {
    /// `completed` was not supplied; leave the stored value untouched.
    #[default]
    Keep,
    /// `completed: false` was supplied; clear any prior timestamp to null.
    Clear,
    /// `completed: true` was supplied; set the timestamp (epoch millis).
    Set(i64),
}

/// Field set applied atomically by `update_by_id`
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TodoPatch {
    /// Replacement text, already trimmed; `None` leaves it untouched.
    pub text: Option<String>,
    /// New completion flag; `None` leaves it untouched.
    pub completed: Option<bool>,
    /// Derived timestamp update matching `completed`.
    pub completed_at: CompletedAtUpdate,
}

impl TodoPatch {
    /// True when the patch changes nothing (a permitted no-op update).
    pub fn is_noop(&self) -> bool {
        self.text.is_none()
            && self.completed.is_none()
            && self.completed_at == CompletedAtUpdate::Keep
    }
}
