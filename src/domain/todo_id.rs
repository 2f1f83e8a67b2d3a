//! Todo identifier codec
//!
//! Validates externally supplied identifiers before any store call is
//! issued, so a malformed id never reaches storage. A valid identifier is
//! the 24-hex-character ObjectId form assigned by MongoDB on insert.

use std::fmt;

use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The supplied string is not a valid todo identifier.
///
/// Converted into a not-found response at the HTTP boundary; the rejected
/// value is kept only for server-side logs.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("malformed todo id: {0:?}")]
pub struct MalformedTodoId(String);

/// Opaque identifier of a stored todo
///
/// Supports equality, hashing, and conversion back to its 24-hex string
/// form; it carries no other semantics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TodoId(ObjectId);

impl TodoId {
    /// Parses a raw path segment into an identifier.
    ///
    /// # Arguments
    /// * `raw` - arbitrary string taken from a request path
    ///
    /// # Returns
    /// * `Ok(TodoId)` - `raw` is a well-formed 24-hex-character id
    /// * `Err(MalformedTodoId)` - any other shape
    pub fn parse(raw: &str) -> Result<Self, MalformedTodoId> {
        ObjectId::parse_str(raw)
            .map(TodoId)
            .map_err(|_| MalformedTodoId(raw.to_string()))
    }

    /// 24-hex string form, as exposed to clients.
    pub fn to_hex(&self) -> String {
        self.0.to_hex()
    }

    pub(crate) fn as_object_id(&self) -> ObjectId {
        self.0
    }
}

impl From<ObjectId> for TodoId {
    fn from(oid: ObjectId) -> Self {
        TodoId(oid)
    }
}

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.to_hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_accepts_well_formed_id() {
        let id = TodoId::parse("507f1f77bcf86cd799439011").unwrap();
        assert_eq!(id.to_hex(), "507f1f77bcf86cd799439011");
    }

    #[test]
    fn test_parse_round_trips_generated_id() {
        let oid = ObjectId::new();
        let id = TodoId::parse(&oid.to_hex()).unwrap();
        assert_eq!(id, TodoId::from(oid));
    }

    #[test]
    fn test_parse_rejects_malformed_ids() {
        assert!(TodoId::parse("").is_err());
        assert!(TodoId::parse("123").is_err());
        // one character short of the required 24
        assert!(TodoId::parse("507f1f77bcf86cd79943901").is_err());
        // one character too long
        assert!(TodoId::parse("507f1f77bcf86cd7994390111").is_err());
        // non-hex character
        assert!(TodoId::parse("507f1f77bcf86cd79943901g").is_err());
    }

    #[test]
    fn test_display_matches_hex_form() {
        let id = TodoId::parse("507f1f77bcf86cd799439011").unwrap();
        assert_eq!(id.to_string(), "507f1f77bcf86cd799439011");
    }
}
