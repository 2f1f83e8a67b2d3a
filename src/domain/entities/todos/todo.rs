//! Todo Entity Implementation
//!
//! The single managed resource of this service. Stored as one flat document
//! per todo; no relationships to other records.

use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// Todo entity
///
/// Invariant maintained by the service layer: `completed == true` if and
/// only if `completed_at` holds a timestamp; an incomplete todo carries
/// `completed_at = None` (stored and serialized as an explicit null).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Todo {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// Display text, non-empty after trimming
    pub text: String,
    /// Completion flag, defaults to false
    #[serde(default)]
    pub completed: bool,
    /// Completion timestamp in epoch milliseconds, present iff completed
    #[serde(default)]
    pub completed_at: Option<i64>,
}

impl Todo {
    /// New unsaved todo with store defaults applied
    ///
    /// The id stays `None` until the store assigns one on insert.
    pub fn new(text: String) -> Self {
        Self {
            id: None,
            text,
            completed: false,
            completed_at: None,
        }
    }

    /// Id as its 24-hex string form
    pub fn id_string(&self) -> Option<String> {
        self.id.as_ref().map(|id| id.to_hex())
    }
}
