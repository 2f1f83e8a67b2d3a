//! # Todo repository
//!
//! The persistence boundary of the service: the [`TodoStore`] contract and
//! its MongoDB implementation. The store is the sole source of truth for
//! todo records; handlers and the service layer never touch the driver
//! directly.
//!
//! ## Contract
//!
//! Every operation resolves against exactly one record (or the whole
//! collection for `find_all`/`delete_all`) and reports "no such record"
//! as `Ok(None)` rather than an error — the distinction between absent
//! and malformed ids is already settled before a store call is issued.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use crate::repositories::todos::todo_repository::{MongoTodoRepository, TodoStore};
//!
//! let store: Arc<dyn TodoStore> = Arc::new(MongoTodoRepository::new(database));
//! let todo = store.insert(NewTodo { text: "buy milk".to_string() }).await?;
//! let fetched = store.find_by_id(&TodoId::from(todo.id.unwrap())).await?;
//! ```

use std::sync::Arc;

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::{
    Collection,
    bson::{Bson, Document, doc},
    options::{FindOneAndUpdateOptions, ReturnDocument},
};

use crate::{
    db::Database,
    domain::{
        entities::todos::todo::Todo,
        models::todos::{
            new_todo::NewTodo,
            todo_patch::{CompletedAtUpdate, TodoPatch},
        },
        todo_id::TodoId,
    },
    errors::{AppError, AppResult},
};

/// Storage contract for todo records
///
/// Object-safe so the service layer can hold an `Arc<dyn TodoStore>` and
/// tests can substitute an in-memory implementation.
#[async_trait]
pub trait TodoStore: Send + Sync {
    /// Persists a new todo, assigning its id and the store defaults
    /// (`completed = false`, `completed_at = None`).
    async fn insert(&self, new: NewTodo) -> AppResult<Todo>;

    /// Every stored todo; order unspecified.
    async fn find_all(&self) -> AppResult<Vec<Todo>>;

    /// One todo by id, `None` when no record matches.
    async fn find_by_id(&self, id: &TodoId) -> AppResult<Option<Todo>>;

    /// Applies the patch atomically and returns the post-update record,
    /// `None` when no record matches. The patch arrives fully derived;
    /// the store performs no field computation of its own.
    async fn update_by_id(&self, id: &TodoId, patch: TodoPatch) -> AppResult<Option<Todo>>;

    /// Removes one todo and returns the pre-deletion record, `None` when
    /// no record matches.
    async fn delete_by_id(&self, id: &TodoId) -> AppResult<Option<Todo>>;

    /// Removes every record and returns how many were deleted. Test-setup
    /// helper; not exposed through any route.
    async fn delete_all(&self) -> AppResult<u64>;
}

/// MongoDB-backed todo store
///
/// Stores one document per todo in the `todos` collection.
pub struct MongoTodoRepository {
    /// Injected database connection
    db: Arc<Database>,
}

impl MongoTodoRepository {
    /// Collection holding the todo documents
    pub const COLLECTION: &'static str = "todos";

    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    fn collection(&self) -> Collection<Todo> {
        self.db.get_database().collection(Self::COLLECTION)
    }
}

/// Translates a patch into the `$set` payload of an update.
///
/// `CompletedAtUpdate::Clear` writes an explicit null; `Keep` omits the
/// field so the stored value survives.
fn set_document(patch: &TodoPatch) -> Document {
    let mut set = Document::new();

    if let Some(text) = &patch.text {
        set.insert("text", text.as_str());
    }
    if let Some(completed) = patch.completed {
        set.insert("completed", completed);
    }
    match patch.completed_at {
        CompletedAtUpdate::Keep => {}
        CompletedAtUpdate::Clear => {
            set.insert("completed_at", Bson::Null);
        }
        CompletedAtUpdate::Set(timestamp) => {
            set.insert("completed_at", timestamp);
        }
    }

    set
}

#[async_trait]
impl TodoStore for MongoTodoRepository {
    async fn insert(&self, new: NewTodo) -> AppResult<Todo> {
        let mut todo = Todo::new(new.text);

        let result = self
            .collection()
            .insert_one(&todo)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        todo.id = Some(result.inserted_id.as_object_id().ok_or_else(|| {
            AppError::DatabaseError("insert did not return an ObjectId".to_string())
        })?);

        Ok(todo)
    }

    async fn find_all(&self) -> AppResult<Vec<Todo>> {
        let cursor = self
            .collection()
            .find(doc! {})
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        cursor
            .try_collect()
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn find_by_id(&self, id: &TodoId) -> AppResult<Option<Todo>> {
        self.collection()
            .find_one(doc! { "_id": id.as_object_id() })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn update_by_id(&self, id: &TodoId, patch: TodoPatch) -> AppResult<Option<Todo>> {
        let set = set_document(&patch);

        // MongoDB rejects an empty $set; a no-op patch degrades to a read
        if set.is_empty() {
            return self.find_by_id(id).await;
        }

        let options = FindOneAndUpdateOptions::builder()
            .return_document(ReturnDocument::After)
            .build();

        self.collection()
            .find_one_and_update(doc! { "_id": id.as_object_id() }, doc! { "$set": set })
            .with_options(options)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn delete_by_id(&self, id: &TodoId) -> AppResult<Option<Todo>> {
        self.collection()
            .find_one_and_delete(doc! { "_id": id.as_object_id() })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn delete_all(&self) -> AppResult<u64> {
        let result = self
            .collection()
            .delete_many(doc! {})
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(result.deleted_count)
    }
}
