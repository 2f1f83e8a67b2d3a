//! # Todo service implementation
//!
//! Business logic for the todo resource. Thin by design — the one piece
//! of real domain logic is the patch transition: toggling `completed`
//! deterministically sets or clears the completion timestamp.
//!
//! ## Patch transition
//!
//! The timestamp is derived from the *supplied* `completed` value, never
//! from the stored prior state:
//!
//! | patch `completed` | effect on `completed_at` |
//! |-------------------|--------------------------|
//! | `true` | set to the current epoch millis |
//! | `false` | cleared to null, whatever it was |
//! | not supplied | left untouched |
//!
//! This keeps the entity invariant (`completed ⟺ completed_at present`)
//! without ever reading before writing, so concurrent patches to the same
//! id simply resolve last-write-wins at the store.
//!
//! ## Dependency injection
//!
//! The service holds an `Arc<dyn TodoStore>` handed to it at construction
//! (from `main` for MongoDB, from tests for the in-memory store); it has
//! no global state of its own.

use std::sync::Arc;

use chrono::Utc;
use log::info;

use crate::{
    domain::{
        dto::todos::request::{CreateTodoRequest, UpdateTodoRequest},
        entities::todos::todo::Todo,
        models::todos::{
            new_todo::NewTodo,
            todo_patch::{CompletedAtUpdate, TodoPatch},
        },
        todo_id::TodoId,
    },
    errors::{AppError, AppResult},
    repositories::todos::todo_repository::TodoStore,
    utils::string_utils::validate_required_string,
};

/// Todo business logic service
pub struct TodoService {
    /// Injected storage backend
    store: Arc<dyn TodoStore>,
}

impl TodoService {
    pub fn new(store: Arc<dyn TodoStore>) -> Self {
        Self { store }
    }

    /// Creates a todo from a validated request.
    ///
    /// Trims the text and re-checks that something is left; the store
    /// assigns the id and the completion defaults.
    ///
    /// # Returns
    /// * `Ok(Todo)` - the created record, id included
    /// * `Err(AppError::ValidationError)` - text missing or blank
    pub async fn create_todo(&self, request: CreateTodoRequest) -> AppResult<Todo> {
        let text = validate_required_string(request.text.as_deref().unwrap_or(""), "text")?;

        let todo = self.store.insert(NewTodo { text }).await?;
        info!("todo created: {}", todo.id_string().unwrap_or_default());

        Ok(todo)
    }

    /// Every stored todo.
    pub async fn list_todos(&self) -> AppResult<Vec<Todo>> {
        self.store.find_all().await
    }

    /// One todo by id.
    ///
    /// # Returns
    /// * `Ok(Todo)` - the matching record
    /// * `Err(AppError::NotFound)` - no record with that id
    pub async fn get_todo(&self, id: &TodoId) -> AppResult<Todo> {
        self.store
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("no todo with id {}", id)))
    }

    /// Applies a partial update.
    ///
    /// Derives the completion timestamp from the supplied `completed`
    /// value (see module docs), merges it with the supplied fields, and
    /// hands the finished patch to the store in a single call.
    ///
    /// # Returns
    /// * `Ok(Todo)` - the post-update record
    /// * `Err(AppError::NotFound)` - no record with that id
    pub async fn update_todo(&self, id: &TodoId, request: UpdateTodoRequest) -> AppResult<Todo> {
        let completed_at = match request.completed {
            Some(true) => CompletedAtUpdate::Set(Utc::now().timestamp_millis()),
            Some(false) => CompletedAtUpdate::Clear,
            None => CompletedAtUpdate::Keep,
        };

        let patch = TodoPatch {
            text: request.text,
            completed: request.completed,
            completed_at,
        };

        self.store
            .update_by_id(id, patch)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("no todo with id {}", id)))
    }

    /// Removes a todo and returns what was deleted.
    ///
    /// # Returns
    /// * `Ok(Todo)` - the pre-deletion record
    /// * `Err(AppError::NotFound)` - no record with that id
    pub async fn delete_todo(&self, id: &TodoId) -> AppResult<Todo> {
        let deleted = self
            .store
            .delete_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("no todo with id {}", id)))?;

        info!("todo deleted: {}", deleted.id_string().unwrap_or_default());

        Ok(deleted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::todos::memory::InMemoryTodoStore;
    use mongodb::bson::oid::ObjectId;

    fn service_with_store() -> (TodoService, Arc<InMemoryTodoStore>) {
        let store = Arc::new(InMemoryTodoStore::new());
        (TodoService::new(store.clone()), store)
    }

    fn create_request(text: &str) -> CreateTodoRequest {
        CreateTodoRequest {
            text: Some(text.to_string()),
        }
    }

    #[actix_web::test]
    async fn test_create_trims_text_and_applies_defaults() {
        let (service, _) = service_with_store();

        let todo = service
            .create_todo(create_request("  buy milk  "))
            .await
            .unwrap();

        assert_eq!(todo.text, "buy milk");
        assert!(!todo.completed);
        assert_eq!(todo.completed_at, None);
        assert!(todo.id.is_some());
    }

    #[actix_web::test]
    async fn test_create_rejects_blank_text_and_persists_nothing() {
        let (service, store) = service_with_store();

        let result = service.create_todo(create_request("   ")).await;
        assert!(matches!(result, Err(AppError::ValidationError(_))));

        let result = service.create_todo(CreateTodoRequest { text: None }).await;
        assert!(matches!(result, Err(AppError::ValidationError(_))));

        assert!(store.find_all().await.unwrap().is_empty());
    }

    #[actix_web::test]
    async fn test_patch_completed_true_sets_timestamp() {
        let (service, _) = service_with_store();
        let todo = service.create_todo(create_request("buy milk")).await.unwrap();
        let id = TodoId::from(todo.id.unwrap());

        let updated = service
            .update_todo(
                &id,
                UpdateTodoRequest {
                    text: None,
                    completed: Some(true),
                },
            )
            .await
            .unwrap();

        assert!(updated.completed);
        let timestamp = updated.completed_at.expect("completed_at should be set");
        assert!(timestamp > 0);
    }

    #[actix_web::test]
    async fn test_patch_completed_false_clears_timestamp() {
        let (service, _) = service_with_store();
        let todo = service.create_todo(create_request("buy milk")).await.unwrap();
        let id = TodoId::from(todo.id.unwrap());

        service
            .update_todo(
                &id,
                UpdateTodoRequest {
                    text: None,
                    completed: Some(true),
                },
            )
            .await
            .unwrap();

        let cleared = service
            .update_todo(
                &id,
                UpdateTodoRequest {
                    text: None,
                    completed: Some(false),
                },
            )
            .await
            .unwrap();

        assert!(!cleared.completed);
        assert_eq!(cleared.completed_at, None);

        // clearing an already-clear todo stays clear
        let cleared_again = service
            .update_todo(
                &id,
                UpdateTodoRequest {
                    text: None,
                    completed: Some(false),
                },
            )
            .await
            .unwrap();
        assert_eq!(cleared_again.completed_at, None);
    }

    #[actix_web::test]
    async fn test_patch_without_completed_keeps_timestamp() {
        let (service, _) = service_with_store();
        let todo = service.create_todo(create_request("buy milk")).await.unwrap();
        let id = TodoId::from(todo.id.unwrap());

        let completed = service
            .update_todo(
                &id,
                UpdateTodoRequest {
                    text: None,
                    completed: Some(true),
                },
            )
            .await
            .unwrap();
        let timestamp = completed.completed_at.unwrap();

        let renamed = service
            .update_todo(
                &id,
                UpdateTodoRequest {
                    text: Some("walk the dog".to_string()),
                    completed: None,
                },
            )
            .await
            .unwrap();

        assert_eq!(renamed.text, "walk the dog");
        assert!(renamed.completed);
        assert_eq!(renamed.completed_at, Some(timestamp));
    }

    #[actix_web::test]
    async fn test_empty_patch_is_a_noop_and_still_succeeds() {
        let (service, _) = service_with_store();
        let todo = service.create_todo(create_request("buy milk")).await.unwrap();
        let id = TodoId::from(todo.id.unwrap());

        let unchanged = service
            .update_todo(&id, UpdateTodoRequest::default())
            .await
            .unwrap();

        assert_eq!(unchanged, todo);
    }

    #[actix_web::test]
    async fn test_operations_on_absent_id_report_not_found() {
        let (service, _) = service_with_store();
        let absent = TodoId::from(ObjectId::new());

        assert!(matches!(
            service.get_todo(&absent).await,
            Err(AppError::NotFound(_))
        ));
        assert!(matches!(
            service
                .update_todo(&absent, UpdateTodoRequest::default())
                .await,
            Err(AppError::NotFound(_))
        ));
        assert!(matches!(
            service.delete_todo(&absent).await,
            Err(AppError::NotFound(_))
        ));
    }

    #[actix_web::test]
    async fn test_delete_returns_record_and_removes_it() {
        let (service, store) = service_with_store();
        let todo = service.create_todo(create_request("buy milk")).await.unwrap();
        let id = TodoId::from(todo.id.unwrap());

        let deleted = service.delete_todo(&id).await.unwrap();
        assert_eq!(deleted.text, "buy milk");
        assert!(store.find_all().await.unwrap().is_empty());
    }
}
