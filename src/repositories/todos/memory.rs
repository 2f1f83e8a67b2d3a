//! In-memory todo store
//!
//! A `HashMap`-backed implementation of the [`TodoStore`] contract. Any
//! engine satisfying the contract is a valid substitute for MongoDB; this
//! one backs the integration tests and local experiments that should not
//! require a running server.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;

use crate::{
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

use super::todo_repository::TodoStore;

/// Process-local todo store
///
/// Assigns fresh ObjectIds on insert, like the MongoDB store. All
/// operations take the lock for their full duration, so each one is
/// atomic; concurrent updates to the same id serialize as last-write-wins.
#[derive(Default)]
pub struct InMemoryTodoStore {
    todos: RwLock<HashMap<TodoId, Todo>>,
}

impl InMemoryTodoStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn apply_patch(todo: &mut Todo, patch: TodoPatch) {
        if let Some(text) = patch.text {
            todo.text = text;
        }
        if let Some(completed) = patch.completed {
            todo.completed = completed;
        }
        match patch.completed_at {
            CompletedAtUpdate::Keep => {}
            CompletedAtUpdate::Clear => todo.completed_at = None,
            CompletedAtUpdate::Set(timestamp) => todo.completed_at = Some(timestamp),
        }
    }
}

fn lock_poisoned<E>(_: E) -> AppError {
    AppError::InternalError("todo store lock poisoned".to_string())
}

#[async_trait]
impl TodoStore for InMemoryTodoStore {
    async fn insert(&self, new: NewTodo) -> AppResult<Todo> {
        let mut todos = self.todos.write().map_err(lock_poisoned)?;

        let oid = ObjectId::new();
        let mut todo = Todo::new(new.text);
        todo.id = Some(oid);
        todos.insert(TodoId::from(oid), todo.clone());

        Ok(todo)
    }

    async fn find_all(&self) -> AppResult<Vec<Todo>> {
        let todos = self.todos.read().map_err(lock_poisoned)?;
        Ok(todos.values().cloned().collect())
    }

    async fn find_by_id(&self, id: &TodoId) -> AppResult<Option<Todo>> {
        let todos = self.todos.read().map_err(lock_poisoned)?;
        Ok(todos.get(id).cloned())
    }

    async fn update_by_id(&self, id: &TodoId, patch: TodoPatch) -> AppResult<Option<Todo>> {
        let mut todos = self.todos.write().map_err(lock_poisoned)?;

        Ok(todos.get_mut(id).map(|todo| {
            Self::apply_patch(todo, patch);
            todo.clone()
        }))
    }

    async fn delete_by_id(&self, id: &TodoId) -> AppResult<Option<Todo>> {
        let mut todos = self.todos.write().map_err(lock_poisoned)?;
        Ok(todos.remove(id))
    }

    async fn delete_all(&self) -> AppResult<u64> {
        let mut todos = self.todos.write().map_err(lock_poisoned)?;
        let count = todos.len() as u64;
        todos.clear();
        Ok(count)
    }
}
