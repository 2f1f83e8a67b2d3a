//! Todo response DTOs
//!
//! The uniform response envelopes of the public API:
//! create returns the bare todo, single-record operations wrap it in
//! `{ "todo": ... }`, and list wraps the collection in `{ "todos": [...] }`.

use serde::{Deserialize, Serialize};

use crate::domain::entities::todos::todo::Todo;

/// Wire shape of a single todo
///
/// `completedAt` must serialize as an explicit `null` when unset, so no
/// `skip_serializing_if` on it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoResponse {
    pub id: String,
    pub text: String,
    pub completed: bool,
    pub completed_at: Option<i64>,
}

impl From<Todo> for TodoResponse {
    fn from(todo: Todo) -> Self {
        Self {
            id: todo.id_string().unwrap_or_default(),
            text: todo.text,
            completed: todo.completed,
            completed_at: todo.completed_at,
        }
    }
}

/// Envelope of `GET /todos`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TodoListResponse {
    pub todos: Vec<TodoResponse>,
}

impl From<Vec<Todo>> for TodoListResponse {
    fn from(todos: Vec<Todo>) -> Self {
        Self {
            todos: todos.into_iter().map(TodoResponse::from).collect(),
        }
    }
}

/// Envelope of single-record responses (get, patch, delete)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TodoEnvelope {
    pub todo: TodoResponse,
}

impl From<Todo> for TodoEnvelope {
    fn from(todo: Todo) -> Self {
        Self { todo: todo.into() }
    }
}
