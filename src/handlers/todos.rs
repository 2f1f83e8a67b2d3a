//! # Todo HTTP Handlers
//!
//! Endpoint handlers for the todo resource.
//!
//! | Method | Path | Description | Success |
//! |--------|------|-------------|---------|
//! | `POST` | `/todos` | create a todo | 200, created todo |
//! | `GET` | `/todos` | list all todos | 200, `{ "todos": [...] }` |
//! | `GET` | `/todos/{id}` | fetch one todo | 200, `{ "todo": ... }` |
//! | `PATCH` | `/todos/{id}` | partially update | 200, `{ "todo": ... }` |
//! | `DELETE` | `/todos/{id}` | delete a todo | 200, `{ "todo": ... }` |
//!
//! A malformed path id and an absent record both answer 404 with an empty
//! body; the two cases are indistinguishable from outside.

use actix_web::{HttpResponse, delete, get, patch, post, web};
use validator::Validate;

use crate::{
    domain::{
        dto::todos::{
            request::{CreateTodoRequest, UpdateTodoRequest},
            response::{TodoEnvelope, TodoListResponse, TodoResponse},
        },
        todo_id::TodoId,
    },
    errors::AppError,
    services::todos::todo_service::TodoService,
};

/// Creates a todo
///
/// # Endpoint
///
/// `POST /todos`
///
/// # Request body
///
/// ```json
/// { "text": "buy milk" }
/// ```
///
/// # Responses
///
/// ## Success (200 OK)
/// ```json
/// {
///   "id": "507f1f77bcf86cd799439011",
///   "text": "buy milk",
///   "completed": false,
///   "completedAt": null
/// }
/// ```
///
/// ## Validation failure (400 Bad Request)
/// ```json
/// { "message": "text is required" }
/// ```
#[post("")]
pub async fn create_todo(
    service: web::Data<TodoService>,
    payload: web::Json<CreateTodoRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()?;

    let todo = service.create_todo(payload.into_inner()).await?;

    Ok(HttpResponse::Ok().json(TodoResponse::from(todo)))
}

/// Lists every stored todo
///
/// # Endpoint
///
/// `GET /todos`
///
/// # Responses
///
/// ## Success (200 OK)
/// ```json
/// { "todos": [ { "id": "...", "text": "...", "completed": false, "completedAt": null } ] }
/// ```
#[get("")]
pub async fn list_todos(service: web::Data<TodoService>) -> Result<HttpResponse, AppError> {
    let todos = service.list_todos().await?;

    Ok(HttpResponse::Ok().json(TodoListResponse::from(todos)))
}

/// Fetches one todo by id
///
/// # Endpoint
///
/// `GET /todos/{todo_id}`
///
/// # Responses
///
/// - 200 OK with `{ "todo": ... }`
/// - 404 Not Found, empty body, for an absent or malformed id
#[get("/{todo_id}")]
pub async fn get_todo(
    service: web::Data<TodoService>,
    todo_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let id = TodoId::parse(&todo_id)?;
    let todo = service.get_todo(&id).await?;

    Ok(HttpResponse::Ok().json(TodoEnvelope::from(todo)))
}

/// Partially updates a todo
///
/// Accepts any subset of `text` and `completed`; other fields are
/// ignored. Supplying `completed` drives the completion timestamp:
/// `true` stamps it, `false` clears it, absent leaves it alone.
///
/// # Endpoint
///
/// `PATCH /todos/{todo_id}`
///
/// # Request body
///
/// ```json
/// { "text": "walk the dog", "completed": true }
/// ```
///
/// # Responses
///
/// - 200 OK with `{ "todo": ... }` reflecting the applied patch
/// - 404 Not Found, empty body, for an absent or malformed id
#[patch("/{todo_id}")]
pub async fn update_todo(
    service: web::Data<TodoService>,
    todo_id: web::Path<String>,
    payload: web::Json<UpdateTodoRequest>,
) -> Result<HttpResponse, AppError> {
    let id = TodoId::parse(&todo_id)?;
    let todo = service.update_todo(&id, payload.into_inner()).await?;

    Ok(HttpResponse::Ok().json(TodoEnvelope::from(todo)))
}

/// Deletes a todo
///
/// # Endpoint
///
/// `DELETE /todos/{todo_id}`
///
/// # Responses
///
/// - 200 OK with `{ "todo": ... }` carrying the removed record
/// - 404 Not Found, empty body, for an absent or malformed id
#[delete("/{todo_id}")]
pub async fn delete_todo(
    service: web::Data<TodoService>,
    todo_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let id = TodoId::parse(&todo_id)?;
    let todo = service.delete_todo(&id).await?;

    Ok(HttpResponse::Ok().json(TodoEnvelope::from(todo)))
}
