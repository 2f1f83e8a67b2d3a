//! Application-wide error handling system
//!
//! Unified error handling for the todo backend. Uses `thiserror` together
//! with `actix_web::ResponseError` so that every domain outcome resolves to
//! a response inside the handler that produced it.
//!
//! ## Response mapping
//!
//! | AppError | HTTP Status | Body |
//! |----------|-------------|------|
//! | `ValidationError` | 400 Bad Request | `{ "message": <constraint> }` |
//! | `NotFound` | 404 Not Found | empty |
//! | `DatabaseError` | 500 Internal Server Error | `{ "message": ... }` |
//! | `InternalError` | 500 Internal Server Error | `{ "message": ... }` |
//!
//! A malformed resource identifier converts into `NotFound`, so a client
//! cannot tell a badly formatted id apart from an absent record.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use crate::errors::AppError;
//!
//! async fn create_todo(text: &str) -> Result<Todo, AppError> {
//!     if text.trim().is_empty() {
//!         return Err(AppError::ValidationError("text is required".to_string()));
//!     }
//!
//!     let todo = store.insert(NewTodo { text: text.to_string() }).await
//!         .map_err(|e| AppError::DatabaseError(e.to_string()))?;
//!
//!     Ok(todo)
//! }
//! ```

use thiserror::Error;

use crate::domain::todo_id::MalformedTodoId;

/// Application-wide error type
///
/// Covers every failure the backend distinguishes. Implements
/// `actix_web::ResponseError`, so returning it from a handler produces the
/// mapped HTTP response automatically.
#[derive(Error, Debug)]
pub enum AppError {
    /// Database failure (500 Internal Server Error)
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// Input validation failure (400 Bad Request)
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// Resource not found (404 Not Found)
    #[error("Not found: {0}")]
    NotFound(String),

    /// Unexpected internal failure (500 Internal Server Error)
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> actix_web::http::StatusCode {
        use actix_web::http::StatusCode;

        match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Builds the HTTP error response.
    ///
    /// Not-found responses carry no body; the reason (absent record or
    /// malformed id) stays server-side. Every other error carries a
    /// `{ "message": ... }` JSON body.
    fn error_response(&self) -> actix_web::HttpResponse {
        match self {
            AppError::NotFound(_) => actix_web::HttpResponse::NotFound().finish(),
            AppError::ValidationError(constraint) => actix_web::HttpResponse::BadRequest()
                .json(serde_json::json!({ "message": constraint })),
            other => actix_web::HttpResponse::build(self.status_code())
                .json(serde_json::json!({ "message": other.to_string() })),
        }
    }
}

/// A malformed identifier is externally indistinguishable from an absent
/// record; the raw value is preserved for server-side logs only.
impl From<MalformedTodoId> for AppError {
    fn from(err: MalformedTodoId) -> Self {
        AppError::NotFound(err.to_string())
    }
}

/// Flattens `validator` derive output into a single constraint message.
impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let constraint = errors
            .field_errors()
            .into_iter()
            .flat_map(|(_, field_errors)| field_errors.iter())
            .filter_map(|e| e.message.as_ref().map(|m| m.to_string()))
            .next()
            .unwrap_or_else(|| errors.to_string());

        AppError::ValidationError(constraint)
    }
}

/// Convenience Result alias
pub type AppResult<T> = Result<T, AppError>;

/// Extension trait for converting foreign errors into `AppError`
pub trait ErrorContext<T> {
    /// Converts the error, prefixing it with the given context.
    fn context(self, msg: &str) -> AppResult<T>;

    /// Converts the error with lazily evaluated context.
    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }

    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", f(), e)))
    }
}
