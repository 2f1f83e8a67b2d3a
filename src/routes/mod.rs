//! API route configuration module
//!
//! Registers the todo resource endpoints and the health-check endpoint.
//!
//! # Examples
//!
//! ```rust,ignore
//! use actix_web::App;
//! use todo_service_backend::routes::{configure_all_routes, default_json_config};
//!
//! let app = App::new()
//!     .app_data(default_json_config())
//!     .configure(configure_all_routes);
//! ```

use actix_web::web;
use serde_json::json;

use crate::errors::AppError;
use crate::handlers;

/// Registers all routes
///
/// # Arguments
///
/// * `cfg` - Actix-web service configuration
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    // Health check endpoint
    cfg.service(health_check);

    configure_todo_routes(cfg);
}

/// Registers the todo resource routes
///
/// All five operations live under the `/todos` scope:
///
/// - `POST /todos` - create
/// - `GET /todos` - list
/// - `GET /todos/{id}` - fetch one
/// - `PATCH /todos/{id}` - partial update
/// - `DELETE /todos/{id}` - delete
fn configure_todo_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/todos")
            .service(handlers::todos::create_todo)
            .service(handlers::todos::list_todos)
            .service(handlers::todos::get_todo)
            .service(handlers::todos::update_todo)
            .service(handlers::todos::delete_todo),
    );
}

/// JSON extractor configuration
///
/// Routes body deserialization failures (malformed JSON, wrong field
/// types) through the application error envelope, so every client error
/// answers with the same `{ "message": ... }` shape.
pub fn default_json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .error_handler(|err, _req| AppError::ValidationError(err.to_string()).into())
}

/// Service health-check endpoint
///
/// Used by load balancers and monitoring to verify the service is up.
///
/// # Examples
///
/// ```bash
/// curl http://localhost:8080/health
/// ```
///
/// Response:
/// ```json
/// {
///   "status": "healthy",
///   "service": "todo_service_backend",
///   "version": "0.1.0",
///   "timestamp": "2023-01-01T00:00:00Z",
///   "features": { "database": "MongoDB" }
/// }
/// ```
#[actix_web::get("/health")]
async fn health_check() -> actix_web::HttpResponse {
    actix_web::HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": "todo_service_backend",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "features": {
            "database": "MongoDB"
        }
    }))
}
