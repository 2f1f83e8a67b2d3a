//! Todo service backend
//!
//! A single-resource CRUD service for todo items, backed by MongoDB.
//! Every durable byte lives in the store; the service itself is stateless
//! between requests, and the store handle is acquired once at startup and
//! injected explicitly into the handlers.
//!
//! # Features
//!
//! - **Todo CRUD**: create, list, fetch, patch, delete over `/todos`
//! - **Patch transition**: toggling `completed` deterministically sets or
//!   clears the completion timestamp
//! - **Identifier guard**: path ids are validated before any store call;
//!   a malformed id answers exactly like an absent one
//! - **Swappable storage**: repositories implement a store trait, so the
//!   MongoDB backend and the in-memory test backend are interchangeable
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API endpoints
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← request/response handling
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← business logic
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← data access
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │     MongoDB     │ ← storage
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use todo_service_backend::db::Database;
//! use todo_service_backend::repositories::todos::todo_repository::{
//!     MongoTodoRepository, TodoStore,
//! };
//! use todo_service_backend::services::todos::todo_service::TodoService;
//!
//! let database = Arc::new(Database::new().await?);
//! let store: Arc<dyn TodoStore> = Arc::new(MongoTodoRepository::new(database));
//! let service = TodoService::new(store);
//! ```

pub mod config;
pub mod db;
pub mod domain;
pub mod errors;
pub mod handlers;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod utils;
