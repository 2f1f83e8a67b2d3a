//! # HTTP Request Handlers Module
//!
//! Request/response orchestration for the public API. Each handler runs
//! the same short sequence: parse the path identifier, validate the
//! payload, delegate to [`crate::services::todos::todo_service::TodoService`],
//! and let [`crate::errors::AppError`] map the outcome onto a response.
//!
//! ```text
//! HTTP Layer Architecture
//! ┌─────────────────────────────────────────────┐
//!   Client (Browser, Mobile App, API Client)
//! └─────────────────────┬───────────────────────┘
//!                       │ HTTP Request/Response
//! ┌─────────────────────▼───────────────────────┐
//!   Handlers (this module) - endpoint handling    ← Web Layer
//! ├─────────────────────────────────────────────┤
//!   Services - business logic                     ← Service Layer
//! ├─────────────────────────────────────────────┤
//!   Repositories - data access                    ← Repository Layer
//! ├─────────────────────────────────────────────┤
//!   Entities/Models - domain model                ← Domain Layer
//! └─────────────────────────────────────────────┘
//! ```

pub mod todos;
