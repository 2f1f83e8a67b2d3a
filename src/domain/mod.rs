//! # Domain Module
//!
//! Domain types for the todo backend, split the same way the HTTP layers
//! consume them:
//!
//! - [`entities`] - persisted documents (the `Todo` record)
//! - [`models`] - plain domain values passed between service and store
//! - [`dto`] - request/response wire shapes
//! - [`todo_id`] - identifier parsing and the opaque [`todo_id::TodoId`]

pub mod dto;
pub mod entities;
pub mod models;
pub mod todo_id;
