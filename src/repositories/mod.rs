//! # Repository Module
//!
//! Data access layer. The [`todos::todo_repository::TodoStore`] trait is
//! the sole boundary between the domain logic and persistence; any engine
//! satisfying it is a valid substitute for the MongoDB default.

pub mod todos;
