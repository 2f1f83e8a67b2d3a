//! # Service Module
//!
//! Business logic layer between the HTTP handlers and the repositories.

pub mod todos;
